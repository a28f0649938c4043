//! Game configuration types.
//!
//! The suit list is fixed; what varies between table variants is the pip
//! list of each suit and the size of the opening hands.

use serde::{Deserialize, Serialize};

use crate::cards::Pip;

/// Default number of cards dealt to each player.
pub const DEFAULT_OPENING_HAND_SIZE: usize = 5;

/// Number of wild cards per suit in every variant.
pub const WILDS_PER_SUIT: usize = 3;

/// The pip list of one suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipSet {
    /// Three wilds and 1..=10, 13 cards per suit.
    #[default]
    Standard,
    /// Three wilds and 2..=10, 12 cards per suit.
    NoOnes,
}

impl PipSet {
    /// Every pip of one suit, wilds first, with repeats.
    #[must_use]
    pub fn pips(self) -> Vec<Pip> {
        let lowest = match self {
            PipSet::Standard => 1,
            PipSet::NoOnes => 2,
        };
        std::iter::repeat(Pip::Wild)
            .take(WILDS_PER_SUIT)
            .chain((lowest..=10).map(Pip::Number))
            .collect()
    }

    /// Number of cards in one suit.
    #[must_use]
    pub fn cards_per_suit(self) -> usize {
        match self {
            PipSet::Standard => 13,
            PipSet::NoOnes => 12,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player before the first move.
    pub opening_hand_size: usize,

    /// Pip list used for every suit.
    pub pips: PipSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening_hand_size: DEFAULT_OPENING_HAND_SIZE,
            pips: PipSet::Standard,
        }
    }
}
