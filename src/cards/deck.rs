//! Deck construction.

use super::card::{Card, Suit};
use super::pile::Pile;
use crate::core::{GameRng, PipSet};

/// Every card of the variant, unshuffled: suit by suit, pips in list order.
#[must_use]
pub fn full_card_set(pips: PipSet) -> Vec<Card> {
    let pip_list = pips.pips();
    Suit::ALL
        .into_iter()
        .flat_map(|suit| pip_list.iter().map(move |&pip| Card::new(suit, pip)))
        .collect()
}

/// Build and shuffle the full card set.
///
/// The last card of the returned pile is the top of the deck.
///
/// ```
/// use cities_engine::cards::build_shuffled_deck;
/// use cities_engine::core::{GameRng, PipSet};
///
/// let deck = build_shuffled_deck(PipSet::Standard, &mut GameRng::new(7));
/// assert_eq!(deck.len(), 65);
/// ```
#[must_use]
pub fn build_shuffled_deck(pips: PipSet, rng: &mut GameRng) -> Pile {
    let mut cards = full_card_set(pips);
    rng.shuffle(&mut cards);
    Pile::from(cards)
}
