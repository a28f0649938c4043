//! Cards, suits, pips and the pip ordering.
//!
//! ## Pip ordering
//!
//! Wilds rank 0, numbers rank by value, so `10` is above `9`. The ordering
//! only matters inside a single suit's play pile.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::core::MoveError;

/// One of the five expedition colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Yellow,
    White,
    Blue,
    Green,
    Red,
}

impl Suit {
    /// Every suit, in deck-building order.
    pub const ALL: [Suit; 5] = [Suit::Yellow, Suit::White, Suit::Blue, Suit::Green, Suit::Red];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Yellow => "yellow",
            Suit::White => "white",
            Suit::Blue => "blue",
            Suit::Green => "green",
            Suit::Red => "red",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == wanted || suit.name()[..1] == wanted)
            .ok_or_else(|| MoveError::UnknownSuit(s.to_string()))
    }
}

/// Per-suit storage with one independently owned slot per suit.
///
/// ```
/// use cities_engine::cards::{Suit, SuitMap};
///
/// let mut counts: SuitMap<u32> = SuitMap::default();
/// counts[Suit::Blue] += 2;
/// assert_eq!(counts[Suit::Blue], 2);
/// assert_eq!(counts[Suit::Red], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 5],
}

impl<T> SuitMap<T> {
    /// Create a new SuitMap with values from a factory function.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: Suit::ALL.map(factory),
        }
    }

    /// Iterate over (Suit, &T) pairs in suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the values in suit order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &Self::Output {
        &self.data[suit.index()]
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut Self::Output {
        &mut self.data[suit.index()]
    }
}

/// The rank label of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pip {
    /// Wager card. Ranks lowest, multiplies the suit's score.
    Wild,
    /// Numbered card, 1 through 10.
    Number(u8),
}

impl Pip {
    /// Ordinal used by the ascending rule.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Pip::Wild => 0,
            Pip::Number(n) => n,
        }
    }

    /// Points this pip adds to a suit's sum. Wilds add none.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Pip::Wild => 0,
            Pip::Number(n) => n as i32,
        }
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Pip::Wild)
    }

    /// "Is not lower than": reflexive, so equal ranks count as higher.
    #[must_use]
    pub const fn higher_than(self, other: Pip) -> bool {
        self.rank() >= other.rank()
    }
}

impl std::fmt::Display for Pip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pip::Wild => write!(f, "wild"),
            Pip::Number(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Pip {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if ["s", "w", "wild", "*"]
            .iter()
            .any(|label| trimmed.eq_ignore_ascii_case(label))
        {
            return Ok(Pip::Wild);
        }
        match trimmed.parse::<u8>() {
            Ok(n @ 1..=10) => Ok(Pip::Number(n)),
            _ => Err(MoveError::UnknownPip(s.to_string())),
        }
    }
}

/// A card. Equality is structural; the full set repeats some cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub pip: Pip,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, pip: Pip) -> Self {
        Self { suit, pip }
    }

    /// Shorthand for a wild card of `suit`.
    #[must_use]
    pub const fn wild(suit: Suit) -> Self {
        Self::new(suit, Pip::Wild)
    }

    /// Shorthand for a numbered card of `suit`.
    #[must_use]
    pub const fn number(suit: Suit, n: u8) -> Self {
        Self::new(suit, Pip::Number(n))
    }

    /// Suit-independent pip comparison, see [`Pip::higher_than`].
    #[must_use]
    pub const fn higher_than(&self, other: &Card) -> bool {
        self.pip.higher_than(other.pip)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit, self.pip)
    }
}

/// Parses "green 7", "green:7" or "red s".
impl FromStr for Card {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ':')
            .filter(|part| !part.is_empty());
        let suit = parts
            .next()
            .ok_or_else(|| MoveError::UnknownSuit(s.to_string()))?
            .parse()?;
        let pip = parts
            .next()
            .ok_or_else(|| MoveError::UnknownPip(s.to_string()))?
            .parse()?;
        if parts.next().is_some() {
            return Err(MoveError::UnknownPip(s.to_string()));
        }
        Ok(Card { suit, pip })
    }
}
