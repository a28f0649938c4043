//! Ordered card piles.
//!
//! The deck, each hand, each play pile and each discard pile is a `Pile`.
//! Index 0 is the bottom; the last card is the top and is drawn first.

use serde::{Deserialize, Serialize};

use super::card::{Card, Pip};

/// Base score of any suit a player has started.
pub const EXPEDITION_COST: i32 = -20;

/// An ordered stack of cards.
///
/// ## Usage
///
/// ```
/// use cities_engine::cards::{Card, Pile, Suit};
///
/// let mut pile = Pile::new();
/// pile.add(Card::number(Suit::Red, 3));
/// pile.add(Card::number(Suit::Red, 5));
///
/// assert!(pile.is_highest_card(&Card::number(Suit::Red, 5)));
/// assert!(!pile.is_highest_card(&Card::number(Suit::Red, 4)));
/// assert_eq!(pile.pop(), Some(Card::number(Suit::Red, 5)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural membership test.
    #[must_use]
    pub fn has(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Remove and return the top card, or `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Put a card on top.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first structural match at any position.
    ///
    /// Returns `false` and leaves the pile unchanged if no card matches.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The first card in the pile that ranks strictly above `candidate`.
    #[must_use]
    pub fn blocking_card(&self, candidate: &Card) -> Option<&Card> {
        self.cards
            .iter()
            .find(|c| c.pip.rank() > candidate.pip.rank())
    }

    /// Can `candidate` go on this pile without breaking the ascending order?
    ///
    /// True for an empty pile. Equal ranks are allowed, so a wild may follow
    /// another wild.
    #[must_use]
    pub fn is_highest_card(&self, candidate: &Card) -> bool {
        self.blocking_card(candidate).is_none()
    }

    /// Score of this pile as one suit's expedition.
    ///
    /// Empty piles score 0. Otherwise the pip sum less 20, times one plus
    /// the number of wilds.
    #[must_use]
    pub fn score(&self) -> i32 {
        if self.cards.is_empty() {
            return 0;
        }

        let mut sum = EXPEDITION_COST;
        let mut multiplier = 1;
        for card in &self.cards {
            match card.pip {
                Pip::Wild => multiplier += 1,
                pip => sum += pip.value(),
            }
        }
        sum * multiplier
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card.pip)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn green(n: u8) -> Card {
        Card::number(Suit::Green, n)
    }

    #[test]
    fn test_has() {
        let pile = Pile::from(vec![green(7), Card::wild(Suit::Red)]);

        assert!(pile.has(&green(7)));
        assert!(pile.has(&Card::wild(Suit::Red)));
        assert!(!pile.has(&green(8)));
        assert!(!pile.has(&Card::wild(Suit::Green)));
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut pile = Pile::new();
        pile.add(green(1));
        pile.add(green(2));

        assert_eq!(pile.top(), Some(&green(2)));
        assert_eq!(pile.pop(), Some(green(2)));
        assert_eq!(pile.pop(), Some(green(1)));
        assert_eq!(pile.pop(), None);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_remove_first_match_only() {
        let wild = Card::wild(Suit::Blue);
        let mut pile = Pile::from(vec![wild, green(3), wild]);

        assert!(pile.remove(&wild));
        assert_eq!(pile.cards(), &[green(3), wild]);

        assert!(!pile.remove(&green(9)));
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_is_highest_card() {
        let mut pile = Pile::new();
        assert!(pile.is_highest_card(&Card::wild(Suit::Green)));

        pile.add(Card::wild(Suit::Green));
        assert!(pile.is_highest_card(&Card::wild(Suit::Green)));
        assert!(pile.is_highest_card(&green(1)));

        pile.add(green(7));
        assert!(pile.is_highest_card(&green(7)));
        assert!(pile.is_highest_card(&green(10)));
        assert!(!pile.is_highest_card(&green(6)));
        assert!(!pile.is_highest_card(&Card::wild(Suit::Green)));
        assert_eq!(pile.blocking_card(&green(6)), Some(&green(7)));
    }

    #[test]
    fn test_score_empty() {
        assert_eq!(Pile::new().score(), 0);
    }

    #[test]
    fn test_score_wilds_multiply() {
        let wild = Card::wild(Suit::Green);
        let pile = Pile::from(vec![wild, wild, green(7)]);

        assert_eq!(pile.score(), -39);
        assert_eq!(pile.score(), -39);
    }

    #[test]
    fn test_score_examples() {
        assert_eq!(Pile::from(vec![green(2)]).score(), -18);
        assert_eq!(Pile::from(vec![green(2), green(8), green(10)]).score(), 0);

        let wild = Card::wild(Suit::Green);
        let full: Pile = [wild, wild, wild]
            .into_iter()
            .chain((1..=10).map(green))
            .collect();
        assert_eq!(full.score(), (55 - 20) * 4);
        assert_eq!(Pile::from(vec![wild]).score(), -40);
    }

    #[test]
    fn test_display() {
        let pile = Pile::from(vec![Card::wild(Suit::Red), Card::number(Suit::Red, 8)]);
        assert_eq!(pile.to_string(), "wild 8");
    }
}
