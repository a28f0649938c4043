//! Game setup.

use tracing::debug;

use super::game::Game;
use crate::cards::{build_shuffled_deck, Card, Pile};
use crate::core::{GameConfig, GameRng, PipSet, SetupError};

/// Builder for creating a [`Game`].
///
/// ```
/// use cities_engine::core::PipSet;
/// use cities_engine::games::cities::GameBuilder;
///
/// let game = GameBuilder::new()
///     .opening_hand_size(8)
///     .pips(PipSet::NoOnes)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.deck_size(), 60 - 16);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn opening_hand_size(mut self, size: usize) -> Self {
        self.config.opening_hand_size = size;
        self
    }

    pub fn pips(mut self, pips: PipSet) -> Self {
        self.config.pips = pips;
        self
    }

    /// Build a game with a deck shuffled from `seed`.
    pub fn build(self, seed: u64) -> Result<Game, SetupError> {
        let deck = build_shuffled_deck(self.config.pips, &mut GameRng::new(seed));
        debug!(seed, pips = ?self.config.pips, "shuffled deck");
        self.build_from_deck(deck)
    }

    /// Build a game from a prearranged deck. The last card is dealt first.
    ///
    /// The deck does not need to be a complete card set.
    pub fn build_from_deck(self, deck: Pile) -> Result<Game, SetupError> {
        let hand_size = self.config.opening_hand_size;
        if hand_size == 0 {
            return Err(SetupError::EmptyHand);
        }
        if hand_size
            .checked_mul(2)
            .map_or(true, |dealt| deck.len() <= dealt)
        {
            return Err(SetupError::DeckTooSmall {
                cards: deck.len(),
                hand_size,
            });
        }
        Ok(Game::deal(self.config, deck))
    }
}

/// Arrange a deck so the deal hands out `player1` and `player2` in order,
/// after which moves draw `draws` in order.
///
/// Both hands must have the same length, otherwise
/// `SetupError::UnevenHands` is returned.
///
/// ```
/// use cities_engine::cards::{Card, Suit};
/// use cities_engine::core::PlayerId;
/// use cities_engine::games::cities::{stacked_deck, GameBuilder};
///
/// let deck = stacked_deck(
///     &[Card::number(Suit::Green, 7)],
///     &[Card::number(Suit::Red, 2)],
///     &[Card::wild(Suit::Blue)],
/// )
/// .unwrap();
/// let game = GameBuilder::new().opening_hand_size(1).build_from_deck(deck).unwrap();
///
/// assert_eq!(game.hand(PlayerId::Player1).cards(), &[Card::number(Suit::Green, 7)]);
/// assert_eq!(game.hand(PlayerId::Player2).cards(), &[Card::number(Suit::Red, 2)]);
/// ```
pub fn stacked_deck(player1: &[Card], player2: &[Card], draws: &[Card]) -> Result<Pile, SetupError> {
    if player1.len() != player2.len() {
        return Err(SetupError::UnevenHands {
            player1: player1.len(),
            player2: player2.len(),
        });
    }

    let mut draw_order: Vec<Card> = player1
        .iter()
        .zip(player2)
        .flat_map(|(a, b)| [*a, *b])
        .collect();
    draw_order.extend_from_slice(draws);
    Ok(draw_order.into_iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::PlayerId;

    #[test]
    fn test_build_default() {
        let game = GameBuilder::new().build(42).unwrap();

        assert_eq!(game.hand(PlayerId::Player1).len(), 5);
        assert_eq!(game.hand(PlayerId::Player2).len(), 5);
        assert_eq!(game.deck_size(), 55);
        assert_eq!(game.current_turn(), PlayerId::Player1);
        assert!(!game.is_done());
    }

    #[test]
    fn test_build_matches_new() {
        assert_eq!(GameBuilder::new().build(9).unwrap(), Game::new(9));
    }

    #[test]
    fn test_build_rejects_empty_hand() {
        assert_eq!(
            GameBuilder::new().opening_hand_size(0).build(1),
            Err(SetupError::EmptyHand)
        );
    }

    #[test]
    fn test_build_rejects_small_deck() {
        let deck = stacked_deck(&[Card::number(Suit::Red, 1)], &[Card::number(Suit::Red, 2)], &[]).unwrap();

        assert_eq!(
            GameBuilder::new().opening_hand_size(1).build_from_deck(deck),
            Err(SetupError::DeckTooSmall { cards: 2, hand_size: 1 })
        );
        assert_eq!(
            GameBuilder::new().opening_hand_size(33).build(1),
            Err(SetupError::DeckTooSmall { cards: 65, hand_size: 33 })
        );
    }

    #[test]
    fn test_build_rejects_huge_hand_without_overflow() {
        for hand_size in [usize::MAX, usize::MAX / 2 + 1, usize::MAX / 2] {
            assert_eq!(
                GameBuilder::new().opening_hand_size(hand_size).build(1),
                Err(SetupError::DeckTooSmall { cards: 65, hand_size })
            );
        }
    }

    #[test]
    fn test_stacked_deck_order() {
        let a = Card::number(Suit::Red, 1);
        let b = Card::number(Suit::Red, 2);
        let c = Card::number(Suit::Red, 3);
        let d = Card::number(Suit::Red, 4);
        let e = Card::number(Suit::Red, 5);

        let deck = stacked_deck(&[a, c], &[b, d], &[e]).unwrap();
        assert_eq!(deck.cards(), &[e, d, c, b, a]);
    }

    #[test]
    fn test_stacked_deck_rejects_uneven_hands() {
        let a = Card::number(Suit::Red, 1);
        let b = Card::number(Suit::Red, 2);

        assert_eq!(
            stacked_deck(&[a, a], &[b], &[]),
            Err(SetupError::UnevenHands { player1: 2, player2: 1 })
        );
    }
}
