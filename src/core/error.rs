//! Error types.
//!
//! All rejections are values. A rejected move leaves the game untouched.

use thiserror::Error;

use super::action::DrawSource;
use super::player::PlayerId;
use crate::cards::Card;

/// Why a move was rejected, or why its textual form could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("wrong turn: it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: PlayerId, got: PlayerId },

    #[error("card {0} is not in hand")]
    CardNotInHand(Card),

    #[error("invalid action {0:?}, must be play or discard")]
    InvalidAction(String),

    #[error("cannot play {card}: {top} has already been played in that pile")]
    CardTooLow { card: Card, top: Card },

    #[error("cannot draw from empty pile {0}")]
    EmptyDrawPile(DrawSource),

    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    #[error("unknown suit {0:?}")]
    UnknownSuit(String),

    #[error("unknown pip {0:?}")]
    UnknownPip(String),

    #[error("unknown draw pile {0:?}")]
    UnknownDrawSource(String),
}

/// Why a game could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("deck of {cards} cards cannot deal two hands of {hand_size} and leave a card to draw")]
    DeckTooSmall { cards: usize, hand_size: usize },

    #[error("opening hand size must be at least 1")]
    EmptyHand,

    #[error("stacked hands differ in size: {player1} and {player2}")]
    UnevenHands { player1: usize, player2: usize },
}
