//! Move representation.
//!
//! A move is one whole turn: the acting player puts one card from hand either
//! onto their own play pile (Play) or onto the shared discard pile of its suit
//! (Discard), then draws one card from a named draw source.
//!
//! ```
//! use cities_engine::cards::{Card, Pip, Suit};
//! use cities_engine::core::{DrawSource, Move, MoveAction, PlayerId};
//!
//! let mv = Move::parse("player1", "green 7", "play", "deck").unwrap();
//! assert_eq!(mv, Move {
//!     player: PlayerId::Player1,
//!     card: Card::new(Suit::Green, Pip::Number(7)),
//!     action: MoveAction::Play,
//!     draw: DrawSource::Deck,
//! });
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::MoveError;
use super::player::PlayerId;
use crate::cards::{Card, Suit};

/// Where the played card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAction {
    /// Onto the acting player's play pile for the card's suit.
    Play,
    /// Onto the shared discard pile for the card's suit.
    Discard,
}

impl MoveAction {
    pub const ALL: [MoveAction; 2] = [MoveAction::Play, MoveAction::Discard];
}

impl std::fmt::Display for MoveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveAction::Play => write!(f, "play"),
            MoveAction::Discard => write!(f, "discard"),
        }
    }
}

impl FromStr for MoveAction {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "play" | "p" => Ok(MoveAction::Play),
            "discard" | "d" => Ok(MoveAction::Discard),
            _ => Err(MoveError::InvalidAction(s.to_string())),
        }
    }
}

/// Numeric action codes: 1 = play, 2 = discard.
impl TryFrom<u8> for MoveAction {
    type Error = MoveError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MoveAction::Play),
            2 => Ok(MoveAction::Discard),
            _ => Err(MoveError::InvalidAction(code.to_string())),
        }
    }
}

/// Where the end-of-turn card is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    /// The hidden shared deck.
    Deck,
    /// The shared discard pile of a suit.
    Discard(Suit),
}

impl DrawSource {
    /// The deck followed by every discard pile.
    pub fn all() -> impl Iterator<Item = DrawSource> {
        std::iter::once(DrawSource::Deck).chain(Suit::ALL.into_iter().map(DrawSource::Discard))
    }
}

impl std::fmt::Display for DrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSource::Deck => write!(f, "deck"),
            DrawSource::Discard(suit) => write!(f, "{suit}"),
        }
    }
}

impl FromStr for DrawSource {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("deck") || trimmed.eq_ignore_ascii_case("d") {
            return Ok(DrawSource::Deck);
        }
        s.parse::<Suit>()
            .map(DrawSource::Discard)
            .map_err(|_| MoveError::UnknownDrawSource(s.to_string()))
    }
}

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player submitting the move.
    pub player: PlayerId,
    /// The card taken out of that player's hand.
    pub card: Card,
    /// Play or discard.
    pub action: MoveAction,
    /// Where to draw the replacement card from.
    pub draw: DrawSource,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(player: PlayerId, card: Card, action: MoveAction, draw: DrawSource) -> Self {
        Self {
            player,
            card,
            action,
            draw,
        }
    }

    /// Decode a move from its four textual fields.
    pub fn parse(player: &str, card: &str, action: &str, draw: &str) -> Result<Self, MoveError> {
        Ok(Self {
            player: player.parse()?,
            card: card.parse()?,
            action: action.parse()?,
            draw: draw.parse()?,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}s {}, draws from {}",
            self.player, self.action, self.card, self.draw
        )
    }
}

/// A successfully applied move, kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    /// The move that was applied.
    pub mv: Move,
    /// The card the player drew at the end of the move.
    pub drawn: Card,
}
