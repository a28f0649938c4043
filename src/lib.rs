//! # cities-engine
//!
//! A rules engine for a two-player expedition card game.
//!
//! Players take turns putting one card from hand onto their own per-suit
//! play pile or onto the shared per-suit discard pile, then draw a card from
//! the deck or from any discard pile. Play piles must ascend. When the deck
//! runs out the game is over and each suit is scored.
//!
//! ## Design Principles
//!
//! 1. **Closed identities**: suits, players, actions and draw sources are
//!    enums, so every dispatch is checked for exhaustiveness.
//!
//! 2. **Single ownership**: the `Game` owns every pile by value. Per-suit
//!    piles live in a `SuitMap`, one slot per suit.
//!
//! 3. **Deterministic**: the deck is shuffled from an explicit seed. The
//!    same seed always produces the same game.
//!
//! 4. **All-or-nothing moves**: a rejected move is an error value and leaves
//!    the game untouched.
//!
//! The engine does no I/O. Rendering and input belong to the caller, which
//! reads state through the query methods on `Game` and submits `Move`s.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, moves, errors
//! - `cards`: Cards, pip ordering, piles, deck building
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The game itself, setup and scoring
//!
//! ## Example
//!
//! ```
//! use cities_engine::{Game, PlayerId};
//!
//! let mut game = Game::new(42);
//! while !game.is_done() {
//!     let mv = game.legal_moves()[0];
//!     game.play_move(&mv).unwrap();
//! }
//! let _ = (game.score(PlayerId::Player1), game.score(PlayerId::Player2));
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DrawSource, GameConfig, GameRng, Move, MoveAction, MoveError, MoveRecord, PipSet, PlayerId,
    PlayerMap, SetupError,
};

pub use crate::cards::{build_shuffled_deck, Card, Pile, Pip, Suit, SuitMap};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::cities::{score_plays, stacked_deck, Game, GameBuilder, ScoreSheet};
