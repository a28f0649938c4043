//! Core engine types: players, RNG, configuration, moves, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{DrawSource, Move, MoveAction, MoveRecord};
pub use config::{GameConfig, PipSet, DEFAULT_OPENING_HAND_SIZE, WILDS_PER_SUIT};
pub use error::{MoveError, SetupError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
