//! Two-player expedition game.
//!
//! - Five suits, each with three wilds and numbered cards
//! - On your turn: play or discard one card, then draw from the deck or
//!   from any suit's discard pile
//! - Play piles must ascend; wilds multiply a suit's score
//! - The game ends the moment the deck runs out

mod builder;
mod game;
mod scoring;

pub use builder::{stacked_deck, GameBuilder};
pub use game::Game;
pub use scoring::{score_plays, ScoreSheet};
