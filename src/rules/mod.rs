//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves modify state
//! - Win/loss conditions

pub mod engine;

pub use engine::{GameResult, RulesEngine};
