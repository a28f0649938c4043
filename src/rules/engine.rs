//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which moves are legal
//! - How moves modify state
//! - When the game ends and who won

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_move`: Pure, must not mutate anything
/// - `apply_move`: All-or-nothing; a rejected move leaves state untouched
/// - `legal_moves`: Return empty vec if nobody can act
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// A move submitted by a player.
    type Move;
    /// Why a move was rejected.
    type Error;

    /// Whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Validate a move without applying it.
    fn check_move(&self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// Validate and apply a move.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// All moves `check_move` accepts right now.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Check if the game is over and get the result.
    fn is_terminal(&self) -> Option<GameResult>;
}
