//! Card system: cards and pip ordering, piles, deck building.
//!
//! ## Key Types
//!
//! - `Suit` / `SuitMap`: the five colors and per-color storage
//! - `Pip` / `Card`: card values and the ascending rule
//! - `Pile`: ordered stack used for every location a card can be in

pub mod card;
pub mod deck;
pub mod pile;

pub use card::{Card, Pip, Suit, SuitMap};
pub use deck::{build_shuffled_deck, full_card_set};
pub use pile::{Pile, EXPEDITION_COST};
