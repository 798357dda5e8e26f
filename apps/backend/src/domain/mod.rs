//! Domain layer: the Aces card engine. Pure, no I/O; randomness is always
//! supplied by the caller.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod rules;
pub mod status;

#[cfg(test)]
mod tests_game;

// Re-exports for ergonomics
pub use cards_types::{Card, CardKind, CardName};
pub use deck::{build_deck, Draw};
pub use game::{AcesGame, PersistedGame};
pub use rules::{DECK_SIZE, HAND_SIZE, MAX_ROUND};
pub use status::GameStatus;
