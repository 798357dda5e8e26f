//! Player-facing game status.

use super::game::AcesGame;
use super::rules::MAX_ROUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Aces remain in the deck.
    Active,
    /// The last card dealt held an ace.
    Won,
    /// No aces left in the deck but cards remain to be dealt.
    AcesExhausted,
    /// Deck fully dealt without an ace in the final hand.
    Lost,
}

impl GameStatus {
    pub fn of(game: &AcesGame) -> Self {
        if !game.finished() {
            GameStatus::Active
        } else if game.user_won() {
            GameStatus::Won
        } else if game.round() < MAX_ROUND {
            GameStatus::AcesExhausted
        } else {
            GameStatus::Lost
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            GameStatus::Active => "Check gameStatus for your hand. Game is still active!",
            GameStatus::Won => "Winner!",
            GameStatus::AcesExhausted => {
                "Game over. All the aces have been dealt. You can still call deal() if you're curious to see what you'll get."
            }
            GameStatus::Lost => "You lost. Better luck next time!",
        }
    }
}
