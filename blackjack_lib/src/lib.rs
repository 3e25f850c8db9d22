//! Card, deck and player model for a game of blackjack, along with the hand evaluator
//! that scores a hand.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::BLACKJACK;
pub use player::Player;

use thiserror::Error;

/// Errors produced by the blackjack model and the game logic built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackjackGameError {
    /// A card was requested from a deck with no cards left.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    /// A response could not be understood for the question that was asked.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),
    /// A game action was submitted in a phase that does not accept it.
    #[error("{action} is not allowed during {phase}")]
    UnexpectedAction { action: String, phase: String },
}
