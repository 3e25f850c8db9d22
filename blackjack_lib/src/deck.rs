use crate::card::{Card, Rank, Suit};
use crate::BlackjackGameError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Display;

/// Number of cards in a single standard deck.
pub const DECK_SIZE: usize = 52;

/// A single shuffled 52 card deck. Cards are drawn from the top, which is the end of the
/// underlying vector, and the deck is never refilled.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Associated function that builds a fresh deck shuffled with the thread local generator.
    pub fn new() -> Deck {
        Deck::shuffled(&mut rand::thread_rng())
    }

    /// Builds every rank and suit combination and shuffles it with `rng`.
    /// A seeded generator produces the same order every time.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Deck {
        let mut cards = Deck::ordered_cards();
        cards.shuffle(rng);
        tracing::debug!(size = cards.len(), "built and shuffled a new deck");
        Deck { cards }
    }

    /// All 52 cards in rank major order, unshuffled.
    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the card on top of the deck.
    pub fn draw(&mut self) -> Result<Card, BlackjackGameError> {
        self.cards.pop().ok_or(BlackjackGameError::EmptyDeck)
    }

    /// Number of cards left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterator over the remaining cards, bottom of the deck first.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
