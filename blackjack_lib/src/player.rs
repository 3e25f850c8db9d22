use crate::card::Card;
use crate::deck::Deck;
use crate::hand;
use std::fmt::Display;

/// Struct for a participant at the table, either the human player or the dealer.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    hand: Vec<Card>,
    score: u32,
    dealer: bool,
}

impl Player {
    /// Associated function to create a new `Player` with an empty hand.
    pub fn new(name: impl Into<String>, dealer: bool) -> Player {
        Player {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
            dealer,
        }
    }

    /// Convenience constructor for the house.
    pub fn dealer() -> Player {
        Player::new("Dealer", true)
    }

    /// Draws up to `n` cards from `deck` into the hand, in draw order.
    /// Stops quietly when the deck runs out and returns how many cards were actually drawn.
    pub fn draw_cards(&mut self, n: usize, deck: &mut Deck) -> usize {
        let mut drawn = 0;
        for _ in 0..n {
            match deck.draw() {
                Ok(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                Err(_) => {
                    tracing::warn!(player = %self.name, requested = n, drawn, "deck exhausted");
                    break;
                }
            }
        }
        drawn
    }

    /// Recomputes the score of the current hand, stores it and returns it.
    pub fn evaluate_hand(&mut self) -> u32 {
        self.score = hand::evaluate(&self.hand);
        self.score
    }

    /// Score as of the last call to `evaluate_hand`.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn is_dealer(&self) -> bool {
        self.dealer
    }

    pub fn is_bust(&self) -> bool {
        hand::is_bust(self.score)
    }

    /// Method to reset the hand after a complete round.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.score = 0;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .hand
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}: [{}] ({})", self.name, cards, self.score)
    }
}
