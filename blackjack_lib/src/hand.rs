//! Scoring of blackjack hands.

use crate::card::Card;

/// Highest score a hand can have without busting.
pub const BLACKJACK: u32 = 21;

/// Computes the blackjack total of `cards`.
///
/// Every ace starts out worth 11. While the total is over 21 and there is still an ace
/// counted as 11, that ace is downgraded to 1. An empty hand scores 0.
pub fn evaluate(cards: &[Card]) -> u32 {
    total_and_soft_aces(cards).0
}

/// Returns true if the hand still counts at least one ace as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    total_and_soft_aces(cards).1 > 0
}

pub fn is_bust(score: u32) -> bool {
    score > BLACKJACK
}

fn total_and_soft_aces(cards: &[Card]) -> (u32, u32) {
    let mut total = 0;
    let mut aces = 0;
    for card in cards {
        total += card.value();
        if card.rank.is_ace() {
            aces += 1;
        }
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total, aces)
}
