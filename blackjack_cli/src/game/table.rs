use blackjack_lib::hand::is_bust;
use std::fmt::Display;

/// Score at which the house stops drawing cards.
pub const DEALER_STANDS_ON: u32 = 17;

/// The four ways a round of blackjack can end, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    DealerBusts,
    PlayerLoses,
    PlayerWins,
    Tie,
}

impl Outcome {
    /// Returns true for both of the outcomes that go the player's way.
    pub fn player_won(&self) -> bool {
        matches!(self, Outcome::DealerBusts | Outcome::PlayerWins)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Outcome::DealerBusts => "Dealer busts. Player wins.",
            Outcome::PlayerLoses => "Player loses.",
            Outcome::PlayerWins => "Player wins.",
            Outcome::Tie => "Tie.",
        };
        write!(f, "{}", message)
    }
}

/// Decides the result of a round from both final scores.
///
/// The dealer bust check comes first, so when both hands are over 21 the player still wins.
pub fn determine_winner(player_score: u32, dealer_score: u32) -> Outcome {
    if is_bust(dealer_score) {
        Outcome::DealerBusts
    } else if is_bust(player_score) || player_score < dealer_score {
        Outcome::PlayerLoses
    } else if player_score > dealer_score {
        Outcome::PlayerWins
    } else {
        Outcome::Tie
    }
}

/// The house policy: keep drawing while below `stands_on`.
pub fn dealer_should_hit(dealer_score: u32, stands_on: u32) -> bool {
    dealer_score < stands_on
}
