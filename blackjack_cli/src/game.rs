//! Module that implements a single round of blackjack as a state machine. The round never
//! touches the console: every transition takes an `Action` and returns the `Event`s a front end
//! should display, which keeps the whole game testable without simulating input streams.

pub mod response;
pub mod table;
pub mod prelude {
    pub use super::response::{Prompt, Response};
    pub use super::table::{dealer_should_hit, determine_winner, Outcome, DEALER_STANDS_ON};
    pub use super::{Action, Event, HandView, Phase, Round};
    pub use blackjack_lib::{BlackjackGameError, Card, Deck, Player};
}

use blackjack_lib::{BlackjackGameError, Card, Deck, Player};
use std::fmt::Display;
use table::{dealer_should_hit, determine_winner, Outcome};

/// Number of cards each participant receives before the first turn.
pub const INITIAL_CARDS: usize = 2;

/// The phases a round moves through. `Finished` carries the result once the hands are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Showdown,
    Finished(Outcome),
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::PlayerTurn => write!(f, "the player's turn"),
            Phase::DealerTurn => write!(f, "the dealer's turn"),
            Phase::Showdown => write!(f, "the showdown"),
            Phase::Finished(_) => write!(f, "a finished round"),
        }
    }
}

/// Inputs to the state machine. `Proceed` advances the phases that need no decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
    Proceed,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Hit => write!(f, "hit"),
            Action::Stand => write!(f, "stand"),
            Action::Proceed => write!(f, "proceed"),
        }
    }
}

/// Snapshot of a hand for display. When `hide_hole_cards` is set only the first card is face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    pub name: String,
    pub cards: Vec<Card>,
    pub score: u32,
    pub hide_hole_cards: bool,
}

impl HandView {
    fn of(player: &Player, hide_hole_cards: bool) -> HandView {
        HandView {
            name: player.name.clone(),
            cards: player.hand().to_vec(),
            score: player.score(),
            hide_hole_cards,
        }
    }
}

/// Everything a transition wants shown to the user, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Hand(HandView),
    Hit,
    Stood,
    Bust { name: String },
    DeckExhausted,
    PlayerTurnFinished,
    DealerTurnBegins,
    DealerDraws,
    Showdown { player: HandView, dealer: HandView },
    Outcome(Outcome),
}

/// One round at the table: a fresh deck, the player and the dealer.
pub struct Round {
    deck: Deck,
    player: Player,
    dealer: Player,
    phase: Phase,
    dealer_stands_on: u32,
    dealer_hand_shown: bool,
}

impl Round {
    /// Sets up a round: the player and then the dealer are each dealt two cards from `deck`.
    /// Returns the round, waiting on the player's first decision, and the events to display.
    pub fn deal(
        deck: Deck,
        player_name: impl Into<String>,
        dealer_stands_on: u32,
    ) -> (Round, Vec<Event>) {
        let mut round = Round {
            deck,
            player: Player::new(player_name, false),
            dealer: Player::dealer(),
            phase: Phase::PlayerTurn,
            dealer_stands_on,
            dealer_hand_shown: false,
        };

        round.player.draw_cards(INITIAL_CARDS, &mut round.deck);
        round.dealer.draw_cards(INITIAL_CARDS, &mut round.deck);
        round.player.evaluate_hand();
        round.dealer.evaluate_hand();
        tracing::info!(
            player = %round.player,
            dealer_score = round.dealer.score(),
            remaining = round.deck.len(),
            "dealt a new round"
        );

        let events = vec![Event::Hand(HandView::of(&round.player, false))];
        (round, events)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The result of the round, once the showdown has happened.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Applies `action` to the round. Actions that make no sense in the current phase are
    /// rejected and leave the round untouched.
    pub fn step(&mut self, action: Action) -> Result<Vec<Event>, BlackjackGameError> {
        match (self.phase, action) {
            (Phase::PlayerTurn, Action::Hit) => Ok(self.hit()),
            (Phase::PlayerTurn, Action::Stand) => Ok(self.stand()),
            (Phase::DealerTurn, Action::Proceed) => Ok(self.dealer_step()),
            (Phase::Showdown, Action::Proceed) => Ok(self.showdown()),
            (phase, action) => Err(BlackjackGameError::UnexpectedAction {
                action: action.to_string(),
                phase: phase.to_string(),
            }),
        }
    }

    fn hit(&mut self) -> Vec<Event> {
        let mut events = vec![Event::Hit];
        if self.player.draw_cards(1, &mut self.deck) == 0 {
            events.push(Event::DeckExhausted);
        }
        let score = self.player.evaluate_hand();
        tracing::debug!(score, "player hits");
        events.push(Event::Hand(HandView::of(&self.player, false)));

        if self.player.is_bust() {
            events.push(Event::Bust {
                name: self.player.name.clone(),
            });
            events.extend(self.end_player_turn());
        }
        events
    }

    fn stand(&mut self) -> Vec<Event> {
        tracing::debug!(score = self.player.score(), "player stands");
        let mut events = vec![Event::Stood];
        events.extend(self.end_player_turn());
        events
    }

    fn end_player_turn(&mut self) -> Vec<Event> {
        self.phase = Phase::DealerTurn;
        vec![Event::PlayerTurnFinished, Event::DealerTurnBegins]
    }

    /// The first step shows the dealer's hand, every later step draws one card.
    /// The dealer's turn ends once the policy says stand or the deck has run dry.
    fn dealer_step(&mut self) -> Vec<Event> {
        let mut events = vec![];
        if self.dealer_hand_shown {
            if self.dealer.draw_cards(1, &mut self.deck) == 0 {
                events.push(Event::DeckExhausted);
                self.phase = Phase::Showdown;
                return events;
            }
            self.dealer.evaluate_hand();
            events.push(Event::DealerDraws);
        }
        self.dealer_hand_shown = true;
        events.push(Event::Hand(HandView::of(&self.dealer, true)));

        let score = self.dealer.score();
        if !dealer_should_hit(score, self.dealer_stands_on) {
            tracing::debug!(score, "dealer turn over");
            if self.dealer.is_bust() {
                events.push(Event::Bust {
                    name: self.dealer.name.clone(),
                });
            }
            self.phase = Phase::Showdown;
        }
        events
    }

    fn showdown(&mut self) -> Vec<Event> {
        let outcome = determine_winner(self.player.score(), self.dealer.score());
        tracing::info!(
            player_score = self.player.score(),
            dealer_score = self.dealer.score(),
            %outcome,
            player_won = outcome.player_won(),
            "round finished"
        );
        self.phase = Phase::Finished(outcome);
        vec![
            Event::Showdown {
                player: HandView::of(&self.player, false),
                dealer: HandView::of(&self.dealer, false),
            },
            Event::Outcome(outcome),
        ]
    }
}
