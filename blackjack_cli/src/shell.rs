//! The interactive front end. A `Shell` reads answers line by line, feeds them to a `Round`
//! and writes whatever the round reports back.

use crate::game::prelude::*;
use crate::write::write_events;
use crate::{GameConfig, SessionError};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

const RULES_URL: &str = "http://en.wikipedia.org/wiki/Blackjack";
const DEFAULT_PLAYER_NAME: &str = "Player";

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Shell<R, W> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Shell {
            input,
            output,
            config,
            rng,
        }
    }

    /// Runs a whole session: the welcome screens, then rounds until the player declines another one.
    /// Closing standard input ends the session cleanly.
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.play_session() {
            Err(SessionError::InputClosed) => {
                tracing::info!("input closed, leaving the table");
                Ok(())
            }
            result => result,
        }
    }

    fn play_session(&mut self) -> Result<(), SessionError> {
        self.type_out("Loading", self.config.typing_delay_ms)?;
        self.type_out(
            "Welcome to blackjack. Please wait while the game loads!...\nEnjoy!",
            0,
        )?;
        self.pause("Press ENTER to continue\n>>>  ")?;
        self.clear()?;

        writeln!(self.output, "Have you ever played Blackjack before?")?;
        writeln!(self.output, "Please respond with yes or no.")?;
        if self.ask(Prompt::YesNo, None)? == Response::No {
            self.show_rules()?;
        }

        let mut rounds = 0u32;
        loop {
            self.play_round()?;
            rounds += 1;

            writeln!(self.output, "\nNew game? Please respond with yes or no.")?;
            if self.ask(Prompt::YesNo, None)? == Response::No {
                break;
            }
        }
        tracing::info!(rounds, "session over");
        Ok(())
    }

    fn play_round(&mut self) -> Result<(), SessionError> {
        self.clear()?;
        writeln!(self.output, "Great, let's play!")?;

        let name = match self.config.player_name.clone() {
            Some(name) => name,
            None => {
                let answer = self.read_answer("What is your name? ")?;
                let answer = answer.trim();
                if answer.is_empty() {
                    DEFAULT_PLAYER_NAME.to_string()
                } else {
                    answer.to_string()
                }
            }
        };

        let deck = Deck::shuffled(&mut self.rng);
        let (mut round, events) = Round::deal(deck, name, self.config.dealer_stands_on);
        writeln!(
            self.output,
            "\nHi {}! Your turn begins now...\n\n",
            round.player().name
        )?;
        self.show(&events)?;

        while round.phase() == Phase::PlayerTurn {
            let response = self.ask(
                Prompt::HitStand,
                Some("\n\nEnter H to HIT or S to STAND: "),
            )?;
            let action = response.action()?;
            let events = round.step(action)?;
            self.show(&events)?;
        }

        self.pause("Press enter to continue... ")?;
        while round.phase() == Phase::DealerTurn {
            let events = round.step(Action::Proceed)?;
            self.show(&events)?;
            if events.contains(&Event::DealerDraws) {
                self.pause("Press enter to continue... ")?;
            }
        }

        let events = round.step(Action::Proceed)?;
        self.show(&events)
    }

    fn show_rules(&mut self) -> Result<(), SessionError> {
        self.clear()?;
        writeln!(
            self.output,
            "\n\nHere are the rules of blackjack: {}",
            RULES_URL
        )?;
        self.pause("\n\nPress Enter to continue... ")
    }

    /// Keeps asking until the answer is valid for `prompt`.
    fn ask(&mut self, prompt: Prompt, message: Option<&str>) -> Result<Response, SessionError> {
        loop {
            let line = match message {
                Some(message) => self.read_answer(message)?,
                None => self.read_line()?,
            };
            match prompt.parse(&line) {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::debug!(%e, "rejected answer");
                    writeln!(self.output, "{}", prompt.reprompt())?;
                }
            }
        }
    }

    fn read_answer(&mut self, message: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    fn pause(&mut self, message: &str) -> Result<(), SessionError> {
        self.read_answer(message).map(|_| ())
    }

    fn show(&mut self, events: &[Event]) -> Result<(), SessionError> {
        write_events(events, self.config.cards_per_row, &mut self.output)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        if self.config.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Writes `text` one character at a time, `delay_ms` apart.
    fn type_out(&mut self, text: &str, delay_ms: u64) -> Result<(), SessionError> {
        for letter in text.chars() {
            write!(self.output, "{}", letter)?;
            self.output.flush()?;
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms));
            }
        }
        writeln!(self.output)?;
        Ok(())
    }
}
