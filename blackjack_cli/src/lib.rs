pub mod game;
pub mod shell;
pub mod write;

pub use game::prelude::*;
pub use shell::Shell;

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod prelude {
    pub use super::{
        game::prelude::*, GameConfig, GameConfigBuilder, GameConfigFile, SessionError, Shell,
    };
}

/// Errors that can end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
    #[error("game error: {0}")]
    Game(#[from] blackjack_lib::BlackjackGameError),
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Standard input was closed, i.e. the player left the table.
    #[error("input closed")]
    InputClosed,
}

/// Struct for configuring a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub player_name: Option<String>,
    pub dealer_stands_on: u32,
    pub cards_per_row: usize,
    pub typing_delay_ms: u64,
    pub clear_screen: bool,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Associated method for returning a new `GameConfigBuilder` object. Fields that are never
    /// set fall back to the standard values of the game.
    pub fn new() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Reads a JSON configuration file and returns a builder primed with its values,
    /// so command line flags can still be applied on top.
    pub fn from_file(path: impl AsRef<Path>) -> Result<GameConfigBuilder, SessionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SessionError::Config(format!("{}: {}", path.display(), e)))?;
        GameConfig::from_json(&text)
    }

    /// Parses a JSON configuration document, see `GameConfigFile` for the accepted keys.
    pub fn from_json(text: &str) -> Result<GameConfigBuilder, SessionError> {
        let file: GameConfigFile =
            serde_json::from_str(text).map_err(|e| SessionError::Config(e.to_string()))?;
        Ok(GameConfigBuilder::from(file))
    }

    /// Checks the values that would otherwise make the game misbehave.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.cards_per_row == 0 {
            return Err(SessionError::Config(
                "cards_per_row must be at least 1".to_string(),
            ));
        }
        if !(1..=blackjack_lib::BLACKJACK).contains(&self.dealer_stands_on) {
            return Err(SessionError::Config(format!(
                "dealer_stands_on must be between 1 and {}, got {}",
                blackjack_lib::BLACKJACK,
                self.dealer_stands_on
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// Returns the standard configuration of the game.
    fn default() -> Self {
        GameConfig::new().build()
    }
}

/// On disk representation of a `GameConfig`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfigFile {
    player_name: Option<String>,
    dealer_stands_on: Option<u32>,
    cards_per_row: Option<usize>,
    typing_delay_ms: Option<u64>,
    clear_screen: Option<bool>,
    seed: Option<u64>,
}

impl From<GameConfigFile> for GameConfigBuilder {
    fn from(value: GameConfigFile) -> Self {
        GameConfigBuilder {
            player_name: value.player_name,
            dealer_stands_on: value.dealer_stands_on,
            cards_per_row: value.cards_per_row,
            typing_delay_ms: value.typing_delay_ms,
            clear_screen: value.clear_screen,
            seed: value.seed,
        }
    }
}

/// Struct to implement builder pattern for `GameConfig`
#[derive(Debug, Clone, Default)]
pub struct GameConfigBuilder {
    player_name: Option<String>,
    dealer_stands_on: Option<u32>,
    cards_per_row: Option<usize>,
    typing_delay_ms: Option<u64>,
    clear_screen: Option<bool>,
    seed: Option<u64>,
}

impl GameConfigBuilder {
    /// Method for presetting the player's name, the game will not ask for it.
    pub fn player_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.player_name = Some(name.into());
        self
    }

    /// Method for setting the score the dealer stands on
    pub fn dealer_stands_on(&mut self, score: u32) -> &mut Self {
        self.dealer_stands_on = Some(score);
        self
    }

    /// Method for setting how many cards are drawn next to each other before wrapping
    pub fn cards_per_row(&mut self, cards: usize) -> &mut Self {
        self.cards_per_row = Some(cards);
        self
    }

    /// Method for setting the delay between characters of the loading banner
    pub fn typing_delay_ms(&mut self, delay: u64) -> &mut Self {
        self.typing_delay_ms = Some(delay);
        self
    }

    /// Method for setting whether the terminal is cleared between screens
    pub fn clear_screen(&mut self, clear: bool) -> &mut Self {
        self.clear_screen = Some(clear);
        self
    }

    /// Method for seeding the shuffle, a seeded game deals the same cards every time
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for building a `GameConfig` object from the given `GameConfigBuilder` object.
    pub fn build(&mut self) -> GameConfig {
        GameConfig {
            player_name: self.player_name.take(),
            dealer_stands_on: self.dealer_stands_on.unwrap_or(DEALER_STANDS_ON),
            cards_per_row: self.cards_per_row.unwrap_or(4),
            typing_delay_ms: self.typing_delay_ms.unwrap_or(1000),
            clear_screen: self.clear_screen.unwrap_or(true),
            seed: self.seed,
        }
    }
}
