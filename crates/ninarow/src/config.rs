//! Game configuration.

use crate::action::GameError;
use crate::types::{DEFAULT_SYMBOLS, Mark, SymbolTable};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Starting parameters for a session.
///
/// Every field has a default, so a TOML file only needs to name what it
/// changes:
///
/// ```toml
/// win_size = 4
/// players = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Initial edge length of the board.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Length of a winning run.
    #[serde(default = "default_win_size")]
    win_size: usize,

    /// Number of players taking turns.
    #[serde(default = "default_players")]
    players: usize,

    /// Player marks in turn order.
    #[serde(default = "default_symbols")]
    symbols: Vec<Mark>,
}

fn default_grid_size() -> usize {
    3
}

fn default_win_size() -> usize {
    3
}

fn default_players() -> usize {
    2
}

fn default_symbols() -> Vec<Mark> {
    DEFAULT_SYMBOLS.into_iter().map(Mark::new).collect()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            win_size: default_win_size(),
            players: default_players(),
            symbols: default_symbols(),
        }
    }
}

impl GameConfig {
    /// Sets the initial board size.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the winning run length.
    pub fn with_win_size(mut self, win_size: usize) -> Self {
        self.win_size = win_size;
        self
    }

    /// Sets the number of players.
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the player marks, in turn order.
    pub fn with_symbols(mut self, symbols: Vec<Mark>) -> Self {
        self.symbols = symbols;
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// The file is only parsed here; call [`GameConfig::validate`] or
    /// [`crate::Session::with_config`] to check the values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            grid_size = config.grid_size,
            win_size = config.win_size,
            players = config.players,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Checks that the values describe a playable session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] for a zero grid size,
    /// win size or player count, an empty or repeating symbol list, or more
    /// players than symbols.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<SymbolTable, GameError> {
        if self.grid_size == 0 {
            return Err(GameError::InvalidConfiguration(
                "grid size must be positive".to_string(),
            ));
        }
        validate_win_size(self.win_size)?;
        let symbols = SymbolTable::new(self.symbols.clone())?;
        validate_players(self.players, &symbols)?;
        Ok(symbols)
    }
}

/// Rejects a zero win size.
pub(crate) fn validate_win_size(win_size: usize) -> Result<(), GameError> {
    if win_size == 0 {
        Err(GameError::InvalidConfiguration(
            "win size must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Rejects a zero player count or one the symbol table cannot cover.
pub(crate) fn validate_players(players: usize, symbols: &SymbolTable) -> Result<(), GameError> {
    if players == 0 {
        return Err(GameError::InvalidConfiguration(
            "player count must be positive".to_string(),
        ));
    }
    if players > symbols.len() {
        return Err(GameError::InvalidConfiguration(format!(
            "{} players but only {} symbols",
            players,
            symbols.len()
        )));
    }
    Ok(())
}

/// Configuration file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.grid_size(), 3);
        assert_eq!(*config.win_size(), 3);
        assert_eq!(*config.players(), 2);
        assert_eq!(config.symbols().len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml("win_size = 4\nplayers = 3\n").unwrap();
        assert_eq!(*config.win_size(), 4);
        assert_eq!(*config.players(), 3);
        assert_eq!(*config.grid_size(), 3);
    }

    #[test]
    fn test_custom_symbols() {
        let config = GameConfig::from_toml("symbols = [\"a\", \"b\"]\n").unwrap();
        let table = config.validate().unwrap();
        assert_eq!(table.marks(), &[Mark::new('a'), Mark::new('b')]);
    }

    #[test]
    fn test_malformed_toml() {
        let err = GameConfig::from_toml("win_size = \"three\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = GameConfig::default();
        for bad in [
            base.clone().with_grid_size(0),
            base.clone().with_win_size(0),
            base.clone().with_players(0),
            base.clone().with_players(5),
            base.clone().with_symbols(vec![]),
        ] {
            assert!(
                matches!(bad.validate(), Err(GameError::InvalidConfiguration(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
