//! Host configuration loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{CoinFlip, FixedCoin, Player, RandomCoin};
use tracing::{debug, info, instrument};

/// Boxed starting-player source chosen from configuration.
pub type BoxedCoin = Box<dyn FnMut() -> Player + Send>;

/// Player name as written in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// Cross moves first.
    X,
    /// Circle moves first.
    O,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::X => Player::Cross,
            FirstPlayer::O => Player::Circle,
        }
    }
}

/// Configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Fixed first player; a coin is flipped when absent.
    #[serde(default)]
    first_player: Option<FirstPlayer>,

    /// Seed for the coin flip; entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            first_player: None,
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file. A missing file yields defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, first_player: Option<FirstPlayer>, seed: Option<u64>) -> Self {
        if first_player.is_some() {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the starting-player source this configuration describes.
    #[instrument(skip(self), fields(first_player = ?self.first_player, seed = ?self.seed))]
    pub fn coin(&self) -> BoxedCoin {
        match (self.first_player, self.seed) {
            (Some(first), _) => {
                let mut coin = FixedCoin(first.into());
                Box::new(move || coin.flip())
            }
            (None, Some(seed)) => {
                let mut coin = RandomCoin::seeded(seed);
                Box::new(move || coin.flip())
            }
            (None, None) => {
                let mut coin = RandomCoin::from_entropy();
                Box::new(move || coin.flip())
            }
        }
    }
}

/// Configuration error.
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_full_toml() {
        let config = CliConfig::from_toml(
            r#"
            first_player = "o"
            seed = 12
            log_filter = "tictactoe_core=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.first_player(), &Some(FirstPlayer::O));
        assert_eq!(config.seed(), &Some(12));
        assert_eq!(config.log_filter(), "tictactoe_core=debug");
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = CliConfig::from_toml("first_player = \"z\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = CliConfig::from_toml("first_player = \"x\"\nseed = 1")
            .unwrap()
            .with_overrides(Some(FirstPlayer::O), None);
        assert_eq!(config.first_player(), &Some(FirstPlayer::O));
        assert_eq!(config.seed(), &Some(1));
    }

    #[test]
    fn test_fixed_first_player_coin() {
        let config = CliConfig::default().with_overrides(Some(FirstPlayer::O), None);
        let mut coin = config.coin();
        assert_eq!(coin(), Player::Circle);
        assert_eq!(coin(), Player::Circle);
    }

    #[test]
    fn test_seeded_coin_repeats() {
        let config = CliConfig::default().with_overrides(None, Some(99));
        let mut a = config.coin();
        let mut b = config.coin();
        let first: Vec<_> = (0..8).map(|_| a()).collect();
        let second: Vec<_> = (0..8).map(|_| b()).collect();
        assert_eq!(first, second);
    }
}
