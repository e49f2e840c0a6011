//! Command-line interface for the tic-tac-toe terminal host.

use crate::config::FirstPlayer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (missing file means defaults)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Always give the first move to this player instead of flipping a coin
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Seed for the starting-player coin flip
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Moves in order, each written `row,col`
        moves: Vec<String>,

        /// Print the state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.first, None);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from(["tictactoe", "--first", "o", "replay", "0,0", "1,1", "--json"]);
        assert_eq!(cli.first, Some(FirstPlayer::O));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0,0".to_string(), "1,1".to_string()],
                json: true,
            })
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
