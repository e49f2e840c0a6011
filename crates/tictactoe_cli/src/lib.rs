//! Terminal host for `tictactoe_core`.
//!
//! Maps typed commands onto `select_cell`/`reset` calls and prints the
//! resulting snapshots. Holds no game logic of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod session;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{BoxedCoin, CliConfig, ConfigError, FirstPlayer};

// Crate-level exports - Input and session
pub use input::{HELP, Input, InputError};
pub use session::{Session, replay, write_state};
