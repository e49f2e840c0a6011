//! Tic-tac-toe core - board, win/draw evaluation and turn control.
//!
//! The crate has no I/O. A host (terminal, GUI, server) turns user input
//! into [`TurnController::select_cell`] and [`TurnController::reset`] calls
//! and renders the [`GameState`] snapshots they return.
//!
//! # Architecture
//!
//! - **Board**: copy-on-write 3x3 grid of [`Mark`]s
//! - **Rules**: pure win/draw [`evaluate`] over a board snapshot
//! - **State**: [`GameState`] snapshots and the pure move transition
//! - **Controller**: [`TurnController`] owning the authoritative state
//! - **Start**: the [`CoinFlip`] that picks the first player
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{FixedCoin, Player, TurnController};
//!
//! let mut game = TurnController::new(FixedCoin(Player::Cross));
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.select_cell(row, col)?;
//! }
//! assert_eq!(game.state().winner(), Some(Player::Cross));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod invariants;
mod line;
mod position;
mod rules;
mod start;
mod state;
mod types;

// Crate-level exports - Domain types
pub use types::{BOARD_DIMENSION, Mark, Player, TOTAL_CELLS};
pub use position::Cell;
pub use board::Board;
pub use line::{Line, WinLine};

// Crate-level exports - Rules
pub use rules::{Evaluation, evaluate, find_win, is_draw};

// Crate-level exports - State and control
pub use state::{GameState, GameStatus};
pub use controller::{SharedController, TurnController};
pub use start::{CoinFlip, FixedCoin, RandomCoin};

// Crate-level exports - Invariants
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    OutcomeConsistentInvariant, TurnCountInvariant, assert_invariants,
};

// Crate-level exports - Errors
pub use error::{BoardError, MoveError};
