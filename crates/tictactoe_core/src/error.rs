//! Error types for the tic-tac-toe core.
//!
//! Only coordinate validation and board construction can fail. Clicking an
//! occupied cell or playing after the game ended are no-ops, not errors.

use crate::types::BOARD_DIMENSION;

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column lies outside the board.
    #[display(
        "Invalid coordinate ({row}, {col}): row and column must be in 0..{}",
        BOARD_DIMENSION
    )]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Error raised when a board is built from dynamically-shaped data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The outer collection does not hold exactly `BOARD_DIMENSION` rows.
    #[display("Malformed board: expected {} rows, found {found}", BOARD_DIMENSION)]
    WrongRowCount {
        /// Number of rows supplied.
        found: usize,
    },
    /// One row does not hold exactly `BOARD_DIMENSION` cells.
    #[display(
        "Malformed board: row {row} has {found} cells, expected {}",
        BOARD_DIMENSION
    )]
    WrongRowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        found: usize,
    },
}
