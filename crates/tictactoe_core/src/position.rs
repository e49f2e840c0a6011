//! Cell coordinates on the board.

use crate::error::MoveError;
use crate::types::{BOARD_DIMENSION, TOTAL_CELLS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) coordinate known to lie on the board.
///
/// The only public constructor is [`Cell::new`], which validates the range,
/// so every `Cell` in circulation is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// All cells in row-major order.
    pub const ALL: [Cell; TOTAL_CELLS] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// Creates a cell, rejecting coordinates outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] when `row` or `col` is not
    /// below [`BOARD_DIMENSION`].
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_DIMENSION || col >= BOARD_DIMENSION {
            return Err(MoveError::InvalidCoordinate { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Unchecked constructor for coordinates produced inside the crate.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * BOARD_DIMENSION + self.col()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
