//! The 3x3 grid of marks.

use crate::error::BoardError;
use crate::position::Cell;
use crate::types::{BOARD_DIMENSION, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark yields a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; BOARD_DIMENSION]; BOARD_DIMENSION],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at the given cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.row()][cell.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Returns a copy of this board with `player`'s mark written at `cell`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, cell: Cell, player: Player) -> Board {
        let mut next = *self;
        next.cells[cell.row()][cell.col()] = Mark::Occupied(player);
        next
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|mark| !mark.is_empty())
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// Cells nobody has played yet, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Rows of marks, top to bottom.
    pub fn rows(&self) -> &[[Mark; BOARD_DIMENSION]; BOARD_DIMENSION] {
        &self.cells
    }
}

impl TryFrom<Vec<Vec<Mark>>> for Board {
    type Error = BoardError;

    #[instrument(skip(rows), fields(row_count = rows.len()))]
    fn try_from(rows: Vec<Vec<Mark>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_DIMENSION {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::new();
        for (r, row) in rows.into_iter().enumerate() {
            let cells: [Mark; BOARD_DIMENSION] =
                row.try_into().map_err(|row: Vec<Mark>| BoardError::WrongRowLength {
                    row: r,
                    found: row.len(),
                })?;
            board.cells[r] = cells;
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                let symbol = match mark {
                    Mark::Empty => ' ',
                    Mark::Occupied(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
                if c + 1 < BOARD_DIMENSION {
                    write!(f, "|")?;
                }
            }
            if r + 1 < BOARD_DIMENSION {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
