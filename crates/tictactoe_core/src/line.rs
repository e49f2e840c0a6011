//! The eight lines a player can complete.

use crate::position::Cell;
use crate::types::{BOARD_DIMENSION, Player};
use serde::{Deserialize, Serialize};

const DIM: u8 = BOARD_DIMENSION as u8;

/// A row, column or diagonal of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Column with the given index.
    Column(u8),
    /// Row with the given index.
    Row(u8),
    /// Cells where row equals column.
    MainDiagonal,
    /// Cells where column equals `BOARD_DIMENSION - 1 - row`.
    AntiDiagonal,
}

impl Line {
    /// Every line, in the order the evaluator checks them:
    /// columns, rows, main diagonal, anti-diagonal.
    pub const ALL: [Line; 2 * BOARD_DIMENSION + 2] = [
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// Cells on this line, ordered by increasing row (or column for rows).
    pub fn cells(self) -> [Cell; BOARD_DIMENSION] {
        std::array::from_fn(|i| {
            let i = i as u8;
            match self {
                Line::Column(c) => Cell::at(i, c),
                Line::Row(r) => Cell::at(r, i),
                Line::MainDiagonal => Cell::at(i, i),
                Line::AntiDiagonal => Cell::at(i, DIM - 1 - i),
            }
        })
    }

    /// True when `cell` lies on this line.
    pub fn passes_through(self, cell: Cell) -> bool {
        self.cells().contains(&cell)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Column(c) => write!(f, "column {}", c),
            Line::Row(r) => write!(f, "row {}", r),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A line completed by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    player: Player,
    line: Line,
}

impl WinLine {
    pub(crate) fn new(player: Player, line: Line) -> Self {
        Self { player, line }
    }

    /// The player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Which line was completed.
    pub fn line(&self) -> Line {
        self.line
    }

    /// The winning cells.
    pub fn cells(&self) -> [Cell; BOARD_DIMENSION] {
        self.line.cells()
    }

    /// True when `cell` is one of the winning cells.
    pub fn contains(&self, cell: Cell) -> bool {
        self.line.passes_through(cell)
    }
}
