//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here holds state between
//! calls, so the same board always yields the same verdict.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::find_win;

use crate::board::Board;
use crate::line::WinLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Verdict for a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No completed line and at least one empty cell.
    Open,
    /// A player completed a line.
    Won(WinLine),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Evaluation {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Won(line) => Some(line.player()),
            Evaluation::Open | Evaluation::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn win_line(&self) -> Option<&WinLine> {
        match self {
            Evaluation::Won(line) => Some(line),
            Evaluation::Open | Evaluation::Draw => None,
        }
    }

    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Evaluation::Open)
    }
}

/// Evaluates a board: win first, then draw, otherwise open.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let evaluation = match find_win(board) {
        Some(line) => Evaluation::Won(line),
        None if board.is_full() => Evaluation::Draw,
        None => Evaluation::Open,
    };
    trace!(?evaluation, "Board evaluated");
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;
    use crate::position::Cell;

    #[test]
    fn test_empty_board_is_open() {
        let evaluation = evaluate(&Board::new());
        assert_eq!(evaluation, Evaluation::Open);
        assert!(!evaluation.is_over());
        assert_eq!(evaluation.winner(), None);
        assert!(evaluation.win_line().is_none());
    }

    #[test]
    fn test_won_accessors() {
        let board = Line::Row(2)
            .cells()
            .iter()
            .fold(Board::new(), |b, c| b.with_mark(*c, Player::Circle));
        let evaluation = evaluate(&board);
        assert!(evaluation.is_over());
        assert_eq!(evaluation.winner(), Some(Player::Circle));
        assert_eq!(evaluation.win_line().map(|w| w.line()), Some(Line::Row(2)));
    }

    #[test]
    fn test_full_board_with_win_is_won_not_draw() {
        // X X X / O O X / X O O
        let marks = [
            Player::Cross,
            Player::Cross,
            Player::Cross,
            Player::Circle,
            Player::Circle,
            Player::Cross,
            Player::Cross,
            Player::Circle,
            Player::Circle,
        ];
        let board = Cell::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |b, (c, p)| b.with_mark(*c, p));
        assert!(board.is_full());
        assert_eq!(evaluate(&board).winner(), Some(Player::Cross));
    }
}
