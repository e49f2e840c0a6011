//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::line::{Line, WinLine};
use crate::position::Cell;
use crate::types::{BOARD_DIMENSION, Mark, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Cross is checked before Circle, and for each player the lines are
/// checked in [`Line::ALL`] order. A board holding several completed lines
/// (only reachable by building it by hand) yields the first one found.
#[instrument(level = "trace", skip(board))]
pub fn find_win(board: &Board) -> Option<WinLine> {
    Player::iter().find_map(|player| {
        Line::ALL
            .into_iter()
            .find(|line| owned_cells(board, *line, player).len() == BOARD_DIMENSION)
            .map(|line| WinLine::new(player, line))
    })
}

/// Cells on `line` occupied by `player`.
fn owned_cells(board: &Board, line: Line, player: Player) -> Vec<Cell> {
    line.cells()
        .into_iter()
        .filter(|cell| board.get(*cell) == Mark::Occupied(player))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn board_with(player: Player, cells: &[Cell]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |b, c| b.with_mark(*c, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_win(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Player::Cross, &[cell(0, 0), cell(0, 1), cell(0, 2)]);
        let win = find_win(&board).expect("top row complete");
        assert_eq!(win.player(), Player::Cross);
        assert_eq!(win.line(), Line::Row(0));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(Player::Circle, &[cell(0, 2), cell(1, 1), cell(2, 0)]);
        let win = find_win(&board).expect("anti-diagonal complete");
        assert_eq!(win.player(), Player::Circle);
        assert_eq!(win.line(), Line::AntiDiagonal);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::Cross, &[cell(0, 0), cell(0, 1)]);
        assert_eq!(find_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::Cross, &[cell(0, 0), cell(0, 1)])
            .with_mark(cell(0, 2), Player::Circle);
        assert_eq!(find_win(&board), None);
    }

    #[test]
    fn test_two_winning_lines_does_not_error() {
        let board = board_with(
            Player::Cross,
            &[cell(0, 0), cell(0, 1), cell(0, 2), cell(1, 0), cell(2, 0)],
        );
        let win = find_win(&board).expect("a win is reported");
        assert_eq!(win.player(), Player::Cross);
        assert!(matches!(win.line(), Line::Row(0) | Line::Column(0)));
    }

    #[test]
    fn test_both_players_winning_reports_one() {
        let board = board_with(Player::Cross, &[cell(0, 0), cell(0, 1), cell(0, 2)])
            .with_mark(cell(2, 0), Player::Circle)
            .with_mark(cell(2, 1), Player::Circle)
            .with_mark(cell(2, 2), Player::Circle);
        assert!(find_win(&board).is_some());
    }
}
