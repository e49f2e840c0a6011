//! Draw detection logic for tic-tac-toe.

use super::win::find_win;
use crate::board::Board;
use tracing::instrument;

/// A full board with no completed line is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_win(board).is_none()
}
