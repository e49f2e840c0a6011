//! History invariant: replaying the moves rebuilds the board.

use super::Invariant;
use crate::board::Board;
use crate::state::GameState;

/// Invariant: replaying the history from an empty board, alternating players
/// from the first player, never overwrites a cell and reproduces the board.
///
/// Covers both monotonicity (marks are never replaced) and alternation.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut board = Board::new();
        let mut player = state.first_player();

        for cell in state.history() {
            if !board.is_empty(*cell) {
                return false;
            }
            board = board.with_mark(*cell, player);
            player = player.opponent();
        }

        board == *state.board()
    }

    fn description() -> &'static str {
        "Replaying history reproduces the board (no overwrites, alternating players)"
    }
}
