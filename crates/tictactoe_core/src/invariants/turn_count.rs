//! Turn count invariant: the counter matches the marks on the board.

use super::Invariant;
use crate::state::GameState;
use crate::types::TOTAL_CELLS;

/// Invariant: `turn_count` equals the number of occupied cells and the
/// length of the move history, and never exceeds the cell count.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(state: &GameState) -> bool {
        let count = state.turn_count();
        count <= TOTAL_CELLS
            && count == state.board().occupied_count()
            && count == state.history().len()
    }

    fn description() -> &'static str {
        "Turn count matches occupied cells and history"
    }
}
