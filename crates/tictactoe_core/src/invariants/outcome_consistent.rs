//! Outcome invariant: the status agrees with what is on the board.

use super::Invariant;
use crate::rules::find_win;
use crate::state::{GameState, GameStatus};
use crate::types::{Mark, TOTAL_CELLS};

/// Invariant: the recorded status is the one the board implies.
///
/// - `Won`: every cell of the win line holds the winner's mark and the
///   current player is frozen at the winner.
/// - `Draw`: board full, no line complete, nobody to move.
/// - `InProgress`: someone to move, fewer than nine marks, no line complete.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::Won(line) => {
                let winner = line.player();
                state.current_player() == Some(winner)
                    && line
                        .cells()
                        .iter()
                        .all(|cell| board.get(*cell) == Mark::Occupied(winner))
            }
            GameStatus::Draw => {
                state.current_player().is_none()
                    && state.turn_count() == TOTAL_CELLS
                    && board.is_full()
                    && find_win(board).is_none()
            }
            GameStatus::InProgress => {
                state.current_player().is_some()
                    && state.turn_count() < TOTAL_CELLS
                    && find_win(board).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Status matches the board (win line owned by winner, draw only when full)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::invariants::test_support::played;
    use crate::line::Line;
    use crate::types::Player;

    #[test]
    fn test_won_game_holds() {
        let state = played(Player::Circle, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert_eq!(state.winner(), Some(Player::Circle));
        assert!(OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_drawn_game_holds() {
        let state = played(
            Player::Cross,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert!(OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_unnoticed_win_violates() {
        let mut state = played(Player::Cross, &[(0, 0)]);
        let board = Line::Row(1)
            .cells()
            .iter()
            .fold(Board::new(), |b, c| b.with_mark(*c, Player::Circle));
        state.corrupt_board(board);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }
}
