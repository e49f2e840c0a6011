//! Game state snapshots and the pure move transition.

use crate::board::Board;
use crate::line::WinLine;
use crate::position::Cell;
use crate::rules::{self, Evaluation};
use crate::types::{Player, TOTAL_CELLS};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(WinLine),
    /// Game ended with a full board and no line.
    Draw,
}

/// Complete game state.
///
/// A `GameState` is a snapshot: [`GameState::play`] builds the next one
/// instead of editing this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move; the winner once won; `None` after a draw.
    current_player: Option<Player>,
    /// Who moved first.
    first_player: Player,
    /// Number of marks placed.
    turn_count: usize,
    /// Game status.
    status: GameStatus,
    /// Cells played so far, in order.
    history: Vec<Cell>,
}

impl GameState {
    /// Creates a new game with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: Some(first_player),
            first_player,
            turn_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Number of marks on the board.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.win_line().map(WinLine::player)
    }

    /// Returns the completed line if there is one.
    pub fn win_line(&self) -> Option<&WinLine> {
        match &self.status {
            GameStatus::Won(line) => Some(line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// True when `cell` belongs to the winning line.
    pub fn is_win_cell(&self, cell: Cell) -> bool {
        self.win_line().is_some_and(|line| line.contains(cell))
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// One-line status for display above the board.
    pub fn headline(&self) -> String {
        match (&self.status, self.current_player) {
            (GameStatus::Won(line), _) => format!("Player {} won", line.player()),
            (GameStatus::Draw, _) => "Draw!".to_string(),
            (GameStatus::InProgress, Some(player)) => format!("Player {}'s Turn!", player),
            (GameStatus::InProgress, None) => "Waiting for a player".to_string(),
        }
    }

    /// Computes the state after the current player marks `cell`.
    ///
    /// Returns `None` when the move is ignored: the game is over or the
    /// cell is already occupied.
    #[instrument(skip(self), fields(turn_count = self.turn_count))]
    pub fn play(&self, cell: Cell) -> Option<GameState> {
        let player = match (&self.status, self.current_player) {
            (GameStatus::InProgress, Some(player)) => player,
            _ => {
                trace!("Game is over, move ignored");
                return None;
            }
        };

        if !self.board.is_empty(cell) {
            trace!("Cell is occupied, move ignored");
            return None;
        }

        let board = self.board.with_mark(cell, player);
        let turn_count = self.turn_count + 1;
        let mut history = self.history.clone();
        history.push(cell);

        let (status, current_player) = match rules::evaluate(&board) {
            Evaluation::Won(line) => (GameStatus::Won(line), Some(player)),
            _ if turn_count == TOTAL_CELLS => (GameStatus::Draw, None),
            _ => (GameStatus::InProgress, Some(player.opponent())),
        };

        Some(GameState {
            board,
            current_player,
            first_player: self.first_player,
            turn_count,
            status,
            history,
        })
    }

    #[cfg(test)]
    pub(crate) fn corrupt_turn_count(&mut self, turn_count: usize) {
        self.turn_count = turn_count;
    }

    #[cfg(test)]
    pub(crate) fn corrupt_board(&mut self, board: Board) {
        self.board = board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Player::Circle);
        assert_eq!(state.current_player(), Some(Player::Circle));
        assert_eq!(state.turn_count(), 0);
        assert!(!state.is_over());
        assert_eq!(state.headline(), "Player O's Turn!");
    }

    #[test]
    fn test_play_does_not_touch_receiver() {
        let state = GameState::new(Player::Cross);
        let next = state.play(cell(1, 1)).expect("legal move");
        assert_eq!(state.turn_count(), 0);
        assert!(state.board().is_empty(cell(1, 1)));
        assert_eq!(next.turn_count(), 1);
        assert_eq!(next.current_player(), Some(Player::Circle));
        assert_eq!(next.history(), &[cell(1, 1)]);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let state = GameState::new(Player::Cross).play(cell(0, 0)).unwrap();
        assert!(state.play(cell(0, 0)).is_none());
    }

    #[test]
    fn test_win_freezes_current_player() {
        let mut state = GameState::new(Player::Cross);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state = state.play(cell(r, c)).unwrap();
        }
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Player::Cross));
        assert_eq!(state.current_player(), Some(Player::Cross));
        assert_eq!(state.win_line().map(WinLine::line), Some(Line::Row(0)));
        assert!(state.is_win_cell(cell(0, 1)));
        assert!(!state.is_win_cell(cell(1, 1)));
        assert_eq!(state.headline(), "Player X won");
        assert!(state.play(cell(2, 2)).is_none());
    }

    #[test]
    fn test_draw_clears_current_player() {
        let mut state = GameState::new(Player::Cross);
        for (r, c) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            state = state.play(cell(r, c)).unwrap();
        }
        assert_eq!(state.status(), &GameStatus::Draw);
        assert_eq!(state.current_player(), None);
        assert_eq!(state.winner(), None);
        assert_eq!(state.headline(), "Draw!");
    }
}
