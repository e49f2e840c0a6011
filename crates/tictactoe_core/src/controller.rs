//! Turn controller: owns the authoritative game state.
//!
//! The controller validates coordinates, applies moves through
//! [`GameState::play`], and swaps in the resulting snapshot. Clicks on
//! occupied cells and clicks after the game ended leave the state as is.

use crate::error::MoveError;
use crate::invariants::assert_invariants;
use crate::position::Cell;
use crate::start::CoinFlip;
use crate::state::{GameState, GameStatus};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

/// Tic-tac-toe turn controller.
#[derive(Debug, Clone)]
pub struct TurnController<C> {
    state: GameState,
    coin: C,
}

impl<C: CoinFlip> TurnController<C> {
    /// Starts a game, flipping `coin` for the first player.
    #[instrument(skip(coin))]
    pub fn new(mut coin: C) -> Self {
        let state = GameState::new(coin.flip());
        info!(first_player = ?state.first_player(), "New game");
        Self { state, coin }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Marks `(row, col)` for the current player.
    ///
    /// Returns the state after the move. When the game is over or the cell
    /// is taken, the state is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] when the coordinate is off the
    /// board. The state is not modified.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<&GameState, MoveError> {
        let cell = Cell::new(row, col)?;

        match self.state.play(cell) {
            Some(next) => {
                assert_invariants(&next);
                match next.status() {
                    GameStatus::Won(line) => {
                        info!(winner = ?line.player(), line = %line.line(), "Game won")
                    }
                    GameStatus::Draw => info!("Game drawn"),
                    GameStatus::InProgress => debug!(
                        turn_count = next.turn_count(),
                        next_player = ?next.current_player(),
                        "Move applied"
                    ),
                }
                self.state = next;
            }
            None => debug!(%cell, is_over = self.state.is_over(), "Move ignored"),
        }

        Ok(&self.state)
    }

    /// Discards the current game and starts a new one with a fresh coin flip.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new(self.coin.flip());
        info!(first_player = ?self.state.first_player(), "Game reset");
        &self.state
    }
}

/// Controller behind a mutex, for hosts that may dispatch events from more
/// than one thread.
///
/// Every operation returns an owned snapshot taken while the lock is held.
#[derive(Debug)]
pub struct SharedController<C> {
    inner: Arc<Mutex<TurnController<C>>>,
}

impl<C> Clone for SharedController<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: CoinFlip> SharedController<C> {
    /// Wraps a controller.
    pub fn new(controller: TurnController<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.lock().state().clone()
    }

    /// See [`TurnController::select_cell`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] for off-board coordinates.
    pub fn select_cell(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        self.lock().select_cell(row, col).cloned()
    }

    /// See [`TurnController::reset`].
    pub fn reset(&self) -> GameState {
        self.lock().reset().clone()
    }

    // Poisoning only follows a failed invariant check, which panics before
    // the state is replaced.
    fn lock(&self) -> MutexGuard<'_, TurnController<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::start::FixedCoin;
    use crate::types::Player;

    #[test]
    fn test_new_uses_coin() {
        let controller = TurnController::new(FixedCoin(Player::Circle));
        assert_eq!(controller.state().current_player(), Some(Player::Circle));
        assert_eq!(controller.state().turn_count(), 0);
    }

    #[test]
    fn test_invalid_coordinate_leaves_state() {
        let mut controller = TurnController::new(FixedCoin(Player::Cross));
        controller.select_cell(1, 1).unwrap();
        let before = controller.state().clone();
        let err = controller.select_cell(0, 3).unwrap_err();
        assert_eq!(err, MoveError::InvalidCoordinate { row: 0, col: 3 });
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_reset_flips_again() {
        let mut flips = vec![Player::Circle, Player::Cross];
        let mut controller = TurnController::new(move || flips.pop().unwrap());
        assert_eq!(controller.state().first_player(), Player::Cross);
        controller.select_cell(0, 0).unwrap();
        let state = controller.reset();
        assert_eq!(state.first_player(), Player::Circle);
        assert_eq!(state.turn_count(), 0);
    }

    #[test]
    fn test_shared_controller_snapshots() {
        let shared = SharedController::new(TurnController::new(FixedCoin(Player::Cross)));
        let other = shared.clone();
        let snapshot = shared.select_cell(2, 2).unwrap();
        assert_eq!(snapshot.turn_count(), 1);
        assert_eq!(other.state(), snapshot);
        assert_eq!(other.reset().turn_count(), 0);
        assert_eq!(snapshot.turn_count(), 1);
    }

    #[test]
    fn test_shared_controller_across_threads() {
        let shared = SharedController::new(TurnController::new(FixedCoin(Player::Cross)));
        let handles: Vec<_> = (0..3)
            .map(|row| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.select_cell(row, row).map(|_| ()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        let state = shared.state();
        assert_eq!(state.turn_count(), 3);
        assert_eq!(state.board().occupied_count(), 3);
    }
}
