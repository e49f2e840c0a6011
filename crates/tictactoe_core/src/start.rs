//! Choosing who moves first.
//!
//! This is the only source of non-determinism in the crate. The controller
//! takes a [`CoinFlip`] so callers decide whether the choice is random,
//! seeded, or fixed.

use crate::types::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks the starting player for a new game.
pub trait CoinFlip {
    /// Returns the player who moves first.
    fn flip(&mut self) -> Player;
}

impl<F> CoinFlip for F
where
    F: FnMut() -> Player,
{
    fn flip(&mut self) -> Player {
        self()
    }
}

/// Fair coin backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomCoin<R = StdRng> {
    rng: R,
}

impl RandomCoin<StdRng> {
    /// Coin seeded from operating-system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Coin with a reproducible sequence of flips.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomCoin<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CoinFlip for RandomCoin<R> {
    fn flip(&mut self) -> Player {
        let player: Player = self.rng.r#gen();
        debug!(%player, "Coin flipped");
        player
    }
}

/// Coin that always lands on the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCoin(pub Player);

impl CoinFlip for FixedCoin {
    fn flip(&mut self) -> Player {
        self.0
    }
}
