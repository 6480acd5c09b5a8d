use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::error::GameError;
use crate::game::{GameState, Move};

/// Pick a legal column uniformly at random.
fn random_column<R: Rng>(state: &GameState, rng: &mut R) -> Result<usize, GameError> {
    let columns = state.legal_columns();
    if columns.is_empty() {
        return Err(GameError::NoMoreMoves);
    }
    let idx = rng.random_range(0..columns.len());
    Ok(columns[idx])
}

/// Play a uniformly random legal column for the current player.
///
/// Fails with [`GameError::NoMoreMoves`] when every column is full.
pub fn play_random<R: Rng>(state: &mut GameState, rng: &mut R) -> Result<Move, GameError> {
    let column = random_column(state, rng)?;
    state.play(column)
}

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError> {
        random_column(state, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
