use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ai::Agent;
use crate::error::GameError;
use crate::game::{GameState, Move};

/// Single-owner handle to the game engine.
///
/// Every mutation (play, undo, computer move, reset) runs as one critical
/// section, and reads see a consistent state taken under the same lock.
/// Cloning the handle shares the same game.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new() -> Self {
        Self::default()
    }

    // The engine never panics part-way through a mutation, so a poisoned
    // lock still guards a consistent game.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn play(&self, column: usize) -> Result<Move, GameError> {
        self.lock().play(column)
    }

    pub fn undo(&self) -> Result<Move, GameError> {
        self.lock().undo()
    }

    /// Let `agent` pick and play a column for the current player.
    pub fn play_with(&self, agent: &mut dyn Agent) -> Result<Move, GameError> {
        agent.play(&mut self.lock())
    }

    /// Replace the game with a fresh one.
    pub fn reset(&self) {
        *self.lock() = GameState::initial();
    }

    /// Run a read-only query against the current state.
    pub fn read<T>(&self, f: impl FnOnce(&GameState) -> T) -> T {
        f(&self.lock())
    }

    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }
}
