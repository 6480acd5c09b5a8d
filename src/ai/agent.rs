use crate::error::GameError;
use crate::game::{GameState, Move};

/// Interface for computer players.
pub trait Agent {
    /// Select a column to play in the given state.
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Select a column and play it for the current player.
    fn play(&mut self, state: &mut GameState) -> Result<Move, GameError> {
        let column = self.select_action(state)?;
        state.play(column)
    }
}
