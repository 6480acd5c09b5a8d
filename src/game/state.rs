use super::{Board, Move, Player, COLS, ROWS};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The game engine: board contents, the columns played so far, and whose
/// turn it is. All mutation goes through [`GameState::play`] and
/// [`GameState::undo`]; a new game is a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    history: Vec<usize>,
    player_turn: bool,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            history: Vec::with_capacity(ROWS * COLS),
            player_turn: true, // Red starts
        }
    }

    /// `true` while it is player one's (Red's) move.
    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        Player::from_turn(self.player_turn)
    }

    /// The player who made the last move.
    pub fn opposing_player(&self) -> Player {
        self.current_player().other()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-major cell values (0 empty, 1 Red, 2 Yellow), row 0 at the bottom.
    pub fn grid(&self) -> [[u8; COLS]; ROWS] {
        self.board.to_grid()
    }

    /// Columns played so far, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`.
    pub fn play(&mut self, column: usize) -> Result<Move, GameError> {
        let row = self
            .board
            .drop_piece(column, self.current_player().to_cell())?;
        self.history.push(column);
        self.player_turn = !self.player_turn;
        Ok(Move::new(row, column))
    }

    /// Take back the most recent move.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let &column = self.history.last().ok_or(GameError::NoMoreUndoMoves)?;
        let row = self
            .board
            .lift_piece(column)
            .ok_or(GameError::NoMoreUndoMoves)?;
        self.history.pop();
        self.player_turn = !self.player_turn;
        Ok(Move::new(row, column))
    }

    /// Drop a piece for the current player in a uniformly random legal
    /// column, using the thread-local RNG.
    pub fn play_random(&mut self) -> Result<Move, GameError> {
        crate::ai::play_random(self, &mut rand::rng())
    }

    /// `true` once every column is full. Does not look for a winner; check
    /// [`GameState::game_won`] first.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// Every winning run of the player who moved last, four moves per run.
    /// Empty when that player has no four-in-a-row.
    pub fn game_won(&self) -> Vec<Move> {
        self.board.winning_runs(self.opposing_player().to_cell())
    }

    /// Winner if the last mover completed a run, draw if the board is full.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_won().is_empty() {
            Some(GameOutcome::Winner(self.opposing_player()))
        } else if self.is_game_over() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
