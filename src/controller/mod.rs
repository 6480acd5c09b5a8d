//! Game flow on top of the engine: the setup / play / game-over phases,
//! cursor handling, computer turns on a worker thread, and the message log
//! shown to the player.

mod shared;
mod worker;

pub use shared::SharedGame;
pub use worker::{ComputerMove, ComputerWorker, WorkerCommand};

use std::collections::VecDeque;

use crate::ai::RandomAgent;
use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{GameOutcome, GameState, Move, Player, COLS};

/// Number of log lines kept for display.
pub const MESSAGE_LOG_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configuring,
    InProgress,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsComputer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two players",
            GameMode::VsComputer => "vs Computer",
        }
    }
}

/// Discrete user inputs. Each phase ignores the actions it has no use for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartTwoPlayer,
    StartVsComputer,
    ToggleHelp,
    Left,
    Right,
    Drop,
    Undo,
    Restart,
    ShowWinningMoves,
    Confirm,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct View {
    pub phase: Phase,
    pub mode: GameMode,
    pub game: GameState,
    pub cursor: usize,
    pub winning_moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    pub messages: Vec<String>,
    pub show_help: bool,
    pub computer_thinking: bool,
}

pub struct Controller {
    game: SharedGame,
    worker: ComputerWorker,
    phase: Phase,
    mode: GameMode,
    cursor: usize,
    default_column: usize,
    computer_first: bool,
    computer_pending: bool,
    winning_moves: Vec<Move>,
    highlight_winning_moves: bool,
    outcome: Option<GameOutcome>,
    messages: VecDeque<String>,
    show_help: bool,
}

impl Controller {
    pub fn new(config: &AppConfig) -> Self {
        let game = SharedGame::new();
        let agent = match config.computer.seed {
            Some(seed) => RandomAgent::seeded(seed),
            None => RandomAgent::new(),
        };
        let worker = ComputerWorker::spawn(game.clone(), agent, config.computer.delay());

        Controller {
            game,
            worker,
            phase: Phase::Configuring,
            mode: GameMode::TwoPlayer,
            cursor: config.game.default_column,
            default_column: config.game.default_column,
            computer_first: config.game.computer_first,
            computer_pending: false,
            winning_moves: Vec::new(),
            highlight_winning_moves: false,
            outcome: None,
            messages: VecDeque::with_capacity(MESSAGE_LOG_CAPACITY),
            show_help: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winning_moves(&self) -> &[Move] {
        &self.winning_moves
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn is_computer_pending(&self) -> bool {
        self.computer_pending
    }

    pub fn game(&self) -> &SharedGame {
        &self.game
    }

    pub fn view(&self) -> View {
        View {
            phase: self.phase,
            mode: self.mode,
            game: self.game.snapshot(),
            cursor: self.cursor,
            winning_moves: if self.highlight_winning_moves {
                self.winning_moves.clone()
            } else {
                Vec::new()
            },
            outcome: self.outcome,
            messages: self.messages.iter().cloned().collect(),
            show_help: self.show_help,
            computer_thinking: self.computer_pending,
        }
    }

    /// Apply one user action according to the current phase.
    pub fn handle(&mut self, action: Action) {
        match self.phase {
            Phase::Configuring => match action {
                Action::StartTwoPlayer => self.start(GameMode::TwoPlayer),
                Action::StartVsComputer => self.start(GameMode::VsComputer),
                Action::ToggleHelp => self.show_help = !self.show_help,
                _ => {}
            },
            Phase::InProgress => match action {
                Action::Left => self.move_cursor(-1),
                Action::Right => self.move_cursor(1),
                Action::Drop => self.drop_piece(),
                Action::Undo => self.undo(),
                Action::Restart => self.restart(),
                _ => {}
            },
            Phase::Over => match action {
                Action::ShowWinningMoves => {
                    self.highlight_winning_moves = !self.winning_moves.is_empty();
                }
                Action::Confirm | Action::Restart => self.restart(),
                _ => {}
            },
        }
    }

    /// Apply a finished computer move, if one is waiting. Returns whether
    /// anything changed.
    pub fn poll_computer(&mut self) -> bool {
        if !self.computer_pending {
            return false;
        }
        match self.worker.try_recv() {
            Some(reply) => {
                self.apply_computer_move(reply);
                true
            }
            None => false,
        }
    }

    /// Block until the pending computer move (if any) is applied.
    pub fn wait_for_computer(&mut self) {
        if !self.computer_pending {
            return;
        }
        match self.worker.recv() {
            Some(reply) => self.apply_computer_move(reply),
            None => {
                self.computer_pending = false;
                self.log("Computer player stopped unexpectedly");
            }
        }
    }

    fn start(&mut self, mode: GameMode) {
        self.game.reset();
        self.mode = mode;
        self.phase = Phase::InProgress;
        self.cursor = self.default_column;
        self.winning_moves.clear();
        self.highlight_winning_moves = false;
        self.outcome = None;
        self.show_help = false;
        self.messages.clear();
        tracing::info!(mode = mode.label(), "game started");
        self.log("Game started");

        if mode == GameMode::VsComputer && self.computer_first {
            self.request_computer_move();
        }
    }

    fn restart(&mut self) {
        if self.refuse_while_computer_moves() {
            return;
        }
        tracing::info!("returning to game setup");
        self.phase = Phase::Configuring;
        self.show_help = false;
    }

    fn move_cursor(&mut self, delta: isize) {
        self.cursor = (self.cursor as isize + delta).rem_euclid(COLS as isize) as usize;
    }

    fn drop_piece(&mut self) {
        if self.refuse_while_computer_moves() {
            return;
        }
        match self.game.play(self.cursor) {
            Ok(mv) => {
                let mover = self.game.read(|g| g.opposing_player());
                self.log_move(mover, mv);
                self.cursor = self.default_column;
                if !self.check_finished() && self.mode == GameMode::VsComputer {
                    self.request_computer_move();
                }
            }
            Err(err) => self.log_error(err),
        }
    }

    fn undo(&mut self) {
        if self.refuse_while_computer_moves() {
            return;
        }
        match self.mode {
            GameMode::TwoPlayer => {
                let _ = self.undo_one();
            }
            GameMode::VsComputer => {
                let moves = self.game.read(|g| g.move_count());
                if self.computer_first && moves == 1 {
                    // Only the computer's opening move is on the board:
                    // take it back and let the computer open again.
                    if self.undo_one().is_ok() {
                        self.request_computer_move();
                    }
                } else if self.undo_one().is_ok() {
                    let _ = self.undo_one();
                }
            }
        }
    }

    fn undo_one(&mut self) -> Result<Move, GameError> {
        match self.game.undo() {
            Ok(mv) => {
                let player = self.game.read(|g| g.current_player());
                tracing::info!(player = player.name(), %mv, "move undone");
                self.log(format!("Player {} removed move {}", player.name(), mv));
                Ok(mv)
            }
            Err(err) => {
                self.log_error(err);
                Err(err)
            }
        }
    }

    fn request_computer_move(&mut self) {
        if self.worker.request_move() {
            self.computer_pending = true;
        } else {
            tracing::error!("computer worker is not running");
            self.log("Computer player is unavailable");
        }
    }

    fn apply_computer_move(&mut self, reply: ComputerMove) {
        self.computer_pending = false;
        match reply.result {
            Ok(mv) => {
                let mover = self.game.read(|g| g.opposing_player());
                self.log_move(mover, mv);
                self.check_finished();
            }
            Err(GameError::NoMoreMoves) => {
                self.log_error(GameError::NoMoreMoves);
                self.finish(GameOutcome::Draw);
            }
            Err(err) => self.log_error(err),
        }
    }

    /// Check the last move for a win, then the board for a draw.
    fn check_finished(&mut self) -> bool {
        let (winning_moves, outcome) = self.game.read(|g| (g.game_won(), g.outcome()));
        match outcome {
            Some(outcome) => {
                self.winning_moves = winning_moves;
                self.highlight_winning_moves = !self.winning_moves.is_empty();
                self.finish(outcome);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.phase = Phase::Over;
        self.outcome = Some(outcome);
        match outcome {
            GameOutcome::Winner(player) => {
                tracing::info!(winner = player.name(), "game won");
                self.log(format!("Player {} won", player.id()));
            }
            GameOutcome::Draw => {
                tracing::info!("game drawn");
                self.log("Game ended in a draw");
            }
        }
    }

    fn refuse_while_computer_moves(&mut self) -> bool {
        if self.computer_pending {
            self.log("Computer is thinking...");
        }
        self.computer_pending
    }

    fn log_move(&mut self, player: Player, mv: Move) {
        tracing::info!(player = player.name(), %mv, "move played");
        self.log(format!("Player {} played {}", player.name(), mv));
    }

    fn log_error(&mut self, err: GameError) {
        tracing::warn!(%err, "move rejected");
        self.log(err.to_string());
    }

    fn log(&mut self, message: impl Into<String>) {
        if self.messages.len() == MESSAGE_LOG_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(message.into());
    }
}
