//! Core Connect Four game logic: board representation, player types, moves,
//! and the mutable game engine with undo and full-board win detection.

mod board;
mod moves;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use moves::Move;
pub use player::Player;
pub use state::{GameOutcome, GameState};
