//! # Connect Four
//!
//! Connect Four on a 6×7 board, playable in the terminal against another
//! person or a computer that picks uniformly random legal columns.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, moves, undo, win detection
//! - [`ai`] — Agent trait and the random move selector
//! - [`controller`] — Game phases, shared engine, computer worker thread
//! - [`ui`] — Terminal UI: key mapping and rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
