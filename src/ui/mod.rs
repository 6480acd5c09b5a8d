//! Terminal UI: key mapping, the application loop, and rendering of the
//! setup, help, and board screens.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{map_key, App};
pub use game_view::render;
