use std::path::PathBuf;

/// Recoverable gameplay failures surfaced by the engine and the random
/// move selector. None of these leave the engine in a modified state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Move @ column {column} is invalid. Please try again.")]
    InvalidMove { column: usize },

    #[error("There are no moves on the board to undo.")]
    NoMoreUndoMoves,

    #[error("No more moves left.")]
    NoMoreMoves,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
