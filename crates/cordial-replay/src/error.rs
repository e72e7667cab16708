//! Cordial Replay: error types.

use thiserror::Error;

/// Startup and runtime errors for the replay binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input could not be opened or read.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be decoded into an event (strict mode only).
    #[error("line {line}: cannot decode event: {source}")]
    Decode {
        /// One-based line number.
        line: usize,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },
}
