//! Cordial Replay: feeds recorded gateway events through listeners.
//!
//! Input is one event record per line, `{"s": <n>, "t": "<tag>", "d": {...}}`.

pub mod config;
pub mod error;
pub mod listeners;
pub mod replay;

pub use config::{Config, Input, LogFormat};
pub use error::AppError;
pub use listeners::{TallyListener, TracingListener};
pub use replay::{ReplaySummary, Replayer};
