//! Error types returned by event handlers.

use thiserror::Error;

/// Error a listener hook may return.
///
/// Hooks are application code, so any error type is accepted. The dispatcher
/// hands it back to its caller without touching it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type of every listener hook.
pub type HandlerResult = Result<(), HandlerError>;

/// A plain message error for hooks that have nothing more specific to report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerFailure(pub String);

impl HandlerFailure {
    /// Creates a new failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_failure_survives_boxing() {
        let boxed: HandlerError = HandlerFailure::new("listener blew up").into();

        assert_eq!(boxed.to_string(), "listener blew up");
        assert_eq!(
            boxed.downcast_ref::<HandlerFailure>(),
            Some(&HandlerFailure::new("listener blew up"))
        );
    }
}
