//! Dispatch error types.

use cordial_core::error::HandlerError;
use cordial_events::EventTag;
use thiserror::Error;

/// Error produced when invoking a single handler table entry.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The hook itself returned an error.
    #[error(transparent)]
    Handler(HandlerError),

    /// The entry was asked to handle an event it cannot accept.
    #[error("handler for {expected} cannot accept a {found} event")]
    PayloadMismatch {
        /// The tag the entry accepts.
        expected: EventTag,
        /// The tag of the event it was given.
        found: EventTag,
    },
}

impl InvocationError {
    /// Attaches the tag whose hook was being invoked.
    #[must_use]
    pub fn into_dispatch_error(self, tag: EventTag) -> DispatchError {
        match self {
            Self::Handler(source) => DispatchError::Handler { tag, source },
            Self::PayloadMismatch { found, .. } => DispatchError::IllegalState { tag, found },
        }
    }
}

/// Error returned by a dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A hook returned an error. Dispatch stopped at that hook and the error
    /// is carried unchanged.
    #[error("{source}")]
    Handler {
        /// The tag whose hook failed. `GenericEvent` and `Update` stand for
        /// the two generic hooks.
        tag: EventTag,
        /// The error the hook returned.
        #[source]
        source: HandlerError,
    },

    /// A resolved handler could not accept the event it was resolved for.
    /// Indicates a broken handler table, never bad input.
    #[error("illegal state: {tag} handler cannot accept a {found} event")]
    IllegalState {
        /// The tag the handler was resolved for.
        tag: EventTag,
        /// The tag of the event being dispatched.
        found: EventTag,
    },
}

impl DispatchError {
    /// Returns the tag whose hook was running when dispatch stopped.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        match self {
            Self::Handler { tag, .. } | Self::IllegalState { tag, .. } => *tag,
        }
    }

    /// Unwraps the error a hook returned.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if dispatch failed for another reason.
    pub fn into_handler_error(self) -> Result<HandlerError, Self> {
        match self {
            Self::Handler { source, .. } => Ok(source),
            other @ Self::IllegalState { .. } => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cordial_core::error::HandlerFailure;

    #[test]
    fn test_handler_error_keeps_original_message_and_type() {
        // Arrange
        let error = InvocationError::Handler(HandlerFailure::new("no such channel").into());

        // Act
        let dispatch = error.into_dispatch_error(EventTag::ChannelCreate);

        // Assert
        assert_eq!(dispatch.tag(), EventTag::ChannelCreate);
        assert_eq!(dispatch.to_string(), "no such channel");
        let source = dispatch.into_handler_error().unwrap();
        assert_eq!(
            source.downcast_ref::<HandlerFailure>(),
            Some(&HandlerFailure::new("no such channel"))
        );
    }

    #[test]
    fn test_payload_mismatch_becomes_illegal_state() {
        let error = InvocationError::PayloadMismatch {
            expected: EventTag::ChannelCreate,
            found: EventTag::GuildBan,
        };

        let dispatch = error.into_dispatch_error(EventTag::ChannelCreate);

        assert!(matches!(
            dispatch,
            DispatchError::IllegalState {
                tag: EventTag::ChannelCreate,
                found: EventTag::GuildBan,
            }
        ));
        assert!(dispatch.into_handler_error().is_err());
    }
}
