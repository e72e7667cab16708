//! Event metadata shared by every gateway event.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::session::SessionContext;

/// Metadata attached to every event.
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// The session that received the event.
    pub session: Arc<SessionContext>,
    /// Monotonically increasing sequence number assigned by the gateway.
    pub response_number: i64,
    /// When the event was received.
    pub received_at: DateTime<Utc>,
}

/// Trait every concrete event implements.
pub trait GenericEvent: Send + Sync + std::fmt::Debug {
    /// Returns the type descriptor of the event's most specific variant,
    /// e.g. `"ChannelUpdateNameEvent"`.
    fn descriptor(&self) -> &'static str;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;

    /// Returns the gateway sequence number of this event.
    fn response_number(&self) -> i64 {
        self.metadata().response_number
    }

    /// Returns the session that received this event.
    fn session(&self) -> &SessionContext {
        &self.metadata().session
    }
}
