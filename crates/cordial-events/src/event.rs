//! The event envelope and its wire record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cordial_core::clock::Clock;
use cordial_core::event::{EventMetadata, GenericEvent};
use cordial_core::session::SessionContext;
use serde::{Deserialize, Serialize};

use crate::kind::EventKind;
use crate::tag::EventTag;
use crate::update::UpdateEvent;

/// An immutable event, handed to the dispatcher exactly once.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: EventKind,
}

impl Event {
    /// Creates an event.
    #[must_use]
    pub fn new(
        session: Arc<SessionContext>,
        response_number: i64,
        received_at: DateTime<Utc>,
        kind: EventKind,
    ) -> Self {
        Self {
            metadata: EventMetadata {
                session,
                response_number,
                received_at,
            },
            kind,
        }
    }

    /// Builds an event from a decoded record, stamping the receive time.
    #[must_use]
    pub fn from_record(record: EventRecord, session: Arc<SessionContext>, clock: &dyn Clock) -> Self {
        Self::new(session, record.response_number, clock.now(), record.kind)
    }

    /// Returns the most specific tag of this event.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        self.kind.tag()
    }

    /// Returns `true` if the event belongs to `group`.
    #[must_use]
    pub fn is_a(&self, group: EventTag) -> bool {
        self.tag().is_a(group)
    }

    /// Returns the update view of this event if it is update-shaped.
    #[must_use]
    pub fn as_update(&self) -> Option<UpdateEvent<'_>> {
        let tag = self.tag();
        if !tag.is_update() {
            return None;
        }
        let change = self.kind.property_update()?;
        let identifier = tag.property_identifier()?;
        Some(UpdateEvent::new(self, change, identifier))
    }
}

impl GenericEvent for Event {
    fn descriptor(&self) -> &'static str {
        self.tag().descriptor()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

/// One event as it appears on the wire or in a dump:
/// `{"s": <response number>, "t": "<tag>", "d": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Gateway sequence number.
    #[serde(rename = "s")]
    pub response_number: i64,
    /// The payload, tagged by variant.
    #[serde(flatten)]
    pub kind: EventKind,
}

impl EventRecord {
    /// Parses a record from one line of JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid JSON, names an unknown tag,
    /// or carries a payload that does not match its tag.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        Self {
            response_number: event.metadata.response_number,
            kind: event.kind.clone(),
        }
    }
}
