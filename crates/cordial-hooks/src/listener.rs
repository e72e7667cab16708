//! Type-erased listeners held by the event manager.

use cordial_core::error::HandlerResult;
use cordial_events::{Event, EventTag};

use crate::adapter::ListenerAdapter;
use crate::dispatcher::EventDispatcher;
use crate::error::DispatchError;

/// Anything the [`EventManager`](crate::manager::EventManager) can deliver
/// events to.
pub trait EventListener: Send + Sync {
    /// Handles one event.
    ///
    /// # Errors
    ///
    /// Returns the error of the first hook that failed.
    fn on_event(&self, event: &Event) -> Result<(), DispatchError>;
}

impl<T: ListenerAdapter> EventListener for T {
    fn on_event(&self, event: &Event) -> Result<(), DispatchError> {
        EventDispatcher::global().dispatch(self, event)
    }
}

/// A closure subscribed to every event under one tag.
pub struct TagListener<F> {
    tag: EventTag,
    handler: F,
}

impl<F> TagListener<F>
where
    F: Fn(&Event) -> HandlerResult + Send + Sync,
{
    /// Subscribes `handler` to events whose lineage contains `tag`.
    #[must_use]
    pub fn new(tag: EventTag, handler: F) -> Self {
        Self { tag, handler }
    }

    /// The tag this listener is subscribed to.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        self.tag
    }
}

impl<F> EventListener for TagListener<F>
where
    F: Fn(&Event) -> HandlerResult + Send + Sync,
{
    fn on_event(&self, event: &Event) -> Result<(), DispatchError> {
        if !event.is_a(self.tag) {
            return Ok(());
        }
        (self.handler)(event).map_err(|source| DispatchError::Handler {
            tag: self.tag,
            source,
        })
    }
}
