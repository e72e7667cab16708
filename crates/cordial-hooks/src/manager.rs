//! Fan-out of events to registered listeners.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use cordial_core::error::HandlerResult;
use cordial_events::{Event, EventTag};

use crate::listener::{EventListener, TagListener};

/// Outcome of handing one event to every listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleReport {
    /// Listeners that handled the event without error.
    pub delivered: usize,
    /// Listeners that returned an error.
    pub failed: usize,
}

/// Holds listeners and hands every event to each of them in registration
/// order.
///
/// A failing listener is logged and does not stop delivery to the rest.
#[derive(Default)]
pub struct EventManager {
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
}

impl EventManager {
    /// Creates a manager with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener. The same listener may be registered more than once.
    pub fn register(&self, listener: Arc<dyn EventListener>) {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        listeners.push(listener);
        tracing::debug!(listeners = listeners.len(), "registered event listener");
    }

    /// Removes every registration of `listener`, compared by identity.
    /// Returns `true` if anything was removed.
    pub fn unregister(&self, listener: &Arc<dyn EventListener>) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|registered| !Arc::ptr_eq(registered, listener));
        let removed = before - listeners.len();
        tracing::debug!(removed, listeners = listeners.len(), "unregistered event listener");
        removed > 0
    }

    /// Subscribes a closure to every event under `tag` and returns the
    /// registered listener, for use with [`unregister`](Self::unregister).
    pub fn on<F>(&self, tag: EventTag, handler: F) -> Arc<dyn EventListener>
    where
        F: Fn(&Event) -> HandlerResult + Send + Sync + 'static,
    {
        let listener: Arc<dyn EventListener> = Arc::new(TagListener::new(tag, handler));
        self.register(Arc::clone(&listener));
        listener
    }

    /// Returns a snapshot of the registered listeners.
    #[must_use]
    pub fn registered_listeners(&self) -> Vec<Arc<dyn EventListener>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Hands `event` to every listener registered when the call starts.
    ///
    /// Listeners may register or unregister listeners while handling; the
    /// change applies from the next event on.
    pub fn handle(&self, event: &Event) -> HandleReport {
        let mut report = HandleReport::default();
        for listener in self.registered_listeners() {
            match listener.on_event(event) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    report.failed += 1;
                    tracing::error!(
                        tag = %event.tag(),
                        hook = %error.tag(),
                        response_number = event.metadata.response_number,
                        error = %error,
                        "event listener returned an error"
                    );
                }
            }
        }
        report
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("EventManager")
            .field("listeners", &count)
            .finish()
    }
}
