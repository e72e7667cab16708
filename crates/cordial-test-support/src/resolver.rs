//! Test resolver: counts how often each tag is looked up.

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use cordial_events::EventTag;
use cordial_hooks::{ConventionResolver, HandlerEntry, HandlerResolver};

/// Wraps [`ConventionResolver`] and records every `resolve` call.
///
/// An optional delay holds each lookup open to widen the window for races.
#[derive(Debug, Default)]
pub struct CountingResolver {
    inner: ConventionResolver,
    delay: Option<Duration>,
    attempts: Mutex<HashMap<EventTag, usize>>,
}

impl CountingResolver {
    /// Create a counting resolver over the built-in handler table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `delay` inside every lookup.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups made for `tag`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn attempts(&self, tag: EventTag) -> usize {
        self.attempts.lock().unwrap().get(&tag).copied().unwrap_or(0)
    }

    /// Number of lookups made for any tag.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn total_attempts(&self) -> usize {
        self.attempts.lock().unwrap().values().sum()
    }
}

impl HandlerResolver for CountingResolver {
    fn resolve(&self, tag: EventTag) -> Option<&'static HandlerEntry> {
        *self.attempts.lock().unwrap().entry(tag).or_insert(0) += 1;
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        self.inner.resolve(tag)
    }
}
