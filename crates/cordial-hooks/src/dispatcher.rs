//! The resolve-once dispatcher.
//!
//! Handler lookup for a tag happens at most once per dispatcher. Resolved
//! entries live in a concurrent map; tags with no handler live in a
//! concurrent set. The root, `Event` and `Update` tags are seeded into the
//! set up front and are never resolved.

use std::sync::LazyLock;

use cordial_events::{Event, EventTag};
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};

use crate::adapter::{HandlerEntry, ListenerAdapter};
use crate::error::DispatchError;
use crate::resolver::{ConventionResolver, HandlerResolver};

static GLOBAL: LazyLock<EventDispatcher> = LazyLock::new(EventDispatcher::new);

/// What a dispatcher currently knows about a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Not looked up yet.
    Pending,
    /// Looked up, and this entry handles it.
    Resolved(&'static HandlerEntry),
    /// Looked up, or structural, and nothing handles it.
    Unresolvable,
}

/// Routes events to listener hooks.
///
/// Shared by reference across threads; any number of dispatches may run
/// concurrently, on the same or different listeners.
#[derive(Debug)]
pub struct EventDispatcher<R = ConventionResolver> {
    resolver: R,
    handlers: DashMap<EventTag, &'static HandlerEntry>,
    unresolved: DashSet<EventTag>,
}

impl EventDispatcher<ConventionResolver> {
    /// Creates a dispatcher over the built-in handler table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(ConventionResolver::new())
    }

    /// The process-wide dispatcher used by [`EventListener`](crate::listener::EventListener)
    /// implementations of listener adapters.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}

impl Default for EventDispatcher<ConventionResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HandlerResolver> EventDispatcher<R> {
    /// Creates a dispatcher that looks handlers up through `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        let unresolved = DashSet::new();
        for &tag in EventTag::STRUCTURAL {
            unresolved.insert(tag);
        }
        Self {
            resolver,
            handlers: DashMap::new(),
            unresolved,
        }
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Delivers `event` to `listener`.
    ///
    /// Calls the generic event hook, then the generic update hook if the
    /// event is update-shaped, then the hook of every tag in the event's
    /// lineage that has one, most specific first. Hooks run on the calling
    /// thread. A panicking hook unwinds through this call.
    ///
    /// # Errors
    ///
    /// Returns the first hook error, unchanged, and skips the remaining
    /// hooks. Returns `IllegalState` if a resolved handler cannot accept the
    /// event, which means the handler table is broken.
    pub fn dispatch(&self, listener: &dyn ListenerAdapter, event: &Event) -> Result<(), DispatchError> {
        listener
            .on_generic_event(event)
            .map_err(|source| DispatchError::Handler {
                tag: EventTag::GenericEvent,
                source,
            })?;

        if let Some(update) = event.as_update() {
            listener
                .on_generic_update(&update)
                .map_err(|source| DispatchError::Handler {
                    tag: EventTag::Update,
                    source,
                })?;
        }

        for &tag in event.tag().lineage() {
            let Some(entry) = self.handler_for(tag) else {
                continue;
            };
            entry
                .invoke(listener, event)
                .map_err(|error| error.into_dispatch_error(tag))?;
        }

        Ok(())
    }

    /// Returns the handler for `tag`, resolving it on first use.
    #[must_use]
    pub fn handler_for(&self, tag: EventTag) -> Option<&'static HandlerEntry> {
        if let Some(entry) = self.handlers.get(&tag) {
            return Some(*entry);
        }
        if self.unresolved.contains(&tag) {
            return None;
        }

        // The vacant entry keeps the shard locked, so racing callers wait for
        // this resolution instead of repeating it.
        match self.handlers.entry(tag) {
            Entry::Occupied(occupied) => Some(*occupied.get()),
            Entry::Vacant(vacant) => {
                if self.unresolved.contains(&tag) {
                    return None;
                }
                if let Some(entry) = self.resolver.resolve(tag) {
                    tracing::debug!(tag = %tag, handler = entry.name, "resolved event handler");
                    vacant.insert(entry);
                    Some(entry)
                } else {
                    tracing::trace!(tag = %tag, "no handler for event tag");
                    self.unresolved.insert(tag);
                    None
                }
            }
        }
    }

    /// Reports what is known about `tag` without resolving it.
    #[must_use]
    pub fn resolution(&self, tag: EventTag) -> Resolution {
        if let Some(entry) = self.handlers.get(&tag) {
            Resolution::Resolved(*entry)
        } else if self.unresolved.contains(&tag) {
            Resolution::Unresolvable
        } else {
            Resolution::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_tags_start_unresolvable() {
        let dispatcher = EventDispatcher::new();

        for &tag in EventTag::STRUCTURAL {
            assert_eq!(dispatcher.resolution(tag), Resolution::Unresolvable);
            assert!(dispatcher.handler_for(tag).is_none());
        }
        assert_eq!(dispatcher.resolution(EventTag::GuildBan), Resolution::Pending);
    }

    #[test]
    fn test_lookup_caches_both_outcomes() {
        // Arrange
        let dispatcher = EventDispatcher::new();

        // Act
        let found = dispatcher.handler_for(EventTag::GuildBan).unwrap();
        let missing = dispatcher.handler_for(EventTag::GenericUserUpdate);

        // Assert
        assert!(missing.is_none());
        assert!(matches!(
            dispatcher.resolution(EventTag::GuildBan),
            Resolution::Resolved(entry) if std::ptr::eq(entry, found)
        ));
        assert_eq!(
            dispatcher.resolution(EventTag::GenericUserUpdate),
            Resolution::Unresolvable
        );
    }
}
