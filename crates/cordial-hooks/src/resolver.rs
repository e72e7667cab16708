//! Mapping event tags to handler table entries.

use cordial_events::EventTag;

use crate::adapter::{HANDLER_TABLE, HandlerEntry};

/// Prefix of every handler name.
pub const HANDLER_PREFIX: &str = "on";

/// Suffix stripped from a descriptor before it becomes a handler name.
pub const DESCRIPTOR_SUFFIX: &str = "Event";

/// Returns the conventional handler name for a tag: `"on"` followed by the
/// tag's descriptor without its trailing `"Event"`.
///
/// `ChannelUpdateNameEvent` becomes `onChannelUpdateName`, and the root
/// `GenericEvent` becomes `onGeneric`.
#[must_use]
pub fn handler_name(tag: EventTag) -> String {
    let descriptor = tag.descriptor();
    let stem = descriptor.strip_suffix(DESCRIPTOR_SUFFIX).unwrap_or(descriptor);
    format!("{HANDLER_PREFIX}{stem}")
}

/// Finds the handler for a tag.
///
/// The dispatcher calls [`resolve`](HandlerResolver::resolve) at most once
/// per tag and caches the outcome, so implementations may be slow.
pub trait HandlerResolver: Send + Sync {
    /// Returns the entry handling `tag`, or `None` if there is none.
    fn resolve(&self, tag: EventTag) -> Option<&'static HandlerEntry>;
}

/// Resolves handlers by name, scanning a handler table.
///
/// An entry matches when its name equals [`handler_name`] of the tag and it
/// accepts exactly that tag. An entry with the right name but another
/// accepted tag is ignored, and the tag is treated as having no handler.
#[derive(Debug, Clone, Copy)]
pub struct ConventionResolver {
    table: &'static [HandlerEntry],
}

impl ConventionResolver {
    /// Creates a resolver over [`HANDLER_TABLE`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_table(HANDLER_TABLE)
    }

    /// Creates a resolver over another table.
    #[must_use]
    pub const fn with_table(table: &'static [HandlerEntry]) -> Self {
        Self { table }
    }
}

impl Default for ConventionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerResolver for ConventionResolver {
    fn resolve(&self, tag: EventTag) -> Option<&'static HandlerEntry> {
        let name = handler_name(tag);
        self.table
            .iter()
            .find(|entry| entry.name == name && entry.accepts == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ListenerAdapter;
    use crate::error::InvocationError;
    use cordial_events::Event;

    fn never(_: &dyn ListenerAdapter, _: &Event) -> Result<(), InvocationError> {
        Ok(())
    }

    static MISLABELED: &[HandlerEntry] = &[HandlerEntry {
        name: "onChannelCreate",
        accepts: EventTag::ChannelDelete,
        invoke: never,
    }];

    #[test]
    fn test_handler_name_strips_event_suffix() {
        assert_eq!(handler_name(EventTag::ChannelUpdateName), "onChannelUpdateName");
        assert_eq!(handler_name(EventTag::GenericGuildMember), "onGenericGuildMember");
        assert_eq!(handler_name(EventTag::GenericEvent), "onGeneric");
        assert_eq!(handler_name(EventTag::Update), "onUpdate");
        assert_eq!(handler_name(EventTag::Event), "on");
    }

    #[test]
    fn test_resolves_leaf_and_group_entries() {
        let resolver = ConventionResolver::new();

        let leaf = resolver.resolve(EventTag::GuildMemberJoin).unwrap();
        let group = resolver.resolve(EventTag::GenericGuildMember).unwrap();

        assert_eq!(leaf.accepts, EventTag::GuildMemberJoin);
        assert_eq!(group.name, "onGenericGuildMember");
    }

    #[test]
    fn test_tags_without_hooks_resolve_to_none() {
        let resolver = ConventionResolver::default();

        for tag in [
            EventTag::GenericUserUpdate,
            EventTag::Custom,
            EventTag::GenericEvent,
            EventTag::Event,
            EventTag::Update,
        ] {
            assert!(resolver.resolve(tag).is_none(), "{tag}");
        }
    }

    #[test]
    fn test_entry_with_wrong_accepted_tag_is_ignored() {
        let resolver = ConventionResolver::with_table(MISLABELED);

        assert!(resolver.resolve(EventTag::ChannelCreate).is_none());
        assert!(resolver.resolve(EventTag::ChannelDelete).is_none());
    }
}
