//! Listeners installed by the replay binary.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use cordial_core::error::HandlerResult;
use cordial_events::payload::lifecycle::{Disconnect, Exception, Ready, Shutdown};
use cordial_events::{Event, EventTag, UpdateEvent};
use cordial_hooks::ListenerAdapter;

/// Logs every event it receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl ListenerAdapter for TracingListener {
    fn on_generic_event(&self, event: &Event) -> HandlerResult {
        tracing::info!(
            tag = %event.tag(),
            response_number = event.metadata.response_number,
            shard = %event.metadata.session.shard,
            "event received"
        );
        Ok(())
    }

    fn on_generic_update(&self, update: &UpdateEvent<'_>) -> HandlerResult {
        let old_value = update.old_value()?;
        let new_value = update.new_value()?;
        tracing::debug!(
            tag = %update.tag(),
            property = update.property_identifier(),
            entity_id = ?update.entity_id(),
            old = %old_value,
            new = %new_value,
            "property changed"
        );
        Ok(())
    }

    fn on_ready(&self, _event: &Event, ready: &Ready) -> HandlerResult {
        tracing::info!(
            available = ready.guild_available_count,
            unavailable = ready.guild_unavailable_count,
            "session ready"
        );
        Ok(())
    }

    fn on_disconnect(&self, _event: &Event, disconnect: &Disconnect) -> HandlerResult {
        tracing::warn!(
            close_code = ?disconnect.close_code,
            closed_by_server = disconnect.closed_by_server,
            "gateway disconnected"
        );
        Ok(())
    }

    fn on_shutdown(&self, _event: &Event, shutdown: &Shutdown) -> HandlerResult {
        tracing::info!(close_code = ?shutdown.close_code, "session shut down");
        Ok(())
    }

    fn on_exception(&self, _event: &Event, exception: &Exception) -> HandlerResult {
        tracing::warn!(
            message = %exception.message,
            logged = exception.logged,
            "client reported an exception"
        );
        Ok(())
    }
}

/// Counts events per leaf tag and per group.
///
/// Structural tags are not counted.
#[derive(Debug, Default)]
pub struct TallyListener {
    counts: Mutex<BTreeMap<EventTag, usize>>,
}

impl TallyListener {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events seen under `tag`.
    #[must_use]
    pub fn count(&self, tag: EventTag) -> usize {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tag)
            .copied()
            .unwrap_or(0)
    }

    /// Returns every non-zero count, ordered by tag.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<EventTag, usize> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ListenerAdapter for TallyListener {
    fn on_generic_event(&self, event: &Event) -> HandlerResult {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        for &tag in event.tag().lineage() {
            if !tag.is_structural() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cordial_hooks::EventDispatcher;
    use cordial_test_support::EventFactory;

    use super::*;

    #[test]
    fn test_tally_counts_leaf_and_groups() {
        // Arrange
        let dispatcher = EventDispatcher::new();
        let factory = EventFactory::default();
        let tally = TallyListener::new();

        // Act
        for tag in [
            EventTag::GuildMemberJoin,
            EventTag::GuildBan,
            EventTag::ChannelCreate,
        ] {
            dispatcher.dispatch(&tally, &factory.sample(tag)).unwrap();
        }

        // Assert
        assert_eq!(tally.count(EventTag::GuildMemberJoin), 1);
        assert_eq!(tally.count(EventTag::GenericGuildMember), 1);
        assert_eq!(tally.count(EventTag::GenericGuild), 2);
        assert_eq!(tally.count(EventTag::GenericChannel), 1);
        assert_eq!(tally.count(EventTag::Event), 0);
        assert_eq!(tally.snapshot().len(), 6);
    }

    #[test]
    fn test_tracing_listener_accepts_every_leaf() {
        let dispatcher = EventDispatcher::new();
        let factory = EventFactory::default();

        for &tag in cordial_events::LEAF_TAGS {
            assert!(
                dispatcher.dispatch(&TracingListener, &factory.sample(tag)).is_ok(),
                "{tag}"
            );
        }
    }
}
