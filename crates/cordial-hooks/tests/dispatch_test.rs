//! Integration tests for hook ordering, resolution caching and error
//! propagation in the event dispatcher.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Barrier, Mutex};
use std::thread;
use std::time::Duration;

use cordial_core::error::{HandlerFailure, HandlerResult};
use cordial_events::payload::lifecycle::Ready;
use cordial_events::{Event, EventTag, LEAF_TAGS, PropertyChange, UpdateEvent};
use cordial_hooks::{
    DispatchError, EventDispatcher, HANDLER_TABLE, ListenerAdapter, Resolution, handler_name,
};
use cordial_test_support::{CountingResolver, EventFactory, RecordingListener};

struct Silent;

impl ListenerAdapter for Silent {}

/// Overrides only the generic hooks and the channel rename leaf.
#[derive(Default)]
struct RenameWatcher {
    calls: Mutex<Vec<String>>,
}

impl RenameWatcher {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ListenerAdapter for RenameWatcher {
    fn on_generic_event(&self, event: &Event) -> HandlerResult {
        self.calls.lock().unwrap().push(format!("event:{}", event.tag()));
        Ok(())
    }

    fn on_generic_update(&self, update: &UpdateEvent<'_>) -> HandlerResult {
        self.calls
            .lock()
            .unwrap()
            .push(format!("update:{}", update.property_identifier()));
        Ok(())
    }

    fn on_channel_update_name(
        &self,
        _event: &Event,
        change: &PropertyChange<String>,
    ) -> HandlerResult {
        self.calls
            .lock()
            .unwrap()
            .push(format!("rename:{}->{}", change.old_value, change.new_value));
        Ok(())
    }
}

struct PanicsOnReady;

impl ListenerAdapter for PanicsOnReady {
    fn on_ready(&self, _event: &Event, _payload: &Ready) -> HandlerResult {
        panic!("ready hook exploded");
    }
}

#[test]
fn test_channel_rename_runs_generic_hooks_then_leaf_only() {
    // Arrange
    let dispatcher = EventDispatcher::new();
    let listener = RenameWatcher::default();
    let event = EventFactory::default().sample(EventTag::ChannelUpdateName);

    // Act
    let result = dispatcher.dispatch(&listener, &event);

    // Assert
    assert!(result.is_ok());
    assert_eq!(
        listener.calls(),
        vec![
            "event:ChannelUpdateName".to_owned(),
            "update:name".to_owned(),
            "rename:general->lobby".to_owned(),
        ]
    );
}

#[test]
fn test_update_leaf_fires_every_resolved_level_most_specific_first() {
    let dispatcher = EventDispatcher::new();
    let listener = RecordingListener::new();
    let event = EventFactory::default().sample(EventTag::ChannelUpdateName);

    dispatcher.dispatch(&listener, &event).unwrap();

    assert_eq!(
        listener.calls(),
        vec![
            "on_generic_event",
            "on_generic_update",
            "on_channel_update_name",
            "on_generic_channel_update",
            "on_generic_channel",
        ]
    );
}

#[test]
fn test_plain_leaf_skips_generic_update_hook() {
    let dispatcher = EventDispatcher::new();
    let listener = RecordingListener::new();
    let event = EventFactory::default().sample(EventTag::GuildMemberJoin);

    dispatcher.dispatch(&listener, &event).unwrap();

    assert_eq!(
        listener.calls(),
        vec![
            "on_generic_event",
            "on_guild_member_join",
            "on_generic_guild_member",
            "on_generic_guild",
        ]
    );
}

#[test]
fn test_online_status_reaches_presence_and_user_groups() {
    let dispatcher = EventDispatcher::new();
    let listener = RecordingListener::new();
    let event = EventFactory::default().sample(EventTag::UserUpdateOnlineStatus);

    dispatcher.dispatch(&listener, &event).unwrap();

    assert_eq!(
        listener.calls(),
        vec![
            "on_generic_event",
            "on_generic_update",
            "on_user_update_online_status",
            "on_generic_user_presence",
            "on_generic_user",
        ]
    );
    assert_eq!(
        dispatcher.resolution(EventTag::GenericUserUpdate),
        Resolution::Unresolvable
    );
}

#[test]
fn test_events_without_handlers_only_reach_generic_hooks() {
    let dispatcher = EventDispatcher::new();
    let factory = EventFactory::default();
    let listener = RecordingListener::new();

    dispatcher
        .dispatch(&listener, &factory.sample(EventTag::Custom))
        .unwrap();
    dispatcher
        .dispatch(&listener, &factory.sample(EventTag::SelfUpdateMfa))
        .unwrap();

    assert_eq!(
        listener.calls(),
        vec!["on_generic_event", "on_generic_event", "on_generic_update"]
    );
}

#[test]
fn test_failing_leaf_stops_dispatch_and_returns_original_error() {
    // Arrange
    let dispatcher = EventDispatcher::new();
    let listener = RecordingListener::failing_on("on_guild_member_join");
    let event = EventFactory::default().sample(EventTag::GuildMemberJoin);

    // Act
    let error = dispatcher.dispatch(&listener, &event).unwrap_err();

    // Assert
    assert_eq!(error.tag(), EventTag::GuildMemberJoin);
    assert_eq!(error.to_string(), "on_guild_member_join failed");
    assert_eq!(
        listener.calls(),
        vec!["on_generic_event", "on_guild_member_join"]
    );
    let source = error.into_handler_error().unwrap();
    assert_eq!(
        source.downcast_ref::<HandlerFailure>(),
        Some(&HandlerFailure::new("on_guild_member_join failed"))
    );
}

#[test]
fn test_failing_generic_hook_stops_before_any_leaf() {
    let dispatcher = EventDispatcher::new();
    let listener = RecordingListener::failing_on("on_generic_update");
    let event = EventFactory::default().sample(EventTag::ChannelUpdateName);

    let error = dispatcher.dispatch(&listener, &event).unwrap_err();

    assert!(matches!(
        error,
        DispatchError::Handler {
            tag: EventTag::Update,
            ..
        }
    ));
    assert_eq!(
        listener.calls(),
        vec!["on_generic_event", "on_generic_update"]
    );
}

#[test]
fn test_panicking_hook_unwinds_through_dispatch() {
    let dispatcher = EventDispatcher::new();
    let event = EventFactory::default().sample(EventTag::Ready);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        dispatcher.dispatch(&PanicsOnReady, &event)
    }));

    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"ready hook exploded"));
}

#[test]
fn test_unresolvable_tag_is_resolved_once_across_many_dispatches() {
    // Arrange
    let dispatcher = EventDispatcher::with_resolver(CountingResolver::new());
    let factory = EventFactory::default();

    // Act
    for _ in 0..100 {
        dispatcher
            .dispatch(&Silent, &factory.sample(EventTag::Custom))
            .unwrap();
    }

    // Assert
    let resolver = dispatcher.resolver();
    assert_eq!(resolver.attempts(EventTag::Custom), 1);
    assert_eq!(resolver.attempts(EventTag::Event), 0);
    assert_eq!(resolver.attempts(EventTag::GenericEvent), 0);
    assert_eq!(resolver.total_attempts(), 1);
    assert_eq!(
        dispatcher.resolution(EventTag::Custom),
        Resolution::Unresolvable
    );
}

#[test]
fn test_resolved_tags_are_looked_up_once() {
    let dispatcher = EventDispatcher::with_resolver(CountingResolver::new());
    let factory = EventFactory::default();
    let listener = RecordingListener::new();

    for _ in 0..10 {
        dispatcher
            .dispatch(&listener, &factory.sample(EventTag::GuildMemberJoin))
            .unwrap();
    }

    let resolver = dispatcher.resolver();
    assert_eq!(resolver.attempts(EventTag::GuildMemberJoin), 1);
    assert_eq!(resolver.attempts(EventTag::GenericGuildMember), 1);
    assert_eq!(resolver.attempts(EventTag::GenericGuild), 1);
    assert_eq!(listener.count("on_guild_member_join"), 10);
}

#[test]
fn test_concurrent_first_dispatch_resolves_each_tag_once() {
    // Arrange
    const THREADS: usize = 8;
    let dispatcher =
        EventDispatcher::with_resolver(CountingResolver::new().with_delay(Duration::from_millis(5)));
    let factory = EventFactory::default();
    let barrier = Barrier::new(THREADS);
    let listeners: Vec<RecordingListener> =
        (0..THREADS).map(|_| RecordingListener::new()).collect();

    // Act
    thread::scope(|scope| {
        for listener in &listeners {
            let event = factory.sample(EventTag::GuildMemberJoin);
            let custom = factory.sample(EventTag::Custom);
            let (dispatcher, barrier) = (&dispatcher, &barrier);
            scope.spawn(move || {
                barrier.wait();
                dispatcher.dispatch(listener, &event).unwrap();
                dispatcher.dispatch(listener, &custom).unwrap();
            });
        }
    });

    // Assert
    let resolver = dispatcher.resolver();
    assert_eq!(resolver.attempts(EventTag::GuildMemberJoin), 1);
    assert_eq!(resolver.attempts(EventTag::GenericGuildMember), 1);
    assert_eq!(resolver.attempts(EventTag::GenericGuild), 1);
    assert_eq!(resolver.attempts(EventTag::Custom), 1);
    for listener in &listeners {
        assert_eq!(
            listener.calls(),
            vec![
                "on_generic_event",
                "on_guild_member_join",
                "on_generic_guild_member",
                "on_generic_guild",
                "on_generic_event",
            ]
        );
    }
}

#[test]
fn test_every_leaf_dispatches_through_its_own_entry() {
    let dispatcher = EventDispatcher::new();
    let factory = EventFactory::default();

    for &tag in LEAF_TAGS {
        let event = factory.sample(tag);

        assert!(dispatcher.dispatch(&Silent, &event).is_ok(), "{tag}");
        match dispatcher.handler_for(tag) {
            Some(entry) => {
                assert_eq!(entry.accepts, tag);
                assert!(entry.invoke(&Silent, &event).is_ok(), "{tag}");
            }
            None => assert_eq!(tag, EventTag::Custom),
        }
    }
}

#[test]
fn test_sample_events_are_update_shaped_exactly_when_their_tag_is() {
    let factory = EventFactory::default();

    for &tag in LEAF_TAGS {
        let event = factory.sample(tag);

        assert_eq!(event.as_update().is_some(), tag.is_update(), "{tag}");
    }
}

#[test]
fn test_table_names_follow_the_handler_naming_convention() {
    for entry in HANDLER_TABLE {
        assert_eq!(entry.name, handler_name(entry.accepts));
    }
}
