//! Integration tests for listener registration and fan-out in the event
//! manager.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use cordial_core::error::HandlerFailure;
use cordial_events::EventTag;
use cordial_hooks::{EventListener, EventManager, HandleReport};
use cordial_test_support::{EventFactory, RecordingListener};

#[test]
fn test_failing_listener_does_not_stop_delivery() {
    // Arrange
    let manager = EventManager::new();
    let failing = Arc::new(RecordingListener::failing_on("on_generic_event"));
    let healthy = Arc::new(RecordingListener::new());
    manager.register(failing.clone());
    manager.register(healthy.clone());
    let event = EventFactory::default().sample(EventTag::MessageReceived);

    // Act
    let report = manager.handle(&event);

    // Assert
    assert_eq!(
        report,
        HandleReport {
            delivered: 1,
            failed: 1
        }
    );
    assert_eq!(failing.calls(), vec!["on_generic_event"]);
    assert_eq!(
        healthy.calls(),
        vec![
            "on_generic_event",
            "on_message_received",
            "on_generic_message"
        ]
    );
}

#[test]
fn test_unregister_removes_every_registration_of_that_listener() {
    let manager = EventManager::new();
    let first: Arc<dyn EventListener> = Arc::new(RecordingListener::new());
    let second: Arc<dyn EventListener> = Arc::new(RecordingListener::new());
    manager.register(Arc::clone(&first));
    manager.register(Arc::clone(&second));
    manager.register(Arc::clone(&first));

    let removed = manager.unregister(&first);
    let removed_again = manager.unregister(&first);

    assert!(removed);
    assert!(!removed_again);
    let remaining = manager.registered_listeners();
    assert_eq!(remaining.len(), 1);
    assert!(Arc::ptr_eq(&remaining[0], &second));
}

#[test]
fn test_closure_listener_fires_for_its_group_only() {
    let manager = EventManager::new();
    let factory = EventFactory::default();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    manager.on(EventTag::GenericGuild, move |_event| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    manager.handle(&factory.sample(EventTag::GuildBan));
    manager.handle(&factory.sample(EventTag::GuildMemberJoin));
    let report = manager.handle(&factory.sample(EventTag::MessageReceived));

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(report.delivered, 1);
}

#[test]
fn test_closure_listener_error_is_counted() {
    let manager = EventManager::new();
    manager.on(EventTag::GuildBan, |_event| {
        Err(HandlerFailure::new("cannot audit ban").into())
    });

    let report = manager.handle(&EventFactory::default().sample(EventTag::GuildBan));

    assert_eq!(report.failed, 1);
    assert_eq!(report.delivered, 0);
}

#[test]
fn test_listener_registered_during_handling_sees_the_next_event() {
    // Arrange
    let manager = Arc::new(EventManager::new());
    let late = Arc::new(RecordingListener::new());
    let weak: Weak<EventManager> = Arc::downgrade(&manager);
    let to_add = Arc::clone(&late);
    manager.on(EventTag::Ready, move |_event| {
        if let Some(manager) = weak.upgrade() {
            manager.register(to_add.clone());
        }
        Ok(())
    });
    let factory = EventFactory::default();

    // Act
    let first = manager.handle(&factory.sample(EventTag::Ready));
    let second = manager.handle(&factory.sample(EventTag::Ready));

    // Assert
    assert_eq!(first.delivered, 1);
    assert_eq!(second.delivered, 2);
    assert_eq!(late.calls(), vec!["on_generic_event", "on_ready"]);
}
