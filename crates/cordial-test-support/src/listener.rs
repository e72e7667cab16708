//! Test listener: records which hooks were called, in order.

use std::sync::Mutex;

use cordial_core::error::{HandlerFailure, HandlerResult};
use cordial_events::payload::channel::ChannelRef;
use cordial_events::payload::guild::GuildUser;
use cordial_events::payload::interaction::CommandInteraction;
use cordial_events::payload::lifecycle::Ready;
use cordial_events::payload::message::Message;
use cordial_events::payload::user::OnlineStatus;
use cordial_events::{Event, PropertyChange, UpdateEvent};
use cordial_hooks::ListenerAdapter;

/// A listener adapter that overrides a cross-section of hooks and records
/// the name of each one it sees.
///
/// Overridden: both generic hooks; the ready leaf; the channel create and
/// rename leaves and their groups; guild member join and its groups; message
/// receipt and its group; online status and the user groups; slash commands
/// and the interaction groups. Every other hook keeps its default.
#[derive(Debug, Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<&'static str>>,
    fail_on: Option<&'static str>,
}

impl RecordingListener {
    /// Create a listener whose hooks all succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a listener whose `hook` returns a [`HandlerFailure`] after
    /// being recorded.
    #[must_use]
    pub fn failing_on(hook: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(hook),
        }
    }

    /// Returns the recorded hook names.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times `hook` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn count(&self, hook: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|call| **call == hook).count()
    }

    fn record(&self, hook: &'static str) -> HandlerResult {
        self.calls.lock().unwrap().push(hook);
        if self.fail_on == Some(hook) {
            return Err(HandlerFailure::new(format!("{hook} failed")).into());
        }
        Ok(())
    }
}

impl ListenerAdapter for RecordingListener {
    fn on_generic_event(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_event")
    }

    fn on_generic_update(&self, _update: &UpdateEvent<'_>) -> HandlerResult {
        self.record("on_generic_update")
    }

    fn on_ready(&self, _event: &Event, _payload: &Ready) -> HandlerResult {
        self.record("on_ready")
    }

    fn on_channel_create(&self, _event: &Event, _payload: &ChannelRef) -> HandlerResult {
        self.record("on_channel_create")
    }

    fn on_channel_update_name(
        &self,
        _event: &Event,
        _payload: &PropertyChange<String>,
    ) -> HandlerResult {
        self.record("on_channel_update_name")
    }

    fn on_generic_channel_update(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_channel_update")
    }

    fn on_generic_channel(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_channel")
    }

    fn on_guild_member_join(&self, _event: &Event, _payload: &GuildUser) -> HandlerResult {
        self.record("on_guild_member_join")
    }

    fn on_generic_guild_member(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_guild_member")
    }

    fn on_generic_guild(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_guild")
    }

    fn on_message_received(&self, _event: &Event, _payload: &Message) -> HandlerResult {
        self.record("on_message_received")
    }

    fn on_generic_message(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_message")
    }

    fn on_user_update_online_status(
        &self,
        _event: &Event,
        _payload: &PropertyChange<OnlineStatus>,
    ) -> HandlerResult {
        self.record("on_user_update_online_status")
    }

    fn on_generic_user_presence(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_user_presence")
    }

    fn on_generic_user(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_user")
    }

    fn on_slash_command_interaction(
        &self,
        _event: &Event,
        _payload: &CommandInteraction,
    ) -> HandlerResult {
        self.record("on_slash_command_interaction")
    }

    fn on_generic_command_interaction(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_command_interaction")
    }

    fn on_generic_interaction_create(&self, _event: &Event) -> HandlerResult {
        self.record("on_generic_interaction_create")
    }
}
