//! Session lifecycle payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::update::PropertyUpdate;
use cordial_core::snowflake::Snowflake;

/// Connection status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The session object is being set up.
    Initializing,
    /// Set up, not yet logging in.
    Initialized,
    /// Logging in over REST.
    LoggingIn,
    /// Opening the gateway websocket.
    ConnectingToWebsocket,
    /// Sending the identify payload.
    IdentifyingSession,
    /// Waiting for the gateway to confirm the login.
    AwaitingLoginConfirmation,
    /// Loading guilds and caches.
    LoadingSubsystems,
    /// Fully connected.
    Connected,
    /// The websocket closed.
    Disconnected,
    /// Queued to reconnect.
    ReconnectQueued,
    /// Backing off before reconnecting.
    WaitingToReconnect,
    /// Reconnecting.
    AttemptingToReconnect,
    /// Shutting down.
    ShuttingDown,
    /// Shut down.
    Shutdown,
    /// The token was rejected.
    FailedToLogin,
}

/// The session finished loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ready {
    /// Guilds that loaded.
    pub guild_available_count: u32,
    /// Guilds that were unavailable at login.
    pub guild_unavailable_count: u32,
}

/// A dropped connection was resumed without losing events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resumed {}

/// A dropped connection was re-established with a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconnected {}

/// The gateway connection closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disconnect {
    /// Websocket close code, if one was received.
    pub close_code: Option<u16>,
    /// Whether the server initiated the close.
    pub closed_by_server: bool,
}

/// The session shut down for good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shutdown {
    /// Websocket close code, if one was received.
    pub close_code: Option<u16>,
}

/// The session status changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status before the change.
    pub old_status: Status,
    /// Status after the change.
    pub new_status: Status,
}

impl PropertyUpdate for StatusChange {
    fn entity_id(&self) -> Option<Snowflake> {
        None
    }

    fn old_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.old_status)
    }

    fn new_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.new_status)
    }
}

/// The measured gateway heartbeat latency changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPing {
    /// Previous latency in milliseconds.
    pub old_ping_ms: i64,
    /// New latency in milliseconds.
    pub new_ping_ms: i64,
}

impl PropertyUpdate for GatewayPing {
    fn entity_id(&self) -> Option<Snowflake> {
        None
    }

    fn old_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.old_ping_ms)
    }

    fn new_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.new_ping_ms)
    }
}

/// An error was raised somewhere in the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    /// The error message.
    pub message: String,
    /// Whether the client already logged it.
    pub logged: bool,
}

/// A raw gateway package, delivered before it is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGateway {
    /// The dispatch type, e.g. `"MESSAGE_CREATE"`.
    pub package_type: String,
    /// The undecoded package.
    pub package: Value,
}

/// A REST request completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: String,
    /// The compiled route.
    pub route: String,
    /// Response status, if a response arrived.
    pub status: Option<u16>,
}
