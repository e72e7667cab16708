//! User and presence payloads.

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

/// Presence status shown for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    /// Online.
    Online,
    /// Away.
    Idle,
    /// Do not disturb.
    #[serde(rename = "dnd")]
    DoNotDisturb,
    /// Online but shown as offline.
    Invisible,
    /// Offline.
    Offline,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

/// A user started typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typing {
    /// Owning guild; `None` in private channels.
    pub guild_id: Option<Snowflake>,
    /// The channel.
    pub channel_id: Snowflake,
    /// The user.
    pub user_id: Snowflake,
}

/// An activity (game, stream, custom status) started or ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// The guild the presence was observed in.
    pub guild_id: Snowflake,
    /// The user.
    pub user_id: Snowflake,
    /// Activity name.
    pub name: String,
}
