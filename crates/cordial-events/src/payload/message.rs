//! Message and reaction payloads.

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

/// A message that was received or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Owning guild; `None` in private channels.
    pub guild_id: Option<Snowflake>,
    /// The channel.
    pub channel_id: Snowflake,
    /// The message.
    pub message_id: Snowflake,
    /// The author.
    pub author_id: Snowflake,
    /// Raw message content.
    #[serde(default)]
    pub content: String,
}

/// A message referenced by id only (deletion, reaction purge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    /// Owning guild; `None` in private channels.
    pub guild_id: Option<Snowflake>,
    /// The channel.
    pub channel_id: Snowflake,
    /// The message.
    pub message_id: Snowflake,
}

/// A reaction that was added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// The channel.
    pub channel_id: Snowflake,
    /// The message.
    pub message_id: Snowflake,
    /// The reacting user, if known.
    pub user_id: Option<Snowflake>,
    /// Unicode emoji or custom emoji mention.
    pub emoji: String,
}

/// Several messages deleted at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDelete {
    /// The channel.
    pub channel_id: Snowflake,
    /// The deleted messages.
    pub message_ids: Vec<Snowflake>,
}
