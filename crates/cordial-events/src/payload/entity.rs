//! Role, emoji, sticker and stage instance payloads.

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

/// A role that was created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    /// The guild.
    pub guild_id: Snowflake,
    /// The role.
    pub role_id: Snowflake,
}

/// A custom emoji that was added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRef {
    /// The guild.
    pub guild_id: Snowflake,
    /// The emoji.
    pub emoji_id: Snowflake,
    /// Emoji name at the time of the event.
    pub name: String,
}

/// A guild sticker that was added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerRef {
    /// The guild.
    pub guild_id: Snowflake,
    /// The sticker.
    pub sticker_id: Snowflake,
}

/// A stage instance that was created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInstanceRef {
    /// The guild.
    pub guild_id: Snowflake,
    /// The stage channel.
    pub channel_id: Snowflake,
    /// The stage instance.
    pub stage_instance_id: Snowflake,
}
