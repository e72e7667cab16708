//! Channel and thread payloads.

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

/// A channel that was created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    /// Owning guild; `None` for private channels.
    pub guild_id: Option<Snowflake>,
    /// The channel.
    pub channel_id: Snowflake,
}

/// A thread that became visible or hidden to the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRef {
    /// Owning guild.
    pub guild_id: Snowflake,
    /// The thread channel.
    pub thread_id: Snowflake,
    /// The channel the thread was started in.
    pub parent_id: Snowflake,
}

/// A member joined or left a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMember {
    /// The thread channel.
    pub thread_id: Snowflake,
    /// The member.
    pub member_id: Snowflake,
}
