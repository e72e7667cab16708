//! Guild, member, invite, voice and permission override payloads.

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

/// A guild-level event with nothing beyond the guild itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRef {
    /// The guild.
    pub guild_id: Snowflake,
}

/// A guild event about one user (ban, unban, join, removal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildUser {
    /// The guild.
    pub guild_id: Snowflake,
    /// The user.
    pub user_id: Snowflake,
}

/// Roles added to or removed from a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRoles {
    /// The guild.
    pub guild_id: Snowflake,
    /// The member.
    pub member_id: Snowflake,
    /// The roles that were added or removed.
    pub role_ids: Vec<Snowflake>,
}

/// An invite that was created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    /// The guild.
    pub guild_id: Snowflake,
    /// The channel the invite points to.
    pub channel_id: Snowflake,
    /// The invite code.
    pub code: String,
}

/// A voice state flag (mute, deafen) toggled for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceFlag {
    /// The guild.
    pub guild_id: Snowflake,
    /// The member.
    pub member_id: Snowflake,
    /// The new state of the flag.
    pub enabled: bool,
}

/// A channel permission override that was created, updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverride {
    /// The guild.
    pub guild_id: Snowflake,
    /// The channel carrying the override.
    pub channel_id: Snowflake,
    /// The role or member the override targets.
    pub target_id: Snowflake,
    /// Raw allowed permission bits.
    pub allow: u64,
    /// Raw denied permission bits.
    pub deny: u64,
}
