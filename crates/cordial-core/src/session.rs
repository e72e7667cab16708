//! The client session an event belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Returned when a shard id does not fit in the shard total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid shard: id {shard_id} is out of range for a total of {shard_total}")]
pub struct InvalidShard {
    /// The requested shard id.
    pub shard_id: u32,
    /// The requested shard total.
    pub shard_total: u32,
}

/// Which shard of a sharded bot a session is connected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShardInfo {
    /// Zero-based shard id.
    pub shard_id: u32,
    /// Number of shards the bot runs with.
    pub shard_total: u32,
}

impl ShardInfo {
    /// The only shard of an unsharded bot.
    pub const SINGLE: Self = Self {
        shard_id: 0,
        shard_total: 1,
    };

    /// Creates a shard descriptor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShard` if `shard_id` is not below `shard_total`.
    pub fn new(shard_id: u32, shard_total: u32) -> Result<Self, InvalidShard> {
        if shard_id >= shard_total {
            return Err(InvalidShard {
                shard_id,
                shard_total,
            });
        }
        Ok(Self {
            shard_id,
            shard_total,
        })
    }
}

impl fmt::Display for ShardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} / {}]", self.shard_id, self.shard_total)
    }
}

/// The owning client session every event points back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Local identifier of this session.
    pub session_id: Uuid,
    /// The shard the session is connected as.
    pub shard: ShardInfo,
}

impl SessionContext {
    /// Creates a session with a fresh identifier.
    #[must_use]
    pub fn new(shard: ShardInfo) -> Self {
        Self::with_id(Uuid::new_v4(), shard)
    }

    /// Creates a session with a known identifier.
    #[must_use]
    pub fn with_id(session_id: Uuid, shard: ShardInfo) -> Self {
        Self { session_id, shard }
    }
}
