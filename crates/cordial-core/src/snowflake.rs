//! Discord snowflake identifiers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01).
pub const DISCORD_EPOCH_MILLIS: i64 = 1_420_070_400_000;

/// A Discord entity id.
///
/// The upper 42 bits hold the creation time in milliseconds since
/// [`DISCORD_EPOCH_MILLIS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Returns the raw id.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the time this id was minted.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        // 64 - 22 bits always fit in an i64.
        let offset = (self.0 >> 22) as i64;
        DateTime::from_timestamp_millis(DISCORD_EPOCH_MILLIS + offset)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_created_at_decodes_discord_timestamp() {
        // Arrange
        let id = Snowflake(175_928_847_299_117_063);

        // Act
        let created = id.created_at();

        // Assert
        let expected = Utc.with_ymd_and_hms(2016, 4, 30, 11, 18, 25).unwrap()
            + chrono::Duration::milliseconds(796);
        assert_eq!(created, Some(expected));
    }

    #[test]
    fn test_zero_id_is_discord_epoch() {
        let created = Snowflake(0).created_at().unwrap();

        assert_eq!(created.timestamp_millis(), DISCORD_EPOCH_MILLIS);
    }

    #[test]
    fn test_snowflake_serializes_as_bare_number() {
        let json = serde_json::to_value(Snowflake(42)).unwrap();

        assert_eq!(json, serde_json::json!(42));
    }
}
