//! Application-defined events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event the application fires through the same pipeline as gateway
/// events. It has no dedicated hook; only the generic hooks see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEvent {
    /// Application-chosen event name.
    pub name: String,
    /// Arbitrary payload.
    #[serde(default)]
    pub data: Value,
}
