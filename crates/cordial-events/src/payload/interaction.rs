//! Interaction payloads.

use std::collections::BTreeMap;

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A slash command was invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandInteraction {
    /// The interaction.
    pub interaction_id: Snowflake,
    /// The invoking user.
    pub user_id: Snowflake,
    /// Channel the command was used in, if any.
    pub channel_id: Option<Snowflake>,
    /// Full command name, e.g. `"mod ban"`.
    pub command_name: String,
    /// Option values by name.
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
}

/// A user or message context menu command was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextInteraction {
    /// The interaction.
    pub interaction_id: Snowflake,
    /// The invoking user.
    pub user_id: Snowflake,
    /// Command name.
    pub command_name: String,
    /// The user or message the command targets.
    pub target_id: Snowflake,
}

/// A message component (button, select menu) was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInteraction {
    /// The interaction.
    pub interaction_id: Snowflake,
    /// The invoking user.
    pub user_id: Snowflake,
    /// The message carrying the component.
    pub message_id: Snowflake,
    /// Developer-defined component id.
    pub custom_id: String,
    /// Selected values; empty for buttons.
    #[serde(default)]
    pub values: Vec<String>,
}

/// A modal was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalSubmit {
    /// The interaction.
    pub interaction_id: Snowflake,
    /// The invoking user.
    pub user_id: Snowflake,
    /// Developer-defined modal id.
    pub modal_id: String,
    /// Submitted text input values by input id.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// A command option asked for autocomplete suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoComplete {
    /// The interaction.
    pub interaction_id: Snowflake,
    /// The invoking user.
    pub user_id: Snowflake,
    /// Command name.
    pub command_name: String,
    /// Name of the focused option.
    pub focused_option: String,
    /// What the user typed so far.
    pub value: String,
}
