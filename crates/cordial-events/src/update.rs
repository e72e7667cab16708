//! Update-shaped events: a single property changed from an old to a new value.

use std::fmt;

use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::Event;
use crate::tag::EventTag;

/// Payload of an update leaf: the entity that changed and both values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyChange<T> {
    /// The entity whose property changed.
    pub entity_id: Snowflake,
    /// Value before the change.
    pub old_value: T,
    /// Value after the change.
    pub new_value: T,
}

impl<T> PropertyChange<T> {
    /// Creates a new property change.
    #[must_use]
    pub fn new(entity_id: Snowflake, old_value: T, new_value: T) -> Self {
        Self {
            entity_id,
            old_value,
            new_value,
        }
    }
}

/// Type-erased access to the old and new values of an update payload.
pub trait PropertyUpdate: Send + Sync + fmt::Debug {
    /// The entity that changed, if the update concerns one.
    fn entity_id(&self) -> Option<Snowflake>;

    /// Serializes the value before the change.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    fn old_value(&self) -> Result<Value, serde_json::Error>;

    /// Serializes the value after the change.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    fn new_value(&self) -> Result<Value, serde_json::Error>;
}

impl<T> PropertyUpdate for PropertyChange<T>
where
    T: Serialize + Send + Sync + fmt::Debug,
{
    fn entity_id(&self) -> Option<Snowflake> {
        Some(self.entity_id)
    }

    fn old_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.old_value)
    }

    fn new_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.new_value)
    }
}

/// View of an update-shaped event, handed to the generic update hook.
///
/// Only obtainable through [`Event::as_update`], so the wrapped event is
/// always update-shaped.
#[derive(Debug, Clone, Copy)]
pub struct UpdateEvent<'a> {
    event: &'a Event,
    change: &'a dyn PropertyUpdate,
    property_identifier: &'static str,
}

impl<'a> UpdateEvent<'a> {
    pub(crate) fn new(
        event: &'a Event,
        change: &'a dyn PropertyUpdate,
        property_identifier: &'static str,
    ) -> Self {
        Self {
            event,
            change,
            property_identifier,
        }
    }

    /// The full event.
    #[must_use]
    pub fn event(&self) -> &'a Event {
        self.event
    }

    /// The most specific tag of the event.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        self.event.tag()
    }

    /// Name of the changed property, e.g. `"name"`.
    #[must_use]
    pub fn property_identifier(&self) -> &'static str {
        self.property_identifier
    }

    /// The entity that changed, if any.
    #[must_use]
    pub fn entity_id(&self) -> Option<Snowflake> {
        self.change.entity_id()
    }

    /// The value before the change, as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn old_value(&self) -> Result<Value, serde_json::Error> {
        self.change.old_value()
    }

    /// The value after the change, as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn new_value(&self) -> Result<Value, serde_json::Error> {
        self.change.new_value()
    }
}
