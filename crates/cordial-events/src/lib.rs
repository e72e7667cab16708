//! Cordial Events: the closed gateway event taxonomy.
//!
//! Every event has exactly one most specific [`EventTag`] and a static,
//! precomputed ancestor chain ([`EventTag::lineage`]) ending at the root tag
//! [`EventTag::GenericEvent`]. Payloads carry only the identifiers and old/new
//! values a handler needs.

pub mod event;
pub mod kind;
pub mod payload;
pub mod tag;
pub mod update;

pub use event::{Event, EventRecord};
pub use kind::{EventKind, LEAF_TAGS};
pub use tag::EventTag;
pub use update::{PropertyChange, PropertyUpdate, UpdateEvent};
