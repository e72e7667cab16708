//! Cordial Core: shared types for the gateway event hooks.
//!
//! This crate defines the session context every event points back to, the
//! Discord identifier type, event metadata and the error types handlers
//! return. It knows nothing about the concrete event taxonomy.

pub mod clock;
pub mod error;
pub mod event;
pub mod session;
pub mod snowflake;
