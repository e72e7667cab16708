//! Event payloads, grouped by the part of the API they describe.
//!
//! Update leaves use [`PropertyChange`](crate::update::PropertyChange)
//! directly; the structs here cover everything else.

pub mod channel;
pub mod custom;
pub mod entity;
pub mod guild;
pub mod interaction;
pub mod lifecycle;
pub mod message;
pub mod user;
