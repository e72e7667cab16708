//! Shared test fixtures and listener doubles for Cordial.

mod clock;
mod fixtures;
mod listener;
mod resolver;

pub use clock::FixedClock;
pub use fixtures::{EventFactory, sample_kind, session};
pub use listener::RecordingListener;
pub use resolver::CountingResolver;
