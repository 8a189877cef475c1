// src/events/mod.rs
//
// Event system: typed facts services emit and the UI shell reacts to.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use types::{
    ApplicationSubmitted, DomainEvent, DuplicateApplicationBlocked, DuplicateDetection,
    RedirectIssued, SessionClosed, SessionOpened,
};

use std::sync::Arc;

/// Create a shared event bus.
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::new())
}
