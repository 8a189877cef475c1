// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Role, Route};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

/// Emitted after a successful login stored the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOpened {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: i64,
    pub role: Option<Role>,
}

impl SessionOpened {
    pub fn new(user_id: i64, role: Option<Role>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            role,
        }
    }
}

impl DomainEvent for SessionOpened {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SessionOpened" }
}

/// Emitted after logout wiped the stored session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl SessionClosed {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for SessionClosed {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for SessionClosed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SessionClosed" }
}

/// Emitted whenever the session gate orders a navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectIssued {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub from: Route,
    pub to: Route,
}

impl RedirectIssued {
    pub fn new(from: Route, to: Route) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            from,
            to,
        }
    }
}

impl DomainEvent for RedirectIssued {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "RedirectIssued" }
}

// ============================================================================
// APPLICATION EVENTS
// ============================================================================

/// Emitted after the backend accepted a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: i64,
    pub job_seeker_id: i64,
}

impl ApplicationSubmitted {
    pub fn new(job_id: i64, job_seeker_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
            job_seeker_id,
        }
    }
}

impl DomainEvent for ApplicationSubmitted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ApplicationSubmitted" }
}

/// Where a duplicate submission was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicateDetection {
    /// Refused before any network call, from the applied-set.
    Local,
    /// The backend answered 409; it is the source of truth.
    Backend,
}

/// Emitted when a submission is refused because the user already applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateApplicationBlocked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: i64,
    pub detected_by: DuplicateDetection,
}

impl DuplicateApplicationBlocked {
    pub fn new(job_id: i64, detected_by: DuplicateDetection) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
            detected_by,
        }
    }
}

impl DomainEvent for DuplicateApplicationBlocked {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DuplicateApplicationBlocked" }
}
