// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod course;
pub mod job;
pub mod route;
pub mod session;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Session Domain
pub use session::{validate_session, AuthToken, Role, Session};

// Route Domain
pub use route::Route;

// Marketplace Records
pub use application::{ApplicationStatus, JobApplication, KnownStatus};
pub use course::Course;
pub use job::Job;
pub use user::User;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
