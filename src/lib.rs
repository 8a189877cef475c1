// src/lib.rs
// JobHub - client-side core for the job marketplace
//
// Architecture:
// - Domain-centric: session, routing and marketplace records live in domain
// - Event-driven: services publish facts; the embedding shell reacts
// - Explicit: the gate and the duplicate guard are plain functions over state
// - Backend-authoritative: this crate never owns marketplace data, it caches
//   just enough of it to route and to guard submissions

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod api;
pub mod domain;
pub mod error;
pub mod events;
pub mod notifications;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_session,
    ApplicationStatus,
    AuthToken,
    Course,
    DomainError,
    DomainResult,
    Job,
    JobApplication,
    KnownStatus,
    Role,
    Route,
    Session,
    User,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    ApplicationSubmitted,
    DomainEvent,
    DuplicateApplicationBlocked,
    DuplicateDetection,
    EventBus,
    EventLogEntry,
    RedirectIssued,
    SessionClosed,
    SessionOpened,
};

// ============================================================================
// PUBLIC API - Notifications
// ============================================================================

pub use notifications::{LogNotifier, Notification, NotificationLevel, Notifier};

// ============================================================================
// PUBLIC API - Backend API
// ============================================================================

pub use api::{
    HttpMarketplaceApi,
    LoginOutcome,
    MarketplaceApi,
    NewAccount,
    NewApplication,
    RegistrationRequest,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    InMemorySessionRepository,
    JsonFileSessionRepository,
    SessionRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Application-Submission Guard
    ApplicationService,
    // Course catalog
    CourseCatalogService,
    CourseFilter,
    // Session Gate
    GateDecision,
    JobBoard,
    // Job board
    JobBoardService,
    JobFilter,
    JobListing,
    SessionGate,
    // Session lifecycle
    SessionService,
    SubmitOutcome,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ClientConfig};
