// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod application_service;
pub mod course_catalog;
pub mod job_board;
pub mod session_gate;
pub mod session_service;

#[cfg(test)]
mod application_service_tests;

// Re-export all services and their types
pub use application_service::{
    ApplicationService,
    SubmitOutcome,
};

pub use course_catalog::{
    CourseCatalogService,
    CourseFilter,
};

pub use job_board::{
    JobBoard,
    JobBoardService,
    JobFilter,
    JobListing,
};

pub use session_gate::{
    GateDecision,
    SessionGate,
};

pub use session_service::{
    SessionService,
};
