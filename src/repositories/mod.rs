// src/repositories/mod.rs
//
// Client-local persistence adapters.

pub mod session_repository;

pub use session_repository::{
    InMemorySessionRepository, JsonFileSessionRepository, SessionRepository,
};
