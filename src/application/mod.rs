// src/application/mod.rs
//
// Application Layer - wiring and configuration for the embedding shell.

pub mod config;
pub mod state;

pub use config::ClientConfig;
pub use state::AppState;
