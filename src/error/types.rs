// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Backend rejected the bearer token (HTTP 401).
    #[error("Not authenticated: please log in again")]
    Unauthorized,

    /// Backend reports an application already exists for this job (HTTP 409).
    #[error("Already applied to this job")]
    DuplicateApplication,

    #[error("Resource not found")]
    NotFound,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx backend response that is not 401/404/409.
    #[error("Backend returned status {status}")]
    Api { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Other(format!("Date parse error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_mentions_relogin() {
        let msg = AppError::Unauthorized.to_string();
        assert!(msg.contains("log in"));
    }

    #[test]
    fn test_duplicate_and_unauthorized_are_distinct() {
        assert_ne!(
            AppError::DuplicateApplication.to_string(),
            AppError::Unauthorized.to_string()
        );
    }
}
