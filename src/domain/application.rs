// src/domain/application.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A job application record as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Option<i64>,
    pub job_id: i64,
    pub job_seeker_id: i64,
    pub status: ApplicationStatus,
}

/// Application lifecycle states observed from the backend.
///
/// The client only ever writes `Applied`; the rest exist so fetched records
/// decode without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplicationStatus {
    Known(KnownStatus),
    /// Statuses introduced server-side that this client predates.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnownStatus {
    Applied,
    #[serde(rename = "PENDING")]
    Pending,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn applied() -> Self {
        ApplicationStatus::Known(KnownStatus::Applied)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Known(KnownStatus::Applied) => f.write_str("Applied"),
            ApplicationStatus::Known(KnownStatus::Pending) => f.write_str("PENDING"),
            ApplicationStatus::Known(KnownStatus::Shortlisted) => f.write_str("Shortlisted"),
            ApplicationStatus::Known(KnownStatus::Rejected) => f.write_str("Rejected"),
            ApplicationStatus::Known(KnownStatus::Hired) => f.write_str("Hired"),
            ApplicationStatus::Other(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_decodes_without_loss() {
        let app: JobApplication = serde_json::from_value(serde_json::json!({
            "id": 3,
            "job_id": 5,
            "job_seeker_id": 9,
            "status": "UnderReview"
        }))
        .unwrap();
        assert_eq!(
            app.status,
            ApplicationStatus::Other("UnderReview".to_string())
        );
    }

    #[test]
    fn test_applied_status_serializes_as_the_backend_expects() {
        assert_eq!(ApplicationStatus::applied().to_string(), "Applied");
    }
}
