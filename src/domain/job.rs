// src/domain/job.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as the backend serves it.
///
/// Owned and persisted by the backend; the client holds transient copies
/// fetched per screen visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub employer_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// "Full-Time", "Part-Time", "Internship", "Contract".
    pub job_time: Option<String>,
    /// "Onsite", "Remote", "Hybrid".
    pub modality: Option<String>,
    /// Salary band label, e.g. "$500 - $1000".
    pub salary: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Whole days until the application deadline, clamped at zero.
    /// `None` when the posting has no deadline.
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline.map(|deadline| {
            let days = (deadline - now).num_days();
            days.max(0)
        })
    }
}
