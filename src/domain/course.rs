// src/domain/course.rs
use serde::{Deserialize, Serialize};

/// A training course offered by a trainer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub trainer_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
}
