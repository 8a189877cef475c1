// src/domain/user.rs
use serde::{Deserialize, Serialize};

use crate::domain::session::Role;

/// A marketplace account as served by the backend's user listing.
///
/// Listings join jobs to this record by `id` to display employer company
/// details, so most fields are optional: only employers carry company data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `None` when the backend reports a role string this client predates.
    pub role: Option<Role>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
    /// Trainer-only field.
    pub expertise: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }
}
