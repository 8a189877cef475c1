// src/domain/session.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

/// Opaque bearer credential issued by the backend on login.
///
/// The client never inspects the token; it only stores it and attaches it
/// to authorized requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of debug output.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

/// The four account roles the marketplace knows about.
///
/// Screens match on this enum instead of comparing raw strings, so an
/// unknown role from the backend surfaces as a parse failure rather than
/// silently behaving like a job seeker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    JobSeeker,
    Employer,
    Trainer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::JobSeeker, Role::Employer, Role::Trainer, Role::Admin];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::JobSeeker => "jobseeker",
            Role::Employer => "employer",
            Role::Trainer => "trainer",
            Role::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobseeker" => Ok(Role::JobSeeker),
            "employer" => Ok(Role::Employer),
            "trainer" => Ok(Role::Trainer),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

/// Client-held authentication state.
///
/// Created from a successful login response, wiped on logout. The token is
/// the authority on "is anyone logged in"; role and user id are companion
/// data and are meaningful only while a token is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<AuthToken>,
    pub role: Option<Role>,
    pub user_id: Option<i64>,
}

impl Session {
    /// The logged-out state.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            role: None,
            user_id: None,
        }
    }

    pub fn authenticated(token: AuthToken, role: Option<Role>, user_id: i64) -> Self {
        Self {
            token: Some(token),
            role,
            user_id: Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Role and user id carry no meaning without a token.
pub fn validate_session(session: &Session) -> DomainResult<()> {
    if session.token.is_none() && (session.role.is_some() || session.user_id.is_some()) {
        return Err(DomainError::InvariantViolation(
            "role/user id present without an auth token".to_string(),
        ));
    }
    Ok(())
}
