// src/api/types.rs
//
// Wire types for the marketplace backend.
//
// The backend speaks camelCase JSON; everything here decodes that shape and
// maps it into domain records. Mapping is lenient where the UI degrades
// instead of failing: unknown roles and unparseable dates become `None` and
// are logged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    ApplicationStatus, AuthToken, Course, Job, JobApplication, Role, User,
};

// ============================================================================
// AUTH
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponseDto {
    pub token: Option<String>,
    pub id: Option<i64>,
    pub role: Option<String>,
}

/// A successful login, already lifted into domain terms.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: AuthToken,
    pub user_id: i64,
    pub role: Option<Role>,
}

/// Fields shared by every registration form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Registration is role-shaped: each role posts to its own endpoint with
/// its own extra fields.
#[derive(Debug, Clone)]
pub enum RegistrationRequest {
    JobSeeker(NewAccount),
    Trainer { account: NewAccount, expertise: String },
    Employer { account: NewAccount, company: String },
    Admin(NewAccount),
}

impl RegistrationRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            RegistrationRequest::JobSeeker(_) => "/job-seekers",
            RegistrationRequest::Trainer { .. } => "/trainers",
            RegistrationRequest::Employer { .. } => "/employers",
            RegistrationRequest::Admin(_) => "/user/register",
        }
    }

    /// The JSON body the endpoint expects: the shared account fields, the
    /// role string, and the role-specific extras.
    pub fn to_payload(&self) -> serde_json::Value {
        let (account, role) = match self {
            RegistrationRequest::JobSeeker(account) => (account, Role::JobSeeker),
            RegistrationRequest::Trainer { account, .. } => (account, Role::Trainer),
            RegistrationRequest::Employer { account, .. } => (account, Role::Employer),
            RegistrationRequest::Admin(account) => (account, Role::Admin),
        };
        let mut payload = serde_json::json!({
            "username": account.username,
            "firstName": account.first_name,
            "lastName": account.last_name,
            "email": account.email,
            "password": account.password,
            "role": role.to_string(),
        });
        match self {
            RegistrationRequest::Trainer { expertise, .. } => {
                payload["expertise"] = serde_json::json!(expertise);
            }
            RegistrationRequest::Employer { company, .. } => {
                payload["company"] = serde_json::json!(company);
            }
            _ => {}
        }
        payload
    }
}

// ============================================================================
// USERS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
    pub expertise: Option<String>,
}

impl UserDto {
    pub fn into_domain(self) -> User {
        let role = self.role.as_deref().and_then(parse_role_lenient);
        User {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role,
            company_name: self.company_name,
            company_logo_url: self.company_logo_url,
            expertise: self.expertise,
        }
    }
}

// ============================================================================
// JOBS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i64,
    pub employer_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_time: Option<String>,
    pub modality: Option<String>,
    pub salary: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<String>,
    pub created_at: Option<String>,
}

impl JobDto {
    pub fn into_domain(self) -> Job {
        Job {
            id: self.id,
            employer_id: self.employer_id,
            title: self.title,
            description: self.description,
            location: self.location,
            job_time: self.job_time,
            modality: self.modality,
            salary: self.salary,
            category: self.category,
            deadline: self.deadline.as_deref().and_then(parse_date_lenient),
            created_at: self.created_at.as_deref().and_then(parse_date_lenient),
        }
    }
}

// ============================================================================
// APPLICATIONS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: Option<i64>,
    pub job_id: i64,
    pub job_seeker_id: i64,
    pub status: Option<String>,
}

impl ApplicationDto {
    pub fn into_domain(self) -> JobApplication {
        let status = match self.status {
            Some(raw) => serde_json::from_value(serde_json::Value::String(raw.clone()))
                .unwrap_or(ApplicationStatus::Other(raw)),
            None => ApplicationStatus::applied(),
        };
        JobApplication {
            id: self.id,
            job_id: self.job_id,
            job_seeker_id: self.job_seeker_id,
            status,
        }
    }
}

/// Body for `POST /applications`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_id: i64,
    pub job_seeker_id: i64,
    pub status: String,
}

// ============================================================================
// COURSES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub trainer_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
}

impl CourseDto {
    pub fn into_domain(self) -> Course {
        Course {
            id: self.id,
            trainer_id: self.trainer_id,
            title: self.title,
            description: self.description,
            duration: self.duration,
        }
    }
}

// ============================================================================
// LENIENT PARSERS
// ============================================================================

fn parse_role_lenient(raw: &str) -> Option<Role> {
    match raw.parse::<Role>() {
        Ok(role) => Some(role),
        Err(_) => {
            if !raw.is_empty() {
                log::warn!("ignoring unknown role from backend: {:?}", raw);
            }
            None
        }
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates.
fn parse_date_lenient(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(DateTime::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0)?,
            Utc,
        ));
    }
    log::warn!("ignoring unparseable date from backend: {:?}", raw);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_decodes_camel_case() {
        let dto: UserDto = serde_json::from_value(serde_json::json!({
            "id": 4,
            "username": "acme",
            "role": "employer",
            "companyName": "Acme Corp",
            "companyLogoUrl": "/uploads/company-logos/acme.png"
        }))
        .unwrap();
        let user = dto.into_domain();
        assert_eq!(user.role, Some(Role::Employer));
        assert_eq!(user.company_name.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_unknown_role_maps_to_none() {
        let dto: UserDto = serde_json::from_value(serde_json::json!({
            "id": 4,
            "username": "x",
            "role": "superuser"
        }))
        .unwrap();
        assert_eq!(dto.into_domain().role, None);
    }

    #[test]
    fn test_application_dto_decodes() {
        let dto: ApplicationDto = serde_json::from_value(serde_json::json!({
            "id": 1,
            "jobId": 5,
            "jobSeekerId": 9,
            "status": "Applied"
        }))
        .unwrap();
        let app = dto.into_domain();
        assert_eq!(app.job_id, 5);
        assert_eq!(app.job_seeker_id, 9);
        assert_eq!(app.status, ApplicationStatus::applied());
    }

    #[test]
    fn test_job_dto_parses_bare_dates() {
        let dto: JobDto = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": "QA Engineer",
            "deadline": "2025-06-30"
        }))
        .unwrap();
        let job = dto.into_domain();
        assert!(job.deadline.is_some());
    }

    #[test]
    fn test_job_dto_swallows_bad_dates() {
        let dto: JobDto = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": "QA Engineer",
            "deadline": "next week"
        }))
        .unwrap();
        assert_eq!(dto.into_domain().deadline, None);
    }

    #[test]
    fn test_registration_endpoints_per_role() {
        let account = NewAccount {
            username: "u".into(),
            first_name: "F".into(),
            last_name: "L".into(),
            email: "u@example.com".into(),
            password: "p".into(),
        };
        assert_eq!(
            RegistrationRequest::JobSeeker(account.clone()).endpoint(),
            "/job-seekers"
        );
        assert_eq!(
            RegistrationRequest::Trainer {
                account: account.clone(),
                expertise: "Rust".into()
            }
            .endpoint(),
            "/trainers"
        );
        assert_eq!(
            RegistrationRequest::Employer {
                account: account.clone(),
                company: "Acme".into()
            }
            .endpoint(),
            "/employers"
        );
        assert_eq!(RegistrationRequest::Admin(account).endpoint(), "/user/register");
    }

    #[test]
    fn test_employer_payload_carries_company() {
        let request = RegistrationRequest::Employer {
            account: NewAccount {
                username: "acme-hr".into(),
                first_name: "A".into(),
                last_name: "B".into(),
                email: "hr@acme.example".into(),
                password: "p".into(),
            },
            company: "Acme Corp".into(),
        };
        let payload = request.to_payload();
        assert_eq!(payload["company"], "Acme Corp");
        assert_eq!(payload["role"], "employer");
        assert_eq!(payload["firstName"], "A");
    }
}
