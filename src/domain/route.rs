// src/domain/route.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::session::Role;

/// A navigation location inside the client.
///
/// Known screens get their own variant so gating and landing decisions are
/// exhaustive matches; anything else is carried verbatim in `Other` and
/// treated as a protected screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Login,
    Register,
    Home,
    JobSeeker,
    Course,
    ProfileEdit,
    Employer,
    EmployerHome,
    EmployerPostJobs,
    EmployerCandidates,
    Trainer,
    TrainerHome,
    TrainerUploadCourses,
    TrainerTrainees,
    Admin,
    Other(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        match path {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/home" => Route::Home,
            "/jobseeker" => Route::JobSeeker,
            "/course" => Route::Course,
            "/profile/edit" => Route::ProfileEdit,
            "/employer" => Route::Employer,
            "/employer/home" => Route::EmployerHome,
            "/employer/post-jobs" => Route::EmployerPostJobs,
            "/employer/candidates" => Route::EmployerCandidates,
            "/trainer" => Route::Trainer,
            "/trainer/home" => Route::TrainerHome,
            "/trainer/upload-courses" => Route::TrainerUploadCourses,
            "/trainer/trainees" => Route::TrainerTrainees,
            "/admin" => Route::Admin,
            other => Route::Other(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/home",
            Route::JobSeeker => "/jobseeker",
            Route::Course => "/course",
            Route::ProfileEdit => "/profile/edit",
            Route::Employer => "/employer",
            Route::EmployerHome => "/employer/home",
            Route::EmployerPostJobs => "/employer/post-jobs",
            Route::EmployerCandidates => "/employer/candidates",
            Route::Trainer => "/trainer",
            Route::TrainerHome => "/trainer/home",
            Route::TrainerUploadCourses => "/trainer/upload-courses",
            Route::TrainerTrainees => "/trainer/trainees",
            Route::Admin => "/admin",
            Route::Other(path) => path,
        }
    }

    /// Login and register are the only screens reachable without a token.
    pub fn is_auth_route(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// The screen shown right after authentication, per role.
    ///
    /// Job seekers, admins and sessions with no stored role all land on the
    /// generic home screen.
    pub fn landing_for(role: Option<Role>) -> Route {
        match role {
            Some(Role::Employer) => Route::EmployerHome,
            Some(Role::Trainer) => Route::TrainerHome,
            Some(Role::JobSeeker) | Some(Role::Admin) | None => Route::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for path in [
            "/login",
            "/register",
            "/home",
            "/jobseeker",
            "/employer/home",
            "/employer/post-jobs",
            "/trainer/home",
            "/trainer/trainees",
            "/admin",
        ] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_unknown_path_is_preserved() {
        let route = Route::parse("/totally/unknown");
        assert_eq!(route, Route::Other("/totally/unknown".to_string()));
        assert_eq!(route.path(), "/totally/unknown");
        assert!(!route.is_auth_route());
    }

    #[test]
    fn test_only_login_and_register_are_auth_routes() {
        assert!(Route::Login.is_auth_route());
        assert!(Route::Register.is_auth_route());
        assert!(!Route::Home.is_auth_route());
        assert!(!Route::EmployerHome.is_auth_route());
    }

    #[test]
    fn test_landing_mapping() {
        assert_eq!(Route::landing_for(Some(Role::Employer)), Route::EmployerHome);
        assert_eq!(Route::landing_for(Some(Role::Trainer)), Route::TrainerHome);
        assert_eq!(Route::landing_for(Some(Role::JobSeeker)), Route::Home);
        assert_eq!(Route::landing_for(Some(Role::Admin)), Route::Home);
        assert_eq!(Route::landing_for(None), Route::Home);
    }
}
