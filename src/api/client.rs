// src/api/client.rs
//
// HTTP client for the marketplace backend.
//
// This is infrastructure, not domain: it maps wire DTOs into domain records
// and HTTP statuses into the crate's error taxonomy. It never mutates
// client-side state; services own that.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::types::{
    ApplicationDto, CourseDto, JobDto, LoginOutcome, LoginRequest, LoginResponseDto,
    NewApplication, RegistrationRequest, UserDto,
};
use crate::domain::{AuthToken, Course, Job, JobApplication, Role, User};
use crate::error::{AppError, AppResult};

/// Everything the screens need from the backend.
///
/// Services depend on this trait, not on the HTTP implementation, so tests
/// can drive them with a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome>;

    async fn register(&self, request: RegistrationRequest) -> AppResult<()>;

    async fn user_details(&self, token: &AuthToken, user_id: i64) -> AppResult<User>;

    async fn list_users<'a>(&self, token: Option<&'a AuthToken>) -> AppResult<Vec<User>>;

    async fn list_jobs<'a>(&self, token: Option<&'a AuthToken>) -> AppResult<Vec<Job>>;

    async fn list_applications<'a>(
        &self,
        token: Option<&'a AuthToken>,
    ) -> AppResult<Vec<JobApplication>>;

    async fn submit_application<'a>(
        &self,
        token: Option<&'a AuthToken>,
        application: NewApplication,
    ) -> AppResult<JobApplication>;

    async fn list_courses<'a>(&self, token: Option<&'a AuthToken>) -> AppResult<Vec<Course>>;
}

/// Marketplace API client over HTTP.
pub struct HttpMarketplaceApi {
    base_url: String,
    http_client: Client,
}

impl HttpMarketplaceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Map non-success statuses into the error taxonomy the services match
    /// on: 401 means re-login, 409 means the backend already has this
    /// application, everything else is generic.
    fn check_status(status: StatusCode) -> AppResult<()> {
        match status {
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
            StatusCode::CONFLICT => Err(AppError::DuplicateApplication),
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            s if s.is_success() => Ok(()),
            s => Err(AppError::Api { status: s.as_u16() }),
        }
    }

    async fn get_json<T>(&self, path: &str, token: Option<&AuthToken>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self
            .http_client
            .get(self.url(path))
            .header(header::ACCEPT, "application/json");

        // The backend expects the raw token, no "Bearer " prefix.
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token.as_str());
        }

        let response = request.send().await?;
        Self::check_status(response.status())?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceApi {
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http_client
            .post(self.url("/user/login"))
            .json(&body)
            .send()
            .await?;
        Self::check_status(response.status())?;

        let dto: LoginResponseDto = response.json().await?;
        let token = dto
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Other("login response carried no token".to_string()))?;
        let user_id = dto
            .id
            .ok_or_else(|| AppError::Other("login response carried no user id".to_string()))?;
        let role = dto.role.as_deref().and_then(|raw| {
            let parsed = raw.parse::<Role>().ok();
            if parsed.is_none() && !raw.is_empty() {
                log::warn!("login response carried unknown role {:?}", raw);
            }
            parsed
        });

        Ok(LoginOutcome {
            token: AuthToken::new(token),
            user_id,
            role,
        })
    }

    async fn register(&self, request: RegistrationRequest) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.url(request.endpoint()))
            .json(&request.to_payload())
            .send()
            .await?;
        Self::check_status(response.status())
    }

    async fn user_details(&self, token: &AuthToken, user_id: i64) -> AppResult<User> {
        let path = format!("/user/userauth?id={}", user_id);
        let dto: UserDto = self.get_json(&path, Some(token)).await?;
        Ok(dto.into_domain())
    }

    async fn list_users<'a>(&self, token: Option<&'a AuthToken>) -> AppResult<Vec<User>> {
        let dtos: Vec<UserDto> = self.get_json("/user/all", token).await?;
        Ok(dtos.into_iter().map(UserDto::into_domain).collect())
    }

    async fn list_jobs<'a>(&self, token: Option<&'a AuthToken>) -> AppResult<Vec<Job>> {
        let dtos: Vec<JobDto> = self.get_json("/jobs", token).await?;
        Ok(dtos.into_iter().map(JobDto::into_domain).collect())
    }

    async fn list_applications<'a>(
        &self,
        token: Option<&'a AuthToken>,
    ) -> AppResult<Vec<JobApplication>> {
        let dtos: Vec<ApplicationDto> = self.get_json("/applications", token).await?;
        Ok(dtos.into_iter().map(ApplicationDto::into_domain).collect())
    }

    async fn submit_application<'a>(
        &self,
        token: Option<&'a AuthToken>,
        application: NewApplication,
    ) -> AppResult<JobApplication> {
        let mut request = self
            .http_client
            .post(self.url("/applications"))
            .json(&application);

        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token.as_str());
        }

        let response = request.send().await?;
        Self::check_status(response.status())?;

        let dto: ApplicationDto = response.json().await?;
        Ok(dto.into_domain())
    }

    async fn list_courses<'a>(&self, token: Option<&'a AuthToken>) -> AppResult<Vec<Course>> {
        let dtos: Vec<CourseDto> = self.get_json("/courses", token).await?;
        Ok(dtos.into_iter().map(CourseDto::into_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpMarketplaceApi::new("http://localhost:8080/api/");
        assert_eq!(client.url("/jobs"), "http://localhost:8080/api/jobs");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            HttpMarketplaceApi::check_status(StatusCode::UNAUTHORIZED),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            HttpMarketplaceApi::check_status(StatusCode::CONFLICT),
            Err(AppError::DuplicateApplication)
        ));
        assert!(matches!(
            HttpMarketplaceApi::check_status(StatusCode::NOT_FOUND),
            Err(AppError::NotFound)
        ));
        assert!(HttpMarketplaceApi::check_status(StatusCode::CREATED).is_ok());
        assert!(matches!(
            HttpMarketplaceApi::check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(AppError::Api { status: 500 })
        ));
    }
}
