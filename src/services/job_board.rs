// src/services/job_board.rs
//
// Job listings: fetch reference data per screen visit and filter/join it in
// memory. There is no client-side cache between visits.

use chrono::Utc;
use std::sync::Arc;

use crate::api::MarketplaceApi;
use crate::domain::{Job, Session, User};
use crate::repositories::SessionRepository;

/// Filter state of the listing screen. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Substring of the job title, case-insensitive.
    pub title: Option<String>,
    /// Substring of the job location, case-insensitive.
    pub location: Option<String>,
    /// Substring of the employer's company name, case-insensitive.
    pub company: Option<String>,
    /// Exact job type, e.g. "Full-Time".
    pub job_type: Option<String>,
    /// Exact modality, e.g. "Remote".
    pub modality: Option<String>,
    /// Country fragment matched inside the location string.
    pub country: Option<String>,
    /// Exact salary band label.
    pub salary: Option<String>,
}

impl JobFilter {
    pub fn clear(&mut self) {
        *self = JobFilter::default();
    }
}

/// One row of the listing: a job joined to its employer's account.
#[derive(Debug, Clone)]
pub struct JobListing {
    pub job: Job,
    pub company_name: Option<String>,
    pub days_left: Option<i64>,
}

/// Reference data one screen visit works with.
#[derive(Debug, Clone, Default)]
pub struct JobBoard {
    pub jobs: Vec<Job>,
    pub users: Vec<User>,
}

impl JobBoard {
    fn employer_of(&self, job: &Job) -> Option<&User> {
        let employer_id = job.employer_id?;
        self.users.iter().find(|user| user.id == employer_id)
    }

    fn matches(&self, job: &Job, filter: &JobFilter) -> bool {
        fn contains_ci(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        if let Some(title) = filter.title.as_deref().filter(|s| !s.is_empty()) {
            if !contains_ci(&job.title, title) {
                return false;
            }
        }
        if let Some(location) = filter.location.as_deref().filter(|s| !s.is_empty()) {
            match job.location.as_deref() {
                Some(job_location) if contains_ci(job_location, location) => {}
                _ => return false,
            }
        }
        if let Some(company) = filter.company.as_deref().filter(|s| !s.is_empty()) {
            let company_name = self
                .employer_of(job)
                .and_then(|user| user.company_name.as_deref());
            match company_name {
                Some(name) if contains_ci(name, company) => {}
                _ => return false,
            }
        }
        if let Some(job_type) = filter.job_type.as_deref().filter(|s| !s.is_empty()) {
            if job.job_time.as_deref() != Some(job_type) {
                return false;
            }
        }
        if let Some(modality) = filter.modality.as_deref().filter(|s| !s.is_empty()) {
            if job.modality.as_deref() != Some(modality) {
                return false;
            }
        }
        if let Some(country) = filter.country.as_deref().filter(|s| !s.is_empty()) {
            match job.location.as_deref() {
                Some(job_location) if job_location.contains(country) => {}
                _ => return false,
            }
        }
        if let Some(salary) = filter.salary.as_deref().filter(|s| !s.is_empty()) {
            if job.salary.as_deref() != Some(salary) {
                return false;
            }
        }
        true
    }

    /// Apply the filter and join each surviving job to its employer.
    pub fn filtered(&self, filter: &JobFilter) -> Vec<JobListing> {
        let now = Utc::now();
        self.jobs
            .iter()
            .filter(|job| self.matches(job, filter))
            .map(|job| JobListing {
                job: job.clone(),
                company_name: self
                    .employer_of(job)
                    .and_then(|user| user.company_name.clone()),
                days_left: job.days_left(now),
            })
            .collect()
    }
}

pub struct JobBoardService {
    api: Arc<dyn MarketplaceApi>,
    session_repo: Arc<dyn SessionRepository>,
}

impl JobBoardService {
    pub fn new(api: Arc<dyn MarketplaceApi>, session_repo: Arc<dyn SessionRepository>) -> Self {
        Self { api, session_repo }
    }

    fn session(&self) -> Session {
        match self.session_repo.load() {
            Ok(session) => session,
            Err(err) => {
                log::error!("failed to load stored session: {}", err);
                Session::anonymous()
            }
        }
    }

    /// Fetch jobs and users for one screen visit. Either fetch failing
    /// degrades that list to empty; the screen still renders.
    pub async fn fetch_board(&self) -> JobBoard {
        let session = self.session();
        let token = session.token.as_ref();

        let jobs = match self.api.list_jobs(token).await {
            Ok(jobs) => jobs,
            Err(err) => {
                log::error!("failed to fetch jobs: {}", err);
                Vec::new()
            }
        };

        let users = match self.api.list_users(token).await {
            Ok(users) => users,
            Err(err) => {
                log::error!("failed to fetch users: {}", err);
                Vec::new()
            }
        };

        JobBoard { jobs, users }
    }
}
