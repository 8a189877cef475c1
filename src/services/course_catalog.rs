// src/services/course_catalog.rs
//
// Course listings, same shape as the job board: fetch per visit, filter in
// memory, degrade to empty on failure.

use std::sync::Arc;

use crate::api::MarketplaceApi;
use crate::domain::{Course, Session};
use crate::repositories::SessionRepository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Substring of the course title, case-insensitive.
    pub title: Option<String>,
    pub trainer_id: Option<i64>,
}

pub struct CourseCatalogService {
    api: Arc<dyn MarketplaceApi>,
    session_repo: Arc<dyn SessionRepository>,
}

impl CourseCatalogService {
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

    pub async fn fetch_courses(&self) -> Vec<Course> {
        let session = self.session();
        match self.api.list_courses(session.token.as_ref()).await {
            Ok(courses) => courses,
            Err(err) => {
                log::error!("failed to fetch courses: {}", err);
                Vec::new()
            }
        }
    }

    pub fn filtered(courses: &[Course], filter: &CourseFilter) -> Vec<Course> {
        courses
            .iter()
            .filter(|course| {
                if let Some(title) = filter.title.as_deref().filter(|s| !s.is_empty()) {
                    if !course.title.to_lowercase().contains(&title.to_lowercase()) {
                        return false;
                    }
                }
                if let Some(trainer_id) = filter.trainer_id {
                    if course.trainer_id != Some(trainer_id) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}
