// src/services/application_service.rs
//
// Application-Submission Guard.
//
// One instance per job-listing screen. Holds the set of job ids the current
// user has already applied to, checked synchronously before any network
// call, so a double-click never produces a second POST. Two screens in two
// processes can still race; the backend's duplicate check (409) settles it.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::api::{MarketplaceApi, NewApplication};
use crate::domain::{ApplicationStatus, Session};
use crate::error::AppError;
use crate::events::{
    ApplicationSubmitted, DuplicateApplicationBlocked, DuplicateDetection, EventBus,
};
use crate::notifications::{Notification, Notifier};
use crate::repositories::SessionRepository;

/// What a submission attempt came to. Network failures never escape this
/// service; they are folded into the outcome after the user was notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the application.
    Submitted,
    /// Refused, either locally from the applied-set or by the backend (409).
    AlreadyApplied { detected_by: DuplicateDetection },
    /// No user id in the session, or the backend answered 401.
    NotLoggedIn,
    /// Any other failure; no retry is attempted.
    Failed,
}

pub struct ApplicationService {
    api: Arc<dyn MarketplaceApi>,
    session_repo: Arc<dyn SessionRepository>,
    event_bus: Arc<EventBus>,
    notifier: Arc<dyn Notifier>,
    applied: Mutex<HashSet<i64>>,
}

impl ApplicationService {
    pub fn new(
        api: Arc<dyn MarketplaceApi>,
        session_repo: Arc<dyn SessionRepository>,
        event_bus: Arc<EventBus>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            session_repo,
            event_bus,
            notifier,
            applied: Mutex::new(HashSet::new()),
        }
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

    /// Build the applied-set from the backend's application list, filtered
    /// to the current user.
    ///
    /// A fetch failure leaves the set empty: the guard then over-permits
    /// and the backend's 409 is the safety net.
    pub async fn load_applied(&self) {
        let session = self.session();
        let user_id = match session.user_id {
            Some(user_id) => user_id,
            None => return,
        };

        match self.api.list_applications(session.token.as_ref()).await {
            Ok(applications) => {
                let ids: HashSet<i64> = applications
                    .into_iter()
                    .filter(|app| app.job_seeker_id == user_id)
                    .map(|app| app.job_id)
                    .collect();
                *self.applied.lock().unwrap() = ids;
            }
            Err(err) => {
                log::error!("failed to fetch applications: {}", err);
            }
        }
    }

    pub fn has_applied(&self, job_id: i64) -> bool {
        self.applied.lock().unwrap().contains(&job_id)
    }

    pub fn applied_jobs(&self) -> HashSet<i64> {
        self.applied.lock().unwrap().clone()
    }

    /// Submit an application for `job_id`.
    ///
    /// Already-applied jobs are refused before any network call. On success
    /// the id joins the set immediately (optimistic, no rollback path). The
    /// backend's 409 surfaces the same warning as the local refusal; 401
    /// tells the user to log in again.
    pub async fn submit(&self, job_id: i64) -> SubmitOutcome {
        let session = self.session();
        let user_id = match session.user_id {
            Some(user_id) => user_id,
            None => {
                self.notifier.notify(Notification::warning(
                    "Not logged in",
                    "Please log in to apply for jobs",
                ));
                return SubmitOutcome::NotLoggedIn;
            }
        };

        if self.has_applied(job_id) {
            self.notifier.notify(Notification::warning(
                "Already applied",
                "You have already applied to this job",
            ));
            self.event_bus
                .emit(DuplicateApplicationBlocked::new(job_id, DuplicateDetection::Local));
            return SubmitOutcome::AlreadyApplied {
                detected_by: DuplicateDetection::Local,
            };
        }

        let application = NewApplication {
            job_id,
            job_seeker_id: user_id,
            status: ApplicationStatus::applied().to_string(),
        };

        match self
            .api
            .submit_application(session.token.as_ref(), application)
            .await
        {
            Ok(_) => {
                self.applied.lock().unwrap().insert(job_id);
                self.event_bus
                    .emit(ApplicationSubmitted::new(job_id, user_id));
                self.notifier.notify(Notification::success(
                    "Application submitted",
                    "Application submitted successfully!",
                ));
                SubmitOutcome::Submitted
            }
            Err(AppError::DuplicateApplication) => {
                self.notifier.notify(Notification::warning(
                    "Already applied",
                    "You have already applied to this job",
                ));
                self.event_bus.emit(DuplicateApplicationBlocked::new(
                    job_id,
                    DuplicateDetection::Backend,
                ));
                SubmitOutcome::AlreadyApplied {
                    detected_by: DuplicateDetection::Backend,
                }
            }
            Err(AppError::Unauthorized) => {
                self.notifier.notify(Notification::error(
                    "Session expired",
                    "Please log in again to apply",
                ));
                SubmitOutcome::NotLoggedIn
            }
            Err(err) => {
                log::error!("application submit failed: {}", err);
                self.notifier.notify(Notification::error(
                    "Submission failed",
                    "Failed to submit application. Please try again.",
                ));
                SubmitOutcome::Failed
            }
        }
    }
}
