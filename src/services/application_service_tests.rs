// src/services/application_service_tests.rs
//
// The duplicate guard, end to end against a mocked backend: local refusal
// makes no network call, a 201 grows the applied-set, and the backend's 409
// surfaces the same warning as the local check.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::MockMarketplaceApi;
use crate::domain::{
    ApplicationStatus, AuthToken, JobApplication, Role, Session,
};
use crate::error::AppError;
use crate::events::{create_event_bus, DuplicateDetection, EventBus};
use crate::notifications::test_support::RecordingNotifier;
use crate::notifications::NotificationLevel;
use crate::repositories::{InMemorySessionRepository, SessionRepository};
use crate::services::application_service::{ApplicationService, SubmitOutcome};

struct Fixture {
    service: ApplicationService,
    notifier: RecordingNotifier,
    event_bus: Arc<EventBus>,
}

fn fixture(api: MockMarketplaceApi, session: Session) -> Fixture {
    let session_repo = Arc::new(InMemorySessionRepository::new());
    session_repo.save(&session).unwrap();

    let event_bus = create_event_bus();
    let notifier = RecordingNotifier::new();
    let service = ApplicationService::new(
        Arc::new(api),
        session_repo,
        Arc::clone(&event_bus),
        Arc::new(notifier.clone()),
    );

    Fixture {
        service,
        notifier,
        event_bus,
    }
}

fn seeker_session(user_id: i64) -> Session {
    Session::authenticated(AuthToken::new("jwt"), Some(Role::JobSeeker), user_id)
}

fn stored_application(job_id: i64, job_seeker_id: i64) -> JobApplication {
    JobApplication {
        id: Some(job_id * 100),
        job_id,
        job_seeker_id,
        status: ApplicationStatus::applied(),
    }
}

#[tokio::test]
async fn test_load_applied_filters_to_current_user() {
    let mut api = MockMarketplaceApi::new();
    api.expect_list_applications().times(1).returning(|_| {
        Ok(vec![
            stored_application(5, 42),
            stored_application(7, 99),
            stored_application(9, 42),
        ])
    });

    let fx = fixture(api, seeker_session(42));
    fx.service.load_applied().await;

    assert_eq!(fx.service.applied_jobs(), HashSet::from([5, 9]));
    assert!(fx.service.has_applied(5));
    assert!(!fx.service.has_applied(7));
}

#[tokio::test]
async fn test_load_applied_fetch_failure_leaves_set_empty() {
    let mut api = MockMarketplaceApi::new();
    api.expect_list_applications()
        .times(1)
        .returning(|_| Err(AppError::Api { status: 500 }));

    let fx = fixture(api, seeker_session(42));
    fx.service.load_applied().await;

    assert!(fx.service.applied_jobs().is_empty());
}

#[tokio::test]
async fn test_local_duplicate_makes_no_network_call() {
    let mut api = MockMarketplaceApi::new();
    api.expect_list_applications()
        .times(1)
        .returning(|_| Ok(vec![stored_application(5, 42), stored_application(9, 42)]));
    api.expect_submit_application().times(0);

    let fx = fixture(api, seeker_session(42));
    fx.service.load_applied().await;

    let outcome = fx.service.submit(5).await;

    assert_eq!(
        outcome,
        SubmitOutcome::AlreadyApplied {
            detected_by: DuplicateDetection::Local
        }
    );
    assert_eq!(fx.notifier.levels(), vec![NotificationLevel::Warning]);
    assert_eq!(
        fx.event_bus.get_event_log().last().unwrap().event_type,
        "DuplicateApplicationBlocked"
    );
    // The set is unchanged.
    assert_eq!(fx.service.applied_jobs(), HashSet::from([5, 9]));
}

#[tokio::test]
async fn test_successful_submit_grows_the_set_and_notifies() {
    let mut api = MockMarketplaceApi::new();
    api.expect_list_applications()
        .times(1)
        .returning(|_| Ok(vec![stored_application(5, 42), stored_application(9, 42)]));
    api.expect_submit_application()
        .times(1)
        .withf(|_, application| {
            application.job_id == 7
                && application.job_seeker_id == 42
                && application.status == "Applied"
        })
        .returning(|_, application| {
            Ok(JobApplication {
                id: Some(700),
                job_id: application.job_id,
                job_seeker_id: application.job_seeker_id,
                status: ApplicationStatus::applied(),
            })
        });

    let fx = fixture(api, seeker_session(42));
    fx.service.load_applied().await;

    assert_eq!(fx.service.submit(7).await, SubmitOutcome::Submitted);
    assert_eq!(fx.service.applied_jobs(), HashSet::from([5, 7, 9]));
    assert_eq!(fx.notifier.levels(), vec![NotificationLevel::Success]);
    assert_eq!(
        fx.event_bus.get_event_log().last().unwrap().event_type,
        "ApplicationSubmitted"
    );

    // The immediate re-click is refused without another POST; the mock's
    // times(1) on submit_application would fail otherwise.
    assert_eq!(
        fx.service.submit(7).await,
        SubmitOutcome::AlreadyApplied {
            detected_by: DuplicateDetection::Local
        }
    );
}

#[tokio::test]
async fn test_backend_conflict_warns_like_the_local_check() {
    let mut api = MockMarketplaceApi::new();
    api.expect_submit_application()
        .times(1)
        .returning(|_, _| Err(AppError::DuplicateApplication));

    let fx = fixture(api, seeker_session(42));
    let outcome = fx.service.submit(3).await;

    assert_eq!(
        outcome,
        SubmitOutcome::AlreadyApplied {
            detected_by: DuplicateDetection::Backend
        }
    );
    assert_eq!(fx.notifier.levels(), vec![NotificationLevel::Warning]);
    // Only a 201 grows the set.
    assert!(!fx.service.has_applied(3));
}

#[tokio::test]
async fn test_expired_token_maps_to_not_logged_in() {
    let mut api = MockMarketplaceApi::new();
    api.expect_submit_application()
        .times(1)
        .returning(|_, _| Err(AppError::Unauthorized));

    let fx = fixture(api, seeker_session(42));

    assert_eq!(fx.service.submit(3).await, SubmitOutcome::NotLoggedIn);
    assert_eq!(fx.notifier.levels(), vec![NotificationLevel::Error]);
}

#[tokio::test]
async fn test_anonymous_submit_is_refused_before_the_network() {
    let mut api = MockMarketplaceApi::new();
    api.expect_submit_application().times(0);

    let fx = fixture(api, Session::anonymous());

    assert_eq!(fx.service.submit(3).await, SubmitOutcome::NotLoggedIn);
    assert_eq!(fx.notifier.levels(), vec![NotificationLevel::Warning]);
}

#[tokio::test]
async fn test_other_backend_failure_is_contained() {
    let mut api = MockMarketplaceApi::new();
    api.expect_submit_application()
        .times(1)
        .returning(|_, _| Err(AppError::Api { status: 503 }));

    let fx = fixture(api, seeker_session(42));

    assert_eq!(fx.service.submit(3).await, SubmitOutcome::Failed);
    assert_eq!(fx.notifier.levels(), vec![NotificationLevel::Error]);
    assert!(!fx.service.has_applied(3));
}

#[tokio::test]
async fn test_anonymous_load_applied_skips_the_fetch() {
    let mut api = MockMarketplaceApi::new();
    api.expect_list_applications().times(0);

    let fx = fixture(api, Session::anonymous());
    fx.service.load_applied().await;

    assert!(fx.service.applied_jobs().is_empty());
}
