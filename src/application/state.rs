// src/application/state.rs

use std::sync::Arc;

use crate::api::{HttpMarketplaceApi, MarketplaceApi};
use crate::application::config::ClientConfig;
use crate::error::AppResult;
use crate::events::{create_event_bus, EventBus};
use crate::notifications::{LogNotifier, Notifier};
use crate::repositories::{JsonFileSessionRepository, SessionRepository};
use crate::services::{
    ApplicationService, CourseCatalogService, JobBoardService, SessionGate, SessionService,
};

/// The wired service graph the embedding shell holds on to.
/// All fields are Arc-wrapped for thread-safe sharing across screens.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session_gate: Arc<SessionGate>,
    pub session_service: Arc<SessionService>,
    pub application_service: Arc<ApplicationService>,
    pub job_board_service: Arc<JobBoardService>,
    pub course_catalog_service: Arc<CourseCatalogService>,
}

impl AppState {
    /// Build the production graph: HTTP client against the configured
    /// backend, file-backed session store, notifications to the log.
    pub fn build(config: &ClientConfig) -> AppResult<Self> {
        let api: Arc<dyn MarketplaceApi> = Arc::new(HttpMarketplaceApi::with_timeout(
            config.base_url.clone(),
            config.request_timeout(),
        ));

        let session_file = match &config.session_file {
            Some(path) => path.clone(),
            None => JsonFileSessionRepository::default_path()?,
        };
        let session_repo: Arc<dyn SessionRepository> =
            Arc::new(JsonFileSessionRepository::new(session_file));

        Ok(Self::wire(api, session_repo, Arc::new(LogNotifier)))
    }

    /// Wire the graph from explicit components. Tests use this with a mock
    /// API and an in-memory store.
    pub fn wire(
        api: Arc<dyn MarketplaceApi>,
        session_repo: Arc<dyn SessionRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let event_bus = create_event_bus();

        let session_gate = Arc::new(SessionGate::new(Arc::clone(&event_bus)));
        let session_service = Arc::new(SessionService::new(
            Arc::clone(&api),
            Arc::clone(&session_repo),
            Arc::clone(&event_bus),
        ));
        let application_service = Arc::new(ApplicationService::new(
            Arc::clone(&api),
            Arc::clone(&session_repo),
            Arc::clone(&event_bus),
            notifier,
        ));
        let job_board_service = Arc::new(JobBoardService::new(
            Arc::clone(&api),
            Arc::clone(&session_repo),
        ));
        let course_catalog_service =
            Arc::new(CourseCatalogService::new(api, session_repo));

        Self {
            event_bus,
            session_gate,
            session_service,
            application_service,
            job_board_service,
            course_catalog_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMarketplaceApi;
    use crate::domain::{Route, Session};
    use crate::notifications::test_support::RecordingNotifier;
    use crate::repositories::InMemorySessionRepository;
    use crate::services::GateDecision;

    #[test]
    fn test_wired_graph_shares_one_event_bus() {
        let state = AppState::wire(
            Arc::new(MockMarketplaceApi::new()),
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(RecordingNotifier::new()),
        );

        let decision = state
            .session_gate
            .evaluate(&Session::anonymous(), &Route::Home);

        assert_eq!(decision, GateDecision::Redirect(Route::Login));
        assert_eq!(state.event_bus.get_event_log().len(), 1);
    }
}
