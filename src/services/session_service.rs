// src/services/session_service.rs
//
// Login/logout orchestration: the only writer of the session repository.

use std::sync::Arc;

use crate::api::{MarketplaceApi, RegistrationRequest};
use crate::domain::{Role, Route, Session};
use crate::error::AppResult;
use crate::events::{EventBus, SessionClosed, SessionOpened};
use crate::repositories::SessionRepository;

pub struct SessionService {
    api: Arc<dyn MarketplaceApi>,
    session_repo: Arc<dyn SessionRepository>,
    event_bus: Arc<EventBus>,
}

impl SessionService {
    pub fn new(
        api: Arc<dyn MarketplaceApi>,
        session_repo: Arc<dyn SessionRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            api,
            session_repo,
            event_bus,
        }
    }

    /// Authenticate against the backend and store the resulting session.
    ///
    /// Returns the landing route for the authenticated role. A login
    /// response without a parseable role still logs in; the session simply
    /// carries no role and lands on the default home screen.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Route> {
        let outcome = self.api.login(username, password).await?;

        let session = Session::authenticated(outcome.token, outcome.role, outcome.user_id);
        self.session_repo.save(&session)?;

        self.event_bus
            .emit(SessionOpened::new(outcome.user_id, outcome.role));

        Ok(Route::landing_for(outcome.role))
    }

    /// Create a new account. The caller logs in separately afterwards.
    pub async fn register(&self, request: RegistrationRequest) -> AppResult<()> {
        self.api.register(request).await
    }

    /// Wipe the stored session.
    pub fn logout(&self) -> AppResult<()> {
        self.session_repo.clear()?;
        self.event_bus.emit(SessionClosed::new());
        Ok(())
    }

    /// Current session snapshot for gate evaluation. A broken store reads
    /// as logged-out, which routes to the login screen.
    pub fn current(&self) -> Session {
        match self.session_repo.load() {
            Ok(session) => session,
            Err(err) => {
                log::error!("failed to load stored session: {}", err);
                Session::anonymous()
            }
        }
    }

    /// Teardown hygiene: drop the persisted token so it does not outlive
    /// the client process. Role/id may survive; without a token they are
    /// inert.
    pub fn discard_token(&self) {
        if let Err(err) = self.session_repo.clear_token() {
            log::error!("failed to discard session token: {}", err);
        }
    }

    /// Re-fetch the role from the backend for the stored user.
    ///
    /// Non-critical: any failure is logged and the stored role is left
    /// untouched.
    pub async fn refresh_role(&self) -> Option<Role> {
        let session = self.current();
        let (token, user_id) = match (&session.token, session.user_id) {
            (Some(token), Some(user_id)) => (token.clone(), user_id),
            _ => return session.role,
        };

        match self.api.user_details(&token, user_id).await {
            Ok(user) => {
                if user.role != session.role {
                    let updated = Session {
                        role: user.role,
                        ..session
                    };
                    if let Err(err) = self.session_repo.save(&updated) {
                        log::error!("failed to store refreshed role: {}", err);
                    }
                }
                user.role
            }
            Err(err) => {
                log::warn!("role refresh failed, keeping stored role: {}", err);
                session.role
            }
        }
    }
}
