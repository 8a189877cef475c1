// src/services/session_gate.rs
//
// Session Gate - evaluated on every navigation, before anything renders.
//
// Decides, from the stored session and the current route alone, whether the
// user may stay or must be redirected. It never calls the backend; a stale
// token is discovered later, when a gated screen's API call comes back 401.

use std::sync::Arc;

use crate::domain::{Route, Session};
use crate::events::{EventBus, RedirectIssued};

/// Outcome of one gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Neither rule matched; the current route stands.
    Stay,
    Redirect(Route),
}

impl GateDecision {
    pub fn target(&self) -> Option<&Route> {
        match self {
            GateDecision::Stay => None,
            GateDecision::Redirect(route) => Some(route),
        }
    }
}

pub struct SessionGate {
    event_bus: Arc<EventBus>,
}

impl SessionGate {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    /// The gate rules, as a pure function:
    ///
    /// 1. No token and the route is not login/register: go to login.
    /// 2. Token present and the route is login/register: go to the role's
    ///    landing page.
    ///
    /// A missing role is not an error; it lands on the default home screen
    /// like a job seeker.
    pub fn decide(session: &Session, current: &Route) -> GateDecision {
        if !session.is_authenticated() && !current.is_auth_route() {
            return GateDecision::Redirect(Route::Login);
        }
        if session.is_authenticated() && current.is_auth_route() {
            return GateDecision::Redirect(Route::landing_for(session.role));
        }
        GateDecision::Stay
    }

    /// Evaluate the gate for a navigation and publish the redirect, if any.
    pub fn evaluate(&self, session: &Session, current: &Route) -> GateDecision {
        let decision = Self::decide(session, current);
        if let GateDecision::Redirect(target) = &decision {
            self.event_bus
                .emit(RedirectIssued::new(current.clone(), target.clone()));
        }
        decision
    }
}
