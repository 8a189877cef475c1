// src/repositories/session_repository.rs
//
// Session persistence - the only module that reads or writes the stored
// (token, role, user id) triple. Screens never touch storage keys directly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::domain::{AuthToken, Role, Session};
use crate::error::{AppError, AppResult};

pub trait SessionRepository: Send + Sync {
    /// Persist the whole triple. Called on login.
    fn save(&self, session: &Session) -> AppResult<()>;

    /// Load whatever is stored; an empty store yields the anonymous session.
    fn load(&self) -> AppResult<Session>;

    /// Delete only the token, keeping role/id. This is the teardown-hygiene
    /// path the embedder invokes when the client process goes away.
    fn clear_token(&self) -> AppResult<()>;

    /// Wipe everything. Called on logout.
    fn clear(&self) -> AppResult<()>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Process-lifetime store; everything is gone when the process exits.
pub struct InMemorySessionRepository {
    state: RwLock<Session>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Session::anonymous()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn save(&self, session: &Session) -> AppResult<()> {
        *self.state.write().unwrap() = session.clone();
        Ok(())
    }

    fn load(&self) -> AppResult<Session> {
        Ok(self.state.read().unwrap().clone())
    }

    fn clear_token(&self) -> AppResult<()> {
        self.state.write().unwrap().token = None;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.state.write().unwrap() = Session::anonymous();
        Ok(())
    }
}

// ============================================================================
// FILE-BACKED STORE
// ============================================================================

/// On-disk shape of the persisted token.
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Persists the token to a JSON file (the analogue of the browser's local
/// storage), while role/user id stay session-scoped in memory.
///
/// A missing or unreadable token file degrades to "no token": the gate then
/// routes to the login screen, which is the safe direction.
pub struct JsonFileSessionRepository {
    token_path: PathBuf,
    identity: RwLock<(Option<Role>, Option<i64>)>,
}

impl JsonFileSessionRepository {
    pub fn new(token_path: PathBuf) -> Self {
        Self {
            token_path,
            identity: RwLock::new((None, None)),
        }
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> AppResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| AppError::Other("no platform data directory".to_string()))?;
        Ok(base.join("jobhub").join("session.json"))
    }

    fn read_token(&self) -> Option<AuthToken> {
        let raw = fs::read_to_string(&self.token_path).ok()?;
        let stored: StoredToken = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("discarding unreadable session file: {}", err);
                return None;
            }
        };
        Some(AuthToken::new(stored.token))
    }

    fn write_token(&self, token: &AuthToken) -> AppResult<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredToken {
            token: token.as_str().to_string(),
        };
        fs::write(&self.token_path, serde_json::to_string(&stored)?)?;
        Ok(())
    }

    fn remove_token_file(&self) -> AppResult<()> {
        match fs::remove_file(&self.token_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl SessionRepository for JsonFileSessionRepository {
    fn save(&self, session: &Session) -> AppResult<()> {
        match &session.token {
            Some(token) => self.write_token(token)?,
            None => self.remove_token_file()?,
        }
        *self.identity.write().unwrap() = (session.role, session.user_id);
        Ok(())
    }

    fn load(&self) -> AppResult<Session> {
        let (role, user_id) = *self.identity.read().unwrap();
        Ok(Session {
            token: self.read_token(),
            role,
            user_id,
        })
    }

    fn clear_token(&self) -> AppResult<()> {
        self.remove_token_file()
    }

    fn clear(&self) -> AppResult<()> {
        self.remove_token_file()?;
        *self.identity.write().unwrap() = (None, None);
        Ok(())
    }
}
