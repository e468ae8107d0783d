//! Session layer: binds an authenticated demo user to a role and keeps
//! that binding in a single client-local storage slot.
//!
//! The stored record carries the role as a plain string; in memory it is
//! always the typed [`Role`]. Anything in storage that does not decode to
//! a known role clears the slot and forces re-authentication rather than
//! silently defaulting.

mod credentials;
mod store;

pub use credentials::{authenticate, DemoUser, DEMO_USERS};
pub use store::{FileStore, MemoryStore, SessionStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authz::Role;
use crate::errors::{AccessError, AccessResult};

/// The authenticated session as the rest of the crate sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub name: String,
    pub email: String,
    pub tenant: Option<String>,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
}

/// The raw persisted record. Role stays a string here so that legacy
/// names survive deserialization long enough to be migrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub name: String,
    pub email: String,
    pub tenant: Option<String>,
    pub role: String,
    pub issued_at: DateTime<Utc>,
}

impl TryFrom<StoredSession> for Session {
    type Error = AccessError;

    fn try_from(value: StoredSession) -> Result<Self, Self::Error> {
        let role = Role::from_stored(&value.role)
            .ok_or_else(|| AccessError::unknown_role(&value.role))?;

        Ok(Session {
            user_id: value.user_id,
            session_id: value.session_id,
            name: value.name,
            email: value.email,
            tenant: value.tenant,
            role,
            issued_at: value.issued_at,
        })
    }
}

impl From<&Session> for StoredSession {
    fn from(value: &Session) -> Self {
        StoredSession {
            user_id: value.user_id,
            session_id: value.session_id,
            name: value.name.clone(),
            email: value.email.clone(),
            tenant: value.tenant.clone(),
            role: value.role.as_str().to_string(),
            issued_at: value.issued_at,
        }
    }
}

/// Owns the storage slot and the login/restore/logout lifecycle. Built
/// explicitly around an injected store; there is no ambient global.
pub struct SessionManager<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Authenticate against the demo credential table and persist the
    /// resulting session.
    pub fn login(&self, email: &str, password: &str) -> AccessResult<Session> {
        let user = credentials::authenticate(email, password).ok_or(AccessError::InvalidCredentials)?;

        let session = Session {
            user_id: Uuid::parse_str(user.id).unwrap_or_default(),
            session_id: Uuid::new_v4(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            tenant: user.tenant.map(str::to_string),
            role: user.role,
            issued_at: Utc::now(),
        };

        self.persist(&session)?;
        tracing::info!(email = %session.email, role = %session.role, "login");
        Ok(session)
    }

    /// Read the stored session, if any.
    ///
    /// Undecodable content and unknown role values clear the slot and
    /// return `None`, forcing re-authentication. A legacy role name is
    /// normalized before any capability check and the normalized record
    /// is persisted back.
    pub fn restore(&self) -> AccessResult<Option<Session>> {
        let raw = match self.store.load()? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let mut deserializer = serde_json::Deserializer::from_str(&raw);
        let stored: StoredSession = match serde_path_to_error::deserialize(&mut deserializer) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(path = %err.path(), error = %err, "discarding undecodable session");
                self.store.clear()?;
                return Ok(None);
            }
        };

        let stored_role = stored.role.clone();
        let session = match Session::try_from(stored) {
            Ok(session) => session,
            Err(AccessError::UnknownRole(role)) => {
                tracing::warn!(role = %role, "discarding session with unknown role");
                self.store.clear()?;
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        if session.role.as_str() != stored_role {
            tracing::info!(from = %stored_role, to = %session.role, "migrated legacy role name");
            self.persist(&session)?;
        }

        Ok(Some(session))
    }

    /// Drop the stored session.
    pub fn logout(&self) -> AccessResult<()> {
        self.store.clear()?;
        tracing::info!("logout");
        Ok(())
    }

    fn persist(&self, session: &Session) -> AccessResult<()> {
        let raw = serde_json::to_string(&StoredSession::from(session))?;
        self.store.save(&raw)?;
        Ok(())
    }
}
