//! Session lifecycle - create, join, close
//!
//! # Rules
//!
//! - the creator is always the first member of a new session
//! - joining with a name that is already a member (case-insensitive) is an
//!   idempotent success, not an error
//! - only the creator may close; closed is terminal and never reactivates

use crate::ids;
use crate::store::SessionStore;
use chrono::Utc;
use shared::error::{SessionError, SessionResult};
use shared::models::{Session, SessionUser};
use shared::request::{CreateSessionRequest, JoinSessionRequest};
use std::sync::Arc;

/// Create/join/close operations against the store
pub struct LifecycleService {
    store: Arc<SessionStore>,
}

impl LifecycleService {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Create a new active session with the caller as creator
    pub fn create_session(&self, request: CreateSessionRequest) -> SessionResult<Session> {
        let creator_id = ids::user_id();
        let session = self
            .store
            .create(|code| Session::new(code, creator_id, request.creator_name.clone()));
        tracing::info!(session_id = %session.id, creator = %session.creator_name, "Session created");
        Ok(session)
    }

    /// Join a session by code
    ///
    /// Re-joining under an existing member name returns the session
    /// unchanged.
    pub fn join_session(&self, request: JoinSessionRequest) -> SessionResult<Session> {
        self.store.mutate(&request.session_id, |session| {
            if !session.is_active {
                return Err(SessionError::Inactive);
            }
            if session.find_user_by_name(&request.user_name).is_some() {
                return Ok(());
            }
            session.users.push(SessionUser {
                id: ids::user_id(),
                name: request.user_name.clone(),
                joined_at: Utc::now(),
            });
            Ok(())
        })
    }

    /// Close a session; creator-only, irreversible
    pub fn close_session(&self, session_id: &str, user_id: &str) -> SessionResult<Session> {
        let session = self.store.mutate(session_id, |session| {
            if session.creator_id != user_id {
                return Err(SessionError::Forbidden);
            }
            session.is_active = false;
            Ok(())
        })?;
        tracing::info!(session_id = %session.id, "Session closed");
        Ok(session)
    }

    /// Fetch a session by code
    pub fn get_session(&self, session_id: &str) -> SessionResult<Session> {
        self.store.get(session_id).ok_or(SessionError::NotFound)
    }

    /// All sessions, active and closed
    pub fn list_sessions(&self) -> Vec<Session> {
        self.store.list()
    }

    /// Codes of sessions that can still be joined
    pub fn available_session_ids(&self) -> Vec<String> {
        self.store.list_active_ids()
    }
}
