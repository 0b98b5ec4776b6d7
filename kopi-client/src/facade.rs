//! SessionFacade - the client-side "current session" cache
//!
//! At most one (session, user) pair is attached at a time. Attach mirrors
//! both to JSON files under the local data directory; a cold start can
//! restore them and reconcile against the store with one refresh. Corrupt
//! mirror files are discarded silently.

use kopi_engine::store::SessionStore;
use shared::models::{Session, SessionUser};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

const SESSION_FILE: &str = "current_session.json";
const USER_FILE: &str = "current_user.json";

#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("No session attached")]
    NotAttached,

    /// The store no longer knows the cached session; the facade has
    /// already detached when this is returned
    #[error("Session no longer exists")]
    SessionGone,
}

struct Attachment {
    session: Session,
    user: SessionUser,
}

/// Local holder of the session the user is currently in
pub struct SessionFacade {
    store: Arc<SessionStore>,
    local_dir: PathBuf,
    current: Option<Attachment>,
}

impl SessionFacade {
    /// Create a detached facade over the given store and local data dir
    pub fn new(store: Arc<SessionStore>, local_dir: impl AsRef<Path>) -> Self {
        Self {
            store,
            local_dir: local_dir.as_ref().to_path_buf(),
            current: None,
        }
    }

    /// Attach to a session as the given member, replacing any previous
    /// attachment, and mirror both to local storage
    pub fn attach(&mut self, session: Session, user: SessionUser) {
        self.mirror(&session, &user);
        self.current = Some(Attachment { session, user });
    }

    /// Clear the attachment in memory and in local storage
    pub fn detach(&mut self) {
        self.current = None;
        let _ = std::fs::remove_file(self.local_dir.join(SESSION_FILE));
        let _ = std::fs::remove_file(self.local_dir.join(USER_FILE));
        tracing::debug!("Detached from session");
    }

    /// Re-fetch the attached session from the store
    ///
    /// Replaces the cached copy with the store's current truth. If the
    /// store no longer has the session, the facade detaches and reports
    /// [`FacadeError::SessionGone`] instead of serving the stale copy. A
    /// closed session is still a valid (terminal, read-only) attachment.
    pub fn refresh(&mut self) -> Result<Session, FacadeError> {
        let attachment = self.current.as_mut().ok_or(FacadeError::NotAttached)?;
        match self.store.get(&attachment.session.id) {
            Some(session) => {
                attachment.session = session.clone();
                let user = attachment.user.clone();
                self.mirror(&session, &user);
                Ok(session)
            }
            None => {
                tracing::info!(session_id = %attachment.session.id, "Cached session gone from store");
                self.detach();
                Err(FacadeError::SessionGone)
            }
        }
    }

    /// Cold-start restore from local storage
    ///
    /// Loads the mirrored pair if present, then reconciles with one
    /// [`refresh`](Self::refresh). Missing or unparsable mirror data is
    /// discarded silently and leaves the facade detached; a session the
    /// store no longer knows surfaces as [`FacadeError::SessionGone`].
    pub fn restore(&mut self) -> Result<Option<Session>, FacadeError> {
        let session = self.load_mirror::<Session>(SESSION_FILE);
        let user = self.load_mirror::<SessionUser>(USER_FILE);
        let (session, user) = match (session, user) {
            (Some(session), Some(user)) => (session, user),
            _ => {
                // Partial or corrupt mirror: drop whatever is there
                self.detach();
                return Ok(None);
            }
        };
        self.current = Some(Attachment { session, user });
        let session = self.refresh()?;
        tracing::info!(session_id = %session.id, "Restored cached session");
        Ok(Some(session))
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref().map(|a| &a.session)
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref().map(|a| &a.user)
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }

    /// Best-effort mirror to local storage; failures are logged only
    fn mirror(&self, session: &Session, user: &SessionUser) {
        if let Err(e) = self.write_mirror(session, user) {
            tracing::warn!(error = %e, "Could not mirror session to local storage");
        }
    }

    fn write_mirror(&self, session: &Session, user: &SessionUser) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.local_dir)?;
        let session_json = serde_json::to_string_pretty(session)?;
        let user_json = serde_json::to_string_pretty(user)?;
        std::fs::write(self.local_dir.join(SESSION_FILE), session_json)?;
        std::fs::write(self.local_dir.join(USER_FILE), user_json)?;
        Ok(())
    }

    fn load_mirror<T: serde::de::DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.local_dir.join(file);
        if !path.exists() {
            return None;
        }
        let raw = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(file = %file, error = %e, "Discarding corrupt mirror file");
                None
            }
        }
    }
}
