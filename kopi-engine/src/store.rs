//! SessionStore - authoritative session records
//!
//! Owns every session for its full lifetime and is the single durable
//! persistence boundary. All reads and read-modify-write sequences run
//! under one mutex acquisition, so concurrent callers (multiple client
//! facades sharing one store) serialize instead of losing appends.
//!
//! Persistence is best-effort: a failed write is logged and the in-memory
//! map stays authoritative for the remainder of the process lifetime. A
//! restart after a failed persist may lose the most recent mutation; that
//! gap is accepted by contract.

use crate::ids;
use crate::storage::BlobStore;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::error::{SessionError, SessionResult};
use shared::models::Session;
use std::collections::HashMap;

/// Blob key for the persisted session database
const DB_KEY: &str = "sessions_db";

/// Persisted record layout
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDatabase {
    sessions: HashMap<String, Session>,
    last_updated: DateTime<Utc>,
}

/// Demo sessions seeded into an empty backing store
const DEMO_SESSIONS: &[(&str, &str, &[&str])] = &[
    ("DEMO01", "Alice", &["Alice", "Bob"]),
    ("TEST12", "Charlie", &["Charlie"]),
    ("67Q660", "David", &["David", "Emma"]),
];

/// Authoritative mapping from session code to session record
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    blob: Box<dyn BlobStore>,
}

impl SessionStore {
    /// Load persisted sessions and seed demo data on first start
    ///
    /// Corrupt or unreadable persisted data is logged and treated as an
    /// empty store. Seeding only happens when no record survived the load,
    /// so it never runs twice against the same backing store.
    pub fn initialize(blob: impl BlobStore + 'static) -> Self {
        let store = Self {
            sessions: Mutex::new(HashMap::new()),
            blob: Box::new(blob),
        };
        store.load();
        let seeded = store.seed_if_empty();
        if seeded {
            tracing::info!("Seeded demo sessions");
        }
        store
    }

    /// Flush the current state to the backing store
    ///
    /// Call once when the owning process shuts down.
    pub fn close(&self) {
        let sessions = self.sessions.lock();
        self.persist_locked(&sessions);
        tracing::info!(count = sessions.len(), "Session store closed");
    }

    /// Fetch a session by code (case-insensitive)
    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .lock()
            .get(&session_id.to_uppercase())
            .cloned()
    }

    /// All sessions known to the store
    pub fn list(&self) -> Vec<Session> {
        self.sessions.lock().values().cloned().collect()
    }

    /// Codes of sessions that are still active
    pub fn list_active_ids(&self) -> Vec<String> {
        self.sessions
            .lock()
            .values()
            .filter(|s| s.is_active)
            .map(|s| s.id.clone())
            .collect()
    }

    /// Allocate a fresh code, build and insert a new session
    ///
    /// The code is drawn while holding the lock, so it can never collide
    /// with a session inserted concurrently.
    pub fn create(&self, build: impl FnOnce(String) -> Session) -> Session {
        let mut sessions = self.sessions.lock();
        let code = ids::session_code(|candidate| sessions.contains_key(candidate));
        let session = build(code.clone());
        sessions.insert(code, session.clone());
        self.persist_locked(&sessions);
        tracing::debug!(session_id = %session.id, "Session created");
        session
    }

    /// Apply a mutation to one session and persist
    ///
    /// This is the single serialization point for all writes: lookup,
    /// mutation and persist happen under one lock acquisition. Returns the
    /// updated session snapshot, or the closure's error with no mutation
    /// persisted.
    pub fn mutate(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> SessionResult<()>,
    ) -> SessionResult<Session> {
        let mut sessions = self.sessions.lock();
        let key = session_id.to_uppercase();
        let session = sessions.get_mut(&key).ok_or(SessionError::NotFound)?;
        // Mutate a scratch copy so a failed closure leaves the record intact
        let mut updated = session.clone();
        f(&mut updated)?;
        *session = updated.clone();
        self.persist_locked(&sessions);
        Ok(updated)
    }

    fn load(&self) {
        let raw = match self.blob.get(DB_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read session database");
                return;
            }
        };
        match serde_json::from_str::<SessionDatabase>(&raw) {
            Ok(db) => {
                let mut sessions = self.sessions.lock();
                *sessions = db.sessions;
                tracing::info!(count = sessions.len(), "Loaded sessions from storage");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Corrupt session database, starting empty");
            }
        }
    }

    fn seed_if_empty(&self) -> bool {
        let mut sessions = self.sessions.lock();
        if !sessions.is_empty() {
            return false;
        }
        for (code, creator, members) in DEMO_SESSIONS {
            let mut session = Session::new(
                (*code).to_string(),
                ids::user_id(),
                (*creator).to_string(),
            );
            for member in members.iter().skip(1) {
                session.users.push(shared::models::SessionUser {
                    id: ids::user_id(),
                    name: (*member).to_string(),
                    joined_at: Utc::now(),
                });
            }
            sessions.insert((*code).to_string(), session);
        }
        self.persist_locked(&sessions);
        true
    }

    /// Serialize and write the full map; failures are logged, never raised
    fn persist_locked(&self, sessions: &HashMap<String, Session>) {
        let db = SessionDatabase {
            sessions: sessions.clone(),
            last_updated: Utc::now(),
        };
        let raw = match serde_json::to_string_pretty(&db) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Could not serialize session database");
                return;
            }
        };
        if let Err(e) = self.blob.put(DB_KEY, &raw) {
            tracing::warn!(error = %e, "Could not save session database");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileBlobStore, MemoryBlobStore};

    #[test]
    fn empty_store_seeds_demo_sessions() {
        let store = SessionStore::initialize(MemoryBlobStore::new());
        let ids: Vec<String> = store.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 3);
        for code in ["DEMO01", "TEST12", "67Q660"] {
            assert!(ids.contains(&code.to_string()));
        }
        let demo = store.get("DEMO01").unwrap();
        assert_eq!(demo.creator_name, "Alice");
        assert_eq!(demo.users.len(), 2);
        assert_eq!(demo.users[0].id, demo.creator_id);
        assert!(demo.orders.is_empty());
        assert_eq!(demo.total_amount, 0.0);
    }

    #[test]
    fn seeding_is_one_time_bootstrap() {
        let tmp = tempfile::tempdir().unwrap();

        let store = SessionStore::initialize(FileBlobStore::new(tmp.path()));
        let created = store.create(|code| {
            Session::new(code, ids::user_id(), "Frank".to_string())
        });
        store.close();

        // Restart over the same backing store: no re-seed, data survives
        let store = SessionStore::initialize(FileBlobStore::new(tmp.path()));
        assert_eq!(store.list().len(), 4);
        let reloaded = store.get(&created.id).unwrap();
        assert_eq!(reloaded, created);
        assert_eq!(reloaded.created_at, created.created_at);
    }

    #[test]
    fn corrupt_database_starts_empty_and_reseeds() {
        let blob = std::sync::Arc::new(MemoryBlobStore::new());
        blob.put("sessions_db", "not json {{{").unwrap();
        let store = SessionStore::initialize(blob);
        // Corrupt blob discarded, demo sessions seeded in its place
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn get_is_case_insensitive() {
        let store = SessionStore::initialize(MemoryBlobStore::new());
        assert!(store.get("demo01").is_some());
        assert!(store.get("Demo01").is_some());
        assert!(store.get("NOPE99").is_none());
    }

    #[test]
    fn created_codes_are_unique_six_char_uppercase() {
        let store = SessionStore::initialize(MemoryBlobStore::new());
        let mut seen = std::collections::HashSet::new();
        for s in store.list() {
            seen.insert(s.id);
        }
        for _ in 0..50 {
            let session =
                store.create(|code| Session::new(code, ids::user_id(), "Gail".to_string()));
            assert_eq!(session.id.len(), 6);
            assert!(
                session
                    .id
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
            assert!(seen.insert(session.id));
        }
    }

    #[test]
    fn mutate_unknown_code_is_not_found() {
        let store = SessionStore::initialize(MemoryBlobStore::new());
        let result = store.mutate("ZZZZZZ", |_| Ok(()));
        assert_eq!(result.unwrap_err(), SessionError::NotFound);
    }

    #[test]
    fn failed_mutation_leaves_record_untouched() {
        let store = SessionStore::initialize(MemoryBlobStore::new());
        let before = store.get("DEMO01").unwrap();
        let result = store.mutate("DEMO01", |session| {
            session.is_active = false;
            Err(SessionError::Forbidden)
        });
        assert!(result.is_err());
        assert_eq!(store.get("DEMO01").unwrap(), before);
    }

    #[test]
    fn list_active_ids_excludes_closed_sessions() {
        let store = SessionStore::initialize(MemoryBlobStore::new());
        store
            .mutate("TEST12", |session| {
                session.is_active = false;
                Ok(())
            })
            .unwrap();
        let active = store.list_active_ids();
        assert!(!active.contains(&"TEST12".to_string()));
        assert!(active.contains(&"DEMO01".to_string()));
    }
}
