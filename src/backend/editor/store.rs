/**
 * Session Store
 *
 * Key-value holder for editor sessions, keyed by `editorId`. Each session
 * has two independent slots: the snapshot uploaded by the collaborator and
 * the pending change-set submitted by the editor.
 *
 * The store does no validation and never merges: every put overwrites its
 * slot. Callers rely on nothing beyond single-key atomicity, so any
 * key-value backend can implement `SessionStore`.
 */

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::backend::error::BackendError;
use crate::shared::{ChangeSet, Snapshot};

/// Storage contract used by the session API
pub trait SessionStore: Send + Sync {
    /// Overwrite the session's snapshot, creating the session if needed
    fn put_snapshot(&self, editor_id: &str, snapshot: Snapshot) -> Result<(), BackendError>;

    fn get_snapshot(&self, editor_id: &str) -> Result<Option<Snapshot>, BackendError>;

    /// Overwrite the session's pending change-set
    fn put_changes(&self, editor_id: &str, changes: ChangeSet) -> Result<(), BackendError>;

    fn get_changes(&self, editor_id: &str) -> Result<Option<ChangeSet>, BackendError>;

    /// Drop sessions not accessed within `max_idle`. Returns how many were removed.
    fn evict_idle(&self, max_idle: Duration) -> Result<usize, BackendError>;

    fn session_count(&self) -> Result<usize, BackendError>;
}

#[derive(Debug)]
struct SessionEntry {
    snapshot: Option<Snapshot>,
    changes: Option<ChangeSet>,
    last_access: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            snapshot: None,
            changes: None,
            last_access: Instant::now(),
        }
    }
}

/// Process-local store. All data is lost on restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, SessionEntry>>, BackendError> {
        self.sessions
            .lock()
            .map_err(|e| BackendError::state(format!("session store lock poisoned: {}", e)))
    }

    fn read<T>(
        &self,
        editor_id: &str,
        f: impl FnOnce(&SessionEntry) -> Option<T>,
    ) -> Result<Option<T>, BackendError> {
        let mut sessions = self.lock()?;
        Ok(sessions.get_mut(editor_id).and_then(|entry| {
            entry.last_access = Instant::now();
            f(entry)
        }))
    }

    fn write(&self, editor_id: &str, f: impl FnOnce(&mut SessionEntry)) -> Result<(), BackendError> {
        let mut sessions = self.lock()?;
        let entry = sessions
            .entry(editor_id.to_string())
            .or_insert_with(SessionEntry::new);
        entry.last_access = Instant::now();
        f(entry);
        Ok(())
    }
}

impl SessionStore for MemorySessionStore {
    fn put_snapshot(&self, editor_id: &str, snapshot: Snapshot) -> Result<(), BackendError> {
        self.write(editor_id, |entry| entry.snapshot = Some(snapshot))
    }

    fn get_snapshot(&self, editor_id: &str) -> Result<Option<Snapshot>, BackendError> {
        self.read(editor_id, |entry| entry.snapshot.clone())
    }

    fn put_changes(&self, editor_id: &str, changes: ChangeSet) -> Result<(), BackendError> {
        self.write(editor_id, |entry| entry.changes = Some(changes))
    }

    fn get_changes(&self, editor_id: &str) -> Result<Option<ChangeSet>, BackendError> {
        self.read(editor_id, |entry| entry.changes.clone())
    }

    fn evict_idle(&self, max_idle: Duration) -> Result<usize, BackendError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_access.elapsed() < max_idle);
        Ok(before - sessions.len())
    }

    fn session_count(&self) -> Result<usize, BackendError> {
        Ok(self.lock()?.len())
    }
}
