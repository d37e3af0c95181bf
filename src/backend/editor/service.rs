/**
 * Session API
 *
 * Validation and state transitions for editor sessions. Handlers decode the
 * request shape and call into `EditorService`; the service talks to the
 * `SessionStore`.
 *
 * # Session lifecycle
 *
 * ```text
 * Uninitialized --upload--> HasSnapshot --submit--> HasSnapshot + HasChanges
 *                                              ^                |
 *                                              +----submit------+
 * ```
 *
 * Each submit replaces the pending change-set and increments its version.
 * Retrieving changes is non-destructive.
 */

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend::editor::store::SessionStore;
use crate::backend::error::BackendError;
use crate::shared::{
    ChangeSet, RankChange, Snapshot, SnapshotView, SubmitRequest, SubmitResponse, TagChange,
    UploadResponse,
};

pub const SESSION_NOT_FOUND_UPLOAD: &str = "Session not found - please upload data file";
pub const SESSION_NOT_FOUND: &str = "Session not found";
pub const NO_CHANGES_FOUND: &str = "No changes found";
pub const UPLOAD_ACCEPTED: &str = "Data uploaded successfully";

/// Session API operations over a `SessionStore`
pub struct EditorService {
    store: Arc<dyn SessionStore>,
    // Serializes the read-modify-write of submit so versions never repeat
    submit_gate: Mutex<()>,
}

impl EditorService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            submit_gate: Mutex::new(()),
        }
    }

    /// Path the collaborator downloads a session's change-set from
    pub fn download_url(editor_id: &str) -> String {
        format!("/api/editor/{}/download", editor_id)
    }

    /// Store a snapshot, replacing any previous one
    pub fn upload(&self, editor_id: &str, snapshot: Snapshot) -> Result<UploadResponse, BackendError> {
        tracing::info!(
            "[Editor] Upload for {}: {} ranks, {} tags",
            editor_id,
            snapshot.ranks.len(),
            snapshot.tags.len()
        );
        self.store.put_snapshot(editor_id, snapshot)?;

        Ok(UploadResponse {
            success: true,
            message: UPLOAD_ACCEPTED.to_string(),
        })
    }

    /// Current snapshot of a session
    pub fn fetch(&self, editor_id: &str) -> Result<SnapshotView, BackendError> {
        let snapshot = self
            .store
            .get_snapshot(editor_id)?
            .ok_or_else(|| BackendError::not_found(SESSION_NOT_FOUND_UPLOAD))?;

        Ok(snapshot.view())
    }

    /// Replace the pending change-set with `request` under the next version
    pub async fn submit(
        &self,
        editor_id: &str,
        request: SubmitRequest,
    ) -> Result<SubmitResponse, BackendError> {
        let rank_changes = request
            .rank_changes
            .into_iter()
            .map(RankChange::normalized)
            .collect::<Result<Vec<_>, _>>()?;
        let tag_changes = request
            .tag_changes
            .into_iter()
            .map(TagChange::normalized)
            .collect::<Result<Vec<_>, _>>()?;

        let _gate = self.submit_gate.lock().await;

        let snapshot = self
            .store
            .get_snapshot(editor_id)?
            .ok_or_else(|| BackendError::not_found(SESSION_NOT_FOUND))?;

        let version = self
            .store
            .get_changes(editor_id)?
            .map(|current| current.version)
            .unwrap_or(0)
            + 1;

        tracing::info!(
            "[Editor] Submit for {}: {} rank changes, {} tag changes, version {}",
            editor_id,
            rank_changes.len(),
            tag_changes.len(),
            version
        );

        self.store.put_changes(
            editor_id,
            ChangeSet {
                editor_id: editor_id.to_string(),
                server_uuid: snapshot.server_uuid,
                rank_changes,
                tag_changes,
                version,
                submitted_at: chrono::Utc::now().timestamp_millis(),
            },
        )?;

        Ok(SubmitResponse {
            success: true,
            version,
            download_url: Self::download_url(editor_id),
        })
    }

    /// Latest pending change-set, left in place
    pub fn retrieve(&self, editor_id: &str) -> Result<ChangeSet, BackendError> {
        self.store
            .get_changes(editor_id)?
            .ok_or_else(|| BackendError::not_found(NO_CHANGES_FOUND))
    }

    pub fn session_count(&self) -> Result<usize, BackendError> {
        self.store.session_count()
    }

    /// Remove idle sessions; used by the eviction task
    pub fn evict_idle(&self, max_idle: std::time::Duration) -> Result<usize, BackendError> {
        self.store.evict_idle(max_idle)
    }
}
