/**
 * Editor View Model
 *
 * Holds the last fetched snapshot plus the journal of edits made since it
 * arrived. What the user sees is the snapshot with every live (not failed)
 * journal entry applied in order, sorted for display. Each submit sends the
 * whole live journal, so a later change-set always contains the earlier
 * edits made against the same snapshot.
 *
 * A snapshot with a new marker is taken as the game server's current state:
 * confirmed edits are dropped from the journal so they are neither replayed
 * over it nor sent again. Edits still local, in flight or failed are kept.
 */

use thiserror::Error;
use uuid::Uuid;

use crate::egui_app::pending::{EditStatus, TransitionError};
use crate::shared::{
    Rank, RankChange, SharedError, SnapshotMarker, SnapshotView, SubmitRequest, Tag, TagChange,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Invalid(#[from] SharedError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("unknown edit {0}")]
    UnknownEdit(Uuid),
}

/// One user action and the change records it produced
#[derive(Debug, Clone)]
pub struct PendingEdit {
    pub id: Uuid,
    pub summary: String,
    pub rank_changes: Vec<RankChange>,
    pub tag_changes: Vec<TagChange>,
    pub status: EditStatus,
}

impl PendingEdit {
    fn new(summary: String, rank_changes: Vec<RankChange>, tag_changes: Vec<TagChange>) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary,
            rank_changes,
            tag_changes,
            status: EditStatus::LocalOnly,
        }
    }
}

#[derive(Debug, Default)]
pub struct EditorState {
    snapshot: Option<SnapshotView>,
    marker: Option<SnapshotMarker>,
    edits: Vec<PendingEdit>,
    ranks: Vec<Rank>,
    tags: Vec<Tag>,
    /// Free-text filter applied to both tabs
    pub filter: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn marker(&self) -> Option<&SnapshotMarker> {
        self.marker.as_ref()
    }

    /// Replace the snapshot and retire confirmed edits. Returns false when
    /// nothing changed: the version marker matches, or, for snapshots
    /// without a marker, the data matches.
    pub fn apply_snapshot(&mut self, view: SnapshotView) -> bool {
        let marker = view.marker();
        let unchanged = match (&self.snapshot, &marker) {
            (None, _) => false,
            (Some(_), Some(marker)) => self.marker.as_ref() == Some(marker),
            (Some(current), None) => self.marker.is_none() && *current == view,
        };
        if unchanged {
            return false;
        }

        tracing::debug!("[Editor] Snapshot changed: {:?} -> {:?}", self.marker, marker);
        self.marker = marker;
        self.snapshot = Some(view);
        let before = self.edits.len();
        self.edits
            .retain(|edit| !matches!(edit.status, EditStatus::Confirmed { .. }));
        if self.edits.len() != before {
            tracing::debug!("[Editor] Retired {} confirmed edits", before - self.edits.len());
        }
        self.rebuild();
        true
    }

    /// Ranks as displayed, highest weight first
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Tags as displayed, highest priority first
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn visible_ranks(&self) -> Vec<&Rank> {
        let needle = self.needle();
        self.ranks.iter().filter(|r| r.matches(&needle)).collect()
    }

    pub fn visible_tags(&self) -> Vec<&Tag> {
        let needle = self.needle();
        self.tags.iter().filter(|t| t.matches(&needle)).collect()
    }

    pub fn rank(&self, id: &str) -> Option<&Rank> {
        self.ranks.iter().find(|r| r.id == id)
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    fn needle(&self) -> String {
        self.filter.trim().to_lowercase()
    }

    /// Record a rank form save. `original_id` is the id the form was opened
    /// with; changing it becomes a delete of the old rank plus a create.
    pub fn save_rank(&mut self, original_id: Option<&str>, rank: Rank) -> Result<Uuid, EditorError> {
        let changes = match original_id {
            Some(old) if old != rank.id => vec![
                RankChange::delete(old).normalized()?,
                RankChange::create(&rank).normalized()?,
            ],
            _ if self.rank(&rank.id).is_some() => vec![RankChange::update(&rank).normalized()?],
            _ => vec![RankChange::create(&rank).normalized()?],
        };
        Ok(self.push(format!("Save rank {}", rank.id), changes, Vec::new()))
    }

    pub fn delete_rank(&mut self, id: &str) -> Result<Uuid, EditorError> {
        let change = RankChange::delete(id).normalized()?;
        Ok(self.push(format!("Delete rank {}", id), vec![change], Vec::new()))
    }

    pub fn save_tag(&mut self, original_id: Option<&str>, tag: Tag) -> Result<Uuid, EditorError> {
        let changes = match original_id {
            Some(old) if old != tag.id => vec![
                TagChange::delete(old).normalized()?,
                TagChange::create(&tag).normalized()?,
            ],
            _ if self.tag(&tag.id).is_some() => vec![TagChange::update(&tag).normalized()?],
            _ => vec![TagChange::create(&tag).normalized()?],
        };
        Ok(self.push(format!("Save tag {}", tag.id), Vec::new(), changes))
    }

    pub fn delete_tag(&mut self, id: &str) -> Result<Uuid, EditorError> {
        let change = TagChange::delete(id).normalized()?;
        Ok(self.push(format!("Delete tag {}", id), Vec::new(), vec![change]))
    }

    fn push(&mut self, summary: String, ranks: Vec<RankChange>, tags: Vec<TagChange>) -> Uuid {
        let edit = PendingEdit::new(summary, ranks, tags);
        let id = edit.id;
        self.edits.push(edit);
        self.rebuild();
        id
    }

    /// Mark an edit as in flight and build the request that carries it
    pub fn begin_sync(&mut self, edit_id: Uuid) -> Result<SubmitRequest, EditorError> {
        self.edit_mut(edit_id)?.status.begin()?;
        Ok(self.journal_request())
    }

    pub fn confirm(&mut self, edit_id: Uuid, version: u64) -> Result<(), EditorError> {
        self.edit_mut(edit_id)?.status.confirm(version)?;
        Ok(())
    }

    /// Roll a rejected edit out of the displayed state
    pub fn fail(&mut self, edit_id: Uuid, reason: impl Into<String>) -> Result<(), EditorError> {
        self.edit_mut(edit_id)?.status.fail(reason)?;
        self.rebuild();
        Ok(())
    }

    /// Put a failed edit back in flight
    pub fn retry(&mut self, edit_id: Uuid) -> Result<SubmitRequest, EditorError> {
        self.edit_mut(edit_id)?.status.retry()?;
        self.rebuild();
        Ok(self.journal_request())
    }

    /// Forget a failed edit
    pub fn dismiss(&mut self, edit_id: Uuid) {
        self.edits
            .retain(|edit| edit.id != edit_id || edit.status.is_live());
    }

    pub fn failed_edits(&self) -> impl Iterator<Item = &PendingEdit> {
        self.edits.iter().filter(|edit| !edit.status.is_live())
    }

    pub fn in_flight(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| edit.status.is_in_flight())
            .count()
    }

    pub fn edit(&self, edit_id: Uuid) -> Option<&PendingEdit> {
        self.edits.iter().find(|edit| edit.id == edit_id)
    }

    fn edit_mut(&mut self, edit_id: Uuid) -> Result<&mut PendingEdit, EditorError> {
        self.edits
            .iter_mut()
            .find(|edit| edit.id == edit_id)
            .ok_or(EditorError::UnknownEdit(edit_id))
    }

    /// Every edit sent since the current snapshot and not rejected, oldest first
    fn journal_request(&self) -> SubmitRequest {
        let mut request = SubmitRequest::default();
        for edit in self.edits.iter().filter(|e| {
            matches!(e.status, EditStatus::Syncing | EditStatus::Confirmed { .. })
        }) {
            request.rank_changes.extend(edit.rank_changes.iter().cloned());
            request.tag_changes.extend(edit.tag_changes.iter().cloned());
        }
        request
    }

    fn rebuild(&mut self) {
        let (mut ranks, mut tags) = match &self.snapshot {
            Some(view) => (view.ranks.clone(), view.tags.clone()),
            None => (Vec::new(), Vec::new()),
        };

        for edit in self.edits.iter().filter(|e| e.status.is_live()) {
            for change in &edit.rank_changes {
                change.apply(&mut ranks);
            }
            for change in &edit.tag_changes {
                change.apply(&mut tags);
            }
        }

        ranks.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.id.cmp(&b.id)));
        tags.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));
        self.ranks = ranks;
        self.tags = tags;
    }
}
