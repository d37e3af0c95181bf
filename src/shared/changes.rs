/**
 * Change Records
 *
 * Create/update/delete records submitted by the editor and later downloaded
 * by the collaborator as a change-set.
 *
 * Rank changes keep the field names the game-server plugin consumes
 * (`rankId`, `displayName`, `isDefault`); `name` and `default` are accepted
 * as input aliases. Entity fields are optional so an update may be partial,
 * and a delete only carries the id.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::model::{null_as_default, Rank, Tag};

/// What a change record does to its entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

/// One staged edit of a rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChange {
    pub action: ChangeAction,
    pub rank_id: String,
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(default, alias = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl RankChange {
    fn with_rank(action: ChangeAction, rank: &Rank) -> Self {
        Self {
            action,
            rank_id: rank.id.clone(),
            display_name: Some(rank.name.clone()),
            prefix: Some(rank.prefix.clone()),
            suffix: Some(rank.suffix.clone()),
            color: Some(rank.color.clone()),
            weight: Some(rank.weight),
            is_default: Some(rank.default),
            permissions: Some(rank.permissions.clone()),
        }
    }

    pub fn create(rank: &Rank) -> Self {
        Self::with_rank(ChangeAction::Create, rank)
    }

    pub fn update(rank: &Rank) -> Self {
        Self::with_rank(ChangeAction::Update, rank)
    }

    pub fn delete(rank_id: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::Delete,
            rank_id: rank_id.into(),
            display_name: None,
            prefix: None,
            suffix: None,
            color: None,
            weight: None,
            is_default: None,
            permissions: None,
        }
    }

    /// Reject records without an id and strip fields from deletes
    pub fn normalized(self) -> Result<Self, SharedError> {
        if self.rank_id.trim().is_empty() {
            return Err(SharedError::validation("rankId", "Rank id cannot be empty"));
        }
        Ok(match self.action {
            ChangeAction::Delete => Self::delete(self.rank_id),
            _ => self,
        })
    }

    /// Apply this change to a rank list in place.
    ///
    /// Create and update both upsert; an update of a missing rank creates it
    /// from the fields present. Deleting a missing rank is a no-op.
    pub fn apply(&self, ranks: &mut Vec<Rank>) {
        let position = ranks.iter().position(|r| r.id == self.rank_id);
        match (self.action, position) {
            (ChangeAction::Delete, Some(index)) => {
                ranks.remove(index);
            }
            (ChangeAction::Delete, None) => {}
            (_, Some(index)) => self.merge_into(&mut ranks[index]),
            (_, None) => {
                let mut rank = Rank::new(self.rank_id.clone(), self.rank_id.clone());
                self.merge_into(&mut rank);
                ranks.push(rank);
            }
        }
    }

    fn merge_into(&self, rank: &mut Rank) {
        if let Some(name) = &self.display_name {
            rank.name = name.clone();
        }
        if let Some(prefix) = &self.prefix {
            rank.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            rank.suffix = suffix.clone();
        }
        if let Some(color) = &self.color {
            rank.color = color.clone();
        }
        if let Some(weight) = self.weight {
            rank.weight = weight;
        }
        if let Some(is_default) = self.is_default {
            rank.default = is_default;
        }
        if let Some(permissions) = &self.permissions {
            rank.permissions = permissions.clone();
        }
    }
}

/// One staged edit of a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagChange {
    pub action: ChangeAction,
    pub tag_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl TagChange {
    fn with_tag(action: ChangeAction, tag: &Tag) -> Self {
        Self {
            action,
            tag_id: tag.id.clone(),
            display_name: Some(tag.display_name.clone()),
            prefix: Some(tag.prefix.clone()),
            suffix: Some(tag.suffix.clone()),
            priority: Some(tag.priority),
        }
    }

    pub fn create(tag: &Tag) -> Self {
        Self::with_tag(ChangeAction::Create, tag)
    }

    pub fn update(tag: &Tag) -> Self {
        Self::with_tag(ChangeAction::Update, tag)
    }

    pub fn delete(tag_id: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::Delete,
            tag_id: tag_id.into(),
            display_name: None,
            prefix: None,
            suffix: None,
            priority: None,
        }
    }

    /// Reject records without an id and strip fields from deletes
    pub fn normalized(self) -> Result<Self, SharedError> {
        if self.tag_id.trim().is_empty() {
            return Err(SharedError::validation("tagId", "Tag id cannot be empty"));
        }
        Ok(match self.action {
            ChangeAction::Delete => Self::delete(self.tag_id),
            _ => self,
        })
    }

    /// Apply this change to a tag list in place, with the same upsert
    /// semantics as [`RankChange::apply`].
    pub fn apply(&self, tags: &mut Vec<Tag>) {
        let position = tags.iter().position(|t| t.id == self.tag_id);
        match (self.action, position) {
            (ChangeAction::Delete, Some(index)) => {
                tags.remove(index);
            }
            (ChangeAction::Delete, None) => {}
            (_, Some(index)) => self.merge_into(&mut tags[index]),
            (_, None) => {
                let mut tag = Tag::new(self.tag_id.clone(), self.tag_id.clone());
                self.merge_into(&mut tag);
                tags.push(tag);
            }
        }
    }

    fn merge_into(&self, tag: &mut Tag) {
        if let Some(name) = &self.display_name {
            tag.display_name = name.clone();
        }
        if let Some(prefix) = &self.prefix {
            tag.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            tag.suffix = suffix.clone();
        }
        if let Some(priority) = self.priority {
            tag.priority = priority;
        }
    }
}

/// Body of a submit request. Both lists are optional on the wire, and `null`
/// counts as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank_changes: Vec<RankChange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_changes: Vec<TagChange>,
}

impl SubmitRequest {
    pub fn is_empty(&self) -> bool {
        self.rank_changes.is_empty() && self.tag_changes.is_empty()
    }
}

/// Reply to a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub version: u64,
    pub download_url: String,
}

/// The pending change-set of a session, as downloaded by the collaborator
///
/// `version` starts at 1 and grows by one per submit. `submitted_at` is Unix
/// epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    pub editor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_uuid: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank_changes: Vec<RankChange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_changes: Vec<TagChange>,
    pub version: u64,
    pub submitted_at: i64,
}
