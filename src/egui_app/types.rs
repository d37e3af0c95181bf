/**
 * Shared Types Module
 *
 * View states and the edit-form buffers used by the egui editor.
 */

use crate::shared::{Rank, SharedError, Tag};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Link entry screen
    Landing,
    /// Rank/tag editor for one session
    Editor,
}

/// Tab shown inside the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Ranks,
    Tags,
}

/// Text buffers behind the rank edit window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankForm {
    /// Id the form was opened with; `None` for "Create Rank"
    pub original_id: Option<String>,
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub suffix: String,
    pub color: String,
    pub weight: String,
    pub default: bool,
    /// Comma-separated permission nodes
    pub permissions: String,
}

impl RankForm {
    pub fn create() -> Self {
        let mut form = Self::edit(&Rank::template());
        form.original_id = None;
        form
    }

    pub fn edit(rank: &Rank) -> Self {
        Self {
            original_id: Some(rank.id.clone()),
            id: rank.id.clone(),
            name: rank.name.clone(),
            prefix: rank.prefix.clone(),
            suffix: rank.suffix.clone(),
            color: rank.color.clone(),
            weight: rank.weight.to_string(),
            default: rank.default,
            permissions: rank.permissions.join(", "),
        }
    }

    pub fn to_rank(&self) -> Result<Rank, SharedError> {
        let weight = self
            .weight
            .trim()
            .parse()
            .map_err(|_| SharedError::validation("weight", "Weight must be a whole number"))?;

        Ok(Rank {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            color: self.color.trim().to_string(),
            weight,
            default: self.default,
            permissions: self
                .permissions
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
            ..Rank::default()
        })
    }
}

/// Text buffers behind the tag edit window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub original_id: Option<String>,
    pub id: String,
    pub display_name: String,
    pub prefix: String,
    pub suffix: String,
    pub priority: String,
}

impl TagForm {
    pub fn create() -> Self {
        let mut form = Self::edit(&Tag::template());
        form.original_id = None;
        form
    }

    pub fn edit(tag: &Tag) -> Self {
        Self {
            original_id: Some(tag.id.clone()),
            id: tag.id.clone(),
            display_name: tag.display_name.clone(),
            prefix: tag.prefix.clone(),
            suffix: tag.suffix.clone(),
            priority: tag.priority.to_string(),
        }
    }

    pub fn to_tag(&self) -> Result<Tag, SharedError> {
        let priority = self
            .priority
            .trim()
            .parse()
            .map_err(|_| SharedError::validation("priority", "Priority must be a whole number"))?;

        Ok(Tag {
            id: self.id.trim().to_string(),
            display_name: self.display_name.trim().to_string(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            priority,
            ..Tag::default()
        })
    }
}

/// Entity awaiting delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Rank(String),
    Tag(String),
}
