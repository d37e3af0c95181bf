/**
 * Editor Data Model
 *
 * Ranks, tags and the snapshot the game server uploads for an editor session.
 * These types travel unchanged between the collaborator, the session API and
 * the desktop editor, so every field uses the camelCase wire names.
 *
 * Color and formatting tokens (`&c`, `&7[VIP]`, ...) are opaque here. They are
 * stored and echoed back, never interpreted. Fields the editor does not know
 * about are kept in `extra` so a fetch hands back what was uploaded.
 */
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A permission/display tier
///
/// `weight` is an ordering hint for the collaborator and `default` marks the
/// rank new players receive. Neither is enforced by the editor: two ranks may
/// share a weight and more than one rank may carry the default flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rank {
    /// Unique key within a session's rank collection
    pub id: String,
    /// Display name
    pub name: String,
    /// Prepended when rendering a player's name
    pub prefix: String,
    /// Appended when rendering a player's name
    pub suffix: String,
    /// Color-formatting token, e.g. `&c`
    pub color: String,
    pub weight: i32,
    pub default: bool,
    /// Opaque permission nodes, order preserved
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rank {
    /// Create a rank with the given id and name and empty formatting
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Template used by the editor's "Create Rank" action
    pub fn template() -> Self {
        Self {
            id: "new_rank".to_string(),
            name: "New Rank".to_string(),
            prefix: "&a[NEW] ".to_string(),
            suffix: String::new(),
            color: "&a".to_string(),
            weight: 100,
            default: false,
            permissions: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Rendered chat name: prefix, name, suffix
    pub fn preview(&self) -> String {
        format!("{}{}{}", self.prefix, self.name, self.suffix)
    }

    /// Case-insensitive substring match over id and display name.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.id.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
    }
}

/// A cosmetic badge
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    /// Unique key within a session's tag collection
    pub id: String,
    pub display_name: String,
    pub prefix: String,
    pub suffix: String,
    /// Ordering hint, not enforced
    pub priority: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Template used by the editor's "Create Tag" action
    pub fn template() -> Self {
        Self {
            id: "new_tag".to_string(),
            display_name: "New Tag".to_string(),
            prefix: "&e[".to_string(),
            suffix: "&e]".to_string(),
            priority: 0,
            extra: Map::new(),
        }
    }

    pub fn preview(&self) -> String {
        format!("{}{}{}", self.prefix, self.display_name, self.suffix)
    }

    /// Case-insensitive substring match over id and display name.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.id.to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
    }
}

/// Full configuration uploaded by the collaborator
///
/// `last_updated` and `version` are whatever the collaborator sent (epoch
/// millis and a counter from the bundled plugin) and are only compared for
/// equality. `version` is unrelated to the change-set version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ranks: Vec<Rank>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    /// Server the snapshot came from, copied into every change-set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_uuid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Snapshot {
    /// Ranks the original editor shipped as demo content
    pub fn demo(server_uuid: impl Into<String>) -> Self {
        let rank = |id: &str, name: &str, color: &str, weight: i32, default: bool, permissions: &[&str]| Rank {
            id: id.to_string(),
            name: name.to_string(),
            prefix: if default {
                color.to_string()
            } else {
                format!("{}[{}] ", color, name.to_uppercase())
            },
            suffix: String::new(),
            color: color.to_string(),
            weight,
            default,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            extra: Map::new(),
        };

        Self {
            ranks: vec![
                rank("owner", "Owner", "&c", 1000, false, &["*"]),
                rank("admin", "Admin", "&4", 900, false, &[]),
                rank("member", "Member", "&7", 0, true, &[]),
            ],
            tags: Vec::new(),
            last_updated: Some(Value::from(chrono::Utc::now().timestamp_millis())),
            version: Some(Value::from(1)),
            server_uuid: Some(server_uuid.into()),
            extra: Map::new(),
        }
    }

    /// The subset of the snapshot served to the editor
    pub fn view(&self) -> SnapshotView {
        SnapshotView {
            ranks: self.ranks.clone(),
            tags: self.tags.clone(),
            last_updated: self.last_updated.clone(),
            version: self.version.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Snapshot as returned by the fetch operation (no server uuid)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ranks: Vec<Rank>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SnapshotView {
    /// Version marker used to skip re-rendering unchanged polls.
    /// `None` when the collaborator supplied neither field.
    pub fn marker(&self) -> Option<SnapshotMarker> {
        if self.version.is_none() && self.last_updated.is_none() {
            return None;
        }
        Some(SnapshotMarker {
            version: self.version.clone(),
            last_updated: self.last_updated.clone(),
        })
    }
}

/// Last-known `(version, lastUpdated)` pair of a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMarker {
    pub version: Option<Value>,
    pub last_updated: Option<Value>,
}

/// Body of an upload request: `{ "data": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub data: Snapshot,
}

/// Acknowledgement of an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
}
