/**
 * Editor Links
 *
 * The collaborator hands the operator a link of the form
 * `https://<host>/<editorId>/<serverUuid>?api=<api base>`. The landing view
 * parses it into an `EditorLink` before opening the editor.
 */
use reqwest::Url;

use crate::shared::error::SharedError;

/// Shown when the input is not a URL at all
pub const INVALID_LINK: &str = "Invalid URL. Please enter a valid editor URL.";

/// Shown when the URL has fewer than two path segments
pub const INVALID_LINK_FORMAT: &str =
    "Invalid URL format. Please use the URL from /superior web connect";

/// A parsed editor link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLink {
    pub editor_id: String,
    pub server_uuid: String,
    /// Value of the `api` query parameter, when present
    pub api_base: Option<String>,
}

impl EditorLink {
    /// Parse a pasted editor link.
    ///
    /// The first two non-empty path segments are the editor id and server
    /// uuid; anything after them is ignored.
    pub fn parse(input: &str) -> Result<Self, SharedError> {
        let url = Url::parse(input.trim()).map_err(|_| SharedError::link(INVALID_LINK))?;

        let mut segments = url
            .path_segments()
            .map(|parts| parts.filter(|p| !p.is_empty()).map(str::to_string).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter();

        let (editor_id, server_uuid) = match (segments.next(), segments.next()) {
            (Some(editor_id), Some(server_uuid)) => (editor_id, server_uuid),
            _ => return Err(SharedError::link(INVALID_LINK_FORMAT)),
        };

        let api_base = url
            .query_pairs()
            .find(|(key, _)| key == "api")
            .map(|(_, value)| value.trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty());

        Ok(Self {
            editor_id,
            server_uuid,
            api_base,
        })
    }
}
