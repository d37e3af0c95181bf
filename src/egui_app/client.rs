/**
 * Session API Client
 *
 * Async HTTP client for `/api/editor/{editor_id}`. Every non-success status
 * is decoded from the server's `{ "error": ... }` body into a `ClientError`.
 */

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::{
    ChangeSet, Snapshot, SnapshotView, SubmitRequest, SubmitResponse, UploadRequest,
    UploadResponse,
};

/// Errors returned by `EditorClient`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),
    /// 404 - no snapshot or no changes for the session
    #[error("{0}")]
    NotFound(String),
    /// Any other non-success status
    #[error("Request failed ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The response body was not what the API documents
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for one API base URL
#[derive(Debug, Clone)]
pub struct EditorClient {
    http: Client,
    config: Config,
}

impl EditorClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn session_url(&self, editor_id: &str) -> String {
        self.config.api_url(&format!("/api/editor/{}", editor_id))
    }

    /// Upload a snapshot, creating or replacing the session
    pub async fn upload_snapshot(
        &self,
        editor_id: &str,
        snapshot: &Snapshot,
    ) -> Result<UploadResponse, ClientError> {
        let body = UploadRequest {
            data: snapshot.clone(),
        };
        self.send(Method::POST, self.session_url(editor_id), Some(&body)).await
    }

    pub async fn fetch_snapshot(&self, editor_id: &str) -> Result<SnapshotView, ClientError> {
        self.send::<(), _>(Method::GET, self.session_url(editor_id), None).await
    }

    pub async fn submit_changes(
        &self,
        editor_id: &str,
        request: &SubmitRequest,
    ) -> Result<SubmitResponse, ClientError> {
        self.send(Method::POST, self.session_url(editor_id), Some(request)).await
    }

    /// Pending change-set, via the delete-style retrieve operation
    pub async fn retrieve_changes(&self, editor_id: &str) -> Result<ChangeSet, ClientError> {
        self.send::<(), _>(Method::DELETE, self.session_url(editor_id), None).await
    }

    /// Pending change-set, via the download route
    pub async fn download_changes(&self, editor_id: &str) -> Result<ChangeSet, ClientError> {
        let url = self.config.api_url(&format!("/api/editor/{}/download", editor_id));
        self.send::<(), _>(Method::GET, url, None).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        tracing::debug!("[Client] {} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });

    tracing::debug!("[Client] Request failed with {}: {}", status, message);

    Err(if status == StatusCode::NOT_FOUND {
        ClientError::NotFound(message)
    } else {
        ClientError::Rejected {
            status: status.as_u16(),
            message,
        }
    })
}
