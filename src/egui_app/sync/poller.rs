//! # Snapshot Poller
//!
//! Re-fetches the session snapshot on a fixed interval while the editor is
//! open and forwards it to the UI thread over a channel.
//!
//! Only changes are forwarded: a snapshot is sent when its version marker
//! differs from the last one sent (or carries no marker at all), and an error
//! is sent only when it differs from the previous error. The first successful
//! fetch after an error also sends `PollEvent::Recovered`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use superior_editor::egui_app::{Config, EditorClient, SnapshotPoller};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let client = EditorClient::new(Config::new());
//! let (handle, events) = SnapshotPoller::new(client, "abc123").spawn(runtime.handle());
//!
//! while let Ok(event) = events.try_recv() {
//!     // update the view model
//! }
//! handle.cancel();
//! ```

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::egui_app::client::{ClientError, EditorClient};
use crate::shared::{SnapshotMarker, SnapshotView};

/// Message from the poller to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Snapshot(SnapshotView),
    Error(ClientError),
    Recovered,
}

pub struct SnapshotPoller {
    client: EditorClient,
    editor_id: String,
    interval: Duration,
}

impl SnapshotPoller {
    pub fn new(client: EditorClient, editor_id: impl Into<String>) -> Self {
        let interval = client.config().poll_interval();
        Self {
            client,
            editor_id: editor_id.into(),
            interval,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start polling on `runtime`. The first fetch happens immediately.
    pub fn spawn(self, runtime: &Handle) -> (PollerHandle, Receiver<PollEvent>) {
        let (tx, rx) = channel();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let refresh = Arc::new(Notify::new());

        tracing::info!(
            "[Poller] Polling session {} every {:?}",
            self.editor_id,
            self.interval
        );

        let task = runtime.spawn(self.run(tx, cancel_rx, Arc::clone(&refresh)));

        (
            PollerHandle {
                cancel: cancel_tx,
                refresh,
                task,
            },
            rx,
        )
    }

    async fn run(
        self,
        tx: Sender<PollEvent>,
        mut cancel: watch::Receiver<bool>,
        refresh: Arc<Notify>,
    ) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last_marker: Option<SnapshotMarker> = None;
        let mut last_error: Option<ClientError> = None;
        let mut force = true;

        loop {
            tokio::select! {
                _ = cancel.changed() => break,
                _ = ticker.tick() => {}
                _ = refresh.notified() => force = true,
            }

            let event = match self.client.fetch_snapshot(&self.editor_id).await {
                Ok(view) => {
                    if last_error.take().is_some() && tx.send(PollEvent::Recovered).is_err() {
                        break;
                    }
                    let marker = view.marker();
                    if !force && marker.is_some() && marker == last_marker {
                        continue;
                    }
                    last_marker = marker;
                    force = false;
                    PollEvent::Snapshot(view)
                }
                Err(e) => {
                    if last_error.as_ref() == Some(&e) {
                        continue;
                    }
                    tracing::warn!("[Poller] Fetch for {} failed: {}", self.editor_id, e);
                    last_error = Some(e.clone());
                    PollEvent::Error(e)
                }
            };

            // Receiver gone: the editor was closed
            if tx.send(event).is_err() {
                break;
            }
        }

        tracing::debug!("[Poller] Stopped polling {}", self.editor_id);
    }
}

/// Owner side of a running poller. Dropping it stops the poller.
pub struct PollerHandle {
    cancel: watch::Sender<bool>,
    refresh: Arc<Notify>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Fetch now and forward the result even if the marker is unchanged
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
