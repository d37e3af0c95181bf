use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::{Handle, Runtime};
use uuid::Uuid;

use crate::egui_app::client::{ClientError, EditorClient};
use crate::egui_app::editor::EditorState;
use crate::egui_app::sync::{PollEvent, PollerHandle, SnapshotPoller};
use crate::egui_app::types::{EditorTab, PendingDelete, RankForm, TagForm};
use crate::egui_app::{AppView, Config};
use crate::shared::link::INVALID_LINK;
use crate::shared::{EditorLink, Snapshot, SubmitResponse, UploadResponse};

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    runtime: Runtime,
    pub current_view: AppView,
    pub link_input: String,
    pub landing_error: Option<String>,
    pub session: Option<EditorSession>,
}

impl AppState {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self::with_config(Config::new(), Runtime::new()?))
    }

    pub fn with_config(config: Config, runtime: Runtime) -> Self {
        Self {
            config,
            runtime,
            current_view: AppView::Landing,
            link_input: String::new(),
            landing_error: None,
            session: None,
        }
    }

    /// Open the editor for the link typed on the landing view
    pub fn connect(&mut self) {
        let link = match EditorLink::parse(&self.link_input) {
            Ok(link) => link,
            Err(e) => {
                self.landing_error = Some(e.to_string());
                return;
            }
        };

        let config = match &link.api_base {
            Some(base) => match self.config.with_server_url(base) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("[Editor] Rejected api base {}: {}", base, e);
                    self.landing_error = Some(INVALID_LINK.to_string());
                    return;
                }
            },
            None => self.config.clone(),
        };

        tracing::info!(
            "[Editor] Opening session {} for server {} at {}",
            link.editor_id,
            link.server_uuid,
            config.server_url()
        );

        self.landing_error = None;
        self.session = Some(EditorSession::open(
            link,
            EditorClient::new(config),
            self.runtime.handle().clone(),
        ));
        self.current_view = AppView::Editor;
    }

    pub fn disconnect(&mut self) {
        // Dropping the session cancels its poller
        self.session = None;
        self.current_view = AppView::Landing;
    }

    /// Drain background results; call once per frame
    pub fn pump(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.pump();
        }
    }
}

struct SubmitOutcome {
    edit_id: Uuid,
    result: Result<SubmitResponse, ClientError>,
}

enum QueuedSubmit {
    New(Uuid),
    Retry(Uuid),
}

/// One open editor session
pub struct EditorSession {
    pub link: EditorLink,
    client: EditorClient,
    runtime: Handle,
    pub editor: EditorState,
    poller: PollerHandle,
    poll_events: Receiver<PollEvent>,
    submit_tx: Sender<SubmitOutcome>,
    submit_rx: Receiver<SubmitOutcome>,
    queue: VecDeque<QueuedSubmit>,
    in_flight: Option<Uuid>,
    upload_rx: Option<Receiver<Result<UploadResponse, ClientError>>>,
    /// Last failed fetch; cleared by the next successful one
    pub fetch_error: Option<ClientError>,
    /// Version and download link of the last accepted change-set
    pub last_submit: Option<SubmitResponse>,
    pub tab: EditorTab,
    pub rank_form: Option<RankForm>,
    pub tag_form: Option<TagForm>,
    pub form_error: Option<String>,
    pub confirm_delete: Option<PendingDelete>,
}

impl EditorSession {
    pub fn open(link: EditorLink, client: EditorClient, runtime: Handle) -> Self {
        let (poller, poll_events) =
            SnapshotPoller::new(client.clone(), link.editor_id.clone()).spawn(&runtime);
        let (submit_tx, submit_rx) = channel();

        Self {
            link,
            client,
            runtime,
            editor: EditorState::new(),
            poller,
            poll_events,
            submit_tx,
            submit_rx,
            queue: VecDeque::new(),
            in_flight: None,
            upload_rx: None,
            fetch_error: None,
            last_submit: None,
            tab: EditorTab::default(),
            rank_form: None,
            tag_form: None,
            form_error: None,
            confirm_delete: None,
        }
    }

    pub fn pump(&mut self) {
        while let Ok(event) = self.poll_events.try_recv() {
            match event {
                PollEvent::Snapshot(view) => {
                    self.fetch_error = None;
                    self.editor.apply_snapshot(view);
                }
                PollEvent::Error(e) => self.fetch_error = Some(e),
                PollEvent::Recovered => self.fetch_error = None,
            }
        }

        while let Ok(outcome) = self.submit_rx.try_recv() {
            self.finish_submit(outcome);
        }

        if let Some(rx) = &self.upload_rx {
            if let Ok(result) = rx.try_recv() {
                self.upload_rx = None;
                match result {
                    Ok(response) => {
                        tracing::info!("[Editor] {}", response.message);
                        self.poller.refresh();
                    }
                    Err(e) => self.fetch_error = Some(e),
                }
            }
        }
    }

    /// Fetch immediately (banner "Retry")
    pub fn retry_fetch(&self) {
        self.poller.refresh();
    }

    pub fn session_missing(&self) -> bool {
        self.fetch_error
            .as_ref()
            .is_some_and(ClientError::is_not_found)
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_rx.is_some()
    }

    /// Seed the session with demo ranks
    pub fn upload_demo(&mut self) {
        let (tx, rx) = channel();
        let client = self.client.clone();
        let editor_id = self.link.editor_id.clone();
        let snapshot = Snapshot::demo(self.link.server_uuid.clone());

        self.runtime.spawn(async move {
            let result = client.upload_snapshot(&editor_id, &snapshot).await;
            let _ = tx.send(result);
        });
        self.upload_rx = Some(rx);
    }

    pub fn save_rank_form(&mut self) {
        let Some(form) = self.rank_form.as_ref() else {
            return;
        };
        let saved = form
            .to_rank()
            .map_err(|e| e.to_string())
            .and_then(|rank| {
                self.editor
                    .save_rank(form.original_id.as_deref(), rank)
                    .map_err(|e| e.to_string())
            });

        match saved {
            Ok(edit_id) => {
                self.rank_form = None;
                self.form_error = None;
                self.submit(edit_id);
            }
            Err(message) => self.form_error = Some(message),
        }
    }

    pub fn save_tag_form(&mut self) {
        let Some(form) = self.tag_form.as_ref() else {
            return;
        };
        let saved = form
            .to_tag()
            .map_err(|e| e.to_string())
            .and_then(|tag| {
                self.editor
                    .save_tag(form.original_id.as_deref(), tag)
                    .map_err(|e| e.to_string())
            });

        match saved {
            Ok(edit_id) => {
                self.tag_form = None;
                self.form_error = None;
                self.submit(edit_id);
            }
            Err(message) => self.form_error = Some(message),
        }
    }

    /// Perform the delete the user just confirmed
    pub fn confirm_pending_delete(&mut self) {
        let result = match self.confirm_delete.take() {
            Some(PendingDelete::Rank(id)) => self.editor.delete_rank(&id),
            Some(PendingDelete::Tag(id)) => self.editor.delete_tag(&id),
            None => return,
        };
        match result {
            Ok(edit_id) => self.submit(edit_id),
            Err(e) => tracing::warn!("[Editor] Delete rejected: {}", e),
        }
    }

    pub fn retry_edit(&mut self, edit_id: Uuid) {
        self.queue.push_back(QueuedSubmit::Retry(edit_id));
        self.start_next();
    }

    pub fn dismiss_edit(&mut self, edit_id: Uuid) {
        self.editor.dismiss(edit_id);
    }

    fn submit(&mut self, edit_id: Uuid) {
        self.queue.push_back(QueuedSubmit::New(edit_id));
        self.start_next();
    }

    /// Submits go out one at a time so a later journal is never overwritten
    /// by an earlier one arriving late.
    fn start_next(&mut self) {
        while self.in_flight.is_none() {
            let Some(next) = self.queue.pop_front() else {
                return;
            };
            let (edit_id, request) = match next {
                QueuedSubmit::New(id) => (id, self.editor.begin_sync(id)),
                QueuedSubmit::Retry(id) => (id, self.editor.retry(id)),
            };
            let request = match request {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!("[Editor] Skipping edit {}: {}", edit_id, e);
                    continue;
                }
            };

            let client = self.client.clone();
            let editor_id = self.link.editor_id.clone();
            let tx = self.submit_tx.clone();
            self.runtime.spawn(async move {
                let result = client.submit_changes(&editor_id, &request).await;
                let _ = tx.send(SubmitOutcome { edit_id, result });
            });
            self.in_flight = Some(edit_id);
        }
    }

    fn finish_submit(&mut self, outcome: SubmitOutcome) {
        if self.in_flight == Some(outcome.edit_id) {
            self.in_flight = None;
        }

        let recorded = match outcome.result {
            Ok(response) => {
                tracing::info!(
                    "[Editor] Changes accepted as version {}",
                    response.version
                );
                let version = response.version;
                self.last_submit = Some(response);
                self.editor.confirm(outcome.edit_id, version)
            }
            Err(e) => {
                tracing::warn!("[Editor] Submit failed: {}", e);
                self.editor.fail(outcome.edit_id, e.to_string())
            }
        };
        if let Err(e) = recorded {
            tracing::warn!("[Editor] Could not record submit outcome: {}", e);
        }

        self.start_next();
    }
}
