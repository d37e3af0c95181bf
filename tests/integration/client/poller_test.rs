//! `SnapshotPoller` against a mock session API

use std::sync::mpsc::Receiver;
use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use superior_editor::egui_app::{PollEvent, SnapshotPoller};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::mock_server::*;
use crate::common::*;

async fn next_event(
    rx: Receiver<PollEvent>,
    wait: Duration,
) -> (Receiver<PollEvent>, Option<PollEvent>) {
    tokio::task::spawn_blocking(move || {
        let event = rx.recv_timeout(wait).ok();
        (rx, event)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_poller_emits_only_changes() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(member_snapshot().view()))
        .mount(&mock)
        .await;

    let (handle, rx) = SnapshotPoller::new(client_for(&mock.uri()), EDITOR_ID)
        .with_interval(Duration::from_millis(20))
        .spawn(&tokio::runtime::Handle::current());

    let (rx, first) = next_event(rx, Duration::from_secs(5)).await;
    assert_eq!(first, Some(PollEvent::Snapshot(member_snapshot().view())));

    // Same marker on every later poll
    let (rx, second) = next_event(rx, Duration::from_millis(200)).await;
    assert_eq!(second, None);
    assert!(mock.received_requests().await.unwrap_or_default().len() > 1);

    handle.refresh();
    let (_rx, forced) = next_event(rx, Duration::from_secs(5)).await;
    assert_matches!(forced, Some(PollEvent::Snapshot(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_poller_reports_error_once_then_recovers() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(error_body("Session not found - please upload data file", 404))
        .mount(&mock)
        .await;

    let (_handle, rx) = SnapshotPoller::new(client_for(&mock.uri()), EDITOR_ID)
        .with_interval(Duration::from_millis(20))
        .spawn(&tokio::runtime::Handle::current());

    let (rx, first) = next_event(rx, Duration::from_secs(5)).await;
    assert_matches!(first, Some(PollEvent::Error(ref e)) if e.is_not_found());

    // Takes precedence over the 404 mock
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(member_snapshot().view()))
        .with_priority(1)
        .mount(&mock)
        .await;

    let (rx, recovered) = next_event(rx, Duration::from_secs(5)).await;
    assert_eq!(recovered, Some(PollEvent::Recovered));
    let (_rx, snapshot) = next_event(rx, Duration::from_secs(5)).await;
    assert_matches!(snapshot, Some(PollEvent::Snapshot(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_poller_stops_on_cancel() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(member_snapshot().view()))
        .mount(&mock)
        .await;

    let (handle, rx) = SnapshotPoller::new(client_for(&mock.uri()), EDITOR_ID)
        .with_interval(Duration::from_millis(20))
        .spawn(&tokio::runtime::Handle::current());
    let (_rx, _) = next_event(rx, Duration::from_secs(5)).await;

    handle.cancel();
    tokio::time::timeout(Duration::from_secs(5), async {
        while !handle.is_finished() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();
}
