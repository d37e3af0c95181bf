//! Editor client integration tests
//!
//! `EditorClient` and `SnapshotPoller` against a `wiremock` server, plus one
//! round trip against the real router.

mod client_test;
mod poller_test;
#[cfg(feature = "ssr")]
mod round_trip_test;
