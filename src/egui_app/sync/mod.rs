//! Background synchronization with the session API

pub mod poller;

pub use poller::{PollEvent, PollerHandle, SnapshotPoller};
