//! Integration tests
//!
//! The session API through the real router, and the editor client against
//! mock and live servers

pub mod api;
pub mod client;
