//! API integration tests
//!
//! Integration tests for the session API endpoints

#[cfg(feature = "ssr")]
mod session_test;
#[cfg(feature = "ssr")]
mod routes_test;
