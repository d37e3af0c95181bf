//! Test suite for the rank/tag editor
//!
//! Organizes the integration and property tests

pub mod common;
pub mod integration;
pub mod property;
