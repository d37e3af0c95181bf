//! Property-based tests

mod editor_proptest;
#[cfg(feature = "ssr")]
mod version_proptest;
