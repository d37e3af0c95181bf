//! Backend Error Module
//!
//! Error types specific to the session API. Every error converts to a JSON
//! response with an `error` message and the numeric `status`.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and panic response
//! ```
//!
//! Internal faults (store failures, serialization of a response, panics) are
//! logged with full detail and reach the caller only as
//! `{"error": "Internal server error", "status": 500}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use conversion::panic_response;
