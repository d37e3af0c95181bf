//! # Pending Edit Lifecycle
//!
//! Every edit made in the editor is shown immediately and then tracked until
//! the server accepts or rejects it.
//!
//! ```text
//! LocalOnly ──begin──▶ Syncing ──confirm──▶ Confirmed
//!                        │  ▲
//!                      fail  retry
//!                        ▼  │
//!                       Failed
//! ```
//!
//! A `Failed` edit no longer contributes to the displayed state; retrying
//! puts it back in flight.

use thiserror::Error;

/// Lifecycle state of one edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStatus {
    /// Applied locally, not yet sent
    LocalOnly,
    /// Submit in flight
    Syncing,
    /// Accepted by the server as part of change-set `version`
    Confirmed { version: u64 },
    /// Rejected or unreachable server
    Failed { reason: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot {action} an edit that is {from}")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: &'static str,
}

impl EditStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::LocalOnly => "local",
            Self::Syncing => "syncing",
            Self::Confirmed { .. } => "confirmed",
            Self::Failed { .. } => "failed",
        }
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            from: self.label(),
        }
    }

    /// Whether the edit counts toward the displayed and submitted state
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Syncing)
    }

    pub fn begin(&mut self) -> Result<(), TransitionError> {
        match self {
            Self::LocalOnly => {
                *self = Self::Syncing;
                Ok(())
            }
            other => Err(other.reject("send")),
        }
    }

    pub fn confirm(&mut self, version: u64) -> Result<(), TransitionError> {
        match self {
            Self::Syncing => {
                *self = Self::Confirmed { version };
                Ok(())
            }
            other => Err(other.reject("confirm")),
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        match self {
            Self::Syncing => {
                *self = Self::Failed {
                    reason: reason.into(),
                };
                Ok(())
            }
            other => Err(other.reject("fail")),
        }
    }

    pub fn retry(&mut self) -> Result<(), TransitionError> {
        match self {
            Self::Failed { .. } => {
                *self = Self::Syncing;
                Ok(())
            }
            other => Err(other.reject("retry")),
        }
    }
}
