//! Error Types

use thiserror::Error;

use crate::slots::Slot;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Intent name this bot has no handler for
    #[error("Intent not supported: {0}")]
    UnsupportedIntent(String),

    /// Risk category outside the fixed set
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),

    /// Slot the current phase requires but the event did not carry
    #[error("Missing slot: {0}")]
    MissingSlot(Slot),

    /// Slot value that failed to parse as its expected type
    #[error("Invalid value for slot {slot}: {value:?}")]
    InvalidSlotValue { slot: Slot, value: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
