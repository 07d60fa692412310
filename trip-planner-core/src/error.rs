//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::EventId;

/// Data store error type
///
/// Every variant is a rejection from the presenter's point of view: the
/// originating presenter shakes and returns to an interactive state.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StoreError {
    /// The store refused the change
    #[error("Rejected by store: {reason}")]
    Rejected { reason: String },

    /// The record does not exist in the store
    #[error("Event not found in store: {id}")]
    NotFound { id: EventId },

    /// Storage layer failure (file system, network, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No presenter is bound to this event
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    /// Destination lookup failed
    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    /// The edit form holds a value that cannot be submitted
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested action is not available in the presenter's current mode
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Store rejection, already surfaced to the presenter
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, stale ids, etc.); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EventNotFound(_)
            | Self::DestinationNotFound(_)
            | Self::Validation(_)
            | Self::InvalidState(_) => true,
            Self::Store(e) => matches!(e, StoreError::Rejected { .. } | StoreError::NotFound { .. }),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Store Result type alias
pub type StoreResult<T> = std::result::Result<T, StoreError>;
