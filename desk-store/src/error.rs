//! Error types for the store subsystem.

use desk_primitives::{CategoryId, PromptId};
use thiserror::Error;

/// Errors emitted by prompt and category collections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A draft failed the required-field check.
    #[error("invalid prompt draft: {0}")]
    InvalidDraft(&'static str),
    /// Category input failed validation.
    #[error("invalid category: {0}")]
    InvalidCategory(&'static str),
    /// No prompt with the given identifier is stored.
    #[error("prompt {id} not found")]
    PromptNotFound {
        /// Identifier that was looked up.
        id: PromptId,
    },
    /// A draft referenced a category that does not exist.
    #[error("category {id} does not exist")]
    UnknownCategory {
        /// Identifier that was referenced.
        id: CategoryId,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
