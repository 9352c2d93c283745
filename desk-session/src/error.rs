//! Error type for session operations.

use desk_store::StoreError;
use thiserror::Error;

use crate::form::FormError;

/// Errors surfaced by [`crate::PromptDesk`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A store rule rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The form was driven through an invalid transition.
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
