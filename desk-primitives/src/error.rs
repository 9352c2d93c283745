//! Shared error definitions for desk primitives.

use std::num::ParseIntError;

use thiserror::Error;
use uuid::Error as UuidError;

/// Result alias used throughout the desk crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided prompt identifier could not be parsed.
    #[error("invalid prompt id: {source}")]
    InvalidPromptId {
        /// Source parsing error from the UUID library.
        #[from]
        source: UuidError,
    },

    /// The provided category identifier could not be parsed.
    #[error("invalid category id `{id}`: {source}")]
    InvalidCategoryId {
        /// The offending identifier string.
        id: String,
        /// Source integer parsing error.
        source: ParseIntError,
    },
}
