//! Core shared types for the Prompt Desk workspace.

#![warn(missing_docs, clippy::pedantic)]

mod clock;
mod error;
mod ids;

/// Time sources used to stamp prompts.
pub use clock::{Clock, SteppingClock, SystemClock, Timestamp};
/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Identifiers for prompts and categories.
pub use ids::{CategoryId, PromptId};
