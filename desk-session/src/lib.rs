//! Application state store for Prompt Desk.
//!
//! [`PromptDesk`] owns the prompt and category collections, the search and
//! category selection, and the create/edit form. Everything runs synchronously
//! on the caller's thread: each operation completes before it returns, and the
//! only outward calls are the [`Clipboard`] and [`Confirmation`] capabilities
//! supplied by the host.

#![warn(missing_docs, clippy::pedantic)]

mod capability;
mod desk;
mod error;
pub mod form;

pub use capability::{
    AlwaysConfirm, Clipboard, ClipboardError, Confirmation, MemoryClipboard, NeverConfirm,
    TracingClipboard,
};
pub use desk::{DELETE_CONFIRMATION, DeleteOutcome, PromptDesk, PromptDeskBuilder, SubmitOutcome};
pub use error::{SessionError, SessionResult};
pub use form::{FormError, FormEvent, FormResult, FormState, PromptForm};
