//! Platform capabilities consumed by the desk.
//!
//! The desk never talks to a platform directly. Clipboard writes and yes/no
//! confirmations go through these traits, which a host implements against its
//! own UI toolkit.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::info;

/// Failure reported by a clipboard backend.
#[derive(Debug, Error)]
#[error("clipboard write failed: {reason}")]
pub struct ClipboardError {
    reason: String,
}

impl ClipboardError {
    /// Builds an error from a backend-specific reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the backend's reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Text clipboard write access.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the backend refuses the write.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<T> Clipboard for Arc<T>
where
    T: Clipboard + ?Sized,
{
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// Blocking yes/no question put to the user.
pub trait Confirmation: Send + Sync {
    /// Asks `message` and returns the user's answer.
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Clipboard that only logs what would have been copied.
#[derive(Debug, Default)]
pub struct TracingClipboard;

impl Clipboard for TracingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        info!(bytes = text.len(), "clipboard write");
        Ok(())
    }
}

/// Clipboard that keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last written text.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::new("clipboard lock poisoned"))?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}

/// Confirmation that answers yes to everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Confirmation that answers no to everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirmation for NeverConfirm {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}
