//! In-memory prompt and category storage for Prompt Desk.
//!
//! Collections here own the entities and enforce per-entity rules (required
//! fields, blank category names, identifier assignment). Cross-collection rules
//! such as "a prompt must reference an existing category" are enforced by the
//! session layer that owns both collections.

#![warn(missing_docs, clippy::pedantic)]

mod categories;
mod error;
mod filter;
mod model;
mod prompts;
pub mod tags;

pub use categories::CategoryCollection;
pub use error::{StoreError, StoreResult};
pub use filter::PromptFilter;
pub use model::{Category, Prompt, PromptDraft};
pub use prompts::PromptCollection;
pub use tags::TagEditor;
