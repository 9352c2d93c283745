//! Ordered in-memory prompt collection.

use desk_primitives::{PromptId, Timestamp};
use tracing::debug;

use crate::model::{Prompt, PromptDraft};
use crate::{StoreError, StoreResult};

/// Authoritative, insertion-ordered sequence of prompts for a session.
///
/// The collection only checks drafts for required fields. Checking that the
/// referenced category exists is the caller's job, since categories live in a
/// separate collection.
#[derive(Debug, Default, Clone)]
pub struct PromptCollection {
    entries: Vec<Prompt>,
}

impl PromptCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new prompt built from `draft`, stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDraft`] when a required field is missing.
    pub fn create(&mut self, draft: PromptDraft, now: Timestamp) -> StoreResult<&Prompt> {
        let draft = draft.into_valid()?;
        let id = self.fresh_id();
        let index = self.entries.len();
        self.entries.push(Prompt::from_draft(id, draft, now));
        debug!(prompt_id = %id, "prompt created");
        Ok(&self.entries[index])
    }

    /// Replaces the editable fields of the prompt `id` in place.
    ///
    /// The identifier, creation time, and position are preserved. The update
    /// time becomes `now`, or stays put if `now` lies before it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDraft`] for incomplete drafts and
    /// [`StoreError::PromptNotFound`] when `id` is not stored.
    pub fn update(
        &mut self,
        id: PromptId,
        draft: PromptDraft,
        now: Timestamp,
    ) -> StoreResult<&Prompt> {
        let draft = draft.into_valid()?;
        let prompt = self
            .entries
            .iter_mut()
            .find(|prompt| prompt.id() == id)
            .ok_or(StoreError::PromptNotFound { id })?;
        prompt.apply(draft, now);
        debug!(prompt_id = %id, "prompt updated");
        Ok(prompt)
    }

    /// Removes and returns the prompt `id`, or `None` if it is not stored.
    pub fn delete(&mut self, id: PromptId) -> Option<Prompt> {
        let index = self.entries.iter().position(|prompt| prompt.id() == id)?;
        let removed = self.entries.remove(index);
        debug!(prompt_id = %id, "prompt deleted");
        Some(removed)
    }

    /// Returns the prompt with the given identifier.
    #[must_use]
    pub fn get(&self, id: PromptId) -> Option<&Prompt> {
        self.entries.iter().find(|prompt| prompt.id() == id)
    }

    /// Returns all prompts in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Prompt] {
        &self.entries
    }

    /// Number of stored prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no prompts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fresh_id(&self) -> PromptId {
        loop {
            let id = PromptId::random();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
