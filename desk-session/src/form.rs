//! Create/edit form state machine.

use desk_primitives::{CategoryId, PromptId};
use desk_store::{Prompt, PromptDraft, TagEditor};
use thiserror::Error;
use tracing::debug;

/// States the prompt form can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Form hidden.
    Closed,
    /// Form open for a new prompt.
    CreatingNew,
    /// Form open on a snapshot of an existing prompt.
    EditingExisting(PromptId),
}

impl FormState {
    /// Returns `true` unless the form is closed.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the prompt being edited, if any.
    #[must_use]
    pub const fn editing(self) -> Option<PromptId> {
        match self {
            Self::EditingExisting(id) => Some(id),
            _ => None,
        }
    }
}

/// Events that move the form between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The user asked for a new prompt.
    OpenCreate,
    /// The user chose "edit" on a prompt.
    OpenEdit(PromptId),
    /// The user dismissed the form.
    Cancel,
    /// The form's draft was committed to the store.
    Submitted,
}

/// Errors emitted by the form state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Transition was not permitted from the current state.
    #[error("invalid form transition from {from:?} via {event:?}")]
    InvalidTransition {
        /// State prior to the attempted transition.
        from: FormState,
        /// Event that triggered the failure.
        event: FormEvent,
    },
}

/// Result alias used for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Form fields plus the state they belong to.
///
/// Fields are always a private copy. Editing them never touches the stored
/// prompt until the form is submitted through the desk.
#[derive(Debug, Clone)]
pub struct PromptForm {
    state: FormState,
    title: String,
    content: String,
    category: Option<CategoryId>,
    tags: TagEditor,
}

impl Default for PromptForm {
    fn default() -> Self {
        Self {
            state: FormState::Closed,
            title: String::new(),
            content: String::new(),
            category: None,
            tags: TagEditor::new(),
        }
    }
}

impl PromptForm {
    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Returns `true` when the form is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns `true` when the form edits an existing prompt rather than creating one.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, FormState::EditingExisting(_))
    }

    /// Returns the title field.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content field.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the selected category.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns the tag editor.
    #[must_use]
    pub const fn tags(&self) -> &TagEditor {
        &self.tags
    }

    /// Returns the tag editor for committing or removing tags.
    pub fn tags_mut(&mut self) -> &mut TagEditor {
        &mut self.tags
    }

    /// Replaces the title field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the content field.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Selects a category, or clears the selection with `None`.
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    /// Builds a draft from the current fields.
    #[must_use]
    pub fn draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category,
            tags: self.tags.tags().to_vec(),
        }
    }

    /// Overwrites every field from `draft`. The pending tag input is cleared.
    pub fn load_draft(&mut self, draft: PromptDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.tags = TagEditor::with_tags(draft.tags);
    }

    pub(crate) fn open_create(&mut self) -> FormState {
        let state = self.apply_infallible(FormEvent::OpenCreate);
        self.reset_fields();
        state
    }

    pub(crate) fn open_edit(&mut self, prompt: &Prompt) -> FormState {
        let state = self.apply_infallible(FormEvent::OpenEdit(prompt.id()));
        self.load_draft(prompt.to_draft());
        state
    }

    pub(crate) fn cancel(&mut self) -> FormState {
        let state = self.apply_infallible(FormEvent::Cancel);
        self.reset_fields();
        state
    }

    pub(crate) fn finish_submit(&mut self) -> FormResult<FormState> {
        let state = self.transition(FormEvent::Submitted)?;
        self.reset_fields();
        Ok(state)
    }

    // Opening and cancelling are accepted from every state.
    fn apply_infallible(&mut self, event: FormEvent) -> FormState {
        self.transition(event).unwrap_or(self.state)
    }

    fn reset_fields(&mut self) {
        self.title.clear();
        self.content.clear();
        self.category = None;
        self.tags.clear();
    }

    /// Applies an event, returning the resulting state.
    ///
    /// Opening is allowed from any state; opening again re-initialises the
    /// fields. Cancelling a closed form is a no-op. Only submitting a closed
    /// form is rejected.
    fn transition(&mut self, event: FormEvent) -> FormResult<FormState> {
        let next = match (self.state, event) {
            (_, FormEvent::OpenCreate) => Some(FormState::CreatingNew),
            (_, FormEvent::OpenEdit(id)) => Some(FormState::EditingExisting(id)),
            (_, FormEvent::Cancel)
            | (FormState::CreatingNew | FormState::EditingExisting(_), FormEvent::Submitted) => {
                Some(FormState::Closed)
            }
            (FormState::Closed, FormEvent::Submitted) => None,
        };

        let Some(next_state) = next else {
            return Err(FormError::InvalidTransition {
                from: self.state,
                event,
            });
        };

        if next_state != self.state {
            debug!(?self.state, ?next_state, ?event, "prompt form transition");
            self.state = next_state;
        }

        Ok(self.state)
    }
}
