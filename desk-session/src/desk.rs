//! The application state store.

use std::fmt;

use desk_config::{SeedData, SessionConfig};
use desk_primitives::{CategoryId, Clock, PromptId, SystemClock};
use desk_store::{
    Category, CategoryCollection, Prompt, PromptCollection, PromptDraft, PromptFilter, StoreError,
};
use tracing::{debug, info, warn};

use crate::capability::{Clipboard, Confirmation, NeverConfirm, TracingClipboard};
use crate::form::{FormError, FormEvent, FormState, PromptForm};
use crate::{SessionError, SessionResult};

/// Question put to the user before a prompt is deleted.
pub const DELETE_CONFIRMATION: &str = "Delete this prompt? This cannot be undone.";

/// Result of [`PromptDesk::delete_prompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the prompt was removed.
    Deleted,
    /// The user declined; the prompt is untouched.
    Declined,
    /// No prompt with that identifier exists. The user was not asked.
    NotFound,
}

/// Result of submitting the prompt form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new prompt was stored and the form closed.
    Created(PromptId),
    /// The edited prompt was updated and the form closed.
    Updated(PromptId),
    /// The draft was refused; the form stays open with its fields intact.
    Rejected(StoreError),
}

/// Single owned state object behind a prompt management UI.
///
/// Holds the prompt and category collections, the search/category selection,
/// and the create/edit form. Presentation code reads through the accessors and
/// changes state only through the methods here, each of which runs to
/// completion before returning.
///
/// # Examples
///
/// ```
/// use desk_session::{AlwaysConfirm, DeleteOutcome, PromptDesk};
/// use desk_store::PromptDraft;
///
/// let mut desk = PromptDesk::builder().confirmation(AlwaysConfirm).build().unwrap();
/// let business = desk.create_category("Business", "#FF6B6B").unwrap().id();
/// let id = desk
///     .create_prompt(PromptDraft::new("Blog Post", "SEO tips", business).with_tags(["seo"]))
///     .unwrap()
///     .id();
///
/// desk.set_search_term("SEO");
/// assert_eq!(desk.visible_prompts().len(), 1);
///
/// assert_eq!(desk.delete_prompt(id), DeleteOutcome::Deleted);
/// assert!(desk.prompts().is_empty());
/// ```
pub struct PromptDesk {
    prompts: PromptCollection,
    categories: CategoryCollection,
    filter: PromptFilter,
    form: PromptForm,
    default_category_color: String,
    clock: Box<dyn Clock>,
    clipboard: Box<dyn Clipboard>,
    confirmation: Box<dyn Confirmation>,
}

impl fmt::Debug for PromptDesk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptDesk")
            .field("prompts", &self.prompts)
            .field("categories", &self.categories)
            .field("filter", &self.filter)
            .field("form", &self.form)
            .field("default_category_color", &self.default_category_color)
            .finish_non_exhaustive()
    }
}

impl Default for PromptDesk {
    fn default() -> Self {
        PromptDeskBuilder::new().into_desk()
    }
}

impl PromptDesk {
    /// Returns a new builder instance.
    #[must_use]
    pub fn builder() -> PromptDeskBuilder {
        PromptDeskBuilder::new()
    }

    /// Builds a desk from configuration, using the default capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the seed data violates a store rule.
    pub fn from_config(config: &SessionConfig) -> SessionResult<Self> {
        Self::builder()
            .default_category_color(config.default_category_color.clone())
            .seed(config.seed.clone())
            .build()
    }

    // Prompts

    /// Stores a new prompt.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDraft`] for a missing required field and
    /// [`StoreError::UnknownCategory`] when the category does not exist.
    pub fn create_prompt(&mut self, draft: PromptDraft) -> SessionResult<&Prompt> {
        self.check_category(&draft)?;
        let now = self.clock.now();
        Ok(self.prompts.create(draft, now)?)
    }

    /// Updates the prompt `id` from `draft`.
    ///
    /// Returns `Ok(None)` without changing anything when no such prompt exists,
    /// whatever the draft holds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDraft`] or [`StoreError::UnknownCategory`]
    /// when the draft is not acceptable.
    pub fn update_prompt(
        &mut self,
        id: PromptId,
        draft: PromptDraft,
    ) -> SessionResult<Option<&Prompt>> {
        if self.prompts.get(id).is_none() {
            warn!(prompt_id = %id, "update ignored: prompt not found");
            return Ok(None);
        }
        self.check_category(&draft)?;
        let now = self.clock.now();
        Ok(Some(self.prompts.update(id, draft, now)?))
    }

    /// Deletes the prompt `id` once the user confirms.
    ///
    /// Deleting the prompt that is open in the edit form also closes the form.
    pub fn delete_prompt(&mut self, id: PromptId) -> DeleteOutcome {
        if self.prompts.get(id).is_none() {
            debug!(prompt_id = %id, "delete ignored: prompt not found");
            return DeleteOutcome::NotFound;
        }
        if !self.confirmation.confirm(DELETE_CONFIRMATION) {
            debug!(prompt_id = %id, "prompt deletion declined");
            return DeleteOutcome::Declined;
        }

        self.prompts.delete(id);
        if self.form.state().editing() == Some(id) {
            self.form.cancel();
        }
        info!(prompt_id = %id, "prompt deleted");
        DeleteOutcome::Deleted
    }

    /// Returns every prompt in insertion order.
    #[must_use]
    pub fn prompts(&self) -> &[Prompt] {
        self.prompts.list()
    }

    /// Returns the prompt with the given identifier.
    #[must_use]
    pub fn prompt(&self, id: PromptId) -> Option<&Prompt> {
        self.prompts.get(id)
    }

    /// Copies the content of prompt `id` to the clipboard.
    ///
    /// Clipboard failures are logged and otherwise ignored. Returns `false`
    /// only when the prompt does not exist.
    pub fn copy_prompt(&self, id: PromptId) -> bool {
        let Some(prompt) = self.prompts.get(id) else {
            return false;
        };
        if let Err(err) = self.clipboard.write_text(prompt.content()) {
            warn!(prompt_id = %id, %err, "copy to clipboard failed");
        }
        true
    }

    // Categories

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCategory`] when the name is blank; the
    /// category list is left unchanged.
    pub fn create_category(
        &mut self,
        name: &str,
        color: impl Into<String>,
    ) -> SessionResult<&Category> {
        Ok(self.categories.create(name, color)?)
    }

    /// Creates a category in the configured default colour.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCategory`] when the name is blank.
    pub fn create_category_with_default_color(&mut self, name: &str) -> SessionResult<&Category> {
        Ok(self
            .categories
            .create(name, self.default_category_color.clone())?)
    }

    /// Returns every category in creation order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.categories.list()
    }

    /// Returns the colour offered for new categories.
    #[must_use]
    pub fn default_category_color(&self) -> &str {
        &self.default_category_color
    }

    // Selection

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
    }

    /// Returns the active search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.filter.search_term()
    }

    /// Restricts the visible set to one category, or shows all with `None`.
    pub fn set_selected_category(&mut self, category: Option<CategoryId>) {
        self.filter.set_category(category);
    }

    /// Returns the selected category.
    #[must_use]
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.filter.category()
    }

    /// Returns the current selection as a filter.
    #[must_use]
    pub fn filter(&self) -> &PromptFilter {
        &self.filter
    }

    /// Returns the prompts passing the current search term and category selection.
    ///
    /// Recomputed on every call, so it always reflects the latest state.
    #[must_use]
    pub fn visible_prompts(&self) -> Vec<&Prompt> {
        self.filter.apply(self.prompts.list())
    }

    // Form

    /// Opens the form for a new prompt with empty fields.
    pub fn open_create_form(&mut self) {
        self.form.open_create();
    }

    /// Opens the form on a snapshot of prompt `id`.
    ///
    /// Returns `false`, leaving the form as it was, when no such prompt exists.
    pub fn open_edit_form(&mut self, id: PromptId) -> bool {
        let Some(prompt) = self.prompts.get(id) else {
            debug!(prompt_id = %id, "edit ignored: prompt not found");
            return false;
        };
        self.form.open_edit(prompt);
        true
    }

    /// Closes the form, discarding its fields.
    pub fn close_form(&mut self) {
        self.form.cancel();
    }

    /// Returns `true` while the form is open for creating or editing.
    #[must_use]
    pub fn is_form_visible(&self) -> bool {
        self.form.is_open()
    }

    /// Returns the form.
    #[must_use]
    pub fn form(&self) -> &PromptForm {
        &self.form
    }

    /// Returns the form for editing its fields.
    ///
    /// Field edits stay in the form; only [`PromptDesk::submit_form`] writes
    /// them to the store.
    pub fn form_mut(&mut self) -> &mut PromptForm {
        &mut self.form
    }

    /// Submits the form's current fields.
    ///
    /// In create mode the draft becomes a new prompt; in edit mode it updates
    /// the prompt being edited. Either way the form closes on success. A draft
    /// the store refuses yields [`SubmitOutcome::Rejected`] and the form stays
    /// open.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Form`] when the form is closed.
    pub fn submit_form(&mut self) -> SessionResult<SubmitOutcome> {
        let state = self.form.state();
        ensure_open(state)?;

        let draft = self.form.draft();
        let result = match state.editing() {
            None => self
                .create_prompt(draft)
                .map(|prompt| SubmitOutcome::Created(prompt.id())),
            Some(id) => match self.update_prompt(id, draft) {
                Ok(Some(prompt)) => Ok(SubmitOutcome::Updated(prompt.id())),
                Ok(None) => Err(StoreError::PromptNotFound { id }.into()),
                Err(err) => Err(err),
            },
        };

        match result {
            Ok(outcome) => {
                self.form.finish_submit()?;
                Ok(outcome)
            }
            Err(SessionError::Store(err)) => {
                debug!(%err, "prompt form submission rejected");
                Ok(SubmitOutcome::Rejected(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Replaces the form's fields with `draft`, then submits.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Form`] when the form is closed.
    pub fn submit_draft(&mut self, draft: PromptDraft) -> SessionResult<SubmitOutcome> {
        ensure_open(self.form.state())?;
        self.form.load_draft(draft);
        self.submit_form()
    }

    fn check_category(&self, draft: &PromptDraft) -> SessionResult<()> {
        let category = draft.validate()?;
        if self.categories.contains(category) {
            Ok(())
        } else {
            Err(StoreError::UnknownCategory { id: category }.into())
        }
    }

    fn seed(&mut self, seed: SeedData) -> SessionResult<()> {
        for category in seed.categories {
            self.create_category(&category.name, category.color)?;
        }
        for prompt in seed.prompts {
            let draft = PromptDraft::new(prompt.title, prompt.content, prompt.category)
                .with_tags(prompt.tags);
            self.create_prompt(draft)?;
        }
        Ok(())
    }
}

fn ensure_open(state: FormState) -> SessionResult<()> {
    if state.is_open() {
        Ok(())
    } else {
        Err(FormError::InvalidTransition {
            from: state,
            event: FormEvent::Submitted,
        }
        .into())
    }
}

/// Builder for [`PromptDesk`].
pub struct PromptDeskBuilder {
    clock: Box<dyn Clock>,
    clipboard: Box<dyn Clipboard>,
    confirmation: Box<dyn Confirmation>,
    default_category_color: String,
    seed: SeedData,
}

impl Default for PromptDeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDeskBuilder {
    /// Creates a builder using the wall clock, a logging clipboard, and a
    /// confirmation that always declines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
            clipboard: Box::new(TracingClipboard),
            confirmation: Box::new(NeverConfirm),
            default_category_color: SessionConfig::default().default_category_color,
            seed: SeedData::default(),
        }
    }

    /// Sets the time source used to stamp prompts.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sets the clipboard used by [`PromptDesk::copy_prompt`].
    #[must_use]
    pub fn clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Sets the confirmation asked before deletions.
    #[must_use]
    pub fn confirmation(mut self, confirmation: impl Confirmation + 'static) -> Self {
        self.confirmation = Box::new(confirmation);
        self
    }

    /// Sets the colour offered for new categories.
    #[must_use]
    pub fn default_category_color(mut self, color: impl Into<String>) -> Self {
        self.default_category_color = color.into();
        self
    }

    /// Sets the data the desk is populated with.
    #[must_use]
    pub fn seed(mut self, seed: SeedData) -> Self {
        self.seed = seed;
        self
    }

    /// Finalises construction, creating the seed categories and prompts.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the seed data violates a store rule.
    pub fn build(mut self) -> SessionResult<PromptDesk> {
        let seed = std::mem::take(&mut self.seed);
        let mut desk = self.into_desk();
        desk.seed(seed)?;
        info!(
            categories = desk.categories.len(),
            prompts = desk.prompts.len(),
            "prompt desk ready"
        );
        Ok(desk)
    }

    fn into_desk(self) -> PromptDesk {
        PromptDesk {
            prompts: PromptCollection::new(),
            categories: CategoryCollection::new(),
            filter: PromptFilter::new(),
            form: PromptForm::default(),
            default_category_color: self.default_category_color,
            clock: self.clock,
            clipboard: self.clipboard,
            confirmation: self.confirmation,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use desk_primitives::SteppingClock;

    use super::*;
    use crate::capability::{AlwaysConfirm, ClipboardError, MemoryClipboard};

    fn desk() -> PromptDesk {
        PromptDesk::builder()
            .clock(SteppingClock::from_epoch())
            .confirmation(AlwaysConfirm)
            .build()
            .unwrap()
    }

    fn desk_with_category() -> (PromptDesk, CategoryId) {
        let mut desk = desk();
        let id = desk.create_category("Business", "#FF6B6B").unwrap().id();
        (desk, id)
    }

    #[test]
    fn create_prompt_requires_existing_category() {
        let (mut desk, _) = desk_with_category();
        let err = desk
            .create_prompt(PromptDraft::new("t", "c", CategoryId::new(42)))
            .expect_err("unknown category");
        assert_eq!(
            err,
            SessionError::Store(StoreError::UnknownCategory {
                id: CategoryId::new(42)
            })
        );
        assert!(desk.prompts().is_empty());
    }

    #[test]
    fn update_of_missing_prompt_is_absorbed() {
        let (mut desk, category) = desk_with_category();
        let result = desk
            .update_prompt(PromptId::random(), PromptDraft::new("t", "c", category))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn update_of_missing_prompt_skips_draft_checks() {
        let (mut desk, _) = desk_with_category();
        let result = desk
            .update_prompt(PromptId::random(), PromptDraft::default())
            .unwrap();
        assert!(result.is_none());

        let result = desk
            .update_prompt(
                PromptId::random(),
                PromptDraft::new("t", "c", CategoryId::new(42)),
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn hand_built_tags_are_normalised_on_create_and_update() {
        let (mut desk, category) = desk_with_category();
        let mut draft = PromptDraft::new("t", "c", category);
        draft.tags = vec!["seo".into(), "seo".into(), "  ".into()];
        let id = desk.create_prompt(draft).unwrap().id();
        assert_eq!(desk.prompt(id).unwrap().tags(), ["seo"]);

        let mut draft = PromptDraft::new("t", "c", category);
        draft.tags = vec![" blog".into(), "blog".into(), "seo".into()];
        let updated = desk.update_prompt(id, draft).unwrap().unwrap();
        assert_eq!(updated.tags(), ["blog", "seo"]);
    }

    #[test]
    fn submitted_draft_tags_are_normalised() {
        let (mut desk, category) = desk_with_category();
        desk.open_create_form();
        let mut draft = PromptDraft::new("t", "c", category);
        draft.tags = vec!["x".into(), "x".into()];
        let SubmitOutcome::Created(id) = desk.submit_draft(draft).unwrap() else {
            panic!("expected creation");
        };
        assert_eq!(desk.prompt(id).unwrap().tags(), ["x"]);
    }

    #[test]
    fn rejected_outcome_can_be_cloned() {
        let (mut desk, _) = desk_with_category();
        desk.open_create_form();
        let outcome = desk.submit_form().unwrap();
        assert_eq!(outcome.clone(), outcome);
    }

    #[test]
    fn update_refreshes_only_updated_at() {
        let (mut desk, category) = desk_with_category();
        let original = desk
            .create_prompt(PromptDraft::new("t", "c", category))
            .unwrap()
            .clone();
        let updated = desk
            .update_prompt(original.id(), PromptDraft::new("t2", "c2", category))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.created_at(), original.created_at());
        assert!(updated.updated_at() > original.updated_at());
    }

    #[test]
    fn declined_delete_keeps_prompt() {
        let asked = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&asked);
        let mut desk = PromptDesk::builder()
            .confirmation(move |message: &str| {
                assert_eq!(message, DELETE_CONFIRMATION);
                counter.fetch_add(1, Ordering::SeqCst);
                false
            })
            .build()
            .unwrap();
        let category = desk.create_category("Business", "#FF6B6B").unwrap().id();
        let id = desk
            .create_prompt(PromptDraft::new("t", "c", category))
            .unwrap()
            .id();

        assert_eq!(desk.delete_prompt(id), DeleteOutcome::Declined);
        assert_eq!(asked.load(Ordering::SeqCst), 1);
        assert!(desk.prompt(id).is_some());

        assert_eq!(desk.delete_prompt(PromptId::random()), DeleteOutcome::NotFound);
        assert_eq!(asked.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn deleting_edited_prompt_closes_form() {
        let (mut desk, category) = desk_with_category();
        let id = desk
            .create_prompt(PromptDraft::new("t", "c", category))
            .unwrap()
            .id();
        assert!(desk.open_edit_form(id));
        assert_eq!(desk.delete_prompt(id), DeleteOutcome::Deleted);
        assert!(!desk.is_form_visible());
    }

    #[test]
    fn copy_writes_content_verbatim() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let mut desk = PromptDesk::builder()
            .clipboard(Arc::clone(&clipboard))
            .build()
            .unwrap();
        let category = desk.create_category("Business", "#FF6B6B").unwrap().id();
        let id = desk
            .create_prompt(PromptDraft::new("t", "  exact\ncontent ", category))
            .unwrap()
            .id();

        assert!(desk.copy_prompt(id));
        assert_eq!(clipboard.contents().as_deref(), Some("  exact\ncontent "));
        assert!(!desk.copy_prompt(PromptId::random()));
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::new("denied"))
        }
    }

    #[test]
    fn clipboard_failure_is_swallowed() {
        let mut desk = PromptDesk::builder()
            .clipboard(BrokenClipboard)
            .build()
            .unwrap();
        let category = desk.create_category("Business", "#FF6B6B").unwrap().id();
        let id = desk
            .create_prompt(PromptDraft::new("t", "c", category))
            .unwrap()
            .id();
        assert!(desk.copy_prompt(id));
    }

    #[test]
    fn submit_rejects_incomplete_form_and_keeps_fields() {
        let (mut desk, _) = desk_with_category();
        desk.open_create_form();
        desk.form_mut().set_title("Only a title");

        let outcome = desk.submit_form().unwrap();
        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(StoreError::InvalidDraft(_))
        ));
        assert!(desk.is_form_visible());
        assert_eq!(desk.form().title(), "Only a title");
        assert!(desk.prompts().is_empty());
    }

    #[test]
    fn submit_create_stores_prompt_and_closes() {
        let (mut desk, category) = desk_with_category();
        desk.open_create_form();
        let form = desk.form_mut();
        form.set_title("Title");
        form.set_content("Body");
        form.set_category(Some(category));
        form.tags_mut().set_input("seo");
        form.tags_mut().commit();

        let SubmitOutcome::Created(id) = desk.submit_form().unwrap() else {
            panic!("expected creation");
        };
        assert!(!desk.is_form_visible());
        assert_eq!(desk.prompt(id).unwrap().tags(), ["seo"]);
        assert_eq!(desk.form().draft(), PromptDraft::default());
    }

    #[test]
    fn submit_edit_updates_in_place() {
        let (mut desk, category) = desk_with_category();
        let id = desk
            .create_prompt(PromptDraft::new("t", "c", category))
            .unwrap()
            .id();
        desk.open_edit_form(id);
        let outcome = desk
            .submit_draft(PromptDraft::new("new", "body", category))
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated(id));
        assert_eq!(desk.prompt(id).unwrap().title(), "new");
        assert_eq!(desk.prompts().len(), 1);
    }

    #[test]
    fn submit_with_closed_form_errors() {
        let mut desk = desk();
        let err = desk.submit_form().expect_err("closed");
        assert!(matches!(err, SessionError::Form(_)));
    }

    #[test]
    fn open_edit_of_missing_prompt_leaves_form_closed() {
        let mut desk = desk();
        assert!(!desk.open_edit_form(PromptId::random()));
        assert!(!desk.is_form_visible());
    }

    #[test]
    fn default_color_category() {
        let mut desk = PromptDesk::builder()
            .default_category_color("#000000")
            .build()
            .unwrap();
        let category = desk.create_category_with_default_color("Misc").unwrap();
        assert_eq!(category.color(), "#000000");
    }

    #[test]
    fn from_config_seeds_sample_library() {
        let desk = PromptDesk::from_config(&SessionConfig::sample()).unwrap();
        assert_eq!(desk.categories().len(), 3);
        assert_eq!(desk.prompts().len(), 2);
        assert_eq!(desk.prompts()[1].category(), CategoryId::new(3));
    }

    #[test]
    fn invalid_seed_fails_build() {
        let mut config = SessionConfig::sample();
        config.seed.categories.truncate(1);
        let err = PromptDesk::from_config(&config).expect_err("prompt references category 3");
        assert!(matches!(
            err,
            SessionError::Store(StoreError::UnknownCategory { .. })
        ));
    }
}
