//! Derivation of the visible prompt set.

use desk_primitives::CategoryId;
use serde::{Deserialize, Serialize};

use crate::model::Prompt;

/// Search term and category selection applied to a prompt list.
///
/// Filtering is a pure linear scan: inputs are never mutated and the output
/// keeps the insertion order of the underlying list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFilter {
    search_term: String,
    category: Option<CategoryId>,
}

impl PromptFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restricts results to a category, or lifts the restriction with `None`.
    #[must_use]
    pub fn with_category(mut self, category: Option<CategoryId>) -> Self {
        self.category = category;
        self
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces the category selection.
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    /// Returns the active search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the selected category, if any.
    #[must_use]
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns `true` when the prompt passes both the category and search checks.
    #[must_use]
    pub fn matches(&self, prompt: &Prompt) -> bool {
        self.matches_category(prompt) && matches_search(prompt, &self.search_term.to_lowercase())
    }

    /// Returns the matching prompts in their original order.
    #[must_use]
    pub fn apply<'a>(&self, prompts: &'a [Prompt]) -> Vec<&'a Prompt> {
        let needle = self.search_term.to_lowercase();
        prompts
            .iter()
            .filter(|prompt| self.matches_category(prompt) && matches_search(prompt, &needle))
            .collect()
    }

    fn matches_category(&self, prompt: &Prompt) -> bool {
        self.category
            .is_none_or(|category| prompt.category() == category)
    }
}

// `needle` is already lowercased.
fn matches_search(prompt: &Prompt, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    prompt.title().to_lowercase().contains(needle)
        || prompt.content().to_lowercase().contains(needle)
        || prompt
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
