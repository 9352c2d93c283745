//! Entity types held by the desk.

use desk_primitives::{CategoryId, PromptId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult, tags};

/// A stored prompt.
///
/// Only serialisable: a prompt is built by a collection, never decoded, so its
/// tag and timestamp rules always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    id: PromptId,
    title: String,
    content: String,
    category: CategoryId,
    tags: Vec<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Prompt {
    /// Returns the prompt identifier.
    #[must_use]
    pub fn id(&self) -> PromptId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the category the prompt belongs to.
    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Returns the ordered tag list.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the creation instant.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the instant of the last update.
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns a draft carrying a copy of this prompt's editable fields.
    #[must_use]
    pub fn to_draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            category: Some(self.category),
            tags: self.tags.clone(),
        }
    }

    pub(crate) fn from_draft(id: PromptId, draft: ValidDraft, now: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn apply(&mut self, draft: ValidDraft, now: Timestamp) {
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.tags = draft.tags;
        self.updated_at = now.max(self.updated_at);
    }
}

/// Prompt-shaped input lacking identifier and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
    /// Title shown in listings.
    pub title: String,
    /// Free text body.
    pub content: String,
    /// Selected category; `None` while nothing is selected.
    pub category: Option<CategoryId>,
    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PromptDraft {
    /// Creates a draft with the required fields set and no tags.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: CategoryId,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: Some(category),
            tags: Vec::new(),
        }
    }

    /// Adds tags through [`tags::add_tag`], so blanks and duplicates are dropped.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            tags::add_tag(&mut self.tags, tag.as_ref());
        }
        self
    }

    /// Returns `true` when title, content, and category are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Runs the required-field check.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDraft`] naming the first missing field.
    pub fn validate(&self) -> StoreResult<CategoryId> {
        if self.title.is_empty() {
            return Err(StoreError::InvalidDraft("title is required"));
        }
        if self.content.is_empty() {
            return Err(StoreError::InvalidDraft("content is required"));
        }
        self.category
            .ok_or(StoreError::InvalidDraft("category is required"))
    }

    /// Checks required fields and rebuilds the tag list through
    /// [`tags::add_tag`]: tags are trimmed, blanks dropped, first occurrence kept.
    pub(crate) fn into_valid(self) -> StoreResult<ValidDraft> {
        let category = self.validate()?;
        Ok(ValidDraft {
            title: self.title,
            content: self.content,
            category,
            tags: tags::normalize(self.tags),
        })
    }
}

/// Draft that passed the required-field check.
#[derive(Debug)]
pub(crate) struct ValidDraft {
    title: String,
    content: String,
    category: CategoryId,
    tags: Vec<String>,
}

/// A named, coloured label used to group prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    color: String,
}

impl Category {
    pub(crate) fn new(id: CategoryId, name: String, color: String) -> Self {
        Self { id, name, color }
    }

    /// Returns the category identifier.
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the trimmed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the colour value, e.g. `#FF6B6B`.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_first_missing_field() {
        let mut draft = PromptDraft::default();
        assert_eq!(
            draft.validate(),
            Err(StoreError::InvalidDraft("title is required"))
        );

        draft.title = "Title".into();
        assert_eq!(
            draft.validate(),
            Err(StoreError::InvalidDraft("content is required"))
        );

        draft.content = "Body".into();
        assert_eq!(
            draft.validate(),
            Err(StoreError::InvalidDraft("category is required"))
        );

        draft.category = Some(CategoryId::new(1));
        assert!(draft.is_complete());
    }

    #[test]
    fn with_tags_skips_blanks_and_duplicates() {
        let draft = PromptDraft::new("t", "c", CategoryId::new(1))
            .with_tags(["seo", " ", "seo", "blog"]);
        assert_eq!(draft.tags, ["seo", "blog"]);
    }

    #[test]
    fn into_valid_normalises_hand_built_tags() {
        let mut draft = PromptDraft::new("t", "c", CategoryId::new(1));
        draft.tags = vec!["seo".into(), " seo ".into(), "  ".into(), "blog".into()];
        let valid = draft.into_valid().unwrap();
        assert_eq!(valid.tags, ["seo", "blog"]);
    }
}
