//! Tag list editing for prompt drafts.

use serde::Serialize;

/// Appends the trimmed `input` to `current`.
///
/// Blank input and exact (case-sensitive) duplicates are ignored. Returns
/// `true` when a tag was appended.
pub fn add_tag(current: &mut Vec<String>, input: &str) -> bool {
    let tag = input.trim();
    if tag.is_empty() || current.iter().any(|existing| existing == tag) {
        return false;
    }
    current.push(tag.to_owned());
    true
}

/// Rebuilds `tags` through [`add_tag`], dropping blanks and later duplicates.
#[must_use]
pub fn normalize<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized = Vec::new();
    for tag in tags {
        add_tag(&mut normalized, tag.as_ref());
    }
    normalized
}

/// Removes the exact-match occurrence of `tag`. Returns `true` if one was removed.
pub fn remove_tag(current: &mut Vec<String>, tag: &str) -> bool {
    match current.iter().position(|existing| existing == tag) {
        Some(index) => {
            current.remove(index);
            true
        }
        None => false,
    }
}

/// Accumulates a draft's tags one explicit commit at a time.
///
/// Keystrokes only change the pending input; tags are added by [`TagEditor::commit`],
/// which a presentation layer wires to its "Enter" key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagEditor {
    tags: Vec<String>,
    input: String,
}

impl TagEditor {
    /// Creates an editor with no tags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor seeded with an existing tag list, normalised as by
    /// [`add_tag`].
    #[must_use]
    pub fn with_tags(tags: Vec<String>) -> Self {
        Self {
            tags: normalize(tags),
            input: String::new(),
        }
    }

    /// Replaces the pending input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Returns the pending input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Commits the pending input as a tag.
    ///
    /// Blank input leaves the buffer untouched. Otherwise the buffer is cleared,
    /// whether or not the tag was new. Returns `true` when a tag was appended.
    pub fn commit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let added = add_tag(&mut self.tags, &self.input);
        self.input.clear();
        added
    }

    /// Removes a tag by exact match.
    pub fn remove(&mut self, tag: &str) -> bool {
        remove_tag(&mut self.tags, tag)
    }

    /// Returns the committed tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Consumes the editor, returning the committed tags.
    #[must_use]
    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }

    /// Drops all tags and the pending input.
    pub fn clear(&mut self) {
        self.tags.clear();
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tag_trims_and_appends() {
        let mut tags = vec!["seo".to_owned()];
        assert!(add_tag(&mut tags, "  blog "));
        assert_eq!(tags, ["seo", "blog"]);
    }

    #[test]
    fn add_tag_ignores_blank_and_duplicates() {
        let mut tags = vec!["seo".to_owned()];
        assert!(!add_tag(&mut tags, "   "));
        assert!(!add_tag(&mut tags, " seo"));
        assert_eq!(tags, ["seo"]);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut tags = vec!["seo".to_owned()];
        assert!(add_tag(&mut tags, "SEO"));
        assert_eq!(tags, ["seo", "SEO"]);
    }

    #[test]
    fn repeated_adds_never_duplicate() {
        let mut tags = Vec::new();
        for input in ["a", "b", " a", "c", "b ", "a", "", "c"] {
            add_tag(&mut tags, input);
        }
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), tags.len());
        assert_eq!(tags, ["a", "b", "c"]);
    }

    #[test]
    fn normalize_keeps_first_trimmed_occurrence() {
        assert_eq!(normalize(["x", " x", "", "y "]), ["x", "y"]);
    }

    #[test]
    fn with_tags_normalises_seed_list() {
        let editor = TagEditor::with_tags(vec!["x".to_owned(), "x".to_owned(), "  ".to_owned()]);
        assert_eq!(editor.tags(), ["x"]);
    }

    #[test]
    fn remove_tag_is_exact() {
        let mut tags = vec!["rust".to_owned(), "Rust".to_owned()];
        assert!(!remove_tag(&mut tags, "RUST"));
        assert!(remove_tag(&mut tags, "Rust"));
        assert_eq!(tags, ["rust"]);
    }

    #[test]
    fn commit_clears_input_only_when_non_blank() {
        let mut editor = TagEditor::new();
        editor.set_input("   ");
        assert!(!editor.commit());
        assert_eq!(editor.input(), "   ");

        editor.set_input("prompting");
        assert!(editor.commit());
        assert_eq!(editor.input(), "");

        editor.set_input("prompting");
        assert!(!editor.commit());
        assert_eq!(editor.input(), "");
        assert_eq!(editor.tags(), ["prompting"]);
    }

    #[test]
    fn typing_does_not_add_tags() {
        let mut editor = TagEditor::new();
        editor.set_input("p");
        editor.set_input("pr");
        editor.set_input("pro");
        assert!(editor.tags().is_empty());
    }
}
