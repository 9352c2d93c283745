//! Append-only category collection.

use desk_primitives::CategoryId;
use tracing::debug;

use crate::model::Category;
use crate::{StoreError, StoreResult};

/// Insertion-ordered categories with sequentially assigned identifiers.
///
/// Categories are permanent for the session; there is no update or delete.
#[derive(Debug, Clone)]
pub struct CategoryCollection {
    entries: Vec<Category>,
    next_id: u32,
}

impl Default for CategoryCollection {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl CategoryCollection {
    /// Creates an empty collection whose first identifier is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a category named by the trimmed `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCategory`] when the name is blank. No
    /// identifier is consumed in that case.
    pub fn create(&mut self, name: &str, color: impl Into<String>) -> StoreResult<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidCategory("category name must not be empty"));
        }

        let id = CategoryId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let index = self.entries.len();
        self.entries
            .push(Category::new(id, name.to_owned(), color.into()));
        debug!(category_id = %id, name, "category created");
        Ok(&self.entries[index])
    }

    /// Returns the category with the given identifier.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.entries.iter().find(|category| category.id() == id)
    }

    /// Returns `true` if a category with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: CategoryId) -> bool {
        self.get(id).is_some()
    }

    /// Returns all categories in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Category] {
        &self.entries
    }

    /// Number of stored categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no categories exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequential_ids() {
        let mut categories = CategoryCollection::new();
        let a = categories.create("Business", "#FF6B6B").unwrap().id();
        let b = categories.create("Creative", "#4ECDC4").unwrap().id();
        assert_eq!(a, CategoryId::new(1));
        assert_eq!(b, CategoryId::new(2));
    }

    #[test]
    fn stores_trimmed_name() {
        let mut categories = CategoryCollection::new();
        let category = categories.create("  Tech  ", "#45B7D1").unwrap();
        assert_eq!(category.name(), "Tech");
        assert_eq!(category.color(), "#45B7D1");
    }

    #[test]
    fn blank_name_is_rejected_without_consuming_an_id() {
        let mut categories = CategoryCollection::new();
        let err = categories.create("  ", "#000000").expect_err("blank");
        assert!(matches!(err, StoreError::InvalidCategory(_)));
        assert!(categories.is_empty());

        let next = categories.create("Real", "#000000").unwrap();
        assert_eq!(next.id(), CategoryId::new(1));
    }

    #[test]
    fn lookup_by_id() {
        let mut categories = CategoryCollection::new();
        let id = categories.create("Business", "#FF6B6B").unwrap().id();
        assert!(categories.contains(id));
        assert!(!categories.contains(CategoryId::new(99)));
        assert_eq!(categories.get(id).map(Category::name), Some("Business"));
    }
}
