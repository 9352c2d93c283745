//! Prompt and category identifier types.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// Unique identifier for a stored prompt.
///
/// Identifiers are random and never derived from collection size, so removing
/// prompts can not cause a later prompt to collide with a surviving one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(Uuid);

impl PromptId {
    /// Generates a random prompt identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Display for PromptId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PromptId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<PromptId> for Uuid {
    fn from(value: PromptId) -> Self {
        value.0
    }
}

impl FromStr for PromptId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(Error::from)?;
        Ok(Self::from_uuid(uuid))
    }
}

/// Sequential identifier for a category.
///
/// Values are handed out by the owning category collection and are never
/// reused within a session.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Wraps a raw sequence value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw sequence value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<u32> for CategoryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|source| Error::InvalidCategoryId {
                id: s.to_owned(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_prompt_id() {
        let id = PromptId::random();
        let parsed = id.to_string().parse::<PromptId>().expect("parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn random_prompt_ids_differ() {
        assert_ne!(PromptId::random(), PromptId::random());
    }

    #[test]
    fn category_id_parses_decimal() {
        let id: CategoryId = "3".parse().expect("parse");
        assert_eq!(id, CategoryId::new(3));
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn category_id_rejects_garbage() {
        let err = "blue".parse::<CategoryId>().expect_err("should fail");
        assert!(matches!(err, Error::InvalidCategoryId { ref id, .. } if id == "blue"));
    }
}
