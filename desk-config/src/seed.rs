//! Seed data loaded into a fresh session.

use desk_primitives::CategoryId;
use serde::{Deserialize, Serialize};

/// Categories and prompts a session starts with.
///
/// Categories are created first, in order, so the `n`th seed category receives
/// identifier `n`. Seed prompts refer to categories by that identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedData {
    /// Categories, in creation order.
    pub categories: Vec<SeedCategory>,
    /// Prompts, in creation order.
    pub prompts: Vec<SeedPrompt>,
}

/// Category entry in [`SeedData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCategory {
    /// Display name.
    pub name: String,
    /// Colour value.
    pub color: String,
}

/// Prompt entry in [`SeedData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPrompt {
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Identifier of a seed category.
    pub category: CategoryId,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SeedCategory {
    fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_owned(),
            color: color.to_owned(),
        }
    }
}

impl SeedData {
    /// The sample library: three categories and two prompts.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            categories: vec![
                SeedCategory::new("ビジネス", "#FF6B6B"),
                SeedCategory::new("クリエイティブ", "#4ECDC4"),
                SeedCategory::new("技術", "#45B7D1"),
            ],
            prompts: vec![
                SeedPrompt {
                    title: "ブログ記事作成プロンプト".to_owned(),
                    content: "あなたは優秀なブログライターです。以下のトピックについて、SEOを意識した魅力的な記事を作成してください。".to_owned(),
                    category: CategoryId::new(1),
                    tags: vec!["ブログ".to_owned(), "SEO".to_owned(), "コンテンツ作成".to_owned()],
                },
                SeedPrompt {
                    title: "コードレビュープロンプト".to_owned(),
                    content: "経験豊富なシニアエンジニアとして、以下のコードをレビューし、ベストプラクティスに基づいた改善案を提示してください。".to_owned(),
                    category: CategoryId::new(3),
                    tags: vec!["プログラミング".to_owned(), "コードレビュー".to_owned(), "技術".to_owned()],
                },
            ],
        }
    }

    /// Returns `true` when there is nothing to seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.prompts.is_empty()
    }
}
