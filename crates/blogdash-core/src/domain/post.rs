use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Categories a post can be filed under.
///
/// `All` is not a member: it only exists as a filter, see [`CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Business,
    Health,
    Lifestyle,
    Education,
}

impl Category {
    /// Every assignable category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Business,
        Category::Health,
        Category::Lifestyle,
        Category::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Health => "Health",
            Category::Lifestyle => "Lifestyle",
            Category::Education => "Education",
        }
    }

    /// CSS-style badge modifier, e.g. `technology`.
    pub fn badge_class(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidCategory(s.to_string()))
    }
}

/// Category selection used when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// The filter chips in display order: `All` first.
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - a single blog entry.
///
/// Serialised with the same field names the dashboard has always persisted
/// (`createdAt`), so stored collections stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Length of the card preview, in characters.
    pub const EXCERPT_LEN: usize = 120;

    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category,
            created_at,
        }
    }

    /// Whether the (already lowercased) term occurs in the title or content.
    pub fn mentions(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.content.to_lowercase().contains(term)
    }

    /// Content cut to `max_chars` characters with a trailing ellipsis.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            return self.content.clone();
        }
        let cut: String = self.content.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }

    /// Content split on blank lines, for the detail view.
    pub fn paragraphs(&self) -> Vec<String> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// A post read back from storage must still satisfy the creation rules.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

fn seed_time(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

/// The posts a fresh dashboard starts with, newest first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            "1",
            "Getting Started with React Hooks",
            "React Hooks revolutionized how we write React components. In this comprehensive guide, we'll explore useState, useEffect, useContext, and custom hooks. Learn how to manage state, handle side effects, and create reusable logic in your React applications. We'll cover best practices, common pitfalls, and advanced patterns that will make you a more effective React developer.",
            Category::Technology,
            seed_time("2025-09-15T10:30:00Z"),
        ),
        Post::new(
            "2",
            "The Future of Remote Work",
            "Remote work has transformed from a perk to a necessity. This article explores the evolution of remote work culture, the tools that make it possible, and predictions for the future. We'll discuss productivity strategies, maintaining work-life balance, and how companies are adapting their policies. Learn about the challenges and opportunities that lie ahead in the remote work landscape.",
            Category::Business,
            seed_time("2025-09-14T14:20:00Z"),
        ),
        Post::new(
            "3",
            "Healthy Morning Routines That Actually Work",
            "Starting your day right can transform your entire life. This guide presents evidence-based morning routines that boost energy, productivity, and mental well-being. From meditation and exercise to nutrition and planning, discover the habits that successful people swear by. We'll provide practical tips for building sustainable routines that fit your lifestyle and schedule.",
            Category::Health,
            seed_time("2025-09-13T09:15:00Z"),
        ),
        Post::new(
            "4",
            "Minimalist Living: Less is More",
            "Minimalism isn't just about having fewer possessions; it's about intentional living. This article explores the philosophy behind minimalism, practical steps to declutter your life, and the psychological benefits of living with less. Learn how to identify what truly matters, create peaceful living spaces, and find freedom through simplicity. Discover how minimalism can lead to greater happiness and fulfillment.",
            Category::Lifestyle,
            seed_time("2025-09-12T16:45:00Z"),
        ),
        Post::new(
            "5",
            "Machine Learning Fundamentals",
            "Machine learning is reshaping industries and creating new possibilities. This beginner-friendly guide covers the core concepts of supervised, unsupervised, and reinforcement learning. We'll explore popular algorithms, real-world applications, and the tools you need to get started. Whether you're a developer looking to expand your skills or simply curious about AI, this article provides a solid foundation for understanding machine learning.",
            Category::Technology,
            seed_time("2025-09-11T11:30:00Z"),
        ),
    ]
}
