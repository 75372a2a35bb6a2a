//! The post store and the creation flow.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Category, Post, seed_posts};
use crate::error::ValidationError;

/// Length of the random part of a generated id.
const ID_SUFFIX_LEN: usize = 11;

/// Ordered post collection, most recently inserted first.
///
/// Ids are unique; the only mutation is prepending a new post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Build a store from persisted posts.
    ///
    /// Returns `None` when the collection breaks a store invariant (duplicate
    /// ids, blank fields), so the caller can fall back to the seed set.
    pub fn from_posts(posts: Vec<Post>) -> Option<Self> {
        let valid = {
            let mut seen = HashSet::with_capacity(posts.len());
            posts
                .iter()
                .all(|post| post.is_well_formed() && seen.insert(post.id.as_str()))
        };
        valid.then_some(Self { posts })
    }

    pub fn seeded() -> Self {
        Self {
            posts: seed_posts(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Validate and prepend a new post stamped with the current time.
    pub fn create_post(
        &mut self,
        title: &str,
        category: &str,
        content: &str,
    ) -> Result<Post, ValidationError> {
        self.create_post_at(title, category, content, Utc::now())
    }

    /// Like [`PostStore::create_post`] with an explicit creation instant.
    pub fn create_post_at(
        &mut self,
        title: &str,
        category: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Post, ValidationError> {
        let draft = validate_draft(title, category, content)?;

        let mut id = generate_id(now);
        while self.contains_id(&id) {
            id = generate_id(now);
        }

        let post = Post::new(id, draft.title, draft.content, draft.category, now);
        self.posts.insert(0, post.clone());
        Ok(post)
    }
}

/// Free-function form of [`PostStore::create_post`].
pub fn create_post(
    title: &str,
    category: &str,
    content: &str,
    store: &mut PostStore,
) -> Result<Post, ValidationError> {
    store.create_post(title, category, content)
}

struct Draft {
    title: String,
    content: String,
    category: Category,
}

/// Blank fields are reported together; category is only checked once all
/// fields are present.
fn validate_draft(title: &str, category: &str, content: &str) -> Result<Draft, ValidationError> {
    let title = title.trim();
    let category = category.trim();
    let content = content.trim();

    let missing: Vec<&'static str> = [("title", title), ("category", category), ("content", content)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(Draft {
        title: title.to_string(),
        content: content.to_string(),
        category: category.parse()?,
    })
}

/// Base-36 creation time in milliseconds followed by a random base-36 suffix.
fn generate_id(now: DateTime<Utc>) -> String {
    let millis = u128::try_from(now.timestamp_millis()).unwrap_or_default();
    let random = Uuid::new_v4().as_u128();
    let mut suffix = to_base36(random);
    suffix.truncate(ID_SUFFIX_LEN);
    format!("{}{}", to_base36(millis), suffix)
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_fails_and_store_unchanged() {
        let mut store = PostStore::seeded();
        let before = store.clone();

        let err = store.create_post("   ", "Health", "Body").unwrap_err();

        assert_eq!(err, ValidationError::MissingFields(vec!["title"]));
        assert_eq!(err.user_message(), "Please fill in all fields");
        assert_eq!(store, before);
    }

    #[test]
    fn test_all_missing_fields_are_reported() {
        let mut store = PostStore::default();
        let err = store.create_post("", "", "\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["title", "category", "content"])
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_category_rejected() {
        let mut store = PostStore::seeded();
        for category in ["All", "Sports", "technology"] {
            let err = store.create_post("Title", category, "Body").unwrap_err();
            assert_eq!(err, ValidationError::InvalidCategory(category.to_string()));
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_valid_post_is_prepended() {
        let mut store = PostStore::seeded();
        let post = create_post("  Zen  ", "Health", " Breathe. ", &mut store).unwrap();

        assert_eq!(store.len(), 6);
        assert_eq!(store.posts()[0], post);
        assert_eq!(post.title, "Zen");
        assert_eq!(post.content, "Breathe.");
        assert_eq!(post.category, Category::Health);
        assert!(!seed_posts().iter().any(|p| p.id == post.id));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut store = PostStore::default();
        let now = Utc::now();
        for i in 0..200 {
            store
                .create_post_at(&format!("Post {i}"), "Education", "Body", now)
                .unwrap();
        }
        let unique: HashSet<_> = store.posts().iter().map(|p| p.id.clone()).collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn test_id_starts_with_base36_timestamp() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let id = generate_id(now);
        let prefix = to_base36(1_700_000_000_000);
        assert!(id.starts_with(&prefix));
        assert_eq!(id.len(), prefix.len() + ID_SUFFIX_LEN);
    }

    #[test]
    fn test_from_posts_rejects_duplicate_ids() {
        let mut posts = seed_posts();
        posts[1].id = posts[0].id.clone();
        assert!(PostStore::from_posts(posts).is_none());
        assert!(PostStore::from_posts(seed_posts()).is_some());
    }

    #[test]
    fn test_from_posts_rejects_blank_title() {
        let mut posts = seed_posts();
        posts[2].title = " ".to_string();
        assert!(PostStore::from_posts(posts).is_none());
    }
}
