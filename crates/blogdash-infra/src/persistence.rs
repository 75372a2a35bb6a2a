//! Loading and saving the post collection through a [`KeyValueStore`].

use std::sync::Arc;

use blogdash_core::PostStore;
use blogdash_core::domain::Post;
use blogdash_core::ports::{KeyValueStore, StorageError};

/// Storage key the post collection has always been kept under.
pub const POSTS_KEY: &str = "blogDashboard_blogs";

/// The post collection as a JSON array under a single key.
#[derive(Clone)]
pub struct PostArchive {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl PostArchive {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, POSTS_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the stored collection, falling back to the seed set.
    ///
    /// An empty or unparseable value is replaced by the seed set, which is
    /// written back. A failing backend is reported but never fatal.
    pub async fn load_or_seed(&self) -> PostStore {
        let raw = match self.storage.get(&self.key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read stored posts, using seed data");
                return PostStore::seeded();
            }
        };

        match raw.as_deref().map(parse_posts) {
            Some(Some(store)) => {
                tracing::info!(key = %self.key, posts = store.len(), "Loaded stored posts");
                return store;
            }
            Some(None) => {
                tracing::warn!(key = %self.key, "Stored posts are malformed, replacing with seed data");
            }
            None => {
                tracing::info!(key = %self.key, "No stored posts, initializing with seed data");
            }
        }

        let store = PostStore::seeded();
        if let Err(e) = self.save(store.posts()).await {
            tracing::error!(key = %self.key, error = %e, "Failed to write seed data");
        }
        store
    }

    pub async fn save(&self, posts: &[Post]) -> Result<(), StorageError> {
        let json = serde_json::to_string(posts)?;
        self.storage.set(&self.key, &json).await?;
        tracing::debug!(key = %self.key, posts = posts.len(), "Posts saved");
        Ok(())
    }
}

fn parse_posts(raw: &str) -> Option<PostStore> {
    let posts: Vec<Post> = serde_json::from_str(raw).ok()?;
    PostStore::from_posts(posts)
}
