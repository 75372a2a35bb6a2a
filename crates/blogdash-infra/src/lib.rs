//! # Blogdash Infrastructure
//!
//! Concrete implementations of the ports defined in `blogdash-core`, plus
//! the runtime helpers the dashboard needs (persistence, debouncing).
//!
//! ## Feature Flags
//!
//! - `file-storage` (default) - persist posts to a data directory

pub mod debounce;
pub mod persistence;
pub mod storage;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use persistence::{POSTS_KEY, PostArchive};
pub use storage::InMemoryStore;

#[cfg(feature = "file-storage")]
pub use storage::FileStore;
