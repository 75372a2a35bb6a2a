//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use blogdash_core::ports::KeyValueStore;
use blogdash_core::{Dashboard, PostStore};
use blogdash_infra::{Debouncer, InMemoryStore, PostArchive};

use crate::config::{AppConfig, PersistenceMode};

/// Shared application state: the single dashboard session and its helpers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    /// `None` when persistence is disabled.
    pub archive: Option<PostArchive>,
    pub search_debouncer: Arc<Debouncer>,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    pub async fn new(config: &AppConfig) -> Self {
        let archive = Self::storage_for(config).map(PostArchive::new);

        let store = match &archive {
            Some(archive) => archive.load_or_seed().await,
            None => {
                tracing::info!("Persistence disabled, starting from seed data");
                PostStore::seeded()
            }
        };

        let state = Self::with_store(store, archive, config.search_debounce);
        tracing::info!("Application state initialized");
        state
    }

    pub fn with_store(store: PostStore, archive: Option<PostArchive>, debounce: Duration) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(Dashboard::new(store))),
            archive,
            search_debouncer: Arc::new(Debouncer::new(debounce)),
        }
    }

    fn storage_for(config: &AppConfig) -> Option<Arc<dyn KeyValueStore>> {
        match config.persistence {
            PersistenceMode::Disabled => None,
            PersistenceMode::Memory => Some(Arc::new(InMemoryStore::new())),
            #[cfg(feature = "file-storage")]
            PersistenceMode::File => {
                tracing::info!(data_dir = %config.data_dir.display(), "Using file storage");
                Some(Arc::new(blogdash_infra::FileStore::new(&config.data_dir)))
            }
            #[cfg(not(feature = "file-storage"))]
            PersistenceMode::File => {
                tracing::warn!("Built without file-storage feature, using in-memory storage");
                Some(Arc::new(InMemoryStore::new()))
            }
        }
    }
}
