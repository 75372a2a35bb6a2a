//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use blogdash_infra::DEFAULT_DEBOUNCE;

/// Where the post collection is kept between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceMode {
    Memory,
    File,
    Disabled,
}

impl FromStr for PersistenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(PersistenceMode::Memory),
            "file" => Ok(PersistenceMode::File),
            "none" | "off" | "disabled" => Ok(PersistenceMode::Disabled),
            other => Err(format!("unknown persistence mode: {other}")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub persistence: PersistenceMode,
    pub data_dir: PathBuf,
    pub search_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            persistence: PersistenceMode::Memory,
            data_dir: PathBuf::from("./data"),
            search_debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let persistence = match env::var("PERSISTENCE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to in-memory persistence", e);
                PersistenceMode::Memory
            }),
            Err(_) => defaults.persistence,
        };

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            persistence,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            search_debounce: env::var("SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
        }
    }
}
