//! Telemetry initialization.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when neither `RUST_LOG` nor `LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,dashboard_server=debug,blogdash_infra=debug";

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Fallback filter directives; `RUST_LOG` still takes precedence.
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOG_FORMAT").ok().as_deref(),
            std::env::var("LOG_FILTER").ok().as_deref(),
        )
    }

    fn from_values(log_format: Option<&str>, log_filter: Option<&str>) -> Self {
        Self {
            json_logs: log_format.is_some_and(|v| v.trim().eq_ignore_ascii_case("json")),
            log_filter: log_filter
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }

    /// `RUST_LOG`, then the configured directives, then the built-in default.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = config.env_filter();

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        json_logs = config.json_logs,
        filter = %config.log_filter,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = TelemetryConfig::from_values(None, None);
        assert!(!config.json_logs);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_json_format_is_case_insensitive() {
        assert!(TelemetryConfig::from_values(Some("JSON"), None).json_logs);
        assert!(TelemetryConfig::from_values(Some(" json "), None).json_logs);
        assert!(!TelemetryConfig::from_values(Some("pretty"), None).json_logs);
    }

    #[test]
    fn test_blank_filter_falls_back_to_default() {
        let config = TelemetryConfig::from_values(None, Some("   "));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

        let config = TelemetryConfig::from_values(None, Some("warn,blogdash_infra=trace"));
        assert_eq!(config.log_filter, "warn,blogdash_infra=trace");
    }

    #[test]
    fn test_default_filter_directives_parse() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
