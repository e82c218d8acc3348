//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, reload port and other Leptos options come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables instead.

use tracing::Level;

/// Values of `COMPRESSION` that turn response compression off
const DISABLED_VALUES: [&str; 4] = ["0", "false", "off", "no"];

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum log level (`LOG_LEVEL`): trace, debug, info, warn or error
    pub log_level: Option<String>,

    /// Whether HTTP responses are compressed (`COMPRESSION`, on by default)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("LOG_LEVEL").ok(),
            std::env::var("COMPRESSION").ok(),
        )
    }

    fn from_vars(log_level: Option<String>, compression: Option<String>) -> Self {
        let compression = compression
            .map(|value| !DISABLED_VALUES.contains(&value.trim().to_ascii_lowercase().as_str()))
            .unwrap_or(true);

        Self {
            log_level,
            compression,
        }
    }

    /// Tracing level to install, falling back to `INFO` when unset or invalid
    pub fn tracing_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(Level::INFO)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_vars(None, None);

        assert!(config.log_level.is_none());
        assert!(config.compression);
        assert_eq!(config.tracing_level(), Level::INFO);
    }

    #[test]
    fn test_tracing_level_parses_known_levels() {
        for (value, expected) in [
            ("trace", Level::TRACE),
            ("debug", Level::DEBUG),
            ("info", Level::INFO),
            ("WARN", Level::WARN),
            (" error ", Level::ERROR),
        ] {
            let config = Config::from_vars(Some(value.to_string()), None);
            assert_eq!(config.tracing_level(), expected, "{value}");
        }
    }

    #[test]
    fn test_tracing_level_falls_back_on_garbage() {
        let config = Config::from_vars(Some("loud".to_string()), None);
        assert_eq!(config.tracing_level(), Level::INFO);
    }

    #[test]
    fn test_compression_can_be_disabled() {
        for value in ["0", "false", "OFF", "no", " False "] {
            let config = Config::from_vars(None, Some(value.to_string()));
            assert!(!config.compression, "{value}");
        }
    }

    #[test]
    fn test_compression_enabled_values() {
        for value in ["1", "true", "on", "yes", ""] {
            let config = Config::from_vars(None, Some(value.to_string()));
            assert!(config.compression, "{value}");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.tracing_level();
    }

    #[test]
    fn test_config_clone() {
        let config = Config::from_vars(Some("debug".to_string()), Some("off".to_string()));
        let cloned = config.clone();

        assert_eq!(config.log_level, cloned.log_level);
        assert_eq!(config.compression, cloned.compression);
    }

    #[test]
    fn test_config_debug() {
        let config = Config::from_vars(Some("warn".to_string()), None);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("log_level"));
        assert!(debug_str.contains("compression"));
    }
}
