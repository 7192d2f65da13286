//! Runtime Configuration
//!
//! Read once at start-up from `<meta>` tags in the host page.

use log::LevelFilter;

use crate::browser;

/// `<meta name="todo-api-base" content="https://...">`
pub const API_BASE_META: &str = "todo-api-base";
/// `<meta name="todo-log-level" content="debug">`
pub const LOG_LEVEL_META: &str = "todo-log-level";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute base URL the `/api/...` paths are joined to
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Combine the page origin with optional overrides
    pub fn resolve(origin: &str, api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(origin)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_base, log_level }
    }

    pub fn from_document() -> Self {
        let origin = browser::origin().unwrap_or_default();
        let api_base = browser::meta_content(API_BASE_META);
        let log_level = browser::meta_content(LOG_LEVEL_META);
        Self::resolve(&origin, api_base.as_deref(), log_level.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_origin() {
        let config = AppConfig::resolve("http://localhost:6543", None, None);
        assert_eq!(config.api_base, "http://localhost:6543");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::resolve(
            "http://localhost:6543",
            Some("https://todo.example.com/"),
            Some("debug"),
        );
        assert_eq!(config.api_base, "https://todo.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::resolve("http://localhost:6543/", Some("  "), Some("loud"));
        assert_eq!(config.api_base, "http://localhost:6543");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
