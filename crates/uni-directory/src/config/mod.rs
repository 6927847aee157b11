use std::env;
use std::fmt;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let source = env::var("CATALOG_SOURCE").unwrap_or_else(|_| "data.json".to_string());
        let cache_bust = match env::var("CATALOG_CACHE_BUST") {
            Ok(raw) => parse_flag("CATALOG_CACHE_BUST", &raw)?,
            Err(_) => false,
        };
        let timeout_secs = env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig {
                source,
                cache_bust,
                timeout_secs,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the catalog lives and how it is fetched.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Local path or `http(s)` URL of the JSON catalog.
    pub source: String,
    pub cache_bust: bool,
    pub timeout_secs: u64,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout,
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout => {
                write!(f, "CATALOG_TIMEOUT_SECS must be a non-negative integer")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be a boolean flag, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("CATALOG_SOURCE");
        env::remove_var("CATALOG_CACHE_BUST");
        env::remove_var("CATALOG_TIMEOUT_SECS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.catalog.source, "data.json");
        assert!(!config.catalog.cache_bust);
        assert_eq!(config.catalog.timeout(), Duration::from_secs(10));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_catalog_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("CATALOG_SOURCE", "https://example.org/data.json");
        env::set_var("CATALOG_CACHE_BUST", "yes");
        env::set_var("CATALOG_TIMEOUT_SECS", "3");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.catalog.source, "https://example.org/data.json");
        assert!(config.catalog.cache_bust);
        assert_eq!(config.catalog.timeout_secs, 3);
    }

    #[test]
    fn rejects_invalid_timeout_and_flag() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CATALOG_TIMEOUT_SECS", "soon");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidTimeout)
        ));

        reset_env();
        env::set_var("CATALOG_CACHE_BUST", "maybe");
        let error = AppConfig::load().expect_err("flag rejected");
        reset_env();
        assert_eq!(
            error.to_string(),
            "CATALOG_CACHE_BUST must be a boolean flag, got 'maybe'"
        );
    }
}
