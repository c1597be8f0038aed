//! # Configuration Module
//!
//! Layered configuration for Coinfolio. Sources, lowest priority first:
//!
//! 1. The default configuration embedded in the binary ([`defaults::DEFAULT_CONFIG`])
//! 2. The user configuration file: `--config PATH`, else `./config.toml`, else
//!    `<config dir>/coinfolio/config.toml`
//! 3. Environment variables prefixed with `COINFOLIO`, nested with `__`
//!    (e.g. `COINFOLIO__THEME__MODE=light`); a `.env` file is loaded first
//!
//! The result is loaded once and kept for the whole session.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub mod app;
pub mod defaults;
pub mod keys;
pub mod limits;
pub mod validation;

pub use app::AppConfig;
pub use keys::KeyBindingsConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "COINFOLIO";

/// Global configuration loading and access
static CONFIG: OnceLock<ConfigLoadResult> = OnceLock::new();

/// Locate the user configuration file, if any.
pub fn user_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from("config.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("coinfolio").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Load the configuration without touching the global instance.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));

    match user_config_path(explicit) {
        Some(path) => {
            log::debug!("Using configuration file {}", path.display());
            // An explicitly requested file must exist.
            builder = builder.add_source(File::from(path).required(explicit.is_some()));
        }
        None => log::debug!("No user configuration file found, using defaults"),
    }

    let config = match builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the global configuration from an explicit file. Later calls return
/// the configuration loaded first.
pub fn init_config(explicit: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(explicit))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(None))
}

/// Configuration for components that render after startup. Startup already
/// refused to run with a broken configuration, so a failed load here only
/// happens in tests and yields the built-in defaults.
pub fn get_config_or_default() -> &'static AppConfig {
    static FALLBACK: OnceLock<AppConfig> = OnceLock::new();

    match get_config() {
        ConfigLoadResult::Success(config) => config,
        _ => FALLBACK.get_or_init(AppConfig::default),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use claims::assert_matches;
    use std::fs;

    fn unwrap_success(result: ConfigLoadResult) -> AppConfig {
        match result {
            ConfigLoadResult::Success(config) => *config,
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "tooltip_delay_ms = 250\ncurrency = \"GBP\"\n\n[theme]\nmode = \"light\"\n",
        )
        .unwrap();

        let config = unwrap_success(load_config(Some(&path)));

        assert_eq!(config.tooltip_delay().as_millis(), 250);
        assert_eq!(config.currency(), portfolio::CurrencyCode::Gbp);
        assert_eq!(config.theme().mode, ThemeMode::Light);
        // Untouched values come from the embedded defaults.
        assert_eq!(config.logging().file(), Some("coinfolio.log"));
        assert_eq!(config.keys().search(), '/');
    }

    #[test]
    fn test_missing_explicit_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("missing.toml")));
        assert_matches!(result, ConfigLoadResult::LoadError(_));
    }

    #[test]
    fn test_wrong_type_is_a_deserialize_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[theme]\nmode = \"sepia\"\n").unwrap();

        assert_matches!(
            load_config(Some(&path)),
            ConfigLoadResult::DeserializeError(_)
        );
    }

    #[test]
    fn test_logging_config_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level(), "info");
        assert_eq!(logging.file(), None);
    }
}
