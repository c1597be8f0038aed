use super::{
    LoggingConfig, keys::KeyBindingsConfig, limits::*, validation::ConfigValidationError,
};
use crate::pages::Page;
use crate::theme::types::ThemeConfig;
use crate::theme::validation::PaletteDirValidator;
use crate::validation::Validator;
use portfolio::CurrencyCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,
    tooltip_delay_ms: Option<u64>,

    // Display
    currency: Option<String>,
    compact_currency: Option<bool>,
    start_page: Option<String>,
    sidebar_collapsed: Option<bool>,

    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    theme: Option<ThemeConfig>,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let tick = self.tick_interval().as_millis() as u64;
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let poll = self.poll_timeout().as_millis() as u64;
        if poll > MAX_POLL_TIMEOUT_MS {
            errors.push(ConfigValidationError::PollTimeout {
                configured: poll,
                limit: MAX_POLL_TIMEOUT_MS,
            });
        }

        let listener = self.crossterm_input_listener_interval().as_millis() as u64;
        if !(MIN_INPUT_LISTENER_INTERVAL_MS..=MAX_INPUT_LISTENER_INTERVAL_MS).contains(&listener) {
            errors.push(ConfigValidationError::InputListenerInterval {
                configured: listener,
                min_limit: MIN_INPUT_LISTENER_INTERVAL_MS,
                max_limit: MAX_INPUT_LISTENER_INTERVAL_MS,
            });
        }

        let tooltip = self.tooltip_delay().as_millis() as u64;
        if tooltip > MAX_TOOLTIP_DELAY_MS {
            errors.push(ConfigValidationError::TooltipDelay {
                configured: tooltip,
                limit: MAX_TOOLTIP_DELAY_MS,
            });
        }

        if let Some(currency) = &self.currency {
            if currency.parse::<CurrencyCode>().is_err() {
                errors.push(ConfigValidationError::Currency {
                    value: currency.clone(),
                });
            }
        }

        if let Some(page) = &self.start_page {
            if page.parse::<Page>().is_err() {
                errors.push(ConfigValidationError::StartPage {
                    value: page.clone(),
                });
            }
        }

        if let Some(dir) = self.theme().palette_dir {
            if let Err(e) = PaletteDirValidator.validate(Path::new(&dir)) {
                errors.push(ConfigValidationError::PaletteDir {
                    path: dir,
                    reason: e.user_message(),
                });
            }
        }

        let mut seen: HashMap<char, &'static str> = HashMap::new();
        for (action, key) in self.keys.all_bindings() {
            if let Some(first) = seen.insert(key, action) {
                errors.push(ConfigValidationError::KeyConflict {
                    key,
                    first: first.to_string(),
                    second: action.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    // Event loop timing
    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(5)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(50))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(100))
    }

    pub fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_delay_ms.unwrap_or(400))
    }

    // Display accessors. Invalid values are rejected by `validate`; the
    // accessors fall back to defaults so they never fail.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or_default()
    }

    pub fn compact_currency(&self) -> bool {
        self.compact_currency.unwrap_or(false)
    }

    pub fn start_page(&self) -> Page {
        self.start_page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed.unwrap_or(false)
    }

    // Configuration section accessors
    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use claims::{assert_matches, assert_ok};

    fn parse(toml_text: &str) -> AppConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::default();
        assert_ok!(config.validate());
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.tooltip_delay(), Duration::from_millis(400));
        assert_eq!(config.currency(), CurrencyCode::Usd);
        assert_eq!(config.start_page(), Page::Dashboard);
        assert_eq!(config.theme().mode, ThemeMode::Dark);
        assert!(!config.sidebar_collapsed());
    }

    #[test]
    fn test_display_values() {
        let config = parse(
            r#"
            currency = "eur"
            compact_currency = true
            start_page = "positions"

            [theme]
            mode = "light"
            "#,
        );

        assert_ok!(config.validate());
        assert_eq!(config.currency(), CurrencyCode::Eur);
        assert!(config.compact_currency());
        assert_eq!(config.start_page(), Page::Positions);
        assert_eq!(config.theme().mode, ThemeMode::Light);
    }

    #[test]
    fn test_out_of_range_timing_is_reported() {
        let config = parse("tick_interval_millis = 5\npoll_timeout_ms = 5000\ntooltip_delay_ms = 9000");
        let errors = config.validate().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_matches!(&errors[0], ConfigValidationError::TickInterval { configured: 5, .. });
        assert_matches!(&errors[1], ConfigValidationError::PollTimeout { configured: 5000, .. });
        assert_matches!(&errors[2], ConfigValidationError::TooltipDelay { configured: 9000, .. });
    }

    #[test]
    fn test_unknown_currency_and_page() {
        let config = parse("currency = \"DOGE\"\nstart_page = \"settings\"");
        let errors = config.validate().unwrap_err();

        assert!(errors.contains(&ConfigValidationError::Currency {
            value: "DOGE".to_string()
        }));
        assert!(errors.contains(&ConfigValidationError::StartPage {
            value: "settings".to_string()
        }));
        // Accessors still produce usable values.
        assert_eq!(config.currency(), CurrencyCode::Usd);
        assert_eq!(config.start_page(), Page::Dashboard);
    }

    #[test]
    fn test_missing_palette_dir_is_reported() {
        let config = parse("[theme]\npalette_dir = \"/definitely/not/here\"");
        let errors = config.validate().unwrap_err();
        assert_matches!(&errors[0], ConfigValidationError::PaletteDir { .. });
    }

    #[test]
    fn test_key_conflicts_are_reported() {
        let config = parse("[keys]\nkey_theme = \"q\"");
        let errors = config.validate().unwrap_err();

        assert_eq!(
            errors,
            vec![ConfigValidationError::KeyConflict {
                key: 'q',
                first: "quit".to_string(),
                second: "theme".to_string(),
            }]
        );
        assert!(errors[0].user_message().contains("'q'"));
    }
}
