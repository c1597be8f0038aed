use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid poll_timeout_ms: {configured} (limit: {limit})")]
    PollTimeout { configured: u64, limit: u64 },
    #[error(
        "Invalid crossterm_input_listener_interval_ms: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    InputListenerInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid tooltip_delay_ms: {configured} (limit: {limit})")]
    TooltipDelay { configured: u64, limit: u64 },
    #[error("Unknown currency: '{value}'")]
    Currency { value: String },
    #[error("Unknown start_page: '{value}'")]
    StartPage { value: String },
    #[error("Invalid theme.palette_dir '{path}': {reason}")]
    PaletteDir { path: String, reason: String },
    #[error("Key '{key}' is bound to both '{first}' and '{second}'")]
    KeyConflict {
        key: char,
        first: String,
        second: String,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_millis in config.toml."
                )
            }
            ConfigValidationError::PollTimeout { configured, limit } => {
                format!(
                    "Poll timeout too high!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms\n\n\
                    Please update poll_timeout_ms in config.toml."
                )
            }
            ConfigValidationError::InputListenerInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Input listener interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update crossterm_input_listener_interval_ms in config.toml."
                )
            }
            ConfigValidationError::TooltipDelay { configured, limit } => {
                format!(
                    "Tooltip delay too high!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms\n\n\
                    Please update tooltip_delay_ms in config.toml."
                )
            }
            ConfigValidationError::Currency { value } => {
                format!(
                    "Unknown currency '{value}'!\n\n\
                    Supported currencies: USD, EUR, GBP, JPY, BTC, ETH\n\n\
                    Please update currency in config.toml."
                )
            }
            ConfigValidationError::StartPage { value } => {
                format!(
                    "Unknown start page '{value}'!\n\n\
                    Supported pages: dashboard, portfolio, positions\n\n\
                    Please update start_page in config.toml."
                )
            }
            ConfigValidationError::PaletteDir { path, reason } => {
                format!(
                    "Palette directory is not usable!\n\n\
                    Path: {path}\n\
                    Reason: {reason}\n\n\
                    Please update [theme] palette_dir in config.toml or remove it."
                )
            }
            ConfigValidationError::KeyConflict { key, first, second } => {
                format!(
                    "Conflicting key bindings!\n\n\
                    Key '{key}' is bound to both '{first}' and '{second}'.\n\n\
                    Please update the [keys] section in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
