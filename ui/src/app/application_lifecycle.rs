//! Application lifecycle management
//!
//! Startup (configuration, theme, model), the main loop and shutdown. Kept
//! out of `main.rs` so the binary only parses arguments.

use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use crate::config::{self, AppConfig, ConfigValidationError};
use crate::error::{AppError, ContextualError, ErrorContext, ErrorSeverity};
use crate::pages::Page;
use crate::theme::{PaletteLoader, StyleResolver, ThemeConfig, ThemeContext, ThemeMode, ThemeStore};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, error, info};
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Result of theme initialization attempt
#[derive(Debug)]
pub enum ThemeInitializationResult {
    /// Palettes loaded with no problems
    Success,
    /// Some override palette was unusable and built-in colors are used in
    /// its place. Contains the messages to show the user.
    FallbackSuccess { warnings: Vec<String> },
}

/// Keeps a configuration error on screen until the user dismisses it.
pub struct ConfigErrorDisplay {
    model: Model<CrosstermTerminalAdapter>,
}

impl ConfigErrorDisplay {
    pub fn new(validation_errors: Vec<ConfigValidationError>) -> Result<Self> {
        let mut model = Model::new(None)
            .map_err(|e| anyhow!("Failed to initialize model for error display: {e}"))?;

        // The first error is the one shown, all of them are logged
        if let Some(first_error) = validation_errors.first() {
            let error_message = first_error.user_message();
            error!("Configuration error: {error_message}");

            if let Err(e) = model.mount_error_popup(&AppError::Config(error_message)) {
                error!("Failed to mount configuration error popup: {e}");
            }
        }
        for (i, validation_error) in validation_errors.iter().enumerate() {
            error!("Config validation error {}: {:?}", i + 1, validation_error);
        }

        Ok(Self { model })
    }

    pub fn show_and_wait_for_acknowledgment(&mut self) -> Result<()> {
        info!(
            "Configuration validation failed. Application will exit after user acknowledges the error."
        );
        ApplicationLifecycle::setup_terminal(&mut self.model)?;

        if let Err(e) = self.model.view() {
            error!("Error during error popup rendering: {e}");
        }

        while !self.model.quit {
            self.model.update_outside_msg();

            match self.model.app.tick(PollStrategy::Once) {
                Err(err) => {
                    error!("Application tick error during error display: {err}");
                    break;
                }
                Ok(messages) if !messages.is_empty() => {
                    for msg in messages {
                        let mut msg = Some(msg);
                        while msg.is_some() {
                            msg = self.model.update(msg);
                        }
                    }

                    if !self.model.app.mounted(&ComponentId::ErrorPopup) {
                        info!("Configuration error popup closed by user, terminating application");
                        self.model.set_quit(true);
                        break;
                    }

                    if let Err(e) = self.model.view() {
                        error!("Error during view rendering: {e}");
                        break;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn shutdown(self) -> Result<()> {
        info!("Terminating application due to configuration errors");
        ApplicationLifecycle::shutdown_application(self.model)
    }
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Initialize the application and return the configured model.
    ///
    /// `theme_override` replaces the configured start mode (`--theme`) and
    /// `start_page` the configured start page (`--page`).
    pub fn initialize(
        start_page: Option<Page>,
        theme_override: Option<ThemeMode>,
    ) -> Result<Model<CrosstermTerminalAdapter>> {
        info!("Starting Coinfolio");

        let config = Self::load_configuration()?;
        let mut theme_config = config.theme();
        if let Some(mode) = theme_override {
            debug!("Start theme {mode} taken from the command line");
            theme_config.mode = mode;
        }

        let theme_init_result = Self::initialize_theme(&theme_config)?;
        Self::validate_configuration(config)?;

        info!("Configuration loaded and validated successfully");

        let mut model = Self::create_model(start_page)?;
        Self::handle_theme_fallback(&mut model, theme_init_result);

        Ok(model)
    }

    fn load_configuration() -> Result<&'static AppConfig> {
        match config::get_config() {
            config::ConfigLoadResult::Success(config) => Ok(config.as_ref()),
            config::ConfigLoadResult::LoadError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.clone()),
                    "ConfigurationLoader",
                    "load_config",
                    "Configuration loading failed. The application cannot start without a valid configuration.",
                );
                bail!("{error}")
            }
            config::ConfigLoadResult::DeserializeError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.clone()),
                    "ConfigurationParser",
                    "parse_config",
                    "Configuration parsing failed. Please fix your configuration syntax and try again.",
                );
                bail!("{error}")
            }
        }
    }

    /// Install the global theme context. Unusable override palettes are not
    /// fatal: the loader substitutes built-in colors and the problems are
    /// returned for display once the UI is up.
    fn initialize_theme(theme_config: &ThemeConfig) -> Result<ThemeInitializationResult> {
        let loader = PaletteLoader::from_config(theme_config);
        let warnings = loader.override_warnings();
        let store = ThemeStore::new(theme_config.mode, StyleResolver::from_loader(&loader));

        if let Err(e) = ThemeContext::init_global(store) {
            Self::report_critical_error(
                e.clone(),
                "ThemeContext",
                "initialize",
                "Application cannot start due to theme initialization failure.",
            );
            return Err(e).context("Theme initialization failed");
        }
        info!("Theme initialized in {} mode", theme_config.mode);

        if warnings.is_empty() {
            Ok(ThemeInitializationResult::Success)
        } else {
            Ok(ThemeInitializationResult::FallbackSuccess { warnings })
        }
    }

    /// Validate configuration after the theme is initialized, so the error
    /// popup can be drawn.
    fn validate_configuration(config: &AppConfig) -> Result<()> {
        if let Err(validation_errors) = config.validate() {
            error!(
                "Configuration validation failed with {} errors",
                validation_errors.len()
            );
            Self::show_config_error_and_exit(validation_errors)?;
            bail!("Configuration validation failed");
        }
        Ok(())
    }

    fn create_model(start_page: Option<Page>) -> Result<Model<CrosstermTerminalAdapter>> {
        match Model::new(start_page) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                Self::report_critical_error(
                    e.clone(),
                    "ApplicationModel",
                    "initialize",
                    "Failed to initialize application model. The application cannot start.",
                );
                Err(e).context("Model initialization failed")
            }
        }
    }

    fn handle_theme_fallback(
        model: &mut Model<CrosstermTerminalAdapter>,
        theme_init_result: ThemeInitializationResult,
    ) {
        if let ThemeInitializationResult::FallbackSuccess { warnings } = theme_init_result {
            let message = format!(
                "Some palette overrides could not be used:\n\n{}",
                warnings.join("\n")
            );
            if let Err(e) = model.mount_warning_popup(&message) {
                model.error_reporter.report_theme_error("load", &e);
            }
        }
    }

    pub fn setup_terminal(model: &mut Model<CrosstermTerminalAdapter>) -> Result<()> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| anyhow!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| anyhow!("Failed to enable raw mode: {e}"))?;
        model
            .terminal
            .enable_mouse_capture()
            .map_err(|e| anyhow!("Failed to enable mouse capture: {e}"))?;
        Ok(())
    }

    pub fn run_application_loop(model: &mut Model<CrosstermTerminalAdapter>) -> Result<()> {
        info!("Entering main application loop");

        while !model.quit {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    fn process_single_iteration(model: &mut Model<CrosstermTerminalAdapter>) -> Result<()> {
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => Self::handle_tick_error(model, err)?,
            Ok(messages) if !messages.is_empty() => Self::process_messages(model, messages),
            _ => {}
        }

        Self::handle_redraw(model);
        Ok(())
    }

    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<()> {
        error!("Application tick error: {err:?}");

        model
            .mount_error_popup(&AppError::Component(format!("Application error: {err}")))
            .map_err(|e| anyhow!("Failed to display error {err}: {e}"))?;
        model.set_redraw(true);
        Ok(())
    }

    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.set_redraw(true);
        for msg in messages {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) {
        if !model.redraw {
            return;
        }
        if let Err(e) = model.view() {
            error!("Error during view rendering: {e}");
            if let Err(popup_err) = model.mount_error_popup(&e) {
                model
                    .error_reporter
                    .report_mount_error("ErrorPopup", "mount", popup_err);
            }
        }
        model.set_redraw(false);
    }

    /// Restore the terminal. Every step runs even if an earlier one fails.
    pub fn shutdown_application(mut model: Model<CrosstermTerminalAdapter>) -> Result<()> {
        info!("Application shutdown initiated");
        model.shutdown();

        debug!("Leaving alternate screen");
        let _ = model.terminal.disable_mouse_capture();
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }

    fn show_config_error_and_exit(validation_errors: Vec<ConfigValidationError>) -> Result<()> {
        let mut error_display = ConfigErrorDisplay::new(validation_errors)?;
        let shown = error_display.show_and_wait_for_acknowledgment();
        error_display.shutdown()?;
        shown
    }

    /// There is no UI yet, so the error goes to the log and to stderr.
    fn report_critical_error(
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_severity(ErrorSeverity::Critical);
        let contextual_error = ContextualError::new(error, context);

        error!("[CRITICAL] [{component}:{operation}] {contextual_error}");
        eprintln!("Critical Error: {user_message}");
    }
}
