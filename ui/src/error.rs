use crate::components::common::{Msg, PopupActivityMsg};
use portfolio::PortfolioError;
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the Coinfolio terminal interface.
///
/// Every variant carries a human readable message. The type is `Clone` and
/// `PartialEq` so it can travel inside [`Msg`] and be asserted on in tests.
///
/// # Error Categories
///
/// - [`AppError::Component`] - Mounting, activating or rendering components
/// - [`AppError::State`] - Inconsistent model state
/// - [`AppError::Config`] - Configuration loading and validation
/// - [`AppError::Theme`] - Palette loading and theme context misuse
/// - [`AppError::Portfolio`] - Formatting and chart configuration errors
///   raised by the portfolio library
/// - [`AppError::Channel`] - Message delivery between the event loop and
///   background notifiers
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Component(String),

    State(String),

    Config(String),

    Theme(String),

    Portfolio(String),

    Channel(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Portfolio(msg) => write!(f, "Portfolio Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PortfolioError> for AppError {
    fn from(err: PortfolioError) -> Self {
        AppError::Portfolio(err.to_string())
    }
}

impl From<tuirealm::application::ApplicationError> for AppError {
    fn from(err: tuirealm::application::ApplicationError) -> Self {
        AppError::Component(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

/// Where an error happened and what the user should be told about it.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: Self::generate_fallback_message(component),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    fn generate_fallback_message(component: &str) -> String {
        format!("An error occurred in {component}. Please try again.")
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Logs errors with their context and forwards them to the UI as popups.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_message(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => Msg::PopupActivity(PopupActivityMsg::ShowWarning(
                self.format_user_message(&context),
            )),
            ErrorSeverity::Error | ErrorSeverity::Critical => Msg::PopupActivity(
                PopupActivityMsg::ShowError(self.create_formatted_error(&error, &context)),
            ),
        };

        if let Err(e) = self.tx.send(popup_msg) {
            log::error!("Failed to send error popup message: {e}");
        }
    }

    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(&self, context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        message
    }

    fn create_formatted_error(&self, error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted_message = self.get_error_title(error).to_string();

        formatted_message.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\nDetails: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::State(_) => AppError::State(formatted_message),
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Theme(_) => AppError::Theme(formatted_message),
            AppError::Portfolio(_) => AppError::Portfolio(formatted_message),
            AppError::Channel(_) => AppError::Channel(formatted_message),
        }
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Component(_) => "Component Error",
            AppError::State(_) => "Application State Error",
            AppError::Config(_) => "Configuration Error",
            AppError::Theme(_) => "Theme Error",
            AppError::Portfolio(_) => "Portfolio Data Error",
            AppError::Channel(_) => "Communication Error",
        }
    }

    // ========== Helper Methods for Common Error Patterns ==========

    pub fn report_mount_error(&self, component: &str, operation: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    pub fn report_activation_error(&self, component: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to activate {component}: {error}"));
        self.report_simple(app_error, component, "activate");
    }

    pub fn report_key_watcher_error(&self, error: impl Display) {
        let app_error =
            AppError::Component(format!("Failed to update global key watcher: {error}"));
        self.report_simple(app_error, "GlobalKeyWatcher", "update_state");
    }

    pub fn report_theme_error(&self, operation: &str, error: impl Display) {
        let app_error = AppError::Theme(format!("Theme {operation} failed: {error}"));
        self.report_warning(app_error, "ThemeContext", operation);
    }

    pub fn report_chart_error(&self, chart: &str, error: impl Display) {
        let context = ErrorContext::new("PriceChart", "build_chart")
            .with_message(&format!("Could not build the {chart} chart"))
            .with_technical_details(&error.to_string())
            .with_suggestion("The chart is left empty; other panels are unaffected");

        let app_error = AppError::Portfolio(error.to_string());
        self.report(app_error, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio::ChartError;
    use std::sync::mpsc;

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new("TestComponent", "test_operation");
        assert_eq!(context.component, "TestComponent");
        assert_eq!(context.operation, "test_operation");
        assert_eq!(
            context.user_message,
            "An error occurred in TestComponent. Please try again."
        );
        assert_eq!(context.severity, ErrorSeverity::Error);
    }

    #[test]
    fn test_error_context_builder_pattern() {
        let context = ErrorContext::new("TestComponent", "test_operation")
            .with_message("Custom message")
            .with_technical_details("Technical information")
            .with_suggestion("Try this solution")
            .with_severity(ErrorSeverity::Warning);

        assert_eq!(context.user_message, "Custom message");
        assert_eq!(
            context.technical_details,
            Some("Technical information".to_string())
        );
        assert_eq!(context.suggestion, Some("Try this solution".to_string()));
        assert_eq!(context.severity, ErrorSeverity::Warning);
    }

    #[test]
    fn test_contextual_error_display() {
        let error = AppError::Config("Test error".to_string());
        let context = ErrorContext::new("TestComponent", "test_operation");

        let display_str = format!("{}", ContextualError::new(error, context));

        assert!(display_str.contains("TestComponent"));
        assert!(display_str.contains("Test error"));
    }

    #[test]
    fn test_portfolio_error_conversion() {
        let error: AppError = PortfolioError::from(ChartError::NoSeries {
            title: "Value".to_string(),
        })
        .into();

        assert!(matches!(error, AppError::Portfolio(ref msg) if msg.contains("Value")));
        assert!(error.to_string().starts_with("Portfolio Error:"));
    }

    #[test]
    fn test_warning_severity_reporting() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_warning(
            AppError::Theme("Palette missing".to_string()),
            "ThemeContext",
            "load",
        );

        let msg = rx.recv().expect("Should receive warning message");
        assert!(matches!(
            msg,
            Msg::PopupActivity(PopupActivityMsg::ShowWarning(ref text)) if text.contains("Palette missing")
        ));
    }

    #[test]
    fn test_error_reporting_formats_popup() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_mount_error("Sidebar", "mount", "boom");

        match rx.recv().expect("Should receive error message") {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Component(text))) => {
                assert!(text.starts_with("Component Error"));
                assert!(text.contains("Details: Component Error: Failed to mount Sidebar: boom"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_chart_error_keeps_variant() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_chart_error("portfolio value", "series mismatch");

        assert!(matches!(
            rx.recv().unwrap(),
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Portfolio(_)))
        ));
    }

    #[test]
    fn test_send_failure_is_not_fatal() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let reporter = ErrorReporter::new(tx);
        reporter.report_simple(AppError::State("gone".to_string()), "Model", "update");
    }
}
