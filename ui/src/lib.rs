//! # Coinfolio UI Library
//!
//! Terminal dashboard for a crypto portfolio, built with Ratatui and
//! tui-realm. Three pages (dashboard, portfolio, positions) share a layout
//! shell with a collapsible sidebar, and every component reads its colors
//! from a light or dark theme that can be switched at runtime.
//!
//! ## Modules
//!
//! - [`app`] - Model, update handlers, rendering and the application lifecycle
//! - [`components`] - Presentational components and the message types
//! - [`config`] - Layered configuration and key bindings
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - File logging setup
//! - [`pages`] - Page compositions mounted inside the shell
//! - [`theme`] - Theme store, style tokens and palette loading
//! - [`validation`] - Validation trait shared by config and theme checks
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod pages;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

pub use components::common::Msg;

pub use validation::Validator;
