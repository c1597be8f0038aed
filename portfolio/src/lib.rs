//! # Coinfolio Portfolio Library
//!
//! UI-agnostic core of the Coinfolio dashboard. This library owns the data
//! model, the display formatting rules, the declarative chart configuration
//! handed to the charting widgets, and the static datasets each page renders.
//!
//! ## Modules
//!
//! - [`errors`] - Error types for formatting and chart configuration
//! - [`format`] - Currency, percent-change and quantity formatting
//! - [`model`] - Holdings, positions, transactions and stat entries
//! - [`chart`] - Declarative chart options and series
//! - [`datasets`] - Static data sourced by the page compositions

pub mod chart;
pub mod datasets;
pub mod errors;
pub mod format;
pub mod model;

pub use errors::{ChartError, PortfolioError};
pub use format::{CurrencyCode, CurrencyFormat, PercentChange, TrendDirection};
