//! # Application Module
//!
//! Core application logic for the Coinfolio dashboard: the model that owns
//! the tuirealm application, the shell view and the message handlers.
//!
//! ## Architecture
//!
//! The application follows a model-view-update architecture:
//! - **Model** - Current page, page selections, focus and the mounted components
//! - **View** - Layout shell (sidebar, header, help bar) around the page
//! - **Updates** - Message handling and state transitions
//!
//! Everything runs on the UI thread. Theme changes and reported errors come
//! back to the model through its channel and are drained every loop
//! iteration.
//!
//! ## Usage
//!
//! ```no_run
//! use coinfolio::app::application_lifecycle::ApplicationLifecycle;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut model = ApplicationLifecycle::initialize(None, None)?;
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model)
//! }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Core application model and state structures
pub mod model;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;
