//! # Theme System Module
//!
//! Light and dark theming for the Coinfolio terminal interface.
//!
//! ## Architecture
//!
//! - **[`ThemeStore`]** - Holds the current [`ThemeMode`] and notifies
//!   [`ThemeObserver`]s when it changes
//! - **[`ThemeContext`]** - Process-wide handle to the store, read by
//!   components while rendering
//! - **[`StyleResolver`]** - Pure mapping from mode to [`StyleTokenSet`]
//! - **[`PaletteLoader`]** - Reads palette TOML files and resolves them into
//!   tokens, falling back per key to built-in colors
//! - **Palette Validation** - File names, directories and palette contents
//!
//! ## Basic Usage
//!
//! ```no_run
//! use coinfolio::theme::{StyleResolver, ThemeContext, ThemeMode, ThemeStore};
//!
//! ThemeContext::init_global(ThemeStore::new(ThemeMode::Dark, StyleResolver::embedded()))?;
//!
//! let tokens = ThemeContext::tokens();
//! let text = tokens.text_primary();
//!
//! ThemeContext::toggle();
//! # Ok::<(), coinfolio::error::AppError>(())
//! ```
//!
//! ## Palette Files
//!
//! Both palettes ship inside the binary (`themes/dark.toml`,
//! `themes/light.toml`). Setting `[theme].palette_dir` lets a user override
//! either one:
//!
//! ```text
//! ~/.config/coinfolio/themes/
//! ├── dark.toml
//! └── light.toml
//! ```

pub mod context;
pub mod loader;
pub mod resolver;
pub mod store;
pub mod tokens;
pub mod types;
pub mod validation;

pub use context::ThemeContext;
pub use loader::PaletteLoader;
pub use resolver::StyleResolver;
pub use store::{ChannelObserver, ThemeObserver, ThemeStore};
pub use tokens::{StyleKey, StyleTokenSet};
pub use types::{ThemeConfig, ThemeMode};
