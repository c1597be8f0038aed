use crate::error::{AppError, AppResult};
use crate::theme::store::{ThemeObserver, ThemeStore};
use crate::theme::tokens::StyleTokenSet;
use crate::theme::types::ThemeMode;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Process-wide theme store, written only from the UI thread.
static GLOBAL_THEME: OnceCell<Mutex<ThemeStore>> = OnceCell::new();

/// Ambient access to the theme store for components.
///
/// The store is installed once at startup. Every accessor panics when called
/// before [`ThemeContext::init_global`]; that is a programming error, not a
/// runtime condition.
pub struct ThemeContext;

impl ThemeContext {
    /// Install the global theme store - call this once at app startup
    pub fn init_global(store: ThemeStore) -> AppResult<()> {
        let mode = store.mode();
        GLOBAL_THEME
            .set(Mutex::new(store))
            .map_err(|_| AppError::Theme("Theme context already initialized".to_string()))?;

        log::info!("Global theme context initialized in {mode} mode");
        Ok(())
    }

    pub fn is_initialized() -> bool {
        GLOBAL_THEME.get().is_some()
    }

    /// Get the global theme store
    pub fn global() -> &'static Mutex<ThemeStore> {
        GLOBAL_THEME
            .get()
            .expect("Theme context not initialized. Call ThemeContext::init_global() first.")
    }

    fn lock() -> MutexGuard<'static, ThemeStore> {
        Self::global()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mode() -> ThemeMode {
        Self::lock().mode()
    }

    pub fn toggle() -> ThemeMode {
        Self::lock().toggle()
    }

    pub fn set_mode(mode: ThemeMode) -> bool {
        Self::lock().set_mode(mode)
    }

    /// Style tokens of the current mode. Read these in `view`, never cache
    /// them across frames.
    pub fn tokens() -> Arc<StyleTokenSet> {
        Self::lock().tokens()
    }

    pub fn subscribe(observer: Box<dyn ThemeObserver>) {
        Self::lock().subscribe(observer);
    }
}
