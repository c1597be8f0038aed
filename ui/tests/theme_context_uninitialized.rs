use coinfolio::theme::ThemeContext;

// Runs in its own test binary, so nothing has installed the global store.
#[test]
fn test_uninitialized_context_reports_itself() {
    assert!(!ThemeContext::is_initialized());
}

#[test]
#[should_panic(expected = "Theme context not initialized. Call ThemeContext::init_global() first.")]
fn test_tokens_before_init_panics() {
    let _ = ThemeContext::tokens();
}

#[test]
#[should_panic(expected = "Theme context not initialized")]
fn test_toggle_before_init_panics() {
    ThemeContext::toggle();
}
