use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_theme: Option<char>,
    key_sidebar: Option<char>,
    key_help: Option<char>,

    // Page navigation
    key_dashboard: Option<char>,
    key_portfolio: Option<char>,
    key_positions: Option<char>,

    // List navigation
    key_up: Option<char>,
    key_down: Option<char>,

    // Positions page
    key_search: Option<char>,
}

impl KeyBindingsConfig {
    // Global keys
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn theme(&self) -> char {
        self.key_theme.unwrap_or('t')
    }

    pub fn sidebar(&self) -> char {
        self.key_sidebar.unwrap_or('s')
    }

    pub fn help(&self) -> char {
        self.key_help.unwrap_or('?')
    }

    // Page navigation
    pub fn dashboard(&self) -> char {
        self.key_dashboard.unwrap_or('1')
    }

    pub fn portfolio(&self) -> char {
        self.key_portfolio.unwrap_or('2')
    }

    pub fn positions(&self) -> char {
        self.key_positions.unwrap_or('3')
    }

    // List navigation
    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn search(&self) -> char {
        self.key_search.unwrap_or('/')
    }

    /// Keys handled by the global key watcher, by action name.
    ///
    /// `up`/`down` are only seen by the focused list and may not collide with
    /// these.
    pub fn global_bindings(&self) -> Vec<(&'static str, char)> {
        vec![
            ("quit", self.quit()),
            ("theme", self.theme()),
            ("sidebar", self.sidebar()),
            ("help", self.help()),
            ("dashboard", self.dashboard()),
            ("portfolio", self.portfolio()),
            ("positions", self.positions()),
            ("search", self.search()),
        ]
    }

    /// Every binding, by action name.
    pub fn all_bindings(&self) -> Vec<(&'static str, char)> {
        let mut bindings = self.global_bindings();
        bindings.push(("up", self.up()));
        bindings.push(("down", self.down()));
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let keys = KeyBindingsConfig::default();
        assert_eq!(keys.quit(), 'q');
        assert_eq!(keys.help(), '?');
        assert_eq!(keys.positions(), '3');
        assert_eq!(keys.all_bindings().len(), 10);
    }

    #[test]
    fn test_overrides() {
        let keys: KeyBindingsConfig = toml::from_str("key_quit = \"x\"\nkey_up = \"w\"").unwrap();
        assert_eq!(keys.quit(), 'x');
        assert_eq!(keys.up(), 'w');
        assert_eq!(keys.down(), 'j');
    }
}
