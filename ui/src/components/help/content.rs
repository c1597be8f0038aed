use crate::config::keys::KeyBindingsConfig;

/// Represents a single keyboard shortcut with its description
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    pub keys: Vec<String>,
    pub description: String,
}

impl Shortcut {
    pub fn new(keys: Vec<String>, description: &str) -> Self {
        Self {
            keys,
            description: description.to_string(),
        }
    }
}

/// Represents a section of help content
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub icon: String,
    pub shortcuts: Vec<Shortcut>,
}

impl HelpSection {
    pub fn new(title: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            shortcuts: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(vec![key.into()], description));
        self
    }

    pub fn keys(mut self, keys: Vec<String>, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(keys, description));
        self
    }
}

/// Contains all help content organized by sections
#[derive(Debug, Clone)]
pub struct HelpContent {
    pub header_message: String,
    pub sections: Vec<HelpSection>,
}

impl HelpContent {
    /// Generate help content from the configured key bindings
    pub fn from_config(keys: &KeyBindingsConfig) -> Self {
        let bracket = |c: char| format!("[{c}]");

        let sections = vec![
            // Left column
            HelpSection::new("GLOBAL", "◆")
                .key(bracket(keys.quit()), "Quit")
                .key(bracket(keys.theme()), "Toggle light / dark theme")
                .key(bracket(keys.sidebar()), "Expand / collapse sidebar")
                .key(bracket(keys.help()), "Toggle this help screen")
                .key("[Ctrl+c]", "Quit immediately"),
            HelpSection::new("PAGES", "≡")
                .key(bracket(keys.dashboard()), "Dashboard")
                .key(bracket(keys.portfolio()), "Portfolio")
                .key(bracket(keys.positions()), "Positions"),
            HelpSection::new("FOCUS", "↹")
                .key("[Tab]", "Next panel")
                .key("[Shift+Tab]", "Previous panel")
                .key("[Click]", "Focus the panel under the pointer"),
            // Right column
            HelpSection::new("LISTS & TABLES", "▤")
                .keys(vec!["[↑]".to_string(), bracket(keys.up())], "Move up")
                .keys(vec!["[↓]".to_string(), bracket(keys.down())], "Move down")
                .key("[PgUp] [PgDn]", "Scroll a page")
                .key("[Home] [End]", "First / last row")
                .key("[Enter]", "Open the highlighted page (sidebar)"),
            HelpSection::new("MENUS & TABS", "▾")
                .keys(vec!["[Enter]".to_string(), "[Space]".to_string()], "Open menu / choose")
                .key("[Esc]", "Close menu")
                .key("[←] [→]", "Switch positions tab"),
            HelpSection::new("SEARCH", "⌕")
                .key(bracket(keys.search()), "Search positions by symbol")
                .key("[Ctrl+u]", "Clear the query")
                .keys(vec!["[Enter]".to_string(), "[Esc]".to_string()], "Finish editing"),
        ];

        Self {
            header_message: format!("Press [Esc] or [{}] to close this help screen", keys.help()),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_configured_keys() {
        let keys: KeyBindingsConfig = toml::from_str("key_theme = \"m\"").unwrap();
        let content = HelpContent::from_config(&keys);

        let global = &content.sections[0];
        assert!(
            global
                .shortcuts
                .contains(&Shortcut::new(vec!["[m]".to_string()], "Toggle light / dark theme"))
        );
        assert!(content.header_message.contains("[?]"));
    }
}
