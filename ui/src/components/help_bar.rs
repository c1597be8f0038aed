use crate::components::common::ComponentId;
use crate::config;
use crate::theme::ThemeContext;
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;

/// Bottom line listing the shortcuts of the focused component, then the
/// global ones.
#[derive(Default)]
pub struct HelpBar;

impl HelpBar {
    pub fn new() -> Self {
        Self
    }

    fn global_shortcuts(&self, editing: bool) -> Vec<(String, String)> {
        if editing {
            return vec![("Esc".to_string(), "Done".to_string())];
        }
        let keys = config::get_config_or_default().keys();
        vec![
            ("Tab".to_string(), "Focus".to_string()),
            (
                format!("{}/{}/{}", keys.dashboard(), keys.portfolio(), keys.positions()),
                "Pages".to_string(),
            ),
            (keys.theme().to_string(), "Theme".to_string()),
            (keys.help().to_string(), "Help".to_string()),
            (keys.quit().to_string(), "Quit".to_string()),
        ]
    }

    fn context_shortcuts(&self, active: &ComponentId) -> Vec<(String, String)> {
        let keys = config::get_config_or_default().keys();
        let pair = |key: &str, label: &str| (key.to_string(), label.to_string());

        match active {
            ComponentId::MarketTable
            | ComponentId::TransactionList
            | ComponentId::HoldingsTable
            | ComponentId::PositionsTable => vec![
                pair(&format!("↑↓/{}{}", keys.up(), keys.down()), "Move"),
                pair("PgUp/PgDn", "Scroll"),
            ],
            ComponentId::Sidebar => vec![
                pair("↑↓", "Move"),
                pair("Enter", "Open"),
                pair(&keys.sidebar().to_string(), "Collapse"),
            ],
            ComponentId::TimeframeDropdown | ComponentId::AccountMenu => vec![
                pair("Enter", "Open/Choose"),
                pair("Esc", "Close"),
            ],
            ComponentId::PositionsTabs => vec![pair("←→", "Switch tab")],
            ComponentId::PositionsSearch => vec![
                pair("Type", "Filter"),
                pair("Ctrl+u", "Clear"),
                pair("Enter", "Done"),
            ],
            ComponentId::StatCard(_) => vec![pair("Hover", "Details")],
            ComponentId::ErrorPopup => vec![pair("Enter/Esc", "Close")],
            ComponentId::HelpScreen => vec![pair("Esc", "Close")],
            _ => Vec::new(),
        }
    }

    /// Shortcuts for `active`, followed by the global ones unless text input
    /// currently owns the keyboard.
    pub fn shortcuts(&self, active: &ComponentId, editing: bool) -> Vec<(String, String)> {
        let mut shortcuts = self.context_shortcuts(active);
        shortcuts.extend(self.global_shortcuts(editing));
        shortcuts
    }

    pub fn view_with_active(
        &self,
        frame: &mut Frame,
        area: Rect,
        active: &ComponentId,
        editing: bool,
    ) {
        let tokens = ThemeContext::tokens();
        let mut spans: Vec<Span> = Vec::new();

        for (index, (key, label)) in self.shortcuts(active, editing).into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(tokens.border())));
            }
            spans.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(tokens.shortcut_key()),
            ));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(tokens.shortcut_description()),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(tokens.surface()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
