use super::content::{HelpContent, HelpSection, Shortcut};
use crate::theme::StyleTokenSet;
use tuirealm::ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

/// Utility for rendering help content with consistent styling
pub struct HelpRenderer<'t> {
    tokens: &'t StyleTokenSet,
    key_width: usize,
}

impl<'t> HelpRenderer<'t> {
    pub fn new(tokens: &'t StyleTokenSet) -> Self {
        Self {
            tokens,
            key_width: 16,
        }
    }

    /// Render the complete help content split into two columns
    pub fn render_help_content<'a>(&self, content: &'a HelpContent) -> (Text<'a>, Text<'a>) {
        let sections = &content.sections;
        let mid_point = sections.len().div_ceil(2);

        (
            self.render_sections(&sections[..mid_point]),
            self.render_sections(&sections[mid_point..]),
        )
    }

    pub fn render_header<'a>(&self, content: &'a HelpContent) -> Text<'a> {
        Text::from(Line::from(Span::styled(
            content.header_message.as_str(),
            Style::default()
                .fg(self.tokens.shortcut_description())
                .add_modifier(Modifier::BOLD),
        )))
    }

    fn render_sections<'a>(&self, sections: &'a [HelpSection]) -> Text<'a> {
        let mut lines = Vec::new();

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("{} {}", section.icon, section.title),
                Style::default()
                    .fg(self.tokens.accent_primary())
                    .add_modifier(Modifier::BOLD),
            )));

            for shortcut in &section.shortcuts {
                lines.push(self.render_shortcut(shortcut));
            }

            lines.push(Line::from(""));
        }

        Text::from(lines)
    }

    fn render_shortcut<'a>(&self, shortcut: &'a Shortcut) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("  {:width$}", shortcut.keys.join(" "), width = self.key_width),
                Style::default()
                    .fg(self.tokens.shortcut_key())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                shortcut.description.as_str(),
                Style::default().fg(self.tokens.shortcut_description()),
            ),
        ])
    }

    pub fn create_paragraph<'a>(&self, text: Text<'a>, alignment: Alignment) -> Paragraph<'a> {
        Paragraph::new(text).alignment(alignment)
    }

    /// Split area into header and two content columns
    pub fn layout_help_screen(&self, area: Rect) -> (Rect, Rect, Rect) {
        let [header, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)])
            .margin(1)
            .areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);

        (header, left, right)
    }
}
