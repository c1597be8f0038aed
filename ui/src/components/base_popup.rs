use crate::theme::{StyleTokenSet, ThemeContext};
use std::sync::Arc;
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Accent of a popup frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTone {
    Neutral,
    Error,
    Warning,
}

impl PopupTone {
    fn accent(self, tokens: &StyleTokenSet) -> Color {
        match self {
            PopupTone::Neutral => tokens.accent_primary(),
            PopupTone::Error => tokens.status_error(),
            PopupTone::Warning => tokens.status_warning(),
        }
    }

    fn border(self, tokens: &StyleTokenSet) -> Color {
        match self {
            PopupTone::Neutral => tokens.border_focused(),
            tone => tone.accent(tokens),
        }
    }
}

/// Framed popups and bordered panels, colored from the current theme.
pub struct PopupBuilder {
    title: String,
    tone: PopupTone,
    tokens: Arc<StyleTokenSet>,
    body: Vec<Line<'static>>,
    instructions: Option<String>,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_tone(title, PopupTone::Neutral)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::with_tone(title, PopupTone::Error)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_tone(title, PopupTone::Warning)
    }

    fn with_tone(title: impl Into<String>, tone: PopupTone) -> Self {
        Self {
            title: title.into(),
            tone,
            tokens: ThemeContext::tokens(),
            body: Vec::new(),
            instructions: None,
        }
    }

    /// One body line per line of `text`.
    pub fn add_multiline_text(mut self, text: impl Into<String>) -> Self {
        self.body
            .extend(text.into().lines().map(|line| Line::from(line.to_string())));
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The popup frame alone, for content rendered by the caller.
    pub fn frame_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(self.tokens.border_type())
            .border_style(Style::default().fg(self.tone.border(&self.tokens)))
            .style(Style::default().bg(self.tokens.surface()))
            .title(self.title.clone())
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.tone.accent(&self.tokens))
                    .add_modifier(Modifier::BOLD),
            )
    }

    /// Bordered panel for tables and charts; the border follows focus.
    pub fn panel(title: impl Into<String>, is_focused: bool) -> Block<'static> {
        let tokens = ThemeContext::tokens();
        let border_color = if is_focused {
            tokens.border_focused()
        } else {
            tokens.border()
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border_type())
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(tokens.surface()))
            .title(title.into())
            .title_alignment(Alignment::Left)
            .title_style(
                Style::default()
                    .fg(tokens.text_primary())
                    .add_modifier(Modifier::BOLD),
            )
    }

    /// Clear `area` and draw the framed body with the instructions last.
    pub fn render(mut self, frame: &mut Frame, area: Rect) {
        self.title = format!(" {} ", self.title);
        let block = self.frame_block();

        let mut lines = vec![Line::from("")];
        lines.append(&mut self.body);
        if let Some(instructions) = self.instructions {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(self.tokens.text_muted()),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(self.tokens.text_primary()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Where popups go on screen.
pub struct PopupLayout;

impl PopupLayout {
    /// Share of `area` in percent, centered.
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let width = area.width * width_percent / 100;
        let height = area.height * height_percent / 100;
        Self::fixed(area, width, height)
    }

    /// Fixed-size area centered in `area`, shrunk to fit.
    pub fn fixed(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Help screen size
    pub fn large(area: Rect) -> Rect {
        Self::centered(area, 80, 70)
    }
}
