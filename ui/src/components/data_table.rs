//! Scrollable, themed table shared by the holdings, positions, market and
//! transaction views.
//!
//! Selection and scrolling are delegated to the stdlib [`Table`]; rendering is
//! done here with a ratatui table so every cell can pick its color from the
//! current theme at draw time.

use crate::components::common::Msg;
use crate::config;
use crate::theme::{StyleTokenSet, ThemeContext};
use portfolio::TrendDirection;
use portfolio::model::AccentColor;
use tui_realm_stdlib::Table;
use tuirealm::command::{Cmd, CmdResult, Direction, Position};
use tuirealm::event::{Key, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tuirealm::props::{Alignment, BorderType, Borders, Color, TableBuilder, TextSpan};
use tuirealm::ratatui::layout::{Constraint, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::widgets::{Cell, Paragraph, Row, Table as RatatuiTable, TableState};
use tuirealm::{AttrValue, Attribute, Event, Frame, MockComponent, NoUserEvent, State, StateValue};

use crate::components::base_popup::PopupBuilder;

/// Semantic color of a cell, resolved when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellTone {
    Primary,
    Secondary,
    Muted,
    Trend(TrendDirection),
    Accent(AccentColor),
}

impl CellTone {
    /// Tone of a signed amount: positive is up, negative is down.
    pub fn signed(value: f64) -> Self {
        CellTone::Trend(TrendDirection::from_change(value))
    }

    fn color(&self, tokens: &StyleTokenSet) -> Color {
        match self {
            CellTone::Primary => tokens.text_primary(),
            CellTone::Secondary => tokens.text_secondary(),
            CellTone::Muted => tokens.text_muted(),
            CellTone::Trend(TrendDirection::Up) => tokens.trend_up(),
            CellTone::Trend(TrendDirection::Down) => tokens.trend_down(),
            CellTone::Trend(TrendDirection::Flat) => tokens.trend_flat(),
            CellTone::Accent(accent) => tokens.accent(*accent),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub tone: CellTone,
    pub bold: bool,
}

impl TableCell {
    pub fn new(text: impl Into<String>, tone: CellTone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(text, CellTone::Primary)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, CellTone::Muted)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct DataTable {
    component: Table,
    title: String,
    headers: Vec<String>,
    widths: Vec<u16>,
    rows: Vec<Vec<TableCell>>,
    empty_message: String,
}

impl DataTable {
    pub fn new(
        title: impl Into<String>,
        headers: &[&str],
        widths: &[u16],
        rows: Vec<Vec<TableCell>>,
    ) -> Self {
        let title = title.into();
        let component = Table::default()
            .borders(Borders::default().modifiers(BorderType::Rounded))
            .title(&title, Alignment::Left)
            .scroll(true)
            .highlighted_str("► ")
            .rewind(false)
            .step(4)
            .row_height(1)
            .headers(headers.iter().copied())
            .column_spacing(2)
            .widths(widths)
            .table(Self::build_table(&rows));

        Self {
            component,
            title,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            widths: widths.to_vec(),
            rows,
            empty_message: "Nothing to show".to_string(),
        }
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    fn build_table(rows: &[Vec<TableCell>]) -> Vec<Vec<TextSpan>> {
        let mut builder = TableBuilder::default();
        for row in rows {
            for cell in row {
                builder.add_col(TextSpan::from(cell.text.as_str()));
            }
            builder.add_row();
        }
        builder.build()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.component.state() {
            State::One(StateValue::Usize(index)) if index < self.rows.len() => Some(index),
            _ => None,
        }
    }

    fn is_focused(&self) -> bool {
        matches!(
            self.component.query(Attribute::Focus),
            Some(AttrValue::Flag(true))
        )
    }

    /// Keyboard and wheel navigation. Returns a redraw when the selection moved.
    pub fn handle_navigation(&mut self, ev: &Event<NoUserEvent>) -> Option<Msg> {
        let keys = config::get_config_or_default().keys();
        let cmd = match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down,
                modifiers: KeyModifiers::NONE,
            }) => Cmd::Move(Direction::Down),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if *c == keys.down() => Cmd::Move(Direction::Down),
            Event::Keyboard(KeyEvent {
                code: Key::Up,
                modifiers: KeyModifiers::NONE,
            }) => Cmd::Move(Direction::Up),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if *c == keys.up() => Cmd::Move(Direction::Up),
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                ..
            }) => Cmd::Scroll(Direction::Down),
            Event::Keyboard(KeyEvent { code: Key::PageUp, .. }) => Cmd::Scroll(Direction::Up),
            Event::Keyboard(KeyEvent { code: Key::Home, .. }) => Cmd::GoTo(Position::Begin),
            Event::Keyboard(KeyEvent { code: Key::End, .. }) => Cmd::GoTo(Position::End),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                ..
            }) => Cmd::Move(Direction::Down),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                ..
            }) => Cmd::Move(Direction::Up),
            _ => return None,
        };

        match self.component.perform(cmd) {
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl MockComponent for DataTable {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        let focused = self.is_focused();
        let block = PopupBuilder::panel(format!(" {} ", self.title), focused);

        if self.rows.is_empty() {
            let message = Paragraph::new(self.empty_message.as_str())
                .style(Style::default().fg(tokens.text_muted()))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|cells| {
                Row::new(cells.iter().map(|cell| {
                    let mut style = Style::default().fg(cell.tone.color(&tokens));
                    if cell.bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Cell::from(cell.text.as_str()).style(style)
                }))
            })
            .collect();

        let header = Row::new(self.headers.iter().map(|h| {
            Cell::from(h.as_str()).style(
                Style::default()
                    .fg(tokens.text_secondary())
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .height(1);

        let widths: Vec<Constraint> = self.widths.iter().map(|&w| Constraint::Length(w)).collect();

        let table = RatatuiTable::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(
                Style::default()
                    .bg(tokens.selection_background())
                    .fg(tokens.selection_text())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        // Only the focused table shows its cursor
        let mut table_state = TableState::default();
        table_state.select(if focused { self.selected_index() } else { None });

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.component.attr(attr, value);
    }

    fn state(&self) -> State {
        self.component.state()
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        self.component.perform(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{buffer_text, init_theme, render_component};
    use crate::theme::ThemeMode;

    fn table() -> DataTable {
        DataTable::new(
            "Sample",
            &["Name", "Change"],
            &[10, 10],
            vec![
                vec![TableCell::primary("Alpha"), TableCell::new("+1.00%", CellTone::signed(1.0))],
                vec![TableCell::primary("Beta"), TableCell::new("-2.00%", CellTone::signed(-2.0))],
                vec![TableCell::primary("Gamma"), TableCell::muted("0.00%")],
            ],
        )
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_tones_resolve_against_theme() {
        let tokens = StyleTokenSet::fallback(ThemeMode::Dark);
        assert_eq!(CellTone::signed(-1.0).color(&tokens), tokens.trend_down());
        assert_eq!(CellTone::Muted.color(&tokens), tokens.text_muted());
    }

    #[test]
    fn test_navigation_moves_selection_without_rewind() {
        let mut table = table();
        assert_eq!(table.selected_index(), Some(0));

        assert_eq!(table.handle_navigation(&key(Key::Down)), Some(Msg::ForceRedraw));
        assert_eq!(table.selected_index(), Some(1));

        table.handle_navigation(&key(Key::End));
        assert_eq!(table.selected_index(), Some(2));

        // Already at the bottom
        assert_eq!(table.handle_navigation(&key(Key::Down)), None);
        assert_eq!(table.handle_navigation(&key(Key::Enter)), None);
    }

    #[test]
    fn test_renders_headers_and_cells() {
        init_theme();
        let mut table = table();
        let text = buffer_text(&render_component(&mut table, 40, 8));

        assert!(text.contains("Sample"));
        assert!(text.contains("Change"));
        assert!(text.contains("Gamma"));
    }

    #[test]
    fn test_empty_table_shows_message() {
        init_theme();
        let mut table =
            DataTable::new("Empty", &["A"], &[4], Vec::new()).with_empty_message("No rows here");
        assert_eq!(table.selected_index(), None);

        let text = buffer_text(&render_component(&mut table, 30, 5));
        assert!(text.contains("No rows here"));
    }
}
