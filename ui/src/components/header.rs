use crate::components::common::{Msg, ThemeActivityMsg, area_contains};
use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::pages::Page;
use crate::theme::ThemeContext;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{MouseButton, MouseEvent, MouseEventKind};
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Paragraph};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

pub const APP_TITLE: &str = "◆ COINFOLIO";
pub const ACCOUNT_MENU_WIDTH: u16 = 16;
const THEME_INDICATOR_WIDTH: u16 = 10;

/// Top bar: gradient application name, page title and theme indicator. The
/// account menu is a separate component drawn at its right edge.
pub struct Header {
    page: Page,
    indicator_area: Option<Rect>,
}

impl Header {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            indicator_area: None,
        }
    }

    /// Right edge of the header reserved for the account menu.
    pub fn account_menu_area(header: Rect) -> Rect {
        let width = ACCOUNT_MENU_WIDTH.min(header.width);
        Rect::new(
            header.x + header.width - width,
            header.y,
            width,
            header.height.min(3),
        )
    }

    /// Toggle theme, help and quit behind the "Account" trigger.
    pub fn account_menu() -> Dropdown {
        Dropdown::new(vec![
            DropdownOption::new(
                "Toggle theme",
                Msg::ThemeActivity(ThemeActivityMsg::ToggleRequested),
            ),
            DropdownOption::new("Help", Msg::ToggleHelpScreen),
            DropdownOption::new("Quit", Msg::AppClose),
        ])
        .with_label("◉ Account")
    }
}

impl MockComponent for Header {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        let mode = ThemeContext::mode();

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(tokens.border_type())
            .border_style(Style::default().fg(tokens.border()))
            .style(Style::default().bg(tokens.header_background()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, indicator_area, _menu] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(THEME_INDICATOR_WIDTH),
            Constraint::Length(ACCOUNT_MENU_WIDTH),
        ])
        .areas(inner);

        let mut title = tokens.gradient_line(APP_TITLE);
        title.spans.insert(0, Span::raw(" "));
        title.spans.push(Span::styled("  │  ", Style::default().fg(tokens.border())));
        title.spans.push(Span::styled(
            self.page.title(),
            Style::default()
                .fg(tokens.text_primary())
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title), title_area);

        self.indicator_area = Some(indicator_area);
        let indicator = Line::from(vec![
            Span::styled(
                format!("{} ", mode.icon()),
                Style::default().fg(tokens.accent_primary()),
            ),
            Span::styled(mode.label(), Style::default().fg(tokens.text_secondary())),
        ]);
        frame.render_widget(Paragraph::new(indicator), indicator_area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for Header {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) if self
                .indicator_area
                .is_some_and(|area| area_contains(area, column, row)) =>
            {
                Some(Msg::ThemeActivity(ThemeActivityMsg::ToggleRequested))
            }
            _ => None,
        }
    }
}

impl ComponentState for Header {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting Header for {}", self.page);
        Ok(())
    }
}
