use crate::components::common::{Msg, area_contains};
use crate::components::disclosure::Disclosure;
use crate::components::state::ComponentState;
use crate::config;
use crate::error::AppResult;
use crate::pages::Page;
use crate::theme::ThemeContext;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

pub const EXPANDED_WIDTH: u16 = 22;
pub const COLLAPSED_WIDTH: u16 = 6;

/// Page navigation. Expanded it shows icon, title and shortcut; collapsed
/// only the icons remain.
pub struct Sidebar {
    active: Page,
    disclosure: Disclosure,
    highlighted: usize,
    focused: bool,
    item_areas: Vec<(Page, Rect)>,
    is_mounted: bool,
}

impl Sidebar {
    pub fn new(active: Page, disclosure: Disclosure) -> Self {
        let highlighted = Page::ALL.iter().position(|p| *p == active).unwrap_or(0);
        Self {
            active,
            disclosure,
            highlighted,
            focused: false,
            item_areas: Vec::new(),
            is_mounted: false,
        }
    }

    pub fn width(disclosure: Disclosure) -> u16 {
        if disclosure.is_open() {
            EXPANDED_WIDTH
        } else {
            COLLAPSED_WIDTH
        }
    }

    fn navigate(&self, page: Page) -> Option<Msg> {
        (page != self.active).then_some(Msg::Navigate(page))
    }

    fn move_highlight(&mut self, down: bool) -> Option<Msg> {
        let last = Page::ALL.len() - 1;
        let next = if down {
            (self.highlighted + 1).min(last)
        } else {
            self.highlighted.saturating_sub(1)
        };
        if next == self.highlighted {
            return None;
        }
        self.highlighted = next;
        Some(Msg::ForceRedraw)
    }

    fn item_line(&self, index: usize, page: Page) -> Line<'static> {
        let tokens = ThemeContext::tokens();
        let keys = config::get_config_or_default().keys();
        let is_active = page == self.active;

        let mut style = if is_active {
            Style::default()
                .fg(tokens.nav_active())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tokens.nav_inactive())
        };
        if self.focused && index == self.highlighted {
            style = style
                .bg(tokens.selection_background())
                .fg(tokens.selection_text());
        }
        let marker = if is_active { "▌" } else { " " };

        if self.disclosure.is_open() {
            Line::from(vec![
                Span::styled(marker, Style::default().fg(tokens.accent_primary())),
                Span::styled(format!(" {}  {:<11}", page.icon(), page.title()), style),
                Span::styled(
                    format!("{} ", page.shortcut(keys)),
                    Style::default().fg(tokens.shortcut_key()),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(marker, Style::default().fg(tokens.accent_primary())),
                Span::styled(format!(" {} ", page.icon()), style),
            ])
        }
    }
}

impl MockComponent for Sidebar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_type(tokens.border_type())
            .border_style(Style::default().fg(tokens.border()))
            .style(Style::default().bg(tokens.sidebar_background()));
        let inner = block.inner(area);

        let mut lines = vec![Line::from("")];
        self.item_areas.clear();
        for (index, page) in Page::ALL.into_iter().enumerate() {
            let row = inner.y + lines.len() as u16;
            if row < inner.y + inner.height {
                self.item_areas
                    .push((page, Rect::new(inner.x, row, inner.width, 1)));
            }
            lines.push(self.item_line(index, page));
            lines.push(Line::from(""));
        }

        let footer_row = inner.height.saturating_sub(1) as usize;
        while lines.len() < footer_row {
            lines.push(Line::from(""));
        }
        let footer = if self.disclosure.is_open() {
            format!(" [{}] collapse", config::get_config_or_default().keys().sidebar())
        } else {
            " »".to_string()
        };
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(tokens.text_muted()),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if let (Attribute::Focus, AttrValue::Flag(focused)) = (attr, value) {
            self.focused = focused;
        }
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.highlighted))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for Sidebar {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let keys = config::get_config_or_default().keys();
        match ev {
            Event::Keyboard(KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
            }) if self.focused => match code {
                Key::Down => self.move_highlight(true),
                Key::Char(c) if c == keys.down() => self.move_highlight(true),
                Key::Up => self.move_highlight(false),
                Key::Char(c) if c == keys.up() => self.move_highlight(false),
                Key::Enter => self.navigate(Page::ALL[self.highlighted]),
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self
                .item_areas
                .iter()
                .find(|(_, area)| area_contains(*area, column, row))
                .and_then(|(page, _)| self.navigate(*page)),
            _ => None,
        }
    }
}

impl ComponentState for Sidebar {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!(
            "Mounting Sidebar ({}) on {}",
            if self.disclosure.is_open() {
                "expanded"
            } else {
                "collapsed"
            },
            self.active
        );

        if self.is_mounted {
            log::warn!("Sidebar is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        Ok(())
    }
}
