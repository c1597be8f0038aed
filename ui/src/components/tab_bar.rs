use crate::components::common::{Msg, PageActivityMsg, area_contains};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeContext;
use portfolio::model::PositionFilter;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const DIVIDER: &str = "│";

/// Row of tabs with one active key. Switching tabs emits the tab's message.
pub struct TabBar {
    tabs: Vec<(String, Msg)>,
    active: usize,
    focused: bool,
    tab_areas: Vec<Rect>,
}

impl TabBar {
    pub fn new(tabs: Vec<(String, Msg)>, active: usize) -> Self {
        let active = active.min(tabs.len().saturating_sub(1));
        Self {
            tabs,
            active,
            focused: false,
            tab_areas: Vec::new(),
        }
    }

    /// Open / Closed / All filter of the positions page.
    pub fn positions(active: PositionFilter) -> Self {
        let tabs = PositionFilter::ALL
            .into_iter()
            .map(|filter| {
                (
                    filter.label().to_string(),
                    Msg::PageActivity(PageActivityMsg::PositionsTabSelected(filter)),
                )
            })
            .collect();
        let index = PositionFilter::ALL
            .iter()
            .position(|filter| *filter == active)
            .unwrap_or(0);
        Self::new(tabs, index)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    fn activate(&mut self, index: usize) -> Option<Msg> {
        if index == self.active || index >= self.tabs.len() {
            return None;
        }
        self.active = index;
        self.tabs.get(index).map(|(_, msg)| msg.clone())
    }

    fn cycle(&mut self, forward: bool) -> Option<Msg> {
        if self.tabs.is_empty() {
            return None;
        }
        let count = self.tabs.len();
        let next = if forward {
            (self.active + 1) % count
        } else {
            (self.active + count - 1) % count
        };
        self.activate(next)
    }

    /// Lay the tab labels out left to right from `area.x`, one cell of
    /// padding on each side, separated by a divider cell.
    fn layout(&self, area: Rect) -> Vec<Rect> {
        let mut x = area.x;
        let right = area.x.saturating_add(area.width);
        self.tabs
            .iter()
            .map(|(label, _)| {
                let width = (label.chars().count() as u16 + 2).min(right.saturating_sub(x));
                let rect = Rect::new(x, area.y, width, area.height.min(1));
                x = x.saturating_add(width + 1);
                rect
            })
            .collect()
    }
}

impl MockComponent for TabBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        self.tab_areas = self.layout(area);

        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (index, (label, _)) in self.tabs.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(DIVIDER, Style::default().fg(tokens.border())));
            }
            let style = if index == self.active {
                let style = Style::default()
                    .fg(tokens.nav_active())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                if self.focused {
                    style.bg(tokens.selection_background())
                } else {
                    style
                }
            } else {
                Style::default().fg(tokens.nav_inactive())
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
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
        State::One(StateValue::Usize(self.active))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for TabBar {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Right,
                modifiers: KeyModifiers::NONE,
            }) if self.focused => self.cycle(true),
            Event::Keyboard(KeyEvent {
                code: Key::Left,
                modifiers: KeyModifiers::NONE,
            }) if self.focused => self.cycle(false),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let index = self
                    .tab_areas
                    .iter()
                    .position(|area| area_contains(*area, column, row))?;
                self.activate(index)
            }
            _ => None,
        }
    }
}

impl ComponentState for TabBar {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting TabBar with {} tabs", self.tabs.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{buffer_text, init_theme, render_component};

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_layout_matches_rendered_labels() {
        let bar = TabBar::positions(PositionFilter::Open);
        let areas = bar.layout(Rect::new(2, 1, 40, 1));

        // " Open " then "│" then " Closed " then "│" then " All "
        assert_eq!(areas[0], Rect::new(2, 1, 6, 1));
        assert_eq!(areas[1], Rect::new(9, 1, 8, 1));
        assert_eq!(areas[2], Rect::new(18, 1, 5, 1));
    }

    #[test]
    fn test_arrow_keys_cycle_when_focused() {
        let mut bar = TabBar::positions(PositionFilter::Open);
        assert_eq!(bar.on(key(Key::Right)), None);

        bar.attr(Attribute::Focus, AttrValue::Flag(true));
        assert_eq!(
            bar.on(key(Key::Left)),
            Some(Msg::PageActivity(PageActivityMsg::PositionsTabSelected(
                PositionFilter::All
            )))
        );
        assert_eq!(
            bar.on(key(Key::Right)),
            Some(Msg::PageActivity(PageActivityMsg::PositionsTabSelected(
                PositionFilter::Open
            )))
        );
    }

    #[test]
    fn test_click_selects_tab() {
        init_theme();
        let mut bar = TabBar::positions(PositionFilter::Open);
        let text = buffer_text(&render_component(&mut bar, 30, 1));
        assert!(text.contains(" Open │ Closed │ All "));

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
            column: 10,
            row: 0,
        });
        assert_eq!(
            bar.on(click.clone()),
            Some(Msg::PageActivity(PageActivityMsg::PositionsTabSelected(
                PositionFilter::Closed
            )))
        );
        // Clicking the active tab again is a no-op
        assert_eq!(bar.on(click), None);
        assert_eq!(bar.active(), 1);
    }
}
