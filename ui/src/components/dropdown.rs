//! Option menu opened from a one-line trigger.
//!
//! Used for the chart timeframe selector and the header account menu. The
//! open/closed state is a [`Disclosure`]; the menu is drawn as an overlay
//! below the trigger (or above it when the screen ends first).

use crate::components::common::{Msg, area_contains};
use crate::components::disclosure::{Disclosure, DisclosureEvent};
use crate::components::state::ComponentState;
use crate::config;
use crate::error::AppResult;
use crate::theme::ThemeContext;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

/// Queried by the view to find out whether the menu overlay is drawn.
pub const EXPANDED: Attribute = Attribute::Custom("expanded");

const MIN_MENU_WIDTH: u16 = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub msg: Msg,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, msg: Msg) -> Self {
        Self {
            label: label.into(),
            msg,
        }
    }
}

pub struct Dropdown {
    /// Fixed trigger text. When unset the trigger shows the selected option.
    label: Option<String>,
    options: Vec<DropdownOption>,
    selected: usize,
    highlighted: usize,
    disclosure: Disclosure,
    focused: bool,
    trigger_area: Option<Rect>,
    menu_area: Option<Rect>,
    is_mounted: bool,
}

impl Dropdown {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            label: None,
            options,
            selected: 0,
            highlighted: 0,
            disclosure: Disclosure::Closed,
            focused: false,
            trigger_area: None,
            menu_area: None,
            is_mounted: false,
        }
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        if index < self.options.len() {
            self.selected = index;
            self.highlighted = index;
        }
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Where the menu of a dropdown drawn at `trigger` ends up on screen.
    pub fn menu_area(trigger: Rect, option_count: usize, bounds: Rect) -> Rect {
        let width = trigger.width.max(MIN_MENU_WIDTH).min(bounds.width);
        let height = (option_count as u16 + 2).min(bounds.height);

        let below = trigger.y.saturating_add(trigger.height);
        let y = if below.saturating_add(height) <= bounds.y.saturating_add(bounds.height) {
            below
        } else {
            trigger.y.saturating_sub(height).max(bounds.y)
        };
        let max_x = bounds.x.saturating_add(bounds.width).saturating_sub(width);
        let x = trigger.x.min(max_x).max(bounds.x);

        Rect::new(x, y, width, height)
    }

    fn trigger_text(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self
                .options
                .get(self.selected)
                .map(|option| option.label.clone())
                .unwrap_or_default(),
        }
    }

    fn transition(&mut self, event: DisclosureEvent) {
        let was_open = self.disclosure.is_open();
        self.disclosure = self.disclosure.apply(event);
        if !was_open && self.disclosure.is_open() {
            self.highlighted = self.selected;
        }
        if !self.disclosure.is_open() {
            self.menu_area = None;
        }
    }

    fn choose(&mut self, index: usize) -> Option<Msg> {
        let option = self.options.get(index)?;
        let msg = option.msg.clone();
        if self.label.is_none() {
            self.selected = index;
        }
        self.transition(DisclosureEvent::Select);
        Some(msg)
    }

    fn move_highlight(&mut self, down: bool) -> Option<Msg> {
        if self.options.is_empty() {
            return None;
        }
        let last = self.options.len() - 1;
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

    fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        let menu = self.menu_area?;
        if !area_contains(menu, column, row) || row == menu.y {
            return None;
        }
        let index = (row - menu.y - 1) as usize;
        (index < self.options.len()).then_some(index)
    }

    fn handle_key(&mut self, code: Key) -> Option<Msg> {
        let keys = config::get_config_or_default().keys();
        let open = self.disclosure.is_open();

        match code {
            Key::Enter | Key::Char(' ') if open => self.choose(self.highlighted),
            Key::Enter | Key::Char(' ') | Key::Down if !open => {
                self.transition(DisclosureEvent::Trigger);
                Some(Msg::ForceRedraw)
            }
            Key::Esc if open => {
                self.transition(DisclosureEvent::Dismiss);
                Some(Msg::ForceRedraw)
            }
            _ if !open => None,
            Key::Down => self.move_highlight(true),
            Key::Char(c) if c == keys.down() => self.move_highlight(true),
            Key::Up => self.move_highlight(false),
            Key::Char(c) if c == keys.up() => self.move_highlight(false),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Option<Msg> {
        let MouseEvent {
            kind, column, row, ..
        } = event;

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.option_at(column, row) {
                    return self.choose(index);
                }
                let on_trigger = self
                    .trigger_area
                    .is_some_and(|area| area_contains(area, column, row));
                if on_trigger {
                    self.transition(DisclosureEvent::Trigger);
                    Some(Msg::ForceRedraw)
                } else if self.disclosure.is_open() {
                    self.transition(DisclosureEvent::OutsideInteraction);
                    Some(Msg::ForceRedraw)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => {
                let index = self.option_at(column, row)?;
                if index == self.highlighted {
                    return None;
                }
                self.highlighted = index;
                Some(Msg::ForceRedraw)
            }
            _ => None,
        }
    }

    fn render_menu(&mut self, frame: &mut Frame, trigger: Rect) {
        let tokens = ThemeContext::tokens();
        let menu = Self::menu_area(trigger, self.options.len(), frame.area());
        self.menu_area = Some(menu);

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                if index == self.highlighted {
                    Line::from(Span::styled(
                        format!("► {}", option.label),
                        Style::default()
                            .fg(tokens.selection_text())
                            .bg(tokens.selection_background())
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    let marker = if self.label.is_none() && index == self.selected {
                        "✓ "
                    } else {
                        "  "
                    };
                    Line::from(Span::styled(
                        format!("{marker}{}", option.label),
                        Style::default().fg(tokens.text_primary()),
                    ))
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border_type())
            .border_style(Style::default().fg(tokens.border_focused()))
            .style(Style::default().bg(tokens.surface()));

        frame.render_widget(Clear, menu);
        frame.render_widget(Paragraph::new(lines).block(block), menu);
    }
}

impl MockComponent for Dropdown {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        self.trigger_area = Some(area);

        let border_color = if self.focused {
            tokens.border_focused()
        } else {
            tokens.border()
        };
        let caret = if self.disclosure.is_open() { "▴" } else { "▾" };
        let trigger = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", self.trigger_text()),
                Style::default()
                    .fg(tokens.text_primary())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(caret, Style::default().fg(tokens.accent_primary())),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(tokens.border_type())
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(tokens.surface())),
        );
        frame.render_widget(trigger, area);

        if self.disclosure.is_open() {
            self.render_menu(frame, area);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            attr if attr == EXPANDED => Some(AttrValue::Flag(self.disclosure.is_open())),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if let (Attribute::Focus, AttrValue::Flag(focused)) = (attr, value) {
            self.focused = focused;
            if !focused {
                self.transition(DisclosureEvent::OutsideInteraction);
            }
        }
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for Dropdown {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            // Keys only count while focused; the dropdown is also subscribed
            // to every event so that clicks reach it unfocused.
            Event::Keyboard(KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
            }) if self.focused => self.handle_key(code),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        }
    }
}

impl ComponentState for Dropdown {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting dropdown with {} options", self.options.len());
        if self.is_mounted {
            log::warn!("Dropdown is already mounted");
            return Ok(());
        }
        self.disclosure = Disclosure::Closed;
        self.is_mounted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::common::PageActivityMsg;
    use crate::components::test_support::{
        buffer_text, init_theme, render_component, render_component_at,
    };
    use portfolio::model::Timeframe;

    const TRIGGER: Rect = Rect {
        x: 0,
        y: 0,
        width: 12,
        height: 3,
    };

    fn timeframes() -> Dropdown {
        Dropdown::new(
            Timeframe::ALL
                .into_iter()
                .map(|tf| {
                    DropdownOption::new(
                        tf.label(),
                        Msg::PageActivity(PageActivityMsg::TimeframeSelected(tf)),
                    )
                })
                .collect(),
        )
        .with_selected(2)
    }

    fn click(column: u16, row: u16) -> Event<NoUserEvent> {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
            column,
            row,
        })
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_menu_area_flips_and_clamps() {
        let bounds = Rect::new(0, 0, 80, 24);

        let below = Dropdown::menu_area(Rect::new(10, 2, 12, 3), 4, bounds);
        assert_eq!(below, Rect::new(10, 5, 18, 6));

        let above = Dropdown::menu_area(Rect::new(70, 20, 10, 3), 4, bounds);
        assert_eq!(above, Rect::new(62, 14, 18, 6));
    }

    #[test]
    fn test_trigger_click_opens_and_outside_click_closes() {
        init_theme();
        let mut dropdown = timeframes();
        render_component_at(&mut dropdown, 20, 12, TRIGGER);
        assert!(!dropdown.is_open());

        assert_eq!(dropdown.on(click(3, 1)), Some(Msg::ForceRedraw));
        assert!(dropdown.is_open());

        // Drawing records the menu area below the trigger
        render_component_at(&mut dropdown, 20, 12, TRIGGER);
        assert_eq!(dropdown.on(click(19, 11)), Some(Msg::ForceRedraw));
        assert!(!dropdown.is_open());

        // A stray click while closed changes nothing
        assert_eq!(dropdown.on(click(19, 11)), None);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_clicking_an_option_selects_and_closes() {
        init_theme();
        let mut dropdown = timeframes();
        render_component_at(&mut dropdown, 20, 12, TRIGGER);
        dropdown.on(click(3, 1));
        render_component_at(&mut dropdown, 20, 12, TRIGGER);

        // Menu starts at row 3; its border takes one row
        let msg = dropdown.on(click(4, 4));
        assert_eq!(
            msg,
            Some(Msg::PageActivity(PageActivityMsg::TimeframeSelected(
                Timeframe::Day
            )))
        );
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.state(), State::One(StateValue::Usize(0)));
    }

    #[test]
    fn test_keyboard_selection_requires_focus() {
        let mut dropdown = timeframes();
        assert_eq!(dropdown.on(key(Key::Enter)), None);

        dropdown.attr(Attribute::Focus, AttrValue::Flag(true));
        dropdown.on(key(Key::Enter));
        assert!(dropdown.is_open());

        assert_eq!(dropdown.on(key(Key::Down)), Some(Msg::ForceRedraw));
        assert_eq!(
            dropdown.on(key(Key::Enter)),
            Some(Msg::PageActivity(PageActivityMsg::TimeframeSelected(
                Timeframe::Year
            )))
        );
        assert_eq!(dropdown.selected(), 3);
    }

    #[test]
    fn test_escape_and_focus_loss_close() {
        let mut dropdown = timeframes();
        dropdown.attr(Attribute::Focus, AttrValue::Flag(true));

        dropdown.on(key(Key::Char(' ')));
        assert_eq!(dropdown.query(EXPANDED), Some(AttrValue::Flag(true)));
        dropdown.on(key(Key::Esc));
        assert!(!dropdown.is_open());

        dropdown.on(key(Key::Enter));
        dropdown.attr(Attribute::Focus, AttrValue::Flag(false));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_fixed_label_menu_keeps_its_trigger() {
        init_theme();
        let mut menu = Dropdown::new(vec![
            DropdownOption::new("Help", Msg::ToggleHelpScreen),
            DropdownOption::new("Quit", Msg::AppClose),
        ])
        .with_label("Account");

        let text = buffer_text(&render_component(&mut menu, 20, 3));
        assert!(text.contains("Account ▾"));

        menu.attr(Attribute::Focus, AttrValue::Flag(true));
        menu.on(key(Key::Enter));
        menu.on(key(Key::Down));
        assert_eq!(menu.on(key(Key::Enter)), Some(Msg::AppClose));
        assert_eq!(menu.trigger_text(), "Account");
    }
}
