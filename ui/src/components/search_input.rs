use crate::components::common::{InputActivityMsg, Msg, PageActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeContext;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const MAX_QUERY_LEN: usize = 24;
const PLACEHOLDER: &str = "Search by symbol…";

/// At most `MAX_QUERY_LEN` characters of `value`, the limit typing enforces.
fn clamp_query(value: &str) -> String {
    value.chars().take(MAX_QUERY_LEN).collect()
}

/// Single-line filter box. Every edit emits the new query; Esc is left to the
/// global key watcher, which ends editing.
pub struct SearchInput {
    value: String,
    focused: bool,
    is_mounted: bool,
}

impl SearchInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: clamp_query(&value.into()),
            focused: false,
            is_mounted: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn changed(&self) -> Option<Msg> {
        Some(Msg::PageActivity(PageActivityMsg::SearchChanged(
            self.value.clone(),
        )))
    }

    fn handle_key(&mut self, code: Key, modifiers: KeyModifiers) -> Option<Msg> {
        match (code, modifiers) {
            (Key::Char('u'), KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    return None;
                }
                self.value.clear();
                self.changed()
            }
            (Key::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.value.chars().count() >= MAX_QUERY_LEN || c.is_control() {
                    return None;
                }
                self.value.push(c);
                self.changed()
            }
            (Key::Backspace, _) => {
                self.value.pop()?;
                self.changed()
            }
            (Key::Enter, _) => Some(Msg::InputActivity(InputActivityMsg::EditingStopped)),
            (Key::Tab, _) => Some(Msg::FocusNext),
            (Key::BackTab, _) => Some(Msg::FocusPrevious),
            _ => None,
        }
    }
}

impl MockComponent for SearchInput {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        let border_color = if self.focused {
            tokens.border_focused()
        } else {
            tokens.border()
        };

        let mut spans = vec![Span::styled(
            " ⌕ ",
            Style::default().fg(tokens.accent_primary()),
        )];
        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(tokens.text_muted())
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(
                self.value.clone(),
                Style::default().fg(tokens.text_primary()),
            ));
        }
        if self.focused {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(tokens.accent_primary())
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border_type())
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(tokens.surface()));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            Attribute::Value => Some(AttrValue::String(self.value.clone())),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        match (attr, value) {
            (Attribute::Focus, AttrValue::Flag(focused)) => self.focused = focused,
            (Attribute::Value, AttrValue::String(value)) => self.value = clamp_query(&value),
            _ => {}
        }
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.value.clone()))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for SearchInput {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent { code, modifiers }) if self.focused => {
                self.handle_key(code, modifiers)
            }
            _ => None,
        }
    }
}

impl ComponentState for SearchInput {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting SearchInput");

        if self.is_mounted {
            log::warn!("SearchInput is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{buffer_text, init_theme, render_component};

    fn press(input: &mut SearchInput, code: Key) -> Option<Msg> {
        input.on(Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn focused(value: &str) -> SearchInput {
        let mut input = SearchInput::new(value);
        input.attr(Attribute::Focus, AttrValue::Flag(true));
        input
    }

    #[test]
    fn test_typing_emits_query() {
        let mut input = focused("");
        press(&mut input, Key::Char('e'));
        let msg = press(&mut input, Key::Char('t'));

        assert_eq!(
            msg,
            Some(Msg::PageActivity(PageActivityMsg::SearchChanged(
                "et".to_string()
            )))
        );
        assert_eq!(input.value(), "et");
    }

    #[test]
    fn test_ignores_keys_without_focus() {
        let mut input = SearchInput::new("btc");
        assert_eq!(press(&mut input, Key::Char('x')), None);
        assert_eq!(input.value(), "btc");
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut input = focused("a");
        assert!(press(&mut input, Key::Backspace).is_some());
        assert_eq!(press(&mut input, Key::Backspace), None);
    }

    #[test]
    fn test_enter_and_tab_leave_the_input() {
        let mut input = focused("sol");
        assert_eq!(
            press(&mut input, Key::Enter),
            Some(Msg::InputActivity(InputActivityMsg::EditingStopped))
        );
        assert_eq!(press(&mut input, Key::Tab), Some(Msg::FocusNext));
        // Esc belongs to the global key watcher
        assert_eq!(press(&mut input, Key::Esc), None);
    }

    #[test]
    fn test_ctrl_u_clears_and_length_is_capped() {
        let mut input = focused(&"x".repeat(40));
        assert_eq!(input.value().len(), MAX_QUERY_LEN);
        assert_eq!(press(&mut input, Key::Char('y')), None);

        let cleared = input.on(Event::Keyboard(KeyEvent {
            code: Key::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert_eq!(
            cleared,
            Some(Msg::PageActivity(PageActivityMsg::SearchChanged(String::new())))
        );
    }

    #[test]
    fn test_multibyte_query_survives_remount() {
        let mut input = focused("");
        press(&mut input, Key::Char('a'));
        for _ in 0..12 {
            press(&mut input, Key::Char('é'));
        }
        let typed = input.value().to_string();

        // The positions page rebuilds the input from the stored query
        let remounted = SearchInput::new(typed.clone());
        assert_eq!(remounted.value(), typed);

        let long = SearchInput::new("é".repeat(30));
        assert_eq!(long.value().chars().count(), MAX_QUERY_LEN);

        let mut set = SearchInput::new("");
        set.attr(Attribute::Value, AttrValue::String("ü".repeat(14)));
        assert_eq!(set.value(), "ü".repeat(14));
    }

    #[test]
    fn test_placeholder_only_when_idle() {
        init_theme();
        let mut input = SearchInput::new("");
        let text = buffer_text(&render_component(&mut input, 30, 3));
        assert!(text.contains("Search by symbol"));

        input.attr(Attribute::Focus, AttrValue::Flag(true));
        let text = buffer_text(&render_component(&mut input, 30, 3));
        assert!(!text.contains("Search by symbol"));
    }
}
