use crate::components::common::{InputActivityMsg, Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::config;
use crate::error::AppResult;
use crate::pages::Page;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every event. It turns the global keys
/// into messages and reports left clicks so focus can follow the pointer.
///
/// While a text input is being edited only Esc, Ctrl+C and clicks get through.
#[derive(MockComponent)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    input_active: bool,
}

impl GlobalKeyWatcher {
    pub fn new(input_active: bool) -> Self {
        Self {
            component: Phantom::default(),
            input_active,
        }
    }

    fn handle_char(&self, c: char) -> Option<Msg> {
        let keys = config::get_config_or_default().keys();
        if c == keys.quit() {
            Some(Msg::AppClose)
        } else if c == keys.theme() {
            Some(Msg::ThemeActivity(ThemeActivityMsg::ToggleRequested))
        } else if c == keys.sidebar() {
            Some(Msg::ToggleSidebar)
        } else if c == keys.help() {
            Some(Msg::ToggleHelpScreen)
        } else if c == keys.dashboard() {
            Some(Msg::Navigate(Page::Dashboard))
        } else if c == keys.portfolio() {
            Some(Msg::Navigate(Page::Portfolio))
        } else if c == keys.positions() {
            Some(Msg::Navigate(Page::Positions))
        } else if c == keys.search() {
            Some(Msg::InputActivity(InputActivityMsg::EditingStarted))
        } else {
            None
        }
    }
}

impl Default for GlobalKeyWatcher {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) if self.input_active => {
                Some(Msg::InputActivity(InputActivityMsg::EditingStopped))
            }
            // Clicking elsewhere ends editing through the focus change
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Msg::FocusAt { column, row }),
            _ if self.input_active => None,
            // Shift is allowed so that '?' and other shifted symbols work
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            }) => self.handle_char(c),
            Event::Keyboard(KeyEvent {
                code: Key::Tab,
                modifiers: KeyModifiers::NONE,
            }) => Some(Msg::FocusNext),
            Event::Keyboard(KeyEvent {
                code: Key::BackTab, ..
            }) => Some(Msg::FocusPrevious),
            Event::WindowResize(_, _) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for GlobalKeyWatcher {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!(
            "Mounting GlobalKeyWatcher (input active: {})",
            self.input_active
        );
        Ok(())
    }
}
