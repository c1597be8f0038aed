use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use tuirealm::{
    AttrValue, Attribute, Component, Event, MockComponent, NoUserEvent, State,
    command::{Cmd, CmdResult},
    event::{Key, KeyEvent},
    ratatui::{Frame, layout::Rect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

/// Modal message box for reported errors and warnings. Enter or Esc closes it.
pub struct ErrorPopup {
    message: String,
    severity: Severity,
    is_mounted: bool,
}

impl ErrorPopup {
    pub fn new(error: &AppError) -> Self {
        // ErrorReporter already formats the message for the user
        Self {
            message: error.to_string(),
            severity: Severity::Error,
            is_mounted: false,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            is_mounted: false,
        }
    }
}

impl MockComponent for ErrorPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let builder = match self.severity {
            Severity::Error => PopupBuilder::error("✖ Error"),
            Severity::Warning => PopupBuilder::warning("⚠ Warning"),
        };

        builder
            .add_multiline_text(self.message.as_str())
            .with_instructions("[Enter/Esc] Close")
            .render(frame, area);
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

impl Component<Msg, NoUserEvent> for ErrorPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for ErrorPopup {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting ErrorPopup component");

        if self.is_mounted {
            log::warn!("ErrorPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;

        log::debug!("ErrorPopup component mounted successfully");
        Ok(())
    }
}

impl Drop for ErrorPopup {
    fn drop(&mut self) {
        log::debug!("Dropping ErrorPopup component");
        self.is_mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::base_popup::PopupLayout;
    use crate::components::test_support::{buffer_text, init_theme, render_component_at};
    use tuirealm::event::KeyModifiers;

    #[test]
    fn test_renders_message_and_instructions() {
        init_theme();
        let mut popup = ErrorPopup::new(&AppError::Config("currency 'DOGE' is unknown".into()));
        let area = PopupLayout::fixed(Rect::new(0, 0, 80, 20), 60, 8);

        let text = buffer_text(&render_component_at(&mut popup, 80, 20, area));
        assert!(text.contains("Error"));
        assert!(text.contains("DOGE"));
        assert!(text.contains("[Enter/Esc] Close"));
    }

    #[test]
    fn test_warning_title() {
        init_theme();
        let mut popup = ErrorPopup::warning("Palette fell back to defaults");
        let area = PopupLayout::fixed(Rect::new(0, 0, 80, 20), 60, 8);

        let text = buffer_text(&render_component_at(&mut popup, 80, 20, area));
        assert!(text.contains("Warning"));
    }

    #[test]
    fn test_enter_and_escape_close() {
        let mut popup = ErrorPopup::warning("x");
        for code in [Key::Enter, Key::Esc] {
            let ev = Event::Keyboard(KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(
                popup.on(ev),
                Some(Msg::PopupActivity(PopupActivityMsg::CloseError))
            );
        }
    }
}
