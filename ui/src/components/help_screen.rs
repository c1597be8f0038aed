use crate::components::base_popup::PopupBuilder;
use crate::components::common::Msg;
use crate::components::help::{HelpContent, HelpRenderer};
use crate::components::state::ComponentState;
use crate::config;
use crate::error::AppResult;
use crate::theme::ThemeContext;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State,
    command::{Cmd, CmdResult},
    event::{Key, KeyEvent},
    ratatui::layout::{Alignment, Rect},
    ratatui::widgets::Clear,
};

/// Full shortcut reference drawn as a popup over the current page.
///
/// Every entry follows the configured key bindings. Esc closes it; the help
/// key itself is handled by the global key watcher.
#[derive(Default)]
pub struct HelpScreen;

impl HelpScreen {
    pub fn new() -> Self {
        Self
    }
}

impl MockComponent for HelpScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        let renderer = HelpRenderer::new(&tokens);
        let content = HelpContent::from_config(config::get_config_or_default().keys());

        let block = PopupBuilder::new("  ⌨ Keyboard Shortcuts  ").frame_block();
        let (header_area, left_area, right_area) = renderer.layout_help_screen(area);
        let (left, right) = renderer.render_help_content(&content);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(
            renderer.create_paragraph(renderer.render_header(&content), Alignment::Center),
            header_area,
        );
        frame.render_widget(renderer.create_paragraph(left, Alignment::Left), left_area);
        frame.render_widget(renderer.create_paragraph(right, Alignment::Left), right_area);
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

impl Component<Msg, NoUserEvent> for HelpScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => Some(Msg::ToggleHelpScreen),
            _ => None,
        }
    }
}

impl ComponentState for HelpScreen {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting HelpScreen");
        Ok(())
    }
}
