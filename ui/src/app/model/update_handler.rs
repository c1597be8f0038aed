use super::Model;
use crate::components::common::{Msg, PopupActivityMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        self.redraw = true;

        let result = match msg {
            Msg::AppClose => {
                self.shutdown();
                None
            }
            Msg::ForceRedraw => None,
            Msg::ToggleHelpScreen => self.update_help(),
            Msg::ToggleSidebar => self.update_sidebar(),
            Msg::FocusNext => self.cycle_focus(true),
            Msg::FocusPrevious => self.cycle_focus(false),
            Msg::FocusAt { column, row } => self.focus_at(column, row),
            Msg::Navigate(page) => self.update_navigation(page),
            Msg::ThemeActivity(msg) => self.update_theme(msg),
            Msg::PageActivity(msg) => self.update_page(msg),
            Msg::PopupActivity(msg) => self.update_popup(msg),
            Msg::InputActivity(msg) => self.update_input(msg),
            Msg::Error(e) => {
                log::error!("Error received: {e}");
                self.update_popup(PopupActivityMsg::ShowError(e))
            }
        };

        if let Some(Msg::Error(e)) = result {
            log::error!("Error from message processing: {e}");
            if let Err(err) = self.mount_error_popup(&e) {
                // Nothing left to show it with
                log::error!("Failed to mount error popup: {err}");
            }
            None
        } else {
            result
        }
    }
}
