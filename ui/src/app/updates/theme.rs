use crate::app::model::Model;
use crate::components::common::{Msg, ThemeActivityMsg};
use crate::theme::{ThemeContext, ThemeMode};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::ToggleRequested => {
                // The store notifies its observers, which queue `Changed`
                let mode = ThemeContext::toggle();
                log::debug!("Theme toggle requested, now {mode}");
                None
            }
            ThemeActivityMsg::Changed(mode) => self.handle_theme_changed(mode),
        }
    }

    fn handle_theme_changed(&mut self, mode: ThemeMode) -> Option<Msg> {
        log::info!("Applying {mode} theme");

        if let Err(e) = self.remount_all() {
            self.error_reporter.report_theme_error("apply_theme", &e);
            return None;
        }

        self.set_redraw(true);
        None
    }
}
