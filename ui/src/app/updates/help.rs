use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_help(&mut self) -> Option<Msg> {
        let result = if self.app.mounted(&ComponentId::HelpScreen) {
            log::debug!("Closing help screen");
            self.unmount_help_screen()
        } else {
            log::debug!("Opening help screen");
            self.mount_help_screen()
        };

        if let Err(e) = result {
            self.error_reporter
                .report_mount_error("HelpScreen", "toggle", &e);
        }
        self.set_redraw(true);
        None
    }
}
