use super::Model;
use crate::components::common::ComponentId;
use crate::components::error_popup::ErrorPopup;
use crate::components::help_screen::HelpScreen;
use crate::components::state::ComponentStateMount;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// The popup that currently owns the keyboard, if any. The error popup
    /// stacks above the help screen.
    pub fn modal(&self) -> Option<ComponentId> {
        [ComponentId::ErrorPopup, ComponentId::HelpScreen]
            .into_iter()
            .find(|id| self.app.mounted(id))
    }

    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(error),
            Vec::default(),
        )?;
        self.activate_modal(ComponentId::ErrorPopup)
    }

    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::warning(message),
            Vec::default(),
        )?;
        self.activate_modal(ComponentId::ErrorPopup)
    }

    /// Unmount error popup and return focus to previous component
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        self.app
            .umount(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.restore_focus()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn mount_help_screen(&mut self) -> AppResult<()> {
        self.app
            .remount_with_state(ComponentId::HelpScreen, HelpScreen::new(), Vec::default())?;

        // An error popup already on screen keeps the keyboard
        if self.app.mounted(&ComponentId::ErrorPopup) {
            self.set_redraw(true);
            return Ok(());
        }
        self.activate_modal(ComponentId::HelpScreen)
    }

    pub fn unmount_help_screen(&mut self) -> AppResult<()> {
        self.app
            .umount(&ComponentId::HelpScreen)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.restore_focus()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Give the keyboard to a popup. Editing is suspended so Esc reaches the
    /// popup only; it resumes when focus returns to the search input.
    fn activate_modal(&mut self, id: ComponentId) -> AppResult<()> {
        self.app
            .active(&id)
            .map_err(|e| AppError::Component(e.to_string()))?;

        if self.editing {
            self.editing = false;
            self.remount_key_watcher()?;
        }

        self.set_redraw(true);
        Ok(())
    }
}
