use crate::app::model::Model;
use crate::components::common::{ComponentId, InputActivityMsg, Msg};
use crate::error::{AppError, AppResult};
use crate::pages::Page;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Tab order: sidebar, the page's components, then the account menu.
    pub fn focus_order(&self) -> Vec<ComponentId> {
        let mut order = vec![ComponentId::Sidebar];
        order.extend(self.page.composition().focus_order());
        order.push(ComponentId::AccountMenu);
        order
    }

    /// Move the keyboard to `id`. Focusing the search input starts editing,
    /// focusing anything else ends it.
    pub fn set_focus(&mut self, id: ComponentId) -> AppResult<()> {
        self.app
            .active(&id)
            .map_err(|e| AppError::Component(e.to_string()))?;
        log::debug!("Focus moved to {}", id.name());

        let editing = id == ComponentId::PositionsSearch;
        self.focus = id;
        if editing != self.editing {
            self.editing = editing;
            self.remount_key_watcher()?;
        }

        self.set_redraw(true);
        Ok(())
    }

    /// Re-activate the modal popup, or the last focused component when it
    /// still exists, or the first one in Tab order.
    pub fn restore_focus(&mut self) -> AppResult<()> {
        if let Some(modal) = self.modal() {
            return self
                .app
                .active(&modal)
                .map_err(|e| AppError::Component(e.to_string()));
        }

        let order = self.focus_order();
        let target = if order.contains(&self.focus) && self.app.mounted(&self.focus) {
            self.focus.clone()
        } else {
            order[0].clone()
        };
        self.set_focus(target)
    }

    pub fn cycle_focus(&mut self, forward: bool) -> Option<Msg> {
        if self.modal().is_some() {
            return None;
        }

        let order = self.focus_order();
        let len = order.len();
        let next = match order.iter().position(|id| *id == self.focus) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };

        let target = order[next].clone();
        if let Err(e) = self.set_focus(target.clone()) {
            self.error_reporter
                .report_activation_error(&target.name(), &e);
        }
        None
    }

    /// Focus the topmost focusable component drawn under the pointer.
    pub fn focus_at(&mut self, column: u16, row: u16) -> Option<Msg> {
        if self.modal().is_some() {
            return None;
        }

        let target = self.hit_map.component_at(column, row)?.clone();
        if target == self.focus || !self.focus_order().contains(&target) {
            return None;
        }

        if let Err(e) = self.set_focus(target.clone()) {
            self.error_reporter
                .report_activation_error(&target.name(), &e);
        }
        None
    }

    pub fn update_input(&mut self, msg: InputActivityMsg) -> Option<Msg> {
        match msg {
            InputActivityMsg::EditingStarted => {
                if self.modal().is_some() {
                    return None;
                }
                // The search box lives on the positions page
                if self.page != Page::Positions {
                    if let Some(msg) = self.update_navigation(Page::Positions) {
                        return Some(msg);
                    }
                }
                self.set_focus(ComponentId::PositionsSearch)
                    .err()
                    .map(Msg::Error)
            }
            InputActivityMsg::EditingStopped => {
                if !self.editing {
                    return None;
                }
                self.cycle_focus(true)
            }
        }
    }
}
