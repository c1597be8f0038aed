use crate::app::model::Model;
use crate::components::common::Msg;
use crate::components::disclosure::DisclosureEvent;
use crate::pages::Page;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_navigation(&mut self, page: Page) -> Option<Msg> {
        if page == self.page {
            return None;
        }
        log::info!("Navigating from {} to {}", self.page, page);

        let focus_was_on_page = self
            .page
            .composition()
            .components()
            .contains(&self.focus);

        self.unmount_page();
        self.page = page;

        if let Err(e) = self.mount_page() {
            return Some(Msg::Error(e));
        }
        if let Err(e) = self.remount_header().and_then(|_| self.remount_sidebar()) {
            return Some(Msg::Error(e));
        }

        if focus_was_on_page {
            if let Some(first) = page.composition().focus_order().into_iter().next() {
                self.focus = first;
            }
        }
        self.restore_focus().err().map(Msg::Error)
    }

    pub fn update_sidebar(&mut self) -> Option<Msg> {
        self.sidebar = self.sidebar.apply(DisclosureEvent::Trigger);
        log::debug!("Sidebar is now {:?}", self.sidebar);

        if let Err(e) = self.remount_sidebar() {
            return Some(Msg::Error(e));
        }
        self.restore_focus().err().map(Msg::Error)
    }
}
