use super::Model;
use crate::components::common::{ComponentId, DisplayOptions, Msg};
use crate::components::disclosure::Disclosure;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::header::Header;
use crate::components::hit_map::HitMap;
use crate::components::sidebar::Sidebar;
use crate::components::state::ComponentStateMount;
use crate::config::{self, AppConfig};
use crate::error::{AppError, AppResult, ErrorReporter};
use crate::pages::{Page, PageState, subscribe_all};
use crate::theme::{ChannelObserver, ThemeContext};
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(config: &AppConfig) -> Application<ComponentId, Msg, NoUserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        )
    }

    /// Build the model around an initialised terminal. The theme context
    /// must already be installed.
    pub fn with_terminal(terminal: TerminalBridge<T>, start_page: Option<Page>) -> AppResult<Self> {
        let config = config::get_config_or_default();
        let (tx_to_main, rx_to_main) = mpsc::channel();

        // Create error reporter for enhanced error handling
        let error_reporter = ErrorReporter::new(tx_to_main.clone());
        ThemeContext::subscribe(Box::new(ChannelObserver::new(tx_to_main.clone())));

        let page = start_page.unwrap_or_else(|| config.start_page());
        let sidebar = if config.sidebar_collapsed() {
            Disclosure::Closed
        } else {
            Disclosure::Open
        };
        let focus = page
            .composition()
            .focus_order()
            .into_iter()
            .next()
            .unwrap_or(ComponentId::Sidebar);

        let mut model = Self {
            app: Self::init_app(config),
            quit: false,
            redraw: true,
            terminal,
            tx_to_main,
            rx_to_main,
            page,
            page_state: PageState::default(),
            sidebar,
            display: DisplayOptions::from_config(config),
            focus,
            editing: false,
            hit_map: HitMap::new(),
            error_reporter,
        };

        model.mount_shell()?;
        model.mount_page()?;
        model.restore_focus()?;

        log::info!("Model initialized on the {} page", model.page);
        Ok(model)
    }

    /// Mount (or remount) the parts of the screen that never change with
    /// the page.
    pub fn mount_shell(&mut self) -> AppResult<()> {
        self.remount_key_watcher()?;
        self.remount_header()?;
        self.remount_sidebar()?;
        self.app.remount_with_state(
            ComponentId::AccountMenu,
            Header::account_menu(),
            subscribe_all(),
        )?;
        Ok(())
    }

    pub fn remount_key_watcher(&mut self) -> AppResult<()> {
        self.app
            .remount_with_state(
                ComponentId::GlobalKeyWatcher,
                GlobalKeyWatcher::new(self.editing),
                subscribe_all(),
            )
            .map_err(|e| {
                self.error_reporter.report_key_watcher_error(&e);
                e
            })
    }

    pub fn remount_header(&mut self) -> AppResult<()> {
        self.app
            .remount_with_state(ComponentId::Header, Header::new(self.page), subscribe_all())
    }

    pub fn remount_sidebar(&mut self) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::Sidebar,
            Sidebar::new(self.page, self.sidebar),
            subscribe_all(),
        )
    }

    /// Mount every component of the current page from the page state.
    pub fn mount_page(&mut self) -> AppResult<()> {
        self.page.composition().mount(
            &mut self.app,
            &self.page_state,
            self.display,
            &self.error_reporter,
        )
    }

    /// Unmount the components of the current page that are mounted.
    pub fn unmount_page(&mut self) {
        for id in self.page.composition().components() {
            if self.app.mounted(&id) {
                if let Err(e) = self.app.umount(&id) {
                    self.error_reporter
                        .report_mount_error(&id.name(), "unmount", &e);
                }
            }
        }
    }

    /// Remount the shell and the current page so every component draws
    /// with fresh state, then put focus back where it was.
    pub fn remount_all(&mut self) -> AppResult<()> {
        self.mount_shell()?;
        self.mount_page()?;
        self.restore_focus()
    }
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(start_page: Option<Page>) -> AppResult<Self> {
        let terminal =
            TerminalBridge::init_crossterm().map_err(|e| AppError::Component(e.to_string()))?;
        Self::with_terminal(terminal, start_page)
    }
}
