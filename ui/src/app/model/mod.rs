use crate::components::common::{ComponentId, DisplayOptions, Msg};
use crate::components::disclosure::Disclosure;
use crate::components::hit_map::HitMap;
use crate::error::ErrorReporter;
use crate::pages::{Page, PageState};
use std::sync::mpsc::{Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod initialization;
mod popup_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    pub page: Page,
    // Selections that outlive page remounts
    pub page_state: PageState,
    pub sidebar: Disclosure,
    pub display: DisplayOptions,

    /// Component that owns the keyboard outside of modal popups
    pub focus: ComponentId,
    /// True while the search input has focus; global keys are suspended
    pub editing: bool,
    /// Clickable areas of the last frame
    pub hit_map: HitMap,

    pub error_reporter: ErrorReporter,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Theme observers and the error reporter write to this channel
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.quit = quit;
    }

    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");
        self.quit = true;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
