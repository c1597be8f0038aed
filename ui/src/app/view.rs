use crate::app::model::Model;
use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Msg};
use crate::components::disclosure::Disclosure;
use crate::components::header::Header;
use crate::components::help_bar::HelpBar;
use crate::components::hit_map::HitMap;
use crate::components::sidebar::Sidebar;
use crate::error::{AppError, AppResult};
use crate::pages::{Page, view_component, view_dropdown, view_tooltips};
use crate::theme::ThemeContext;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::widgets::Block;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Application, Frame, NoUserEvent};

const HEADER_HEIGHT: u16 = 3;
const HELP_BAR_HEIGHT: u16 = 1;
const ERROR_POPUP_WIDTH: u16 = 64;
const ERROR_POPUP_HEIGHT: u16 = 12;
/// Entries of the account menu
const ACCOUNT_MENU_OPTIONS: usize = 3;

/// Screen regions of the layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub page: Rect,
    pub help_bar: Rect,
}

impl ShellLayout {
    pub fn new(area: Rect, sidebar: Disclosure) -> Self {
        let [main, help_bar] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(HELP_BAR_HEIGHT)])
                .areas(area);
        let [sidebar_area, content] = Layout::horizontal([
            Constraint::Length(Sidebar::width(sidebar)),
            Constraint::Min(0),
        ])
        .areas(main);
        let [header, page] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .areas(content);

        Self {
            sidebar: sidebar_area,
            header,
            page,
            help_bar,
        }
    }
}

/// What the shell needs to know to draw a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub page: Page,
    pub sidebar: Disclosure,
    pub focus: ComponentId,
    pub editing: bool,
}

/// Draw sidebar, header, the page and the help bar, then any popup on top.
/// `hits` is rebuilt in drawing order so later (upper) areas win clicks.
pub fn render_shell(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    frame: &mut Frame,
    state: &ShellState,
    hits: &mut HitMap,
) {
    let area = frame.area();
    let tokens = ThemeContext::tokens();
    frame.render_widget(
        Block::default().style(Style::default().bg(tokens.background())),
        area,
    );

    let layout = ShellLayout::new(area, state.sidebar);
    hits.clear();

    view_component(app, frame, ComponentId::Header, layout.header, hits);
    view_component(app, frame, ComponentId::Sidebar, layout.sidebar, hits);

    let composition = state.page.composition();
    composition.view(app, frame, layout.page, composition.layout(), hits);
    // Tooltips may spill over neighbouring panels
    view_tooltips(app, frame, &composition.components(), hits);

    // The account menu drops over the page, so it goes after it
    view_dropdown(
        app,
        frame,
        ComponentId::AccountMenu,
        Header::account_menu_area(layout.header),
        ACCOUNT_MENU_OPTIONS,
        hits,
    );

    HelpBar::new().view_with_active(frame, layout.help_bar, &state.focus, state.editing);

    if app.mounted(&ComponentId::HelpScreen) {
        app.view(&ComponentId::HelpScreen, frame, PopupLayout::large(area));
    }
    if app.mounted(&ComponentId::ErrorPopup) {
        let popup_area = PopupLayout::fixed(area, ERROR_POPUP_WIDTH, ERROR_POPUP_HEIGHT);
        app.view(&ComponentId::ErrorPopup, frame, popup_area);
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn shell_state(&self) -> ShellState {
        // The help bar describes whatever owns the keyboard
        let focus = self.modal().unwrap_or_else(|| self.focus.clone());
        ShellState {
            page: self.page,
            sidebar: self.sidebar,
            focus,
            editing: self.editing,
        }
    }

    pub fn view(&mut self) -> AppResult<()> {
        let state = self.shell_state();
        let app = &mut self.app;
        let hits = &mut self.hit_map;

        self.terminal
            .draw(|frame| render_shell(app, frame, &state, hits))
            .map_err(|e| AppError::Component(format!("Failed to draw frame: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_layout_expanded() {
        let layout = ShellLayout::new(Rect::new(0, 0, 120, 40), Disclosure::Open);

        assert_eq!(layout.sidebar, Rect::new(0, 0, 22, 39));
        assert_eq!(layout.header, Rect::new(22, 0, 98, 3));
        assert_eq!(layout.page, Rect::new(22, 3, 98, 36));
        assert_eq!(layout.help_bar, Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn test_collapsed_sidebar_widens_the_page() {
        let expanded = ShellLayout::new(Rect::new(0, 0, 120, 40), Disclosure::Open);
        let collapsed = ShellLayout::new(Rect::new(0, 0, 120, 40), Disclosure::Closed);

        assert_eq!(collapsed.sidebar.width, 6);
        assert_eq!(collapsed.page.width, expanded.page.width + 16);
    }
}
