//! # Pages
//!
//! The closed set of screens the shell can show. Each page is a fixed grid of
//! components fed from `portfolio::datasets`; pages differ only in what they
//! mount and in their [`PageLayout`] parameters.
//!
//! Selections that have to survive a remount (chart timeframe, positions tab,
//! search query) live in [`PageState`], owned by the model.

mod dashboard;
mod portfolio;
mod positions;

pub use self::dashboard::DashboardPage;
pub use self::portfolio::PortfolioPage;
pub use self::positions::PositionsPage;

use crate::components::common::{ComponentId, DisplayOptions, Msg};
use crate::components::dropdown::{self, Dropdown};
use crate::components::hit_map::HitMap;
use crate::components::stat_card;
use crate::config::KeyBindingsConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use ::portfolio::model::{PositionFilter, Timeframe};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tuirealm::ratatui::layout::{Constraint, Flex, Layout, Rect};
use tuirealm::{
    AttrValue, Application, Component, Frame, NoUserEvent, Sub, SubClause, SubEventClause,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Portfolio,
    Positions,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Portfolio, Page::Positions];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Portfolio => "Portfolio",
            Page::Positions => "Positions",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Portfolio => "portfolio",
            Page::Positions => "positions",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Portfolio => "◔",
            Page::Positions => "⇅",
        }
    }

    /// Key that navigates to this page.
    pub fn shortcut(&self, keys: &KeyBindingsConfig) -> char {
        match self {
            Page::Dashboard => keys.dashboard(),
            Page::Portfolio => keys.portfolio(),
            Page::Positions => keys.positions(),
        }
    }

    /// The composition that mounts and draws this page.
    pub fn composition(&self) -> &'static dyn PageComposition {
        match self {
            Page::Dashboard => &DashboardPage,
            Page::Portfolio => &PortfolioPage,
            Page::Positions => &PositionsPage,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| page.name() == wanted)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "Unknown page '{s}'. Expected dashboard, portfolio or positions"
                ))
            })
    }
}

/// Model-owned selections handed to a page on every (re)mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub timeframe: Timeframe,
    pub positions_filter: PositionFilter,
    pub search: String,
}

/// Spacing parameters of a page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Empty cells around the whole page.
    pub margin: u16,
    /// Gap between panels.
    pub spacing: u16,
    /// Inner horizontal padding of text panels.
    pub padding: u16,
    pub card_height: u16,
}

impl PageLayout {
    pub fn spacious() -> Self {
        Self {
            margin: 1,
            spacing: 1,
            padding: 1,
            card_height: 5,
        }
    }

    pub fn compact() -> Self {
        Self {
            margin: 0,
            spacing: 0,
            padding: 0,
            card_height: 4,
        }
    }

    /// The page area with the margin removed.
    pub fn inner(&self, area: Rect) -> Rect {
        let margin = self.margin.min(area.width / 2).min(area.height / 2);
        Rect::new(
            area.x + margin,
            area.y + margin,
            area.width - margin * 2,
            area.height - margin * 2,
        )
    }

    /// Splits a row into `count` equal-width card slots.
    pub fn card_row(&self, area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
        Layout::horizontal(constraints)
            .spacing(self.spacing)
            .flex(Flex::Start)
            .split(area)
            .to_vec()
    }
}

/// A page as the shell sees it: something that can mount its components,
/// draw them into the content area and list what Tab should visit.
pub trait PageComposition {
    fn page(&self) -> Page;

    fn layout(&self) -> PageLayout;

    /// Mounts (or remounts) every component of the page. Chart options that
    /// fail to build are reported and leave an empty chart behind.
    fn mount(
        &self,
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        state: &PageState,
        options: DisplayOptions,
        reporter: &ErrorReporter,
    ) -> AppResult<()>;

    /// Draws the page and registers each component's area in `hits`.
    fn view(
        &self,
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        frame: &mut Frame,
        area: Rect,
        layout: PageLayout,
        hits: &mut HitMap,
    );

    /// Focusable components in Tab order.
    fn focus_order(&self) -> Vec<ComponentId>;

    /// Everything this page mounts, focusable or not.
    fn components(&self) -> Vec<ComponentId>;

    fn title(&self) -> &'static str {
        self.page().title()
    }
}

/// Subscription for components that react to the pointer or ticks while
/// another component has focus.
pub(crate) fn subscribe_all() -> Vec<Sub<ComponentId, NoUserEvent>> {
    vec![Sub::new(SubEventClause::Any, SubClause::Always)]
}

/// Mounts `component` under `id`, replacing whatever was mounted there.
pub(crate) fn replace_component(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    id: ComponentId,
    component: Box<dyn Component<Msg, NoUserEvent>>,
    subs: Vec<Sub<ComponentId, NoUserEvent>>,
) -> AppResult<()> {
    if app.mounted(&id) {
        app.remount(id, component, subs)?;
    } else {
        app.mount(id, component, subs)?;
    }
    Ok(())
}

/// Draws a dropdown trigger and, when expanded, registers its menu as the
/// topmost clickable area. Call it after every panel the menu may cover.
pub(crate) fn view_dropdown(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    frame: &mut Frame,
    id: ComponentId,
    trigger: Rect,
    option_count: usize,
    hits: &mut HitMap,
) {
    let bounds = frame.area();
    view_component(app, frame, id.clone(), trigger, hits);

    if let Ok(Some(AttrValue::Flag(true))) = app.query(&id, dropdown::EXPANDED) {
        hits.register(id, Dropdown::menu_area(trigger, option_count, bounds));
    }
}

/// Draws the visible stat card tooltips of `components` over everything
/// drawn so far. Each tooltip anchors to the area its card registered.
pub(crate) fn view_tooltips(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    frame: &mut Frame,
    components: &[ComponentId],
    hits: &HitMap,
) {
    for id in components {
        if !matches!(id, ComponentId::StatCard(_)) {
            continue;
        }
        let Some(area) = hits.area_of(id) else {
            continue;
        };
        if let Ok(Some(AttrValue::Flag(true))) = app.query(id, stat_card::TOOLTIP) {
            if let Err(e) = app.attr(id, stat_card::TOOLTIP, AttrValue::Flag(true)) {
                log::warn!("Failed to request tooltip of {id:?}: {e}");
                continue;
            }
            app.view(id, frame, area);
        }
    }
}

/// Draws `id` into `area` and makes it clickable.
pub(crate) fn view_component(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    frame: &mut Frame,
    id: ComponentId,
    area: Rect,
    hits: &mut HitMap,
) {
    app.view(&id, frame, area);
    hits.register(id, area);
}
