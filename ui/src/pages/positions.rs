use crate::components::common::{ComponentId, DisplayOptions, Msg};
use crate::components::hit_map::HitMap;
use crate::components::positions_table::PositionsTable;
use crate::components::search_input::SearchInput;
use crate::components::stat_card::StatCard;
use crate::components::state::ComponentStateMount;
use crate::components::tab_bar::TabBar;
use crate::error::{AppResult, ErrorReporter};
use crate::pages::{
    Page, PageComposition, PageLayout, PageState, replace_component, subscribe_all,
    view_component,
};
use portfolio::datasets;
use portfolio::model::filter_positions;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

const STAT_CARDS: usize = 4;
const TOOLBAR_HEIGHT: u16 = 3;
const SEARCH_WIDTH: u16 = 34;

/// Tab bar and search over the positions table, with open/closed summary
/// cards below.
pub struct PositionsPage;

impl PositionsPage {
    /// Rebuilds only the table, keeping the search input (and its cursor)
    /// untouched while the user types.
    pub fn remount_table(
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        state: &PageState,
        options: DisplayOptions,
    ) -> AppResult<()> {
        let positions = datasets::positions();
        let visible = filter_positions(&positions, state.positions_filter, &state.search);
        log::debug!(
            "Showing {} of {} positions (filter {:?}, query '{}')",
            visible.len(),
            positions.len(),
            state.positions_filter,
            state.search
        );

        replace_component(
            app,
            ComponentId::PositionsTable,
            Box::new(PositionsTable::new(
                &visible,
                state.positions_filter,
                &state.search,
                options,
            )),
            Vec::new(),
        )
    }
}

impl PageComposition for PositionsPage {
    fn page(&self) -> Page {
        Page::Positions
    }

    fn layout(&self) -> PageLayout {
        PageLayout::compact()
    }

    fn mount(
        &self,
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        state: &PageState,
        options: DisplayOptions,
        _reporter: &ErrorReporter,
    ) -> AppResult<()> {
        app.remount_with_state(
            ComponentId::PositionsTabs,
            TabBar::positions(state.positions_filter),
            subscribe_all(),
        )?;
        app.remount_with_state(
            ComponentId::PositionsSearch,
            SearchInput::new(state.search.as_str()),
            Vec::new(),
        )?;
        Self::remount_table(app, state, options)?;

        let positions = datasets::positions();
        for (index, entry) in datasets::positions_stats(&positions)
            .into_iter()
            .take(STAT_CARDS)
            .enumerate()
        {
            app.remount_with_state(
                ComponentId::StatCard(index),
                StatCard::new(entry, options),
                subscribe_all(),
            )?;
        }

        log::debug!("Positions page mounted");
        Ok(())
    }

    fn view(
        &self,
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        frame: &mut Frame,
        area: Rect,
        layout: PageLayout,
        hits: &mut HitMap,
    ) {
        let area = layout.inner(area);
        let [toolbar_area, table_area, cards_area] = Layout::vertical([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(layout.card_height),
        ])
        .spacing(layout.spacing)
        .areas(area);

        let [tabs_area, search_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH)])
                .areas(toolbar_area);
        // The tab row sits on the middle line of the toolbar
        let tabs_area = Rect::new(tabs_area.x, tabs_area.y + 1, tabs_area.width, 1)
            .intersection(tabs_area);

        view_component(app, frame, ComponentId::PositionsTabs, tabs_area, hits);
        view_component(app, frame, ComponentId::PositionsSearch, search_area, hits);
        view_component(app, frame, ComponentId::PositionsTable, table_area, hits);

        for (index, card_area) in layout
            .card_row(cards_area, STAT_CARDS)
            .into_iter()
            .enumerate()
        {
            view_component(app, frame, ComponentId::StatCard(index), card_area, hits);
        }
    }

    fn focus_order(&self) -> Vec<ComponentId> {
        let mut order = vec![
            ComponentId::PositionsTabs,
            ComponentId::PositionsSearch,
            ComponentId::PositionsTable,
        ];
        order.extend((0..STAT_CARDS).map(ComponentId::StatCard));
        order
    }

    fn components(&self) -> Vec<ComponentId> {
        self.focus_order()
    }
}
