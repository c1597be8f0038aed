use crate::components::allocation_chart::AllocationChart;
use crate::components::common::{ComponentId, DisplayOptions, Msg};
use crate::components::hit_map::HitMap;
use crate::components::holdings_table::HoldingsTable;
use crate::components::stat_card::StatCard;
use crate::components::state::ComponentStateMount;
use crate::error::{AppResult, ErrorReporter};
use crate::pages::{
    Page, PageComposition, PageLayout, PageState, replace_component, subscribe_all,
    view_component,
};
use portfolio::datasets;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

const STAT_CARDS: usize = 4;

/// Summary cards over the holdings table and the allocation chart.
pub struct PortfolioPage;

impl PageComposition for PortfolioPage {
    fn page(&self) -> Page {
        Page::Portfolio
    }

    fn layout(&self) -> PageLayout {
        PageLayout::compact()
    }

    fn mount(
        &self,
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        _state: &PageState,
        options: DisplayOptions,
        reporter: &ErrorReporter,
    ) -> AppResult<()> {
        for (index, entry) in datasets::portfolio_stats()
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

        replace_component(
            app,
            ComponentId::HoldingsTable,
            Box::new(HoldingsTable::new(&datasets::holdings(), options)),
            Vec::new(),
        )?;

        let chart = match datasets::allocation_chart() {
            Ok(chart) => AllocationChart::new(chart),
            Err(e) => {
                reporter.report_chart_error("allocation", &e);
                AllocationChart::empty()
            }
        };
        replace_component(app, ComponentId::AllocationChart, Box::new(chart), Vec::new())?;

        log::debug!("Portfolio page mounted");
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
        let [cards_area, body_area] = Layout::vertical([
            Constraint::Length(layout.card_height),
            Constraint::Min(0),
        ])
        .spacing(layout.spacing)
        .areas(area);

        for (index, card_area) in layout
            .card_row(cards_area, STAT_CARDS)
            .into_iter()
            .enumerate()
        {
            view_component(app, frame, ComponentId::StatCard(index), card_area, hits);
        }

        let [holdings_area, allocation_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .spacing(layout.spacing)
                .areas(body_area);
        view_component(app, frame, ComponentId::HoldingsTable, holdings_area, hits);
        view_component(app, frame, ComponentId::AllocationChart, allocation_area, hits);
    }

    fn focus_order(&self) -> Vec<ComponentId> {
        let mut order: Vec<ComponentId> = (0..STAT_CARDS).map(ComponentId::StatCard).collect();
        order.push(ComponentId::HoldingsTable);
        order
    }

    fn components(&self) -> Vec<ComponentId> {
        let mut components = self.focus_order();
        components.push(ComponentId::AllocationChart);
        components
    }
}
