use crate::components::common::{ComponentId, DisplayOptions, Msg, PageActivityMsg};
use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::hit_map::HitMap;
use crate::components::market_table::MarketTable;
use crate::components::price_chart::PriceChart;
use crate::components::stat_card::StatCard;
use crate::components::state::ComponentStateMount;
use crate::components::transaction_list::TransactionList;
use crate::error::{AppResult, ErrorReporter};
use crate::pages::{
    Page, PageComposition, PageLayout, PageState, replace_component, subscribe_all,
    view_component, view_dropdown,
};
use portfolio::datasets;
use portfolio::model::Timeframe;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

const STAT_CARDS: usize = 4;
const TIMEFRAME_WIDTH: u16 = 12;
const TRANSACTIONS_HEIGHT: u16 = 9;

/// Headline cards, the portfolio value chart with its timeframe selector,
/// market movers and the latest transactions.
pub struct DashboardPage;

impl DashboardPage {
    /// Rebuilds the value chart for the selected timeframe.
    pub fn remount_chart(
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        state: &PageState,
        options: DisplayOptions,
        reporter: &ErrorReporter,
    ) -> AppResult<()> {
        let chart = match datasets::portfolio_value_chart(state.timeframe, options.currency) {
            Ok(chart) => PriceChart::new(chart),
            Err(e) => {
                reporter.report_chart_error("portfolio value", &e);
                PriceChart::empty()
            }
        };
        replace_component(app, ComponentId::PriceChart, Box::new(chart), Vec::new())
    }

    fn timeframe_dropdown(selected: Timeframe) -> Dropdown {
        let options = Timeframe::ALL
            .into_iter()
            .map(|timeframe| {
                DropdownOption::new(
                    timeframe.label(),
                    Msg::PageActivity(PageActivityMsg::TimeframeSelected(timeframe)),
                )
            })
            .collect();
        let index = Timeframe::ALL
            .iter()
            .position(|timeframe| *timeframe == selected)
            .unwrap_or(0);
        Dropdown::new(options).with_selected(index)
    }
}

impl PageComposition for DashboardPage {
    fn page(&self) -> Page {
        Page::Dashboard
    }

    fn layout(&self) -> PageLayout {
        PageLayout::spacious()
    }

    fn mount(
        &self,
        app: &mut Application<ComponentId, Msg, NoUserEvent>,
        state: &PageState,
        options: DisplayOptions,
        reporter: &ErrorReporter,
    ) -> AppResult<()> {
        for (index, entry) in datasets::dashboard_stats()
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

        Self::remount_chart(app, state, options, reporter)?;

        app.remount_with_state(
            ComponentId::TimeframeDropdown,
            Self::timeframe_dropdown(state.timeframe),
            subscribe_all(),
        )?;
        replace_component(
            app,
            ComponentId::MarketTable,
            Box::new(MarketTable::new(&datasets::market_movers(), options)),
            Vec::new(),
        )?;
        replace_component(
            app,
            ComponentId::TransactionList,
            Box::new(TransactionList::new(
                &datasets::recent_transactions(),
                options,
            )),
            Vec::new(),
        )?;

        log::debug!("Dashboard mounted with timeframe {}", state.timeframe);
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
        let [cards_area, middle_area, transactions_area] = Layout::vertical([
            Constraint::Length(layout.card_height),
            Constraint::Min(10),
            Constraint::Length(TRANSACTIONS_HEIGHT),
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

        let [chart_column, market_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .spacing(layout.spacing)
                .areas(middle_area);
        let [toolbar_area, chart_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(chart_column);
        let [_, timeframe_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(TIMEFRAME_WIDTH)])
                .areas(toolbar_area);

        view_component(app, frame, ComponentId::PriceChart, chart_area, hits);
        view_component(app, frame, ComponentId::MarketTable, market_area, hits);
        view_component(
            app,
            frame,
            ComponentId::TransactionList,
            transactions_area,
            hits,
        );

        // Last, so the open menu covers the panels below it
        view_dropdown(
            app,
            frame,
            ComponentId::TimeframeDropdown,
            timeframe_area,
            Timeframe::ALL.len(),
            hits,
        );
    }

    fn focus_order(&self) -> Vec<ComponentId> {
        let mut order: Vec<ComponentId> = (0..STAT_CARDS).map(ComponentId::StatCard).collect();
        order.extend([
            ComponentId::TimeframeDropdown,
            ComponentId::MarketTable,
            ComponentId::TransactionList,
        ]);
        order
    }

    fn components(&self) -> Vec<ComponentId> {
        let mut components = self.focus_order();
        components.push(ComponentId::PriceChart);
        components
    }
}
