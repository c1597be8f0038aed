use crate::components::common::{DisplayOptions, Msg};
use crate::components::data_table::{CellTone, DataTable, TableCell};
use portfolio::format::{format_percent_change, format_price, format_quantity};
use portfolio::model::Holding;
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

const HEADERS: [&str; 7] = ["Asset", "Quantity", "Avg Cost", "Price", "Value", "P&L", "P&L %"];
const WIDTHS: [u16; 7] = [14, 16, 12, 12, 14, 14, 9];

#[derive(MockComponent)]
pub struct HoldingsTable {
    component: DataTable,
}

impl HoldingsTable {
    pub fn new(holdings: &[Holding], options: DisplayOptions) -> Self {
        let rows = holdings
            .iter()
            .map(|holding| Self::row(holding, &options))
            .collect();

        Self {
            component: DataTable::new("Holdings", &HEADERS, &WIDTHS, rows)
                .with_empty_message("No holdings yet"),
        }
    }

    fn row(holding: &Holding, options: &DisplayOptions) -> Vec<TableCell> {
        let pnl = holding.unrealized_pnl();
        vec![
            TableCell::primary(format!("{} {}", holding.symbol, holding.name)).bold(),
            TableCell::primary(format_quantity(holding.quantity, &holding.symbol)),
            TableCell::new(
                format_price(holding.average_cost, options.currency),
                CellTone::Secondary,
            ),
            TableCell::primary(format_price(holding.price, options.currency)),
            TableCell::primary(options.money(holding.value())).bold(),
            TableCell::new(options.signed_money(pnl), CellTone::signed(pnl)),
            TableCell::new(
                format_percent_change(holding.pnl_percent()).text,
                CellTone::signed(holding.pnl_percent()),
            ),
        ]
    }
}

impl Component<Msg, NoUserEvent> for HoldingsTable {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        self.component.handle_navigation(&ev)
    }
}
