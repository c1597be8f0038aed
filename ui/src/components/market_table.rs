use crate::components::change_badge::ChangeBadge;
use crate::components::common::{DisplayOptions, Msg};
use crate::components::data_table::{CellTone, DataTable, TableCell};
use portfolio::CurrencyFormat;
use portfolio::format::{format_currency, format_price};
use portfolio::model::MarketTicker;
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

const HEADERS: [&str; 4] = ["Asset", "Price", "24h", "Volume"];
const WIDTHS: [u16; 4] = [16, 12, 10, 10];

/// Top movers of the day, sorted by the dataset.
#[derive(MockComponent)]
pub struct MarketTable {
    component: DataTable,
}

impl MarketTable {
    pub fn new(tickers: &[MarketTicker], options: DisplayOptions) -> Self {
        let rows = tickers
            .iter()
            .map(|ticker| Self::row(ticker, &options))
            .collect();

        Self {
            component: DataTable::new("Market Movers", &HEADERS, &WIDTHS, rows),
        }
    }

    fn row(ticker: &MarketTicker, options: &DisplayOptions) -> Vec<TableCell> {
        let badge = ChangeBadge::new(ticker.change_24h);
        vec![
            TableCell::primary(format!("{} {}", ticker.symbol, ticker.name)).bold(),
            TableCell::primary(format_price(ticker.price, options.currency)),
            TableCell::new(badge.text(), CellTone::Trend(badge.direction())),
            TableCell::muted(format_currency(
                ticker.volume_24h,
                options.currency,
                CurrencyFormat::compact(),
            )),
        ]
    }
}

impl Component<Msg, NoUserEvent> for MarketTable {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        self.component.handle_navigation(&ev)
    }
}
