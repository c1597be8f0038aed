use crate::components::common::{DisplayOptions, Msg};
use crate::components::data_table::{CellTone, DataTable, TableCell};
use portfolio::format::{format_percent_change, format_price};
use portfolio::model::{Position, PositionFilter, PositionSide, PositionStatus};
use portfolio::TrendDirection;
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

const HEADERS: [&str; 9] = [
    "Market", "Side", "Size", "Entry", "Mark", "Lev", "Margin", "P&L", "ROE",
];
const WIDTHS: [u16; 9] = [10, 6, 10, 11, 11, 4, 12, 12, 9];

/// Derivatives positions already filtered by tab and search query.
#[derive(MockComponent)]
pub struct PositionsTable {
    component: DataTable,
}

impl PositionsTable {
    pub fn new(
        positions: &[&Position],
        filter: PositionFilter,
        query: &str,
        options: DisplayOptions,
    ) -> Self {
        let rows = positions
            .iter()
            .map(|position| Self::row(position, &options))
            .collect();

        let title = if query.trim().is_empty() {
            format!("{} Positions ({})", filter.label(), positions.len())
        } else {
            format!(
                "{} Positions matching \"{}\" ({})",
                filter.label(),
                query.trim(),
                positions.len()
            )
        };

        Self {
            component: DataTable::new(title, &HEADERS, &WIDTHS, rows)
                .with_empty_message("No positions match the current filter"),
        }
    }

    fn row(position: &Position, options: &DisplayOptions) -> Vec<TableCell> {
        let side_tone = match position.side {
            PositionSide::Long => CellTone::Trend(TrendDirection::Up),
            PositionSide::Short => CellTone::Trend(TrendDirection::Down),
        };
        let market_tone = match position.status {
            PositionStatus::Open => CellTone::Primary,
            PositionStatus::Closed => CellTone::Muted,
        };
        let pnl = position.unrealized_pnl();
        let roe = position.roe_percent();

        vec![
            TableCell::new(position.symbol.clone(), market_tone).bold(),
            TableCell::new(position.side.to_string(), side_tone),
            TableCell::primary(format!("{}", position.size)),
            TableCell::new(format_price(position.entry_price, options.currency), CellTone::Secondary),
            TableCell::primary(format_price(position.mark_price, options.currency)),
            TableCell::muted(format!("{}x", position.leverage)),
            TableCell::new(options.money(position.margin()), CellTone::Secondary),
            TableCell::new(options.signed_money(pnl), CellTone::signed(pnl)),
            TableCell::new(format_percent_change(roe).text, CellTone::signed(roe)),
        ]
    }
}

impl Component<Msg, NoUserEvent> for PositionsTable {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        self.component.handle_navigation(&ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{buffer_text, init_theme, render_component};
    use portfolio::datasets::positions;
    use portfolio::model::filter_positions;

    fn short_eth() -> Position {
        Position {
            id: 2,
            symbol: "ETH-PERP".to_string(),
            side: PositionSide::Short,
            size: 4.0,
            entry_price: 3_600.0,
            mark_price: 3_500.0,
            leverage: 5.0,
            status: PositionStatus::Open,
        }
    }

    #[test]
    fn test_short_row_profits_when_mark_drops() {
        let row = PositionsTable::row(&short_eth(), &DisplayOptions::default());

        assert_eq!(row[1].text, "Short");
        assert_eq!(row[5].text, "5x");
        assert_eq!(row[6].text, "$2,880.00");
        assert_eq!(row[7].text, "+$400.00");
        assert_eq!(row[8].text, "+13.89%");
    }

    #[test]
    fn test_filtered_table_renders_only_matches() {
        init_theme();
        let data = positions();
        let visible = filter_positions(&data, PositionFilter::Closed, "arb");
        let mut table =
            PositionsTable::new(&visible, PositionFilter::Closed, "arb", DisplayOptions::default());

        let text = buffer_text(&render_component(&mut table, 110, 8));

        assert!(text.contains("ARB-PERP"));
        assert!(!text.contains("SOL-PERP"));
        assert!(text.contains("Closed Positions matching \"arb\" (1)"));
    }
}
