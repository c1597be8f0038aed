//! Static data rendered by the pages.
//!
//! Every function returns a fresh owned value so pages can remount without
//! sharing state. Numbers are illustrative; nothing here is fetched.

use crate::chart::{ChartBuilder, ChartOptions, SeriesColor, ValueFormat};
use crate::errors::PortfolioResult;
use crate::format::CurrencyCode;
use crate::model::{
    AccentColor, Holding, MarketTicker, Position, PositionSide, PositionStatus, PricePoint,
    StatEntry, StatIcon, StatUnit, Timeframe, Transaction, TransactionKind, allocation,
};

/// 2024-06-01 12:00:00 UTC, the reference "now" of the sample data.
pub const REFERENCE_TIMESTAMP: i64 = 1_717_243_200;

const HOUR: i64 = 3_600;
const DAY: i64 = 24 * HOUR;

/// The four headline cards of the dashboard.
pub fn dashboard_stats() -> Vec<StatEntry> {
    vec![
        StatEntry::new(
            "Total Balance",
            124_563.82,
            12.5,
            StatIcon::Wallet,
            AccentColor::Blue,
        )
        .with_detail("Spot holdings plus open margin"),
        StatEntry::new(
            "24h Profit",
            3_842.17,
            4.3,
            StatIcon::TrendingUp,
            AccentColor::Green,
        )
        .with_detail("Realized and unrealized since 00:00 UTC"),
        StatEntry::new(
            "Open Positions",
            12.0,
            -8.3,
            StatIcon::Layers,
            AccentColor::Purple,
        )
        .with_unit(StatUnit::Count)
        .with_detail("Perpetual futures across 5 markets"),
        StatEntry::new("Win Rate", 68.4, 2.1, StatIcon::Target, AccentColor::Orange)
            .with_unit(StatUnit::Percent)
            .with_detail("Closed trades over the last 30 days"),
    ]
}

pub fn holdings() -> Vec<Holding> {
    vec![
        holding("BTC", "Bitcoin", 1.2453, 42_180.0, 67_432.15, 2.34),
        holding("ETH", "Ethereum", 14.82, 2_410.5, 3_512.8, -1.27),
        holding("SOL", "Solana", 152.4, 98.2, 168.45, 5.82),
        holding("LINK", "Chainlink", 820.0, 14.1, 17.92, -0.45),
        holding("ADA", "Cardano", 12_500.0, 0.52, 0.4573, -3.12),
    ]
}

/// Cards shown above the holdings table, derived from [`holdings`].
pub fn portfolio_stats() -> Vec<StatEntry> {
    let holdings = holdings();
    let summary = crate::model::PortfolioSummary::from_holdings(&holdings);
    let best = holdings
        .iter()
        .max_by(|a, b| a.pnl_percent().total_cmp(&b.pnl_percent()));

    let mut stats = vec![
        StatEntry::new(
            "Portfolio Value",
            summary.total_value,
            summary.change_24h,
            StatIcon::Wallet,
            AccentColor::Blue,
        ),
        StatEntry::new(
            "Unrealized P&L",
            summary.unrealized_pnl,
            summary.pnl_percent,
            StatIcon::TrendingUp,
            AccentColor::Green,
        )
        .with_detail(format!("Cost basis {:.2}", summary.total_cost)),
        StatEntry::new(
            "Assets",
            holdings.len() as f64,
            0.0,
            StatIcon::Layers,
            AccentColor::Purple,
        )
        .with_unit(StatUnit::Count),
    ];

    if let Some(best) = best {
        stats.push(
            StatEntry::new(
                "Best Performer",
                best.pnl_percent(),
                best.change_24h,
                StatIcon::Target,
                AccentColor::Cyan,
            )
            .with_unit(StatUnit::PercentChange)
            .with_detail(format!("{} ({})", best.name, best.symbol)),
        );
    }
    stats
}

pub fn positions() -> Vec<Position> {
    vec![
        position(1, "BTC-PERP", PositionSide::Long, 0.5, 64_250.0, 67_432.15, 10.0, PositionStatus::Open),
        position(2, "ETH-PERP", PositionSide::Short, 4.0, 3_620.0, 3_512.8, 5.0, PositionStatus::Open),
        position(3, "SOL-PERP", PositionSide::Long, 60.0, 172.3, 168.45, 3.0, PositionStatus::Open),
        position(4, "DOGE-PERP", PositionSide::Long, 25_000.0, 0.1412, 0.1538, 2.0, PositionStatus::Open),
        position(5, "BTC-PERP", PositionSide::Short, 0.25, 61_800.0, 63_150.0, 20.0, PositionStatus::Closed),
        position(6, "ARB-PERP", PositionSide::Long, 3_000.0, 1.12, 1.31, 4.0, PositionStatus::Closed),
        position(7, "ETH-PERP", PositionSide::Long, 2.5, 3_180.0, 3_402.6, 8.0, PositionStatus::Closed),
    ]
}

/// Open/closed summary cards of the positions page, derived from `positions`.
pub fn positions_stats(positions: &[Position]) -> Vec<StatEntry> {
    let (open, closed): (Vec<&Position>, Vec<&Position>) = positions
        .iter()
        .partition(|p| p.status == PositionStatus::Open);

    let open_pnl: f64 = open.iter().map(|p| p.unrealized_pnl()).sum();
    let open_margin: f64 = open.iter().map(|p| p.margin()).sum();
    let closed_pnl: f64 = closed.iter().map(|p| p.unrealized_pnl()).sum();
    let closed_margin: f64 = closed.iter().map(|p| p.margin()).sum();
    let winners = closed.iter().filter(|p| p.unrealized_pnl() > 0.0).count();

    let roe = |pnl: f64, margin: f64| if margin == 0.0 { 0.0 } else { pnl / margin * 100.0 };
    let win_rate = if closed.is_empty() {
        0.0
    } else {
        winners as f64 / closed.len() as f64 * 100.0
    };

    vec![
        StatEntry::new(
            "Open Positions",
            open.len() as f64,
            0.0,
            StatIcon::Layers,
            AccentColor::Purple,
        )
        .with_unit(StatUnit::Count)
        .with_detail(format!("Margin in use {open_margin:.2}")),
        StatEntry::new(
            "Unrealized P&L",
            open_pnl,
            roe(open_pnl, open_margin),
            StatIcon::Activity,
            AccentColor::Green,
        )
        .with_detail("Return on margin of open positions"),
        StatEntry::new(
            "Closed Positions",
            closed.len() as f64,
            0.0,
            StatIcon::Target,
            AccentColor::Cyan,
        )
        .with_unit(StatUnit::Count)
        .with_detail(format!("{win_rate:.0}% closed in profit")),
        StatEntry::new(
            "Realized P&L",
            closed_pnl,
            roe(closed_pnl, closed_margin),
            StatIcon::Coins,
            AccentColor::Orange,
        ),
    ]
}

pub fn market_movers() -> Vec<MarketTicker> {
    vec![
        ticker("SOL", "Solana", 168.45, 5.82, 3_412_000_000.0),
        ticker("AVAX", "Avalanche", 38.71, 4.15, 612_400_000.0),
        ticker("BTC", "Bitcoin", 67_432.15, 2.34, 28_940_000_000.0),
        ticker("ETH", "Ethereum", 3_512.8, -1.27, 14_230_000_000.0),
        ticker("ADA", "Cardano", 0.4573, -3.12, 402_100_000.0),
        ticker("DOT", "Polkadot", 7.08, -4.6, 189_300_000.0),
    ]
}

/// Most recent transactions first.
pub fn recent_transactions() -> Vec<Transaction> {
    vec![
        transaction(TransactionKind::Buy, "BTC", 0.125, 66_980.0, REFERENCE_TIMESTAMP - 2 * HOUR),
        transaction(TransactionKind::Sell, "ETH", 1.5, 3_540.2, REFERENCE_TIMESTAMP - 7 * HOUR),
        transaction(TransactionKind::Deposit, "USDT", 5_000.0, 1.0, REFERENCE_TIMESTAMP - DAY),
        transaction(TransactionKind::Buy, "SOL", 25.0, 161.3, REFERENCE_TIMESTAMP - DAY - 5 * HOUR),
        transaction(TransactionKind::Withdraw, "LINK", 120.0, 17.4, REFERENCE_TIMESTAMP - 3 * DAY),
    ]
}

/// Portfolio value series for a timeframe. The last point always equals the
/// current total balance.
pub fn portfolio_value_history(timeframe: Timeframe) -> Vec<PricePoint> {
    let (labels, values): (Vec<&str>, Vec<f64>) = match timeframe {
        Timeframe::Day => (
            vec!["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "24:00"],
            vec![120_721.6, 121_302.4, 119_880.3, 122_415.9, 123_090.1, 123_874.5, 124_563.82],
        ),
        Timeframe::Week => (
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            vec![114_210.0, 116_842.3, 115_390.7, 118_904.2, 121_677.0, 120_135.4, 124_563.82],
        ),
        Timeframe::Month => (
            vec!["May 03", "May 08", "May 13", "May 18", "May 23", "May 28", "Jun 01"],
            vec![110_720.5, 106_384.2, 112_950.8, 117_402.6, 115_088.3, 121_940.1, 124_563.82],
        ),
        Timeframe::Year => (
            vec![
                "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun",
            ],
            vec![
                48_320.0, 45_910.4, 51_204.8, 58_731.5, 66_420.9, 74_115.2, 71_830.6, 86_402.3,
                102_615.7, 97_284.1, 110_720.5, 124_563.82,
            ],
        ),
    };

    labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| PricePoint::new(label, value))
        .collect()
}

/// Line chart of [`portfolio_value_history`], colored by overall direction.
pub fn portfolio_value_chart(
    timeframe: Timeframe,
    currency: CurrencyCode,
) -> PortfolioResult<ChartOptions> {
    let history = portfolio_value_history(timeframe);
    let first = history.first().map(|p| p.value).unwrap_or_default();
    let last = history.last().map(|p| p.value).unwrap_or_default();
    let color = if last >= first {
        SeriesColor::Positive
    } else {
        SeriesColor::Negative
    };

    let options = ChartBuilder::line(format!("Portfolio Value ({timeframe})"))
        .labels(history.iter().map(|p| p.label.clone()))
        .series("Value", history.iter().map(|p| p.value).collect(), color)
        .y_format(ValueFormat::Currency(currency))
        .build()?;
    Ok(options)
}

/// Bar chart of the allocation by value of [`holdings`].
pub fn allocation_chart() -> PortfolioResult<ChartOptions> {
    let slices = allocation(&holdings());
    let options = ChartBuilder::bar("Allocation")
        .labels(slices.iter().map(|s| s.symbol.clone()))
        .series(
            "Share",
            slices.iter().map(|s| s.share_percent).collect(),
            SeriesColor::Accent(AccentColor::Purple),
        )
        .y_format(ValueFormat::Percent)
        .build()?;
    Ok(options)
}

fn holding(
    symbol: &str,
    name: &str,
    quantity: f64,
    average_cost: f64,
    price: f64,
    change_24h: f64,
) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        quantity,
        average_cost,
        price,
        change_24h,
    }
}

#[allow(clippy::too_many_arguments)]
fn position(
    id: u32,
    symbol: &str,
    side: PositionSide,
    size: f64,
    entry_price: f64,
    mark_price: f64,
    leverage: f64,
    status: PositionStatus,
) -> Position {
    Position {
        id,
        symbol: symbol.to_string(),
        side,
        size,
        entry_price,
        mark_price,
        leverage,
        status,
    }
}

fn ticker(symbol: &str, name: &str, price: f64, change_24h: f64, volume_24h: f64) -> MarketTicker {
    MarketTicker {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change_24h,
        volume_24h,
    }
}

fn transaction(
    kind: TransactionKind,
    symbol: &str,
    amount: f64,
    price: f64,
    timestamp: i64,
) -> Transaction {
    Transaction {
        kind,
        symbol: symbol.to_string(),
        amount,
        price,
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use claims::assert_ok;

    #[test]
    fn test_every_timeframe_builds_a_chart() {
        for timeframe in Timeframe::ALL {
            let chart = assert_ok!(portfolio_value_chart(timeframe, CurrencyCode::Usd));
            assert_eq!(chart.kind, ChartKind::Line);
            assert_eq!(chart.series[0].data.len(), chart.x_axis.labels.len());
        }
    }

    #[test]
    fn test_history_ends_at_total_balance() {
        let balance = dashboard_stats()[0].value;
        for timeframe in Timeframe::ALL {
            let history = portfolio_value_history(timeframe);
            assert_eq!(history.last().map(|p| p.value), Some(balance));
        }
    }

    #[test]
    fn test_allocation_chart_matches_holdings() {
        let chart = assert_ok!(allocation_chart());
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.x_axis.labels.len(), holdings().len());
        assert_eq!(chart.x_axis.labels[0], "BTC");
    }

    #[test]
    fn test_positions_stats_split_open_and_closed() {
        let positions = positions();
        let stats = positions_stats(&positions);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].value, 4.0);
        assert_eq!(stats[2].value, 3.0);
        assert_eq!(stats[0].unit, StatUnit::Count);
    }

    #[test]
    fn test_positions_have_unique_ids_and_both_statuses() {
        let positions = positions();
        let mut ids: Vec<u32> = positions.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), positions.len());
        assert!(positions.iter().any(|p| p.status == PositionStatus::Open));
        assert!(positions.iter().any(|p| p.status == PositionStatus::Closed));
    }

    #[test]
    fn test_transactions_are_newest_first() {
        let txs = recent_transactions();
        assert!(txs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_portfolio_stats_include_best_performer() {
        let stats = portfolio_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[3].label, "Best Performer");
        assert_eq!(stats[3].detail.as_deref(), Some("Solana (SOL)"));
        assert_eq!(stats[3].unit, StatUnit::PercentChange);
    }

    #[test]
    fn test_win_rate_is_a_level() {
        let stats = dashboard_stats();
        assert_eq!(stats[3].label, "Win Rate");
        assert_eq!(stats[3].unit, StatUnit::Percent);
    }
}
