use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PortfolioError;

/// Icon shown on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatIcon {
    Wallet,
    TrendingUp,
    TrendingDown,
    Coins,
    Activity,
    Layers,
    Target,
}

impl StatIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatIcon::Wallet => "◈",
            StatIcon::TrendingUp => "↗",
            StatIcon::TrendingDown => "↘",
            StatIcon::Coins => "◎",
            StatIcon::Activity => "∿",
            StatIcon::Layers => "≡",
            StatIcon::Target => "◉",
        }
    }
}

/// Semantic accent of a card. The UI maps each variant to a themed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Cyan,
}

/// How a stat value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatUnit {
    #[default]
    Currency,
    Count,
    /// A level such as a win rate, shown without a sign.
    Percent,
    /// A return or change, shown with its sign.
    PercentChange,
}

/// One headline number on a page, e.g. "Total Balance".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub value: f64,
    pub change_percent: f64,
    pub icon: StatIcon,
    pub accent: AccentColor,
    #[serde(default)]
    pub unit: StatUnit,
    /// Extra line shown in the card tooltip.
    #[serde(default)]
    pub detail: Option<String>,
}

impl StatEntry {
    pub fn new(
        label: impl Into<String>,
        value: f64,
        change_percent: f64,
        icon: StatIcon,
        accent: AccentColor,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            change_percent,
            icon,
            accent,
            unit: StatUnit::Currency,
            detail: None,
        }
    }

    pub fn with_unit(mut self, unit: StatUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A spot holding in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub quantity: f64,
    pub average_cost: f64,
    pub price: f64,
    pub change_24h: f64,
}

impl Holding {
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_cost
    }

    pub fn unrealized_pnl(&self) -> f64 {
        self.value() - self.cost_basis()
    }

    pub fn pnl_percent(&self) -> f64 {
        let cost = self.cost_basis();
        if cost == 0.0 {
            0.0
        } else {
            self.unrealized_pnl() / cost * 100.0
        }
    }
}

/// Totals over a set of holdings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cost: f64,
    pub unrealized_pnl: f64,
    pub pnl_percent: f64,
    /// Value-weighted 24h change of the whole portfolio.
    pub change_24h: f64,
}

impl PortfolioSummary {
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let total_value: f64 = holdings.iter().map(Holding::value).sum();
        let total_cost: f64 = holdings.iter().map(Holding::cost_basis).sum();
        let unrealized_pnl = total_value - total_cost;
        let pnl_percent = if total_cost == 0.0 {
            0.0
        } else {
            unrealized_pnl / total_cost * 100.0
        };
        let change_24h = if total_value == 0.0 {
            0.0
        } else {
            holdings
                .iter()
                .map(|h| h.value() * h.change_24h)
                .sum::<f64>()
                / total_value
        };

        Self {
            total_value,
            total_cost,
            unrealized_pnl,
            pnl_percent,
            change_24h,
        }
    }
}

/// Share of the portfolio held in one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub symbol: String,
    pub share_percent: f64,
}

/// Allocation by value, largest share first. Empty or zero-value portfolios
/// yield an empty allocation.
pub fn allocation(holdings: &[Holding]) -> Vec<AllocationSlice> {
    let total: f64 = holdings.iter().map(Holding::value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices: Vec<AllocationSlice> = holdings
        .iter()
        .map(|h| AllocationSlice {
            symbol: h.symbol.clone(),
            share_percent: h.value() / total * 100.0,
        })
        .collect();
    slices.sort_by(|a, b| b.share_percent.total_cmp(&a.share_percent));
    slices
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => f.write_str("Long"),
            PositionSide::Short => f.write_str("Short"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Open,
    Closed,
}

/// A leveraged derivatives position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: u32,
    pub symbol: String,
    pub side: PositionSide,
    pub size: f64,
    pub entry_price: f64,
    pub mark_price: f64,
    pub leverage: f64,
    pub status: PositionStatus,
}

impl Position {
    pub fn notional(&self) -> f64 {
        self.size * self.mark_price
    }

    pub fn margin(&self) -> f64 {
        if self.leverage <= 0.0 {
            self.size * self.entry_price
        } else {
            self.size * self.entry_price / self.leverage
        }
    }

    pub fn unrealized_pnl(&self) -> f64 {
        let delta = self.mark_price - self.entry_price;
        match self.side {
            PositionSide::Long => delta * self.size,
            PositionSide::Short => -delta * self.size,
        }
    }

    /// Return on margin, in percent.
    pub fn roe_percent(&self) -> f64 {
        let margin = self.margin();
        if margin == 0.0 {
            0.0
        } else {
            self.unrealized_pnl() / margin * 100.0
        }
    }
}

/// Which positions a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl PositionFilter {
    pub const ALL: [PositionFilter; 3] = [
        PositionFilter::Open,
        PositionFilter::Closed,
        PositionFilter::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PositionFilter::Open => "Open",
            PositionFilter::Closed => "Closed",
            PositionFilter::All => "All",
        }
    }

    pub fn matches(&self, position: &Position) -> bool {
        match self {
            PositionFilter::Open => position.status == PositionStatus::Open,
            PositionFilter::Closed => position.status == PositionStatus::Closed,
            PositionFilter::All => true,
        }
    }
}

/// Filter positions by status and a case-insensitive symbol query.
pub fn filter_positions<'a>(
    positions: &'a [Position],
    filter: PositionFilter,
    query: &str,
) -> Vec<&'a Position> {
    let query = query.trim().to_uppercase();
    positions
        .iter()
        .filter(|p| filter.matches(p))
        .filter(|p| query.is_empty() || p.symbol.to_uppercase().contains(&query))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Buy => "Buy",
            TransactionKind::Sell => "Sell",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub symbol: String,
    pub amount: f64,
    pub price: f64,
    /// Unix timestamp in seconds, UTC.
    pub timestamp: i64,
}

impl Transaction {
    pub fn total(&self) -> f64 {
        self.amount * self.price
    }

    /// Signed cash flow: buys and deposits are inflows into the portfolio.
    pub fn signed_total(&self) -> f64 {
        match self.kind {
            TransactionKind::Buy | TransactionKind::Deposit => self.total(),
            TransactionKind::Sell | TransactionKind::Withdraw => -self.total(),
        }
    }

    pub fn formatted_time(&self) -> String {
        DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%b %d, %H:%M").to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}

/// A row of the market movers table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTicker {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
}

/// A labelled point of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub label: String,
    pub value: f64,
}

impl PricePoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Window of the portfolio value chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Day => "24H",
            Timeframe::Week => "7D",
            Timeframe::Month => "30D",
            Timeframe::Year => "1Y",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "24h" | "1d" => Ok(Timeframe::Day),
            "week" | "7d" | "1w" => Ok(Timeframe::Week),
            "month" | "30d" | "1m" => Ok(Timeframe::Month),
            "year" | "1y" => Ok(Timeframe::Year),
            _ => Err(PortfolioError::UnknownTimeframe(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};

    fn holding(symbol: &str, quantity: f64, cost: f64, price: f64) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            quantity,
            average_cost: cost,
            price,
            change_24h: 0.0,
        }
    }

    fn position(side: PositionSide, entry: f64, mark: f64) -> Position {
        Position {
            id: 1,
            symbol: "BTC-PERP".to_string(),
            side,
            size: 2.0,
            entry_price: entry,
            mark_price: mark,
            leverage: 10.0,
            status: PositionStatus::Open,
        }
    }

    #[test]
    fn test_holding_pnl() {
        let h = holding("ETH", 2.0, 1_000.0, 1_500.0);
        assert_eq!(h.value(), 3_000.0);
        assert_eq!(h.cost_basis(), 2_000.0);
        assert_eq!(h.unrealized_pnl(), 1_000.0);
        assert_eq!(h.pnl_percent(), 50.0);
    }

    #[test]
    fn test_zero_cost_holding_has_zero_percent() {
        let h = holding("AIR", 10.0, 0.0, 1.0);
        assert_eq!(h.pnl_percent(), 0.0);
    }

    #[test]
    fn test_summary_totals() {
        let holdings = vec![
            holding("BTC", 1.0, 100.0, 200.0),
            holding("ETH", 1.0, 100.0, 50.0),
        ];
        let summary = PortfolioSummary::from_holdings(&holdings);
        assert_eq!(summary.total_value, 250.0);
        assert_eq!(summary.total_cost, 200.0);
        assert_eq!(summary.unrealized_pnl, 50.0);
        assert_eq!(summary.pnl_percent, 25.0);
    }

    #[test]
    fn test_allocation_sorted_and_complete() {
        let holdings = vec![
            holding("ETH", 1.0, 0.0, 25.0),
            holding("BTC", 1.0, 0.0, 75.0),
        ];
        let slices = allocation(&holdings);
        assert_eq!(slices[0].symbol, "BTC");
        assert_eq!(slices[0].share_percent, 75.0);
        let total: f64 = slices.iter().map(|s| s.share_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocation_of_empty_portfolio() {
        assert!(allocation(&[]).is_empty());
    }

    #[test]
    fn test_long_and_short_pnl() {
        let long = position(PositionSide::Long, 100.0, 110.0);
        assert_eq!(long.unrealized_pnl(), 20.0);
        assert_eq!(long.margin(), 20.0);
        assert_eq!(long.roe_percent(), 100.0);

        let short = position(PositionSide::Short, 100.0, 110.0);
        assert_eq!(short.unrealized_pnl(), -20.0);
        assert_eq!(short.roe_percent(), -100.0);
    }

    #[test]
    fn test_filter_positions_by_status_and_query() {
        let mut closed = position(PositionSide::Long, 1.0, 1.0);
        closed.status = PositionStatus::Closed;
        closed.symbol = "ETH-PERP".to_string();
        let positions = vec![position(PositionSide::Long, 1.0, 1.0), closed];

        assert_eq!(filter_positions(&positions, PositionFilter::Open, "").len(), 1);
        assert_eq!(filter_positions(&positions, PositionFilter::All, "").len(), 2);
        assert_eq!(filter_positions(&positions, PositionFilter::All, "eth").len(), 1);
        assert!(filter_positions(&positions, PositionFilter::Open, "eth").is_empty());
    }

    #[test]
    fn test_transaction_time_formatting() {
        let tx = Transaction {
            kind: TransactionKind::Buy,
            symbol: "BTC".to_string(),
            amount: 0.5,
            price: 60_000.0,
            timestamp: 1_717_243_200,
        };
        assert_eq!(tx.total(), 30_000.0);
        assert_eq!(tx.formatted_time(), "Jun 01, 12:00");
    }

    #[test]
    fn test_timeframe_parsing() {
        assert_ok_eq!("7d".parse::<Timeframe>(), Timeframe::Week);
        assert_ok_eq!("Year".parse::<Timeframe>(), Timeframe::Year);
        assert_err!("decade".parse::<Timeframe>());
    }
}
