//! Display formatting for monetary values, percent changes and token amounts.
//!
//! These rules are shared by every card, table and chart label, so the exact
//! output is part of the contract:
//!
//! - currency values always use two decimals, with `K`/`M`/`B` suffixes in
//!   compact mode
//! - percent changes carry a leading `+` only when strictly positive
//! - non-finite inputs render as [`NOT_AVAILABLE`]

use crate::errors::PortfolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder rendered for NaN and infinite inputs.
pub const NOT_AVAILABLE: &str = "N/A";

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Compact suffixes, largest first.
const COMPACT_UNITS: [(f64, &str); 3] = [(BILLION, "B"), (MILLION, "M"), (THOUSAND, "K")];

/// Upper bound on fractional digits used for token quantities.
const MAX_QUANTITY_DECIMALS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Btc,
    Eth,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 6] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Jpy,
        CurrencyCode::Btc,
        CurrencyCode::Eth,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Jpy => "¥",
            CurrencyCode::Btc => "₿",
            CurrencyCode::Eth => "Ξ",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Btc => "BTC",
            CurrencyCode::Eth => "ETH",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.code() == normalized)
            .ok_or_else(|| PortfolioError::UnknownCurrency(s.to_string()))
    }
}

/// Options for [`format_currency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyFormat {
    /// Divide large magnitudes and append `K`, `M` or `B`.
    pub compact: bool,
    /// Prefix strictly positive values with `+`.
    pub show_sign: bool,
}

impl CurrencyFormat {
    pub fn compact() -> Self {
        Self {
            compact: true,
            show_sign: false,
        }
    }

    pub fn signed() -> Self {
        Self {
            compact: false,
            show_sign: true,
        }
    }
}

/// Format a monetary value with the currency symbol and two decimals.
///
/// Negative values always carry a `-` before the symbol. A value that rounds
/// to zero carries no sign at all.
///
/// ```text
/// format_currency(1234567.0, Usd, compact)   -> "$1.23M"
/// format_currency(-500.0, Usd, show_sign)    -> "-$500.00"
/// format_currency(1234567.0, Usd, default)   -> "$1,234,567.00"
/// ```
pub fn format_currency(value: f64, code: CurrencyCode, options: CurrencyFormat) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let (digits, suffix) = if options.compact {
        let (scaled, suffix) = compact_parts(value.abs());
        (format!("{scaled:.2}"), suffix)
    } else {
        (group_thousands(&format!("{:.2}", value.abs())), "")
    };

    let sign = sign_prefix(value, &digits, options.show_sign);
    format!("{sign}{}{digits}{suffix}", code.symbol())
}

/// Format a unit price. Prices below one keep four decimals so small-cap
/// tokens stay readable; everything else follows [`format_currency`].
pub fn format_price(value: f64, code: CurrencyCode) -> String {
    if value.is_finite() && value.abs() > 0.0 && value.abs() < 1.0 {
        let digits = format!("{:.4}", value.abs());
        let sign = sign_prefix(value, &digits, false);
        return format!("{sign}{}{digits}", code.symbol());
    }
    format_currency(value, code, CurrencyFormat::default())
}

/// Format a unitless number compactly, e.g. trading volume in a table.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let (scaled, suffix) = compact_parts(value.abs());
    let digits = format!("{scaled:.2}");
    let sign = sign_prefix(value, &digits, false);
    format!("{sign}{digits}{suffix}")
}

/// Format a token amount with its ticker, e.g. `0.5421 BTC`.
///
/// Uses up to eight fractional digits, trims trailing zeros and keeps at
/// least two.
pub fn format_quantity(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let raw = format!("{:.*}", MAX_QUANTITY_DECIMALS, amount.abs());
    let (integer, fraction) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < 2 {
        fraction.push('0');
    }

    let digits = format!("{}.{fraction}", group_thousands(integer));
    let sign = sign_prefix(amount, &digits, false);
    format!("{sign}{digits} {symbol}")
}

/// Direction of a change, chosen by strict sign comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// `> 0` is up, `< 0` is down, anything else (zero, NaN) is flat.
    pub fn from_change(value: f64) -> Self {
        if value > 0.0 {
            TrendDirection::Up
        } else if value < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            TrendDirection::Up => "▲",
            TrendDirection::Down => "▼",
            TrendDirection::Flat => "▬",
        }
    }
}

/// A formatted percent change together with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentChange {
    pub text: String,
    pub direction: TrendDirection,
}

impl PercentChange {
    /// Text prefixed with the directional indicator, e.g. `▲ +12.50%`.
    pub fn with_indicator(&self) -> String {
        format!("{} {}", self.direction.indicator(), self.text)
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format a percent change: `+12.50%`, `-3.20%`, `0.00%`.
pub fn format_percent_change(value: f64) -> PercentChange {
    let direction = TrendDirection::from_change(value);

    let text = if !value.is_finite() {
        NOT_AVAILABLE.to_string()
    } else {
        match direction {
            TrendDirection::Up => format!("+{value:.2}%"),
            TrendDirection::Down => format!("{value:.2}%"),
            // Normalizes negative zero, which would otherwise print as "-0.00".
            TrendDirection::Flat => format!("{:.2}%", 0.0_f64),
        }
    };

    PercentChange { text, direction }
}

fn compact_parts(magnitude: f64) -> (f64, &'static str) {
    let (scaled, suffix) = COMPACT_UNITS
        .iter()
        .find(|(threshold, _)| magnitude >= *threshold)
        .map(|(threshold, suffix)| (magnitude / threshold, *suffix))
        .unwrap_or((magnitude, ""));

    // 999_999 would otherwise render as "1000.00K".
    if round_to_cents(scaled) < THOUSAND {
        return (scaled, suffix);
    }
    match suffix {
        "" => (magnitude / THOUSAND, "K"),
        "K" => (magnitude / MILLION, "M"),
        "M" => (magnitude / BILLION, "B"),
        _ => (scaled, suffix),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sign_prefix(value: f64, digits: &str, show_sign: bool) -> &'static str {
    let rounds_to_zero = digits.chars().all(|c| matches!(c, '0' | '.' | ','));
    if rounds_to_zero {
        ""
    } else if value < 0.0 {
        "-"
    } else if show_sign && value > 0.0 {
        "+"
    } else {
        ""
    }
}

fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}
