use crate::config::AppConfig;
use crate::error::AppError;
use crate::pages::Page;
use crate::theme::ThemeMode;
use portfolio::format::format_currency;
use portfolio::model::{PositionFilter, Timeframe};
use portfolio::{CurrencyCode, CurrencyFormat};
use std::time::Duration;
use tuirealm::ratatui::layout::Rect;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    GlobalKeyWatcher,
    Header,
    Sidebar,
    HelpScreen,
    ErrorPopup,
    AccountMenu,
    StatCard(usize),
    PriceChart,
    TimeframeDropdown,
    MarketTable,
    TransactionList,
    HoldingsTable,
    AllocationChart,
    PositionsTabs,
    PositionsSearch,
    PositionsTable,
}

impl ComponentId {
    /// Short name used in logs and error reports.
    pub fn name(&self) -> String {
        match self {
            ComponentId::StatCard(index) => format!("StatCard#{index}"),
            other => format!("{other:?}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    ToggleHelpScreen,
    ToggleSidebar,
    FocusNext,
    FocusPrevious,
    /// Focus whatever component was rendered under the given cell.
    FocusAt {
        column: u16,
        row: u16,
    },
    Navigate(Page),
    ThemeActivity(ThemeActivityMsg),
    PageActivity(PageActivityMsg),
    PopupActivity(PopupActivityMsg),
    InputActivity(InputActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq, Clone)]
pub enum ThemeActivityMsg {
    /// The user asked for the other theme.
    ToggleRequested,
    /// The theme store switched to a new mode.
    Changed(ThemeMode),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PageActivityMsg {
    TimeframeSelected(Timeframe),
    PositionsTabSelected(PositionFilter),
    SearchChanged(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    CloseError,
}

#[derive(Debug, PartialEq, Clone)]
pub enum InputActivityMsg {
    EditingStarted,
    EditingStopped,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}

/// How monetary values and tooltips are presented, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    pub currency: CurrencyCode,
    pub compact: bool,
    pub tooltip_delay: Duration,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            compact: false,
            tooltip_delay: Duration::from_millis(400),
        }
    }
}

impl DisplayOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            currency: config.currency(),
            compact: config.compact_currency(),
            tooltip_delay: config.tooltip_delay(),
        }
    }

    pub fn money(&self, value: f64) -> String {
        format_currency(
            value,
            self.currency,
            CurrencyFormat {
                compact: self.compact,
                show_sign: false,
            },
        )
    }

    pub fn signed_money(&self, value: f64) -> String {
        format_currency(
            value,
            self.currency,
            CurrencyFormat {
                compact: self.compact,
                show_sign: true,
            },
        )
    }

    /// Full precision, used where there is room for it (tooltips).
    pub fn exact_money(&self, value: f64) -> String {
        format_currency(value, self.currency, CurrencyFormat::default())
    }
}

/// Whether the cell at `column`/`row` lies inside `area`.
pub fn area_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_contains_edges() {
        let area = Rect::new(2, 3, 4, 2);

        assert!(area_contains(area, 2, 3));
        assert!(area_contains(area, 5, 4));
        assert!(!area_contains(area, 6, 4));
        assert!(!area_contains(area, 5, 5));
        assert!(!area_contains(area, 1, 3));
        assert!(!area_contains(Rect::default(), 0, 0));
    }

    #[test]
    fn test_display_options_money() {
        let options = DisplayOptions::default();
        assert_eq!(options.money(1234.5), "$1,234.50");
        assert_eq!(options.signed_money(-500.0), "-$500.00");

        let compact = DisplayOptions {
            compact: true,
            ..DisplayOptions::default()
        };
        assert_eq!(compact.money(1_234_567.0), "$1.23M");
        assert_eq!(compact.exact_money(1_234_567.0), "$1,234,567.00");
    }

    #[test]
    fn test_component_names() {
        assert_eq!(ComponentId::StatCard(2).name(), "StatCard#2");
        assert_eq!(ComponentId::PriceChart.name(), "PriceChart");
    }
}
