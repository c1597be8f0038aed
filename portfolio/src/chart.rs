//! Declarative chart configuration.
//!
//! The dashboard never draws charts itself. It builds a [`ChartOptions`]
//! value describing axes and series, and the UI hands that description to the
//! charting widgets of the terminal library. The same value serializes to
//! JSON so it can be exported and inspected outside the TUI.
//!
//! ```no_run
//! use portfolio::chart::{ChartBuilder, SeriesColor, ValueFormat};
//! use portfolio::CurrencyCode;
//!
//! let options = ChartBuilder::line("Portfolio Value")
//!     .labels(["Mon", "Tue", "Wed"])
//!     .series("Value", vec![100.0, 120.0, 115.0], SeriesColor::Primary)
//!     .y_format(ValueFormat::Currency(CurrencyCode::Usd))
//!     .build()?;
//! println!("{}", options.to_json()?);
//! ```

use crate::errors::{ChartError, PortfolioResult};
use crate::format::{CurrencyCode, CurrencyFormat, format_compact, format_currency};
use crate::model::AccentColor;
use serde::{Deserialize, Serialize};

/// Fraction of the data range added above and below the plotted values.
const DEFAULT_PADDING_RATIO: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Semantic series color, resolved against the active theme by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    Primary,
    Positive,
    Negative,
    Accent(AccentColor),
}

/// How values on the y-axis are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    Currency(CurrencyCode),
    Percent,
    Number,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency(code) => format_currency(value, *code, CurrencyFormat::compact()),
            ValueFormat::Percent => format!("{value:.1}%"),
            ValueFormat::Number => format_compact(value),
        }
    }
}

/// Category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Option<String>,
    pub labels: Vec<String>,
}

/// Numeric axis with precomputed bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub title: Option<String>,
    pub min: f64,
    pub max: f64,
    pub format: ValueFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
    pub color: SeriesColor,
}

/// Complete, validated description of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: String,
    pub kind: ChartKind,
    pub x_axis: Axis,
    pub y_axis: ValueAxis,
    pub series: Vec<Series>,
    pub show_legend: bool,
}

impl ChartOptions {
    pub fn to_json(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `(x, y)` pairs for a series, with x being the label index.
    pub fn points(&self, series_index: usize) -> Vec<(f64, f64)> {
        self.series
            .get(series_index)
            .map(|series| {
                series
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (i as f64, *value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Evenly spaced y-axis labels from min to max. Fewer than two labels
    /// would hide one of the bounds, so `count` is clamped to at least 2.
    pub fn y_labels(&self, count: usize) -> Vec<String> {
        let count = count.max(2);
        let step = (self.y_axis.max - self.y_axis.min) / (count - 1) as f64;
        (0..count)
            .map(|i| self.y_axis.format.format(self.y_axis.min + step * i as f64))
            .collect()
    }

    /// First, middle and last x labels; enough for narrow terminals.
    pub fn sparse_x_labels(&self) -> Vec<String> {
        let labels = &self.x_axis.labels;
        match labels.len() {
            0 => Vec::new(),
            1 | 2 => labels.clone(),
            n => vec![
                labels[0].clone(),
                labels[n / 2].clone(),
                labels[n - 1].clone(),
            ],
        }
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.x_axis.labels.len().saturating_sub(1) as f64]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        [self.y_axis.min, self.y_axis.max]
    }
}

/// Builder for [`ChartOptions`]. Validation happens in [`ChartBuilder::build`].
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    title: String,
    kind: ChartKind,
    labels: Vec<String>,
    x_title: Option<String>,
    y_title: Option<String>,
    series: Vec<Series>,
    y_format: ValueFormat,
    show_legend: bool,
    zero_based: bool,
    padding_ratio: f64,
}

impl ChartBuilder {
    fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            labels: Vec::new(),
            x_title: None,
            y_title: None,
            series: Vec::new(),
            y_format: ValueFormat::Number,
            show_legend: false,
            zero_based: kind == ChartKind::Bar,
            padding_ratio: DEFAULT_PADDING_RATIO,
        }
    }

    pub fn line(title: impl Into<String>) -> Self {
        Self::new(title, ChartKind::Line)
    }

    pub fn bar(title: impl Into<String>) -> Self {
        Self::new(title, ChartKind::Bar)
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn x_title(mut self, title: impl Into<String>) -> Self {
        self.x_title = Some(title.into());
        self
    }

    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.y_title = Some(title.into());
        self
    }

    pub fn series(mut self, name: impl Into<String>, data: Vec<f64>, color: SeriesColor) -> Self {
        self.series.push(Series {
            name: name.into(),
            data,
            color,
        });
        self
    }

    pub fn y_format(mut self, format: ValueFormat) -> Self {
        self.y_format = format;
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn zero_based(mut self, zero_based: bool) -> Self {
        self.zero_based = zero_based;
        self
    }

    pub fn build(self) -> Result<ChartOptions, ChartError> {
        if self.labels.is_empty() {
            return Err(ChartError::NoLabels { title: self.title });
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries { title: self.title });
        }

        for series in &self.series {
            if series.data.len() != self.labels.len() {
                return Err(ChartError::SeriesLengthMismatch {
                    series: series.name.clone(),
                    expected: self.labels.len(),
                    actual: series.data.len(),
                });
            }
            if let Some(index) = series.data.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteValue {
                    series: series.name.clone(),
                    index,
                });
            }
        }

        let (min, max) = self.value_bounds();

        Ok(ChartOptions {
            title: self.title,
            kind: self.kind,
            x_axis: Axis {
                title: self.x_title,
                labels: self.labels,
            },
            y_axis: ValueAxis {
                title: self.y_title,
                min,
                max,
                format: self.y_format,
            },
            series: self.series,
            show_legend: self.show_legend,
        })
    }

    fn value_bounds(&self) -> (f64, f64) {
        let values = self.series.iter().flat_map(|s| s.data.iter().copied());
        let (mut min, mut max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        if self.zero_based {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        let range = max - min;
        let padding = if range == 0.0 {
            if max == 0.0 { 1.0 } else { max.abs() * self.padding_ratio }
        } else {
            range * self.padding_ratio
        };

        let lower = if self.zero_based && min >= 0.0 {
            0.0
        } else {
            min - padding
        };
        (lower, max + padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err_eq, assert_ok};

    fn sample() -> ChartBuilder {
        ChartBuilder::line("Value")
            .labels(["a", "b", "c"])
            .series("v", vec![10.0, 20.0, 30.0], SeriesColor::Primary)
    }

    #[test]
    fn test_build_valid_line_chart() {
        let options = assert_ok!(sample().build());
        assert_eq!(options.kind, ChartKind::Line);
        assert_eq!(options.x_bounds(), [0.0, 2.0]);
        assert_eq!(options.y_axis.min, 9.0);
        assert_eq!(options.y_axis.max, 31.0);
        assert_eq!(options.points(0), vec![(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)]);
        assert!(options.points(5).is_empty());
    }

    #[test]
    fn test_bar_chart_is_zero_based() {
        let options = assert_ok!(
            ChartBuilder::bar("Allocation")
                .labels(["BTC", "ETH"])
                .series("share", vec![60.0, 40.0], SeriesColor::Primary)
                .build()
        );
        assert_eq!(options.y_axis.min, 0.0);
        assert_eq!(options.y_axis.max, 63.0);
    }

    #[test]
    fn test_rejects_series_length_mismatch() {
        let result = sample()
            .series("short", vec![1.0], SeriesColor::Negative)
            .build();
        assert_err_eq!(
            result,
            ChartError::SeriesLengthMismatch {
                series: "short".to_string(),
                expected: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_rejects_missing_labels_and_series() {
        assert_err_eq!(
            ChartBuilder::line("empty").build(),
            ChartError::NoLabels {
                title: "empty".to_string()
            }
        );
        assert_err_eq!(
            ChartBuilder::line("empty").labels(["a"]).build(),
            ChartError::NoSeries {
                title: "empty".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let result = ChartBuilder::line("nan")
            .labels(["a", "b"])
            .series("v", vec![1.0, f64::NAN], SeriesColor::Primary)
            .build();
        assert_err_eq!(
            result,
            ChartError::NonFiniteValue {
                series: "v".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn test_flat_series_gets_nonzero_range() {
        let options = assert_ok!(
            ChartBuilder::line("flat")
                .labels(["a", "b"])
                .series("v", vec![100.0, 100.0], SeriesColor::Primary)
                .build()
        );
        assert!(options.y_axis.max > options.y_axis.min);
    }

    #[test]
    fn test_y_labels_use_value_format() {
        let options = assert_ok!(
            sample()
                .y_format(ValueFormat::Currency(CurrencyCode::Usd))
                .build()
        );
        let labels = options.y_labels(3);
        assert_eq!(labels, vec!["$9.00", "$20.00", "$31.00"]);
    }

    #[test]
    fn test_json_export_contains_series() {
        let options = assert_ok!(sample().build());
        let json = assert_ok!(options.to_json());
        assert!(json.contains("\"kind\": \"line\""));
        assert!(json.contains("\"color\": \"primary\""));
    }

    #[test]
    fn test_sparse_x_labels() {
        let options = assert_ok!(
            ChartBuilder::line("x")
                .labels(["1", "2", "3", "4", "5"])
                .series("v", vec![1.0; 5], SeriesColor::Primary)
                .build()
        );
        assert_eq!(options.sparse_x_labels(), vec!["1", "3", "5"]);
    }
}
