use thiserror::Error;

/// Errors raised while building declarative chart options.
///
/// Chart options are validated once at construction so the rendering side can
/// assume every series lines up with the x-axis labels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Chart '{title}' has no x-axis labels")]
    NoLabels { title: String },

    #[error("Chart '{title}' has no series")]
    NoSeries { title: String },

    #[error("Series '{series}' has {actual} points but the chart has {expected} labels")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("Series '{series}' contains a non-finite value at index {index}")]
    NonFiniteValue { series: String, index: usize },
}

/// Top-level error type of the portfolio library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    #[error("Unknown currency code: '{0}'")]
    UnknownCurrency(String),

    #[error("Unknown timeframe: '{0}'")]
    UnknownTimeframe(String),

    #[error("Invalid chart configuration: {0}")]
    Chart(#[from] ChartError),

    #[error("Failed to serialize chart options: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Serialization(err.to_string())
    }
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;
