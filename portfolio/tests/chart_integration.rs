use claims::{assert_err, assert_matches, assert_ok};
use portfolio::chart::{ChartBuilder, ChartKind, ChartOptions, SeriesColor, ValueFormat};
use portfolio::datasets;
use portfolio::model::Timeframe;
use portfolio::{ChartError, CurrencyCode, PortfolioError};

#[test]
fn test_exported_chart_json_parses_back() {
    let chart = assert_ok!(datasets::portfolio_value_chart(
        Timeframe::Week,
        CurrencyCode::Eur
    ));
    let json = assert_ok!(chart.to_json());
    let parsed: ChartOptions = assert_ok!(serde_json::from_str(&json));

    assert_eq!(parsed, chart);
    assert_eq!(parsed.y_axis.format, ValueFormat::Currency(CurrencyCode::Eur));
}

#[test]
fn test_rising_history_uses_positive_color() {
    let chart = assert_ok!(datasets::portfolio_value_chart(
        Timeframe::Year,
        CurrencyCode::Usd
    ));
    assert_eq!(chart.series[0].color, SeriesColor::Positive);
    assert_eq!(chart.title, "Portfolio Value (1Y)");
}

#[test]
fn test_builder_errors_convert_into_portfolio_error() {
    fn build() -> Result<ChartOptions, PortfolioError> {
        let options = ChartBuilder::bar("Broken")
            .labels(["a", "b", "c"])
            .series("values", vec![1.0, 2.0], SeriesColor::Primary)
            .build()?;
        Ok(options)
    }

    let err = assert_err!(build());
    assert_matches!(
        err,
        PortfolioError::Chart(ChartError::SeriesLengthMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    );
    assert!(err.to_string().contains("values"));
}

#[test]
fn test_chart_kind_serializes_lowercase() {
    let chart = assert_ok!(datasets::allocation_chart());
    assert_eq!(chart.kind, ChartKind::Bar);
    let json = assert_ok!(chart.to_json());
    assert!(json.contains("\"kind\": \"bar\""));
    assert!(json.contains("\"percent\""));
}
