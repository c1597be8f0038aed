use crate::components::base_popup::PopupBuilder;
use crate::components::common::Msg;
use crate::theme::{StyleTokenSet, ThemeContext};
use portfolio::chart::{ChartKind, ChartOptions, SeriesColor};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::Color;
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::symbols::Marker;
use tuirealm::ratatui::text::Span;
use tuirealm::ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State,
};

/// Number of labels drawn on the value axis.
const Y_LABEL_COUNT: usize = 3;

/// Theme color of a semantic series color.
pub fn series_color(color: SeriesColor, tokens: &StyleTokenSet) -> Color {
    match color {
        SeriesColor::Primary => tokens.chart_line(),
        SeriesColor::Positive => tokens.trend_up(),
        SeriesColor::Negative => tokens.trend_down(),
        SeriesColor::Accent(accent) => tokens.accent(accent),
    }
}

/// Line chart drawn from declarative [`ChartOptions`].
pub struct PriceChart {
    options: Option<ChartOptions>,
    focused: bool,
}

impl PriceChart {
    pub fn new(options: ChartOptions) -> Self {
        if options.kind != ChartKind::Line {
            log::warn!("PriceChart given a {:?} chart; drawing it as lines", options.kind);
        }
        Self {
            options: Some(options),
            focused: false,
        }
    }

    /// Chart whose options failed to build. Draws an empty panel.
    pub fn empty() -> Self {
        Self {
            options: None,
            focused: false,
        }
    }
}

impl MockComponent for PriceChart {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();

        let Some(options) = &self.options else {
            let block = PopupBuilder::panel(" Chart ", self.focused);
            let message = Paragraph::new("No chart data")
                .style(Style::default().fg(tokens.text_muted()))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        };

        let block = PopupBuilder::panel(format!(" {} ", options.title), self.focused);
        let axis_style = Style::default().fg(tokens.chart_axis());

        let points: Vec<Vec<(f64, f64)>> = (0..options.series.len())
            .map(|index| options.points(index))
            .collect();
        let datasets: Vec<Dataset> = options
            .series
            .iter()
            .zip(points.iter())
            .map(|(series, data)| {
                Dataset::default()
                    .name(series.name.clone())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series_color(series.color, &tokens)))
                    .data(data)
            })
            .collect();

        let x_labels: Vec<Span> = options
            .sparse_x_labels()
            .into_iter()
            .map(|label| Span::styled(label, axis_style))
            .collect();
        let y_labels: Vec<Span> = options
            .y_labels(Y_LABEL_COUNT)
            .into_iter()
            .map(|label| Span::styled(label, axis_style))
            .collect();

        let legend = options.show_legend.then_some(LegendPosition::TopLeft);

        let chart = Chart::new(datasets)
            .block(block)
            .style(Style::default().fg(tokens.text_primary()))
            .legend_position(legend)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(tokens.chart_grid()))
                    .bounds(options.x_bounds())
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(tokens.chart_grid()))
                    .bounds(options.y_bounds())
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if let (Attribute::Focus, AttrValue::Flag(focused)) = (attr, value) {
            self.focused = focused;
        }
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for PriceChart {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{buffer_text, init_theme, render_component};
    use crate::theme::ThemeMode;
    use portfolio::CurrencyCode;
    use portfolio::datasets::portfolio_value_chart;
    use portfolio::model::{AccentColor, Timeframe};

    #[test]
    fn test_series_colors_follow_theme() {
        let tokens = StyleTokenSet::fallback(ThemeMode::Light);
        assert_eq!(series_color(SeriesColor::Positive, &tokens), tokens.trend_up());
        assert_eq!(
            series_color(SeriesColor::Accent(AccentColor::Orange), &tokens),
            tokens.accent(AccentColor::Orange)
        );
    }

    #[test]
    fn test_renders_title_and_axis_labels() {
        init_theme();
        let options = portfolio_value_chart(Timeframe::Week, CurrencyCode::Usd).unwrap();
        let first_label = options.x_axis.labels[0].clone();
        let mut chart = PriceChart::new(options);

        let text = buffer_text(&render_component(&mut chart, 80, 20));

        assert!(text.contains("Portfolio Value (7D)"));
        assert!(text.contains(&first_label));
    }

    #[test]
    fn test_empty_chart_renders_placeholder() {
        init_theme();
        let mut chart = PriceChart::empty();
        let text = buffer_text(&render_component(&mut chart, 40, 5));
        assert!(text.contains("No chart data"));
    }
}
