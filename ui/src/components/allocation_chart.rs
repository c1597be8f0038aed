use crate::components::base_popup::PopupBuilder;
use crate::components::common::Msg;
use crate::components::price_chart::series_color;
use crate::theme::ThemeContext;
use portfolio::chart::{ChartKind, ChartOptions};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::Line;
use tuirealm::ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State,
};

const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 9;

/// Bar chart of the first series of a bar-kind [`ChartOptions`].
pub struct AllocationChart {
    options: Option<ChartOptions>,
    focused: bool,
}

impl AllocationChart {
    pub fn new(options: ChartOptions) -> Self {
        if options.kind != ChartKind::Bar {
            log::warn!("AllocationChart given a {:?} chart; drawing it as bars", options.kind);
        }
        Self {
            options: Some(options),
            focused: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            options: None,
            focused: false,
        }
    }

    /// Widest bar that lets every label fit in `width` cells.
    fn bar_width(width: u16, bars: usize) -> u16 {
        if bars == 0 {
            return MIN_BAR_WIDTH;
        }
        (width / bars as u16)
            .saturating_sub(1)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
    }
}

impl MockComponent for AllocationChart {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();

        let series = self
            .options
            .as_ref()
            .and_then(|options| options.series.first().map(|series| (options, series)));
        let Some((options, series)) = series else {
            let message = Paragraph::new("No allocation data")
                .style(Style::default().fg(tokens.text_muted()))
                .alignment(Alignment::Center)
                .block(PopupBuilder::panel(" Allocation ", self.focused));
            frame.render_widget(message, area);
            return;
        };

        let bar_style = Style::default().fg(series_color(series.color, &tokens));
        let value_style = Style::default()
            .fg(tokens.text_primary())
            .bg(series_color(series.color, &tokens))
            .add_modifier(Modifier::BOLD);

        let bars: Vec<Bar> = options
            .x_axis
            .labels
            .iter()
            .zip(series.data.iter())
            .map(|(label, value)| {
                Bar::default()
                    .label(Line::from(label.clone()))
                    .value(value.max(0.0).round() as u64)
                    .text_value(options.y_axis.format.format(*value))
                    .style(bar_style)
                    .value_style(value_style)
            })
            .collect();

        let inner_width = area.width.saturating_sub(2);
        let chart = BarChart::default()
            .block(PopupBuilder::panel(
                format!(" {} ", options.title),
                self.focused,
            ))
            .data(BarGroup::default().bars(&bars))
            .bar_width(Self::bar_width(inner_width, bars.len()))
            .bar_gap(1)
            .label_style(Style::default().fg(tokens.chart_axis()));

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

impl Component<Msg, NoUserEvent> for AllocationChart {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
