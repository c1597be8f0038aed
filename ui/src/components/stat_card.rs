use crate::components::change_badge::ChangeBadge;
use crate::components::common::{DisplayOptions, Msg, area_contains};
use crate::components::state::ComponentState;
use crate::components::tooltip::{TooltipState, render_tooltip};
use crate::error::AppResult;
use crate::theme::{StyleTokenSet, ThemeContext};
use portfolio::format::format_percent_change;
use portfolio::model::{StatEntry, StatUnit};
use std::time::Instant;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{MouseEvent, MouseEventKind};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State,
};

/// Queried for `Flag(true)` while the tooltip is showing. Setting it to
/// `Flag(true)` makes the next `view` draw only the tooltip, anchored to the
/// card area, so the shell can paint it after every panel.
pub const TOOLTIP: Attribute = Attribute::Custom("tooltip");

/// Headline number with a change badge. Hovering (or focusing) the card for
/// the configured delay shows a tooltip with the exact figures.
pub struct StatCard {
    entry: StatEntry,
    options: DisplayOptions,
    tooltip: TooltipState,
    tooltip_layer: bool,
    focused: bool,
    area: Option<Rect>,
    is_mounted: bool,
}

impl StatCard {
    pub fn new(entry: StatEntry, options: DisplayOptions) -> Self {
        Self {
            entry,
            tooltip: TooltipState::new(options.tooltip_delay),
            tooltip_layer: false,
            options,
            focused: false,
            area: None,
            is_mounted: false,
        }
    }

    pub fn value_text(&self) -> String {
        match self.entry.unit {
            StatUnit::Currency => self.options.money(self.entry.value),
            StatUnit::Count => format!("{:.0}", self.entry.value),
            StatUnit::Percent => format!("{:.2}%", self.entry.value),
            StatUnit::PercentChange => format_percent_change(self.entry.value).text,
        }
    }

    fn tooltip_lines(&self, tokens: &StyleTokenSet) -> Vec<Line<'static>> {
        let exact = match self.entry.unit {
            StatUnit::Currency => self.options.exact_money(self.entry.value),
            _ => self.value_text(),
        };
        let muted = Style::default().fg(tokens.tooltip_text());

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {} ", self.entry.label),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!(" Value:  {exact} "), muted)),
            Line::from(vec![
                Span::styled(" Change: ", muted),
                ChangeBadge::new(self.entry.change_percent).span(tokens),
                Span::raw(" "),
            ]),
        ];
        if let Some(detail) = &self.entry.detail {
            lines.push(Line::from(Span::styled(format!(" {detail} "), muted)));
        }
        lines
    }

    /// React to the pointer position. Returns true when a redraw is needed.
    fn track_pointer(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let inside = self
            .area
            .is_some_and(|area| area_contains(area, column, row));

        if inside {
            self.tooltip.schedule_show(now);
            false
        } else if !self.focused {
            let was_visible = self.tooltip.is_visible();
            self.tooltip.hide();
            was_visible
        } else {
            false
        }
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip.is_visible()
    }
}

impl MockComponent for StatCard {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let tokens = ThemeContext::tokens();
        if std::mem::take(&mut self.tooltip_layer) {
            if self.tooltip.is_visible() {
                render_tooltip(frame, area, self.tooltip_lines(&tokens), &tokens);
            }
            return;
        }

        let accent = tokens.accent(self.entry.accent);
        self.area = Some(area);

        let border_color = if self.focused {
            tokens.border_focused()
        } else {
            accent
        };
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.entry.icon.glyph()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", self.entry.label),
                Style::default().fg(tokens.text_secondary()),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border_type())
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(tokens.card_background()))
            .title(title);

        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", self.value_text()),
            Style::default()
                .fg(tokens.text_primary())
                .add_modifier(Modifier::BOLD),
        ))];
        if self.entry.unit != StatUnit::Count || self.entry.change_percent != 0.0 {
            lines.push(Line::from(vec![
                Span::raw(" "),
                ChangeBadge::new(self.entry.change_percent).span(&tokens),
                Span::styled(" 24h", Style::default().fg(tokens.text_muted())),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            attr if attr == TOOLTIP => Some(AttrValue::Flag(self.tooltip.is_visible())),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        match (attr, value) {
            (Attribute::Focus, AttrValue::Flag(focused)) => {
                self.focused = focused;
                if focused {
                    self.tooltip.schedule_show(Instant::now());
                } else {
                    self.tooltip.hide();
                }
            }
            (attr, AttrValue::Flag(layer)) if attr == TOOLTIP => self.tooltip_layer = layer,
            _ => {}
        }
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for StatCard {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Tick => self
                .tooltip
                .poll(Instant::now())
                .then_some(Msg::ForceRedraw),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                ..
            }) => self
                .track_pointer(column, row, Instant::now())
                .then_some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for StatCard {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting StatCard '{}'", self.entry.label);

        if self.is_mounted {
            log::warn!("StatCard '{}' is already mounted", self.entry.label);
            return Ok(());
        }

        self.tooltip.hide();
        self.is_mounted = true;
        Ok(())
    }
}
