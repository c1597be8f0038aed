//! Delayed tooltip visibility plus the overlay that draws it.

use crate::theme::StyleTokenSet;
use std::time::{Duration, Instant};
use tuirealm::ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Hidden,
    Pending {
        deadline: Instant,
    },
    Visible,
}

/// Visibility of a tooltip that appears after a hover delay.
///
/// `hide` drops any pending deadline, so a show scheduled before the pointer
/// left can never fire later.
#[derive(Debug, Clone)]
pub struct TooltipState {
    delay: Duration,
    phase: Phase,
}

impl TooltipState {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: Phase::Hidden,
        }
    }

    /// Start the delay. Already pending or visible tooltips keep their state.
    pub fn schedule_show(&mut self, now: Instant) {
        if self.phase == Phase::Hidden {
            self.phase = Phase::Pending {
                deadline: now + self.delay,
            };
        }
    }

    pub fn hide(&mut self) {
        self.phase = Phase::Hidden;
    }

    /// Promote a pending tooltip whose deadline passed. Returns true when
    /// visibility changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Pending { deadline } if now >= deadline => {
                self.phase = Phase::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }
}

/// Area for a tooltip anchored below `anchor`, flipped above it when there
/// is no room, and clamped to `bounds`.
pub fn tooltip_area(anchor: Rect, bounds: Rect, lines: &[Line<'_>]) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (content_width + 2).min(bounds.width);
    let height = (lines.len() as u16 + 2).min(bounds.height);

    let below = anchor.y.saturating_add(anchor.height);
    let y = if below.saturating_add(height) <= bounds.y.saturating_add(bounds.height) {
        below
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    let max_x = bounds.x.saturating_add(bounds.width).saturating_sub(width);
    let x = anchor.x.clamp(bounds.x, max_x.max(bounds.x));

    Rect::new(x, y, width, height)
}

/// Draw tooltip `lines` over whatever was rendered before.
pub fn render_tooltip(
    frame: &mut Frame,
    anchor: Rect,
    lines: Vec<Line<'static>>,
    tokens: &StyleTokenSet,
) {
    let area = tooltip_area(anchor, frame.area(), &lines);
    if area.width < 3 || area.height < 3 {
        return;
    }

    let style = Style::default()
        .fg(tokens.tooltip_text())
        .bg(tokens.tooltip_background());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(tokens.border_type())
        .border_style(style);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    #[test]
    fn test_becomes_visible_after_delay() {
        let start = Instant::now();
        let mut tooltip = TooltipState::new(DELAY);

        tooltip.schedule_show(start);
        assert!(tooltip.is_pending());
        assert!(!tooltip.poll(start + Duration::from_millis(399)));
        assert!(!tooltip.is_visible());

        assert!(tooltip.poll(start + DELAY));
        assert!(tooltip.is_visible());
        // Already visible, nothing changes.
        assert!(!tooltip.poll(start + DELAY * 2));
    }

    #[test]
    fn test_hide_before_delay_cancels_show() {
        let start = Instant::now();
        let mut tooltip = TooltipState::new(DELAY);

        tooltip.schedule_show(start);
        tooltip.hide();

        assert!(!tooltip.poll(start + DELAY * 10));
        assert!(!tooltip.is_visible());
        assert!(!tooltip.is_pending());
    }

    #[test]
    fn test_rescheduling_keeps_first_deadline() {
        let start = Instant::now();
        let mut tooltip = TooltipState::new(DELAY);

        tooltip.schedule_show(start);
        tooltip.schedule_show(start + Duration::from_millis(300));

        assert!(tooltip.poll(start + DELAY));
    }

    #[test]
    fn test_schedule_while_visible_stays_visible() {
        let start = Instant::now();
        let mut tooltip = TooltipState::new(Duration::ZERO);

        tooltip.schedule_show(start);
        assert!(tooltip.poll(start));
        tooltip.schedule_show(start + DELAY);
        assert!(tooltip.is_visible());
    }

    #[test]
    fn test_tooltip_area_flips_above_at_bottom_edge() {
        let bounds = Rect::new(0, 0, 40, 20);
        let lines = vec![Line::from("Detail line"), Line::from("Second")];

        let below = tooltip_area(Rect::new(5, 2, 20, 5), bounds, &lines);
        assert_eq!(below, Rect::new(5, 7, 13, 4));

        let above = tooltip_area(Rect::new(30, 15, 10, 5), bounds, &lines);
        assert_eq!(above.y, 11);
        assert_eq!(above.x, 27);
    }
}
