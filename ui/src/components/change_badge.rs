use crate::theme::StyleTokenSet;
use portfolio::format::format_percent_change;
use portfolio::{PercentChange, TrendDirection};
use tuirealm::props::Color;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::Span;

/// Percent change rendered with its direction indicator, e.g. `▲ +12.50%`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeBadge {
    change: PercentChange,
}

impl ChangeBadge {
    pub fn new(change_percent: f64) -> Self {
        Self {
            change: format_percent_change(change_percent),
        }
    }

    pub fn direction(&self) -> TrendDirection {
        self.change.direction
    }

    pub fn text(&self) -> String {
        self.change.with_indicator()
    }

    pub fn span(&self, tokens: &StyleTokenSet) -> Span<'static> {
        Span::styled(
            self.text(),
            Style::default()
                .fg(trend_color(self.direction(), tokens))
                .add_modifier(Modifier::BOLD),
        )
    }
}

pub fn trend_color(direction: TrendDirection, tokens: &StyleTokenSet) -> Color {
    match direction {
        TrendDirection::Up => tokens.trend_up(),
        TrendDirection::Down => tokens.trend_down(),
        TrendDirection::Flat => tokens.trend_flat(),
    }
}

/// Color for a signed amount such as a P&L figure.
pub fn signed_color(value: f64, tokens: &StyleTokenSet) -> Color {
    trend_color(TrendDirection::from_change(value), tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    fn test_badge_text_and_color() {
        let tokens = StyleTokenSet::fallback(ThemeMode::Dark);

        let up = ChangeBadge::new(12.5);
        assert_eq!(up.text(), "▲ +12.50%");
        assert_eq!(up.span(&tokens).style.fg, Some(tokens.trend_up()));

        let down = ChangeBadge::new(-3.2);
        assert_eq!(down.text(), "▼ -3.20%");
        assert_eq!(down.direction(), TrendDirection::Down);

        let flat = ChangeBadge::new(0.0);
        assert_eq!(flat.text(), "▬ 0.00%");
        assert_eq!(signed_color(0.0, &tokens), tokens.trend_flat());
    }
}
