use crate::theme::types::ThemeMode;
use portfolio::model::AccentColor;
use std::collections::BTreeMap;
use tuirealm::props::Color;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::BorderType;

/// Semantic style keys consumed by the presentation layer.
///
/// Every key must resolve for both modes. The TOML name of a key is its
/// snake_case [`StyleKey::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    // === Surfaces ===
    Background,
    Surface,
    CardBackground,
    SidebarBackground,
    HeaderBackground,

    // === Text ===
    TextPrimary,
    TextSecondary,
    TextMuted,

    // === Borders ===
    Border,
    BorderFocused,

    // === Accents ===
    AccentPrimary,
    AccentBlue,
    AccentGreen,
    AccentPurple,
    AccentOrange,
    AccentRed,
    AccentCyan,

    // === Title gradient ===
    GradientStart,
    GradientEnd,

    // === Trends ===
    TrendUp,
    TrendDown,
    TrendFlat,

    // === Charts ===
    ChartLine,
    ChartGrid,
    ChartAxis,
    ChartBar,

    // === Tooltip ===
    TooltipBackground,
    TooltipText,

    // === Selection ===
    SelectionBackground,
    SelectionText,

    // === Status ===
    StatusSuccess,
    StatusWarning,
    StatusError,
    StatusInfo,

    // === Help system ===
    ShortcutKey,
    ShortcutDescription,

    // === Navigation ===
    NavActive,
    NavInactive,
}

impl StyleKey {
    pub const ALL: [StyleKey; 38] = [
        StyleKey::Background,
        StyleKey::Surface,
        StyleKey::CardBackground,
        StyleKey::SidebarBackground,
        StyleKey::HeaderBackground,
        StyleKey::TextPrimary,
        StyleKey::TextSecondary,
        StyleKey::TextMuted,
        StyleKey::Border,
        StyleKey::BorderFocused,
        StyleKey::AccentPrimary,
        StyleKey::AccentBlue,
        StyleKey::AccentGreen,
        StyleKey::AccentPurple,
        StyleKey::AccentOrange,
        StyleKey::AccentRed,
        StyleKey::AccentCyan,
        StyleKey::GradientStart,
        StyleKey::GradientEnd,
        StyleKey::TrendUp,
        StyleKey::TrendDown,
        StyleKey::TrendFlat,
        StyleKey::ChartLine,
        StyleKey::ChartGrid,
        StyleKey::ChartAxis,
        StyleKey::ChartBar,
        StyleKey::TooltipBackground,
        StyleKey::TooltipText,
        StyleKey::SelectionBackground,
        StyleKey::SelectionText,
        StyleKey::StatusSuccess,
        StyleKey::StatusWarning,
        StyleKey::StatusError,
        StyleKey::StatusInfo,
        StyleKey::ShortcutKey,
        StyleKey::ShortcutDescription,
        StyleKey::NavActive,
        StyleKey::NavInactive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StyleKey::Background => "background",
            StyleKey::Surface => "surface",
            StyleKey::CardBackground => "card_background",
            StyleKey::SidebarBackground => "sidebar_background",
            StyleKey::HeaderBackground => "header_background",
            StyleKey::TextPrimary => "text_primary",
            StyleKey::TextSecondary => "text_secondary",
            StyleKey::TextMuted => "text_muted",
            StyleKey::Border => "border",
            StyleKey::BorderFocused => "border_focused",
            StyleKey::AccentPrimary => "accent_primary",
            StyleKey::AccentBlue => "accent_blue",
            StyleKey::AccentGreen => "accent_green",
            StyleKey::AccentPurple => "accent_purple",
            StyleKey::AccentOrange => "accent_orange",
            StyleKey::AccentRed => "accent_red",
            StyleKey::AccentCyan => "accent_cyan",
            StyleKey::GradientStart => "gradient_start",
            StyleKey::GradientEnd => "gradient_end",
            StyleKey::TrendUp => "trend_up",
            StyleKey::TrendDown => "trend_down",
            StyleKey::TrendFlat => "trend_flat",
            StyleKey::ChartLine => "chart_line",
            StyleKey::ChartGrid => "chart_grid",
            StyleKey::ChartAxis => "chart_axis",
            StyleKey::ChartBar => "chart_bar",
            StyleKey::TooltipBackground => "tooltip_background",
            StyleKey::TooltipText => "tooltip_text",
            StyleKey::SelectionBackground => "selection_background",
            StyleKey::SelectionText => "selection_text",
            StyleKey::StatusSuccess => "status_success",
            StyleKey::StatusWarning => "status_warning",
            StyleKey::StatusError => "status_error",
            StyleKey::StatusInfo => "status_info",
            StyleKey::ShortcutKey => "shortcut_key",
            StyleKey::ShortcutDescription => "shortcut_description",
            StyleKey::NavActive => "nav_active",
            StyleKey::NavInactive => "nav_inactive",
        }
    }

    pub fn from_name(name: &str) -> Option<StyleKey> {
        StyleKey::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Key backing a card accent.
    pub fn for_accent(accent: AccentColor) -> StyleKey {
        match accent {
            AccentColor::Blue => StyleKey::AccentBlue,
            AccentColor::Green => StyleKey::AccentGreen,
            AccentColor::Purple => StyleKey::AccentPurple,
            AccentColor::Orange => StyleKey::AccentOrange,
            AccentColor::Red => StyleKey::AccentRed,
            AccentColor::Cyan => StyleKey::AccentCyan,
        }
    }
}

/// Built-in colors used when a palette omits a key or carries a value that
/// cannot be parsed. Named terminal colors only, so they render on any
/// terminal.
pub mod fallback {
    use super::StyleKey;
    use crate::theme::types::ThemeMode;
    use tuirealm::props::Color;

    pub fn color(mode: ThemeMode, key: StyleKey) -> Color {
        match mode {
            ThemeMode::Dark => dark(key),
            ThemeMode::Light => light(key),
        }
    }

    fn dark(key: StyleKey) -> Color {
        match key {
            StyleKey::Background
            | StyleKey::Surface
            | StyleKey::SidebarBackground
            | StyleKey::HeaderBackground => Color::Black,
            StyleKey::CardBackground | StyleKey::TooltipBackground => Color::DarkGray,
            StyleKey::TextPrimary | StyleKey::TooltipText | StyleKey::SelectionText => {
                Color::White
            }
            StyleKey::TextSecondary | StyleKey::ShortcutDescription | StyleKey::NavInactive => {
                Color::Gray
            }
            StyleKey::TextMuted | StyleKey::Border | StyleKey::ChartGrid => Color::DarkGray,
            StyleKey::ChartAxis | StyleKey::TrendFlat => Color::Gray,
            StyleKey::SelectionBackground => Color::Blue,
            _ => shared(key),
        }
    }

    fn light(key: StyleKey) -> Color {
        match key {
            StyleKey::Background
            | StyleKey::Surface
            | StyleKey::CardBackground
            | StyleKey::SidebarBackground
            | StyleKey::HeaderBackground => Color::White,
            StyleKey::TextPrimary | StyleKey::SelectionText => Color::Black,
            StyleKey::TooltipBackground => Color::Black,
            StyleKey::TooltipText => Color::White,
            StyleKey::TextSecondary | StyleKey::ShortcutDescription | StyleKey::NavInactive => {
                Color::DarkGray
            }
            StyleKey::TextMuted | StyleKey::Border | StyleKey::ChartGrid => Color::Gray,
            StyleKey::ChartAxis | StyleKey::TrendFlat => Color::DarkGray,
            StyleKey::SelectionBackground => Color::LightBlue,
            _ => shared(key),
        }
    }

    fn shared(key: StyleKey) -> Color {
        match key {
            StyleKey::BorderFocused | StyleKey::NavActive | StyleKey::ChartLine => {
                Color::LightBlue
            }
            StyleKey::AccentPrimary | StyleKey::AccentBlue | StyleKey::GradientStart => {
                Color::Blue
            }
            StyleKey::AccentGreen | StyleKey::TrendUp | StyleKey::StatusSuccess => Color::Green,
            StyleKey::AccentPurple | StyleKey::GradientEnd | StyleKey::ChartBar => Color::Magenta,
            StyleKey::AccentOrange | StyleKey::StatusWarning | StyleKey::ShortcutKey => {
                Color::Yellow
            }
            StyleKey::AccentRed | StyleKey::TrendDown | StyleKey::StatusError => Color::Red,
            StyleKey::AccentCyan | StyleKey::StatusInfo => Color::Cyan,
            _ => Color::Gray,
        }
    }
}

/// Read-only set of resolved style tokens for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokenSet {
    mode: ThemeMode,
    border: BorderType,
    colors: BTreeMap<StyleKey, Color>,
}

impl StyleTokenSet {
    pub fn new(mode: ThemeMode, border: BorderType, colors: BTreeMap<StyleKey, Color>) -> Self {
        Self {
            mode,
            border,
            colors,
        }
    }

    /// Token set built only from the built-in fallback colors.
    pub fn fallback(mode: ThemeMode) -> Self {
        let colors = StyleKey::ALL
            .into_iter()
            .map(|key| (key, fallback::color(mode, key)))
            .collect();
        let border = match mode {
            ThemeMode::Dark => BorderType::Rounded,
            ThemeMode::Light => BorderType::Plain,
        };
        Self::new(mode, border, colors)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn border_type(&self) -> BorderType {
        self.border
    }

    /// Resolved color of a key. Keys absent from the set use the fallback.
    pub fn get(&self, key: StyleKey) -> Color {
        match self.colors.get(&key) {
            Some(color) if *color != Color::Reset => *color,
            _ => fallback::color(self.mode, key),
        }
    }

    pub fn accent(&self, accent: AccentColor) -> Color {
        self.get(StyleKey::for_accent(accent))
    }

    /// True when every key carries a resolved color.
    pub fn is_complete(&self) -> bool {
        StyleKey::ALL.iter().all(|key| {
            self.colors
                .get(key)
                .is_some_and(|color| *color != Color::Reset)
        })
    }

    pub fn gradient(&self) -> (Color, Color) {
        (self.gradient_start(), self.gradient_end())
    }

    /// Render `text` with one color per character, interpolated between the
    /// gradient stops. Named colors cannot be blended and alternate instead.
    pub fn gradient_line(&self, text: &str) -> Line<'static> {
        let (start, end) = self.gradient();
        let chars: Vec<char> = text.chars().collect();
        let steps = chars.len().saturating_sub(1).max(1) as f32;

        let spans: Vec<Span<'static>> = chars
            .iter()
            .enumerate()
            .map(|(index, ch)| {
                let t = index as f32 / steps;
                let color = match (start, end) {
                    (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                        Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
                    }
                    _ if t < 0.5 => start,
                    _ => end,
                };
                Span::styled(
                    ch.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        Line::from(spans)
    }
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    let value = from as f32 + (to as f32 - from as f32) * t;
    value.round().clamp(0.0, 255.0) as u8
}

// Generates one named accessor per style key.
macro_rules! token_accessor {
    ($($method:ident => $key:ident),* $(,)?) => {
        impl StyleTokenSet {
            $(
                pub fn $method(&self) -> Color {
                    self.get(StyleKey::$key)
                }
            )*
        }
    };
}

token_accessor! {
    background => Background,
    surface => Surface,
    card_background => CardBackground,
    sidebar_background => SidebarBackground,
    header_background => HeaderBackground,
    text_primary => TextPrimary,
    text_secondary => TextSecondary,
    text_muted => TextMuted,
    border => Border,
    border_focused => BorderFocused,
    accent_primary => AccentPrimary,
    gradient_start => GradientStart,
    gradient_end => GradientEnd,
    trend_up => TrendUp,
    trend_down => TrendDown,
    trend_flat => TrendFlat,
    chart_line => ChartLine,
    chart_grid => ChartGrid,
    chart_axis => ChartAxis,
    chart_bar => ChartBar,
    tooltip_background => TooltipBackground,
    tooltip_text => TooltipText,
    selection_background => SelectionBackground,
    selection_text => SelectionText,
    status_success => StatusSuccess,
    status_warning => StatusWarning,
    status_error => StatusError,
    status_info => StatusInfo,
    shortcut_key => ShortcutKey,
    shortcut_description => ShortcutDescription,
    nav_active => NavActive,
    nav_inactive => NavInactive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};
    use std::collections::HashSet;

    #[test]
    fn test_key_names_are_unique_and_round_trip() {
        let names: HashSet<&str> = StyleKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), StyleKey::ALL.len());

        for key in StyleKey::ALL {
            assert_some_eq!(StyleKey::from_name(key.name()), key);
        }
        assert_none!(StyleKey::from_name("message_sequence"));
    }

    #[test]
    fn test_fallback_set_is_complete_for_both_modes() {
        for mode in ThemeMode::ALL {
            let tokens = StyleTokenSet::fallback(mode);
            assert!(tokens.is_complete());
            assert_eq!(tokens.mode(), mode);
        }
    }

    #[test]
    fn test_get_falls_back_for_missing_and_reset() {
        let mut colors = BTreeMap::new();
        colors.insert(StyleKey::TextPrimary, Color::Reset);
        let tokens = StyleTokenSet::new(ThemeMode::Dark, BorderType::Plain, colors);

        assert!(!tokens.is_complete());
        assert_eq!(tokens.text_primary(), Color::White);
        assert_eq!(tokens.trend_down(), Color::Red);
    }

    #[test]
    fn test_gradient_line_interpolates_rgb_stops() {
        let mut colors = BTreeMap::new();
        colors.insert(StyleKey::GradientStart, Color::Rgb(0, 0, 0));
        colors.insert(StyleKey::GradientEnd, Color::Rgb(200, 100, 50));
        let tokens = StyleTokenSet::new(ThemeMode::Dark, BorderType::Plain, colors);

        let line = tokens.gradient_line("abc");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(line.spans[1].style.fg, Some(Color::Rgb(100, 50, 25)));
        assert_eq!(line.spans[2].style.fg, Some(Color::Rgb(200, 100, 50)));
    }

    #[test]
    fn test_accent_mapping() {
        let tokens = StyleTokenSet::fallback(ThemeMode::Dark);
        assert_eq!(tokens.accent(AccentColor::Green), tokens.get(StyleKey::AccentGreen));
    }
}
