// Core components
pub mod common;
pub mod hit_map;
pub mod state;

// Reusable patterns and utilities
pub mod base_popup;
pub mod disclosure;
pub mod tooltip;

// Display components
pub mod allocation_chart;
pub mod change_badge;
pub mod price_chart;
pub mod stat_card;

// Tables
pub mod data_table;
pub mod holdings_table;
pub mod market_table;
pub mod positions_table;
pub mod transaction_list;

// Input components
pub mod dropdown;
pub mod search_input;
pub mod tab_bar;

// Layout shell
pub mod header;
pub mod help;
pub mod help_bar;
pub mod help_screen;
pub mod sidebar;

// Popup components
pub mod error_popup;

// System components
pub mod global_key_watcher;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::theme::{StyleResolver, ThemeContext, ThemeMode, ThemeStore};
    use tuirealm::MockComponent;
    use tuirealm::ratatui::Terminal;
    use tuirealm::ratatui::backend::TestBackend;
    use tuirealm::ratatui::buffer::Buffer;
    use tuirealm::ratatui::layout::Rect;

    /// Install the dark theme once per test binary. Tests never toggle it.
    pub fn init_theme() {
        let _ = ThemeContext::init_global(ThemeStore::new(
            ThemeMode::Dark,
            StyleResolver::embedded(),
        ));
    }

    pub fn render_component<C: MockComponent>(component: &mut C, width: u16, height: u16) -> Buffer {
        render_component_at(component, width, height, Rect::new(0, 0, width, height))
    }

    /// Render into `area` of a `width` x `height` screen.
    pub fn render_component_at<C: MockComponent>(
        component: &mut C,
        width: u16,
        height: u16,
        area: Rect,
    ) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| component.view(frame, area))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
