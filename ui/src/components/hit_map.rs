use crate::components::common::{ComponentId, area_contains};
use tuirealm::ratatui::layout::Rect;

/// Where each component was drawn in the last frame.
///
/// Entries registered later are drawn on top, so lookups scan from the end.
/// Overlays such as an expanded dropdown menu register after the page.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    entries: Vec<(ComponentId, Rect)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, id: ComponentId, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.entries.push((id, area));
        }
    }

    /// Topmost component under the given cell.
    pub fn component_at(&self, column: u16, row: u16) -> Option<&ComponentId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, area)| area_contains(*area, column, row))
            .map(|(id, _)| id)
    }

    /// Last registered area of a component.
    pub fn area_of(&self, id: &ComponentId) -> Option<Rect> {
        self.entries
            .iter()
            .rev()
            .find(|(entry, _)| entry == id)
            .map(|(_, area)| *area)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn test_later_entries_win() {
        let mut hits = HitMap::new();
        hits.register(ComponentId::PriceChart, Rect::new(0, 0, 40, 20));
        hits.register(ComponentId::TimeframeDropdown, Rect::new(30, 2, 10, 6));

        assert_some_eq!(hits.component_at(32, 4), &ComponentId::TimeframeDropdown);
        assert_some_eq!(hits.component_at(5, 4), &ComponentId::PriceChart);
        assert_none!(hits.component_at(45, 4));
    }

    #[test]
    fn test_empty_areas_are_ignored() {
        let mut hits = HitMap::new();
        hits.register(ComponentId::Sidebar, Rect::new(0, 0, 0, 10));
        assert!(hits.is_empty());

        hits.register(ComponentId::Sidebar, Rect::new(0, 0, 20, 10));
        hits.register(ComponentId::Sidebar, Rect::new(0, 0, 6, 10));
        assert_some_eq!(hits.area_of(&ComponentId::Sidebar), Rect::new(0, 0, 6, 10));

        hits.clear();
        assert_eq!(hits.len(), 0);
    }
}
