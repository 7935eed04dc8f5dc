//! Scroll spy: which section the nav bar highlights, and whether the page
//! has moved far enough for the header to switch to its solid style.

use crate::app::domain::sections::{Section, SectionId};

/// Past this many pixels the header counts as scrolled.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// A section becomes active this many pixels before its top edge reaches
/// the top of the viewport.
pub const LOOK_AHEAD: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot<'a> {
    pub scrolled: bool,
    pub active: &'a SectionId,
}

/// Pure recomputation for one scroll position.
///
/// `sections` must be in document order. The last section whose
/// `offset_top - LOOK_AHEAD <= scroll_y` wins, so equal offsets resolve to
/// the later section. When none qualifies, `previous` is carried forward.
pub fn track_scroll<'a>(
    scroll_y: f64,
    sections: &'a [Section],
    previous: &'a SectionId,
) -> ScrollSnapshot<'a> {
    let mut active = previous;
    for section in sections {
        if section.offset_top - LOOK_AHEAD <= scroll_y {
            active = &section.id;
        }
    }

    ScrollSnapshot {
        scrolled: scroll_y > SCROLLED_THRESHOLD,
        active,
    }
}

/// Owns the latest layout snapshot and the tracker outputs.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    layout: Vec<Section>,
    active: SectionId,
    scrolled: bool,
    last_scroll_y: f64,
}

impl SectionTracker {
    /// Starts on the first section, or `"hero"` for an empty layout.
    pub fn new(layout: Vec<Section>) -> Self {
        let active = layout
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| SectionId::from("hero"));

        Self {
            layout,
            active,
            scrolled: false,
            last_scroll_y: 0.0,
        }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn layout(&self) -> &[Section] {
        &self.layout
    }

    pub fn position(&self) -> f64 {
        self.last_scroll_y
    }

    /// Index of the active section in document order.
    pub fn active_index(&self) -> Option<usize> {
        self.layout.iter().position(|s| s.id == self.active)
    }

    /// Returns true when the highlighted section changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.last_scroll_y = scroll_y;

        let snapshot = track_scroll(scroll_y, &self.layout, &self.active);
        self.scrolled = snapshot.scrolled;
        if snapshot.active == &self.active {
            return false;
        }

        // Only reallocate when the section actually changes
        let next = snapshot.active.clone();
        log::debug!("Active section {} -> {}", self.active, next);
        self.active = next;
        true
    }

    /// New measurements (resize, images loaded). Recomputes against the
    /// last known scroll position.
    pub fn set_layout(&mut self, layout: Vec<Section>) {
        self.layout = layout;
        self.on_scroll(self.last_scroll_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> Vec<Section> {
        vec![
            Section::new("hero", 0.0),
            Section::new("about", 800.0),
            Section::new("skills", 1600.0),
        ]
    }

    #[test]
    fn test_top_of_page() {
        let sections = three_sections();
        let prev = SectionId::from("hero");
        let snap = track_scroll(0.0, &sections, &prev);
        assert_eq!(snap.active, "hero");
        assert!(!snap.scrolled);
    }

    #[test]
    fn test_scrolled_boundary() {
        let sections = three_sections();
        let prev = SectionId::from("hero");
        assert!(!track_scroll(50.0, &sections, &prev).scrolled);
        assert!(track_scroll(51.0, &sections, &prev).scrolled);
        assert!(track_scroll(60.0, &sections, &prev).scrolled);
    }

    #[test]
    fn test_look_ahead() {
        let sections = three_sections();
        let prev = SectionId::from("hero");
        assert_eq!(track_scroll(900.0, &sections, &prev).active, "about");
        assert_eq!(track_scroll(599.0, &sections, &prev).active, "hero");
        assert_eq!(track_scroll(600.0, &sections, &prev).active, "about");
        assert_eq!(track_scroll(1400.0, &sections, &prev).active, "skills");
    }

    #[test]
    fn test_equal_offsets_later_wins() {
        let sections = vec![
            Section::new("hero", 0.0),
            Section::new("about", 800.0),
            Section::new("skills", 800.0),
        ];
        let prev = SectionId::from("hero");
        assert_eq!(track_scroll(700.0, &sections, &prev).active, "skills");
    }

    #[test]
    fn test_nothing_qualifies_keeps_previous() {
        let sections = vec![Section::new("about", 900.0), Section::new("skills", 1700.0)];
        let prev = SectionId::from("hero");
        assert_eq!(track_scroll(100.0, &sections, &prev).active, "hero");
        assert_eq!(track_scroll(100.0, &[], &prev).active, "hero");
    }

    #[test]
    fn test_recompute_is_pure() {
        let sections = three_sections();
        let prev = SectionId::from("hero");
        let a = track_scroll(1234.0, &sections, &prev);
        let b = track_scroll(1234.0, &sections, &prev);
        assert_eq!(a, b);
    }

    #[test]
    fn test_monotonic_while_scrolling_down() {
        let sections = three_sections();
        let mut tracker = SectionTracker::new(sections);
        let mut last_index = 0;
        let mut y = 0.0;
        while y < 3000.0 {
            tracker.on_scroll(y);
            let index = tracker.active_index().unwrap();
            assert!(index >= last_index, "jumped back at y={}", y);
            last_index = index;
            y += 37.0;
        }
        assert_eq!(tracker.active(), &SectionId::from("skills"));
    }

    #[test]
    fn test_tracker_reports_changes() {
        let mut tracker = SectionTracker::new(three_sections());
        assert!(!tracker.on_scroll(10.0));
        assert!(tracker.on_scroll(700.0));
        assert!(!tracker.on_scroll(710.0));
        assert!(tracker.scrolled());
        assert!(tracker.on_scroll(0.0));
        assert!(!tracker.scrolled());
        assert_eq!(tracker.active(), &SectionId::from("hero"));
    }

    #[test]
    fn test_set_layout_recomputes() {
        let mut tracker = SectionTracker::new(three_sections());
        tracker.on_scroll(900.0);
        assert_eq!(tracker.active(), &SectionId::from("about"));

        // Sections grew taller, "about" now starts further down
        tracker.set_layout(vec![
            Section::new("hero", 0.0),
            Section::new("about", 1200.0),
            Section::new("skills", 2400.0),
        ]);
        // Nothing new qualifies beyond hero, which is re-selected by the scan
        assert_eq!(tracker.active(), &SectionId::from("hero"));
        assert_eq!(tracker.position(), 900.0);
    }

    #[test]
    fn test_empty_layout_starts_on_hero() {
        let tracker = SectionTracker::new(Vec::new());
        assert_eq!(tracker.active(), &SectionId::from("hero"));
        assert_eq!(tracker.active_index(), None);
    }
}
