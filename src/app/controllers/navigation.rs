use crate::app::domain::sections::{NAV_ITEMS, NavItem, Section, SectionId};
use crate::app::services::navigation::{ScrollCapability, ScrollRequest};

use super::sections::SectionTracker;

/// Navigation bar: scroll spy, links and the mobile drawer.
#[derive(Debug, Clone)]
pub struct NavBar {
    tracker: SectionTracker,
    items: &'static [NavItem],
    drawer_open: bool,
    scroll_duration_ms: u32,
}

impl NavBar {
    pub fn new(layout: Vec<Section>, scroll_duration_ms: u32) -> Self {
        Self {
            tracker: SectionTracker::new(layout),
            items: &NAV_ITEMS,
            drawer_open: false,
            scroll_duration_ms,
        }
    }

    pub fn items(&self) -> &'static [NavItem] {
        self.items
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    pub fn active(&self) -> &SectionId {
        self.tracker.active()
    }

    pub fn scrolled(&self) -> bool {
        self.tracker.scrolled()
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.tracker.active() == item.target
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.tracker.on_scroll(scroll_y)
    }

    pub fn set_layout(&mut self, layout: Vec<Section>) {
        self.tracker.set_layout(layout);
    }

    /// Scroll to a nav target. Picking a link closes the drawer. Returns
    /// the request handed to `scroller`, or `None` for an unknown target.
    pub fn navigate(
        &mut self,
        target: &str,
        scroller: &mut dyn ScrollCapability,
    ) -> Option<ScrollRequest> {
        let Some(item) = self.items.iter().find(|i| i.target == target) else {
            log::warn!("No navigation target named '{}'", target);
            return None;
        };

        self.drawer_open = false;
        let request = ScrollRequest::nav(SectionId::from(item.target), self.scroll_duration_ms);
        scroller.scroll_to(&request);
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::sections::uniform_layout;
    use crate::app::services::navigation::{NAV_SCROLL_DURATION_MS, RecordingScroller};

    fn navbar() -> NavBar {
        NavBar::new(uniform_layout(800.0), NAV_SCROLL_DURATION_MS)
    }

    #[test]
    fn test_navigate_issues_request_and_closes_drawer() {
        let mut nav = navbar();
        let mut scroller = RecordingScroller::default();
        nav.toggle_drawer();
        assert!(nav.drawer_open());

        let req = nav.navigate("projects", &mut scroller).unwrap();
        assert_eq!(req.target, SectionId::from("projects"));
        assert_eq!(req.duration_ms, 500);
        assert!(!nav.drawer_open());
        assert_eq!(scroller.requests.len(), 1);
    }

    #[test]
    fn test_unknown_target() {
        let mut nav = navbar();
        let mut scroller = RecordingScroller::default();
        nav.toggle_drawer();

        assert!(nav.navigate("blog", &mut scroller).is_none());
        assert!(scroller.requests.is_empty());
        assert!(nav.drawer_open());
    }

    #[test]
    fn test_highlight_follows_scroll() {
        let mut nav = navbar();
        nav.on_scroll(1500.0);
        let active: Vec<&str> = nav
            .items()
            .iter()
            .filter(|i| nav.is_active(i))
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Skills"]);
        assert!(nav.scrolled());
    }
}
