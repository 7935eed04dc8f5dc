//! Smooth-scroll requests handed to whatever owns the viewport.

use crate::app::domain::sections::SectionId;

/// Nav bar links.
pub const NAV_SCROLL_DURATION_MS: u32 = 500;
/// Hero call-to-action buttons land just below the fixed header.
pub const CTA_SCROLL_DURATION_MS: u32 = 800;
pub const CTA_SCROLL_OFFSET: i32 = -70;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: SectionId,
    pub smooth: bool,
    pub duration_ms: u32,
    /// Pixels added to the target's top edge.
    pub offset: i32,
}

impl ScrollRequest {
    pub fn nav(target: SectionId, duration_ms: u32) -> Self {
        Self {
            target,
            smooth: true,
            duration_ms,
            offset: 0,
        }
    }

    pub fn call_to_action(target: SectionId, duration_ms: u32, offset: i32) -> Self {
        Self {
            target,
            smooth: true,
            duration_ms,
            offset,
        }
    }
}

/// Performs the actual scrolling and easing.
pub trait ScrollCapability {
    fn scroll_to(&mut self, request: &ScrollRequest);
}

/// Collects requests instead of scrolling.
#[derive(Debug, Default)]
pub struct RecordingScroller {
    pub requests: Vec<ScrollRequest>,
}

impl ScrollCapability for RecordingScroller {
    fn scroll_to(&mut self, request: &ScrollRequest) {
        self.requests.push(request.clone());
    }
}
