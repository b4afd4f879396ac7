use super::links::{scroll_sections, NavLink};
use super::route::Section;

/// Scroll offset (px) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// A section counts as reached this many pixels before its top edge.
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub is_past_threshold: bool,
    pub active_section: Section,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            is_past_threshold: false,
            active_section: Section::Home,
        }
    }
}

pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Find the furthest-down scroll target whose top (minus the lookahead) has
/// been reached.
///
/// Walks the scroll links in reverse order and stops at the first match, so
/// when several sections qualify the last one in link order wins. Sections
/// that `offset_top` cannot locate are skipped. Returns `None` when nothing
/// qualifies; callers keep their previous selection in that case.
pub fn resolve_active_section<F>(links: &[NavLink], scroll_y: f64, offset_top: F) -> Option<Section>
where
    F: Fn(Section) -> Option<f64>,
{
    scroll_sections(links).rev().find(|section| {
        offset_top(*section)
            .map(|top| scroll_y >= top - SECTION_LOOKAHEAD_PX)
            .unwrap_or(false)
    })
}
