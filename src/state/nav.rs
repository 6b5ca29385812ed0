// Scroll-driven navigation bar state.

/// Past this scroll depth the bar gets its solid background.
pub const SOLID_AFTER_PX: f64 = 50.0;
/// Scrolling down past this depth hides the bar.
pub const HIDE_AFTER_PX: f64 = 100.0;
/// How far below the top of the viewport a section must reach to count as active.
pub const ACTIVE_PROBE_PX: f64 = 100.0;
/// Height kept clear for the fixed bar when jumping to a section.
pub const SCROLL_MARGIN_PX: f64 = 80.0;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct NavScroll {
    pub last_y: f64,
    pub solid: bool,
    pub hidden: bool,
}

impl NavScroll {
    pub fn on_scroll(&mut self, y: f64) {
        self.solid = y > SOLID_AFTER_PX;
        self.hidden = y > self.last_y && y > HIDE_AFTER_PX;
        self.last_y = y;
    }
}

/// Geometry of one page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section under the probe line. When sections overlap the later one wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_PROBE_PX;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// In-page anchor target, or `None` for a bare `#` / external link.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

pub fn scroll_target_y(section_top: f64) -> f64 {
    section_top - SCROLL_MARGIN_PX
}
