use crate::column::ColumnLayout;
use crate::viewport::ScrollSnapshot;

/// Tolerance for sub-pixel scroll positions at the right edge.
const RIGHT_EDGE_TOLERANCE: f64 = 1.0;

/// Which fixed-group edge shadows are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollShadows {
    pub left: bool,
    pub right: bool,
}

impl ScrollShadows {
    /// Left shadow when a left group exists and content is scrolled right of
    /// it; right shadow when a right group exists and content remains hidden
    /// beneath it.
    pub fn compute(columns: &ColumnLayout, snapshot: &ScrollSnapshot) -> Self {
        let max_scroll = snapshot.scroll_width - snapshot.viewport_width - RIGHT_EDGE_TOLERANCE;
        Self {
            left: columns.has_left() && snapshot.scroll_left > 0.0,
            right: columns.has_right() && snapshot.scroll_left < max_scroll,
        }
    }
}
