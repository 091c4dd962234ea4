//! Virtualization window calculation.
//!
//! Only rows inside the window are materialized; the rest of the body is
//! represented by reserved height so the scrollbar behaves as if every row
//! were present. Rows must share one fixed height.

use std::ops::Range;

use crate::config::GridConfig;
use crate::viewport::ScrollSnapshot;

/// The contiguous range of rows to materialize at a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VirtualWindow {
    /// First materialized row index.
    pub start: usize,
    /// One past the last materialized row index.
    pub end: usize,
    /// Vertical offset of the first materialized row within the body.
    pub offset_y: f64,
}

impl VirtualWindow {
    /// Compute the window for `total_rows` rows at the snapshot's offset.
    pub fn compute(total_rows: usize, config: &GridConfig, snapshot: &ScrollSnapshot) -> Self {
        let row_height = config.effective_row_height();
        let header_height = config.effective_header_height();
        let overscan = config.overscan;

        let body_viewport_height = (snapshot.viewport_height - header_height).max(0.0);
        let body_scroll_top = (snapshot.scroll_top - header_height).max(0.0);

        let base_visible = if body_viewport_height > 0.0 {
            (body_viewport_height / row_height).ceil() as usize
        } else {
            overscan
        };

        let first_visible = (body_scroll_top / row_height).floor() as usize;
        let start = first_visible.saturating_sub(overscan).min(total_rows);
        let end = start
            .saturating_add(base_visible)
            .saturating_add(overscan.saturating_mul(2))
            .min(total_rows);

        let window = Self {
            start,
            end,
            offset_y: start as f64 * row_height,
        };
        log::trace!(
            "Window {}..{} of {} (scroll_top {})",
            window.start,
            window.end,
            total_rows,
            snapshot.scroll_top
        );
        window
    }

    /// Materialized row indices.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of materialized rows.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether nothing is materialized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `index` is materialized.
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Total scrollable body height, independent of how many rows are materialized.
pub fn content_height(total_rows: usize, config: &GridConfig) -> f64 {
    let rows_height = total_rows as f64 * config.effective_row_height();
    rows_height.max(config.effective_fallback_body_height())
}

/// Row index under a body-relative y coordinate, ignoring materialization.
pub(crate) fn index_at_body_y(body_y: f64, config: &GridConfig) -> Option<usize> {
    if !body_y.is_finite() || body_y < 0.0 {
        return None;
    }
    Some((body_y / config.effective_row_height()).floor() as usize)
}
