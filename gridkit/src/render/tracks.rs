//! Grid-template tracks and group geometry.

use crate::column::{ColumnLayout, ColumnMeta};
use crate::viewport::ScrollSnapshot;

/// Smallest total content width.
pub const MIN_CONTENT_WIDTH: f64 = 320.0;

/// Track widths of one column group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracks {
    pub widths: Vec<f64>,
}

impl Tracks {
    fn of(columns: &[ColumnMeta]) -> Self {
        Self {
            widths: columns.iter().map(ColumnMeta::track_width).collect(),
        }
    }

    /// Sum of the track widths.
    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Grid-template string, e.g. `"44px 96px 320px"`.
    pub fn template(&self) -> String {
        self.widths
            .iter()
            .map(|width| format!("{width}px"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Left edge of each track relative to the group.
    pub fn offsets(&self) -> Vec<f64> {
        let mut x = 0.0;
        self.widths
            .iter()
            .map(|width| {
                let offset = x;
                x += width;
                offset
            })
            .collect()
    }
}

/// Horizontal placement of the three column groups.
///
/// Fixed groups are sticky at offset 0 from their edge; the center group moves
/// with `scroll_left`. All three share the row's vertical position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTracks {
    pub left: Tracks,
    pub center: Tracks,
    pub right: Tracks,
    /// `max(sum of groups, viewport width, MIN_CONTENT_WIDTH)`.
    pub content_width: f64,
    /// Sticky offset of the left group from the container's left edge.
    pub left_sticky: f64,
    /// Sticky offset of the right group from the container's right edge.
    pub right_sticky: f64,
}

impl GroupTracks {
    /// Build tracks for every group.
    pub fn new(columns: &ColumnLayout, viewport_width: f64) -> Self {
        let left = Tracks::of(&columns.left);
        let center = Tracks::of(&columns.center);
        let right = Tracks::of(&columns.right);
        let sum = left.total() + center.total() + right.total();
        Self {
            content_width: sum.max(viewport_width).max(MIN_CONTENT_WIDTH),
            left,
            center,
            right,
            left_sticky: 0.0,
            right_sticky: 0.0,
        }
    }

    /// Viewport-relative x of the left group.
    pub fn left_x(&self) -> f64 {
        self.left_sticky
    }

    /// Viewport-relative x of the center group at the snapshot's offset.
    pub fn center_x(&self, snapshot: &ScrollSnapshot) -> f64 {
        self.left.total() - snapshot.scroll_left
    }

    /// Viewport-relative x of the right group.
    pub fn right_x(&self, snapshot: &ScrollSnapshot) -> f64 {
        snapshot.viewport_width - self.right_sticky - self.right.total()
    }
}
