//! Terminal-backed scroll container and frame clock.
//!
//! The terminal has no native scrolling, so the host owns the offsets. Every
//! dimension is expressed in pixels using a fixed cell size, which keeps the
//! engine's geometry in the same units a DOM host would use.

use std::time::{Duration, Instant};

use gridkit::viewport::{FrameId, FrameScheduler, ScrollContainer, ScrollSnapshot};

/// Pixel width of one terminal cell.
pub const CELL_WIDTH: f64 = 8.0;

/// Pixel height of one terminal cell.
pub const CELL_HEIGHT: f64 = 16.0;

/// Delay between a scroll/resize and the frame that reads it.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Input poll timeout when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub fn cells_to_px(cells: u16) -> f64 {
    f64::from(cells) * CELL_WIDTH
}

pub fn lines_to_px(lines: u16) -> f64 {
    f64::from(lines) * CELL_HEIGHT
}

/// Cell column containing pixel `x`.
pub fn px_to_column(x: f64) -> i32 {
    (x / CELL_WIDTH).floor() as i32
}

/// Cell line containing pixel `y`.
pub fn px_to_line(y: f64) -> i32 {
    (y / CELL_HEIGHT).floor() as i32
}

/// The grid's region of the terminal, with host-owned scroll offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalViewport {
    width: f64,
    height: f64,
    content_width: f64,
    content_height: f64,
    scroll_left: f64,
    scroll_top: f64,
}

impl TerminalViewport {
    pub fn new(columns: u16, lines: u16) -> Self {
        Self {
            width: cells_to_px(columns),
            height: lines_to_px(lines),
            content_width: 0.0,
            content_height: 0.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn resize(&mut self, columns: u16, lines: u16) {
        self.width = cells_to_px(columns);
        self.height = lines_to_px(lines);
        self.clamp();
    }

    /// Set the scrollable content size (header included).
    pub fn set_content(&mut self, width: f64, height: f64) {
        self.content_width = width;
        self.content_height = height;
        self.clamp();
    }

    /// Scroll by a pixel delta. Returns true if an offset changed.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) -> bool {
        let before = (self.scroll_left, self.scroll_top);
        self.scroll_left += dx;
        self.scroll_top += dy;
        self.clamp();
        before != (self.scroll_left, self.scroll_top)
    }

    fn clamp(&mut self) {
        let max_left = (self.content_width - self.width).max(0.0);
        let max_top = (self.content_height - self.height).max(0.0);
        self.scroll_left = self.scroll_left.clamp(0.0, max_left);
        self.scroll_top = self.scroll_top.clamp(0.0, max_top);
    }
}

impl ScrollContainer for TerminalViewport {
    fn measure(&self) -> ScrollSnapshot {
        ScrollSnapshot::sized(self.width, self.height)
            .content(
                self.content_width.max(self.width),
                self.content_height.max(self.height),
            )
            .scrolled(self.scroll_left, self.scroll_top)
    }

    fn observe(&mut self) {
        log::debug!("Observing terminal viewport");
    }

    fn unobserve(&mut self) {
        log::debug!("Stopped observing terminal viewport");
    }
}

/// Fixed-interval frame scheduler polled by the event loop.
#[derive(Debug, Default)]
pub struct FrameClock {
    next: u64,
    pending: Option<(FrameId, Instant)>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long the event loop may block before the next frame is due.
    pub fn timeout(&self) -> Duration {
        self.timeout_at(Instant::now())
    }

    fn timeout_at(&self, now: Instant) -> Duration {
        match self.pending {
            Some((_, due)) => due.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// The pending frame, if its time has come. Clears it.
    pub fn take_due(&mut self) -> Option<FrameId> {
        self.take_due_at(Instant::now())
    }

    fn take_due_at(&mut self, now: Instant) -> Option<FrameId> {
        match self.pending {
            Some((id, due)) if due <= now => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameId {
        self.next += 1;
        let id = FrameId(self.next);
        self.pending = Some((id, Instant::now() + FRAME_INTERVAL));
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending.is_some_and(|(pending, _)| pending == id) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut viewport = TerminalViewport::new(80, 30);
        viewport.set_content(1_000.0, 2_000.0);

        assert!(!viewport.scroll_by(0.0, -50.0));
        assert!(viewport.scroll_by(0.0, 10_000.0));
        let snapshot = viewport.measure();
        assert_eq!(snapshot.scroll_top, 2_000.0 - 30.0 * CELL_HEIGHT);
        assert!(viewport.scroll_by(10_000.0, 0.0));
        assert_eq!(viewport.measure().scroll_left, 1_000.0 - 80.0 * CELL_WIDTH);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut viewport = TerminalViewport::new(80, 10);
        viewport.set_content(640.0, 480.0);
        viewport.scroll_by(0.0, 1_000.0);
        assert_eq!(viewport.measure().scroll_top, 480.0 - 160.0);

        viewport.resize(80, 40);
        assert_eq!(viewport.measure().scroll_top, 0.0);
        assert_eq!(viewport.measure().scroll_height, 640.0);
    }

    #[test]
    fn test_frame_clock_due() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.take_due(), None);

        let before = Instant::now();
        let id = clock.request_frame();
        assert_eq!(clock.take_due_at(before), None);
        assert!(clock.timeout_at(before) >= FRAME_INTERVAL);

        let later = Instant::now() + FRAME_INTERVAL;
        assert_eq!(clock.take_due_at(later), Some(id));
        assert_eq!(clock.take_due_at(later), None);
        assert_eq!(clock.timeout_at(later), IDLE_POLL);
    }

    #[test]
    fn test_frame_clock_cancel() {
        let mut clock = FrameClock::new();
        let first = clock.request_frame();
        clock.cancel_frame(FrameId(first.0 + 10));
        assert!(clock.pending.is_some());
        clock.cancel_frame(first);
        assert!(clock.pending.is_none());
    }
}
