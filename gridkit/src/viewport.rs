//! Viewport tracking.
//!
//! The [`ViewportTracker`] turns scroll and resize notifications from a scroll
//! container into [`ScrollSnapshot`]s, at most one per animation frame.
//!
//! The host supplies two capabilities:
//! - [`ScrollContainer`]: measures the container and owns its observers
//! - [`FrameScheduler`]: schedules and cancels next-frame callbacks
//!
//! Lifecycle:
//! 1. [`ViewportTracker::attach`] registers observers and takes one snapshot
//! 2. [`ViewportTracker::notify`] schedules a frame unless one is pending
//! 3. [`ViewportTracker::on_frame`] reads the container and emits a snapshot
//! 4. [`ViewportTracker::detach`] (or drop) cancels the pending frame and
//!    releases the observers

/// Dimensions and offsets of the scroll container at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl ScrollSnapshot {
    /// Snapshot of an unscrolled viewport of the given size.
    pub fn sized(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            scroll_width: viewport_width,
            scroll_height: viewport_height,
            ..Default::default()
        }
    }

    /// Set the scroll offsets.
    pub fn scrolled(mut self, scroll_left: f64, scroll_top: f64) -> Self {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self
    }

    /// Set the scrollable content size.
    pub fn content(mut self, scroll_width: f64, scroll_height: f64) -> Self {
        self.scroll_width = scroll_width;
        self.scroll_height = scroll_height;
        self
    }
}

/// Notifications that invalidate the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

/// Identifier of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// The element whose scroll offset and size are tracked.
pub trait ScrollContainer {
    /// Read the current offsets and dimensions.
    fn measure(&self) -> ScrollSnapshot;

    /// Start delivering scroll and resize notifications.
    fn observe(&mut self) {}

    /// Stop delivering notifications.
    fn unobserve(&mut self) {}
}

/// Schedules work for the next animation frame.
pub trait FrameScheduler {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameId;

    /// Cancel a previously requested callback.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Coalesces scroll/resize notifications into one snapshot per frame.
///
/// Teardown runs exactly once, either from an explicit [`detach`] or from
/// `Drop`, so a tracker discarded on any path leaves no pending frame and no
/// registered observers.
///
/// [`detach`]: ViewportTracker::detach
#[derive(Debug)]
pub struct ViewportTracker<C: ScrollContainer, S: FrameScheduler> {
    container: C,
    scheduler: S,
    snapshot: ScrollSnapshot,
    pending: Option<FrameId>,
    attached: bool,
}

impl<C: ScrollContainer, S: FrameScheduler> ViewportTracker<C, S> {
    /// Register observers and take the initial snapshot.
    pub fn attach(mut container: C, scheduler: S) -> Self {
        container.observe();
        let snapshot = container.measure();
        log::debug!(
            "Viewport tracker attached ({}x{})",
            snapshot.viewport_width,
            snapshot.viewport_height
        );
        Self {
            container,
            scheduler,
            snapshot,
            pending: None,
            attached: true,
        }
    }

    /// Latest emitted snapshot.
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    /// Whether a frame read is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether observers are still registered.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handle a scroll or resize notification.
    ///
    /// Returns true if this call scheduled a new frame. Notifications arriving
    /// while a frame is pending, or after detach, are absorbed.
    pub fn notify(&mut self, event: ViewportEvent) -> bool {
        if !self.attached || self.pending.is_some() {
            log::trace!("Coalesced {event:?} notification");
            return false;
        }
        let id = self.scheduler.request_frame();
        log::trace!("{event:?} scheduled frame {id:?}");
        self.pending = Some(id);
        true
    }

    /// Run a scheduled frame.
    ///
    /// Returns the fresh snapshot, or `None` when `id` is not the pending
    /// frame (stale or cancelled callbacks).
    pub fn on_frame(&mut self, id: FrameId) -> Option<ScrollSnapshot> {
        if self.pending != Some(id) {
            log::trace!("Ignoring stale frame {id:?}");
            return None;
        }
        self.pending = None;
        self.snapshot = self.container.measure();
        Some(self.snapshot)
    }

    /// The tracked container.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the tracked container, for the host that owns it.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Cancel any pending frame and release the observers. Idempotent.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        self.container.unobserve();
        self.attached = false;
        log::debug!("Viewport tracker detached");
    }
}

impl<C: ScrollContainer, S: FrameScheduler> Drop for ViewportTracker<C, S> {
    fn drop(&mut self) {
        self.detach();
    }
}
