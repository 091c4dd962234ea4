use std::cell::RefCell;
use std::rc::Rc;

use gridkit::viewport::{
    FrameId, FrameScheduler, ScrollContainer, ScrollSnapshot, ViewportEvent, ViewportTracker,
};

/// Shared record of what the fakes observed, inspectable after drop.
#[derive(Debug, Default)]
struct Probe {
    snapshot: ScrollSnapshot,
    observing: bool,
    measures: usize,
    requested: Vec<FrameId>,
    cancelled: Vec<FrameId>,
}

struct FakeContainer(Rc<RefCell<Probe>>);

impl ScrollContainer for FakeContainer {
    fn measure(&self) -> ScrollSnapshot {
        let mut probe = self.0.borrow_mut();
        probe.measures += 1;
        probe.snapshot
    }

    fn observe(&mut self) {
        self.0.borrow_mut().observing = true;
    }

    fn unobserve(&mut self) {
        self.0.borrow_mut().observing = false;
    }
}

struct FakeScheduler {
    probe: Rc<RefCell<Probe>>,
    next: u64,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> FrameId {
        self.next += 1;
        let id = FrameId(self.next);
        self.probe.borrow_mut().requested.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.probe.borrow_mut().cancelled.push(id);
    }
}

fn tracker() -> (
    ViewportTracker<FakeContainer, FakeScheduler>,
    Rc<RefCell<Probe>>,
) {
    let probe = Rc::new(RefCell::new(Probe {
        snapshot: ScrollSnapshot::sized(800.0, 600.0),
        ..Default::default()
    }));
    let tracker = ViewportTracker::attach(
        FakeContainer(Rc::clone(&probe)),
        FakeScheduler {
            probe: Rc::clone(&probe),
            next: 0,
        },
    );
    (tracker, probe)
}

// ============================================================================
// Attach
// ============================================================================

#[test]
fn test_attach_takes_snapshot_and_observes() {
    let (tracker, probe) = tracker();
    assert!(tracker.is_attached());
    assert!(!tracker.is_pending());
    assert_eq!(tracker.snapshot(), ScrollSnapshot::sized(800.0, 600.0));
    let probe = probe.borrow();
    assert!(probe.observing);
    assert_eq!(probe.measures, 1);
    assert!(probe.requested.is_empty());
}

// ============================================================================
// Coalescing
// ============================================================================

#[test]
fn test_events_coalesce_into_one_frame() {
    let (mut tracker, probe) = tracker();

    assert!(tracker.notify(ViewportEvent::Scroll));
    assert!(!tracker.notify(ViewportEvent::Scroll));
    assert!(!tracker.notify(ViewportEvent::Resize));
    assert!(!tracker.notify(ViewportEvent::Scroll));

    assert_eq!(probe.borrow().requested.len(), 1);
    assert!(tracker.is_pending());
}

#[test]
fn test_frame_reads_latest_offsets() {
    let (mut tracker, probe) = tracker();
    tracker.notify(ViewportEvent::Scroll);
    probe.borrow_mut().snapshot = ScrollSnapshot::sized(800.0, 600.0).scrolled(0.0, 120.0);
    tracker.notify(ViewportEvent::Scroll);
    probe.borrow_mut().snapshot = ScrollSnapshot::sized(800.0, 600.0).scrolled(0.0, 480.0);

    let id = probe.borrow().requested[0];
    let snapshot = tracker.on_frame(id).unwrap();
    assert_eq!(snapshot.scroll_top, 480.0);
    assert_eq!(tracker.snapshot().scroll_top, 480.0);
    assert!(!tracker.is_pending());
    // One read on attach, one for the frame.
    assert_eq!(probe.borrow().measures, 2);
}

#[test]
fn test_new_frame_after_previous_ran() {
    let (mut tracker, probe) = tracker();
    tracker.notify(ViewportEvent::Scroll);
    let first = probe.borrow().requested[0];
    tracker.on_frame(first);

    assert!(tracker.notify(ViewportEvent::Resize));
    assert_eq!(probe.borrow().requested.len(), 2);
}

#[test]
fn test_stale_frame_ignored() {
    let (mut tracker, probe) = tracker();
    tracker.notify(ViewportEvent::Scroll);
    assert_eq!(tracker.on_frame(FrameId(999)), None);
    assert!(tracker.is_pending());
    assert_eq!(probe.borrow().measures, 1);
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_detach_cancels_pending_frame() {
    let (mut tracker, probe) = tracker();
    tracker.notify(ViewportEvent::Scroll);
    let id = probe.borrow().requested[0];

    tracker.detach();
    assert!(!tracker.is_attached());
    assert_eq!(probe.borrow().cancelled, vec![id]);
    assert!(!probe.borrow().observing);

    // Events after detach schedule nothing; the cancelled frame does nothing.
    assert!(!tracker.notify(ViewportEvent::Scroll));
    assert_eq!(tracker.on_frame(id), None);
    assert_eq!(probe.borrow().requested.len(), 1);
}

#[test]
fn test_detach_is_idempotent() {
    let (mut tracker, probe) = tracker();
    tracker.notify(ViewportEvent::Scroll);
    tracker.detach();
    tracker.detach();
    drop(tracker);
    assert_eq!(probe.borrow().cancelled.len(), 1);
}

#[test]
fn test_drop_releases_everything() {
    let (mut tracker, probe) = tracker();
    tracker.notify(ViewportEvent::Resize);
    drop(tracker);
    let probe = probe.borrow();
    assert!(!probe.observing);
    assert_eq!(probe.cancelled.len(), 1);
}

#[test]
fn test_drop_during_unwind_releases_observers() {
    let probe = Rc::new(RefCell::new(Probe::default()));
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut tracker = ViewportTracker::attach(
            FakeContainer(Rc::clone(&probe)),
            FakeScheduler {
                probe: Rc::clone(&probe),
                next: 0,
            },
        );
        tracker.notify(ViewportEvent::Scroll);
        panic!("host failed mid-frame");
    }));
    assert!(result.is_err());
    let probe = probe.borrow();
    assert!(!probe.observing);
    assert_eq!(probe.cancelled.len(), 1);
}

#[test]
fn test_no_cancel_without_pending_frame() {
    let (tracker, probe) = tracker();
    drop(tracker);
    assert!(probe.borrow().cancelled.is_empty());
    assert!(!probe.borrow().observing);
}
