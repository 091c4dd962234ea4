use gridkit::window::content_height;
use gridkit::{GridConfig, ScrollSnapshot, VirtualWindow};

fn config(row_height: f64, header_height: f64, overscan: usize) -> GridConfig {
    GridConfig::new()
        .row_height(row_height)
        .header_height(header_height)
        .overscan(overscan)
}

fn at(scroll_top: f64, viewport_height: f64) -> ScrollSnapshot {
    ScrollSnapshot::sized(800.0, viewport_height).scrolled(0.0, scroll_top)
}

// ============================================================================
// Window calculation
// ============================================================================

#[test]
fn test_reference_window() {
    let window = VirtualWindow::compute(10_000, &config(48.0, 48.0, 4), &at(4800.0, 480.0));
    assert_eq!(window.start, 94);
    assert_eq!(window.end, 111);
    assert_eq!(window.offset_y, 94.0 * 48.0);
    assert_eq!(window.len(), 17);
}

#[test]
fn test_top_of_list() {
    let window = VirtualWindow::compute(10_000, &config(48.0, 48.0, 4), &at(0.0, 480.0));
    assert_eq!(window.start, 0);
    // 9 visible rows + 2 * overscan
    assert_eq!(window.end, 17);
    assert_eq!(window.offset_y, 0.0);
}

#[test]
fn test_scroll_within_header_is_clamped() {
    let window = VirtualWindow::compute(100, &config(48.0, 48.0, 2), &at(30.0, 480.0));
    assert_eq!(window.start, 0);
}

#[test]
fn test_end_clamped_to_total() {
    let window = VirtualWindow::compute(5, &config(48.0, 48.0, 4), &at(0.0, 480.0));
    assert_eq!(window.range(), 0..5);
}

#[test]
fn test_last_row_reachable() {
    let total = 1_000;
    let (row_height, header_height, viewport_height) = (48.0, 48.0, 480.0);
    let scroll_top = total as f64 * row_height - viewport_height + header_height;
    let window = VirtualWindow::compute(
        total,
        &config(row_height, header_height, 4),
        &at(scroll_top, viewport_height),
    );
    assert_eq!(window.end, total);
    assert!(window.contains(total - 1));
}

#[test]
fn test_scroll_past_end_is_clamped() {
    let window = VirtualWindow::compute(50, &config(48.0, 48.0, 4), &at(1.0e9, 480.0));
    assert_eq!(window.start, 50);
    assert_eq!(window.end, 50);
    assert!(window.is_empty());
}

#[test]
fn test_zero_body_height_uses_overscan() {
    // Viewport entirely covered by the header.
    let window = VirtualWindow::compute(100, &config(48.0, 48.0, 3), &at(0.0, 40.0));
    assert_eq!(window.start, 0);
    // overscan + 2 * overscan
    assert_eq!(window.end, 9);
}

#[test]
fn test_empty_dataset() {
    let window = VirtualWindow::compute(0, &config(48.0, 48.0, 4), &at(500.0, 480.0));
    assert!(window.is_empty());
    assert_eq!(window.offset_y, 0.0);
}

#[test]
fn test_zero_row_height_does_not_divide_by_zero() {
    let window = VirtualWindow::compute(10, &config(0.0, 0.0, 1), &at(0.0, 5.0));
    assert!(window.end <= 10);
}

#[test]
fn test_materialized_count_independent_of_total() {
    let cfg = config(32.0, 32.0, 5);
    let snapshot = at(64_000.0, 640.0);
    let small = VirtualWindow::compute(100_000, &cfg, &snapshot);
    let huge = VirtualWindow::compute(10_000_000, &cfg, &snapshot);
    assert_eq!(small.len(), huge.len());
}

// ============================================================================
// Content height
// ============================================================================

#[test]
fn test_content_height_reserves_all_rows() {
    let cfg = config(48.0, 48.0, 4);
    assert_eq!(content_height(10_000, &cfg), 480_000.0);
}

#[test]
fn test_content_height_fallback() {
    let cfg = config(48.0, 48.0, 4).fallback_body_height(240.0);
    assert_eq!(content_height(2, &cfg), 240.0);
    assert_eq!(content_height(0, &cfg), 240.0);
}
