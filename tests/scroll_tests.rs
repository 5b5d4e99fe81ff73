// Host-side tests for scroll progress tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/scroll.rs"]
mod scroll;

use scroll::{ScrollMetrics, ScrollProgressTracker, ScrollState};

fn metrics(offset: f32, extent: f32, viewport: f32) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        extent,
        viewport,
    }
}

#[test]
fn progress_matches_clamped_ratio() {
    let mut t = ScrollProgressTracker::new(0.01, 0.0);
    t.sample(metrics(450.0, 1000.0, 500.0), 0.016);
    assert!((t.progress() - 0.9).abs() < 1e-6);
}

#[test]
fn progress_stays_in_unit_range() {
    let mut t = ScrollProgressTracker::new(0.01, 0.0);
    for offset in [-100.0, 0.0, 250.0, 500.0, 10_000.0] {
        t.sample(metrics(offset, 1000.0, 500.0), 0.016);
        let p = t.progress();
        assert!((0.0..=1.0).contains(&p), "offset {offset} gave {p}");
    }
}

#[test]
fn equal_extent_and_viewport_pins_progress_to_zero() {
    let mut t = ScrollProgressTracker::new(0.01, 0.0);
    t.sample(metrics(300.0, 500.0, 500.0), 0.016);
    assert_eq!(t.progress(), 0.0);
    // Smaller extent than viewport is the same anomaly
    t.sample(metrics(300.0, 400.0, 500.0), 0.016);
    assert_eq!(t.progress(), 0.0);
}

#[test]
fn changes_below_threshold_are_not_published() {
    let mut t = ScrollProgressTracker::new(0.01, 0.0);
    assert_eq!(t.sample(metrics(100.0, 1000.0, 500.0), 0.016), Some(0.2));
    // 0.2 -> 0.204, below the 0.01 threshold
    assert_eq!(t.sample(metrics(102.0, 1000.0, 500.0), 0.016), None);
    // A larger move clears it
    assert_eq!(t.sample(metrics(150.0, 1000.0, 500.0), 0.016), Some(0.3));
}

#[test]
fn zero_debounce_publishes_on_the_clearing_frame() {
    let mut t = ScrollProgressTracker::new(0.005, 0.0);
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), Some(0.5));
}

#[test]
fn debounce_delays_publication_until_window_elapses() {
    let mut t = ScrollProgressTracker::new(0.01, 30.0);
    // Qualifying change starts the window but publishes nothing yet
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), None);
    // 16 ms elapsed, still inside the 30 ms window
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), None);
    // 32 ms elapsed, window clears
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), Some(0.5));
    // Nothing left pending
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), None);
}

#[test]
fn newer_qualifying_change_restarts_the_debounce_window() {
    let mut t = ScrollProgressTracker::new(0.01, 30.0);
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), None);
    // New qualifying value replaces the pending one and restarts the clock
    assert_eq!(t.sample(metrics(400.0, 1000.0, 500.0), 0.016), None);
    assert_eq!(t.sample(metrics(400.0, 1000.0, 500.0), 0.016), None);
    assert_eq!(t.sample(metrics(400.0, 1000.0, 500.0), 0.016), Some(0.8));
}

#[test]
fn is_scrolling_tracks_epsilon() {
    assert!(!ScrollState::from_progress(0.0).is_scrolling);
    assert!(!ScrollState::from_progress(0.001).is_scrolling);
    assert!(ScrollState::from_progress(0.0011).is_scrolling);
    assert!(ScrollState::from_progress(1.0).is_scrolling);
}

#[test]
fn state_reports_zero_until_first_scroll_observed() {
    let mut t = ScrollProgressTracker::new(0.01, 0.0);
    assert_eq!(t.state().progress, 0.0);
    t.sample(metrics(250.0, 1000.0, 500.0), 0.016);
    assert!((t.state().progress - 0.5).abs() < 1e-6);
    // Back at the top the latch stays set but progress is genuinely 0
    t.sample(metrics(0.0, 1000.0, 500.0), 0.016);
    assert_eq!(t.state().progress, 0.0);
    assert!(!t.state().is_scrolling);
}

#[test]
fn anomalous_dt_does_not_corrupt_the_debounce_clock() {
    let mut t = ScrollProgressTracker::new(0.01, 30.0);
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.016), None);
    // NaN dt counts as zero elapsed time
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), f32::NAN), None);
    assert_eq!(t.sample(metrics(250.0, 1000.0, 500.0), 0.02), Some(0.5));
}
