// Host-side tests for the nested scroll lock state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/scroll_lock.rs"]
mod scroll_lock;

use scroll_lock::{InnerMetrics, LockConfig, NestedScrollLock};

fn locked_at(boundary: f32) -> NestedScrollLock {
    let mut lock = NestedScrollLock::new(LockConfig::default());
    lock.update(boundary, boundary);
    assert!(lock.is_locked());
    lock
}

fn inner(offset: f32, extent: f32, viewport: f32) -> InnerMetrics {
    InnerMetrics {
        offset,
        extent,
        viewport,
    }
}

#[test]
fn engages_only_within_landmark_tolerance() {
    let mut lock = NestedScrollLock::new(LockConfig::default());
    lock.update(1000.0, 1020.0);
    assert!(!lock.is_locked());
    lock.update(1013.0, 1020.0);
    assert!(lock.is_locked());
}

#[test]
fn unlocked_controller_routes_nothing() {
    let mut lock = NestedScrollLock::new(LockConfig::default());
    assert!(lock.route_wheel(50.0, inner(0.0, 1000.0, 500.0)).is_none());
}

#[test]
fn wheel_energy_is_conserved_for_all_deltas() {
    let mut lock = locked_at(1000.0);
    let states = [
        inner(0.0, 1000.0, 500.0),
        inner(200.0, 1000.0, 500.0),
        inner(500.0, 1000.0, 500.0),
        inner(0.0, 300.0, 500.0), // nothing to scroll
    ];
    for delta in [-500.0, -120.0, -80.0, -1.0, 0.0, 1.0, 80.0, 120.0, 400.0] {
        for state in states {
            let r = lock.route_wheel(delta, state).unwrap();
            let clamped = delta.clamp(-120.0, 120.0);
            assert_eq!(
                r.consume + r.remainder,
                clamped,
                "delta {delta} state {state:?}"
            );
        }
    }
}

#[test]
fn scroll_up_at_inner_top_forwards_everything() {
    // Inner scroller at top; scrolling up has nothing to consume
    let mut lock = locked_at(1000.0);
    let r = lock.route_wheel(-80.0, inner(0.0, 1000.0, 500.0)).unwrap();
    assert_eq!(r.consume, 0.0);
    assert_eq!(r.remainder, -80.0);
}

#[test]
fn oversized_delta_is_clamped_before_distribution() {
    // Mid-range inner scroller with 300 units of downward room
    let mut lock = locked_at(1000.0);
    let r = lock
        .route_wheel(400.0, inner(200.0, 1000.0, 500.0))
        .unwrap();
    assert_eq!(r.consume, 120.0);
    assert_eq!(r.remainder, 0.0);
}

#[test]
fn partial_absorption_forwards_the_rest() {
    // 50 units of downward room left, delta 120 -> 50 in, 70 out
    let mut lock = locked_at(1000.0);
    let r = lock
        .route_wheel(120.0, inner(450.0, 1000.0, 500.0))
        .unwrap();
    assert_eq!(r.consume, 50.0);
    assert_eq!(r.remainder, 70.0);
}

#[test]
fn upward_delta_consumed_up_to_inner_offset() {
    let mut lock = locked_at(1000.0);
    let r = lock
        .route_wheel(-120.0, inner(40.0, 1000.0, 500.0))
        .unwrap();
    assert_eq!(r.consume, -40.0);
    assert_eq!(r.remainder, -80.0);
}

#[test]
fn releases_only_past_release_tolerance() {
    let mut lock = locked_at(1000.0);
    assert!(!lock.release_if_departed(1020.0));
    assert!(lock.is_locked());
    assert!(lock.release_if_departed(1025.0));
    assert!(!lock.is_locked());
}

#[test]
fn release_is_positional_in_both_directions() {
    let mut lock = locked_at(1000.0);
    assert!(lock.release_if_departed(970.0));
    assert!(!lock.is_locked());
}

#[test]
fn relocks_when_outer_returns_to_landmark() {
    let mut lock = locked_at(1000.0);
    assert!(lock.release_if_departed(1030.0));
    lock.update(1005.0, 1000.0);
    assert!(lock.is_locked());
}

#[test]
fn scrollbar_drift_releases_without_wheel_traffic() {
    // The frame tick polls the outer offset: arming and positional release
    // both happen there, so a scrollbar drag away from the landmark must
    // drop the lock even though no wheel event fires.
    let mut lock = locked_at(1000.0);
    lock.update(1010.0, 1000.0);
    assert!(!lock.release_if_departed(1010.0));
    assert!(lock.is_locked());

    lock.update(1040.0, 1000.0);
    assert!(lock.release_if_departed(1040.0));
    assert!(!lock.is_locked());
    assert!(lock.route_wheel(80.0, inner(0.0, 1000.0, 500.0)).is_none());
}

#[test]
fn non_finite_delta_routes_as_inert() {
    let mut lock = locked_at(1000.0);
    let r = lock
        .route_wheel(f32::NAN, inner(200.0, 1000.0, 500.0))
        .unwrap();
    assert_eq!(r.consume, 0.0);
    assert_eq!(r.remainder, 0.0);
}

#[test]
fn degenerate_inner_content_consumes_nothing() {
    // Content shorter than the viewport: max offset floors at zero
    let mut lock = locked_at(1000.0);
    let r = lock.route_wheel(80.0, inner(0.0, 300.0, 500.0)).unwrap();
    assert_eq!(r.consume, 0.0);
    assert_eq!(r.remainder, 80.0);
}
