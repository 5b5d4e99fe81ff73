// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tolerances_and_thresholds_are_positive() {
    assert!(SCROLL_EPSILON > 0.0);
    assert!(DEFAULT_SCROLL_THRESHOLD > 0.0);
    assert!(DEFAULT_MAX_WHEEL_DELTA > 0.0);
    assert!(DEFAULT_LANDMARK_TOLERANCE > 0.0);
    assert!(DEFAULT_RELEASE_TOLERANCE > 0.0);
    assert!(DEFAULT_FOLLOW_HALF_LIFE > 0.0);
    assert!(DEFAULT_DEBOUNCE_MS >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lock_release_needs_more_travel_than_engagement() {
    // Hysteresis: the lock must not flap at the landmark boundary
    assert!(DEFAULT_RELEASE_TOLERANCE > DEFAULT_LANDMARK_TOLERANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_windows_are_well_formed() {
    assert!(DEFAULT_TEXT_FADE_START < DEFAULT_TEXT_FADE_END);
    assert!(DEFAULT_SCROLL_FADE_START < DEFAULT_SCROLL_FADE_END);
    assert!(DEFAULT_FADE_ZONE > 0.0);
    assert!(DEFAULT_MIN_OPACITY <= DEFAULT_BASE_OPACITY);
    assert!(DEFAULT_BASE_OPACITY <= 1.0);
    assert!(DEFAULT_FADE_POW > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lens_geometry_is_sane() {
    assert!(LENS_RADIUS > 0.0 && LENS_RADIUS < 1.0);
    assert!(VIEWPORT_BOTTOM_NDC == -1.0);
    assert!(TEXT_PLANE_WIDTH > 0.0);
    assert!(BACKGROUND_TIME_STEP > 0.0);
}
