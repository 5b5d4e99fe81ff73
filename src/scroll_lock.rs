//! Wheel arbitration between the outer page scroller and a nested carousel.
//!
//! A two-state machine engages once the outer scroller arrives at a landmark
//! element, then redistributes every wheel delta between the inner and outer
//! scrollers so no input energy is discarded at the boundary. Release is
//! purely positional: the lock holds exactly as long as the outer view stays
//! pinned near the landmark, never for a fixed duration.
//!
//! Ordering matters: wheel events must be routed in arrival order or the
//! consume/remainder conservation breaks.

use crate::constants::{
    DEFAULT_LANDMARK_TOLERANCE, DEFAULT_MAX_WHEEL_DELTA, DEFAULT_RELEASE_TOLERANCE,
};

#[derive(Clone, Copy, Debug)]
pub struct LockConfig {
    /// Per-event clamp on raw wheel deltas, so one trackpad fling cannot jump
    /// past intermediate carousel states.
    pub max_delta: f32,
    /// How close the outer offset must come to the landmark to engage.
    pub landmark_tolerance: f32,
    /// How far the outer offset must drift from the engagement point to release.
    pub release_tolerance: f32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            max_delta: DEFAULT_MAX_WHEEL_DELTA,
            landmark_tolerance: DEFAULT_LANDMARK_TOLERANCE,
            release_tolerance: DEFAULT_RELEASE_TOLERANCE,
        }
    }
}

/// Inner scroller geometry at routing time. The carousel owns its offset; the
/// lock controller only reads it.
#[derive(Clone, Copy, Debug, Default)]
pub struct InnerMetrics {
    pub offset: f32,
    pub extent: f32,
    pub viewport: f32,
}

impl InnerMetrics {
    /// Maximum scrollable offset, floored at zero for degenerate content.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        (self.extent - self.viewport).max(0.0)
    }
}

/// How a single wheel event was redistributed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelRouting {
    /// Portion absorbed by the inner scroller without exceeding its bounds.
    pub consume: f32,
    /// Portion forwarded to the outer scroller. Invariant:
    /// `consume + remainder == clamp(delta, -max_delta, max_delta)` exactly.
    pub remainder: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum LockState {
    Unlocked,
    Locked { boundary_offset: f32 },
}

/// Boundary-triggered wheel interceptor for the nested carousel region.
pub struct NestedScrollLock {
    config: LockConfig,
    state: LockState,
}

impl NestedScrollLock {
    pub fn new(config: LockConfig) -> Self {
        Self {
            config,
            state: LockState::Unlocked,
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self.state, LockState::Locked { .. })
    }

    /// Engage when the outer scroller has fully arrived at the landmark.
    /// Harmless to call every frame and before every wheel event.
    pub fn update(&mut self, outer_offset: f32, landmark_offset: f32) {
        if let LockState::Unlocked = self.state {
            if (outer_offset - landmark_offset).abs() <= self.config.landmark_tolerance {
                log::info!("[scroll-lock] engaged at outer offset {outer_offset}");
                self.state = LockState::Locked {
                    boundary_offset: landmark_offset,
                };
            }
        }
    }

    /// Redistribute one wheel delta between inner and outer scrollers.
    ///
    /// Returns `None` while unlocked (the event keeps its default handling).
    /// While locked the caller applies `consume` to the inner offset,
    /// `remainder` to the outer offset, and suppresses the event's default.
    pub fn route_wheel(&mut self, delta: f32, inner: InnerMetrics) -> Option<WheelRouting> {
        if !self.is_locked() {
            return None;
        }
        if !delta.is_finite() {
            log::warn!("[scroll-lock] ignoring non-finite wheel delta");
            return Some(WheelRouting {
                consume: 0.0,
                remainder: 0.0,
            });
        }
        let clamped = delta.clamp(-self.config.max_delta, self.config.max_delta);
        let remaining_down = inner.max_offset() - inner.offset.clamp(0.0, inner.max_offset());
        let remaining_up = inner.offset.clamp(0.0, inner.max_offset());
        let consume = clamped.clamp(-remaining_up, remaining_down);
        Some(WheelRouting {
            consume,
            remainder: clamped - consume,
        })
    }

    /// Release once the outer scroller has drifted far enough from the
    /// engagement boundary. Called after each redistribution.
    pub fn release_if_departed(&mut self, outer_offset: f32) -> bool {
        if let LockState::Locked { boundary_offset } = self.state {
            if (outer_offset - boundary_offset).abs() > self.config.release_tolerance {
                log::info!("[scroll-lock] released at outer offset {outer_offset}");
                self.state = LockState::Unlocked;
                return true;
            }
        }
        false
    }
}
