//! Exponential-decay follow toward a target value.
//!
//! The update rule `current += (target - current) * (1 - exp(-dt / half_life))`
//! is frame-rate independent: the same wall-clock time produces the same
//! convergence no matter how many frames it is split across.

use glam::Vec2;

/// Value types the follow engine can advance. Each axis moves independently.
pub trait Follow: Copy {
    fn step(self, target: Self, alpha: f32) -> Self;
}

impl Follow for f32 {
    #[inline]
    fn step(self, target: Self, alpha: f32) -> Self {
        self + (target - self) * alpha
    }
}

impl Follow for Vec2 {
    #[inline]
    fn step(self, target: Self, alpha: f32) -> Self {
        self + (target - self) * alpha
    }
}

/// A value chasing a target under exponential decay.
///
/// `current` converges toward `target` but is never snapped to it except via
/// [`Damped::reset`], which is reserved for mount-time initialization.
#[derive(Clone, Copy, Debug)]
pub struct Damped<V: Follow> {
    pub current: V,
    pub target: V,
    pub half_life: f32,
}

impl<V: Follow> Damped<V> {
    pub fn new(initial: V, half_life: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            half_life,
        }
    }

    /// Replace the target wholesale; `current` keeps converging from where
    /// it is.
    #[inline]
    pub fn retarget(&mut self, target: V) {
        self.target = target;
    }

    /// Snap both `current` and `target`. Mount-time only.
    pub fn reset(&mut self, value: V) {
        self.current = value;
        self.target = value;
    }

    /// Advance `current` toward `target` by elapsed time `dt` (seconds).
    ///
    /// Non-finite or negative `dt` is an input anomaly: the advance becomes a
    /// logged no-op rather than corrupting the follow state.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("[damp] ignoring anomalous dt: {dt}");
            return;
        }
        let alpha = 1.0 - (-dt / self.half_life).exp();
        self.current = self.current.step(self.target, alpha);
    }
}
