//! Scroll progress sampling and publication.
//!
//! The tracker samples the scroller once per frame (the frame tick is the
//! throttle; raw scroll events are never handled synchronously), computes a
//! clamped 0..1 progress, filters micro-jitter below a threshold and
//! republishes either immediately or after a debounce window.

use crate::constants::SCROLL_EPSILON;

/// A scrollable element's geometry at sampling time.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub extent: f32,
    pub viewport: f32,
}

/// Fused scroll state read by the per-frame effect stages.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub progress: f32,
    pub is_scrolling: bool,
}

impl ScrollState {
    #[inline]
    pub fn from_progress(progress: f32) -> Self {
        Self {
            progress,
            is_scrolling: progress > SCROLL_EPSILON,
        }
    }
}

/// Per-frame scroll progress tracker with threshold filtering and optional
/// debounced publication.
pub struct ScrollProgressTracker {
    threshold: f32,
    debounce_ms: f32,
    progress: f32,
    last_published: f32,
    /// Qualifying change waiting out the debounce window: (progress, age in seconds).
    pending: Option<(f32, f32)>,
    has_scrolled: bool,
    degenerate: bool,
}

impl ScrollProgressTracker {
    /// `debounce_ms` of 0 means "publish on every frame that clears the
    /// threshold".
    pub fn new(threshold: f32, debounce_ms: f32) -> Self {
        Self {
            threshold,
            debounce_ms,
            progress: 0.0,
            last_published: 0.0,
            pending: None,
            has_scrolled: false,
            degenerate: false,
        }
    }

    /// Sample the scroller once for this frame. Returns a publication when the
    /// threshold (and debounce window, if any) clears.
    pub fn sample(&mut self, metrics: ScrollMetrics, dt: f32) -> Option<f32> {
        let dt = if dt.is_finite() && dt >= 0.0 { dt } else { 0.0 };
        self.progress = self.compute_progress(metrics);
        if self.progress > SCROLL_EPSILON {
            self.has_scrolled = true;
        }

        if (self.progress - self.last_published).abs() > self.threshold {
            self.last_published = self.progress;
            if self.debounce_ms <= 0.0 {
                self.pending = None;
                return Some(self.progress);
            }
            // A newer qualifying change restarts the window with its value
            self.pending = Some((self.progress, 0.0));
            return None;
        }

        if let Some((value, age)) = self.pending.take() {
            let age = age + dt;
            if age * 1000.0 >= self.debounce_ms {
                return Some(value);
            }
            self.pending = Some((value, age));
        }
        None
    }

    fn compute_progress(&mut self, metrics: ScrollMetrics) -> f32 {
        let span = metrics.extent - metrics.viewport;
        if span <= 0.0 {
            if !self.degenerate {
                log::warn!(
                    "[scroll] extent {} <= viewport {}, progress pinned to 0",
                    metrics.extent,
                    metrics.viewport
                );
                self.degenerate = true;
            }
            return 0.0;
        }
        self.degenerate = false;
        (metrics.offset / span).clamp(0.0, 1.0)
    }

    /// Current clamped progress, regardless of publication filtering.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Fused state for the effect stages. Progress reads as 0 until the
    /// scroller has been observed away from the top at least once.
    pub fn state(&self) -> ScrollState {
        let p = if self.has_scrolled { self.progress } else { 0.0 };
        ScrollState::from_progress(p)
    }
}
