//! Lens opacity shaping.
//!
//! The lens follows the pointer under damped motion and fades as its lower
//! edge approaches the bottom of the viewport while the page is scrolling,
//! with an additional global fade driven by scroll progress. Both fades are
//! pure functions of position and scroll state.

use crate::constants::{
    DEFAULT_BASE_OPACITY, DEFAULT_FADE_ZONE, DEFAULT_MIN_OPACITY, DEFAULT_SCROLL_FADE_END,
    DEFAULT_SCROLL_FADE_START, LENS_RADIUS, VIEWPORT_BOTTOM_NDC,
};
use crate::fade::{smoothstep, FadeCurve};

#[derive(Clone, Copy, Debug)]
pub struct LensParams {
    /// NDC distance over which the boundary fade ramps in.
    pub fade_zone: f32,
    pub base_opacity: f32,
    pub min_opacity: f32,
    pub curve: FadeCurve,
    /// Scroll progress window for the global fade-out.
    pub scroll_fade_start: f32,
    pub scroll_fade_end: f32,
    /// Lens circle radius in NDC units before viewport scaling.
    pub radius: f32,
}

impl Default for LensParams {
    fn default() -> Self {
        Self {
            fade_zone: DEFAULT_FADE_ZONE,
            base_opacity: DEFAULT_BASE_OPACITY,
            min_opacity: DEFAULT_MIN_OPACITY,
            curve: FadeCurve::Smoother,
            scroll_fade_start: DEFAULT_SCROLL_FADE_START,
            scroll_fade_end: DEFAULT_SCROLL_FADE_END,
            radius: LENS_RADIUS,
        }
    }
}

/// Final lens opacity for this frame.
///
/// `position_y` is the damped lens center in NDC, `scale_y` its vertical
/// scale. While scrolling, the opacity fades with the lower edge's distance to
/// the viewport bottom and drops to zero once the edge touches the boundary;
/// scroll progress then applies a global fade on top. While idle the lens sits
/// at base opacity.
pub fn lens_opacity(
    position_y: f32,
    scale_y: f32,
    is_scrolling: bool,
    scroll_progress: f32,
    p: &LensParams,
) -> f32 {
    let lower_edge = position_y - p.radius * scale_y;
    let distance_lower = lower_edge - VIEWPORT_BOTTOM_NDC;

    let t = (distance_lower / p.fade_zone).clamp(0.0, 1.0);
    let fade_factor = if is_scrolling { p.curve.evaluate(t) } else { 1.0 };

    let mut opacity = p.min_opacity + (p.base_opacity - p.min_opacity) * fade_factor;
    if is_scrolling && distance_lower <= 0.0 {
        opacity = 0.0;
    }

    let scroll_fade = if is_scrolling {
        1.0 - smoothstep(p.scroll_fade_start, p.scroll_fade_end, scroll_progress)
    } else {
        1.0
    };
    opacity * scroll_fade
}
