//! Fade curve evaluation.
//!
//! All curves map a pre-clamped progress value in [0, 1] to an eased output
//! with f(0) = 0 and f(1) = 1, monotone non-decreasing. Curve choice is static
//! configuration; unknown identifiers are rejected before any frame runs.

/// Easing family applied to fade factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeCurve {
    /// Cubic smoothstep: `t^2 (3 - 2t)`.
    Smooth,
    /// Quintic smootherstep: `t^3 (t (6t - 15) + 10)`. Second-derivative
    /// continuity at the endpoints, used for the lens boundary fade.
    Smoother,
    /// Plain power curve `t^p` with configurable exponent.
    Pow(f32),
}

impl FadeCurve {
    /// Look up a curve by its configuration name. Returns `None` for unknown
    /// identifiers so callers can fail fast at construction time.
    pub fn parse(name: &str, pow: f32) -> Option<FadeCurve> {
        match name {
            "smooth" => Some(FadeCurve::Smooth),
            "smoother" => Some(FadeCurve::Smoother),
            "pow" => Some(FadeCurve::Pow(pow)),
            _ => None,
        }
    }

    /// Evaluate the curve at `t`, which callers clamp to [0, 1] beforehand.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        match self {
            FadeCurve::Smooth => t * t * (3.0 - 2.0 * t),
            FadeCurve::Smoother => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
            FadeCurve::Pow(p) => t.powf(p),
        }
    }
}

/// Hermite smoothstep of `x` between `edge0` and `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 >= edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
