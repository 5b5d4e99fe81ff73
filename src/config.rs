//! Static configuration for the effects coordinator.
//!
//! All options are recognized, documented and validated at construction time;
//! a malformed configuration can never reach the frame loop.

use crate::constants::*;
use crate::fade::FadeCurve;
use crate::lens::LensParams;
use crate::scroll_lock::LockConfig;
use crate::uniforms::TextFadePolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown fade curve `{0}` (expected smooth, smoother or pow)")]
    UnknownCurve(String),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f32 },
    #[error("fade window is empty: start {start} >= end {end}")]
    EmptyFadeWindow { start: f32, end: f32 },
}

/// Full configuration surface of the coordinator. Static; not runtime state.
#[derive(Clone, Copy, Debug)]
pub struct EffectsConfig {
    pub fade_zone: f32,
    pub base_opacity: f32,
    pub min_opacity: f32,
    pub fade_curve: FadeCurve,
    /// Exponent used when the curve is selected by name as `pow`.
    pub fade_pow: f32,
    pub follow_half_life: f32,
    pub scroll_threshold: f32,
    pub debounce_ms: f32,
    pub max_delta: f32,
    pub lock_release_tolerance: f32,
    pub landmark_tolerance: f32,
    /// Text surface scroll-fade window.
    pub fade_start: f32,
    pub fade_end: f32,
    /// Lens global scroll-fade window.
    pub scroll_fade_start: f32,
    pub scroll_fade_end: f32,
    /// Which of the two historical text fade-out behaviors to use.
    pub text_fade_lateral: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            fade_zone: DEFAULT_FADE_ZONE,
            base_opacity: DEFAULT_BASE_OPACITY,
            min_opacity: DEFAULT_MIN_OPACITY,
            fade_curve: FadeCurve::Smoother,
            fade_pow: DEFAULT_FADE_POW,
            follow_half_life: DEFAULT_FOLLOW_HALF_LIFE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_delta: DEFAULT_MAX_WHEEL_DELTA,
            lock_release_tolerance: DEFAULT_RELEASE_TOLERANCE,
            landmark_tolerance: DEFAULT_LANDMARK_TOLERANCE,
            fade_start: DEFAULT_TEXT_FADE_START,
            fade_end: DEFAULT_TEXT_FADE_END,
            scroll_fade_start: DEFAULT_SCROLL_FADE_START,
            scroll_fade_end: DEFAULT_SCROLL_FADE_END,
            text_fade_lateral: false,
        }
    }
}

impl EffectsConfig {
    /// Set the fade curve from its configuration name, using the configured
    /// `fade_pow` exponent for the power family. Fails fast on an unknown
    /// identifier.
    pub fn with_curve(mut self, name: &str) -> Result<Self, ConfigError> {
        self.fade_curve = FadeCurve::parse(name, self.fade_pow)
            .ok_or_else(|| ConfigError::UnknownCurve(name.into()))?;
        Ok(self)
    }

    /// Validate all tunables. Runs once at construction so frame ticks can
    /// trust every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("fade_zone", self.fade_zone)?;
        positive("fade_pow", self.fade_pow)?;
        positive("follow_half_life", self.follow_half_life)?;
        positive("scroll_threshold", self.scroll_threshold)?;
        positive("max_delta", self.max_delta)?;
        positive("lock_release_tolerance", self.lock_release_tolerance)?;
        positive("landmark_tolerance", self.landmark_tolerance)?;
        unit("base_opacity", self.base_opacity)?;
        unit("min_opacity", self.min_opacity)?;
        unit("fade_start", self.fade_start)?;
        unit("fade_end", self.fade_end)?;
        unit("scroll_fade_start", self.scroll_fade_start)?;
        unit("scroll_fade_end", self.scroll_fade_end)?;
        if self.debounce_ms < 0.0 || !self.debounce_ms.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "debounce_ms",
                value: self.debounce_ms,
            });
        }
        if let FadeCurve::Pow(p) = self.fade_curve {
            positive("fade_pow", p)?;
        }
        if self.fade_start >= self.fade_end {
            return Err(ConfigError::EmptyFadeWindow {
                start: self.fade_start,
                end: self.fade_end,
            });
        }
        if self.scroll_fade_start >= self.scroll_fade_end {
            return Err(ConfigError::EmptyFadeWindow {
                start: self.scroll_fade_start,
                end: self.scroll_fade_end,
            });
        }
        Ok(())
    }

    pub fn lens_params(&self) -> LensParams {
        LensParams {
            fade_zone: self.fade_zone,
            base_opacity: self.base_opacity,
            min_opacity: self.min_opacity,
            curve: self.fade_curve,
            scroll_fade_start: self.scroll_fade_start,
            scroll_fade_end: self.scroll_fade_end,
            radius: LENS_RADIUS,
        }
    }

    pub fn text_fade(&self) -> TextFadePolicy {
        if self.text_fade_lateral {
            TextFadePolicy::Lateral {
                fade_zone: self.fade_zone,
            }
        } else {
            TextFadePolicy::GlobalScroll {
                start: self.fade_start,
                end: self.fade_end,
            }
        }
    }

    pub fn lock_config(&self) -> LockConfig {
        LockConfig {
            max_delta: self.max_delta,
            landmark_tolerance: self.landmark_tolerance,
            release_tolerance: self.lock_release_tolerance,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value })
    }
}
