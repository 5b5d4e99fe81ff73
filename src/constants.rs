//! Interaction and fade tuning constants.
//!
//! These constants express intended behavior (thresholds, tolerances, default
//! fade geometry) and keep magic numbers out of the frame path.

// Scroll progress above this counts as "scrolling" for effect gating
pub const SCROLL_EPSILON: f32 = 0.001;

// Scroll progress tracker defaults
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 0.01;
pub const DEFAULT_DEBOUNCE_MS: f32 = 16.0;

// Wheel handoff between outer scroller and nested carousel
pub const DEFAULT_MAX_WHEEL_DELTA: f32 = 120.0;
pub const DEFAULT_LANDMARK_TOLERANCE: f32 = 8.0;
pub const DEFAULT_RELEASE_TOLERANCE: f32 = 24.0;

// Pointer-follow smoothing time constant (seconds).
// Equivalent to an exponential damp with lambda = 12 per second.
pub const DEFAULT_FOLLOW_HALF_LIFE: f32 = 1.0 / 12.0;

// Lens geometry and fade defaults
pub const LENS_RADIUS: f32 = 0.23;
pub const DEFAULT_FADE_ZONE: f32 = 0.2;
pub const DEFAULT_BASE_OPACITY: f32 = 1.0;
pub const DEFAULT_MIN_OPACITY: f32 = 0.3;
pub const DEFAULT_FADE_POW: f32 = 0.7;
pub const DEFAULT_SCROLL_FADE_START: f32 = 0.06;
pub const DEFAULT_SCROLL_FADE_END: f32 = 0.22;

// Text surface global scroll fade window
pub const DEFAULT_TEXT_FADE_START: f32 = 0.05;
pub const DEFAULT_TEXT_FADE_END: f32 = 0.22;

// Text plane width in NDC units before viewport aspect correction
pub const TEXT_PLANE_WIDTH: f32 = 2.6;

// Bottom of the viewport in NDC, the lens fade boundary
pub const VIEWPORT_BOTTOM_NDC: f32 = -1.0;

// Background noise shader advances its clock by this much every frame
pub const BACKGROUND_TIME_STEP: f32 = 0.005;

// Alpha channel value (0..255) above which a texel counts as drawn glyph
pub const ALPHA_OPAQUE_THRESHOLD: u8 = 10;
