//! Pointer state and coordinate conversions.
//!
//! `SharedInput` is the single page-root handle for globally shared input
//! state. Event closures are the only writers (one writer per field) and the
//! frame tick is the only reader; no component looks state up ambiently.

use glam::Vec2;
use std::cell::{Cell, RefCell};

/// Latest pointer sample in normalized device coordinates, both axes in
/// [-1, 1] with +y up. No history is kept beyond this sample.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x_norm: f32,
    pub y_norm: f32,
}

impl PointerState {
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        Vec2::new(self.x_norm, self.y_norm)
    }

    /// Update from client-pixel coordinates against the current viewport size.
    pub fn set_from_client(&mut self, client_x: f32, client_y: f32, view_w: f32, view_h: f32) {
        let ndc = client_to_ndc(client_x, client_y, view_w, view_h);
        self.x_norm = ndc.x;
        self.y_norm = ndc.y;
    }
}

/// Convert client-pixel coordinates to NDC. A degenerate viewport maps to the
/// center rather than producing non-finite values.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, view_w: f32, view_h: f32) -> Vec2 {
    if view_w <= 0.0 || view_h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (2.0 * client_x / view_w - 1.0).clamp(-1.0, 1.0),
        (1.0 - 2.0 * client_y / view_h).clamp(-1.0, 1.0),
    )
}

/// Page-lifetime shared input state, created at page root and passed by
/// reference (behind one `Rc`) into everything that reads or writes it.
#[derive(Default)]
pub struct SharedInput {
    /// Written by the pointermove handler only.
    pub pointer: RefCell<PointerState>,
    /// Written by the hover element's enter/leave handlers only.
    pub hovering: Cell<bool>,
}
