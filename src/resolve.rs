//! Pointer-to-surface UV resolution.
//!
//! Surfaces are axis-aligned textured planes in front of an orthographic
//! camera, so the pick ray through a pointer NDC runs along -Z and the
//! intersection reduces to a rectangle test in the camera plane. When the ray
//! misses, or the surface has no laid-out footprint yet, resolution falls back
//! to a linear projection of the full viewport onto the UV domain. The
//! resolver therefore always returns a value.

use crate::constants::ALPHA_OPAQUE_THRESHOLD;
use glam::Vec2;

/// Screen-space footprint of a plane surface, in aspect-corrected NDC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub center: Vec2,
    pub half_size: Vec2,
}

impl PlaneGeometry {
    pub fn new(center: Vec2, half_size: Vec2) -> Self {
        Self { center, half_size }
    }

    /// Footprint of a text plane of `width` NDC units whose texture has the
    /// given aspect, scaled by `1 / viewport_aspect` like every other surface.
    pub fn text_plane(width: f32, texture_aspect: f32, viewport_aspect: f32) -> Self {
        let w = width / viewport_aspect.max(1e-6);
        let h = width / texture_aspect.max(1e-6);
        Self {
            center: Vec2::ZERO,
            half_size: Vec2::new(w * 0.5, h * 0.5),
        }
    }

    /// Intersect the pick ray through `pointer_ndc` with this plane.
    ///
    /// With an orthographic camera the ray origin is `(ndc.x, ndc.y, z_eye)`
    /// with direction -Z, so the hit point in the plane is the NDC itself;
    /// what remains is whether it lands inside the rectangle.
    pub fn intersect(&self, pointer_ndc: Vec2) -> Option<Vec2> {
        if self.half_size.x <= 0.0 || self.half_size.y <= 0.0 {
            return None;
        }
        let local = pointer_ndc - self.center;
        if local.x.abs() > self.half_size.x || local.y.abs() > self.half_size.y {
            return None;
        }
        Some(Vec2::new(
            local.x / (2.0 * self.half_size.x) + 0.5,
            local.y / (2.0 * self.half_size.y) + 0.5,
        ))
    }
}

/// Resolve a pointer NDC into a surface-local UV.
///
/// Ray intersection when geometry is available and hit; otherwise the
/// documented linear-projection fallback that treats the whole viewport as
/// the UV domain. Never fails.
#[inline]
pub fn resolve(pointer_ndc: Vec2, geometry: Option<&PlaneGeometry>) -> Vec2 {
    if let Some(g) = geometry {
        if let Some(uv) = g.intersect(pointer_ndc) {
            return uv;
        }
    }
    fallback_uv(pointer_ndc)
}

/// Linear-projection fallback: `uv = clamp((ndc + 1) / 2, 0, 1)`.
#[inline]
pub fn fallback_uv(pointer_ndc: Vec2) -> Vec2 {
    ((pointer_ndc + Vec2::ONE) * 0.5).clamp(Vec2::ZERO, Vec2::ONE)
}

/// Alpha channel of a surface's texture, used as an opacity-gated activation
/// policy on top of UV resolution: a localized effect only retargets when the
/// resolved UV lands on a drawn texel.
#[derive(Clone, Debug)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Build from raw alpha bytes, row-major, top row first.
    /// Returns `None` when the dimensions do not match the data.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Whether the texel under `uv` is opaque enough to count as glyph pixels.
    /// UV has +v up while the mask rows run top-down, hence the flip.
    pub fn opaque_at(&self, uv: Vec2) -> bool {
        let x = (uv.x.clamp(0.0, 1.0) * self.width as f32) as u32;
        let y = ((1.0 - uv.y.clamp(0.0, 1.0)) * self.height as f32) as u32;
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.data[(y * self.width + x) as usize] > ALPHA_OPAQUE_THRESHOLD
    }
}
