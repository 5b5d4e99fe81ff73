//! Per-surface shader parameter sets and the per-frame broadcast bus.
//!
//! Every rendered surface owns exactly one [`SurfaceUniforms`] block, written
//! once per frame by [`UniformBus::broadcast`] after input fusion, damping,
//! curve shaping and UV resolution have produced this frame's values. The
//! broadcast is a fan-out write, not a transformation; any shaping has already
//! happened upstream. Blocks are never shared or aliased across surfaces, and
//! no block outlives its surface's registry slot.

use crate::damp::Damped;
use crate::fade::smoothstep;
use crate::lens::{lens_opacity, LensParams};
use crate::resolve::{self, AlphaMask, PlaneGeometry};
use crate::scroll::ScrollState;
use glam::Vec2;
use smallvec::SmallVec;

/// Shader parameter block for one surface. `#[repr(C)]` and `Pod` so the
/// rendering collaborator can upload it as-is.
///
/// For text surfaces `pointer_uv` is the damped surface-local UV; for the
/// lens it is the damped NDC position; for the background it is the raw
/// pointer in [0, 1] with +v up.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceUniforms {
    pub pointer_uv: [f32; 2],
    pub enable: f32,
    pub scroll_progress: f32,
    pub fade_start: f32,
    pub fade_end: f32,
    pub hover: f32,
    pub opacity: f32,
    pub time: f32,
    pub aspect: f32,
    _pad: [f32; 2],
}

impl Default for SurfaceUniforms {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

/// How a text surface fades out as the page scrolls. The original exposes two
/// divergent policies across revisions; both are configuration here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextFadePolicy {
    /// Uniform fade of the whole line by scroll progress.
    GlobalScroll { start: f32, end: f32 },
    /// Fade by normalized lateral displacement, ramping over `fade_zone`.
    Lateral { fade_zone: f32 },
}

impl TextFadePolicy {
    fn opacity(&self, scroll: ScrollState) -> f32 {
        if !scroll.is_scrolling {
            return 1.0;
        }
        match *self {
            TextFadePolicy::GlobalScroll { start, end } => {
                1.0 - smoothstep(start, end, scroll.progress)
            }
            TextFadePolicy::Lateral { fade_zone } => {
                1.0 - smoothstep(0.0, fade_zone, scroll.progress)
            }
        }
    }

    /// The (start, end) pair published alongside the computed opacity so
    /// shaders can reproduce the fade themselves.
    fn window(&self) -> (f32, f32) {
        match *self {
            TextFadePolicy::GlobalScroll { start, end } => (start, end),
            TextFadePolicy::Lateral { fade_zone } => (0.0, fade_zone),
        }
    }
}

/// Per-surface pointer reactivity policy.
#[derive(Clone, Copy, Debug)]
pub struct SurfacePolicy {
    /// Master switch for the pointer-local effect.
    pub pointer_effect: bool,
    /// By default a surface is pointer-reactive only while the page is not
    /// scrolling; this overrides that for surfaces that react regardless.
    pub reactive_while_scrolling: bool,
}

/// Descriptor for mounting a text surface.
#[derive(Clone, Copy, Debug)]
pub struct TextSurfaceDesc {
    /// Width/height aspect of the rendered glyph texture.
    pub texture_aspect: f32,
    pub fade: TextFadePolicy,
    pub policy: SurfacePolicy,
    pub follow_half_life: f32,
}

enum SurfaceRole {
    Text {
        geometry: Option<PlaneGeometry>,
        mask: Option<AlphaMask>,
        fade: TextFadePolicy,
        texture_aspect: f32,
    },
    Lens(LensParams),
    Background,
}

/// Stable handle for a mounted surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceId(usize);

struct SurfaceSlot {
    id: SurfaceId,
    role: SurfaceRole,
    policy: SurfacePolicy,
    pointer: Damped<Vec2>,
    uniforms: SurfaceUniforms,
    alive: bool,
}

/// The fused immutable snapshot one tick runs from. Built from input state
/// published before the tick began; events arriving during the tick are not
/// observed until the next one.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    pub pointer_ndc: Vec2,
    pub scroll: ScrollState,
    pub hover: bool,
    pub viewport_aspect: f32,
    pub dt: f32,
}

/// Registry of live surfaces plus the once-per-frame fan-out write.
#[derive(Default)]
pub struct UniformBus {
    slots: SmallVec<[SurfaceSlot; 8]>,
    next_id: usize,
}

impl UniformBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount_text(&mut self, desc: TextSurfaceDesc) -> SurfaceId {
        self.mount(
            SurfaceRole::Text {
                geometry: None,
                mask: None,
                fade: desc.fade,
                texture_aspect: desc.texture_aspect,
            },
            desc.policy,
            // Until the first resolve lands, rest at the UV center
            Damped::new(Vec2::splat(0.5), desc.follow_half_life),
        )
    }

    pub fn mount_lens(&mut self, params: LensParams, follow_half_life: f32) -> SurfaceId {
        let policy = SurfacePolicy {
            pointer_effect: true,
            reactive_while_scrolling: true,
        };
        self.mount(
            SurfaceRole::Lens(params),
            policy,
            Damped::new(Vec2::ZERO, follow_half_life),
        )
    }

    pub fn mount_background(&mut self) -> SurfaceId {
        let policy = SurfacePolicy {
            pointer_effect: true,
            reactive_while_scrolling: true,
        };
        // The background reads the pointer raw; the damped value is unused
        // but keeps the slot layout uniform.
        self.mount(SurfaceRole::Background, policy, Damped::new(Vec2::ZERO, 1.0))
    }

    fn mount(&mut self, role: SurfaceRole, policy: SurfacePolicy, pointer: Damped<Vec2>) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.slots.push(SurfaceSlot {
            id,
            role,
            policy,
            pointer,
            uniforms: SurfaceUniforms::default(),
            alive: true,
        });
        id
    }

    /// Drop a surface. Its uniform block dies with the slot; later broadcasts
    /// skip it (lifecycle guard, never a crash).
    pub fn unmount(&mut self, id: SurfaceId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.alive = false;
            log::info!("[bus] surface {:?} unmounted", id);
        }
        self.slots.retain(|s| s.alive);
    }

    /// Provide or update a text surface's laid-out footprint. Until this is
    /// called the resolver uses the linear-projection fallback.
    pub fn set_text_geometry(&mut self, id: SurfaceId, geometry: PlaneGeometry) {
        if let Some(SurfaceSlot {
            role: SurfaceRole::Text { geometry: g, .. },
            ..
        }) = self.slot_mut(id)
        {
            *g = Some(geometry);
        }
    }

    /// Attach the glyph alpha mask enabling opacity-gated retargeting.
    pub fn set_text_mask(&mut self, id: SurfaceId, mask: AlphaMask) {
        if let Some(SurfaceSlot {
            role: SurfaceRole::Text { mask: m, .. },
            ..
        }) = self.slot_mut(id)
        {
            *m = Some(mask);
        }
    }

    /// This frame's uniform block for a surface, if it is still mounted.
    pub fn uniforms(&self, id: SurfaceId) -> Option<&SurfaceUniforms> {
        self.slots
            .iter()
            .find(|s| s.id == id && s.alive)
            .map(|s| &s.uniforms)
    }

    pub fn live_surfaces(&self) -> usize {
        self.slots.iter().filter(|s| s.alive).count()
    }

    fn slot_mut(&mut self, id: SurfaceId) -> Option<&mut SurfaceSlot> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    /// Write the fused state into every live surface's parameter block.
    /// Runs once per display frame, after input fusion.
    pub fn broadcast(&mut self, snap: &FrameSnapshot) {
        for slot in self.slots.iter_mut().filter(|s| s.alive) {
            let enable = slot.policy.pointer_effect
                && (!snap.scroll.is_scrolling || slot.policy.reactive_while_scrolling);
            let u = &mut slot.uniforms;
            u.scroll_progress = snap.scroll.progress;
            u.hover = if snap.hover { 1.0 } else { 0.0 };
            u.enable = if enable { 1.0 } else { 0.0 };

            match &slot.role {
                SurfaceRole::Text {
                    geometry,
                    mask,
                    fade,
                    texture_aspect,
                } => {
                    let resolved = resolve::resolve(snap.pointer_ndc, geometry.as_ref());
                    let on_glyph = mask.as_ref().map_or(true, |m| m.opaque_at(resolved));
                    if on_glyph {
                        slot.pointer.retarget(resolved);
                    }
                    slot.pointer.advance(snap.dt);
                    u.pointer_uv = slot.pointer.current.to_array();
                    u.opacity = fade.opacity(snap.scroll);
                    let (start, end) = fade.window();
                    u.fade_start = start;
                    u.fade_end = end;
                    u.aspect = *texture_aspect;
                }
                SurfaceRole::Lens(params) => {
                    slot.pointer.retarget(snap.pointer_ndc);
                    slot.pointer.advance(snap.dt);
                    u.pointer_uv = slot.pointer.current.to_array();
                    u.opacity = lens_opacity(
                        slot.pointer.current.y,
                        1.0,
                        snap.scroll.is_scrolling,
                        snap.scroll.progress,
                        params,
                    );
                    u.fade_start = params.scroll_fade_start;
                    u.fade_end = params.scroll_fade_end;
                    u.aspect = snap.viewport_aspect;
                }
                SurfaceRole::Background => {
                    // Raw pointer, no damping: the noise field tracks the
                    // cursor directly and keeps animating while scrolling.
                    let uv = resolve::fallback_uv(snap.pointer_ndc);
                    u.pointer_uv = uv.to_array();
                    u.opacity = 1.0;
                    u.time += crate::constants::BACKGROUND_TIME_STEP;
                    u.aspect = snap.viewport_aspect;
                }
            }
        }
    }
}
