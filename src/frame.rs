//! Per-frame tick: input fusion, damping and the uniform broadcast.
//!
//! Exactly one logical tick runs per rendered frame. Within a tick everything
//! executes synchronously in dependency order: scroll sampling and lock
//! arming, then snapshot construction, then the bus fan-out. Event handlers
//! run to completion between ticks, so the snapshot always holds the latest
//! state published before the tick began.

use crate::dom;
use crate::input::SharedInput;
use crate::scroll::ScrollProgressTracker;
use crate::scroll_lock::NestedScrollLock;
use crate::uniforms::{FrameSnapshot, SurfaceId, UniformBus};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub shared: Rc<SharedInput>,
    pub bus: UniformBus,
    pub tracker: ScrollProgressTracker,
    pub lock: Rc<RefCell<NestedScrollLock>>,

    /// Outer page scroller sampled for progress.
    pub scroller: web::Element,
    /// Landmark for the carousel handoff, when the page has one.
    pub landmark: Option<web::HtmlElement>,
    /// Nested carousel element, read-only here (it owns its offset).
    pub carousel: Option<web::Element>,
    /// Text surfaces paired with the DOM elements that define their footprint.
    pub texts: Vec<(SurfaceId, web::Element)>,

    /// Debounced publication channel for external scroll consumers.
    pub on_scroll_publish: Option<Box<dyn FnMut(f32)>>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let metrics = dom::scroll_metrics(&self.scroller);
        if let Some(progress) = self.tracker.sample(metrics, dt) {
            if let Some(cb) = &mut self.on_scroll_publish {
                cb(progress);
            }
        }

        // Scrollbar drags move the outer offset without wheel events, so
        // engagement and release are both checked here as well as in the
        // wheel handler.
        if let Some(landmark) = &self.landmark {
            let mut lock = self.lock.borrow_mut();
            lock.update(metrics.offset, landmark.offset_top() as f32);
            lock.release_if_departed(metrics.offset);
        }

        let (vw, vh) = dom::viewport_size();
        for (id, el) in &self.texts {
            if let Some(geometry) = dom::element_geometry(el, vw, vh) {
                self.bus.set_text_geometry(*id, geometry);
            }
        }

        let snap = FrameSnapshot {
            pointer_ndc: self.shared.pointer.borrow().ndc(),
            scroll: self.tracker.state(),
            hover: self.shared.hovering.get(),
            viewport_aspect: if vh > 0.0 { vw / vh } else { 1.0 },
            dt,
        };
        self.bus.broadcast(&snap);
    }

    /// Exposed to the rendering collaborator for the carousel surface.
    pub fn lock_active(&self) -> bool {
        self.lock.borrow().is_locked()
    }

    /// Current inner carousel offset, 0 when the page has no carousel.
    pub fn carousel_offset(&self) -> f32 {
        self.carousel
            .as_ref()
            .map_or(0.0, |el| el.scroll_top() as f32)
    }
}

/// Drive the tick from requestAnimationFrame until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
