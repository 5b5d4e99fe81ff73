#![cfg(target_arch = "wasm32")]
//! Effects coordination core for a scrollable page with shader-driven
//! surfaces: text panels, a cursor-following lens and a noise background.
//!
//! Pointer and scroll events are fused into a frame-rate-independent state,
//! smoothed through damped follows and fade curves, and broadcast once per
//! frame into each surface's shader parameter set. A nested carousel's wheel
//! handoff is arbitrated by a positional scroll lock.

use crate::config::EffectsConfig;
use crate::constants::TEXT_PLANE_WIDTH;
use crate::events::WheelWiring;
use crate::input::SharedInput;
use crate::resolve::PlaneGeometry;
use crate::scroll::ScrollProgressTracker;
use crate::scroll_lock::NestedScrollLock;
use crate::uniforms::{SurfacePolicy, TextSurfaceDesc, UniformBus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod damp;
mod dom;
mod events;
mod fade;
mod frame;
mod input;
mod lens;
mod resolve;
mod scroll;
mod scroll_lock;
mod uniforms;

// Read interface for the rendering collaborator: per-surface parameter
// blocks plus the frame context's lock/carousel accessors.
pub use frame::FrameContext;
pub use uniforms::{SurfaceId, SurfaceUniforms};

// DOM ids the page markup provides; layout itself is outside this crate.
const CANVAS_ID: &str = "fx-canvas";
const SCROLLER_ID: &str = "page-scroller";
const CAROUSEL_ID: &str = "card-carousel";
const LANDMARK_ID: &str = "carousel-section";
const HOVER_CARD_ID: &str = "hover-card";
const TEXT_IDS: [&str; 2] = ["fx-text-top", "fx-text-bottom"];

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = EffectsConfig::default();
    config.validate()?;

    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        let canvas: web::HtmlCanvasElement = el
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("#{CANVAS_ID} is not a canvas: {e:?}"))?;
        wire_canvas_resize(&canvas);
    }

    let shared = Rc::new(SharedInput::default());
    events::wire_pointer_move(shared.clone());
    if let Some(el) = document.get_element_by_id(HOVER_CARD_ID) {
        events::wire_hover_flag(&el, shared.clone());
    }

    let (vw, vh) = dom::viewport_size();
    let viewport_aspect = if vh > 0.0 { vw / vh } else { 1.0 };

    let mut bus = UniformBus::new();
    let mut texts = Vec::new();
    for id in TEXT_IDS {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("missing #{id}, skipping that text surface");
            continue;
        };
        let rect = el.get_bounding_client_rect();
        let texture_aspect = if rect.height() > 0.0 {
            (rect.width() / rect.height()) as f32
        } else {
            1.0
        };
        let surface = bus.mount_text(TextSurfaceDesc {
            texture_aspect,
            fade: config.text_fade(),
            policy: SurfacePolicy {
                pointer_effect: true,
                reactive_while_scrolling: false,
            },
            follow_half_life: config.follow_half_life,
        });
        bus.set_text_geometry(
            surface,
            PlaneGeometry::text_plane(TEXT_PLANE_WIDTH, texture_aspect, viewport_aspect),
        );
        texts.push((surface, el));
    }
    bus.mount_lens(config.lens_params(), config.follow_half_life);
    bus.mount_background();
    log::info!("[bus] {} surfaces mounted", bus.live_surfaces());

    let scroller = document
        .get_element_by_id(SCROLLER_ID)
        .or_else(|| document.scrolling_element())
        .ok_or_else(|| anyhow::anyhow!("no scrollable element"))?;

    let lock = Rc::new(RefCell::new(NestedScrollLock::new(config.lock_config())));
    let carousel = document.get_element_by_id(CAROUSEL_ID);
    let landmark = document
        .get_element_by_id(LANDMARK_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    match (&carousel, &landmark) {
        (Some(inner), Some(lm)) => events::wire_wheel(WheelWiring {
            lock: lock.clone(),
            outer: scroller.clone(),
            inner: inner.clone(),
            landmark: lm.clone(),
        }),
        _ => log::info!("no carousel region, wheel handoff disabled"),
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        shared,
        bus,
        tracker: ScrollProgressTracker::new(config.scroll_threshold, config.debounce_ms),
        lock,
        scroller,
        landmark,
        carousel,
        texts,
        on_scroll_publish: Some(Box::new(|progress| {
            log::debug!("[scroll] published progress {progress:.3}");
        })),
        last_instant: instant::Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
