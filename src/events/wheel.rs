use crate::scroll_lock::{InnerMetrics, NestedScrollLock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements participating in the wheel handoff. The lock controller is shared
/// with the frame tick, which also arms it from scrollbar-driven motion.
pub struct WheelWiring {
    pub lock: Rc<RefCell<NestedScrollLock>>,
    /// Outer page scroller.
    pub outer: web::Element,
    /// Nested carousel region; owns its scroll offset.
    pub inner: web::Element,
    /// Landmark element whose offset marks the handoff boundary.
    pub landmark: web::HtmlElement,
}

fn inner_metrics(el: &web::Element) -> InnerMetrics {
    InnerMetrics {
        offset: el.scroll_top() as f32,
        extent: el.scroll_height() as f32,
        viewport: el.client_height() as f32,
    }
}

/// Intercept wheel events and redistribute them while the lock is engaged.
///
/// The listener must be non-passive: a fully redistributed event suppresses
/// its default so the outer scroller only ever sees the forwarded remainder.
/// Events are handled strictly in arrival order.
pub fn wire_wheel(w: WheelWiring) {
    let outer_for_listener = w.outer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let outer_offset = w.outer.scroll_top() as f32;
        let landmark_offset = w.landmark.offset_top() as f32;

        let mut lock = w.lock.borrow_mut();
        lock.update(outer_offset, landmark_offset);

        let inner = inner_metrics(&w.inner);
        let Some(routing) = lock.route_wheel(ev.delta_y() as f32, inner) else {
            return;
        };

        if routing.consume != 0.0 {
            w.inner
                .set_scroll_top((inner.offset + routing.consume).round() as i32);
        }
        if routing.remainder != 0.0 {
            w.outer
                .set_scroll_top((outer_offset + routing.remainder).round() as i32);
        }
        ev.prevent_default();

        lock.release_if_departed(w.outer.scroll_top() as f32);
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = outer_for_listener
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}
