use crate::dom;
use crate::input::SharedInput;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the shared pointer state current from window-level pointermove
/// events. The handler is the sole writer of that field.
pub fn wire_pointer_move(shared: Rc<SharedInput>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (vw, vh) = dom::viewport_size();
        shared
            .pointer
            .borrow_mut()
            .set_from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Drive the shared hover flag from one element's enter/leave events. The two
/// handlers are the sole writers of that field.
pub fn wire_hover_flag(el: &web::Element, shared: Rc<SharedInput>) {
    let enter_shared = shared.clone();
    let enter = Closure::wrap(Box::new(move || {
        enter_shared.hovering.set(true);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let leave = Closure::wrap(Box::new(move || {
        shared.hovering.set(false);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}
