use crate::resolve::PlaneGeometry;
use crate::scroll::ScrollMetrics;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport size in CSS pixels.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Scroll geometry of an element, in the units the progress tracker expects.
#[inline]
pub fn scroll_metrics(el: &web::Element) -> ScrollMetrics {
    ScrollMetrics {
        offset: el.scroll_top() as f32,
        extent: el.scroll_height() as f32,
        viewport: el.client_height() as f32,
    }
}

/// An element's screen footprint as aspect-corrected NDC plane geometry.
/// Returns `None` while the element has no laid-out extent.
pub fn element_geometry(el: &web::Element, view_w: f32, view_h: f32) -> Option<PlaneGeometry> {
    if view_w <= 0.0 || view_h <= 0.0 {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let cx = rect.left() as f32 + w * 0.5;
    let cy = rect.top() as f32 + h * 0.5;
    let center = Vec2::new(2.0 * cx / view_w - 1.0, 1.0 - 2.0 * cy / view_h);
    // NDC spans 2 units per axis, so a full-viewport element has half size 1
    let half_size = Vec2::new(w / view_w, h / view_h);
    Some(PlaneGeometry::new(center, half_size))
}

/// Maintain the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
