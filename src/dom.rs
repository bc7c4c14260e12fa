use crate::constants::MAX_PIXEL_RATIO;
use crate::core::viewport::{surface_size, SurfaceSize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    element: &web::Element,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`, in document order. An invalid
/// selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    _ = element.style().set_property(property, value);
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(f: impl FnOnce() + 'static, ms: i32) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Window inner size in CSS pixels.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Stretch the canvas over the window and size its backing store to match.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let (width, height) = viewport_size();
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let size = surface_size(width, height, dpr, MAX_PIXEL_RATIO);
    set_style(canvas, "width", &format!("{}px", size.css_width));
    set_style(canvas, "height", &format!("{}px", size.css_height));
    canvas.set_width(size.backing_width);
    canvas.set_height(size.backing_height);
    size
}
