use particles_core::{CanvasSize, Sensitivity};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("missing #{}; click handler not installed", element_id);
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Size the canvas backing store to the viewport and report the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> CanvasSize {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
    }
    CanvasSize::new(canvas.width() as f32, canvas.height() as f32)
}

#[inline]
pub fn read_sensitivity(slider: Option<&web::HtmlInputElement>) -> Sensitivity {
    slider
        .map(|s| input::parse_sensitivity(&s.value()))
        .unwrap_or_default()
}

/// Blocking user notice.
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}
