use particles_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::EventQueue;
use crate::dom;
use crate::input;

pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    let canvas_m = canvas.clone();
    let queue = queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_m);
        queue.push(InputEvent::PointerMove { x: pos.x, y: pos.y });
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    let canvas_r = canvas.clone();
    let queue = queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_to_viewport(&canvas_r);
        queue.push(InputEvent::Resize {
            width: size.width,
            height: size.height,
        });
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
