#![cfg(target_arch = "wasm32")]
use particles_core::{Visualizer, VisualizerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod gesture;
mod input;
mod surface;

use constants::{CANVAS_ID, PARTICLE_COUNT_ATTR, SENSITIVITY_SLIDER_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particles-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing canvas #{}", CANVAS_ID))?;
    let surface = surface::CanvasSurface::new(&canvas)?;
    let canvas_size = dom::sync_canvas_to_viewport(&canvas);

    let mut config = VisualizerConfig::default();
    if let Some(n) = input::parse_particle_count(canvas.get_attribute(PARTICLE_COUNT_ATTR).as_deref()) {
        config = config.with_particle_count(n);
    }
    let visualizer = Visualizer::new(&config, canvas_size)?;

    let sensitivity_slider: Option<web::HtmlInputElement> =
        dom::element_by_id(&document, SENSITIVITY_SLIDER_ID);
    if sensitivity_slider.is_none() {
        log::warn!("missing #{}; using default sensitivity", SENSITIVITY_SLIDER_ID);
    }

    let queue = events::EventQueue::default();
    let capture: audio::PreparedCapture = Rc::default();
    events::wire_start_button(&document, &queue, &capture, config.fft_size);
    events::wire_resize(&canvas, &queue);
    events::wire_pointermove(&canvas, &queue);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        visualizer,
        surface,
        input: queue,
        sensitivity_slider,
        capture,
        pending_audio: Rc::new(RefCell::new(None)),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
