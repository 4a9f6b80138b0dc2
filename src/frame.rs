use particles_core::{InputOutcome, Visualizer, VisualizerError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::{self, AudioSlot, MicrophoneFeed, PreparedCapture};
use crate::dom;
use crate::events::EventQueue;
use crate::surface::CanvasSurface;

pub struct FrameContext {
    pub visualizer: Visualizer<MicrophoneFeed>,
    pub surface: CanvasSurface,
    pub input: EventQueue,
    pub sensitivity_slider: Option<web::HtmlInputElement>,
    pub capture: PreparedCapture,
    pub pending_audio: AudioSlot,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if self.visualizer.pump_input(&mut self.input) == InputOutcome::RequestAudioAccess {
            match self.capture.take() {
                Some(graph) => audio::spawn_microphone_request(graph, self.pending_audio.clone()),
                None => {
                    *self.pending_audio.borrow_mut() = Some(Err(VisualizerError::AudioPipeline(
                        "start requested without a prepared context".to_string(),
                    )));
                }
            }
        }

        let resolved = self.pending_audio.borrow_mut().take();
        if let Some(result) = resolved {
            self.visualizer.resolve_audio(result);
        }

        let sensitivity = dom::read_sensitivity(self.sensitivity_slider.as_ref());
        self.visualizer.frame(&mut self.surface, sensitivity);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Run `frame` on every display refresh until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
