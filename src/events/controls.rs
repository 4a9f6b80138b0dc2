use particles_core::InputEvent;
use web_sys as web;

use super::EventQueue;
use crate::audio::{CaptureGraph, PreparedCapture};
use crate::constants::START_BUTTON_ID;
use crate::dom;

/// Clicking start builds the audio context inside the gesture, once, and
/// asks the frame loop to request the microphone. Repeated clicks are
/// absorbed here and by the audio state machine.
pub fn wire_start_button(
    document: &web::Document,
    queue: &EventQueue,
    capture: &PreparedCapture,
    fft_size: u32,
) {
    let queue = queue.clone();
    let capture = capture.clone();
    let wired = dom::add_click_listener(document, START_BUTTON_ID, move || {
        if capture.prepare_with(|| CaptureGraph::new(fft_size)) {
            log::info!("[input] start requested");
        }
        queue.push(InputEvent::Start);
    });
    if !wired {
        log::warn!("visualizer will run without audio");
    }
}
