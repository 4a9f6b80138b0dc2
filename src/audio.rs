use particles_core::{FrequencyAnalyzer, VisualizerError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{MICROPHONE_NOTICE, PERMISSION_ERROR_NAMES};
use crate::dom;
use crate::gesture::GestureSlot;

/// Single-shot hand-off from the permission future to the frame loop.
pub type AudioSlot = Rc<RefCell<Option<Result<MicrophoneFeed, VisualizerError>>>>;

/// Context and analyser built by the start click, waiting for the frame loop.
pub type PreparedCapture = Rc<GestureSlot<Result<CaptureGraph, VisualizerError>>>;

/// The part of the audio graph that needs no permission.
pub struct CaptureGraph {
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
}

impl CaptureGraph {
    /// Must run inside the click handler so the context starts running.
    pub fn new(fft_size: u32) -> Result<Self, VisualizerError> {
        let audio_ctx =
            web::AudioContext::new().map_err(|e| pipeline_error("AudioContext", e))?;
        let analyser =
            web::AnalyserNode::new(&audio_ctx).map_err(|e| pipeline_error("AnalyserNode", e))?;
        analyser.set_fft_size(fft_size);
        _ = audio_ctx.resume();
        Ok(Self {
            audio_ctx,
            analyser,
        })
    }
}

/// Microphone routed into an analyser. The context and source node are held
/// so the graph stays alive for the page's lifetime.
pub struct MicrophoneFeed {
    _audio_ctx: web::AudioContext,
    _source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
}

impl FrequencyAnalyzer for MicrophoneFeed {
    fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    fn read_magnitudes(&mut self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}

fn describe(err: &JsValue) -> String {
    if let Some(dom_err) = err.dyn_ref::<web::DomException>() {
        format!("{}: {}", dom_err.name(), dom_err.message())
    } else if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        String::from(js_err.message())
    } else {
        format!("{:?}", err)
    }
}

fn pipeline_error(context: &str, err: JsValue) -> VisualizerError {
    VisualizerError::AudioPipeline(format!("{}: {}", context, describe(&err)))
}

// getUserMedia rejects with a DOMException; only some names mean refusal.
fn classify_media_error(err: JsValue) -> VisualizerError {
    let refused = err
        .dyn_ref::<web::DomException>()
        .map(|e| PERMISSION_ERROR_NAMES.contains(&e.name().as_str()))
        .unwrap_or(false);
    if refused {
        VisualizerError::PermissionDenied(describe(&err))
    } else {
        pipeline_error("getUserMedia", err)
    }
}

pub async fn open_microphone(graph: CaptureGraph) -> Result<MicrophoneFeed, VisualizerError> {
    let CaptureGraph {
        audio_ctx,
        analyser,
    } = graph;

    let window = web::window()
        .ok_or_else(|| VisualizerError::AudioPipeline("no window".to_string()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| pipeline_error("mediaDevices", e))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::FALSE);
    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(classify_media_error)?;
    let stream: web::MediaStream = JsFuture::from(request)
        .await
        .map_err(classify_media_error)?
        .dyn_into()
        .map_err(|e| pipeline_error("MediaStream", e))?;

    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| pipeline_error("MediaStreamAudioSourceNode", e))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| pipeline_error("connect", e))?;

    // The permission prompt can outlast the gesture; make sure it is running.
    match audio_ctx.resume() {
        Ok(p) => {
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("[audio] resume failed: {}", describe(&e));
            }
        }
        Err(e) => log::warn!("[audio] resume failed: {}", describe(&e)),
    }

    Ok(MicrophoneFeed {
        _audio_ctx: audio_ctx,
        _source: source,
        analyser,
    })
}

fn report_failure(err: &VisualizerError) {
    if err.is_permission_denied() {
        log::warn!("Microphone access refused: {}", err);
    } else {
        log::error!("Microphone access failed: {}", err);
    }
    dom::alert(MICROPHONE_NOTICE);
}

/// Fire-and-forget permission request on top of the graph the click built.
/// Failures are reported to the user here and never reach the render loop
/// as anything but "no audio".
pub fn spawn_microphone_request(
    graph: Result<CaptureGraph, VisualizerError>,
    slot: AudioSlot,
) {
    spawn_local(async move {
        let result = match graph {
            Ok(graph) => open_microphone(graph).await,
            Err(e) => Err(e),
        };
        match &result {
            Ok(_) => log::info!("Microphone connected successfully"),
            Err(e) => report_failure(e),
        }
        *slot.borrow_mut() = Some(result);
    });
}
