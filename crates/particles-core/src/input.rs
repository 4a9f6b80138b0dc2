use glam::Vec2;

use crate::spectrum::FrequencyAnalyzer;
use crate::surface::CanvasSize;
use crate::visualizer::Visualizer;

/// Host input, already translated into canvas pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Resize { width: f32, height: f32 },
    PointerMove { x: f32, y: f32 },
    /// The user asked for the microphone to be connected.
    Start,
}

/// What the host still has to do after an event was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    /// Issue the asynchronous permission request and report back through
    /// [`Visualizer::resolve_audio`]. Returned at most once per visualizer.
    RequestAudioAccess,
}

/// Queue of pending input events. The web frontend fills it from DOM
/// listeners; tests script it.
pub trait PointerInputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

impl<A: FrequencyAnalyzer> Visualizer<A> {
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Resize { width, height } => {
                // Particles keep their coordinates; out-of-bounds ones bounce back later.
                self.canvas = CanvasSize::new(width, height);
                log::debug!(
                    "[input] canvas resized to {}x{}",
                    self.canvas.width,
                    self.canvas.height
                );
                InputOutcome::Handled
            }
            InputEvent::PointerMove { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.field.repel(Vec2::new(x, y));
                }
                InputOutcome::Handled
            }
            InputEvent::Start => {
                if self.source.start() {
                    InputOutcome::RequestAudioAccess
                } else {
                    InputOutcome::Handled
                }
            }
        }
    }

    /// Drain `input` in arrival order.
    pub fn pump_input<S: PointerInputSource + ?Sized>(&mut self, input: &mut S) -> InputOutcome {
        let mut outcome = InputOutcome::Handled;
        while let Some(event) = input.next_event() {
            if self.handle_input(event) == InputOutcome::RequestAudioAccess {
                outcome = InputOutcome::RequestAudioAccess;
            }
        }
        outcome
    }
}
