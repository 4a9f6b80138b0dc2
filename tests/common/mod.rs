// Host-side fakes for the three seams the web frontend binds to the browser.

#![allow(dead_code)]

use glam::Vec2;
use particles_core::{
    Canvas2DSurface, CanvasSize, Color, FrequencyAnalyzer, InputEvent, PointerInputSource,
    Visualizer, VisualizerConfig,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect { origin: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
}

/// Records every draw call instead of rasterizing.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas2DSurface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }
}

/// Analyzer whose magnitudes the test can rewrite between frames.
#[derive(Clone)]
pub struct FixedAnalyzer {
    pub bins: Rc<RefCell<Vec<u8>>>,
    pub reads: Rc<RefCell<usize>>,
}

impl FixedAnalyzer {
    pub fn filled(len: usize, value: u8) -> Self {
        Self {
            bins: Rc::new(RefCell::new(vec![value; len])),
            reads: Rc::new(RefCell::new(0)),
        }
    }

    pub fn set_all(&self, value: u8) {
        for b in self.bins.borrow_mut().iter_mut() {
            *b = value;
        }
    }
}

impl FrequencyAnalyzer for FixedAnalyzer {
    fn bin_count(&self) -> usize {
        self.bins.borrow().len()
    }

    fn read_magnitudes(&mut self, out: &mut [u8]) {
        out.copy_from_slice(&self.bins.borrow());
        *self.reads.borrow_mut() += 1;
    }
}

/// Input source replaying a fixed script.
#[derive(Default)]
pub struct ScriptedInput {
    pub events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl PointerInputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

pub fn seeded_visualizer(count: usize, width: f32, height: f32) -> Visualizer<FixedAnalyzer> {
    let config = VisualizerConfig::default()
        .with_particle_count(count)
        .with_seed(42);
    Visualizer::new(&config, CanvasSize::new(width, height)).expect("valid config")
}
