//! Per-frame orchestration.
//!
//! [`Visualizer`] is the single owner of all mutable state: the particle
//! field, the canvas size and the microphone feed. Hosts call
//! [`Visualizer::frame`] once per display refresh and feed it input between
//! frames; nothing else writes to it.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::VisualizerConfig;
use crate::constants::FADE_ALPHA;
use crate::error::VisualizerError;
use crate::field::ParticleField;
use crate::spectrum::{FrequencyAnalyzer, FrequencySource, Sensitivity, SourceState};
use crate::surface::{Canvas2DSurface, CanvasSize, Color};

pub struct Visualizer<A> {
    pub(crate) field: ParticleField,
    pub(crate) canvas: CanvasSize,
    pub(crate) source: FrequencySource<A>,
    frames: u64,
}

impl<A: FrequencyAnalyzer> Visualizer<A> {
    pub fn new(config: &VisualizerConfig, canvas: CanvasSize) -> Result<Self, VisualizerError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field = ParticleField::new(config.particle_count, canvas, &mut rng);
        log::info!(
            "[field] {} particles on {}x{} canvas",
            field.len(),
            canvas.width,
            canvas.height
        );
        Ok(Self::with_field(field, canvas))
    }

    /// Wrap an existing field, for hosts and tests that place particles themselves.
    pub fn with_field(field: ParticleField, canvas: CanvasSize) -> Self {
        Self {
            field,
            canvas,
            source: FrequencySource::new(),
            frames: 0,
        }
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[inline]
    pub fn audio_state(&self) -> SourceState {
        self.source.state()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Hand over the outcome of the microphone request started by
    /// [`crate::InputOutcome::RequestAudioAccess`].
    pub fn resolve_audio(&mut self, result: Result<A, VisualizerError>) {
        self.source.resolve(result);
    }

    /// Render one frame: fade, sample the spectrum, update and draw every
    /// particle.
    pub fn frame<S: Canvas2DSurface + ?Sized>(&mut self, surface: &mut S, sensitivity: Sensitivity) {
        surface.fill_rect(Vec2::ZERO, self.canvas.as_vec2(), Color::black(FADE_ALPHA));

        let snapshot = self.source.snapshot();
        self.field
            .update_and_draw(snapshot, self.canvas, sensitivity, surface);

        self.frames += 1;
    }
}
