use glam::Vec2;
use rand::Rng;

use crate::constants::{
    AUDIO_SIZE_GAIN, BASE_SIZE_MIN, BASE_SIZE_SPAN, HUE_SPAN_DEG, INITIAL_SPEED_MAX,
    VELOCITY_DAMPING,
};
use crate::spectrum::{FrequencySnapshot, Sensitivity};
use crate::surface::{Canvas2DSurface, CanvasSize, Color};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_size: f32,
    pub current_size: f32,
    /// Degrees. Audio-driven hues run past 360 and are left for CSS to wrap.
    pub hue: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, base_size: f32, hue: f32) -> Self {
        Self {
            position,
            velocity,
            base_size,
            current_size: base_size,
            hue,
        }
    }

    /// Random particle somewhere on the canvas.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, canvas: CanvasSize) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * canvas.width,
            rng.gen::<f32>() * canvas.height,
        );
        let velocity = Vec2::new(
            rng.gen_range(-INITIAL_SPEED_MAX..INITIAL_SPEED_MAX),
            rng.gen_range(-INITIAL_SPEED_MAX..INITIAL_SPEED_MAX),
        );
        let base_size = BASE_SIZE_MIN + rng.gen::<f32>() * BASE_SIZE_SPAN;
        let hue = rng.gen::<f32>() * HUE_SPAN_DEG;
        Self::new(position, velocity, base_size, hue)
    }

    #[inline]
    pub fn color(&self) -> Color {
        Color::vivid(self.hue)
    }

    /// Advance one frame: move, bounce off the canvas edges, remap size and
    /// hue, then damp.
    pub fn update(
        &mut self,
        snapshot: Option<&FrequencySnapshot>,
        canvas: CanvasSize,
        sensitivity: Sensitivity,
    ) {
        self.position += self.velocity;

        // Reflection only; the particle may sit outside until it drifts back.
        if self.position.x < 0.0 || self.position.x > canvas.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > canvas.height {
            self.velocity.y = -self.velocity.y;
        }

        let fraction = canvas.x_fraction(self.position.x);
        match snapshot.and_then(|s| s.normalized_at(fraction)) {
            Some(level) => {
                let size =
                    self.base_size + level * AUDIO_SIZE_GAIN * sensitivity.multiplier();
                self.current_size = size.max(0.0);
                self.hue = level * HUE_SPAN_DEG;
            }
            None => {
                self.current_size = self.base_size;
                self.hue = fraction * HUE_SPAN_DEG;
            }
        }

        self.velocity *= VELOCITY_DAMPING;
    }

    pub fn draw<S: Canvas2DSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.current_size, self.color());
    }

    /// Nudge the velocity by `impulse` along the unit vector toward
    /// `pointer` if it is strictly within `radius`. Returns whether an
    /// impulse was applied; a pointer exactly on the particle is skipped.
    pub fn repel_from(&mut self, pointer: Vec2, radius: f32, impulse: f32) -> bool {
        let toward_pointer = pointer - self.position;
        let distance = toward_pointer.length();
        if !(distance > 0.0 && distance < radius) {
            return false;
        }
        self.velocity += toward_pointer / distance * impulse;
        true
    }
}
