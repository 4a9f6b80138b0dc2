use glam::Vec2;
use rand::Rng;

use crate::constants::{REPULSION_IMPULSE, REPULSION_RADIUS};
use crate::particle::Particle;
use crate::spectrum::{FrequencySnapshot, Sensitivity};
use crate::surface::{Canvas2DSurface, CanvasSize};

/// Fixed population of particles. The count never changes after construction.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, canvas: CanvasSize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, canvas))
            .collect::<Vec<_>>();
        Self { particles }
    }

    /// Field built from explicit particles, mostly for scripted scenarios.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Apply the pointer impulse to every particle in range. Returns how many
    /// particles were kicked.
    pub fn repel(&mut self, pointer: Vec2) -> usize {
        self.particles
            .iter_mut()
            .map(|p| p.repel_from(pointer, REPULSION_RADIUS, REPULSION_IMPULSE))
            .filter(|pushed| *pushed)
            .count()
    }

    /// Update then immediately draw each particle, in field order.
    pub fn update_and_draw<S: Canvas2DSurface + ?Sized>(
        &mut self,
        snapshot: Option<&FrequencySnapshot>,
        canvas: CanvasSize,
        sensitivity: Sensitivity,
        surface: &mut S,
    ) {
        for p in &mut self.particles {
            p.update(snapshot, canvas, sensitivity);
            p.draw(surface);
        }
    }
}
