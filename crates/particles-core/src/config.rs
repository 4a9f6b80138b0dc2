use crate::constants::{DEFAULT_FFT_SIZE, DEFAULT_PARTICLE_COUNT, FFT_SIZE_MAX, FFT_SIZE_MIN};
use crate::error::VisualizerError;

/// Startup parameters for a [`crate::Visualizer`].
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
    pub particle_count: usize,
    /// Analysis window in samples; the snapshot carries half as many bins.
    pub fft_size: u32,
    /// Fixed seed for the initial population. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            fft_size: DEFAULT_FFT_SIZE,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fft_size(mut self, fft_size: u32) -> Self {
        self.fft_size = fft_size;
        self
    }

    #[inline]
    pub fn bin_count(&self) -> usize {
        (self.fft_size / 2) as usize
    }

    pub fn validate(&self) -> Result<(), VisualizerError> {
        if self.particle_count == 0 {
            return Err(VisualizerError::EmptyField);
        }
        let fft = self.fft_size;
        if !fft.is_power_of_two() || !(FFT_SIZE_MIN..=FFT_SIZE_MAX).contains(&fft) {
            return Err(VisualizerError::InvalidFftSize(fft));
        }
        Ok(())
    }
}
