//! Frequency magnitudes and the microphone feed lifecycle.

use crate::constants::{DEFAULT_SENSITIVITY_VALUE, MAGNITUDE_MIDSCALE, SENSITIVITY_DIVISOR};
use crate::error::VisualizerError;

/// Source of byte frequency magnitudes (0..=255 per bin).
///
/// The web frontend wraps an `AnalyserNode`; tests feed fixed data.
pub trait FrequencyAnalyzer {
    /// Number of bins a single read produces (half the analysis window).
    fn bin_count(&self) -> usize;
    /// Overwrite `out` with the current magnitudes. `out.len() == bin_count()`.
    fn read_magnitudes(&mut self, out: &mut [u8]);
}

/// One frame's worth of magnitudes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencySnapshot {
    bins: Vec<u8>,
}

impl FrequencySnapshot {
    pub fn new(bins: Vec<u8>) -> Self {
        Self { bins }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    #[inline]
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    /// Bin selected by a horizontal fraction of the canvas, `floor(f * len)`,
    /// clamped into range for particles sitting outside the canvas.
    #[inline]
    pub fn index_for_fraction(&self, fraction: f32) -> usize {
        let last = self.bins.len().saturating_sub(1);
        let raw = (fraction * self.bins.len() as f32).floor();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            (raw as usize).min(last)
        }
    }

    /// Magnitude at `fraction` divided by mid-scale, so 128 maps to 1.0 and
    /// 255 to just under 2.0. `None` for an empty snapshot.
    pub fn normalized_at(&self, fraction: f32) -> Option<f32> {
        if self.bins.is_empty() {
            return None;
        }
        let idx = self.index_for_fraction(fraction);
        Some(self.bins[idx] as f32 / MAGNITUDE_MIDSCALE)
    }

    fn refill<A: FrequencyAnalyzer + ?Sized>(&mut self, analyzer: &mut A) {
        let bins = analyzer.bin_count();
        if self.bins.len() != bins {
            self.bins.resize(bins, 0);
        }
        analyzer.read_magnitudes(&mut self.bins);
    }
}

impl From<Vec<u8>> for FrequencySnapshot {
    fn from(bins: Vec<u8>) -> Self {
        Self::new(bins)
    }
}

/// Live slider reading turned into a size multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensitivity(f32);

impl Sensitivity {
    /// Raw slider value (nominally 0..100); no validation beyond the divide.
    #[inline]
    pub fn from_slider(value: f32) -> Self {
        Self(value / SENSITIVITY_DIVISOR)
    }

    #[inline]
    pub fn multiplier(self) -> f32 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::from_slider(DEFAULT_SENSITIVITY_VALUE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceState {
    Uninitialized,
    RequestingAccess,
    Connected,
    /// Access failed; behaves like `Uninitialized` except `start` stays a no-op.
    Denied,
}

/// Microphone feed state machine:
/// `Uninitialized -> RequestingAccess -> Connected | Denied`, never backwards.
pub struct FrequencySource<A> {
    state: SourceState,
    analyzer: Option<A>,
    snapshot: FrequencySnapshot,
}

impl<A> Default for FrequencySource<A> {
    fn default() -> Self {
        Self {
            state: SourceState::Uninitialized,
            analyzer: None,
            snapshot: FrequencySnapshot::default(),
        }
    }
}

impl<A: FrequencyAnalyzer> FrequencySource<A> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> SourceState {
        self.state
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.state == SourceState::Connected
    }

    /// Returns `true` only on the first call; the caller then owns issuing the
    /// permission request and reporting back through [`Self::resolve`].
    pub fn start(&mut self) -> bool {
        if self.state != SourceState::Uninitialized {
            log::debug!("[audio] start ignored in state {:?}", self.state);
            return false;
        }
        self.state = SourceState::RequestingAccess;
        log::info!("[audio] requesting microphone access");
        true
    }

    pub fn resolve(&mut self, result: Result<A, VisualizerError>) {
        if self.state != SourceState::RequestingAccess {
            log::warn!(
                "[audio] dropping permission result received in state {:?}",
                self.state
            );
            return;
        }
        match result {
            Ok(analyzer) => {
                log::info!(
                    "[audio] microphone connected ({} bins)",
                    analyzer.bin_count()
                );
                self.analyzer = Some(analyzer);
                self.state = SourceState::Connected;
            }
            Err(e) => {
                if e.is_permission_denied() {
                    log::warn!("[audio] {}", e);
                } else {
                    log::error!("[audio] {}", e);
                }
                self.state = SourceState::Denied;
            }
        }
    }

    /// Fresh magnitudes for this frame, or `None` until connected.
    pub fn snapshot(&mut self) -> Option<&FrequencySnapshot> {
        let analyzer = self.analyzer.as_mut()?;
        self.snapshot.refill(analyzer);
        Some(&self.snapshot)
    }
}
