use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisualizerError {
    /// The user (or the browser) refused microphone access.
    #[error("microphone access denied: {0}")]
    PermissionDenied(String),
    /// Anything else that prevented the capture graph from being built.
    #[error("audio pipeline unavailable: {0}")]
    AudioPipeline(String),
    #[error("invalid fft size {0}: expected a power of two between 32 and 32768")]
    InvalidFftSize(u32),
    #[error("particle count must be positive")]
    EmptyField,
}

impl VisualizerError {
    /// Whether the failure came from the user's permission decision.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}
