// Physics and audio-mapping tuning shared by every frontend.

// Population
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
pub const BASE_SIZE_MIN: f32 = 1.0;
pub const BASE_SIZE_SPAN: f32 = 5.0; // base size drawn from [MIN, MIN + SPAN)
pub const INITIAL_SPEED_MAX: f32 = 1.0; // per-axis, symmetric around zero

// Motion
pub const VELOCITY_DAMPING: f32 = 0.99; // applied once per frame

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 100.0;
pub const REPULSION_IMPULSE: f32 = 0.5;

// Audio analysis
pub const DEFAULT_FFT_SIZE: u32 = 256; // yields 128 magnitude bins
pub const FFT_SIZE_MIN: u32 = 32;
pub const FFT_SIZE_MAX: u32 = 32768;
pub const MAGNITUDE_MIDSCALE: f32 = 128.0; // byte magnitude that maps to 1.0
pub const AUDIO_SIZE_GAIN: f32 = 10.0;

// Sensitivity slider
pub const SENSITIVITY_DIVISOR: f32 = 50.0;
pub const DEFAULT_SENSITIVITY_VALUE: f32 = 50.0;

// Color
pub const HUE_SPAN_DEG: f32 = 360.0;
pub const PARTICLE_SATURATION: f32 = 100.0;
pub const PARTICLE_LIGHTNESS: f32 = 50.0;

// Trail fade painted over the whole canvas each frame
pub const FADE_ALPHA: f32 = 0.05;
