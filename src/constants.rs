// DOM contract and user-facing text for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "visualizer";
pub const SENSITIVITY_SLIDER_ID: &str = "sensitivity";
pub const START_BUTTON_ID: &str = "startButton";

// Optional canvas attribute overriding the particle count
pub const PARTICLE_COUNT_ATTR: &str = "data-particle-count";

// getUserMedia rejections that mean "the user said no"
pub const PERMISSION_ERROR_NAMES: [&str; 2] = ["NotAllowedError", "SecurityError"];

pub const MICROPHONE_NOTICE: &str = "Please grant microphone access to use the audio visualizer.";
