pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod input;
pub mod particle;
pub mod spectrum;
pub mod surface;
pub mod visualizer;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use input::*;
pub use particle::*;
pub use spectrum::*;
pub use surface::*;
pub use visualizer::*;
