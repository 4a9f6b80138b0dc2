//! Drawing-side types shared with the web frontend.
//!
//! Nothing here references a platform API. The web crate implements
//! [`Canvas2DSurface`] on top of a `CanvasRenderingContext2d`; tests implement it
//! with a recorder.

use glam::Vec2;
use std::fmt;

use crate::constants::{PARTICLE_LIGHTNESS, PARTICLE_SATURATION};

/// Canvas backing size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Negative or non-finite dimensions collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Horizontal position as a fraction of the width, 0 on a zero-width canvas.
    #[inline]
    pub fn x_fraction(&self, x: f32) -> f32 {
        if self.width > 0.0 {
            x / self.width
        } else {
            0.0
        }
    }
}

/// Fill color understood by a 2D canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Hue in degrees (not wrapped), saturation and lightness in percent.
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
    Rgba { r: u8, g: u8, b: u8, alpha: f32 },
}

impl Color {
    /// Fully saturated, mid-lightness color used for particles.
    #[inline]
    pub fn vivid(hue: f32) -> Self {
        Self::Hsl {
            hue,
            saturation: PARTICLE_SATURATION,
            lightness: PARTICLE_LIGHTNESS,
        }
    }

    #[inline]
    pub fn black(alpha: f32) -> Self {
        Self::Rgba {
            r: 0,
            g: 0,
            b: 0,
            alpha,
        }
    }
}

// CSS color syntax, suitable for `fillStyle`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
            Color::Rgba { r, g, b, alpha } => write!(f, "rgba({}, {}, {}, {})", r, g, b, alpha),
        }
    }
}

/// Minimal immediate-mode 2D drawing surface.
pub trait Canvas2DSurface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    /// Fill a full circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
