//! Drawing surface abstraction shared by both engines.
//!
//! Engines never talk to the browser directly; they issue draw calls against a
//! [`Surface`]. The web frontend backs it with a 2D canvas context and the host
//! tests back it with a recorder.

use glam::Vec2;

/// Straight-alpha colour. Channels are bytes, alpha is in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string for canvas style properties.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Soft halo drawn around a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

pub trait Surface {
    /// Logical size in CSS pixels.
    fn size(&self) -> Vec2;

    /// Match the backing store to a new logical size.
    fn resize(&mut self, size: Vec2);

    fn clear(&mut self);

    /// Fill the whole surface with an opaque background.
    fn fill_background(&mut self, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Line whose colour fades linearly from `color` at `from` to fully
    /// transparent at `to`.
    fn stroke_fading_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
