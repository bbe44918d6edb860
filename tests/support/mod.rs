// Recording surface shared by the host-side engine tests.

use crate::core::surface::{Glow, Rgba, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear,
    Background(Rgba),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: Option<Glow>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    FadingLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub size: Vec2,
    pub resizes: Vec<Vec2>,
    pub calls: Vec<Draw>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::Circle { .. }))
            .collect()
    }

    pub fn lines_of_width(&self, w: f32) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::Line { width, .. } if *width == w))
            .collect()
    }

    pub fn fading_lines(&self) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::FadingLine { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.resizes.push(size);
    }

    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(Draw::Clear);
    }

    fn fill_background(&mut self, color: Rgba) {
        self.calls.push(Draw::Background(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        self.calls.push(Draw::Circle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Draw::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn stroke_fading_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Draw::FadingLine {
            from,
            to,
            width,
            color,
        });
    }
}
