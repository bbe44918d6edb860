//! Input stimulus recorded by event handlers and consumed once per frame.
//!
//! Handlers only ever write these plain fields; the engines read them at the
//! top of their frame, so no frame observes a half-applied input.

use super::constants::{POINTER_LERP, SCROLL_LERP};
use glam::Vec2;

/// Latest pointer sample in raw surface pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerStimulus {
    pub position: Vec2,
    pub active: bool,
}

impl PointerStimulus {
    #[inline]
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.active = true;
    }

    #[inline]
    pub fn leave(&mut self) {
        self.active = false;
    }

    /// Pointer position if it is currently over the page.
    #[inline]
    pub fn active_position(&self) -> Option<Vec2> {
        self.active.then_some(self.position)
    }
}

/// Pointer (normalised) and scroll samples with their smoothed shadows.
#[derive(Default, Clone, Copy, Debug)]
pub struct ParallaxStimulus {
    pointer_target: Vec2,
    pointer: Vec2,
    scroll_target: f32,
    scroll: f32,
}

impl ParallaxStimulus {
    #[inline]
    pub fn set_pointer(&mut self, normalized: Vec2) {
        self.pointer_target = normalized;
    }

    #[inline]
    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll_target = offset;
    }

    /// Move the smoothed values one frame toward the latest raw samples.
    pub fn smooth(&mut self) {
        self.pointer.x = lerp_toward(self.pointer.x, self.pointer_target.x, POINTER_LERP);
        self.pointer.y = lerp_toward(self.pointer.y, self.pointer_target.y, POINTER_LERP);
        self.scroll = lerp_toward(self.scroll, self.scroll_target, SCROLL_LERP);
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[inline]
    pub fn pointer_target(&self) -> Vec2 {
        self.pointer_target
    }

    #[inline]
    pub fn scroll_target(&self) -> f32 {
        self.scroll_target
    }
}

/// Size reported by a resize event, applied by the engine on its next frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct PendingResize(Option<Vec2>);

impl PendingResize {
    #[inline]
    pub fn request(&mut self, size: Vec2) {
        self.0 = Some(size);
    }

    #[inline]
    pub fn take(&mut self) -> Option<Vec2> {
        self.0.take()
    }
}

#[inline]
pub fn lerp_toward(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Map a container-relative point into \[-1, 1\] per axis. Points outside the
/// container saturate at the edge; a degenerate container maps to the centre.
pub fn normalize_pointer(local: Vec2, container: Vec2) -> Vec2 {
    if container.x <= 0.0 || container.y <= 0.0 {
        return Vec2::ZERO;
    }
    (local / container * 2.0 - Vec2::ONE).clamp(Vec2::NEG_ONE, Vec2::ONE)
}
