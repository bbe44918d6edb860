//! Short-lived shooting stars layered over the starfield.

use super::constants::*;
use super::surface::{Glow, Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

pub const TRAIL_WHITE: Rgba = Rgba::opaque(255, 255, 255);
pub const TRAIL_PINK: Rgba = Rgba::opaque(255, 0, 200);
pub const TRAIL_CYAN: Rgba = Rgba::opaque(0, 242, 255);

/// Weighted palette: white 60 %, pink 20 %, cyan 20 %.
#[inline]
pub fn trail_color(roll: f64) -> Rgba {
    if roll > 0.8 {
        TRAIL_CYAN
    } else if roll > 0.6 {
        TRAIL_PINK
    } else {
        TRAIL_WHITE
    }
}

#[inline]
pub fn is_inside(position: Vec2, bounds: Vec2) -> bool {
    position.x >= 0.0 && position.y >= 0.0 && position.x < bounds.x && position.y < bounds.y
}

#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub position: Vec2,
    pub length: f32,
    pub speed: f32,
    pub angle: f32,
    pub opacity: f32,
    pub active: bool,
    pub color: Rgba,
}

impl ShootingStar {
    /// New star somewhere in the upper half of `bounds`, fully transparent.
    pub fn spawn(bounds: Vec2, rng: &mut StdRng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y * 0.5),
            length: SHOOTING_LEN_MIN + rng.gen::<f32>() * SHOOTING_LEN_SPAN,
            speed: SHOOTING_SPEED_MIN + rng.gen::<f32>() * SHOOTING_SPEED_SPAN,
            angle: SHOOTING_ANGLE + (rng.gen::<f32>() - 0.5) * SHOOTING_ANGLE_JITTER,
            opacity: 0.0,
            active: true,
            color: trail_color(rng.gen::<f64>()),
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.position - self.direction() * self.length
    }

    /// Move one frame. Fades in while inside `bounds`, fades out after
    /// leaving them and deactivates once fully transparent out there.
    pub fn advance(&mut self, bounds: Vec2) {
        self.position += self.direction() * self.speed;
        if is_inside(self.position, bounds) {
            self.opacity = (self.opacity + SHOOTING_FADE_STEP).min(1.0);
        } else {
            self.opacity -= SHOOTING_FADE_STEP;
            if self.opacity <= 0.0 {
                self.opacity = 0.0;
                self.active = false;
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let head = self.color.with_alpha(self.opacity);
        surface.stroke_fading_line(self.position, self.tail(), SHOOTING_TRAIL_WIDTH, head);
        surface.fill_circle(
            self.position,
            SHOOTING_HEAD_RADIUS,
            head,
            Some(Glow {
                color: self.color,
                blur: SHOOTING_HEAD_BLUR,
            }),
        );
    }
}

/// Live shooting stars. Rarely more than a couple at once.
#[derive(Default, Clone, Debug)]
pub struct ShootingStars {
    live: SmallVec<[ShootingStar; 4]>,
}

impl ShootingStars {
    /// Roll the per-frame spawn chance; returns whether a star was added.
    pub fn maybe_spawn(&mut self, bounds: Vec2, rng: &mut StdRng) -> bool {
        if !rng.gen_bool(SHOOTING_SPAWN_CHANCE) {
            return false;
        }
        self.live.push(ShootingStar::spawn(bounds, rng));
        true
    }

    pub fn push(&mut self, star: ShootingStar) {
        self.live.push(star);
    }

    /// Advance all stars and drop the ones that went inactive.
    pub fn step(&mut self, bounds: Vec2) {
        for star in self.live.iter_mut() {
            star.advance(bounds);
        }
        self.live.retain(|s| s.active);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for star in &self.live {
            star.draw(surface);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShootingStar> {
        self.live.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}
