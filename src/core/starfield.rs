//! Starfield engine: twinkling stars with pointer parallax, scroll-linked zoom
//! and occasional shooting stars.
//!
//! The star population is a resettable cloud. Every resize throws the old
//! stars away and rolls a fresh set sized to the new area, so density stays
//! constant; nothing tracks individual stars across a regeneration.

use super::config::StarfieldConfig;
use super::constants::*;
use super::shooting::ShootingStars;
use super::stimulus::{normalize_pointer, PendingResize, ParallaxStimulus};
use super::surface::{Glow, Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Stellar-classification inspired palette.
pub const STAR_COLORS: [Rgba; 6] = [
    Rgba::opaque(0xFF, 0xFF, 0xFF), // white
    Rgba::opaque(0xCA, 0xE1, 0xFF), // blue-white
    Rgba::opaque(0xFF, 0xFA, 0xCD), // yellow-white
    Rgba::opaque(0xFF, 0xD7, 0x00), // orange-ish
    Rgba::opaque(0xFF, 0x63, 0x47), // red-ish
    Rgba::opaque(0xF0, 0xF8, 0xFF), // alice blue
];

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub phase: f32,
    pub speed: f32,
    pub size: f32,
    pub base_alpha: f32,
    pub glow_intensity: f32,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
    /// Parallax weight; larger values follow the pointer further.
    pub depth: f32,
    pub color: Rgba,
}

impl Star {
    fn random(area: Vec2, cfg: &StarfieldConfig, rng: &mut StdRng) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * (area.x + 2.0 * STAR_MARGIN) - STAR_MARGIN,
            rng.gen::<f32>() * (area.y + 2.0 * STAR_MARGIN) - STAR_MARGIN,
        );
        // power law: many small stars, few large ones
        let size_scale = STAR_SIZE_BASE + rng.gen::<f32>().powi(4) * STAR_SIZE_SPAN;
        Self {
            position,
            phase: rng.gen::<f32>() * TAU,
            speed: cfg.speed_min + rng.gen::<f32>() * (cfg.speed_max - cfg.speed_min),
            size: cfg.radius * size_scale,
            base_alpha: STAR_ALPHA_MIN + rng.gen::<f32>() * STAR_ALPHA_SPAN,
            glow_intensity: if rng.gen_bool(STAR_GLOW_CHANCE) {
                STAR_GLOW_STRONG
            } else {
                STAR_GLOW_WEAK
            },
            pulse_phase: rng.gen::<f32>() * TAU,
            pulse_speed: PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN,
            depth: DEPTH_MIN + rng.gen::<f32>() * DEPTH_SPAN,
            color: STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())],
        }
    }

    #[inline]
    pub fn has_glow(&self) -> bool {
        self.glow_intensity > STAR_GLOW_FLAG
    }
}

/// Number of stars for a surface of `size` and grid cell `gap`, capped at
/// [`MAX_STARS`].
pub fn star_count(size: Vec2, gap: f32) -> usize {
    if gap <= 0.0 || !gap.is_finite() {
        return 0;
    }
    let area = size.x.max(0.0) as f64 * size.y.max(0.0) as f64;
    let cell = gap as f64 * gap as f64;
    let count = ((area / cell) * STAR_DENSITY_SCALE as f64).floor();
    if count >= MAX_STARS as f64 {
        MAX_STARS
    } else {
        count as usize
    }
}

/// Triangle wave of `(t*speed + phase) mod 2` folded into \[0, 1\] and squared.
/// Periodic in `t` with period `2 / speed`.
#[inline]
pub fn twinkle_wave(t: f32, speed: f32, phase: f32) -> f32 {
    let m = (t * speed + phase).rem_euclid(2.0);
    let lin = if m < 1.0 { m } else { 2.0 - m };
    lin * lin
}

/// Brightness used for alpha and glow; the floor keeps dim stars visible.
#[inline]
pub fn twinkle_intensity(t: f32, speed: f32, phase: f32) -> f32 {
    TWINKLE_FLOOR + (1.0 - TWINKLE_FLOOR) * twinkle_wave(t, speed, phase)
}

#[inline]
pub fn size_pulse(t: f32, pulse_speed: f32, pulse_phase: f32) -> f32 {
    0.8 + 0.4 * (t * pulse_speed + pulse_phase).sin()
}

#[inline]
pub fn breathing_zoom(t: f32) -> f32 {
    1.0 + BREATHING_AMPLITUDE * (t * BREATHING_RATE).sin()
}

#[inline]
pub fn scroll_zoom(scroll: f32) -> f32 {
    1.0 + scroll * SCROLL_ZOOM_PER_PX
}

/// Final draw parameters for one star in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSprite {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub glow: Option<Glow>,
}

/// Per-frame camera shared by every star.
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    pub center: Vec2,
    pub zoom: f32,
    /// Smoothed pointer in \[-1, 1\].
    pub pointer: Vec2,
    pub opacity: f32,
}

impl FrameView {
    pub fn project(&self, star: &Star, t: f32) -> StarSprite {
        let twinkle = twinkle_intensity(t, star.speed, star.phase);
        let pulse = size_pulse(t, star.pulse_speed, star.pulse_phase);
        let parallax = self.pointer * PARALLAX_PX * star.depth;

        let center = (star.position - self.center + parallax) * self.zoom + self.center;
        let radius = star.size * pulse * self.zoom;
        let alpha = star.base_alpha * twinkle * self.opacity;

        let glow = (twinkle > TWINKLE_GLOW_THRESHOLD && star.has_glow()).then(|| Glow {
            color: star.color,
            blur: GLOW_BLUR * (twinkle - TWINKLE_GLOW_THRESHOLD) * star.glow_intensity,
        });

        StarSprite {
            center,
            radius,
            color: star.color.with_alpha(alpha),
            glow,
        }
    }
}

pub struct Starfield {
    size: Vec2,
    config: StarfieldConfig,
    stars: Vec<Star>,
    shooting: ShootingStars,
    stimulus: ParallaxStimulus,
    pending_resize: PendingResize,
    rng: StdRng,
    generation: u64,
}

impl Starfield {
    pub fn new(size: Vec2, config: StarfieldConfig, rng: StdRng) -> Self {
        let mut field = Self {
            size: size.max(Vec2::ZERO),
            config,
            stars: Vec::new(),
            shooting: ShootingStars::default(),
            stimulus: ParallaxStimulus::default(),
            pending_resize: PendingResize::default(),
            rng,
            generation: 0,
        };
        field.regenerate();
        field
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn shooting_stars(&self) -> &ShootingStars {
        &self.shooting
    }

    #[inline]
    pub fn stimulus(&self) -> &ParallaxStimulus {
        &self.stimulus
    }

    /// Incremented on every regeneration.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the whole population with a fresh random set for the
    /// current size and config.
    pub fn regenerate(&mut self) {
        let count = star_count(self.size, self.config.gap);
        let (size, cfg) = (self.size, self.config);
        self.stars = (0..count)
            .map(|_| Star::random(size, &cfg, &mut self.rng))
            .collect();
        self.generation += 1;
        log::debug!(
            "[starfield] regenerated {} stars for {:.0}x{:.0} (gen {})",
            count,
            size.x,
            size.y,
            self.generation
        );
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
        self.regenerate();
    }

    /// Record a container size to adopt at the start of the next frame.
    pub fn request_resize(&mut self, size: Vec2) {
        self.pending_resize.request(size);
    }

    /// Pointer position relative to the container's top-left corner.
    pub fn pointer_moved(&mut self, local: Vec2, container: Vec2) {
        self.stimulus.set_pointer(normalize_pointer(local, container));
    }

    pub fn scrolled(&mut self, offset: f32) {
        self.stimulus.set_scroll(offset);
    }

    /// Draw one frame at animation clock `now_ms` (milliseconds).
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) {
        if let Some(size) = self.pending_resize.take() {
            self.resize(size);
        }
        if surface.size() != self.size {
            surface.resize(self.size);
        }
        let t = (now_ms / 1000.0 * self.config.speed_scale as f64) as f32;

        surface.clear();

        // smoothed values must be current before any position math
        self.stimulus.smooth();
        let view = FrameView {
            center: self.size * 0.5,
            zoom: breathing_zoom(t) * scroll_zoom(self.stimulus.scroll()),
            pointer: self.stimulus.pointer(),
            opacity: self.config.opacity,
        };

        for star in &self.stars {
            let sprite = view.project(star, t);
            surface.fill_circle(sprite.center, sprite.radius, sprite.color, sprite.glow);
        }

        self.shooting.maybe_spawn(self.size, &mut self.rng);
        self.shooting.step(self.size);
        self.shooting.draw(surface);
    }
}
