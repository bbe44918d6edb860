//! Particle-network engine: drifting nodes, proximity links and pointer
//! repulsion over a full-viewport surface.

use super::constants::*;
use super::stimulus::{PendingResize, PointerStimulus};
use super::surface::{Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;

pub const BACKGROUND: Rgba = Rgba::opaque(10, 10, 15);
pub const NODE_CYAN: Rgba = Rgba::new(0, 242, 255, 0.8);
pub const NODE_WHITE: Rgba = Rgba::new(255, 255, 255, 0.6);
pub const LINK_COLOR: Rgba = Rgba::opaque(0, 242, 255);
pub const CURSOR_LINK_COLOR: Rgba = Rgba::opaque(181, 55, 242);

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    fn random(bounds: Vec2, rng: &mut StdRng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            velocity: Vec2::new(
                rng.gen_range(-PARTICLE_DRIFT_MAX..=PARTICLE_DRIFT_MAX),
                rng.gen_range(-PARTICLE_DRIFT_MAX..=PARTICLE_DRIFT_MAX),
            ),
            radius: rng.gen_range(PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX),
            color: if rng.gen_bool(0.5) {
                NODE_CYAN
            } else {
                NODE_WHITE
            },
        }
    }

    /// Integrate, damp, then bounce off and clamp to `bounds`.
    ///
    /// The reflection happens after integration, so a particle that overshot
    /// an edge can sit on it for one frame before its flipped velocity carries
    /// it back inside.
    fn integrate(&mut self, bounds: Vec2, jitter: Vec2) {
        self.position += self.velocity;
        self.velocity = self.velocity * PARTICLE_FRICTION + jitter;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
        self.position = self.position.clamp(Vec2::ZERO, bounds);
    }
}

/// Number of particles for a surface of `size`.
#[inline]
pub fn particle_count(size: Vec2) -> usize {
    let area = size.x.max(0.0) * size.y.max(0.0);
    (area / PARTICLE_AREA_PER_NODE).floor() as usize
}

/// Per-tick velocity impulse pushing a particle away from the pointer.
///
/// Strength is `(R - d) / R * 0.5` inside the repulsion radius and zero at or
/// beyond it. A pointer sitting exactly on the particle has no direction and
/// contributes nothing.
pub fn repulsion_impulse(particle: Vec2, pointer: Vec2) -> Vec2 {
    let away = particle - pointer;
    let distance = away.length();
    if distance >= REPEL_RADIUS || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let force = (REPEL_RADIUS - distance) / REPEL_RADIUS;
    away / distance * force * REPEL_STRENGTH
}

/// Linear fade for a link of length `distance`; `None` once out of reach.
#[inline]
pub fn link_fade(distance: f32, reach: f32) -> Option<f32> {
    (distance < reach).then(|| 1.0 - distance / reach)
}

pub struct ParticleNetwork {
    size: Vec2,
    particles: Vec<Particle>,
    pointer: PointerStimulus,
    pending_resize: PendingResize,
    rng: StdRng,
}

impl ParticleNetwork {
    pub fn new(size: Vec2, mut rng: StdRng) -> Self {
        let size = size.max(Vec2::ZERO);
        let particles = (0..particle_count(size))
            .map(|_| Particle::random(size, &mut rng))
            .collect();
        Self {
            size,
            particles,
            pointer: PointerStimulus::default(),
            pending_resize: PendingResize::default(),
            rng,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn pointer(&self) -> &PointerStimulus {
        &self.pointer
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.move_to(position);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// Record a viewport size to adopt at the start of the next frame.
    pub fn request_resize(&mut self, size: Vec2) {
        self.pending_resize.request(size);
    }

    /// Adopt new bounds. The population is kept; the next step clamps any
    /// particle left outside.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
    }

    /// Advance every particle by one tick.
    pub fn step(&mut self) {
        let bounds = self.size;
        let pointer = self.pointer.active_position();
        for p in &mut self.particles {
            if let Some(ptr) = pointer {
                p.velocity += repulsion_impulse(p.position, ptr);
            }
            let jitter = Vec2::new(
                self.rng.gen_range(-PARTICLE_JITTER..=PARTICLE_JITTER),
                self.rng.gen_range(-PARTICLE_JITTER..=PARTICLE_JITTER),
            );
            p.integrate(bounds, jitter);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        surface.fill_background(BACKGROUND);

        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, p.color, None);
        }

        // O(n²) over unordered pairs; n is bounded by the density formula.
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.position.distance(b.position);
                if let Some(fade) = link_fade(d, LINK_DISTANCE) {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        LINK_WIDTH,
                        LINK_COLOR.with_alpha(fade * LINK_OPACITY),
                    );
                }
            }
        }

        if let Some(ptr) = self.pointer.active_position() {
            let reach = LINK_DISTANCE * CURSOR_LINK_SCALE;
            for p in &self.particles {
                if let Some(fade) = link_fade(p.position.distance(ptr), reach) {
                    surface.stroke_line(
                        p.position,
                        ptr,
                        CURSOR_LINK_WIDTH,
                        CURSOR_LINK_COLOR.with_alpha(fade * CURSOR_LINK_OPACITY),
                    );
                }
            }
        }
    }

    /// One animation frame: pending resize, physics, then drawing.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(size) = self.pending_resize.take() {
            self.resize(size);
        }
        if surface.size() != self.size {
            surface.resize(self.size);
        }
        self.step();
        self.draw(surface);
    }
}
