//! Tuning constants for both backdrop engines.
//!
//! Physics values are in surface pixels per frame unless noted otherwise.

// ---------------- Particle network ----------------

// Surface area (px²) per particle; count = floor(w*h / this)
pub const PARTICLE_AREA_PER_NODE: f32 = 15_000.0;

pub const PARTICLE_DRIFT_MAX: f32 = 0.5; // initial |v| per axis
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

pub const REPEL_RADIUS: f32 = 100.0;
pub const REPEL_STRENGTH: f32 = 0.5;

pub const PARTICLE_FRICTION: f32 = 0.98;
pub const PARTICLE_JITTER: f32 = 0.025; // half-width of the per-axis jitter

pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_OPACITY: f32 = 0.3;
pub const LINK_WIDTH: f32 = 0.5;
pub const CURSOR_LINK_SCALE: f32 = 1.5; // cursor reach = LINK_DISTANCE * this
pub const CURSOR_LINK_OPACITY: f32 = 0.4;
pub const CURSOR_LINK_WIDTH: f32 = 1.0;

// ---------------- Starfield ----------------

pub const STAR_DENSITY_SCALE: f32 = 1.5;
pub const STAR_MARGIN: f32 = 100.0; // spawn buffer beyond each edge for parallax
pub const MAX_STARS: usize = 20_000; // about twice a 4K screen at the default gap

// size = radius * (SIZE_BASE + u^4 * SIZE_SPAN)
pub const STAR_SIZE_BASE: f32 = 0.2;
pub const STAR_SIZE_SPAN: f32 = 2.5;

pub const STAR_ALPHA_MIN: f32 = 0.1;
pub const STAR_ALPHA_SPAN: f32 = 0.8;

pub const STAR_GLOW_CHANCE: f64 = 0.1;
pub const STAR_GLOW_STRONG: f32 = 1.0;
pub const STAR_GLOW_WEAK: f32 = 0.2;
pub const STAR_GLOW_FLAG: f32 = 0.5; // glow_intensity above this enables halos

pub const PULSE_SPEED_MIN: f32 = 0.1;
pub const PULSE_SPEED_SPAN: f32 = 0.5;
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_SPAN: f32 = 1.2;

pub const TWINKLE_FLOOR: f32 = 0.2;
pub const TWINKLE_GLOW_THRESHOLD: f32 = 0.8;
pub const GLOW_BLUR: f32 = 8.0;

pub const PARALLAX_PX: f32 = 20.0;

pub const BREATHING_AMPLITUDE: f32 = 0.02;
pub const BREATHING_RATE: f32 = 0.2;
pub const SCROLL_ZOOM_PER_PX: f32 = 0.00005;

// Exponential smoothing rates (fraction of the remaining gap per frame)
pub const POINTER_LERP: f32 = 0.05;
pub const SCROLL_LERP: f32 = 0.1;

// ---------------- Shooting stars ----------------

pub const SHOOTING_SPAWN_CHANCE: f64 = 0.006;
pub const SHOOTING_LEN_MIN: f32 = 100.0;
pub const SHOOTING_LEN_SPAN: f32 = 200.0;
pub const SHOOTING_SPEED_MIN: f32 = 10.0;
pub const SHOOTING_SPEED_SPAN: f32 = 15.0;
pub const SHOOTING_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
pub const SHOOTING_ANGLE_JITTER: f32 = 0.3; // full width, ±0.15 rad
pub const SHOOTING_FADE_STEP: f32 = 0.04;
pub const SHOOTING_TRAIL_WIDTH: f32 = 2.5;
pub const SHOOTING_HEAD_RADIUS: f32 = 2.0;
pub const SHOOTING_HEAD_BLUR: f32 = 10.0;

// ---------------- Starfield option defaults ----------------

pub const DEFAULT_GAP: f32 = 35.0;
pub const MIN_GAP: f32 = 1.0;
pub const DEFAULT_RADIUS: f32 = 1.2;
pub const DEFAULT_OPACITY: f32 = 0.9;
pub const DEFAULT_SPEED_MIN: f32 = 0.3;
pub const DEFAULT_SPEED_MAX: f32 = 1.2;
pub const DEFAULT_SPEED_SCALE: f32 = 0.6;
