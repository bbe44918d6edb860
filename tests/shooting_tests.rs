// Host-side tests for shooting-star lifecycle and spawning.
// The crate root is wasm-only, so the pure core is compiled in directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod support;

use crate::core::constants::*;
use crate::core::shooting::*;
use crate::core::surface::Surface;
use glam::Vec2;
use rand::prelude::*;
use support::{Draw, RecordingSurface};

const BOUNDS: Vec2 = Vec2::new(1000.0, 800.0);

fn star_at(position: Vec2, speed: f32) -> ShootingStar {
    ShootingStar {
        position,
        length: 150.0,
        speed,
        angle: SHOOTING_ANGLE,
        opacity: 0.0,
        active: true,
        color: TRAIL_WHITE,
    }
}

#[test]
fn opacity_rises_inside_then_falls_outside() {
    let mut s = star_at(Vec2::new(100.0, 100.0), 10.0);
    let mut was_inside = true;
    let mut prev = s.opacity;
    let mut frames = 0;

    while s.active {
        s.advance(BOUNDS);
        frames += 1;
        assert!(frames < 1_000, "star never finished");
        assert!((0.0..=1.0).contains(&s.opacity));

        let inside = is_inside(s.position, BOUNDS);
        if inside {
            // never re-enters once gone
            assert!(was_inside);
            assert!(s.opacity >= prev);
        } else {
            assert!(s.opacity < prev || !s.active);
        }
        was_inside = inside;
        prev = s.opacity;
    }
    assert_eq!(s.opacity, 0.0);
    assert!(!is_inside(s.position, BOUNDS));
}

#[test]
fn opacity_caps_at_one() {
    // slow star deep inside a huge area
    let mut s = star_at(Vec2::new(10.0, 10.0), 1.0);
    for _ in 0..200 {
        s.advance(Vec2::splat(10_000.0));
    }
    assert_eq!(s.opacity, 1.0);
    assert!(s.active);
}

#[test]
fn star_spawned_outside_fades_out_from_full() {
    let mut s = star_at(Vec2::new(2_000.0, 2_000.0), 10.0);
    s.opacity = 1.0;
    let mut frames = 0;
    while s.active {
        s.advance(BOUNDS);
        frames += 1;
    }
    // 1.0 / 0.04 steps, give or take float rounding
    assert!((25..=26).contains(&frames), "took {frames} frames");
}

#[test]
fn inside_excludes_far_edges() {
    assert!(is_inside(Vec2::ZERO, BOUNDS));
    assert!(is_inside(Vec2::new(999.9, 799.9), BOUNDS));
    assert!(!is_inside(Vec2::new(1000.0, 10.0), BOUNDS));
    assert!(!is_inside(Vec2::new(10.0, 800.0), BOUNDS));
    assert!(!is_inside(Vec2::new(-0.1, 10.0), BOUNDS));
    assert!(!is_inside(Vec2::new(10.0, -0.1), BOUNDS));
}

#[test]
fn collection_drops_only_inactive_stars() {
    let mut stars = ShootingStars::default();
    stars.push(star_at(Vec2::new(100.0, 100.0), 10.0));
    let mut leaving = star_at(Vec2::new(5_000.0, 5_000.0), 10.0);
    leaving.opacity = SHOOTING_FADE_STEP;
    stars.push(leaving);

    stars.step(BOUNDS);

    assert_eq!(stars.len(), 1);
    assert!(stars.iter().all(|s| s.active));
    assert!(stars.iter().all(|s| is_inside(s.position, BOUNDS)));

    stars.clear();
    assert!(stars.is_empty());
}

#[test]
fn trail_palette_weights() {
    assert_eq!(trail_color(0.0), TRAIL_WHITE);
    assert_eq!(trail_color(0.6), TRAIL_WHITE);
    assert_eq!(trail_color(0.61), TRAIL_PINK);
    assert_eq!(trail_color(0.8), TRAIL_PINK);
    assert_eq!(trail_color(0.81), TRAIL_CYAN);
    assert_eq!(trail_color(0.999), TRAIL_CYAN);
}

#[test]
fn spawned_stars_start_transparent_in_upper_half() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..1_000 {
        let s = ShootingStar::spawn(BOUNDS, &mut rng);
        assert!(s.active);
        assert_eq!(s.opacity, 0.0);
        assert!((0.0..=BOUNDS.x).contains(&s.position.x));
        assert!((0.0..=BOUNDS.y * 0.5).contains(&s.position.y));
        assert!((SHOOTING_LEN_MIN..=SHOOTING_LEN_MIN + SHOOTING_LEN_SPAN).contains(&s.length));
        assert!((SHOOTING_SPEED_MIN..=SHOOTING_SPEED_MIN + SHOOTING_SPEED_SPAN).contains(&s.speed));
        assert!((s.angle - SHOOTING_ANGLE).abs() <= SHOOTING_ANGLE_JITTER * 0.5 + 1e-6);
        // heading down and to the right
        let d = s.direction();
        assert!(d.x > 0.0 && d.y > 0.0);
    }
}

#[test]
fn spawn_rate_is_about_six_per_thousand() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut stars = ShootingStars::default();
    let trials = 200_000;
    let mut spawned = 0;
    for _ in 0..trials {
        if stars.maybe_spawn(BOUNDS, &mut rng) {
            spawned += 1;
        }
        stars.clear();
    }
    let rate = spawned as f64 / trials as f64;
    assert!((rate - SHOOTING_SPAWN_CHANCE).abs() < 0.001, "rate {rate}");
}

#[test]
fn draw_emits_trail_then_glowing_head() {
    let mut s = star_at(Vec2::new(400.0, 300.0), 10.0);
    s.opacity = 0.5;
    let mut surface = RecordingSurface::new();
    surface.clear();
    s.draw(&mut surface);

    match &surface.calls[1] {
        Draw::FadingLine {
            from,
            to,
            width,
            color,
        } => {
            assert_eq!(*from, s.position);
            assert!((from.distance(*to) - s.length).abs() < 1e-3);
            // the tail trails behind the head
            assert!(to.x < from.x && to.y < from.y);
            assert_eq!(*width, SHOOTING_TRAIL_WIDTH);
            assert_eq!(color.a, 0.5);
        }
        other => panic!("expected trail, got {other:?}"),
    }
    match &surface.calls[2] {
        Draw::Circle { radius, glow, .. } => {
            assert_eq!(*radius, SHOOTING_HEAD_RADIUS);
            assert_eq!(glow.map(|g| g.blur), Some(SHOOTING_HEAD_BLUR));
        }
        other => panic!("expected head, got {other:?}"),
    }
}
