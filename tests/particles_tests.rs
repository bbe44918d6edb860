// Host-side tests for the particle-network engine.
// The crate root is wasm-only, so the pure core is compiled in directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod support;

use crate::core::constants::*;
use crate::core::particles::*;
use glam::Vec2;
use rand::prelude::*;
use support::{Draw, RecordingSurface};

fn network(w: f32, h: f32, seed: u64) -> ParticleNetwork {
    ParticleNetwork::new(Vec2::new(w, h), StdRng::seed_from_u64(seed))
}

fn assert_close(a: Vec2, b: Vec2) {
    assert!((a - b).length() < 1e-5, "expected {b:?}, got {a:?}");
}

#[test]
fn particle_count_follows_area() {
    assert_eq!(particle_count(Vec2::new(1000.0, 800.0)), 53);
    assert_eq!(particle_count(Vec2::new(1920.0, 1080.0)), 138);
    assert_eq!(particle_count(Vec2::new(100.0, 100.0)), 0);
    assert_eq!(particle_count(Vec2::ZERO), 0);
    for (w, h) in [(375.0, 812.0), (1280.0, 720.0), (2560.0, 1440.0)] {
        let expected = ((w * h) / 15_000.0_f32).floor() as usize;
        assert_eq!(particle_count(Vec2::new(w, h)), expected);
    }
}

#[test]
fn new_network_populates_within_ranges() {
    let net = network(1000.0, 800.0, 1);
    assert_eq!(net.particles().len(), 53);
    for p in net.particles() {
        assert!((0.0..=1000.0).contains(&p.position.x));
        assert!((0.0..=800.0).contains(&p.position.y));
        assert!(p.velocity.x.abs() <= PARTICLE_DRIFT_MAX);
        assert!(p.velocity.y.abs() <= PARTICLE_DRIFT_MAX);
        assert!((PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX).contains(&p.radius));
        assert!(p.color == NODE_CYAN || p.color == NODE_WHITE);
    }
}

#[test]
fn both_node_colours_appear() {
    let net = network(1920.0, 1080.0, 3);
    let cyan = net.particles().iter().filter(|p| p.color == NODE_CYAN).count();
    assert!(cyan > 0 && cyan < net.particles().len());
}

#[test]
fn repulsion_at_half_radius_is_quarter_pixel() {
    let impulse = repulsion_impulse(Vec2::new(150.0, 100.0), Vec2::new(100.0, 100.0));
    assert_close(impulse, Vec2::new(0.25, 0.0));

    // diagonal: 3-4-5 triangle scaled to distance 50
    let impulse = repulsion_impulse(Vec2::new(130.0, 140.0), Vec2::new(100.0, 100.0));
    assert!((impulse.length() - 0.25).abs() < 1e-5);
    assert_close(impulse.normalize(), Vec2::new(0.6, 0.8));
}

#[test]
fn repulsion_vanishes_outside_radius_and_on_top_of_pointer() {
    let ptr = Vec2::new(100.0, 100.0);
    assert_eq!(repulsion_impulse(Vec2::new(200.0, 100.0), ptr), Vec2::ZERO);
    assert_eq!(repulsion_impulse(Vec2::new(300.0, 300.0), ptr), Vec2::ZERO);
    assert_eq!(repulsion_impulse(ptr, ptr), Vec2::ZERO);
}

#[test]
fn repulsion_grows_toward_pointer() {
    let ptr = Vec2::ZERO;
    let mut prev = 0.0;
    for d in (1..100).rev() {
        let m = repulsion_impulse(Vec2::new(d as f32, 0.0), ptr).length();
        assert!(m >= prev, "impulse shrank at distance {d}");
        prev = m;
    }
    assert!(prev <= REPEL_STRENGTH);
}

#[test]
fn particles_stay_inside_bounds() {
    let (w, h) = (640.0, 480.0);
    let mut net = network(w, h, 7);
    for tick in 0..10_000 {
        // sweep the pointer around so repulsion keeps pushing particles at edges
        let a = tick as f32 * 0.01;
        net.pointer_moved(Vec2::new(w * 0.5 + a.cos() * 250.0, h * 0.5 + a.sin() * 200.0));
        net.step();
        for p in net.particles() {
            assert!(
                (0.0..=w).contains(&p.position.x) && (0.0..=h).contains(&p.position.y),
                "particle escaped at tick {tick}: {:?}",
                p.position
            );
        }
    }
}

#[test]
fn idle_velocity_stays_within_damping_envelope() {
    let mut net = network(1000.0, 800.0, 11);
    // |v| <= 0.98|v| + 0.025 settles at 1.25 per axis
    let limit = PARTICLE_JITTER / (1.0 - PARTICLE_FRICTION) + 1e-3;
    for _ in 0..10_000 {
        net.step();
        for p in net.particles() {
            assert!(p.velocity.is_finite());
            assert!(p.velocity.x.abs() <= limit && p.velocity.y.abs() <= limit);
        }
    }
}

#[test]
fn forced_velocity_stays_bounded() {
    let mut net = network(800.0, 600.0, 5);
    let limit = (REPEL_STRENGTH + PARTICLE_JITTER) / (1.0 - PARTICLE_FRICTION) + 1e-2;
    net.pointer_moved(Vec2::new(400.0, 300.0));
    for _ in 0..10_000 {
        net.step();
        for p in net.particles() {
            assert!(p.velocity.is_finite());
            assert!(p.velocity.x.abs() <= limit && p.velocity.y.abs() <= limit);
        }
    }
}

#[test]
fn resize_keeps_population_and_clamps() {
    let mut net = network(1000.0, 800.0, 2);
    let before = net.particles().len();
    let mut surface = RecordingSurface::new();

    net.request_resize(Vec2::new(200.0, 150.0));
    net.frame(&mut surface);

    assert_eq!(net.size(), Vec2::new(200.0, 150.0));
    assert_eq!(net.particles().len(), before);
    for p in net.particles() {
        assert!(p.position.x <= 200.0 && p.position.y <= 150.0);
    }
    assert_eq!(surface.resizes.last(), Some(&Vec2::new(200.0, 150.0)));
}

#[test]
fn frame_sizes_surface_once() {
    let mut net = network(300.0, 300.0, 4);
    let mut surface = RecordingSurface::new();
    net.frame(&mut surface);
    net.frame(&mut surface);
    assert_eq!(surface.resizes, vec![Vec2::new(300.0, 300.0)]);
}

#[test]
fn draw_clears_fills_then_draws_every_node() {
    let net = network(1000.0, 800.0, 9);
    let mut surface = RecordingSurface::new();
    net.draw(&mut surface);

    assert_eq!(surface.calls[0], Draw::Clear);
    assert_eq!(surface.calls[1], Draw::Background(BACKGROUND));
    assert_eq!(surface.circles().len(), net.particles().len());
}

#[test]
fn links_match_pairs_within_reach() {
    let net = network(600.0, 600.0, 21);
    let mut surface = RecordingSurface::new();
    net.draw(&mut surface);

    let ps = net.particles();
    let mut expected = 0;
    for i in 0..ps.len() {
        for j in i + 1..ps.len() {
            if ps[i].position.distance(ps[j].position) < LINK_DISTANCE {
                expected += 1;
            }
        }
    }
    let links = surface.lines_of_width(LINK_WIDTH);
    assert_eq!(links.len(), expected);
    for l in links {
        if let Draw::Line { color, .. } = l {
            assert!(color.a > 0.0 && color.a <= LINK_OPACITY);
        }
    }
}

#[test]
fn cursor_lines_follow_pointer_activity() {
    let mut net = network(600.0, 600.0, 8);
    let target = net.particles()[0].position;
    let mut surface = RecordingSurface::new();

    net.draw(&mut surface);
    assert!(surface.lines_of_width(CURSOR_LINK_WIDTH).is_empty());

    net.pointer_moved(target);
    net.draw(&mut surface);
    let cursor = surface.lines_of_width(CURSOR_LINK_WIDTH);
    assert!(!cursor.is_empty());
    for l in cursor {
        if let Draw::Line { to, color, .. } = l {
            assert_eq!(*to, target);
            assert_eq!((color.r, color.g, color.b), (181, 55, 242));
        }
    }

    net.pointer_left();
    assert!(!net.pointer().active);
    net.draw(&mut surface);
    assert!(surface.lines_of_width(CURSOR_LINK_WIDTH).is_empty());
}

#[test]
fn link_fade_is_linear_and_cut_at_reach() {
    assert_eq!(link_fade(0.0, 150.0), Some(1.0));
    assert_eq!(link_fade(75.0, 150.0), Some(0.5));
    assert_eq!(link_fade(150.0, 150.0), None);
    assert_eq!(link_fade(200.0, 150.0), None);
}
