// Host-side tests for the particle field simulation.

use aura_core::constants::*;
use aura_core::field::{FieldConfig, ParticleField};
use glam::Vec2;

fn make_field(width: f32, height: f32, reduced: bool, seed: u64) -> ParticleField {
    let config = FieldConfig {
        width,
        height,
        reduced,
    };
    ParticleField::seed(&config, seed).unwrap()
}

#[test]
fn seeding_respects_population_and_value_ranges() {
    let field = make_field(800.0, 600.0, false, 42);
    assert_eq!(field.particles.len(), PARTICLE_COUNT_FULL);
    assert!(field.interactive());
    for p in &field.particles {
        assert_eq!(p.pos, p.home, "particles spawn at their home position");
        assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
        assert!(p.vel.x.abs() <= SPAWN_SPEED && p.vel.y.abs() <= SPAWN_SPEED);
        assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MAX);
        assert!(p.alpha >= PARTICLE_ALPHA_MIN && p.alpha < PARTICLE_ALPHA_MAX);
    }

    let reduced = make_field(800.0, 600.0, true, 42);
    assert_eq!(reduced.particles.len(), PARTICLE_COUNT_REDUCED);
    assert!(!reduced.interactive(), "reduced field starts non-interactive");
    assert!(PARTICLE_COUNT_REDUCED < PARTICLE_COUNT_FULL);
}

#[test]
fn empty_surface_is_rejected() {
    let config = FieldConfig {
        width: 0.0,
        height: 600.0,
        reduced: false,
    };
    assert!(ParticleField::seed(&config, 1).is_err());
    let config = FieldConfig {
        width: 800.0,
        height: -2.0,
        reduced: false,
    };
    assert!(ParticleField::seed(&config, 1).is_err());
}

#[test]
fn different_seeds_give_different_layouts() {
    let a = make_field(800.0, 600.0, false, 1);
    let b = make_field(800.0, 600.0, false, 2);
    let moved = a
        .particles
        .iter()
        .zip(&b.particles)
        .any(|(pa, pb)| pa.pos != pb.pos);
    assert!(moved, "reseeding should produce a new layout");
}

#[test]
fn particles_stay_inside_the_surface_for_many_ticks() {
    let mut field = make_field(640.0, 480.0, false, 7);
    for tick in 0..300 {
        // Sweep the pointer across and past the surface while stepping.
        let t = tick as f32;
        let pointer = Vec2::new(t * 3.0 - 100.0, 240.0 + (t * 0.1).sin() * 300.0);
        field.step(Some(pointer));
        for (i, p) in field.particles.iter().enumerate() {
            assert!(
                p.pos.x >= 0.0 && p.pos.x < 640.0 && p.pos.y >= 0.0 && p.pos.y < 480.0,
                "particle {i} escaped to {:?} at tick {tick}",
                p.pos
            );
        }
    }
}

#[test]
fn repulsion_pushes_directly_away_from_the_pointer() {
    let mut field = make_field(800.0, 600.0, false, 3);
    let home = Vec2::new(200.0, 200.0);
    field.particles[0].pos = home;
    field.particles[0].home = home;
    field.particles[0].vel = Vec2::ZERO;

    // Pointer to the right inside the influence radius.
    field.step(Some(Vec2::new(250.0, 200.0)));
    let vel = field.particles[0].vel;
    assert!(vel.x < 0.0, "particle should be pushed left, got {vel:?}");
    assert!(vel.y.abs() < 1e-5, "push should have no lateral component");
}

#[test]
fn repulsion_strength_grows_closer_to_the_pointer() {
    let mut near = make_field(800.0, 600.0, false, 3);
    let mut far = make_field(800.0, 600.0, false, 3);
    for f in [&mut near, &mut far] {
        f.particles[0].pos = Vec2::new(200.0, 200.0);
        f.particles[0].home = Vec2::new(200.0, 200.0);
        f.particles[0].vel = Vec2::ZERO;
    }
    near.step(Some(Vec2::new(220.0, 200.0)));
    far.step(Some(Vec2::new(340.0, 200.0)));
    assert!(
        near.particles[0].vel.length() > far.particles[0].vel.length(),
        "a close pointer should push harder than a distant one"
    );
}

#[test]
fn no_repulsion_at_or_beyond_the_influence_radius() {
    let mut field = make_field(800.0, 600.0, false, 3);
    let home = Vec2::new(200.0, 200.0);
    field.particles[0].pos = home;
    field.particles[0].home = home;
    field.particles[0].vel = Vec2::ZERO;

    // Exactly at the radius: no impulse, no spring (at home), so no motion.
    field.step(Some(home + Vec2::new(INFLUENCE_RADIUS, 0.0)));
    assert_eq!(field.particles[0].vel, Vec2::ZERO);
    assert_eq!(field.particles[0].pos, home);
}

#[test]
fn non_interactive_field_ignores_the_pointer() {
    let mut field = make_field(800.0, 600.0, false, 3);
    field.set_interactive(false);
    let home = Vec2::new(200.0, 200.0);
    field.particles[0].pos = home;
    field.particles[0].home = home;
    field.particles[0].vel = Vec2::ZERO;

    field.step(Some(Vec2::new(210.0, 200.0)));
    assert_eq!(field.particles[0].vel, Vec2::ZERO);
}

#[test]
fn damping_keeps_runaway_velocity_bounded() {
    let mut field = make_field(800.0, 600.0, false, 11);
    field.particles[0].vel = Vec2::new(900.0, -700.0);
    let initial_speed = field.particles[0].vel.length();
    let mut max_speed = 0.0f32;
    for _ in 0..400 {
        field.step(None);
        max_speed = max_speed.max(field.particles[0].vel.length());
    }
    assert!(
        max_speed <= initial_speed * 1.001,
        "speed grew beyond its initial value: {max_speed}"
    );
    assert!(
        field.particles[0].vel.length() < 450.0,
        "speed failed to settle under the spring/damping equilibrium"
    );
}

#[test]
fn positions_wrap_around_both_edges() {
    let mut field = make_field(800.0, 600.0, false, 5);
    let corner = Vec2::new(799.0, 599.0);
    field.particles[0].pos = corner;
    field.particles[0].home = corner;
    field.particles[0].vel = Vec2::new(5.0, 5.0);

    field.step(None);
    let pos = field.particles[0].pos;
    // One damped step moves 4.75 units, landing 3.75 past each edge.
    assert!((pos.x - 3.75).abs() < 1e-3, "x did not wrap: {pos:?}");
    assert!((pos.y - 3.75).abs() < 1e-3, "y did not wrap: {pos:?}");
}

#[test]
fn links_connect_only_pairs_under_the_threshold() {
    let mut field = make_field(800.0, 600.0, false, 9);
    field.particles.truncate(3);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(60.0, 0.0);
    field.particles[2].pos = Vec2::new(300.0, 0.0);

    let mut links = Vec::new();
    field.visit_links(|a, b, alpha| links.push((a, b, alpha)));
    assert_eq!(links.len(), 1, "only the 60-unit pair should link");
    let (a, b, alpha) = links[0];
    assert_eq!(a, Vec2::new(0.0, 0.0));
    assert_eq!(b, Vec2::new(60.0, 0.0));
    assert!((alpha - 0.4).abs() < 1e-4, "alpha should fall off linearly");
}

#[test]
fn link_at_exact_threshold_distance_is_dropped() {
    let mut field = make_field(800.0, 600.0, false, 9);
    field.particles.truncate(2);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(LINK_DISTANCE, 0.0);

    let mut count = 0;
    field.visit_links(|_, _, _| count += 1);
    assert_eq!(count, 0);
}
