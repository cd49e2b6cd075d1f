// Host-side tests for the magnetic hover displacement.

use aura_core::constants::{MAGNET_RADIUS, MAGNET_STRENGTH};
use aura_core::magnet::{displacement, MagnetParams};
use glam::Vec2;

const PARAMS: MagnetParams = MagnetParams {
    strength: 0.3,
    radius: 120.0,
};

#[test]
fn default_params_come_from_the_shared_constants() {
    let params = MagnetParams::default();
    assert_eq!(params.strength, MAGNET_STRENGTH);
    assert_eq!(params.radius, MAGNET_RADIUS);
}

#[test]
fn no_displacement_at_or_beyond_the_activation_radius() {
    let center = Vec2::new(300.0, 200.0);
    let at_edge = displacement(center, center + Vec2::new(PARAMS.radius, 0.0), PARAMS);
    assert_eq!(at_edge, Vec2::ZERO);
    let beyond = displacement(center, center + Vec2::new(500.0, -500.0), PARAMS);
    assert_eq!(beyond, Vec2::ZERO);
}

#[test]
fn displacement_follows_the_linear_falloff_formula() {
    let center = Vec2::ZERO;
    // Halfway out: offset * strength * 0.5.
    let d = displacement(center, Vec2::new(60.0, 0.0), PARAMS);
    assert!((d - Vec2::new(9.0, 0.0)).length() < 1e-4, "got {d:?}");

    // A quarter out, diagonal.
    let pointer = Vec2::new(18.0, 24.0); // distance 30
    let expected = pointer * PARAMS.strength * (1.0 - 30.0 / PARAMS.radius);
    let d = displacement(center, pointer, PARAMS);
    assert!((d - expected).length() < 1e-4);
}

#[test]
fn displacement_points_toward_the_pointer() {
    let center = Vec2::new(50.0, 50.0);
    for pointer in [
        Vec2::new(90.0, 50.0),
        Vec2::new(50.0, 10.0),
        Vec2::new(20.0, 80.0),
    ] {
        let d = displacement(center, pointer, PARAMS);
        assert!(
            d.dot(pointer - center) > 0.0,
            "displacement should attract toward {pointer:?}"
        );
    }
}

#[test]
fn pointer_on_the_center_is_a_fixed_point() {
    let center = Vec2::new(10.0, 10.0);
    let d = displacement(center, center, PARAMS);
    assert_eq!(d, Vec2::ZERO);
}

#[test]
fn response_is_direct_with_no_history() {
    let center = Vec2::ZERO;
    let near = Vec2::new(20.0, 0.0);
    let fresh = displacement(center, near, PARAMS);

    // A wild excursion beforehand must not change the answer.
    let _ = displacement(center, Vec2::new(5000.0, 5000.0), PARAMS);
    let _ = displacement(center, Vec2::new(-3.0, 1.0), PARAMS);
    let again = displacement(center, near, PARAMS);
    assert_eq!(fresh, again);
}
