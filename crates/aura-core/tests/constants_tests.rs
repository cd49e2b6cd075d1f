// Host-side tests for tuning constants and their relationships, plus the
// closed glyph/label vocabulary.

use aura_core::constants::*;
use aura_core::glyphs::{glyph_for, LABELS, GLYPH_COLS, GLYPH_ROWS};
use aura_core::palette::Palette;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_and_coefficients_are_within_bounds() {
    // The smoothing rate must keep motion stable and convergent.
    assert!(SMOOTHING_RATE > 0.0 && SMOOTHING_RATE < 1.0);

    // Damping below 1 guarantees bounded velocities.
    assert!(DAMPING > 0.0 && DAMPING < 1.0);

    // Home pull is a gentle spring, far below critical.
    assert!(HOME_PULL > 0.0 && HOME_PULL < 0.1);

    assert!(REPULSE_STRENGTH > 0.0);
    assert!(SPAWN_SPEED > 0.0);
    assert!(MAGNET_STRENGTH > 0.0 && MAGNET_STRENGTH < 1.0);
    assert!(MAGNET_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn distances_and_bands_are_ordered() {
    // Repulsion reaches farther than links are drawn.
    assert!(INFLUENCE_RADIUS > LINK_DISTANCE);
    assert!(LINK_DISTANCE > 0.0);

    assert!(PARTICLE_RADIUS_MIN < PARTICLE_RADIUS_MAX);
    assert!(PARTICLE_ALPHA_MIN < PARTICLE_ALPHA_MAX);
    assert!(PARTICLE_ALPHA_MAX <= 1.0);

    // Labeled rays are the long ones.
    assert!(LABELED_LENGTH_MIN < LABELED_LENGTH_MAX);
    assert!(PLAIN_LENGTH_MIN < PLAIN_LENGTH_MAX);
    assert!(PLAIN_LENGTH_MAX < LABELED_LENGTH_MIN);
    assert!(MAX_ROTATION > 0.0 && MAX_ROTATION < std::f32::consts::PI);
    assert!(MAX_SHIFT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn populations_are_consistent() {
    assert!(PARTICLE_COUNT_REDUCED > 0);
    assert!(PARTICLE_COUNT_REDUCED < PARTICLE_COUNT_FULL);
    assert!(LABELED_RAY_COUNT > 0);
    assert!(LABELED_RAY_COUNT <= TOTAL_RAY_COUNT);
    assert_eq!(LABELED_RAY_COUNT, LABELS.len());
}

#[test]
fn every_label_has_a_nonempty_glyph() {
    for label in LABELS {
        let glyph = glyph_for(label).unwrap_or_else(|| panic!("no glyph for {label}"));
        let filled = (0..GLYPH_ROWS)
            .flat_map(|r| (0..GLYPH_COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| glyph.filled(r, c))
            .count();
        assert!(filled > 0, "glyph for {label} is blank");
    }
}

#[test]
fn unknown_labels_resolve_to_none_without_panicking() {
    assert!(glyph_for("blog").is_none());
    assert!(glyph_for("").is_none());
}

#[test]
fn glyph_cells_out_of_range_are_empty() {
    let glyph = glyph_for("art").unwrap();
    assert!(!glyph.filled(GLYPH_ROWS, 0));
    assert!(!glyph.filled(0, GLYPH_COLS));
}

#[test]
fn palettes_differ_between_themes() {
    let light = Palette::light();
    let dark = Palette::dark();
    assert_ne!(light, dark);
    assert_eq!(Palette::for_dark(false), light);
    assert_eq!(Palette::for_dark(true), dark);
    assert_eq!(Palette::default(), light);
}
