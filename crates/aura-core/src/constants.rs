// Shared tuning constants for the background simulations. The web frontend
// reads these for rendering; the tests pin the interaction feel to them.

// Smoothing
pub const SMOOTHING_RATE: f32 = 0.12; // per-tick fraction of remaining distance

// Particle field
pub const PARTICLE_COUNT_FULL: usize = 72; // desktop population
pub const PARTICLE_COUNT_REDUCED: usize = 28; // mobile / reduced-motion population
pub const INFLUENCE_RADIUS: f32 = 150.0; // pointer repulsion reach, surface units
pub const REPULSE_STRENGTH: f32 = 0.85; // impulse scale at zero distance
pub const HOME_PULL: f32 = 0.02; // spring coefficient toward spawn position
pub const DAMPING: f32 = 0.95; // per-tick velocity retention
pub const LINK_DISTANCE: f32 = 100.0; // max distance for a pair link line
pub const SPAWN_SPEED: f32 = 0.3; // max initial drift per axis
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 2.8;
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_MAX: f32 = 0.7;

// Ray field
pub const TOTAL_RAY_COUNT: usize = 24;
pub const LABELED_RAY_COUNT: usize = 6;
pub const MAX_ROTATION: f32 = 0.35; // radians at full pointer deflection
pub const MAX_SHIFT: f32 = 16.0; // surface units at full pointer deflection
pub const LABELED_LENGTH_MIN: f32 = 96.0;
pub const LABELED_LENGTH_MAX: f32 = 148.0;
pub const PLAIN_LENGTH_MIN: f32 = 56.0;
pub const PLAIN_LENGTH_MAX: f32 = 92.0;

// Magnetic affordance defaults
pub const MAGNET_STRENGTH: f32 = 0.3; // fraction of the pointer offset applied
pub const MAGNET_RADIUS: f32 = 120.0; // activation distance, viewport units
