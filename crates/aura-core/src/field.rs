//! Drifting particle field with pointer repulsion and pair links.
//!
//! Integration is per-tick and deliberately not dt-corrected; the damping and
//! spring coefficients are tuned against the display refresh rate. Positions
//! live in logical surface units with the origin at the top-left corner.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    DAMPING, HOME_PULL, INFLUENCE_RADIUS, LINK_DISTANCE, PARTICLE_ALPHA_MAX, PARTICLE_ALPHA_MIN,
    PARTICLE_COUNT_FULL, PARTICLE_COUNT_REDUCED, PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN,
    REPULSE_STRENGTH, SPAWN_SPEED,
};
use crate::error::ConfigError;

// rem_euclid can round up to the limit itself for tiny negative inputs, which
// would put a particle exactly on the excluded edge.
#[inline]
fn wrap(value: f32, limit: f32) -> f32 {
    let wrapped = value.rem_euclid(limit);
    if wrapped >= limit {
        0.0
    } else {
        wrapped
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Spawn position the spring pulls back toward.
    pub home: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    /// Smaller population and no pointer response.
    pub reduced: bool,
}

#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
    interactive: bool,
}

impl ParticleField {
    /// Populate a field for the given surface. Call again with a fresh seed
    /// whenever the surface size changes; particles do not survive a resize.
    pub fn seed(config: &FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        if config.width <= 0.0 || config.height <= 0.0 {
            return Err(ConfigError::EmptySurface {
                width: config.width,
                height: config.height,
            });
        }
        let count = if config.reduced {
            PARTICLE_COUNT_REDUCED
        } else {
            PARTICLE_COUNT_FULL
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.gen::<f32>() * config.width,
                    rng.gen::<f32>() * config.height,
                );
                Particle {
                    pos,
                    home: pos,
                    vel: Vec2::new(
                        rng.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
                        rng.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
                    ),
                    radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
                    alpha: rng.gen_range(PARTICLE_ALPHA_MIN..PARTICLE_ALPHA_MAX),
                }
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] seeded {} particles over {}x{}",
            particles.len(),
            config.width,
            config.height
        );
        Ok(Self {
            particles,
            width: config.width,
            height: config.height,
            interactive: !config.reduced,
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// Toggle pointer response at runtime. The population is fixed at seed
    /// time; flipping this only gates the repulsion term.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Advance every particle one tick. `pointer` is in surface units and is
    /// ignored while the field is not interactive.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let pointer = if self.interactive { pointer } else { None };
        for p in &mut self.particles {
            if let Some(ptr) = pointer {
                let to_pointer = ptr - p.pos;
                let distance = to_pointer.length();
                if distance < INFLUENCE_RADIUS && distance > f32::EPSILON {
                    let falloff = 1.0 - distance / INFLUENCE_RADIUS;
                    // Push directly away from the pointer, hardest up close.
                    p.vel -= to_pointer / distance * (falloff * REPULSE_STRENGTH);
                }
            }
            p.vel += (p.home - p.pos) * HOME_PULL;
            p.vel *= DAMPING;
            p.pos += p.vel;
            // Wrap on both axes so the field has no visible edges.
            p.pos.x = wrap(p.pos.x, self.width);
            p.pos.y = wrap(p.pos.y, self.height);
        }
    }

    /// Visit every particle pair closer than the link threshold with the pair
    /// endpoints and the link opacity (1 at zero distance, 0 at the limit).
    pub fn visit_links<F: FnMut(Vec2, Vec2, f32)>(&self, mut visit: F) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                let distance = a.distance(b);
                if distance < LINK_DISTANCE {
                    visit(a, b, 1.0 - distance / LINK_DISTANCE);
                }
            }
        }
    }
}
