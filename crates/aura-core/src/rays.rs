//! Pointer-reactive ray field: a starburst of strokes around a center point.
//!
//! The first few rays carry section labels and steer with the pointer; the
//! rest are decorative and never move. Per-ray sensitivities differ so the
//! burst shears rather than rotating as one rigid body.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

use crate::constants::{
    LABELED_LENGTH_MAX, LABELED_LENGTH_MIN, LABELED_RAY_COUNT, MAX_ROTATION, MAX_SHIFT,
    PLAIN_LENGTH_MAX, PLAIN_LENGTH_MIN, SMOOTHING_RATE, TOTAL_RAY_COUNT,
};
use crate::ease::{Smoothed, SmoothedVec2};
use crate::error::ConfigError;
use crate::glyphs::LABELS;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Rest angle in radians, fixed at seed time.
    pub angle0: f32,
    /// Stroke length in surface units.
    pub length: f32,
    pub label: Option<&'static str>,
}

impl Ray {
    #[inline]
    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }
}

/// Smoothed steering state for one labeled ray.
#[derive(Clone, Copy, Debug, Default)]
pub struct Steering {
    /// Angular offset from the rest angle, radians.
    pub rotation: Smoothed,
    /// Translation of the whole ray, surface units.
    pub shift: SmoothedVec2,
}

// How strongly each labeled ray maps the normalized pointer onto its rotation
// and shift targets. Signs are mixed so neighbors countersteer.
struct Sensitivity {
    rot: Vec2,
    shift: Vec2,
}

static SENSITIVITY: [Sensitivity; LABELED_RAY_COUNT] = [
    Sensitivity {
        rot: Vec2::new(1.2, 0.0),
        shift: Vec2::new(0.9, 0.6),
    },
    Sensitivity {
        rot: Vec2::new(-0.8, 0.4),
        shift: Vec2::new(-0.7, 0.8),
    },
    Sensitivity {
        rot: Vec2::new(0.5, -1.0),
        shift: Vec2::new(0.6, -0.9),
    },
    Sensitivity {
        rot: Vec2::new(-0.4, -0.7),
        shift: Vec2::new(-1.0, -0.5),
    },
    Sensitivity {
        rot: Vec2::new(0.9, 0.8),
        shift: Vec2::new(0.4, 1.0),
    },
    Sensitivity {
        rot: Vec2::new(-1.1, 0.3),
        shift: Vec2::new(-0.5, -0.8),
    },
];

#[derive(Clone, Copy, Debug)]
pub struct RayConfig {
    pub total: usize,
    pub labeled: usize,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            total: TOTAL_RAY_COUNT,
            labeled: LABELED_RAY_COUNT,
        }
    }
}

#[derive(Debug)]
pub struct RayField {
    pub rays: Vec<Ray>,
    steering: SmallVec<[Steering; 8]>,
    interactive: bool,
}

impl RayField {
    /// Build the burst. Labeled rays sit at evenly spaced angles starting at
    /// zero; plain rays are evenly spaced too, phase-shifted half a step so
    /// they interleave instead of hiding behind the labeled ones. Lengths are
    /// randomized per ray from the seed.
    pub fn new(config: &RayConfig, seed: u64) -> Result<Self, ConfigError> {
        if config.total == 0 {
            return Err(ConfigError::NoRays);
        }
        if config.labeled > config.total {
            return Err(ConfigError::LabeledExceedsTotal {
                labeled: config.labeled,
                total: config.total,
            });
        }
        if config.labeled > LABELS.len() {
            return Err(ConfigError::LabeledExceedsVocabulary {
                labeled: config.labeled,
                vocabulary: LABELS.len(),
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rays = Vec::with_capacity(config.total);
        for i in 0..config.labeled {
            rays.push(Ray {
                angle0: TAU * i as f32 / config.labeled as f32,
                length: rng.gen_range(LABELED_LENGTH_MIN..LABELED_LENGTH_MAX),
                label: Some(LABELS[i]),
            });
        }
        let plain = config.total - config.labeled;
        for i in 0..plain {
            rays.push(Ray {
                angle0: TAU * i as f32 / plain as f32 + TAU / (2.0 * plain as f32),
                length: rng.gen_range(PLAIN_LENGTH_MIN..PLAIN_LENGTH_MAX),
                label: None,
            });
        }
        let steering = SmallVec::from_elem(Steering::default(), config.labeled);
        log::debug!("[rays] {} rays ({} labeled)", rays.len(), config.labeled);
        Ok(Self {
            rays,
            steering,
            interactive: true,
        })
    }

    #[inline]
    pub fn labeled_count(&self) -> usize {
        self.steering.len()
    }

    #[inline]
    pub fn steering(&self) -> &[Steering] {
        &self.steering
    }

    #[inline]
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// Gate pointer response. Turning it off zeroes the targets so whatever
    /// deflection is on screen relaxes back to rest over the next frames.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.clear_pointer();
        }
    }

    /// Map a normalized [-0.5, 0.5] pointer position onto per-ray targets.
    /// Writes targets only; displayed values catch up in [`RayField::step`].
    pub fn set_pointer(&mut self, normalized: Vec2) {
        if !self.interactive {
            return;
        }
        for (i, s) in self.steering.iter_mut().enumerate() {
            let sens = &SENSITIVITY[i % SENSITIVITY.len()];
            s.rotation.target =
                (normalized.x * sens.rot.x + normalized.y * sens.rot.y) * MAX_ROTATION;
            s.shift.target =
                Vec2::new(normalized.x * sens.shift.x, normalized.y * sens.shift.y) * MAX_SHIFT;
        }
    }

    /// Send every target back to rest (pointer left the surface).
    pub fn clear_pointer(&mut self) {
        for s in self.steering.iter_mut() {
            s.rotation.target = 0.0;
            s.shift.target = Vec2::ZERO;
        }
    }

    /// Advance all steering one tick toward its targets.
    pub fn step(&mut self) {
        for s in self.steering.iter_mut() {
            s.rotation.step(SMOOTHING_RATE);
            s.shift.step(SMOOTHING_RATE);
        }
    }

    /// Where the tip of ray `index` lands for a burst centered at `center`,
    /// including the ray's current steering. Out-of-range indices collapse to
    /// the center.
    pub fn endpoint(&self, index: usize, center: Vec2) -> Vec2 {
        let Some(ray) = self.rays.get(index) else {
            return center;
        };
        let (rotation, shift) = match self.steering.get(index) {
            Some(s) => (s.rotation.current, s.shift.current),
            None => (0.0, Vec2::ZERO),
        };
        let angle = ray.angle0 + rotation;
        center + Vec2::new(angle.cos(), angle.sin()) * ray.length + shift
    }
}
