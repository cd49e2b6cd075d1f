//! Magnetic hover displacement for interactive page elements.
//!
//! Unlike the canvas simulations this responds directly on each pointer move
//! with no smoothing and no frame loop: snappy attraction is the point.

use glam::Vec2;

use crate::constants::{MAGNET_RADIUS, MAGNET_STRENGTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetParams {
    pub strength: f32,
    pub radius: f32,
}

impl Default for MagnetParams {
    fn default() -> Self {
        Self {
            strength: MAGNET_STRENGTH,
            radius: MAGNET_RADIUS,
        }
    }
}

/// Translation to apply to an element whose center sees the pointer at
/// `pointer`. Zero at and beyond the activation radius; inside it, a fraction
/// of the center-to-pointer offset that fades linearly with distance.
#[inline]
pub fn displacement(center: Vec2, pointer: Vec2, params: MagnetParams) -> Vec2 {
    let offset = pointer - center;
    let distance = offset.length();
    if distance >= params.radius {
        return Vec2::ZERO;
    }
    offset * params.strength * (1.0 - distance / params.radius)
}
