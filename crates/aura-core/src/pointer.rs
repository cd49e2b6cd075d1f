//! Pointer tracking in container-relative coordinates.

use glam::Vec2;

/// Map a client-space position into the [-0.5, 0.5] range on both axes,
/// relative to a container rect given by its origin and size.
///
/// Degenerate rects (zero or negative size) map everything to the neutral
/// center so downstream math stays finite.
#[inline]
pub fn normalize_in_rect(client: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let uv = (client - origin) / size - 0.5;
    uv.clamp(Vec2::splat(-0.5), Vec2::splat(0.5))
}

/// Last-known pointer position over a surface, if any.
///
/// `None` means the pointer is absent (never entered, or has left) and must
/// exert no influence at all. Event handlers write this; the frame tick reads
/// it. Nothing here is smoothed: smoothing belongs to the values driven by it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    normalized: Option<Vec2>,
}

impl PointerState {
    /// Record a pointer position given in client coordinates.
    pub fn set_from_client(&mut self, client: Vec2, origin: Vec2, size: Vec2) {
        self.normalized = Some(normalize_in_rect(client, origin, size));
    }

    /// Forget the pointer entirely. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.normalized = None;
    }

    /// Position in the normalized [-0.5, 0.5] range, if present.
    #[inline]
    pub fn normalized(&self) -> Option<Vec2> {
        self.normalized
    }

    /// Position in surface units for a surface of the given logical size.
    #[inline]
    pub fn surface_position(&self, width: f32, height: f32) -> Option<Vec2> {
        self.normalized
            .map(|n| (n + 0.5) * Vec2::new(width, height))
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.normalized.is_some()
    }
}
