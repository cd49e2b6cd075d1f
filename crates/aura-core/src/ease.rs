//! Exponential approach smoothing shared by every animated quantity.
//!
//! Each tick moves the current value a fixed fraction of the remaining
//! distance toward its target. Rates are per-tick, not per-second: the feel
//! tracks the display refresh rate on purpose, so there is no dt anywhere.

use glam::Vec2;

/// Move `current` one tick toward `target` at the given rate.
///
/// With a rate in (0, 1) the result always lands strictly between the two
/// inputs (or on them), so the value can never overshoot or oscillate.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// A scalar with decoupled target and displayed value.
///
/// Input handlers write `target`; the frame tick calls [`Smoothed::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Smoothed {
    pub current: f32,
    pub target: f32,
}

impl Smoothed {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn step(&mut self, rate: f32) {
        self.current = approach(self.current, self.target, rate);
    }

    /// Whether the displayed value has effectively reached its target.
    #[inline]
    pub fn settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).abs() <= epsilon
    }
}

/// Two independently smoothed axes; the x and y rates are identical.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedVec2 {
    pub current: Vec2,
    pub target: Vec2,
}

impl SmoothedVec2 {
    pub fn new(value: Vec2) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn step(&mut self, rate: f32) {
        self.current += (self.target - self.current) * rate;
    }

    #[inline]
    pub fn settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).length_squared() <= epsilon * epsilon
    }
}
