//! Axis-aligned rectangles in normalized play-field space
//!
//! A rectangle is a center plus half extents. The visible field spans
//! [-1, 1] on both axes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box (center + half extents)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    /// Half width / half height, never negative
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size.max(Vec2::ZERO) * 0.5,
        }
    }

    /// Build from min/max corners (corners may come in either order)
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            center: (min + max) * 0.5,
            half: (max - min) * 0.5,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half.y * 2.0
    }

    /// Horizontal extent as `(left, right)`
    #[inline]
    pub fn x_span(&self) -> (f32, f32) {
        (self.center.x - self.half.x, self.center.x + self.half.x)
    }

    /// Zero width or zero height
    pub fn is_degenerate(&self) -> bool {
        self.half.x <= 0.0 || self.half.y <= 0.0
    }

    /// Range a center may occupy so the rectangle stays inside `[min, max]`
    /// along x. Collapses to the midpoint when the rectangle is wider than
    /// the range.
    pub fn center_range_x(&self, min: f32, max: f32) -> (f32, f32) {
        let lo = min + self.half.x;
        let hi = max - self.half.x;
        if lo > hi {
            let mid = (min + max) * 0.5;
            (mid, mid)
        } else {
            (lo, hi)
        }
    }
}
