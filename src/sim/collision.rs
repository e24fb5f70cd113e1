//! Collision detection and bounds response for axis-aligned rectangles
//!
//! Two kinds of wall response live here:
//! - sign assignment (`reflect_if_out_of_bounds`): the velocity component is
//!   forced to point back inward, position is left alone. Safe to apply
//!   every frame while an entity is still outside.
//! - mirror reflection (`mirror_into_range`): the overshoot is folded back
//!   into the range so position never drifts past a bound.

use super::rect::Rect;

/// Strict AABB overlap. Rectangles whose edges exactly touch do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.center.x - a.half.x < b.center.x + b.half.x
        && a.center.x + a.half.x > b.center.x - b.half.x
        && a.center.y - a.half.y < b.center.y + b.half.y
        && a.center.y + a.half.y > b.center.y - b.half.y
}

/// Velocity component after a bounds check along one axis.
///
/// At or past `min` the result points toward +; at or past `max` it points
/// toward -. Magnitude is preserved, so reapplying never amplifies.
#[inline]
pub fn reflect_if_out_of_bounds(pos: f32, vel: f32, min: f32, max: f32) -> f32 {
    if pos <= min {
        vel.abs()
    } else if pos >= max {
        -vel.abs()
    } else {
        vel
    }
}

/// Fold a position that crossed a bound back into `[min, max]`.
///
/// Returns the new position and the direction sign (+1 or -1) the element
/// should now travel in. `x' = 2 * bound - x` on each crossing; the result is
/// clamped in case the overshoot exceeds the whole range.
pub fn mirror_into_range(pos: f32, direction: f32, min: f32, max: f32) -> (f32, f32) {
    if pos > max {
        ((2.0 * max - pos).clamp(min, max), -1.0)
    } else if pos < min {
        ((2.0 * min - pos).clamp(min, max), 1.0)
    } else {
        (pos, direction.signum())
    }
}

/// Intersection of two 1D spans `(lo, hi)`, if it has positive length
pub fn span_overlap(a: (f32, f32), b: (f32, f32)) -> Option<(f32, f32)> {
    let lo = a.0.max(b.0);
    let hi = a.1.min(b.1);
    if lo < hi { Some((lo, hi)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        assert!(overlaps(&rect(0.0, 0.0, 1.0, 1.0), &rect(0.5, 0.5, 1.0, 1.0)));
        assert!(!overlaps(&rect(0.0, 0.0, 1.0, 1.0), &rect(2.0, 0.0, 1.0, 1.0)));
        // overlapping on x only
        assert!(!overlaps(&rect(0.0, 0.0, 1.0, 1.0), &rect(0.2, 3.0, 1.0, 1.0)));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        assert!(!overlaps(&rect(0.0, 0.0, 1.0, 1.0), &rect(1.0, 0.0, 1.0, 1.0)));
        assert!(!overlaps(&rect(0.0, 0.0, 1.0, 1.0), &rect(0.0, -1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_zero_height_probe_inside_band() {
        let band = rect(0.0, 0.0, 1.0, 0.2);
        assert!(overlaps(&rect(0.0, 0.05, 0.1, 0.0), &band));
        assert!(!overlaps(&rect(0.0, 0.1, 0.1, 0.0), &band));
    }

    #[test]
    fn test_reflect_sign() {
        assert_eq!(reflect_if_out_of_bounds(-1.2, -0.5, -1.0, 1.0), 0.5);
        assert_eq!(reflect_if_out_of_bounds(1.2, 0.5, -1.0, 1.0), -0.5);
        // already heading back in: unchanged
        assert_eq!(reflect_if_out_of_bounds(1.2, -0.5, -1.0, 1.0), -0.5);
        assert_eq!(reflect_if_out_of_bounds(0.0, 0.5, -1.0, 1.0), 0.5);
    }

    #[test]
    fn test_mirror() {
        let (x, dir) = mirror_into_range(1.1, 1.0, -1.0, 1.0);
        assert!((x - 0.9).abs() < 1e-6);
        assert_eq!(dir, -1.0);

        let (x, dir) = mirror_into_range(-1.25, -1.0, -1.0, 1.0);
        assert!((x + 0.75).abs() < 1e-6);
        assert_eq!(dir, 1.0);

        let (x, dir) = mirror_into_range(0.3, -2.0, -1.0, 1.0);
        assert_eq!((x, dir), (0.3, -1.0));
    }

    #[test]
    fn test_mirror_degenerate_range() {
        let (x, _) = mirror_into_range(0.4, 1.0, 0.0, 0.0);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn test_span_overlap() {
        assert_eq!(span_overlap((0.0, 1.0), (0.5, 2.0)), Some((0.5, 1.0)));
        assert_eq!(span_overlap((0.0, 1.0), (1.0, 2.0)), None);
        assert_eq!(span_overlap((0.0, 1.0), (2.0, 3.0)), None);
    }
}
