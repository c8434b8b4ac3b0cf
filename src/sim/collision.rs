//! Swipe collision geometry
//!
//! Slices are thin line segments and fruits are circles, so every hit test is
//! a point-to-segment distance check. Everything stays in squared distances:
//! this runs once per fruit per swipe sample.

use glam::Vec2;

/// Closest point to `p` on segment `ab`
///
/// The projection parameter is clamped to [0, 1], so the result always lies on
/// the segment itself rather than the infinite line through it. A degenerate
/// segment (`a == b`) yields `a`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Squared distance from `p` to segment `ab`
#[inline]
pub fn squared_distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance_squared(closest_point_on_segment(p, a, b))
}

/// Check if segment `ab` touches the circle at `center` with `radius`
#[inline]
pub fn segment_intersects_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    squared_distance_point_to_segment(center, a, b) <= radius * radius
}
