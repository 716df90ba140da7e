//! 2D vector definitions for the triangulation engine.
//!
//! Provides type alias for `glam::DVec2` and common utilities.

pub use glam::DVec2 as Vec2;

/// Creates a unit vector along the X axis.
///
/// This is the direction of the ray cast from a hole towards the outer ring.
///
/// # Examples
/// ```
/// use triangulator::core::vec2::{unit_x, Vec2};
///
/// assert_eq!(unit_x(), Vec2::new(1.0, 0.0));
/// ```
pub fn unit_x() -> Vec2 {
    Vec2::X
}

/// Signed angle turning from `from` to `to`, in radians within (-π, π].
///
/// Positive for a counter-clockwise turn.
pub fn signed_angle(from: Vec2, to: Vec2) -> f64 {
    from.perp_dot(to).atan2(from.dot(to))
}

/// Returns `true` when every coordinate is finite.
pub fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
