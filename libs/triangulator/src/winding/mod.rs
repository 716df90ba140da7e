//! # Winding Order
//!
//! Determine, reverse and enforce the rotational direction of a vertex
//! sequence.
//!
//! Winding is decided by summing the signed turning angle at each vertex, not
//! by the shoelace area. The sum starts at the second vertex and stops at the
//! last one, so the turn at the first vertex is left out; for a simple polygon
//! the remaining turns still total well clear of zero with the correct sign.
//!
//! Reversal keeps the first vertex in place and reverses the rest. The fixed
//! first vertex is the seam that index bookkeeping downstream relies on.

use serde::{Deserialize, Serialize};

use crate::core::vec2::{signed_angle, Vec2};

/// Rotational direction in which a polygon's vertices are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindingOrder {
    /// Vertices turn right (negative turning sum).
    Clockwise,
    /// Vertices turn left (non-negative turning sum).
    CounterClockwise,
}

impl WindingOrder {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            WindingOrder::Clockwise => WindingOrder::CounterClockwise,
            WindingOrder::CounterClockwise => WindingOrder::Clockwise,
        }
    }
}

/// Determines the winding order of a polygon.
///
/// A negative turning sum is `Clockwise`; anything else, including an empty
/// or degenerate input, is `CounterClockwise`.
///
/// # Examples
/// ```
/// use triangulator::{determine_winding_order, Vec2, WindingOrder};
///
/// let square = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ];
/// assert_eq!(determine_winding_order(&square), WindingOrder::CounterClockwise);
/// ```
pub fn determine_winding_order(vertices: &[Vec2]) -> WindingOrder {
    if turning_sum(vertices) < 0.0 {
        WindingOrder::Clockwise
    } else {
        WindingOrder::CounterClockwise
    }
}

/// Sum of the signed turning angles at vertices `1..n`, in radians.
pub fn turning_sum(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut winding = 0.0;
    let mut previous = vertices[0];
    for i in 1..n {
        let point = vertices[i];
        let next = vertices[(i + 1) % n];
        winding += signed_angle(point - previous, next - point);
        previous = point;
    }
    winding
}

/// Reverses the winding of a polygon, keeping the first vertex in place.
///
/// # Examples
/// ```
/// use triangulator::{reverse_winding_order, Vec2};
///
/// let v = [Vec2::X * 0.0, Vec2::X * 1.0, Vec2::X * 2.0, Vec2::X * 3.0];
/// let r = reverse_winding_order(&v);
/// assert_eq!(r, vec![v[0], v[3], v[2], v[1]]);
/// ```
pub fn reverse_winding_order(vertices: &[Vec2]) -> Vec<Vec2> {
    match vertices.split_first() {
        Some((first, rest)) => std::iter::once(*first)
            .chain(rest.iter().rev().copied())
            .collect(),
        None => Vec::new(),
    }
}

/// Returns the vertices in the `desired` winding, reversing them if needed.
///
/// Already-matching input is returned unchanged, so applying this twice with
/// the same `desired` order gives the same result as applying it once.
pub fn ensure_winding_order(vertices: &[Vec2], desired: WindingOrder) -> Vec<Vec2> {
    let current = determine_winding_order(vertices);
    if current == desired {
        log::debug!("winding already {desired:?}; no reversal needed");
        vertices.to_vec()
    } else {
        log::debug!("reversing {} vertices from {current:?} to {desired:?}", vertices.len());
        reverse_winding_order(vertices)
    }
}
