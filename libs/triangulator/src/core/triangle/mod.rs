//! Triangles and the point-in-triangle predicate.

use crate::core::vec2::Vec2;
use crate::core::vertex::Vertex;

/// A triangle emitted by ear clipping, or built transiently for a
/// containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub a: Vertex,
    /// Second corner.
    pub b: Vertex,
    /// Third corner.
    pub c: Vertex,
}

impl Triangle {
    /// Creates a new triangle.
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_triangle(point, self.a.position, self.b.position, self.c.position)
    }

    /// Signed area; positive when `a → b → c` runs counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area(self.a.position, self.b.position, self.c.position)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Ring indices of the three corners in `(a, b, c)` order.
    pub fn indices(&self) -> [usize; 3] {
        [self.a.index, self.b.index, self.c.index]
    }
}

/// Returns `true` iff `p` lies inside or on the boundary of triangle `(a, b, c)`.
///
/// Each edge splits the plane in two; the point is inside when it is never
/// strictly on opposite sides of two edges. Works for either winding.
///
/// # Examples
/// ```
/// use triangulator::{point_in_triangle, Vec2};
///
/// let (a, b, c) = (Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
/// assert!(point_in_triangle(Vec2::new(1.0, 1.0), a, b, c));
/// assert!(point_in_triangle(Vec2::new(2.0, 0.0), a, b, c));
/// assert!(!point_in_triangle(Vec2::new(3.0, 3.0), a, b, c));
/// ```
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = edge_side(p, a, b);
    let d2 = edge_side(p, b, c);
    let d3 = edge_side(p, c, a);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_negative && has_positive)
}

/// Signed area of triangle `(a, b, c)`.
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    0.5 * (b - a).perp_dot(c - a)
}

/// Which side of the directed line `from → to` the point `p` falls on.
fn edge_side(p: Vec2, from: Vec2, to: Vec2) -> f64 {
    (to - from).perp_dot(p - from)
}
