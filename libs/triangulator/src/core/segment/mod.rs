//! Line segments, segment/segment intersection and ray casting.
//!
//! ## Intersection
//!
//! Both segments are written parametrically, `A + ua·(B − A)` and
//! `C + ub·(D − C)`, and the 2×2 system is solved for `(ua, ub)`. A hit needs
//! both parameters in `[0, 1]`, endpoints included. Parallel and collinear
//! segments have a zero denominator and report no intersection.

use config::constants::RAY_EXTENT_FACTOR;

use crate::core::vec2::Vec2;
use crate::core::vertex::Vertex;

/// A segment between two vertices, used transiently by the bridge search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start vertex.
    pub a: Vertex,
    /// End vertex.
    pub b: Vertex,
}

impl LineSegment {
    /// Creates a new segment.
    pub fn new(a: Vertex, b: Vertex) -> Self {
        Self { a, b }
    }

    /// Creates a segment from bare positions. Both ends get index 0.
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self::new(Vertex::new(a, 0), Vertex::new(b, 0))
    }

    /// Intersection point with `other`, if the segments cross or touch.
    pub fn intersection(&self, other: &LineSegment) -> Option<Vec2> {
        segment_intersection(self, other)
    }

    /// Distance from `origin` along `direction` to this segment, if the ray
    /// hits it.
    ///
    /// The ray is clipped to a finite segment long enough to pass the farthest
    /// endpoint of `self`, then intersected with it.
    ///
    /// # Examples
    /// ```
    /// use triangulator::{LineSegment, Vec2};
    ///
    /// let wall = LineSegment::from_points(Vec2::new(10.0, -5.0), Vec2::new(10.0, 5.0));
    /// let hit = wall.intersect_ray(Vec2::new(2.0, 0.0), Vec2::X);
    /// assert_eq!(hit, Some(8.0));
    /// ```
    pub fn intersect_ray(&self, origin: Vec2, direction: Vec2) -> Option<f64> {
        let reach = (self.a.position - origin)
            .length()
            .max((self.b.position - origin).length())
            * RAY_EXTENT_FACTOR;
        let ray = LineSegment::from_points(origin, origin + direction * reach);

        segment_intersection(self, &ray).map(|hit| (hit - origin).length())
    }

    /// The endpoint furthest along +X, ties broken by larger Y.
    pub fn rightmost_endpoint(&self) -> Vertex {
        let (a, b) = (self.a.position, self.b.position);
        if a.x > b.x || (a.x == b.x && a.y > b.y) {
            self.a
        } else {
            self.b
        }
    }
}

/// Intersection point of two segments, or `None` when they miss or are
/// parallel.
///
/// # Examples
/// ```
/// use triangulator::{segment_intersection, LineSegment, Vec2};
///
/// let s1 = LineSegment::from_points(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
/// let s2 = LineSegment::from_points(Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0));
/// assert_eq!(segment_intersection(&s1, &s2), Some(Vec2::new(2.0, 2.0)));
///
/// let parallel = LineSegment::from_points(Vec2::new(0.0, 1.0), Vec2::new(4.0, 5.0));
/// assert_eq!(segment_intersection(&s1, &parallel), None);
/// ```
pub fn segment_intersection(first: &LineSegment, second: &LineSegment) -> Option<Vec2> {
    let p1 = first.a.position;
    let p2 = first.b.position;
    let p3 = second.a.position;
    let p4 = second.b.position;

    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;

    let unit = 0.0..=1.0;
    if !unit.contains(&ua) || !unit.contains(&ub) {
        return None;
    }

    Some(p1 + (p2 - p1) * ua)
}

/// Distance from `origin` along `direction` to `segment`, if the ray hits it.
pub fn ray_vs_segment(origin: Vec2, direction: Vec2, segment: &LineSegment) -> Option<f64> {
    segment.intersect_ray(origin, direction)
}
