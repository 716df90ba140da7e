//! # Hole Cutting
//!
//! Merges a hole into its enclosing shape so that the result is a single ring
//! the ear clipper can consume.
//!
//! ## Bridge Search
//!
//! ```text
//!        shape (CCW)                       merged ring
//!   ┌──────────────────P            ┌──────────────────P
//!   │     ┌────M ─ ─ ─ I            │     ┌────M══════╗│
//!   │     │hole│       │      →     │     │    │       ║│
//!   │     └────┘       │            │     └────┘       P'
//!   └──────────────────┘            └──────────────────┘
//! ```
//!
//! 1. `M` is the hole vertex with the largest X (ties: largest Y).
//! 2. A ray from `M` along +X finds the nearest shape edge, hitting it at `I`.
//! 3. If `I` coincides with a shape vertex, that vertex is the bridge `P`.
//! 4. Otherwise `P` starts as the edge endpoint furthest along +X. If reflex
//!    shape vertices lie inside triangle `(M, I, P)`, the one whose direction
//!    from `M` is closest to +X replaces it.
//! 5. The hole is walked from `M` all the way round back to `M` and spliced in
//!    after `P`, followed by a second copy of `P`. The merged ring therefore
//!    has `shape + hole + 2` vertices.
//!
//! Hits within the configured tolerance of each other count as equal, and a
//! later edge wins the tie. Cutting several holes one after another relies on
//! this: the ray can meet both edges of an earlier bridge at the same
//! distance, and the later of the two is the one visible from `M`.

use crate::classify::Classification;
use crate::config::TriangulatorConfig;
use crate::core::segment::LineSegment;
use crate::core::triangle::Triangle;
use crate::core::vec2::{unit_x, Vec2};
use crate::core::vertex::Vertex;
use crate::ear_clip::validate_ring;
use crate::error::{TriangulatorError, TriangulatorResult};
use crate::ring::PolygonRing;
use crate::winding::{ensure_winding_order, WindingOrder};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Splices `hole` into `shape` through a pair of mutually visible vertices.
///
/// The shape is enforced CounterClockwise and the hole Clockwise before
/// merging, so either may be given in any winding. The returned ring is
/// CounterClockwise. If no shape edge lies to the right of the hole (the hole
/// is not inside the shape) the shape is returned unmerged.
///
/// # Examples
/// ```
/// use triangulator::{cut_hole_in_shape, Vec2};
///
/// let shape = [
///     Vec2::new(-100.0, -100.0),
///     Vec2::new(0.0, -200.0),
///     Vec2::new(100.0, -100.0),
///     Vec2::new(100.0, 100.0),
///     Vec2::new(0.0, 200.0),
///     Vec2::new(-100.0, 100.0),
/// ];
/// let hole = [
///     Vec2::new(-40.0, -40.0),
///     Vec2::new(-40.0, 40.0),
///     Vec2::new(0.0, 20.0),
///     Vec2::new(40.0, 40.0),
///     Vec2::new(40.0, -40.0),
///     Vec2::new(0.0, -20.0),
/// ];
///
/// let merged = cut_hole_in_shape(&shape, &hole).unwrap();
/// assert_eq!(merged.len(), shape.len() + hole.len() + 2);
/// assert_eq!(merged[3], Vec2::new(100.0, 100.0));
/// assert_eq!(merged[4], Vec2::new(40.0, 40.0));
/// ```
pub fn cut_hole_in_shape(shape: &[Vec2], hole: &[Vec2]) -> TriangulatorResult<Vec<Vec2>> {
    cut_hole_in_shape_with_config(shape, hole, &TriangulatorConfig::default())
}

/// [`cut_hole_in_shape`] with an explicit tolerance and vertex limit.
pub fn cut_hole_in_shape_with_config(
    shape: &[Vec2],
    hole: &[Vec2],
    config: &TriangulatorConfig,
) -> TriangulatorResult<Vec<Vec2>> {
    validate_ring("shape", shape, config)?;
    validate_ring("hole", hole, config)?;

    let merged_len = shape.len() + hole.len() + 2;
    if merged_len > config.max_vertices {
        return Err(TriangulatorError::TooManyVertices {
            count: merged_len,
            max: config.max_vertices,
        });
    }

    log::debug!(
        "cutting {}-vertex hole into {}-vertex shape",
        hole.len(),
        shape.len()
    );

    let shape = ensure_winding_order(shape, WindingOrder::CounterClockwise);
    let hole = ensure_winding_order(hole, WindingOrder::Clockwise);

    let mut ring = PolygonRing::from_positions(&shape);
    let classes = Classification::convexity_only(&ring);

    // Hole vertices are numbered after the shape's so the two never collide.
    let hole: Vec<Vertex> = hole
        .iter()
        .enumerate()
        .map(|(i, &position)| Vertex::new(position, shape.len() + i))
        .collect();
    let start = rightmost_vertex(&hole);
    let m = hole[start];

    let candidates = bridge_candidates(&ring, m.position);
    let Some((distance, closest)) = closest_hit(&candidates, m.position, config.tolerance) else {
        log::debug!("no shape edge to the right of {m}; hole left uncut");
        return Ok(shape);
    };

    let hit = m.position + unit_x() * distance;
    let bridge = match coincident_endpoint(&candidates, hit, config.tolerance) {
        Some(vertex) => vertex,
        None => visible_vertex(&ring, &classes, m.position, hit, closest.rightmost_endpoint()),
    };
    log::debug!("bridging hole vertex {m} to shape vertex {bridge}");

    // Shape slot ids equal shape indices, see `PolygonRing::from_positions`.
    let mut cursor = bridge.index;
    for k in 0..=hole.len() {
        cursor = ring.insert_after(cursor, hole[(start + k) % hole.len()]);
    }
    ring.insert_after(cursor, bridge);

    Ok(ring.positions())
}

/// Cuts every hole into `shape`, in order.
///
/// Each hole is merged into the ring produced by the previous cut, so later
/// holes may bridge through earlier ones.
pub fn cut_holes(shape: &[Vec2], holes: &[Vec<Vec2>]) -> TriangulatorResult<Vec<Vec2>> {
    cut_holes_with_config(shape, holes, &TriangulatorConfig::default())
}

/// [`cut_holes`] with an explicit tolerance and vertex limit.
pub fn cut_holes_with_config(
    shape: &[Vec2],
    holes: &[Vec<Vec2>],
    config: &TriangulatorConfig,
) -> TriangulatorResult<Vec<Vec2>> {
    validate_ring("shape", shape, config)?;
    holes.iter().try_fold(shape.to_vec(), |merged, hole| {
        cut_hole_in_shape_with_config(&merged, hole, config)
    })
}

// =============================================================================
// BRIDGE SEARCH
// =============================================================================

/// Tie-break for ray hits: `candidate` replaces `closest` unless it is
/// farther by more than `eps`.
pub fn not_farther_than(candidate: f64, closest: f64, eps: f64) -> bool {
    closest - candidate > -eps
}

/// Position in `hole` of the vertex with the largest X, ties broken by the
/// largest Y. The first such vertex wins exact duplicates.
fn rightmost_vertex(hole: &[Vertex]) -> usize {
    let mut best = 0;
    for (i, v) in hole.iter().enumerate() {
        let b = hole[best].position;
        let p = v.position;
        if p.x > b.x || (p.x == b.x && p.y > b.y) {
            best = i;
        }
    }
    best
}

/// Shape edges that could be hit by a +X ray from `origin`: at least one
/// endpoint lies strictly right of it and the edge's Y range spans
/// `origin.y`, endpoints included.
fn bridge_candidates(ring: &PolygonRing, origin: Vec2) -> Vec<LineSegment> {
    ring.edges()
        .map(|(a, b)| LineSegment::new(ring.vertex(a), ring.vertex(b)))
        .filter(|segment| {
            let (a, b) = (segment.a.position, segment.b.position);
            let right = a.x > origin.x || b.x > origin.x;
            let spans = (a.y >= origin.y && b.y <= origin.y) || (a.y <= origin.y && b.y >= origin.y);
            right && spans
        })
        .collect()
}

/// Nearest ray hit among `candidates` and the segment it landed on.
fn closest_hit(candidates: &[LineSegment], origin: Vec2, eps: f64) -> Option<(f64, LineSegment)> {
    let mut closest: Option<(f64, LineSegment)> = None;
    for segment in candidates {
        let Some(distance) = segment.intersect_ray(origin, unit_x()) else {
            continue;
        };
        if closest.map_or(true, |(best, _)| not_farther_than(distance, best, eps)) {
            closest = Some((distance, *segment));
        }
    }
    closest
}

/// Candidate endpoint within `eps` of `hit`. When a point appears twice
/// (an earlier bridge), the copy with the larger index is the one reached
/// on the way back to the shape and is preferred.
fn coincident_endpoint(candidates: &[LineSegment], hit: Vec2, eps: f64) -> Option<Vertex> {
    let preferred = |v: &Vertex, found: Option<Vertex>| {
        (v.position - hit).length() < eps && found.map_or(true, |f| v.index > f.index)
    };
    let mut found: Option<Vertex> = None;
    for segment in candidates {
        if preferred(&segment.a, found) {
            found = Some(segment.a);
        } else if preferred(&segment.b, found) {
            found = Some(segment.b);
        }
    }
    found
}

/// Resolves the bridge when the ray hit lands mid-edge.
///
/// `endpoint` is visible from `m` unless a reflex vertex pokes into triangle
/// `(m, hit, endpoint)`; in that case the intruding reflex vertex with the
/// smallest angle to +X is visible instead.
fn visible_vertex(
    ring: &PolygonRing,
    classes: &Classification,
    m: Vec2,
    hit: Vec2,
    endpoint: Vertex,
) -> Vertex {
    let mip = Triangle::new(Vertex::new(m, 0), Vertex::new(hit, 1), endpoint);

    let mut bridge = endpoint;
    let mut closest_dot = -1.0;
    for id in classes.reflex() {
        let vertex = ring.vertex(id);
        if vertex.coincides_with(&endpoint) || !mip.contains_point(vertex.position) {
            continue;
        }
        let dot = (vertex.position - m).normalize_or_zero().dot(unit_x());
        if dot > closest_dot {
            closest_dot = dot;
            bridge = vertex;
        }
    }
    bridge
}
