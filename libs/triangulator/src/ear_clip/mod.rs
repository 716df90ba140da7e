//! # Ear Clipping
//!
//! Triangulates a simple polygon by repeatedly cutting off ears.
//!
//! ## States
//!
//! ```text
//! Classifying → Clipping ⟲ → Finalizing → Done
//! ```
//!
//! - **Classifying**: partition the ring into convex/reflex, queue the ears.
//! - **Clipping**: while more than three vertices remain, pop the front ear
//!   `e`, emit `(e, next, prev)`, unlink `e` and revalidate `prev` and `next`.
//! - **Finalizing**: the last three vertices form the final triangle.
//!
//! A simple polygon with four or more vertices always has an ear, so the
//! clipping loop only runs dry on self-intersecting input; that case is
//! reported as [`TriangulatorError::EarsExhausted`].

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::config::TriangulatorConfig;
use crate::core::triangle::{signed_area, Triangle};
use crate::core::vec2::{is_finite, Vec2};
use crate::error::{TriangulatorError, TriangulatorResult};
use crate::holes::cut_holes_with_config;
use crate::ring::PolygonRing;
use crate::trace::trace_state;
use crate::winding::{ensure_winding_order, WindingOrder};

use config::constants::MIN_POLYGON_VERTICES;

// =============================================================================
// OUTPUT
// =============================================================================

/// Indexed triangle list produced by [`triangulate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Triangulation {
    /// Input vertices, rewound CounterClockwise if they arrived Clockwise.
    pub vertices: Vec<Vec2>,
    /// Flat triangle corner indices into `vertices`, three per triangle.
    pub indices: Vec<u32>,
}

impl Triangulation {
    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of each triangle in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Total unsigned area covered by the triangles.
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| signed_area(a, b, c).abs())
            .sum()
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Phase of an [`EarClipper`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipState {
    /// Building the convex/reflex/ear partition.
    Classifying,
    /// Cutting ears off the ring.
    Clipping,
    /// Emitting the last triangle.
    Finalizing,
    /// Finished.
    Done,
}

/// Single-use ear clipping run over one ring.
///
/// All working state lives here, so independent runs never share anything.
#[derive(Debug)]
pub struct EarClipper {
    ring: PolygonRing,
    classes: Classification,
    triangles: Vec<Triangle>,
    state: ClipState,
}

impl EarClipper {
    /// Prepares a run over `positions`, which must already be wound
    /// CounterClockwise. Vertex `i` keeps index `i` in the emitted triangles.
    pub fn new(positions: &[Vec2]) -> Self {
        Self {
            ring: PolygonRing::from_positions(positions),
            classes: Classification::default(),
            triangles: Vec::with_capacity(positions.len().saturating_sub(2)),
            state: ClipState::Classifying,
        }
    }

    /// Current phase.
    pub fn state(&self) -> ClipState {
        self.state
    }

    /// Advances the state machine by one step and returns the new phase.
    pub fn step(&mut self) -> TriangulatorResult<ClipState> {
        self.state = match self.state {
            ClipState::Classifying => {
                self.classes = Classification::new(&self.ring);
                ClipState::Clipping
            }
            ClipState::Clipping => {
                if self.ring.len() <= 3 {
                    ClipState::Finalizing
                } else if self.clip_next_ear() {
                    ClipState::Clipping
                } else {
                    return Err(TriangulatorError::EarsExhausted {
                        remaining: self.ring.len(),
                    });
                }
            }
            ClipState::Finalizing => {
                self.emit_final_triangle();
                ClipState::Done
            }
            ClipState::Done => ClipState::Done,
        };
        Ok(self.state)
    }

    /// Runs to completion and returns the emitted triangles.
    pub fn run(mut self) -> TriangulatorResult<Vec<Triangle>> {
        while self.step()? != ClipState::Done {}
        Ok(self.triangles)
    }

    fn clip_next_ear(&mut self) -> bool {
        let Some(ear) = self.classes.pop_ear() else {
            return false;
        };
        let prev = self.ring.prev(ear);
        let next = self.ring.next(ear);

        self.triangles.push(Triangle::new(
            self.ring.vertex(ear),
            self.ring.vertex(next),
            self.ring.vertex(prev),
        ));

        let removed = self.ring.remove(ear);
        self.classes.forget(ear);
        trace_state!("removed ear {removed}");

        self.classes.validate_adjacent_vertex(&self.ring, prev);
        self.classes.validate_adjacent_vertex(&self.ring, next);
        debug_assert!(self.classes.check_invariants(&self.ring));

        trace_state!(
            "reflex: {:?} convex: {:?} ears: {:?}",
            self.classes.reflex().collect::<Vec<_>>(),
            self.classes.convex().collect::<Vec<_>>(),
            self.classes.ears().collect::<Vec<_>>()
        );
        true
    }

    fn emit_final_triangle(&mut self) {
        if let [a, b, c] = self.ring.vertices()[..] {
            self.triangles.push(Triangle::new(a, b, c));
        }
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Triangulates a simple polygon given in either winding order.
///
/// The returned `vertices` are the input, rewound CounterClockwise (first
/// vertex kept in place) if it arrived Clockwise. `indices` hold `3 × (N − 2)`
/// entries naming triangle corners in `vertices`, each triple ordered to match
/// `desired`.
///
/// # Examples
/// ```
/// use triangulator::{triangulate, Vec2, WindingOrder};
///
/// let square = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ];
/// let mesh = triangulate(&square, WindingOrder::CounterClockwise).unwrap();
/// assert_eq!(mesh.triangle_count(), 2);
/// assert_eq!(mesh.area(), 1.0);
/// ```
pub fn triangulate(vertices: &[Vec2], desired: WindingOrder) -> TriangulatorResult<Triangulation> {
    triangulate_with_config(vertices, desired, &TriangulatorConfig::default())
}

/// [`triangulate`] with explicit limits.
pub fn triangulate_with_config(
    vertices: &[Vec2],
    desired: WindingOrder,
    config: &TriangulatorConfig,
) -> TriangulatorResult<Triangulation> {
    validate_ring("polygon", vertices, config)?;
    log::debug!("triangulating {} vertices", vertices.len());

    let vertices = ensure_winding_order(vertices, WindingOrder::CounterClockwise);

    let triangles = EarClipper::new(&vertices).run()?;
    let indices = emit_indices(&triangles, desired);

    log::debug!("emitted {} triangles", triangles.len());
    Ok(Triangulation { vertices, indices })
}

/// Cuts every hole into `shape`, in order, then triangulates the result.
///
/// # Examples
/// ```
/// use triangulator::{triangulate_with_holes, Vec2, WindingOrder};
///
/// let shape = vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(10.0, 0.0),
///     Vec2::new(10.0, 10.0),
///     Vec2::new(0.0, 10.0),
/// ];
/// let hole = vec![
///     Vec2::new(4.0, 4.0),
///     Vec2::new(6.0, 4.0),
///     Vec2::new(6.0, 6.0),
///     Vec2::new(4.0, 6.0),
/// ];
/// let mesh = triangulate_with_holes(&shape, &[hole], WindingOrder::CounterClockwise).unwrap();
/// assert_eq!(mesh.vertices.len(), 10);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn triangulate_with_holes(
    shape: &[Vec2],
    holes: &[Vec<Vec2>],
    desired: WindingOrder,
) -> TriangulatorResult<Triangulation> {
    triangulate_with_holes_with_config(shape, holes, desired, &TriangulatorConfig::default())
}

/// [`triangulate_with_holes`] with explicit limits.
pub fn triangulate_with_holes_with_config(
    shape: &[Vec2],
    holes: &[Vec<Vec2>],
    desired: WindingOrder,
    config: &TriangulatorConfig,
) -> TriangulatorResult<Triangulation> {
    let merged = cut_holes_with_config(shape, holes, config)?;
    triangulate_with_config(&merged, desired, config)
}

/// Flattens triangles into corner indices, `(a, b, c)` for CounterClockwise
/// output and `(c, b, a)` for Clockwise.
fn emit_indices(triangles: &[Triangle], desired: WindingOrder) -> Vec<u32> {
    triangles
        .iter()
        .flat_map(|t| {
            let [a, b, c] = t.indices().map(|i| i as u32);
            match desired {
                WindingOrder::CounterClockwise => [a, b, c],
                WindingOrder::Clockwise => [c, b, a],
            }
        })
        .collect()
}

/// Rejects rings that cannot describe a polygon.
pub(crate) fn validate_ring(
    role: &'static str,
    vertices: &[Vec2],
    config: &TriangulatorConfig,
) -> TriangulatorResult<()> {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return Err(TriangulatorError::TooFewVertices {
            role,
            count: vertices.len(),
        });
    }
    if vertices.len() > config.max_vertices {
        return Err(TriangulatorError::TooManyVertices {
            count: vertices.len(),
            max: config.max_vertices,
        });
    }
    if let Some(index) = vertices.iter().position(|&v| !is_finite(v)) {
        return Err(TriangulatorError::NonFiniteCoordinate { role, index });
    }
    Ok(())
}
