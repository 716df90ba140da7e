//! # Triangulator
//!
//! Ear-clipping triangulation of simple 2D polygons, with support for interior
//! holes through bridge insertion.
//!
//! ## Pipeline
//!
//! ```text
//! shape + holes → cut_hole_in_shape (per hole) → triangulate → Triangulation
//! ```
//!
//! 1. **Winding**: the outer ring is enforced CounterClockwise, holes Clockwise.
//! 2. **Hole merging**: each hole is spliced into the outer ring through a pair
//!    of mutually visible bridge vertices, producing one ring without holes.
//! 3. **Classification**: every ring vertex is convex or reflex, and convex
//!    vertices whose triangle holds no reflex vertex are ears.
//! 4. **Ear clipping**: ears are removed one at a time until three vertices
//!    remain, reclassifying the two exposed neighbours after each removal.
//!
//! ## Usage
//!
//! ```rust
//! use triangulator::{cut_hole_in_shape, triangulate, Vec2, WindingOrder};
//!
//! let shape = [
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(210.0, 0.0),
//!     Vec2::new(210.0, 150.0),
//!     Vec2::new(0.0, 150.0),
//! ];
//! let hole = [
//!     Vec2::new(150.0, 100.0),
//!     Vec2::new(175.0, 100.0),
//!     Vec2::new(175.0, 125.0),
//!     Vec2::new(150.0, 125.0),
//! ];
//!
//! let merged = cut_hole_in_shape(&shape, &hole).unwrap();
//! assert_eq!(merged.len(), 10);
//!
//! let mesh = triangulate(&merged, WindingOrder::CounterClockwise).unwrap();
//! assert_eq!(mesh.triangle_count(), 8);
//! ```
//!
//! ## Thread Safety
//!
//! Every call builds its own ring and classification sets, so the entry points
//! are reentrant and may be called from several threads at once. See
//! [`batch::triangulate_batch`] for a parallel driver.
//!
//! ## Malformed Input
//!
//! Input simplicity is not validated. Fewer than three vertices and non-finite
//! coordinates are rejected with an error; a self-intersecting polygon either
//! triangulates on a best-effort basis or fails with
//! [`TriangulatorError::EarsExhausted`].

pub mod batch;
pub mod classify;
pub mod config;
pub mod core;
pub mod ear_clip;
pub mod error;
pub mod holes;
pub mod ring;
pub mod winding;

mod trace;

pub use crate::config::TriangulatorConfig;
pub use crate::core::segment::{ray_vs_segment, segment_intersection, LineSegment};
pub use crate::core::triangle::{point_in_triangle, Triangle};
pub use crate::core::vec2::{unit_x, Vec2};
pub use crate::core::vertex::Vertex;
pub use crate::ear_clip::{
    triangulate, triangulate_with_config, triangulate_with_holes,
    triangulate_with_holes_with_config, Triangulation,
};
pub use crate::error::{TriangulatorError, TriangulatorResult};
pub use crate::holes::{
    cut_hole_in_shape, cut_hole_in_shape_with_config, cut_holes, cut_holes_with_config,
};
pub use crate::winding::{
    determine_winding_order, ensure_winding_order, reverse_winding_order, WindingOrder,
};
