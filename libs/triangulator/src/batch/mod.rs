//! Parallel triangulation of independent polygons.
//!
//! Each polygon gets its own ring and classification, so the work splits
//! across rayon's thread pool with no shared state.

use rayon::prelude::*;

use crate::config::TriangulatorConfig;
use crate::core::vec2::Vec2;
use crate::ear_clip::{triangulate_with_config, Triangulation};
use crate::error::TriangulatorResult;
use crate::winding::WindingOrder;

/// Triangulates every polygon in parallel. Results are in input order; one
/// failing polygon does not affect the others.
///
/// # Examples
/// ```
/// use triangulator::batch::triangulate_batch;
/// use triangulator::{Vec2, WindingOrder};
///
/// let triangle = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
/// let results = triangulate_batch(&[triangle.clone(), triangle], WindingOrder::Clockwise);
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn triangulate_batch(
    polygons: &[Vec<Vec2>],
    desired: WindingOrder,
) -> Vec<TriangulatorResult<Triangulation>> {
    triangulate_batch_with_config(polygons, desired, &TriangulatorConfig::default())
}

/// [`triangulate_batch`] with explicit limits shared by every polygon.
pub fn triangulate_batch_with_config(
    polygons: &[Vec<Vec2>],
    desired: WindingOrder,
    config: &TriangulatorConfig,
) -> Vec<TriangulatorResult<Triangulation>> {
    log::debug!("triangulating batch of {} polygons", polygons.len());
    polygons
        .par_iter()
        .map(|polygon| triangulate_with_config(polygon, desired, config))
        .collect()
}
