//! # Error Types
//!
//! Error types for triangulation operations. Input that cannot describe a
//! polygon at all is refused up front; non-simple input that defeats the ear
//! search is reported instead of returning a partial triangle list.

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during triangulation and hole cutting.
///
/// ## Example
///
/// ```rust
/// use triangulator::{triangulate, TriangulatorError, Vec2, WindingOrder};
///
/// let line = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
/// match triangulate(&line, WindingOrder::CounterClockwise) {
///     Err(TriangulatorError::TooFewVertices { count, .. }) => assert_eq!(count, 2),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulatorError {
    /// A ring has fewer than three vertices.
    #[error("{role} needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Which input ring was rejected ("polygon", "shape" or "hole")
        role: &'static str,
        /// Number of vertices supplied
        count: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("{role} vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Which input ring was rejected
        role: &'static str,
        /// Position of the offending vertex in the input
        index: usize,
    },

    /// A ring exceeds the configured vertex limit.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of vertices supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Ear clipping ran out of ears before the ring was reduced to a triangle.
    ///
    /// A simple polygon always has an ear, so this means the input (or a ring
    /// produced from it by hole cutting) self-intersects.
    #[error("No ears left with {remaining} vertices remaining; polygon is not simple")]
    EarsExhausted {
        /// Ring size when clipping stopped
        remaining: usize,
    },

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for triangulation operations.
pub type TriangulatorResult<T> = Result<T, TriangulatorError>;

// =============================================================================
// TESTS
// =============================================================================
