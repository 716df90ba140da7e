//! Centralized configuration values shared across the triangulation crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Distance tolerance used while searching for a hole bridge.
///
/// Two ray hits whose distances differ by less than this value are treated as
/// the same hit, and an outer vertex closer than this value to the ray hit is
/// treated as the hit itself.
///
/// # Examples
/// ```
/// use config::constants::BRIDGE_EPSILON;
/// assert!(BRIDGE_EPSILON < 1.0e-6);
/// ```
pub const BRIDGE_EPSILON: f64 = 1.0e-8;

/// Factor applied to the farthest segment endpoint distance when a ray is
/// turned into a finite segment for intersection tests.
///
/// # Examples
/// ```
/// use config::constants::RAY_EXTENT_FACTOR;
/// assert!(RAY_EXTENT_FACTOR > 1.0);
/// ```
pub const RAY_EXTENT_FACTOR: f64 = 2.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of vertices a polygon ring needs to enclose an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// assert_eq!(MIN_POLYGON_VERTICES, 3);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Maximum number of vertices accepted in a single polygon ring.
///
/// Ear classification is quadratic in the worst case, so very large rings are
/// refused up front instead of stalling the caller.
///
/// # Examples
/// ```
/// use config::constants::MAX_POLYGON_VERTICES;
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_POLYGON_VERTICES);
/// ```
pub const MAX_POLYGON_VERTICES: usize = 1_000_000;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance tolerance used by the bridge search.
    pub tolerance: f64,
    /// Upper bound on the vertex count of one ring.
    pub max_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 5000).expect("valid config");
    /// assert_eq!(cfg.max_vertices, 5000);
    /// ```
    pub fn new(tolerance: f64, max_vertices: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_vertices < MIN_POLYGON_VERTICES {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            tolerance,
            max_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: BRIDGE_EPSILON,
            max_vertices: MAX_POLYGON_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the vertex limit is too small to form a polygon.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be >= {MIN_POLYGON_VERTICES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
