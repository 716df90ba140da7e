//! Triangulator configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so the engine stays decoupled
//! from literal constants.

use config::constants::{GlobalConfig, BRIDGE_EPSILON, MAX_POLYGON_VERTICES};

use crate::error::TriangulatorResult;

/// Engine configuration.
///
/// # Examples
/// ```
/// use triangulator::config::TriangulatorConfig;
/// let cfg = TriangulatorConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulatorConfig {
    /// Tolerance for bridge tie-breaking and ray-hit coincidence.
    pub tolerance: f64,
    /// Largest ring accepted by any entry point.
    pub max_vertices: usize,
}

impl TriangulatorConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use triangulator::config::TriangulatorConfig;
    /// let cfg = TriangulatorConfig::new(1.0e-6, 4096).unwrap();
    /// assert_eq!(cfg.max_vertices, 4096);
    /// ```
    pub fn new(tolerance: f64, max_vertices: usize) -> TriangulatorResult<Self> {
        let cfg = GlobalConfig::new(tolerance, max_vertices)?;
        Ok(Self::from(cfg))
    }
}

impl From<GlobalConfig> for TriangulatorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            max_vertices: cfg.max_vertices,
        }
    }
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            tolerance: BRIDGE_EPSILON,
            max_vertices: MAX_POLYGON_VERTICES,
        }
    }
}

#[cfg(test)]
mod tests;
