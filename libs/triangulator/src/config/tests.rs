//! Tests covering triangulator configuration behavior.

use super::*;
use crate::error::TriangulatorError;
use config::constants::ConfigError;

#[test]
fn default_matches_constants() {
    let cfg = TriangulatorConfig::default();
    assert_eq!(cfg.tolerance, BRIDGE_EPSILON);
    assert_eq!(cfg.max_vertices, MAX_POLYGON_VERTICES);
}

#[test]
fn default_matches_global_default() {
    assert_eq!(
        TriangulatorConfig::default(),
        TriangulatorConfig::from(GlobalConfig::default())
    );
}

#[test]
fn builder_validates_input() {
    let err = TriangulatorConfig::new(0.0, 24).unwrap_err();
    assert_eq!(
        err,
        TriangulatorError::Config(ConfigError::InvalidTolerance(0.0))
    );
    let err = TriangulatorConfig::new(1.0e-8, 1).unwrap_err();
    assert_eq!(
        err,
        TriangulatorError::Config(ConfigError::InvalidVertexLimit(1))
    );
}
