//! # Config Crate
//!
//! Centralized configuration constants for the polygon triangulation
//! workspace. Tolerances and safety limits are defined once here so the
//! engine crates never carry literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BRIDGE_EPSILON, MIN_POLYGON_VERTICES};
//!
//! // Two ray hits closer than BRIDGE_EPSILON are treated as the same hit
//! let a: f64 = 60.0;
//! let b: f64 = 60.0 + 1e-10;
//! assert!((a - b).abs() < BRIDGE_EPSILON);
//!
//! // A ring needs at least three vertices to enclose an area
//! assert_eq!(MIN_POLYGON_VERTICES, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig::new` rejects unusable values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
