//! Core geometry types for the triangulation engine.
//!
//! Includes the vector alias (`Vec2`), indexed vertices, line segments with
//! ray casting, and triangles with point containment.

pub mod segment;
pub mod triangle;
pub mod vec2;
pub mod vertex;
