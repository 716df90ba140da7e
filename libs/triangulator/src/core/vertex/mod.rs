//! Indexed polygon vertices.
//!
//! A vertex pairs a position with the index it received when it entered a
//! ring. Two vertices at the same position with different indices are distinct,
//! which is what lets a bridge vertex appear twice in a merged ring.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::vec2::Vec2;

/// An immutable (position, index) pair.
///
/// Equality and hashing use both fields. Positions are compared by bit
/// pattern for hashing, so `0.0` and `-0.0` hash differently even though they
/// compare equal; callers never mix the two for the same vertex.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position in the plane.
    pub position: Vec2,
    /// Index assigned when the vertex entered its ring. Never renumbered.
    pub index: usize,
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: Vec2, index: usize) -> Self {
        Self { position, index }
    }

    /// Returns `true` if both vertices sit at exactly the same position.
    pub fn coincides_with(&self, other: &Vertex) -> bool {
        self.position == other.position
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.position == other.position
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.x.to_bits().hash(state);
        self.position.y.to_bits().hash(state);
        self.index.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) #{}", self.position.x, self.position.y, self.index)
    }
}

#[cfg(test)]
mod tests;
