//! # Vertex Classification
//!
//! Partitions ring vertices into convex and reflex sets, and convex vertices
//! further into ears, then keeps the partition correct while the ring is
//! clipped.
//!
//! ## Invariants
//!
//! - `convex ∪ reflex` is every live ring slot, and the two are disjoint.
//! - Every ear is convex.
//!
//! ## Convexity
//!
//! With predecessor `p` and successor `n` of `v`, let `d1 = v − p` and
//! `d2 = n − v` (both normalized) and rotate `d2` a quarter turn to get its
//! normal. `v` is convex when `d1 · normal ≤ 0`, which for a CounterClockwise
//! ring means the boundary turns left (or runs straight) at `v`.
//!
//! ## Ears
//!
//! A convex vertex `c` is an ear when no reflex vertex lies in triangle
//! `(p, c, n)`. Reflex vertices that are `p`, `c`, `n` themselves, or that sit
//! at the same position as one of them (bridge duplicates), are skipped.

use std::collections::{BTreeSet, VecDeque};

use crate::core::triangle::point_in_triangle;
use crate::core::vec2::Vec2;
use crate::ring::{PolygonRing, SlotId};
use crate::trace::trace_state;

/// Convex/reflex/ear partition of a [`PolygonRing`].
///
/// Slot sets are ordered by slot id, which for a freshly built ring is the
/// ring order; iteration over `reflex()` therefore visits vertices in the
/// order they were listed.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    convex: BTreeSet<SlotId>,
    reflex: BTreeSet<SlotId>,
    ears: VecDeque<SlotId>,
}

impl Classification {
    /// Classifies every vertex of `ring` as convex or reflex, then queues the
    /// ears among the convex vertices in ring order.
    pub fn new(ring: &PolygonRing) -> Self {
        let mut classes = Self::convexity_only(ring);
        classes.find_ears(ring);
        classes
    }

    /// Classifies every vertex as convex or reflex without searching for ears.
    pub fn convexity_only(ring: &PolygonRing) -> Self {
        let mut classes = Self::default();
        for id in ring.iter() {
            if is_convex(ring, id) {
                trace_state!("convex: {}", ring.vertex(id));
                classes.convex.insert(id);
            } else {
                trace_state!("reflex: {}", ring.vertex(id));
                classes.reflex.insert(id);
            }
        }
        classes
    }

    fn find_ears(&mut self, ring: &PolygonRing) {
        let ears: Vec<SlotId> = self
            .convex
            .iter()
            .copied()
            .filter(|&id| self.is_ear(ring, id))
            .collect();
        for id in ears {
            trace_state!("ear: {}", ring.vertex(id));
            self.ears.push_back(id);
        }
    }

    /// Returns `true` if no reflex vertex lies in the triangle formed by `id`
    /// and its current neighbours.
    ///
    /// Costs O(|reflex|).
    pub fn is_ear(&self, ring: &PolygonRing, id: SlotId) -> bool {
        let p = ring.prev(id);
        let n = ring.next(id);
        let (pp, cp, np) = (ring.position(p), ring.position(id), ring.position(n));

        !self.reflex.iter().any(|&t| {
            if t == p || t == id || t == n {
                return false;
            }
            let tp = ring.position(t);
            if tp == pp || tp == cp || tp == np {
                return false;
            }
            let inside = point_in_triangle(tp, pp, cp, np);
            if inside {
                trace_state!("{} blocked by {}", ring.vertex(id), ring.vertex(t));
            }
            inside
        })
    }

    /// Reclassifies a vertex whose neighbour was just removed.
    ///
    /// A reflex vertex that became convex moves to the convex set. A convex
    /// vertex has its ear status recomputed; a new ear goes to the front of
    /// the queue so it is clipped next.
    pub fn validate_adjacent_vertex(&mut self, ring: &PolygonRing, id: SlotId) {
        if self.reflex.contains(&id) {
            if is_convex(ring, id) {
                self.reflex.remove(&id);
                self.convex.insert(id);
                trace_state!("{} now convex", ring.vertex(id));
            } else {
                trace_state!("{} still reflex", ring.vertex(id));
            }
        }

        if self.convex.contains(&id) {
            let was_ear = self.ears.contains(&id);
            let is_ear = self.is_ear(ring, id);

            if was_ear && !is_ear {
                self.ears.retain(|&e| e != id);
                trace_state!("{} no longer ear", ring.vertex(id));
            } else if !was_ear && is_ear {
                self.ears.push_front(id);
                trace_state!("{} now ear", ring.vertex(id));
            }
        }
    }

    /// Takes the ear at the front of the queue.
    pub fn pop_ear(&mut self) -> Option<SlotId> {
        self.ears.pop_front()
    }

    /// Drops `id` from every set, after it has been removed from the ring.
    pub fn forget(&mut self, id: SlotId) {
        self.convex.remove(&id);
        self.reflex.remove(&id);
        self.ears.retain(|&e| e != id);
    }

    /// Returns `true` if `id` is classified convex.
    pub fn is_convex(&self, id: SlotId) -> bool {
        self.convex.contains(&id)
    }

    /// Returns `true` if `id` is classified reflex.
    pub fn is_reflex(&self, id: SlotId) -> bool {
        self.reflex.contains(&id)
    }

    /// Returns `true` if `id` is queued as an ear.
    pub fn is_queued_ear(&self, id: SlotId) -> bool {
        self.ears.contains(&id)
    }

    /// Convex slots in slot order.
    pub fn convex(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.convex.iter().copied()
    }

    /// Reflex slots in slot order.
    pub fn reflex(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.reflex.iter().copied()
    }

    /// Ear slots in queue order.
    pub fn ears(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.ears.iter().copied()
    }

    /// Number of queued ears.
    pub fn ear_count(&self) -> usize {
        self.ears.len()
    }

    /// Checks the partition invariants against `ring`.
    pub fn check_invariants(&self, ring: &PolygonRing) -> bool {
        let partitioned = ring
            .iter()
            .all(|id| self.convex.contains(&id) != self.reflex.contains(&id));
        let no_strays = self.convex.len() + self.reflex.len() == ring.len();
        let ears_convex = self.ears.iter().all(|id| self.convex.contains(id));
        partitioned && no_strays && ears_convex
    }
}

/// Returns `true` if the vertex in slot `id` is convex with respect to its
/// current ring neighbours.
pub fn is_convex(ring: &PolygonRing, id: SlotId) -> bool {
    let p = ring.position(ring.prev(id));
    let c = ring.position(id);
    let n = ring.position(ring.next(id));
    turn_is_convex(p, c, n)
}

/// Convexity of the corner `p → c → n`.
pub fn turn_is_convex(p: Vec2, c: Vec2, n: Vec2) -> bool {
    let d1 = (c - p).normalize_or_zero();
    let d2 = (n - c).normalize_or_zero();
    let normal = Vec2::new(-d2.y, d2.x);
    d1.dot(normal) <= 0.0
}
