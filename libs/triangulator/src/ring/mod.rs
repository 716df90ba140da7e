//! # Polygon Ring
//!
//! A cyclic sequence of vertices stored as an arena of slots with explicit
//! `prev`/`next` links. Slot ids stay valid for the life of the ring: removal
//! unlinks a slot and tombstones it instead of shifting anything, and
//! insertion appends a new slot.
//!
//! ```text
//!   slots:  [0] ⇄ [1] ⇄ [2] ⇄ [3]      insert_after(1, v)  →  [0] ⇄ [1] ⇄ [4] ⇄ [2] ⇄ [3]
//!            ↑_________________↑
//! ```
//!
//! Neighbour lookup, insertion after a slot and removal of a slot are O(1).
//! Looking a vertex up by value is a linear scan.

use crate::core::vec2::Vec2;
use crate::core::vertex::Vertex;

/// Stable handle to a vertex slot in a [`PolygonRing`].
pub type SlotId = usize;

#[derive(Debug, Clone, Copy)]
struct Slot {
    vertex: Vertex,
    prev: SlotId,
    next: SlotId,
    live: bool,
}

/// Closed loop of vertices with O(1) neighbour access.
#[derive(Debug, Clone, Default)]
pub struct PolygonRing {
    slots: Vec<Slot>,
    head: Option<SlotId>,
    len: usize,
}

impl PolygonRing {
    /// Creates an empty ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ring whose vertex `i` has position `positions[i]` and index
    /// `i`. Slot ids equal the input positions.
    pub fn from_positions(positions: &[Vec2]) -> Self {
        Self::from_vertices(
            positions
                .iter()
                .enumerate()
                .map(|(index, &position)| Vertex::new(position, index)),
        )
    }

    /// Builds a ring from vertices in order. Slot ids follow iteration order.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut ring = Self::new();
        for vertex in vertices {
            ring.push_back(vertex);
        }
        ring
    }

    /// Number of live vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First slot in iteration order.
    pub fn head(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns `true` if `id` names a slot that has not been removed.
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.get(id).is_some_and(|slot| slot.live)
    }

    /// Number of slots ever allocated, live or removed.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The vertex stored in slot `id`.
    ///
    /// # Panics
    /// If `id` was never allocated.
    pub fn vertex(&self, id: SlotId) -> Vertex {
        self.slots[id].vertex
    }

    /// Position of the vertex in slot `id`.
    pub fn position(&self, id: SlotId) -> Vec2 {
        self.slots[id].vertex.position
    }

    /// Successor of `id`.
    pub fn next(&self, id: SlotId) -> SlotId {
        self.slots[id].next
    }

    /// Predecessor of `id`.
    pub fn prev(&self, id: SlotId) -> SlotId {
        self.slots[id].prev
    }

    /// Appends `vertex` just before the head, i.e. at the end of the cycle.
    pub fn push_back(&mut self, vertex: Vertex) -> SlotId {
        match self.head {
            Some(head) => {
                let tail = self.slots[head].prev;
                self.insert_after(tail, vertex)
            }
            None => {
                let id = self.slots.len();
                self.slots.push(Slot {
                    vertex,
                    prev: id,
                    next: id,
                    live: true,
                });
                self.head = Some(id);
                self.len = 1;
                id
            }
        }
    }

    /// Inserts `vertex` immediately after `after` and returns its slot.
    pub fn insert_after(&mut self, after: SlotId, vertex: Vertex) -> SlotId {
        debug_assert!(self.contains(after), "insert after removed slot {after}");
        let id = self.slots.len();
        let next = self.slots[after].next;
        self.slots.push(Slot {
            vertex,
            prev: after,
            next,
            live: true,
        });
        self.slots[after].next = id;
        self.slots[next].prev = id;
        self.len += 1;
        id
    }

    /// Unlinks slot `id` and returns its vertex. The slot id is never reused.
    pub fn remove(&mut self, id: SlotId) -> Vertex {
        debug_assert!(self.contains(id), "slot {id} removed twice");
        let Slot {
            vertex, prev, next, ..
        } = self.slots[id];

        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.slots[id].live = false;
        self.len -= 1;

        if self.head == Some(id) {
            self.head = (self.len > 0).then_some(next);
        }
        vertex
    }

    /// Slot holding a vertex equal to `vertex`, if any.
    pub fn position_of(&self, vertex: &Vertex) -> Option<SlotId> {
        self.iter().find(|&id| self.slots[id].vertex == *vertex)
    }

    /// Live slot ids in cyclic order starting at the head.
    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Live vertices in cyclic order starting at the head.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.iter().map(|id| self.vertex(id)).collect()
    }

    /// Live positions in cyclic order starting at the head.
    pub fn positions(&self) -> Vec<Vec2> {
        self.iter().map(|id| self.position(id)).collect()
    }

    /// Consecutive `(slot, successor)` pairs covering every edge once.
    pub fn edges(&self) -> impl Iterator<Item = (SlotId, SlotId)> + '_ {
        self.iter().map(move |id| (id, self.next(id)))
    }
}

/// Iterator over the live slots of a [`PolygonRing`].
#[derive(Debug, Clone)]
pub struct RingIter<'a> {
    ring: &'a PolygonRing,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl Iterator for RingIter<'_> {
    type Item = SlotId;

    fn next(&mut self) -> Option<SlotId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.remaining -= 1;
        self.cursor = Some(self.ring.next(id));
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingIter<'_> {}
