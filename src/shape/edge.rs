//! Unit edges and the arena that owns them.
//!
//! A shape's units and its boundary list both refer to edges by [`EdgeId`],
//! so a class change made through one is seen through the other.

use crate::types::{Direction, EdgeClass, Offset};

/// One boundary segment of a unit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub position: Offset,
    pub direction: Direction,
    pub class: EdgeClass,
}

impl Edge {
    pub fn new(position: Offset, direction: Direction, class: EdgeClass) -> Self {
        Self {
            position,
            direction,
            class,
        }
    }

    /// A default (conductive) edge
    pub fn conductive(position: Offset, direction: Direction) -> Self {
        Self::new(position, direction, EdgeClass::Conductive)
    }

    /// Convenience for authoring sticky overrides
    pub fn sticky(position: Offset, direction: Direction) -> Self {
        Self::new(position, direction, EdgeClass::Sticky)
    }

    /// Position of the cell on the other side of this edge
    #[inline]
    pub fn facing(&self) -> Offset {
        self.position + self.direction.offset()
    }

    /// True if `other` sits on the far side of this edge looking back at it
    pub fn is_opposite_adjacent(&self, other: &Edge) -> bool {
        self.facing() == other.position && other.direction == self.direction.opposite()
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.class == EdgeClass::Suppressed
    }
}

/// Index of an edge inside an [`EdgeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u32);

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Flat storage for every edge of a shape
#[derive(Debug, Clone, Default)]
pub struct EdgeArena {
    edges: Vec<Edge>,
}

impl EdgeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Store `edge` and return its id.
    ///
    /// Ids are `u32`. A shape holds at most `4 * Bounds::MAX_CELLS²` edges,
    /// far below `u32::MAX`, so the arenas built by [`Shape`](super::Shape)
    /// never run out.
    pub fn alloc(&mut self, edge: Edge) -> EdgeId {
        debug_assert!(u32::try_from(self.edges.len()).is_ok(), "edge arena is full");
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(edge);
        id
    }

    #[inline]
    pub fn get(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.index()]
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId(i as u32), edge))
    }
}
