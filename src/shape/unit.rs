//! A single grid cell of a shape

use crate::types::{Direction, Offset};

use super::edge::EdgeId;

/// One cell of a shape, owning exactly one edge per direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub position: Offset,
    edges: [EdgeId; 4],
}

impl Unit {
    /// `edges` is indexed by [`Direction::index`]
    pub(crate) fn new(position: Offset, edges: [EdgeId; 4]) -> Self {
        Self { position, edges }
    }

    #[inline]
    pub fn edge(&self, direction: Direction) -> EdgeId {
        self.edges[direction.index()]
    }

    /// Edge ids paired with their direction, in [`Direction::ALL`] order
    pub fn edges(&self) -> impl Iterator<Item = (Direction, EdgeId)> + '_ {
        Direction::ALL.into_iter().map(|dir| (dir, self.edge(dir)))
    }
}
