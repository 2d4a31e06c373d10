//! Mutual suppression of sticky edges that face each other
//!
//! A sticky connector only means something while it is exposed to open
//! space. Once two of them touch across a seam, both turn invisible. The
//! transition is one-way: a suppressed edge never becomes sticky again.

use std::collections::HashSet;

use crate::types::EdgeClass;

use super::{EdgeId, Shape};

impl Shape {
    /// Suppress every pair of facing sticky edges and drop them from the
    /// boundary. Returns the number of pairs found.
    ///
    /// Pairings are tracked per edge, so one cell can pair on several sides
    /// in the same pass. Running this again finds nothing new.
    pub fn suppress_sticky_pairs(&mut self) -> usize {
        let mut paired: HashSet<EdgeId> = HashSet::new();

        for (&position, unit) in &self.units {
            for (dir, id) in unit.edges() {
                let Some(neighbor) = self.units.get(&(position + dir.offset())) else {
                    continue;
                };
                let facing = neighbor.edge(dir.opposite());
                if self.edges.get(id).class != EdgeClass::Sticky
                    || self.edges.get(facing).class != EdgeClass::Sticky
                {
                    continue;
                }
                self.edges.get_mut(id).class = EdgeClass::Suppressed;
                self.edges.get_mut(facing).class = EdgeClass::Suppressed;
                paired.insert(id);
                paired.insert(facing);
            }
        }

        if paired.is_empty() {
            return 0;
        }
        self.boundary.retain(|id| !paired.contains(id));

        let pairs = paired.len() / 2;
        crate::log::debug!(pairs, boundary = self.boundary.len(), "suppressed sticky pairs");
        pairs
    }
}
