//! Polyomino shapes built from unit grid cells
//!
//! This module is organized into submodules:
//! - `edge`: Edge descriptors and the arena that owns them
//! - `unit`: Unit, one cell with four edges
//! - `sticky`: suppression of facing sticky edge pairs
//! - `merge`: combining two placed shapes into one

pub mod edge;
pub mod merge;
pub mod sticky;
pub mod unit;

pub use edge::{Edge, EdgeArena, EdgeId};
pub use merge::MergeRequest;
pub use unit::Unit;

use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::errors::{ShapeError, ValidationError};
use crate::raster::Bounds;
use crate::types::{Direction, EdgeClass, Offset, Temperature};

/// Level data a shape is built from
#[derive(Debug, Clone, Default)]
pub struct ShapeData {
    /// Cell offsets in authoring order
    pub offsets: Vec<Offset>,
    /// Edges whose class is fixed by the author
    pub overrides: Vec<Edge>,
    pub temperature: Temperature,
}

/// A set of cells together with their classified edges.
///
/// Units are kept in construction order; that order drives bounds and
/// texture generation. `boundary` holds ids into the same arena the units
/// point at, so there is exactly one copy of every edge.
#[derive(Debug, Clone)]
pub struct Shape {
    units: IndexMap<Offset, Unit>,
    edges: EdgeArena,
    boundary: Vec<EdgeId>,
    bounds: Bounds,
    temperature: Temperature,
}

impl Shape {
    /// Build a shape and derive its boundary.
    ///
    /// Fails on duplicate offsets, on overrides that name a missing cell or
    /// the same edge twice, on an empty offset list, and on offsets whose
    /// box [`Bounds::from_offsets`] rejects.
    pub fn new<O, E>(offsets: O, overrides: E) -> Result<Self, ShapeError>
    where
        O: IntoIterator<Item = Offset>,
        E: IntoIterator<Item = Edge>,
    {
        let mut classes: IndexMap<Offset, [EdgeClass; 4]> = IndexMap::new();
        for offset in offsets {
            match classes.entry(offset) {
                Entry::Occupied(_) => {
                    return Err(ValidationError::DuplicateCell {
                        x: offset.x,
                        y: offset.y,
                    }
                    .into());
                }
                Entry::Vacant(slot) => {
                    slot.insert([EdgeClass::Conductive; 4]);
                }
            }
        }

        let mut overridden = HashSet::new();
        for edge in overrides {
            let Some(slots) = classes.get_mut(&edge.position) else {
                return Err(ValidationError::UnknownOffset {
                    x: edge.position.x,
                    y: edge.position.y,
                    direction: edge.direction,
                }
                .into());
            };
            if !overridden.insert((edge.position, edge.direction)) {
                return Err(ValidationError::DuplicateOverride {
                    x: edge.position.x,
                    y: edge.position.y,
                    direction: edge.direction,
                }
                .into());
            }
            slots[edge.direction.index()] = edge.class;
        }

        let bounds = Bounds::from_offsets(classes.keys().copied())?;

        let mut edges = EdgeArena::with_capacity(classes.len() * 4);
        let units: IndexMap<Offset, Unit> = classes
            .iter()
            .map(|(&position, slots)| {
                let ids = Direction::ALL
                    .map(|dir| edges.alloc(Edge::new(position, dir, slots[dir.index()])));
                (position, Unit::new(position, ids))
            })
            .collect();

        let boundary = derive_boundary(&units, &mut edges);

        let mut shape = Self {
            units,
            edges,
            boundary,
            bounds,
            temperature: Temperature::default(),
        };
        shape.suppress_sticky_pairs();

        crate::log::debug!(
            cells = shape.units.len(),
            overrides = overridden.len(),
            boundary = shape.boundary.len(),
            "built shape"
        );
        Ok(shape)
    }

    /// Build a shape from level data, carrying its temperature tag
    pub fn from_data(data: &ShapeData) -> Result<Self, ShapeError> {
        let shape = Self::new(data.offsets.iter().copied(), data.overrides.iter().copied())?;
        Ok(shape.with_temperature(data.temperature))
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cell offsets in construction order
    pub fn offsets(&self) -> impl ExactSizeIterator<Item = Offset> + '_ {
        self.units.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the shape has no cells; false for every constructed shape
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, offset: Offset) -> bool {
        self.units.contains_key(&offset)
    }

    pub fn unit(&self, offset: Offset) -> Option<&Unit> {
        self.units.get(&offset)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.edges.get(id)
    }

    /// The edge of the cell at `offset` facing `direction`
    pub fn edge_at(&self, offset: Offset, direction: Direction) -> Option<&Edge> {
        self.unit(offset).map(|unit| self.edge(unit.edge(direction)))
    }

    /// Every edge of every unit, boundary or not
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().map(|(_, edge)| edge)
    }

    /// Ids of the visible edges
    pub fn boundary_ids(&self) -> &[EdgeId] {
        &self.boundary
    }

    /// Visible edges, in derivation order
    pub fn boundary_edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.boundary.iter().map(|&id| self.edges.get(id))
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.temperature = temperature;
    }

    /// Temperature weighted by cell count
    pub fn heat(&self) -> i64 {
        self.temperature.heat(self.len())
    }

    /// Absolute grid cells occupied when the shape sits at `origin`
    pub fn cells_at(&self, origin: Offset) -> impl Iterator<Item = Offset> + '_ {
        self.offsets().map(move |offset| origin + offset)
    }
}

/// Classify every conductive edge as interior or exterior and collect the
/// visible ones.
///
/// Non-conductive edges were fixed by an override and are kept as authored:
/// sticky ones join the boundary even when a neighbor covers them.
fn derive_boundary(units: &IndexMap<Offset, Unit>, edges: &mut EdgeArena) -> Vec<EdgeId> {
    let mut boundary = Vec::new();
    for (&position, unit) in units {
        for (dir, id) in unit.edges() {
            let edge = edges.get_mut(id);
            match edge.class {
                EdgeClass::Conductive if units.contains_key(&(position + dir.offset())) => {
                    edge.class = EdgeClass::Suppressed;
                }
                EdgeClass::Conductive | EdgeClass::Sticky => boundary.push(id),
                EdgeClass::Suppressed => {}
            }
        }
    }
    boundary
}
