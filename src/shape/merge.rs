//! Combining two placed shapes into one
//!
//! The caller owns both shapes and decides when they merge; nothing here
//! reaches into global state.

use glam::{I64Vec2, IVec2};

use crate::errors::{GeometryError, ShapeError};
use crate::raster::Bounds;
use crate::types::{EdgeClass, Offset};

use super::{Edge, Shape};

/// Two shapes at absolute grid positions that should become one
#[derive(Debug, Clone, Copy)]
pub struct MergeRequest<'a> {
    pub base: &'a Shape,
    pub base_origin: Offset,
    pub other: &'a Shape,
    pub other_origin: Offset,
}

impl<'a> MergeRequest<'a> {
    pub fn new(
        base: &'a Shape,
        base_origin: Offset,
        other: &'a Shape,
        other_origin: Offset,
    ) -> Self {
        Self {
            base,
            base_origin,
            other,
            other_origin,
        }
    }

    /// Build the unified shape, expressed in the base shape's frame.
    ///
    /// Authored and already-suppressed edge classes carry over. Conductive
    /// edges on the new seam become interior, and sticky edges that now face
    /// each other are suppressed in pairs. Overlapping cells are rejected, as
    /// are placements whose shifted offsets leave the `i32` grid.
    pub fn merge(&self) -> Result<Shape, ShapeError> {
        let shift = self.other_origin.as_i64vec2() - self.base_origin.as_i64vec2();
        crate::log::debug!(
            base = self.base.len(),
            other = self.other.len(),
            shift_x = shift.x,
            shift_y = shift.y,
            "merging shapes"
        );

        let overflow = GeometryError::ExtentOverflow {
            max_cells: Bounds::MAX_CELLS,
        };
        let offsets = self
            .base
            .offsets()
            .map(Some)
            .chain(self.other.offsets().map(|o| shifted(o, shift)))
            .collect::<Option<Vec<_>>>()
            .ok_or(overflow.clone())?;
        let overrides = carried_edges(self.base, I64Vec2::ZERO)
            .chain(carried_edges(self.other, shift))
            .collect::<Option<Vec<_>>>()
            .ok_or(overflow)?;

        let merged = Shape::new(offsets, overrides)?;
        Ok(merged.with_temperature(self.base.temperature()))
    }
}

/// `offset + shift`, or `None` when the result has no `i32` coordinate
fn shifted(offset: Offset, shift: I64Vec2) -> Option<Offset> {
    let moved = offset.as_i64vec2() + shift;
    Some(IVec2::new(
        i32::try_from(moved.x).ok()?,
        i32::try_from(moved.y).ok()?,
    ))
}

/// Every non-default edge of `shape`, moved by `shift`
fn carried_edges(shape: &Shape, shift: I64Vec2) -> impl Iterator<Item = Option<Edge>> + '_ {
    shape
        .all_edges()
        .filter(|edge| edge.class != EdgeClass::Conductive)
        .map(move |edge| {
            Some(Edge {
                position: shifted(edge.position, shift)?,
                ..*edge
            })
        })
}
