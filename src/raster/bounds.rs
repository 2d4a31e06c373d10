//! Bounding box of a shape's cells and the sprite pivot derived from it

use glam::{IVec2, UVec2, Vec2, ivec2};

use crate::errors::GeometryError;
use crate::types::Offset;

/// Minimal axis-aligned box covering a set of offsets, in grid cells (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Bottom-left cell
    pub min: IVec2,
    /// Top-right cell
    pub max: IVec2,
}

impl Bounds {
    /// Widest box, in cells per axis, that a shape may span
    pub const MAX_CELLS: u32 = 4096;

    /// Fails on an empty list, on a box wider than [`Bounds::MAX_CELLS`], and
    /// on offsets at `i32::MIN` or `i32::MAX`, whose neighbors have no grid
    /// coordinate.
    pub fn from_offsets<I>(offsets: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Offset>,
    {
        let mut iter = offsets.into_iter();
        let first = iter.next().ok_or(GeometryError::EmptyShape)?;
        let (min, max) = iter.fold((first, first), |(min, max), o| (min.min(o), max.max(o)));

        let overflow = GeometryError::ExtentOverflow {
            max_cells: Self::MAX_CELLS,
        };
        if min.min_element() == i32::MIN || max.max_element() == i32::MAX {
            return Err(overflow);
        }
        let span = max.as_i64vec2() - min.as_i64vec2() + 1;
        if span.max_element() > i64::from(Self::MAX_CELLS) {
            return Err(overflow);
        }
        Ok(Self { min, max })
    }

    /// Width and height in cells
    #[inline]
    pub fn cells(&self) -> IVec2 {
        self.max - self.min + ivec2(1, 1)
    }

    /// Texture size in pixels at `cell_size` pixels per cell
    pub fn pixel_size(&self, cell_size: u32) -> UVec2 {
        self.cells().as_uvec2() * cell_size
    }

    /// Pixel coordinate of the bottom-left corner of the cell at `offset`
    #[inline]
    pub fn cell_origin(&self, offset: Offset, cell_size: u32) -> IVec2 {
        (offset - self.min) * cell_size as i32
    }

    /// Normalized anchor mapping grid offset (0, 0) to a fixed spot in the texture.
    ///
    /// Lies in [0, 1] on each axis whenever the box spans the origin cell.
    pub fn pivot(&self) -> Vec2 {
        let cells = self.cells().as_vec2();
        -self.min.as_vec2() / cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_offsets_have_no_bounds() {
        assert_eq!(
            Bounds::from_offsets(std::iter::empty()),
            Err(GeometryError::EmptyShape)
        );
    }

    #[test]
    fn bounds_cover_negative_offsets() {
        let b = Bounds::from_offsets([ivec2(0, 0), ivec2(-2, 1), ivec2(1, -3)]).unwrap();
        assert_eq!(b.min, ivec2(-2, -3));
        assert_eq!(b.max, ivec2(1, 1));
        assert_eq!(b.cells(), ivec2(4, 5));
        assert_eq!(b.pixel_size(8), UVec2::new(32, 40));
        assert_eq!(b.cell_origin(ivec2(0, 0), 8), ivec2(16, 24));
    }

    #[test]
    fn offsets_at_the_i32_limits_are_rejected() {
        let overflow = Err(GeometryError::ExtentOverflow {
            max_cells: Bounds::MAX_CELLS,
        });
        assert_eq!(Bounds::from_offsets([ivec2(i32::MAX, 0)]), overflow);
        assert_eq!(Bounds::from_offsets([ivec2(0, i32::MIN)]), overflow);
        let wide = [ivec2(i32::MIN + 1, 0), ivec2(i32::MAX - 1, 0)];
        assert_eq!(Bounds::from_offsets(wide), overflow);
    }

    #[test]
    fn extent_is_capped_per_axis() {
        let widest = Bounds::MAX_CELLS as i32 - 1;
        let b = Bounds::from_offsets([ivec2(0, 0), ivec2(widest, 0)]).unwrap();
        assert_eq!(b.cells().x as u32, Bounds::MAX_CELLS);
        assert!(Bounds::from_offsets([ivec2(0, 0), ivec2(0, widest + 1)]).is_err());

        // far from the origin is fine as long as the box stays small
        let b = Bounds::from_offsets([ivec2(i32::MAX - 1, i32::MIN + 1)]).unwrap();
        assert_eq!(b.cells(), ivec2(1, 1));
    }

    #[test]
    fn pivot_of_centered_row() {
        let b = Bounds::from_offsets([ivec2(-1, 0), ivec2(0, 0), ivec2(1, 0)]).unwrap();
        let pivot = b.pivot();
        assert!((pivot.x - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(pivot.y, 0.0);
    }

    #[test]
    fn pivot_of_single_cell_is_bottom_left() {
        let b = Bounds::from_offsets([ivec2(0, 0)]).unwrap();
        assert_eq!(b.pivot(), Vec2::ZERO);
    }
}
