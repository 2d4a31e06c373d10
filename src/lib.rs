//! Boundary classification and sprite rasterization for polyomino crates.
//!
//! A [`Shape`] is built from unit cell offsets plus optional authored edge
//! classes. Construction classifies every cell edge as conductive, sticky or
//! suppressed and keeps the visible ones as the boundary list. [`rasterize`]
//! turns a shape into a filled background sprite and an outline sprite with
//! concave corners repaired.
//!
//! ```
//! use glam::ivec2;
//! use polycrate::{RasterConfig, Shape, rasterize};
//!
//! let shape = Shape::new([ivec2(0, 0), ivec2(1, 0)], []).unwrap();
//! assert_eq!(shape.boundary_edges().len(), 6);
//!
//! let raster = rasterize(&shape, &RasterConfig::try_new(8, 1).unwrap());
//! assert_eq!(raster.fill.covered_count(), 2 * 8 * 8);
//! ```

pub mod errors;
pub mod log;
pub mod raster;
pub mod shape;
pub mod types;

pub use errors::{ConfigError, GeometryError, ShapeError, ValidationError};
pub use raster::{Bounds, PixelBuffer, Raster, RasterConfig, Rgba, rasterize};
pub use shape::{Edge, EdgeId, MergeRequest, Shape, ShapeData, Unit};
pub use types::{Diagonal, Direction, EdgeClass, Offset, Temperature};

/// Build a shape from level data and rasterize it in one step.
pub fn render_shape(
    data: &ShapeData,
    config: &RasterConfig,
) -> Result<(Shape, Raster), ShapeError> {
    let shape = Shape::from_data(data)?;
    let raster = rasterize(&shape, config);
    Ok((shape, raster))
}
