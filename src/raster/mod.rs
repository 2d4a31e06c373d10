//! Pixel sprites for shapes
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and colors
//! - `config`: RasterConfig, validated pixel scale
//! - `bounds`: Grid bounding box and sprite pivot
//! - `buffer`: Rgba and PixelBuffer
//! - `fill`: Background sprite
//! - `outline`: Border sprite
//! - `corner`: Concave corner repair on the border sprite

pub mod bounds;
pub mod buffer;
pub mod config;
pub mod corner;
pub mod defaults;
pub mod fill;
pub mod outline;

pub use bounds::Bounds;
pub use buffer::{PixelBuffer, Rgba};
pub use config::RasterConfig;
pub use corner::repair_corners;
pub use fill::rasterize_fill;
pub use outline::{draw_edge, rasterize_outline};

use glam::Vec2;

use crate::shape::Shape;

/// Both sprites of a shape, sharing size and pivot
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub bounds: Bounds,
    pub fill: PixelBuffer,
    pub outline: PixelBuffer,
}

impl Raster {
    pub const FILL_NAME: &'static str = "background";
    pub const OUTLINE_NAME: &'static str = "borders";

    /// Normalized anchor of grid offset (0, 0) in both sprites
    pub fn pivot(&self) -> Vec2 {
        self.bounds.pivot()
    }
}

/// Rasterize a shape's fill and outline.
///
/// Infallible: a constructed shape always has a non-empty bounding box.
pub fn rasterize(shape: &Shape, config: &RasterConfig) -> Raster {
    let bounds = *shape.bounds();
    let fill = rasterize_fill(shape.offsets(), &bounds, config);
    let outline = rasterize_outline(shape.boundary_edges(), &fill, &bounds, config);
    crate::log::debug!(
        width = fill.width(),
        height = fill.height(),
        edges = shape.boundary_ids().len(),
        "rasterized shape"
    );
    Raster {
        bounds,
        fill,
        outline,
    }
}
