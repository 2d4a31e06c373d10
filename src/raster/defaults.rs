//! Default sprite sizes and colors (in pixels)

use super::buffer::Rgba;

/// Pixels per grid cell
pub const CELL_SIZE: u32 = 32;
/// Largest accepted cell size
pub const MAX_CELL_SIZE: u32 = 4096;
/// Thickness of an outline band
pub const BORDER_SIZE: u32 = 2;
/// Color of covered pixels; tinting happens downstream
pub const FOREGROUND: Rgba = Rgba::WHITE;
