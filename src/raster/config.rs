//! Rasterization settings

use crate::errors::ConfigError;

use super::buffer::Rgba;
use super::defaults;

/// Pixel scale and color used when turning a shape into sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterConfig {
    cell_size: u32,
    border_size: u32,
    foreground: Rgba,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            cell_size: defaults::CELL_SIZE,
            border_size: defaults::BORDER_SIZE,
            foreground: defaults::FOREGROUND,
        }
    }
}

impl RasterConfig {
    /// Create a config with validation.
    ///
    /// The border must be at least one pixel and fit twice inside a cell, so
    /// opposite bands of one cell never overlap.
    pub fn try_new(cell_size: u32, border_size: u32) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if cell_size > defaults::MAX_CELL_SIZE {
            return Err(ConfigError::CellSizeTooLarge {
                cell: cell_size,
                max: defaults::MAX_CELL_SIZE,
            });
        }
        if border_size == 0 || border_size.saturating_mul(2) > cell_size {
            return Err(ConfigError::InvalidBorderSize {
                border: border_size,
                cell: cell_size,
            });
        }
        Ok(Self {
            cell_size,
            border_size,
            foreground: defaults::FOREGROUND,
        })
    }

    pub fn with_foreground(mut self, foreground: Rgba) -> Self {
        self.foreground = foreground;
        self
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[inline]
    pub fn border_size(&self) -> u32 {
        self.border_size
    }

    #[inline]
    pub fn foreground(&self) -> Rgba {
        self.foreground
    }
}
