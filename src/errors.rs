//! Error types with diagnostics using miette
//!
//! Everything here is detected up front, at shape construction, merge, or
//! config validation. Nothing is retried internally.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Direction;

// ============================================================================
// Validation Errors
// ============================================================================

/// Errors in the construction data of a shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate cell at offset ({x}, {y})")]
    #[diagnostic(
        code(polycrate::validation::duplicate_cell),
        help("each offset may appear only once in a shape")
    )]
    DuplicateCell { x: i32, y: i32 },

    #[error("override references unknown offset ({x}, {y}) facing {direction}")]
    #[diagnostic(
        code(polycrate::validation::unknown_offset),
        help("edge overrides must target a cell listed in the shape's offsets")
    )]
    UnknownOffset { x: i32, y: i32, direction: Direction },

    #[error("edge at ({x}, {y}) facing {direction} is overridden more than once")]
    #[diagnostic(code(polycrate::validation::duplicate_override))]
    DuplicateOverride { x: i32, y: i32, direction: Direction },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors computing shape geometry
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("shape has no cells")]
    #[diagnostic(
        code(polycrate::geometry::empty_shape),
        help("a bounding box is undefined for an empty offset list")
    )]
    EmptyShape,

    #[error("shape extent does not fit the raster grid")]
    #[diagnostic(
        code(polycrate::geometry::extent_overflow),
        help(
            "offsets must span at most {max_cells} cells per axis and stay strictly \
             inside the i32 range"
        )
    )]
    ExtentOverflow { max_cells: u32 },
}

// ============================================================================
// Config Errors
// ============================================================================

/// Errors validating a [`RasterConfig`](crate::raster::RasterConfig)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    #[diagnostic(code(polycrate::config::zero_cell_size))]
    ZeroCellSize,

    #[error("invalid border size {border} for cell size {cell}")]
    #[diagnostic(
        code(polycrate::config::invalid_border_size),
        help("border size must be at least 1 and at most half the cell size")
    )]
    InvalidBorderSize { border: u32, cell: u32 },

    #[error("cell size {cell} exceeds the maximum of {max}")]
    #[diagnostic(code(polycrate::config::cell_size_too_large))]
    CellSizeTooLarge { cell: u32, max: u32 },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Anything that can go wrong building or merging a shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),
}
