//! Grid primitives shared by shapes and the rasterizer.
//!
//! Grid convention: +x is Right, +y is Up.

use std::fmt;

use glam::IVec2;

/// Integer grid coordinate relative to a shape's origin. May be negative.
pub type Offset = IVec2;

/// Cardinal direction of a unit edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order edges are visited during derivation
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Slot of this direction in a unit's fixed edge array
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Unit step on the grid
    #[inline]
    pub const fn offset(self) -> Offset {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Up and Down edges are drawn as horizontal bands, Left and Right as vertical ones.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.pad(name)
    }
}

/// Diagonal direction, used when probing for concave outline corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Diagonal {
    pub const ALL: [Diagonal; 4] = [
        Diagonal::UpRight,
        Diagonal::UpLeft,
        Diagonal::DownRight,
        Diagonal::DownLeft,
    ];

    /// Sign of each axis component
    #[inline]
    pub const fn step(self) -> IVec2 {
        match self {
            Diagonal::UpRight => IVec2::new(1, 1),
            Diagonal::UpLeft => IVec2::new(-1, 1),
            Diagonal::DownRight => IVec2::new(1, -1),
            Diagonal::DownLeft => IVec2::new(-1, -1),
        }
    }
}

/// Classification of a unit edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeClass {
    /// Default class; exterior edges conduct, interior ones get suppressed
    #[default]
    Conductive,
    /// Authored connector; survives contact with a neighbor until paired
    Sticky,
    /// Invisible edge, never part of the boundary
    Suppressed,
}

/// Temperature tag carried through a shape untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Temperature(pub i32);

impl Temperature {
    /// Total heat of `cells` cells at this temperature
    #[inline]
    pub fn heat(self, cells: usize) -> i64 {
        i64::from(self.0) * cells as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.offset() + dir.opposite().offset(), IVec2::ZERO);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn direction_slots_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            assert!(!seen[dir.index()]);
            seen[dir.index()] = true;
        }
    }

    #[test]
    fn heat_scales_with_cell_count() {
        assert_eq!(Temperature(-3).heat(4), -12);
        assert_eq!(Temperature::default().heat(10), 0);
    }
}
