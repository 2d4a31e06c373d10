//! RGBA pixel storage
//!
//! Row 0 is the bottom of the texture and y grows upward, matching the grid.

use glam::{IVec2, UVec2};

/// A straight-alpha RGBA8 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }

    /// True for any pixel that has been drawn on
    #[inline]
    pub const fn is_covered(self) -> bool {
        self.alpha() != 0
    }
}

/// A width × height grid of pixels, starting fully transparent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(size: UVec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
            pixels: vec![Rgba::TRANSPARENT; size.x as usize * size.y as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at (x, y), or `None` outside the buffer
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Out-of-bounds reads count as uncovered
    #[inline]
    pub fn is_covered(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Rgba::is_covered)
    }

    /// Write one pixel; writes outside the buffer are dropped
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Paint the `size` rectangle whose bottom-left corner is `min`, clipped
    /// to the buffer.
    pub fn fill_rect(&mut self, min: IVec2, size: UVec2, color: Rgba) {
        let x0 = min.x.max(0);
        let y0 = min.y.max(0);
        let x1 = (min.x + size.x as i32).min(self.width as i32);
        let y1 = (min.y + size.y as i32).min(self.height as i32);
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                self.pixels[row + x as usize] = color;
            }
        }
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Number of covered pixels
    pub fn covered_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_covered()).count()
    }

    /// Flat RGBA8 bytes, bottom row first
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.0).collect()
    }

    /// `#` for covered and `.` for empty pixels, top row first
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                out.push(if self.is_covered(x, y) { '#' } else { '.' });
            }
            if y > 0 {
                out.push('\n');
            }
        }
        out
    }
}
