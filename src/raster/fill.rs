//! Solid background sprite: one filled square per cell

use glam::UVec2;

use crate::types::Offset;

use super::bounds::Bounds;
use super::buffer::PixelBuffer;
use super::config::RasterConfig;

pub fn rasterize_fill<I>(offsets: I, bounds: &Bounds, config: &RasterConfig) -> PixelBuffer
where
    I: IntoIterator<Item = Offset>,
{
    let cell = config.cell_size();
    let mut buf = PixelBuffer::new(bounds.pixel_size(cell));
    for offset in offsets {
        buf.fill_rect(bounds.cell_origin(offset, cell), UVec2::splat(cell), config.foreground());
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    #[test]
    fn covers_exactly_the_cells() {
        let cells = [ivec2(0, 0), ivec2(-1, 0), ivec2(0, 1)];
        let bounds = Bounds::from_offsets(cells).unwrap();
        let config = RasterConfig::try_new(4, 1).unwrap();
        let buf = rasterize_fill(cells, &bounds, &config);

        assert_eq!(buf.size(), glam::uvec2(8, 8));
        assert_eq!(buf.covered_count(), 3 * 16);
        // the missing (-1, 1) cell stays clear
        assert!(!buf.is_covered(0, 7));
        assert!(buf.is_covered(4, 7));
    }
}
