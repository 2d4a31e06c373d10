//! Border sprite: a thin band along every boundary edge

use glam::{IVec2, UVec2, ivec2, uvec2};

use crate::shape::Edge;
use crate::types::Direction;

use super::bounds::Bounds;
use super::buffer::PixelBuffer;
use super::config::RasterConfig;
use super::corner::repair_corners;

/// Draw every edge, then close the notches at concave corners that lie
/// inside `fill`
pub fn rasterize_outline<'a, I>(
    edges: I,
    fill: &PixelBuffer,
    bounds: &Bounds,
    config: &RasterConfig,
) -> PixelBuffer
where
    I: IntoIterator<Item = &'a Edge>,
{
    let mut buf = PixelBuffer::new(bounds.pixel_size(config.cell_size()));
    for edge in edges {
        draw_edge(&mut buf, edge, bounds, config);
    }
    repair_corners(&mut buf, fill, config.border_size(), config.foreground());
    buf
}

/// Paint the band for one edge. Bands lie inside the owning cell and span
/// its full side: horizontal for Up/Down, vertical for Left/Right.
pub fn draw_edge(buf: &mut PixelBuffer, edge: &Edge, bounds: &Bounds, config: &RasterConfig) {
    let (min, size) = band(edge, bounds, config);
    buf.fill_rect(min, size, config.foreground());
}

fn band(edge: &Edge, bounds: &Bounds, config: &RasterConfig) -> (IVec2, UVec2) {
    let cell = config.cell_size();
    let border = config.border_size();
    let origin = bounds.cell_origin(edge.position, cell);
    let inset = (cell - border) as i32;

    if edge.direction.is_vertical() {
        let min = match edge.direction {
            Direction::Up => origin + ivec2(0, inset),
            _ => origin,
        };
        (min, uvec2(cell, border))
    } else {
        let min = match edge.direction {
            Direction::Right => origin + ivec2(inset, 0),
            _ => origin,
        };
        (min, uvec2(border, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    fn config() -> RasterConfig {
        RasterConfig::try_new(4, 1).unwrap()
    }

    #[test]
    fn bands_hug_the_cell_sides() {
        let bounds = Bounds::from_offsets([ivec2(0, 0)]).unwrap();
        let cases = [
            (Direction::Up, "####\n....\n....\n...."),
            (Direction::Down, "....\n....\n....\n####"),
            (Direction::Left, "#...\n#...\n#...\n#..."),
            (Direction::Right, "...#\n...#\n...#\n...#"),
        ];
        for (dir, expected) in cases {
            let mut buf = PixelBuffer::new(bounds.pixel_size(4));
            draw_edge(&mut buf, &Edge::conductive(ivec2(0, 0), dir), &bounds, &config());
            assert_eq!(buf.to_ascii(), expected, "{dir}");
        }
    }

    #[test]
    fn bands_follow_the_bounds_offset() {
        let bounds = Bounds::from_offsets([ivec2(-1, 0), ivec2(0, 0)]).unwrap();
        let mut buf = PixelBuffer::new(bounds.pixel_size(4));
        draw_edge(&mut buf, &Edge::conductive(ivec2(0, 0), Direction::Left), &bounds, &config());
        assert!(buf.is_covered(4, 0));
        assert!(buf.is_covered(4, 3));
        assert_eq!(buf.covered_count(), 4);
    }
}
