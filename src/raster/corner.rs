//! Concave corner repair for outline sprites
//!
//! Where two perpendicular bands meet at an inner corner of the shape, the
//! bands stop short of each other and leave a `border × border` notch. The
//! notch is the only place where a clear pixel sees covered pixels one and
//! two band-widths away along both axes of a diagonal while the diagonal
//! itself is clear. At convex corners the diagonal is covered, so they are
//! left alone.
//!
//! Two cells that touch only at a corner also pass that test on the empty
//! side of the pinch. Fills are therefore limited to pixels the fill sprite
//! covers: a notch always lies inside the cell that owns both bands.

use crate::types::Diagonal;

use super::buffer::{PixelBuffer, Rgba};

/// Fill every notch pixel with `color`. Returns the number of pixels filled.
///
/// Only pixels covered in `inside` (the fill sprite of the same shape) are
/// candidates. All tests read the buffer as it was before the pass; fills
/// are applied afterwards so the result does not depend on scan order.
pub fn repair_corners(
    buf: &mut PixelBuffer,
    inside: &PixelBuffer,
    border: u32,
    color: Rgba,
) -> usize {
    let b = border as i32;
    let mut fixes = Vec::new();

    for y in 0..buf.height() as i32 {
        for x in 0..buf.width() as i32 {
            if buf.is_covered(x, y) || !inside.is_covered(x, y) {
                continue;
            }
            let notch = Diagonal::ALL.into_iter().any(|diagonal| {
                let step = diagonal.step() * b;
                buf.is_covered(x + step.x, y)
                    && buf.is_covered(x, y + step.y)
                    && !buf.is_covered(x + step.x, y + step.y)
                    && buf.is_covered(x + 2 * step.x, y)
                    && buf.is_covered(x, y + 2 * step.y)
            });
            if notch {
                fixes.push((x, y));
            }
        }
    }

    for &(x, y) in &fixes {
        buf.set(x, y, color);
    }
    crate::log::trace!(repaired = fixes.len(), "repaired outline corners");
    fixes.len()
}
