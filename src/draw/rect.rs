use crate::canvas::view::PixelViewMut;
use crate::foundation::core::Region;
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::foundation::pixel::{Pixel, TRANSPARENT};

/// Fill `region` with `fill`, then stroke its one-pixel border with `stroke`.
///
/// Either color set to [`TRANSPARENT`] skips that part. Fill is written first,
/// so the stroke always wins on the border. The region must lie inside the
/// canvas; otherwise nothing is written and `InvalidArgument` is returned.
pub fn draw_rect(
    canvas: &mut PixelViewMut<'_>,
    region: Region,
    stroke: Pixel,
    fill: Pixel,
) -> PixcompResult<()> {
    let Region { x0, y0, x1, y1 } = region;
    if x0 > x1 || y0 > y1 {
        return Err(PixcompError::invalid_argument(format!(
            "region corners must be ordered, got ({x0},{y0})-({x1},{y1})"
        )));
    }
    if x1 >= canvas.width() || y1 >= canvas.height() {
        return Err(PixcompError::invalid_argument(format!(
            "region ({x0},{y0})-({x1},{y1}) exceeds {}x{} canvas",
            canvas.width(),
            canvas.height()
        )));
    }

    let w = canvas.width() as usize;
    let (x0, y0, x1, y1) = (x0 as usize, y0 as usize, x1 as usize, y1 as usize);
    let px = canvas.pixels_mut();

    if fill != TRANSPARENT {
        for y in y0..=y1 {
            px[y * w + x0..=y * w + x1].fill(fill);
        }
    }

    if stroke != TRANSPARENT {
        px[y0 * w + x0..=y0 * w + x1].fill(stroke);
        px[y1 * w + x0..=y1 * w + x1].fill(stroke);
        for y in y0..=y1 {
            px[y * w + x0] = stroke;
            px[y * w + x1] = stroke;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/draw/rect.rs"]
mod tests;
