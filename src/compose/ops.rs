//! Placement of a foreground buffer onto a background buffer.
//!
//! All three operations share one contract: the foreground must fit inside the
//! background at the given offset ([`check_fits`]), checked before any write.
//! Foreground pixel `(x, y)` lands on background index `(x + dx) + (y + dy) * bg_w`.
//! Only the background is mutated.

use crate::canvas::view::{PixelView, PixelViewMut};
use crate::compose::blend::compose_pixel;
use crate::compose::bounds::check_fits;
use crate::foundation::core::Offset;
use crate::foundation::error::PixcompResult;
use crate::foundation::pixel::{Pixel, TRANSPARENT};

/// Alpha-blend `fg` over `bg` at `offset` with [`compose_pixel`].
pub fn compose_onto(bg: &mut PixelViewMut<'_>, fg: PixelView<'_>, offset: Offset) -> PixcompResult<()> {
    place_rows(bg, fg, offset, compose_row)
}

/// Overwrite the covered background pixels with `fg`, no blending.
pub fn replace_onto(bg: &mut PixelViewMut<'_>, fg: PixelView<'_>, offset: Offset) -> PixcompResult<()> {
    place_rows(bg, fg, offset, replace_row)
}

/// Non-blending overlay: copy every foreground pixel except the
/// [`TRANSPARENT`] sentinel, which is skipped.
///
/// This is not a compositing operation. A half-transparent foreground pixel
/// overwrites the background as-is, and transparent black cannot be drawn.
/// Matches [`compose_onto`] only when each foreground pixel is either `0`
/// or fully opaque.
///
/// Walks the background with one running index: `+1` per pixel and a jump of
/// `bg_w - fg_w` at each new foreground row.
pub fn fast_compose_onto(
    bg: &mut PixelViewMut<'_>,
    fg: PixelView<'_>,
    offset: Offset,
) -> PixcompResult<()> {
    check_fits(bg.width(), bg.height(), fg.width(), fg.height(), offset)?;

    let bg_w = bg.width() as usize;
    let fg_w = fg.width() as usize;
    let stride = bg_w - fg_w;
    let dst = bg.pixels_mut();

    let mut i = offset.dy as usize * bg_w + offset.dx as usize;
    for (p, &px) in fg.pixels().iter().enumerate() {
        if p != 0 && p % fg_w == 0 {
            i += stride;
        }
        if px != TRANSPARENT {
            dst[i] = px;
        }
        i += 1;
    }
    Ok(())
}

pub(crate) fn compose_row(dst: &mut [Pixel], src: &[Pixel]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = compose_pixel(s, *d);
    }
}

pub(crate) fn replace_row(dst: &mut [Pixel], src: &[Pixel]) {
    dst.copy_from_slice(src);
}

pub(crate) fn fast_row(dst: &mut [Pixel], src: &[Pixel]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        if s != TRANSPARENT {
            *d = s;
        }
    }
}

/// Range of background indices covered by foreground row `y`.
pub(crate) fn dst_span(bg_w: usize, fg_w: usize, offset: Offset, y: usize) -> std::ops::Range<usize> {
    let start = (y + offset.dy as usize) * bg_w + offset.dx as usize;
    start..start + fg_w
}

fn place_rows(
    bg: &mut PixelViewMut<'_>,
    fg: PixelView<'_>,
    offset: Offset,
    row_op: fn(&mut [Pixel], &[Pixel]),
) -> PixcompResult<()> {
    check_fits(bg.width(), bg.height(), fg.width(), fg.height(), offset)?;

    let bg_w = bg.width() as usize;
    let fg_w = fg.width() as usize;
    let dst = bg.pixels_mut();
    for y in 0..fg.height() {
        row_op(&mut dst[dst_span(bg_w, fg_w, offset, y as usize)], fg.row(y));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/ops.rs"]
mod tests;
