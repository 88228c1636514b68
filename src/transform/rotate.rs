use crate::canvas::view::PixelView;
use crate::foundation::core::RotateDir;
use crate::foundation::pixel::Pixel;

/// A freshly built buffer with its (swapped) dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotated {
    /// New width, the old height.
    pub width: u32,
    /// New height, the old width.
    pub height: u32,
    /// Row-major pixels, `width * height` long.
    pub pixels: Vec<Pixel>,
}

/// Quarter-turn `src` into a new buffer.
///
/// Source pixel at row `i`, column `j` of a `w x h` image goes to
/// `(w - 1 - j) * h + i` for [`RotateDir::Left`] and `j * h + (h - 1 - i)`
/// for [`RotateDir::Right`]. The source is only read.
#[tracing::instrument(level = "debug", skip(src), fields(width = src.width(), height = src.height()))]
pub fn rotate90(src: PixelView<'_>, dir: RotateDir) -> Rotated {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let mut out = vec![0 as Pixel; w * h];

    for (i, row) in src.pixels().chunks_exact(w).enumerate() {
        for (j, &px) in row.iter().enumerate() {
            let store_at = match dir {
                RotateDir::Left => (w - 1 - j) * h + i,
                RotateDir::Right => j * h + (h - 1 - i),
            };
            out[store_at] = px;
        }
    }

    Rotated {
        width: src.height(),
        height: src.width(),
        pixels: out,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
