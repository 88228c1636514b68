use crate::foundation::error::{PixcompError, PixcompResult};
use crate::foundation::pixel::Pixel;

/// Pixel count of a non-empty `width x height` buffer.
pub(crate) fn pixel_count(width: u32, height: u32) -> PixcompResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixcompError::invalid_argument(format!(
            "canvas dimensions must be positive, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PixcompError::invalid_argument("canvas size overflow"))
}

/// Validate `width x height` against a buffer length.
pub(crate) fn checked_len(width: u32, height: u32, len: usize) -> PixcompResult<()> {
    let expected = pixel_count(width, height)?;
    if expected != len {
        return Err(PixcompError::invalid_argument(format!(
            "pixel buffer holds {len} pixels, {width}x{height} needs {expected}"
        )));
    }
    Ok(())
}

/// Read-only row-major pixel buffer with its dimensions.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    width: u32,
    height: u32,
    pixels: &'a [Pixel],
}

impl<'a> PixelView<'a> {
    /// Wrap `pixels`; fails unless `pixels.len() == width * height` and both are non-zero.
    pub fn new(width: u32, height: u32, pixels: &'a [Pixel]) -> PixcompResult<Self> {
        checked_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    // Owners that already enforce the length invariant skip re-validation.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: &'a [Pixel]) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full buffer.
    pub fn pixels(&self) -> &'a [Pixel] {
        self.pixels
    }

    /// Row `y`.
    pub fn row(&self, y: u32) -> &'a [Pixel] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }
}

/// Mutable row-major pixel buffer with its dimensions.
///
/// Operations write through this view in place and never resize the buffer.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    width: u32,
    height: u32,
    pixels: &'a mut [Pixel],
}

impl<'a> PixelViewMut<'a> {
    /// Wrap `pixels`; fails unless `pixels.len() == width * height` and both are non-zero.
    pub fn new(width: u32, height: u32, pixels: &'a mut [Pixel]) -> PixcompResult<Self> {
        checked_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &*self.pixels
    }

    /// The full buffer, writable.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut *self.pixels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/view.rs"]
mod tests;
