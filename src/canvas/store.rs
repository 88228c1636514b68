use crate::canvas::view::{PixelView, PixelViewMut, checked_len, pixel_count};
use crate::compose::ops;
use crate::draw::rect;
use crate::foundation::core::{Offset, Region, RotateDir};
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::foundation::pixel::Pixel;
use crate::transform::rotate::rotate90;

/// Owner of a row-major pixel buffer and its dimensions.
///
/// Implementors supply the accessors and one atomic replacement hook; the
/// provided methods route every operation through validated views.
pub trait PixelCanvas {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Row-major pixels, `width * height` long.
    fn pixels(&self) -> &[Pixel];
    /// Row-major pixels, writable.
    fn pixels_mut(&mut self) -> &mut [Pixel];

    /// Swap in new dimensions and buffer in one step.
    ///
    /// Must leave the old state in place when `pixels.len() != width * height`.
    fn replace_canvas(&mut self, width: u32, height: u32, pixels: Vec<Pixel>) -> PixcompResult<()>;

    /// Borrow as a validated read-only view.
    fn view(&self) -> PixcompResult<PixelView<'_>> {
        PixelView::new(self.width(), self.height(), self.pixels())
    }

    /// Borrow as a validated mutable view.
    fn view_mut(&mut self) -> PixcompResult<PixelViewMut<'_>> {
        let (w, h) = (self.width(), self.height());
        PixelViewMut::new(w, h, self.pixels_mut())
    }

    /// Alpha-blend `fg` on top of this canvas at `offset`.
    fn compose_onto<F: PixelCanvas + ?Sized>(&mut self, fg: &F, offset: Offset) -> PixcompResult<()>
    where
        Self: Sized,
    {
        ops::compose_onto(&mut self.view_mut()?, fg.view()?, offset)
    }

    /// Overwrite the area under `fg` at `offset`.
    fn replace_onto<F: PixelCanvas + ?Sized>(&mut self, fg: &F, offset: Offset) -> PixcompResult<()>
    where
        Self: Sized,
    {
        ops::replace_onto(&mut self.view_mut()?, fg.view()?, offset)
    }

    /// Copy non-sentinel pixels of `fg` at `offset` without blending.
    fn fast_compose_onto<F: PixelCanvas + ?Sized>(
        &mut self,
        fg: &F,
        offset: Offset,
    ) -> PixcompResult<()>
    where
        Self: Sized,
    {
        ops::fast_compose_onto(&mut self.view_mut()?, fg.view()?, offset)
    }

    /// Fill then stroke `region`; see [`draw_rect`](crate::draw_rect).
    fn draw_rect(&mut self, region: Region, stroke: Pixel, fill: Pixel) -> PixcompResult<()> {
        rect::draw_rect(&mut self.view_mut()?, region, stroke, fill)
    }

    /// Quarter-turn the canvas; the new buffer is installed with one
    /// [`replace_canvas`](PixelCanvas::replace_canvas) call.
    fn rotate(&mut self, dir: RotateDir) -> PixcompResult<()> {
        let rotated = rotate90(self.view()?, dir);
        self.replace_canvas(rotated.width, rotated.height, rotated.pixels)
    }
}

/// Heap-backed canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// A `width x height` canvas filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Pixel) -> PixcompResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Take ownership of an existing row-major buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> PixcompResult<Self> {
        checked_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Give the buffer back.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> PixcompResult<Pixel> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, px: Pixel) -> PixcompResult<()> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = px;
        Ok(())
    }

    /// Copy of `self` with `fg` alpha-blended on top.
    pub fn composed<F: PixelCanvas + ?Sized>(&self, fg: &F, offset: Offset) -> PixcompResult<Self> {
        let mut out = self.clone();
        out.compose_onto(fg, offset)?;
        Ok(out)
    }

    /// Copy of `self` with the area under `fg` overwritten.
    pub fn replaced<F: PixelCanvas + ?Sized>(&self, fg: &F, offset: Offset) -> PixcompResult<Self> {
        let mut out = self.clone();
        out.replace_onto(fg, offset)?;
        Ok(out)
    }

    /// Quarter-turned copy of `self`.
    pub fn rotated(&self, dir: RotateDir) -> Self {
        let r = rotate90(self.as_view(), dir);
        Self {
            width: r.width,
            height: r.height,
            pixels: r.pixels,
        }
    }

    fn as_view(&self) -> PixelView<'_> {
        PixelView::from_parts(self.width, self.height, &self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> PixcompResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(PixcompError::invalid_argument(format!(
                "pixel ({x},{y}) outside {}x{} canvas",
                self.width, self.height
            )));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl PixelCanvas for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    fn replace_canvas(&mut self, width: u32, height: u32, pixels: Vec<Pixel>) -> PixcompResult<()> {
        checked_len(width, height, pixels.len())?;
        self.width = width;
        self.height = height;
        self.pixels = pixels;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/store.rs"]
mod tests;
