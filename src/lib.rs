//! pixcomp composites and transforms raster images held as flat pixel buffers.
//!
//! The crate operates on row-major buffers of packed `0xRRGGBBAA` [`Pixel`]s plus
//! their width and height. It never loads, saves or reallocates images on its
//! own; the owner of a buffer lends it through a [`PixelView`] / [`PixelViewMut`]
//! or implements [`PixelCanvas`].
//!
//! # Operations
//!
//! - [`compose_onto`]: straight-alpha "over" blend of a foreground at an [`Offset`].
//! - [`fast_compose_onto`]: non-blending overlay that skips the `0` sentinel.
//! - [`replace_onto`]: unconditional overwrite.
//! - [`draw_rect`]: fill and one-pixel stroke of an inclusive [`Region`].
//! - [`rotate90`]: quarter turn into a fresh buffer of swapped dimensions.
//!
//! Placement operations run [`check_fits`] first and fail with
//! [`PixcompError::OutOfBounds`] before touching a pixel. Malformed buffers and
//! regions fail with [`PixcompError::InvalidArgument`]. No operation leaves a
//! buffer partially written.
//!
//! [`Compositor`] runs the placement operations row-parallel on a dedicated
//! rayon pool; output is bit-identical to the sequential functions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canvas;
mod compose;
mod draw;
mod foundation;
mod transform;

pub use canvas::store::{Canvas, PixelCanvas};
pub use canvas::view::{PixelView, PixelViewMut};
pub use compose::blend::compose_pixel;
pub use compose::bounds::check_fits;
pub use compose::compositor::{Compositor, CompositorSettings};
pub use compose::ops::{compose_onto, fast_compose_onto, replace_onto};
pub use draw::rect::draw_rect;
pub use foundation::core::{Offset, Region, RotateDir};
pub use foundation::error::{PixcompError, PixcompResult};
pub use foundation::pixel;
pub use foundation::pixel::{Pixel, TRANSPARENT};
pub use transform::rotate::{Rotated, rotate90};
