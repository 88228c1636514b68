//! Packed RGBA8 pixel encoding.
//!
//! A [`Pixel`] is a `u32` holding four straight (non-premultiplied) 8-bit
//! channels, red in the most significant byte and alpha in the least:
//! `0xRRGGBBAA`.
//!
//! The value [`TRANSPARENT`] (`0`) doubles as the "nothing to draw" sentinel for
//! the non-blending paths ([`fast_compose_onto`](crate::fast_compose_onto) and
//! [`draw_rect`](crate::draw_rect)). Those paths cannot tell transparent black
//! apart from "skip", and callers of them accept that approximation.

use crate::foundation::error::{PixcompError, PixcompResult};

/// Packed `0xRRGGBBAA` pixel.
pub type Pixel = u32;

/// Fully transparent black; the skip sentinel for the fast paths.
pub const TRANSPARENT: Pixel = 0;

/// Pack four channels.
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Pixel {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
}

/// Pack an opaque color.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
    rgba(r, g, b, 0xff)
}

/// Red channel.
#[inline]
pub const fn r(p: Pixel) -> u8 {
    (p >> 24) as u8
}

/// Green channel.
#[inline]
pub const fn g(p: Pixel) -> u8 {
    (p >> 16) as u8
}

/// Blue channel.
#[inline]
pub const fn b(p: Pixel) -> u8 {
    (p >> 8) as u8
}

/// Alpha channel.
#[inline]
pub const fn a(p: Pixel) -> u8 {
    p as u8
}

/// Unpack into `[r, g, b, a]`.
#[inline]
pub const fn to_rgba8(p: Pixel) -> [u8; 4] {
    p.to_be_bytes()
}

/// Pack `[r, g, b, a]`.
#[inline]
pub const fn from_rgba8(px: [u8; 4]) -> Pixel {
    Pixel::from_be_bytes(px)
}

/// Alpha is 255.
#[inline]
pub const fn is_opaque(p: Pixel) -> bool {
    a(p) == 0xff
}

/// Alpha is 0, whatever the color channels hold.
#[inline]
pub const fn is_fully_transparent(p: Pixel) -> bool {
    a(p) == 0
}

/// Rounded `a * b / 255` on 8-bit values.
///
/// Bit-exact with the `((t >> 8) + t) >> 8` form used by the reference blend,
/// where `t = a * b + 0x80`.
#[inline]
pub const fn int8_mul(a: u8, b: u8) -> u8 {
    let t = a as u32 * b as u32 + 0x80;
    (((t >> 8) + t) >> 8) as u8
}

/// Parse `RRGGBB` or `RRGGBBAA` hex, with an optional leading `#` or `0x`.
///
/// Six-digit input is treated as opaque.
pub fn parse_hex(s: &str) -> PixcompResult<Pixel> {
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PixcompError::invalid_argument(format!(
            "bad hex color '{s}': expected only hex digits"
        )));
    }
    let v = u32::from_str_radix(digits, 16)
        .map_err(|e| PixcompError::invalid_argument(format!("bad hex color '{s}': {e}")))?;
    match digits.len() {
        6 => Ok(v << 8 | 0xff),
        8 => Ok(v),
        _ => Err(PixcompError::invalid_argument(format!(
            "hex color '{s}' must have 6 or 8 digits"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/pixel.rs"]
mod tests;
