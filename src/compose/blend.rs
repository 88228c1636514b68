use crate::foundation::pixel::{self, Pixel, int8_mul};

/// Straight-alpha "over": `fg` drawn on top of `bg`.
///
/// Color channels interpolate from `bg` toward `fg` by the foreground alpha,
/// result alpha is `fa + ba * (1 - fa)`. Every product goes through
/// [`int8_mul`], so results are bit-exact with the reference blend:
///
/// - a fully transparent `fg` returns `bg` untouched,
/// - an opaque `fg`, or any `fg` over a fully transparent `bg`, returns `fg`.
pub fn compose_pixel(fg: Pixel, bg: Pixel) -> Pixel {
    if pixel::is_fully_transparent(fg) {
        return bg;
    }
    if pixel::is_opaque(fg) || pixel::is_fully_transparent(bg) {
        return fg;
    }

    let (fa, ba) = (pixel::a(fg), pixel::a(bg));
    let a_com = int8_mul(0xff - fa, ba);
    // int8_mul(x, c) <= x, so neither sum can pass 255.
    let channel = |f: u8, b: u8| int8_mul(fa, f) + int8_mul(a_com, b);

    pixel::rgba(
        channel(pixel::r(fg), pixel::r(bg)),
        channel(pixel::g(fg), pixel::g(bg)),
        channel(pixel::b(fg), pixel::b(bg)),
        fa + a_com,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
