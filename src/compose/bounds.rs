use crate::foundation::core::Offset;
use crate::foundation::error::{PixcompError, PixcompResult};

/// Fail with [`PixcompError::OutOfBounds`] unless a `fg_w x fg_h` foreground at
/// `offset` lies entirely inside a `bg_w x bg_h` background.
///
/// Width is checked before height. Negative offsets never fit.
pub fn check_fits(bg_w: u32, bg_h: u32, fg_w: u32, fg_h: u32, offset: Offset) -> PixcompResult<()> {
    let Offset { dx, dy } = offset;
    if dx < 0 || i64::from(bg_w) < i64::from(fg_w).saturating_add(dx) {
        return Err(PixcompError::out_of_bounds(format!(
            "background width {bg_w} is too small for foreground width {fg_w} at x offset {dx}"
        )));
    }
    if dy < 0 || i64::from(bg_h) < i64::from(fg_h).saturating_add(dy) {
        return Err(PixcompError::out_of_bounds(format!(
            "background height {bg_h} is too small for foreground height {fg_h} at y offset {dy}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/bounds.rs"]
mod tests;
