use crate::foundation::error::{PixcompError, PixcompResult};

/// Placement of a foreground's top-left corner on a background.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Offset {
    /// Columns to the right of the background origin.
    pub dx: i64,
    /// Rows below the background origin.
    pub dy: i64,
}

impl Offset {
    /// Offset `(dx, dy)`.
    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

/// Axis-aligned rectangle with inclusive corners `(x0, y0)` and `(x1, y1)`.
///
/// Deserialization goes through [`Region::new`], so corner order holds for
/// every value built outside a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawRegion")]
pub struct Region {
    /// Left column.
    pub x0: u32,
    /// Top row.
    pub y0: u32,
    /// Right column, inclusive.
    pub x1: u32,
    /// Bottom row, inclusive.
    pub y1: u32,
}

impl Region {
    /// Build a region; corners must be ordered.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> PixcompResult<Self> {
        if x0 > x1 || y0 > y1 {
            return Err(PixcompError::invalid_argument(format!(
                "region corners must be ordered, got ({x0},{y0})-({x1},{y1})"
            )));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Number of columns covered; `u32::MAX + 1` for a full-range region.
    pub fn width(self) -> u64 {
        u64::from(self.x1) - u64::from(self.x0) + 1
    }

    /// Number of rows covered.
    pub fn height(self) -> u64 {
        u64::from(self.y1) - u64::from(self.y0) + 1
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegion {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl TryFrom<RawRegion> for Region {
    type Error = PixcompError;

    fn try_from(raw: RawRegion) -> Result<Self, Self::Error> {
        Self::new(raw.x0, raw.y0, raw.x1, raw.y1)
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateDir {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl std::str::FromStr for RotateDir {
    type Err = PixcompError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "ccw" => Ok(Self::Left),
            "right" | "cw" => Ok(Self::Right),
            other => Err(PixcompError::invalid_argument(format!(
                "unknown rotation direction '{other}' (expected left or right)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
