pub(crate) mod core;
pub(crate) mod error;
/// Packed RGBA8 pixel encoding and channel helpers.
pub mod pixel;
