/// Convenience result type used across pixcomp.
pub type PixcompResult<T> = Result<T, PixcompError>;

/// Error taxonomy for compositing operations.
///
/// Every operation validates its inputs before writing a single pixel, so an
/// `Err` always means the destination buffer is untouched.
#[derive(thiserror::Error, Debug)]
pub enum PixcompError {
    /// A foreground placed at an offset does not fit inside the background.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Malformed buffers, regions, coordinates or settings.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixcompError {
    /// Build a [`PixcompError::OutOfBounds`] value.
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Build a [`PixcompError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// `true` for [`PixcompError::OutOfBounds`].
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds(_))
    }

    /// `true` for [`PixcompError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
