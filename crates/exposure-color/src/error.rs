//! Error types for exposure-color
//!
//! Per-sample color operations are total and never fail. Errors only come
//! from the batch layer (buffer shapes) and from scene texture resolution.

use thiserror::Error;

/// Result type for exposure-color operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the color value types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Destination buffer too small for the source batch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Byte buffer cannot be viewed as color values
    #[error("Buffer layout error: {0}")]
    Layout(String),

    /// Texture handle is bound but the table has no such entry
    #[error("Unknown texture handle: {0}")]
    UnknownTexture(i32),
}

impl From<bytemuck::PodCastError> for Error {
    fn from(err: bytemuck::PodCastError) -> Self {
        Error::Layout(format!("{:?}", err))
    }
}
