use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding and encoding, pixel buffer operations and mesh parsing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RasterError {
    /// Header geometry is malformed (negative width/height, zero bits per pixel).
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Image type or pixel depth outside what this crate handles.
    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    /// RLE packet stream ended early or would write past the pixel buffer.
    #[error("buffer overrun: {0}")]
    BufferOverrun(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// A color with fewer channels than the buffer's bytes per pixel.
    #[error("color has {actual} channels, buffer needs {expected}")]
    ColorMismatch { expected: usize, actual: usize },

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    /// Mesh text could not be parsed or references missing vertices.
    /// `line` is 1-based, or 0 for problems found after parsing.
    #[error("invalid mesh at line {line}: {reason}")]
    InvalidMesh { line: usize, reason: String },

    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RasterError {
    fn from(r: StopReason) -> Self {
        RasterError::Cancelled(r)
    }
}
