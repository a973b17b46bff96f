use crate::error::RasterError;
use crate::pixel::PixelLayout;
use crate::tga::ImageType;

/// Image metadata read from the header alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    /// Layout of decoded pixels (native BGR(A) order).
    pub native_layout: PixelLayout,
    /// Stored top row first. Bottom-origin files are flipped on decode.
    pub top_origin: bool,
    /// Stored right to left. Such files are mirrored on decode.
    pub right_to_left: bool,
}

impl ImageInfo {
    /// Probe a TGA file without decoding pixels.
    ///
    /// Fails the same way decoding would for malformed or unsupported headers.
    pub fn from_bytes(data: &[u8]) -> Result<Self, RasterError> {
        crate::tga::probe_header(data)
    }

    /// Whether the payload is run-length encoded.
    pub fn is_rle(&self) -> bool {
        self.image_type.is_rle()
    }
}
