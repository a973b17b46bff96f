use alloc::vec::Vec;

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::PixelLayout;

/// Builder for encoding a TGA file.
///
/// Output is always top-origin and left-to-right, followed by the TGA 2.0
/// footer. Grayscale layouts use image type 3/11, BGR(A) use 2/10.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    rle: bool,
}

impl EncodeRequest {
    /// Uncompressed TGA.
    pub fn tga() -> Self {
        Self { rle: false }
    }

    /// Run-length encoded TGA.
    pub fn tga_rle() -> Self {
        Self { rle: true }
    }

    pub fn with_rle(mut self, rle: bool) -> Self {
        self.rle = rle;
        self
    }

    /// Encode native-order pixels, top row first.
    ///
    /// Width and height must fit the header's signed 16-bit fields.
    pub fn encode(
        self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<Vec<u8>, RasterError> {
        crate::tga::encode(pixels, width, height, layout, self.rle, &stop)
    }

    /// Encode a [`PixelBuffer`].
    pub fn encode_buffer(
        self,
        buffer: &PixelBuffer,
        stop: impl Stop,
    ) -> Result<Vec<u8>, RasterError> {
        self.encode(
            buffer.as_bytes(),
            buffer.width(),
            buffer.height(),
            buffer.layout(),
            stop,
        )
    }
}
