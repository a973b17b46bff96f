//! Whole-file helpers. I/O errors are returned as [`RasterError::Io`].

use std::path::Path;

use enough::Unstoppable;

use crate::buffer::PixelBuffer;
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::RasterError;

impl PixelBuffer {
    /// Read and decode a TGA file.
    pub fn read_tga_file(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let data = std::fs::read(path)?;
        DecodeRequest::new(&data).decode_buffer(Unstoppable)
    }

    /// Encode and write a TGA file, RLE-compressed when `rle` is set.
    pub fn write_tga_file(&self, path: impl AsRef<Path>, rle: bool) -> Result<(), RasterError> {
        let data = EncodeRequest::tga()
            .with_rle(rle)
            .encode_buffer(self, Unstoppable)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
