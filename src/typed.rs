//! Typed pixel views over `rgb` crate pixel types.

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::PixelLayout;
use rgb::AsPixels as _;

/// Pixel types that a decoded TGA buffer can be viewed as.
pub trait DecodePixel: Copy + 'static {
    /// The buffer layout with the same memory representation.
    fn layout() -> PixelLayout;
}

impl DecodePixel for rgb::alt::BGR8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}

impl DecodePixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

pub(crate) fn check_layout<P: DecodePixel>(actual: PixelLayout) -> Result<(), RasterError> {
    if actual != P::layout() {
        return Err(RasterError::LayoutMismatch {
            expected: P::layout(),
            actual,
        });
    }
    Ok(())
}

impl PixelBuffer {
    /// Reinterpret the buffer as a typed pixel slice.
    ///
    /// Returns [`RasterError::LayoutMismatch`] if the buffer layout doesn't match `P`.
    pub fn as_pixels<P: DecodePixel>(&self) -> Result<&[P], RasterError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        check_layout::<P>(self.layout())?;
        Ok(self.as_bytes().as_pixels())
    }

    /// Zero-copy [`imgref::ImgRef`] view of the buffer.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, RasterError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width() as usize,
            self.height() as usize,
        ))
    }
}
