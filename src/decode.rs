use alloc::borrow::Cow;
use alloc::vec::Vec;

use enough::Stop;
#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decoded image output. Pixels may be borrowed (zero-copy) or owned.
///
/// Uncompressed top-origin, left-to-right files borrow straight from the
/// input; everything else is decoded into an owned buffer.
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl<'a> DecodeOutput<'a> {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Move the pixels into a mutable [`PixelBuffer`] (copies if borrowed).
    pub fn into_buffer(self) -> Result<PixelBuffer, RasterError> {
        PixelBuffer::from_vec(
            self.pixels.into_owned(),
            self.width,
            self.height,
            self.layout,
        )
    }

    pub(crate) fn borrowed(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            width,
            height,
            layout,
        }
    }

    pub(crate) fn owned(data: Vec<u8>, width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Owned(data),
            width,
            height,
            layout,
        }
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`RasterError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], RasterError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        crate::typed::check_layout::<P>(self.layout)?;
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`RasterError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, RasterError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Builder for decoding a TGA file.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images beyond `limits` before allocating.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode, polling `stop` before reading pixels and every 1024 RLE packets.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput<'a>, RasterError> {
        crate::tga::decode(self.data, self.limits, &stop)
    }

    /// Decode straight into a [`PixelBuffer`].
    pub fn decode_buffer(self, stop: impl Stop) -> Result<PixelBuffer, RasterError> {
        self.decode(stop)?.into_buffer()
    }
}
