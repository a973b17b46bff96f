//! Truevision TGA decoder and encoder.
//!
//! Handles image types 2/3 (uncompressed truecolor/grayscale) and 10/11
//! (run-length encoded) at 8, 24 or 32 bits per pixel. Color-mapped and
//! other image types are rejected.
//!
//! File layout: 18-byte header, optional image ID and color map, pixel
//! payload, then (when written by this crate) two zero area offsets and the
//! `TRUEVISION-XFILE.` signature.

mod decode;
mod encode;
pub mod header;
pub mod rle;

pub use encode::SIGNATURE;
pub use header::{ImageType, TgaHeader};
pub use rle::MAX_PACKET_LEN;

use crate::decode::DecodeOutput;
use crate::error::RasterError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use alloc::vec::Vec;
use enough::Stop;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, RasterError> {
    let header = TgaHeader::parse(data)?;
    Ok(ImageInfo {
        width: u32::from(header.width),
        height: u32::from(header.height),
        image_type: header.image_type()?,
        native_layout: header.layout()?,
        top_origin: header.is_top_origin(),
        right_to_left: header.is_right_to_left(),
    })
}

/// Decode TGA data (called from DecodeRequest).
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, RasterError> {
    decode::decode_tga(data, limits, stop)
}

/// Encode to TGA (called from EncodeRequest).
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    rle: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, RasterError> {
    encode::encode_tga(pixels, width, height, layout, rle, stop)
}
