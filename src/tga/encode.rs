//! TGA encoder: uncompressed or RLE, always top-origin with the TGA 2.0 footer.

use alloc::vec::Vec;

use enough::Stop;

use super::header::TgaHeader;
use super::rle;
use crate::error::RasterError;
use crate::limits::buffer_len;
use crate::pixel::PixelLayout;

/// Trailing signature of a TGA 2.0 file, NUL included.
pub const SIGNATURE: &[u8; 18] = b"TRUEVISION-XFILE.\0";

/// Developer-area and extension-area offsets, both zero.
const FOOTER_REFS: [u8; 8] = [0; 8];

/// Encode pixels (native channel order, top row first) as a TGA file.
pub(crate) fn encode_tga(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    rle: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, RasterError> {
    let (w, h) = match (i16::try_from(width), i16::try_from(height)) {
        (Ok(w), Ok(h)) => (w as u16, h as u16),
        _ => return Err(RasterError::DimensionsTooLarge { width, height }),
    };
    let bpp = layout.bytes_per_pixel();
    let expected = buffer_len(width, height, bpp)?;
    if pixels.len() < expected {
        return Err(RasterError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }
    let pixels = &pixels[..expected];

    stop.check()?;

    let header = TgaHeader::for_image(w, h, layout, rle);
    let mut out = Vec::with_capacity(header.payload_offset() + expected + 26);
    out.extend_from_slice(&header.to_bytes());
    if rle {
        rle::encode(pixels, bpp, &mut out, stop)?;
    } else {
        out.extend_from_slice(pixels);
    }
    out.extend_from_slice(&FOOTER_REFS);
    out.extend_from_slice(SIGNATURE);

    log::debug!(
        "tga encode: {width}x{height} {layout:?} rle={rle} -> {} bytes ({} pixel bytes)",
        out.len(),
        expected
    );
    Ok(out)
}
