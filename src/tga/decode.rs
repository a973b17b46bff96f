//! TGA decoder: raw and RLE truecolor/grayscale, orientation correction.

use alloc::vec;

use enough::Stop;

use super::header::TgaHeader;
use super::rle;
use crate::buffer::{flip_rows, flip_scanlines};
use crate::decode::DecodeOutput;
use crate::error::RasterError;
use crate::limits::{Limits, buffer_len};

/// Decode a whole TGA file.
///
/// Header and image type are fully validated before any pixel memory is
/// allocated. The result is always top-row-first, left-to-right.
pub(crate) fn decode_tga<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, RasterError> {
    let header = TgaHeader::parse(data)?;
    let image_type = header.image_type()?;
    let layout = header.layout()?;
    let width = u32::from(header.width);
    let height = u32::from(header.height);
    let bpp = layout.bytes_per_pixel();

    let needed = match limits {
        Some(limits) => limits.check_image(width, height, bpp)?,
        None => buffer_len(width, height, bpp)?,
    };
    let payload = data
        .get(header.payload_offset()..)
        .ok_or(RasterError::UnexpectedEof)?;

    log::debug!(
        "tga decode: {width}x{height} {layout:?} type {} descriptor {:#04x}",
        header.data_type_code,
        header.image_descriptor
    );
    stop.check()?;

    let flip_v = !header.is_top_origin();
    let flip_h = header.is_right_to_left();

    if !image_type.is_rle() {
        let raw = payload.get(..needed).ok_or(RasterError::UnexpectedEof)?;
        if !flip_v && !flip_h {
            return Ok(DecodeOutput::borrowed(raw, width, height, layout));
        }
        let mut pixels = raw.to_vec();
        orient(&mut pixels, width, height, bpp, flip_h, flip_v);
        return Ok(DecodeOutput::owned(pixels, width, height, layout));
    }

    // Every packet needs at least 1 + bpp bytes and yields at most 128 pixels.
    let reachable = (payload.len() / (1 + bpp)).saturating_mul(rle::MAX_PACKET_LEN);
    if needed / bpp > reachable {
        return Err(RasterError::BufferOverrun(alloc::format!(
            "{} byte packet stream cannot cover {} pixels",
            payload.len(),
            needed / bpp
        )));
    }

    let mut pixels = vec![0u8; needed];
    let used = rle::decode(payload, &mut pixels, bpp, stop)?;
    log::debug!("tga decode: RLE stream used {used} of {} bytes", payload.len());
    orient(&mut pixels, width, height, bpp, flip_h, flip_v);
    Ok(DecodeOutput::owned(pixels, width, height, layout))
}

fn orient(pixels: &mut [u8], width: u32, height: u32, bpp: usize, flip_h: bool, flip_v: bool) {
    if flip_v {
        log::debug!("tga decode: bottom-origin image, flipping rows");
        flip_scanlines(pixels, width as usize * bpp, height as usize);
    }
    if flip_h {
        log::debug!("tga decode: right-to-left image, mirroring columns");
        flip_rows(pixels, width as usize, bpp);
    }
}
