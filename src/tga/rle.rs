//! TGA run-length packets.
//!
//! Each packet starts with one byte `h`. `h >= 128` is a run: one pixel
//! repeated `h - 127` times. `h < 128` is a raw packet: `h + 1` literal
//! pixels. Both kinds carry 1..=128 pixels.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::RasterError;

/// Longest packet, in pixels.
pub const MAX_PACKET_LEN: usize = 128;

/// Fill `out` from the packet stream in `src`.
///
/// Returns the number of stream bytes consumed. A stream that ends before
/// `out` is full, or a packet that would write past its end, is a
/// [`RasterError::BufferOverrun`].
pub(crate) fn decode(
    src: &[u8],
    out: &mut [u8],
    bpp: usize,
    stop: &dyn Stop,
) -> Result<usize, RasterError> {
    let total = out.len() / bpp;
    let mut pos = 0usize;
    let mut written = 0usize;
    let mut packets = 0u32;

    while written < total {
        packets += 1;
        if packets % 1024 == 0 {
            stop.check()?;
        }

        let h = *src.get(pos).ok_or_else(|| truncated(written, total))?;
        pos += 1;
        let (count, literal) = if h >= 128 {
            (usize::from(h) - 127, false)
        } else {
            (usize::from(h) + 1, true)
        };
        if written + count > total {
            return Err(RasterError::BufferOverrun(alloc::format!(
                "packet of {count} pixels at pixel {written} exceeds {total} pixels"
            )));
        }

        let dst = &mut out[written * bpp..(written + count) * bpp];
        if literal {
            let bytes = src
                .get(pos..pos + count * bpp)
                .ok_or_else(|| truncated(written, total))?;
            dst.copy_from_slice(bytes);
            pos += count * bpp;
        } else {
            let pixel = src
                .get(pos..pos + bpp)
                .ok_or_else(|| truncated(written, total))?;
            for chunk in dst.chunks_exact_mut(bpp) {
                chunk.copy_from_slice(pixel);
            }
            pos += bpp;
        }
        written += count;
    }

    Ok(pos)
}

fn truncated(written: usize, total: usize) -> RasterError {
    RasterError::BufferOverrun(alloc::format!(
        "packet stream ended after {written} of {total} pixels"
    ))
}

/// Append the packet stream for `pixels` to `out`.
///
/// Packets are cut greedily left to right. A raw packet stops one pixel
/// before a pair of equal pixels so the run can start there; a run stops at
/// the first differing pixel. A lone trailing pixel is a raw packet.
pub(crate) fn encode(
    pixels: &[u8],
    bpp: usize,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<(), RasterError> {
    let count = pixels.len() / bpp;
    let px = |i: usize| &pixels[i * bpp..(i + 1) * bpp];
    let mut cursor = 0usize;
    let mut packets = 0u32;

    while cursor < count {
        packets += 1;
        if packets % 1024 == 0 {
            stop.check()?;
        }

        let mut len = 1usize;
        let mut run = false;
        while cursor + len < count && len < MAX_PACKET_LEN {
            let equal = px(cursor + len - 1) == px(cursor + len);
            if len == 1 {
                run = equal;
            } else if !run && equal {
                len -= 1;
                break;
            } else if run && !equal {
                break;
            }
            len += 1;
        }

        if run {
            out.push((len + 127) as u8);
            out.extend_from_slice(px(cursor));
        } else {
            out.push((len - 1) as u8);
            out.extend_from_slice(&pixels[cursor * bpp..(cursor + len) * bpp]);
        }
        cursor += len;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    fn enc(pixels: &[u8], bpp: usize) -> Vec<u8> {
        let mut out = Vec::new();
        encode(pixels, bpp, &mut out, &Unstoppable).unwrap();
        out
    }

    fn dec(stream: &[u8], pixel_count: usize, bpp: usize) -> Result<Vec<u8>, RasterError> {
        let mut out = vec![0u8; pixel_count * bpp];
        decode(stream, &mut out, bpp, &Unstoppable)?;
        Ok(out)
    }

    #[test]
    fn run_then_single_pixel() {
        let stream = enc(&[5, 5, 5, 9], 1);
        assert_eq!(stream, [0x82, 0x05, 0x00, 0x09]);
        assert_eq!(dec(&stream, 4, 1).unwrap(), [5, 5, 5, 9]);
    }

    #[test]
    fn raw_backs_off_before_a_pair() {
        assert_eq!(enc(&[1, 2, 3, 3], 1), [0x01, 1, 2, 0x81, 3]);
        assert_eq!(enc(&[1, 2], 1), [0x01, 1, 2]);
        assert_eq!(enc(&[4, 4], 1), [0x81, 4]);
        assert_eq!(enc(&[7], 1), [0x00, 7]);
        assert!(enc(&[], 1).is_empty());
    }

    #[test]
    fn multi_byte_pixels_compare_all_channels() {
        let pixels = [1, 2, 3, 1, 2, 3, 1, 2, 4];
        let stream = enc(&pixels, 3);
        assert_eq!(stream, [0x81, 1, 2, 3, 0x00, 1, 2, 4]);
        assert_eq!(dec(&stream, 3, 3).unwrap(), pixels);
    }

    #[test]
    fn long_runs_split_at_128() {
        let pixels = vec![7u8; 300];
        let stream = enc(&pixels, 1);
        assert_eq!(stream, [0xFF, 7, 0xFF, 7, 0xAB, 7]);
        assert_eq!(dec(&stream, 300, 1).unwrap(), pixels);
    }

    #[test]
    fn long_raw_splits_at_128() {
        let pixels: Vec<u8> = (0..200).map(|i| (i % 2) as u8).collect();
        let stream = enc(&pixels, 1);
        assert_eq!(stream[0], 0x7F);
        assert_eq!(stream[129], 71);
        assert_eq!(stream.len(), 2 + 200);
        assert_eq!(dec(&stream, 200, 1).unwrap(), pixels);
    }

    #[test]
    fn exhaustive_small_patterns_roundtrip() {
        // Every sequence of length 1..=6 over a 3-symbol alphabet.
        for len in 1..=6u32 {
            for n in 0..3usize.pow(len) {
                let mut v = n;
                let pixels: Vec<u8> = (0..len)
                    .map(|_| {
                        let s = (v % 3) as u8;
                        v /= 3;
                        s
                    })
                    .collect();
                for bpp in [1usize, 3, 4] {
                    let wide: Vec<u8> = pixels
                        .iter()
                        .flat_map(|&s| (0..bpp).map(move |c| s * 10 + c as u8))
                        .collect();
                    let stream = enc(&wide, bpp);
                    assert_eq!(dec(&stream, pixels.len(), bpp).unwrap(), wide);
                }
            }
        }
    }

    #[test]
    fn truncated_stream_is_overrun() {
        assert!(matches!(
            dec(&[0x82, 5], 4, 1),
            Err(RasterError::BufferOverrun(_))
        ));
        assert!(matches!(
            dec(&[0x02, 1, 2], 3, 1),
            Err(RasterError::BufferOverrun(_))
        ));
        assert!(matches!(dec(&[0x80], 1, 3), Err(RasterError::BufferOverrun(_))));
    }

    #[test]
    fn packet_past_end_is_overrun() {
        let mut out = vec![0u8; 3];
        let err = decode(&[0x83, 9], &mut out, 1, &Unstoppable).unwrap_err();
        assert!(matches!(err, RasterError::BufferOverrun(_)));
        assert!(matches!(
            dec(&[0x01, 1, 2], 1, 1),
            Err(RasterError::BufferOverrun(_))
        ));
    }

    #[test]
    fn decode_reports_consumed_bytes() {
        let mut out = vec![0u8; 4];
        let used = decode(&[0x82, 5, 0x00, 9, 0xEE, 0xEE], &mut out, 1, &Unstoppable).unwrap();
        assert_eq!(used, 4);
    }
}
