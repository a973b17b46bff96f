//! Integer nearest-neighbour resampling.
//!
//! Both axes run the same digital differential analyzer: an error term
//! gains `new` per source step and every time it reaches `old` one
//! destination sample is emitted from the current source sample. Starting
//! the term at `old - 1` makes destination `d` read source
//! `floor(d * old / new)` and emits exactly `new` samples per axis.

use alloc::vec;
use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::limits::buffer_len;

impl PixelBuffer {
    /// Replace the image with a `new_width` x `new_height` resampled copy.
    ///
    /// Negative dimensions leave the buffer untouched. Scaling to the current
    /// dimensions reproduces the buffer exactly.
    pub fn scale(&mut self, new_width: i32, new_height: i32) -> Result<(), RasterError> {
        let (Ok(width), Ok(height)) = (u32::try_from(new_width), u32::try_from(new_height)) else {
            return Ok(());
        };
        let data = resample(self, width, height)?;
        self.replace(width, height, data);
        Ok(())
    }

    /// Resampled copy, leaving `self` unchanged.
    pub fn scaled(&self, new_width: u32, new_height: u32) -> Result<PixelBuffer, RasterError> {
        let data = resample(self, new_width, new_height)?;
        PixelBuffer::from_vec(data, new_width, new_height, self.layout())
    }
}

fn resample(src: &PixelBuffer, new_width: u32, new_height: u32) -> Result<Vec<u8>, RasterError> {
    let bpp = src.bytes_per_pixel();
    let mut dst = vec![0u8; buffer_len(new_width, new_height, bpp)?];
    if dst.is_empty() {
        return Ok(dst);
    }

    let (old_w, old_h) = (src.width() as usize, src.height() as usize);
    let (new_w, new_h) = (new_width as usize, new_height as usize);
    let src_stride = old_w * bpp;
    let dst_stride = new_w * bpp;
    let pixels = src.as_bytes();

    let mut next_row = 0usize;
    let mut err_y = old_h.saturating_sub(1);
    for y in 0..old_h {
        err_y += new_h;
        if err_y < old_h {
            // Downscaling: this source row maps to no destination row.
            continue;
        }
        let written = next_row;
        resample_row(
            &pixels[y * src_stride..(y + 1) * src_stride],
            &mut dst[written * dst_stride..(written + 1) * dst_stride],
            bpp,
        );
        err_y -= old_h;
        next_row += 1;
        // Upscaling: repeat the row just written instead of revisiting the source.
        while err_y >= old_h {
            dst.copy_within(
                written * dst_stride..(written + 1) * dst_stride,
                next_row * dst_stride,
            );
            err_y -= old_h;
            next_row += 1;
        }
    }
    debug_assert_eq!(next_row, if old_h == 0 { 0 } else { new_h });
    Ok(dst)
}

fn resample_row(src: &[u8], dst: &mut [u8], bpp: usize) {
    let old_w = src.len() / bpp;
    let new_w = dst.len() / bpp;
    let mut err_x = old_w.saturating_sub(1);
    let mut out = dst.chunks_exact_mut(bpp);
    for pixel in src.chunks_exact(bpp) {
        err_x += new_w;
        while err_x >= old_w {
            err_x -= old_w;
            if let Some(slot) = out.next() {
                slot.copy_from_slice(pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelLayout;

    fn noise(width: u32, height: u32, layout: PixelLayout) -> PixelBuffer {
        let mut state = 0x9E37_79B9u32 ^ (width * 31 + height);
        let len = width as usize * height as usize * layout.bytes_per_pixel();
        let data = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        PixelBuffer::from_vec(data, width, height, layout).unwrap()
    }

    fn brute_force(src: &PixelBuffer, new_w: u32, new_h: u32) -> PixelBuffer {
        let mut out = PixelBuffer::new(new_w, new_h, src.layout()).unwrap();
        for y in 0..new_h {
            for x in 0..new_w {
                let sx = (u64::from(x) * u64::from(src.width()) / u64::from(new_w)) as i32;
                let sy = (u64::from(y) * u64::from(src.height()) / u64::from(new_h)) as i32;
                out.set(x as i32, y as i32, &src.get(sx, sy)).unwrap();
            }
        }
        out
    }

    #[test]
    fn identity_scale_is_exact() {
        for layout in [PixelLayout::Gray8, PixelLayout::Bgr8, PixelLayout::Bgra8] {
            let original = noise(7, 5, layout);
            let mut buf = original.clone();
            buf.scale(7, 5).unwrap();
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn matches_brute_force_nearest_neighbour() {
        for (sw, sh) in [(1, 1), (3, 2), (4, 4), (5, 7), (8, 3)] {
            let src = noise(sw, sh, PixelLayout::Bgr8);
            for nw in 1..=11 {
                for nh in 1..=9 {
                    let got = src.scaled(nw, nh).unwrap();
                    assert_eq!(got, brute_force(&src, nw, nh), "{sw}x{sh} -> {nw}x{nh}");
                }
            }
        }
    }

    #[test]
    fn upscale_duplicates_pixels() {
        let mut buf = PixelBuffer::from_vec(vec![1, 2, 3, 4], 2, 2, PixelLayout::Gray8).unwrap();
        buf.scale(4, 4).unwrap();
        assert_eq!(
            buf.as_bytes(),
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn downscale_picks_every_other_sample() {
        let data: Vec<u8> = (0..16).collect();
        let mut buf = PixelBuffer::from_vec(data, 4, 4, PixelLayout::Gray8).unwrap();
        buf.scale(2, 2).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(buf.as_bytes(), &[0, 2, 8, 10]);
    }

    #[test]
    fn negative_dimensions_are_noops() {
        let original = noise(3, 3, PixelLayout::Bgra8);
        let mut buf = original.clone();
        buf.scale(-1, 5).unwrap();
        buf.scale(5, -1).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn zero_sized_targets_and_sources() {
        let mut buf = noise(3, 3, PixelLayout::Gray8);
        buf.scale(0, 4).unwrap();
        assert_eq!((buf.width(), buf.height()), (0, 4));
        assert!(buf.as_bytes().is_empty());

        let empty = PixelBuffer::new(0, 0, PixelLayout::Gray8).unwrap();
        let grown = empty.scaled(2, 2).unwrap();
        assert_eq!(grown.as_bytes(), &[0, 0, 0, 0]);
    }
}
