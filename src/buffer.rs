//! Owned, bounds-checked pixel storage.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::RasterError;
use crate::limits::buffer_len;
use crate::pixel::{Color, PixelLayout};

/// A row-major image held in one contiguous byte array of exactly
/// `width * height * bytes_per_pixel` bytes, top row first.
///
/// The pixel at `(x, y)` lives at `[(x + y * width) * bpp, +bpp)`, channels
/// in native TGA order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled buffer.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Result<Self, RasterError> {
        let len = buffer_len(width, height, layout.bytes_per_pixel())?;
        Ok(Self {
            width,
            height,
            layout,
            data: vec![0u8; len],
        })
    }

    /// Wrap existing pixel bytes. Extra trailing bytes are dropped.
    pub fn from_vec(
        mut data: Vec<u8>,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, RasterError> {
        let needed = buffer_len(width, height, layout.bytes_per_pixel())?;
        if data.len() < needed {
            return Err(RasterError::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        data.truncate(needed);
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// Raw pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the pixel bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of `(x, y)`, or `None` when outside the image.
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((x as usize + y as usize * self.width as usize) * self.bytes_per_pixel())
    }

    /// Copy of the pixel at `(x, y)`; a zeroed color when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Color {
        let bpp = self.bytes_per_pixel();
        self.offset(x, y)
            .and_then(|off| Color::from_bytes(&self.data[off..off + bpp]))
            .unwrap_or(Color::zeroed(self.layout))
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    ///
    /// Fails only when `color` has fewer channels than the buffer's bytes per
    /// pixel; a longer color contributes its leading channels.
    pub fn set(&mut self, x: i32, y: i32, color: &Color) -> Result<(), RasterError> {
        self.check_color(color)?;
        self.put(x, y, color);
        Ok(())
    }

    pub(crate) fn check_color(&self, color: &Color) -> Result<(), RasterError> {
        let bpp = self.bytes_per_pixel();
        if color.len() < bpp {
            return Err(RasterError::ColorMismatch {
                expected: bpp,
                actual: color.len(),
            });
        }
        Ok(())
    }

    /// Unvalidated write for callers that already ran `check_color`.
    pub(crate) fn put(&mut self, x: i32, y: i32, color: &Color) {
        let bpp = self.bytes_per_pixel();
        if let Some(off) = self.offset(x, y) {
            self.data[off..off + bpp].copy_from_slice(&color.as_bytes()[..bpp]);
        }
    }

    /// Mirror every row in place (column `i` swaps with `width - 1 - i`).
    pub fn flip_horizontally(&mut self) {
        let bpp = self.bytes_per_pixel();
        flip_rows(&mut self.data, self.width as usize, bpp);
    }

    /// Mirror the scanline order in place (row `j` swaps with `height - 1 - j`).
    pub fn flip_vertically(&mut self) {
        let stride = self.width as usize * self.bytes_per_pixel();
        flip_scanlines(&mut self.data, stride, self.height as usize);
    }

    /// Install new dimensions and pixels in one step.
    pub(crate) fn replace(&mut self, width: u32, height: u32, data: Vec<u8>) {
        debug_assert_eq!(
            Some(data.len()),
            buffer_len(width, height, self.bytes_per_pixel()).ok()
        );
        self.width = width;
        self.height = height;
        self.data = data;
    }
}

pub(crate) fn flip_rows(data: &mut [u8], width: usize, bpp: usize) {
    let stride = width * bpp;
    if stride == 0 {
        return;
    }
    for row in data.chunks_exact_mut(stride) {
        for i in 0..width / 2 {
            let j = width - 1 - i;
            let (left, right) = row.split_at_mut(j * bpp);
            left[i * bpp..(i + 1) * bpp].swap_with_slice(&mut right[..bpp]);
        }
    }
}

pub(crate) fn flip_scanlines(data: &mut [u8], stride: usize, height: usize) {
    if stride == 0 {
        return;
    }
    for j in 0..height / 2 {
        let k = height - 1 - j;
        let (top, bottom) = data.split_at_mut(k * stride);
        top[j * stride..(j + 1) * stride].swap_with_slice(&mut bottom[..stride]);
    }
}
