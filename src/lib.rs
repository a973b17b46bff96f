//! # zenraster
//!
//! Truevision TGA decoder/encoder plus a small raster toolkit: a mutable
//! pixel buffer with mirroring, integer nearest-neighbour scaling and
//! Bresenham line drawing, enough to render a mesh wireframe.
//!
//! ## Supported Formats
//!
//! - TGA image types 2 and 3 (uncompressed truecolor / grayscale)
//! - TGA image types 10 and 11 (run-length encoded truecolor / grayscale)
//! - 8, 24 and 32 bits per pixel, kept in the file's native B, G, R, (A) order
//!
//! Bottom-origin and right-to-left files are reoriented on decode, so a
//! decoded buffer is always top row first. Files are written top-origin
//! with the TGA 2.0 footer.
//!
//! ## Zero-Copy Decoding
//!
//! An uncompressed top-origin file decodes to a slice borrowed from the
//! input. RLE or reoriented files allocate.
//!
//! ## Non-Goals
//!
//! - Color-mapped, 16-bit and other TGA variants (rejected, not approximated)
//! - Color space conversion
//! - Streaming or multi-threaded decode
//!
//! ## Usage
//!
//! ```no_run
//! use zenraster::{Color, DecodeRequest, EncodeRequest, ImageInfo, PixelBuffer, PixelLayout};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.native_layout);
//!
//! // Decode, draw, rescale, re-encode with RLE
//! let mut image = DecodeRequest::new(data).decode_buffer(Unstoppable)?;
//! image.draw_line(0, 0, 10, 20, &Color::rgb(255, 0, 0))?;
//! image.scale(64, 64)?;
//! let encoded = EncodeRequest::tga_rle().encode_buffer(&image, Unstoppable)?;
//!
//! // Or start from a blank canvas
//! let mut canvas = PixelBuffer::new(100, 100, PixelLayout::Bgr8)?;
//! canvas.set(50, 50, &Color::rgb(0, 255, 0))?;
//! # Ok::<(), zenraster::RasterError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod decode;
mod encode;
mod error;
mod info;
mod limits;
mod pixel;
mod raster;
mod resample;

pub mod mesh;
pub mod tga;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "rgb")]
mod typed;

// Re-exports
pub use buffer::PixelBuffer;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::RasterError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use mesh::{Mesh, render_wireframe};
pub use pixel::{Color, PixelLayout};
#[cfg(feature = "rgb")]
pub use typed::DecodePixel;

/// Decode a TGA file with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput<'_>, RasterError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode native-order pixels as an uncompressed TGA file.
pub fn encode_tga(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: impl Stop,
) -> Result<alloc::vec::Vec<u8>, RasterError> {
    EncodeRequest::tga().encode(pixels, width, height, layout, stop)
}

/// Encode native-order pixels as a run-length encoded TGA file.
pub fn encode_tga_rle(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: impl Stop,
) -> Result<alloc::vec::Vec<u8>, RasterError> {
    EncodeRequest::tga_rle().encode(pixels, width, height, layout, stop)
}
