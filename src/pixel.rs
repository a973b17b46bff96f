/// Pixel memory layout.
///
/// TGA stores truecolor channels as blue, green, red, (alpha); the layouts
/// below keep that native order.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
        }
    }

    /// Layout for a bytes-per-pixel count, if it is one of 1, 3 or 4.
    pub fn from_bytes_per_pixel(bpp: usize) -> Option<Self> {
        match bpp {
            1 => Some(Self::Gray8),
            3 => Some(Self::Bgr8),
            4 => Some(Self::Bgra8),
            _ => None,
        }
    }

    /// Whether this layout is written with a grayscale image type.
    pub fn is_grayscale(&self) -> bool {
        matches!(self, Self::Gray8)
    }
}

/// A single pixel value in native channel order.
///
/// Holds up to four channels; [`Color::len`] says how many are meaningful.
/// Colors are `Copy`, so [`crate::PixelBuffer::get`] always hands out a
/// detached value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    channels: [u8; 4],
    len: u8,
}

impl Color {
    /// One-channel grayscale color.
    pub const fn gray(v: u8) -> Self {
        Self {
            channels: [v, 0, 0, 0],
            len: 1,
        }
    }

    /// Three-channel color given in native blue, green, red order.
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self {
            channels: [b, g, r, 0],
            len: 3,
        }
    }

    /// Four-channel color given in native blue, green, red, alpha order.
    pub const fn bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self {
            channels: [b, g, r, a],
            len: 4,
        }
    }

    /// Three-channel color from display-order components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::bgr(b, g, r)
    }

    /// Four-channel color from display-order components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::bgra(b, g, r, a)
    }

    /// All-zero color with `layout`'s channel count.
    pub const fn zeroed(layout: PixelLayout) -> Self {
        let len = match layout {
            PixelLayout::Gray8 => 1,
            PixelLayout::Bgr8 => 3,
            PixelLayout::Bgra8 => 4,
        };
        Self {
            channels: [0; 4],
            len,
        }
    }

    /// Color from raw native-order bytes. Returns `None` unless 1..=4 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > 4 {
            return None;
        }
        let mut channels = [0u8; 4];
        channels[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            channels,
            len: bytes.len() as u8,
        })
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Channels in native order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.channels[..self.len()]
    }
}
