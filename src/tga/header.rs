//! The fixed 18-byte TGA header.

use crate::error::RasterError;
use crate::pixel::PixelLayout;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 18;

/// Image descriptor bit: pixels are stored right-to-left.
pub const DESCRIPTOR_RIGHT_TO_LEFT: u8 = 0x10;
/// Image descriptor bit: first stored row is the top of the image.
pub const DESCRIPTOR_TOP_ORIGIN: u8 = 0x20;

/// Supported TGA image types (`dataTypeCode`).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// 2: uncompressed BGR/BGRA.
    TrueColor,
    /// 3: uncompressed grayscale.
    Grayscale,
    /// 10: run-length encoded BGR/BGRA.
    RleTrueColor,
    /// 11: run-length encoded grayscale.
    RleGrayscale,
}

impl ImageType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(Self::TrueColor),
            3 => Some(Self::Grayscale),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleGrayscale),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(self, Self::RleTrueColor | Self::RleGrayscale)
    }

    /// Image type used when writing `layout`.
    pub fn for_layout(layout: PixelLayout, rle: bool) -> Self {
        match (layout.is_grayscale(), rle) {
            (true, false) => Self::Grayscale,
            (true, true) => Self::RleGrayscale,
            (false, false) => Self::TrueColor,
            (false, true) => Self::RleTrueColor,
        }
    }
}

/// Raw header fields, little-endian on disk, in file order.
///
/// Width and height occupy 16 bits but are signed in the format; values with
/// the top bit set are rejected by [`TgaHeader::parse`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type_code: u8,
    pub color_map_origin: u16,
    pub color_map_length: u16,
    pub color_map_depth: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Read the header from the first 18 bytes of `data` and check its geometry.
    ///
    /// Only geometry is validated here; the image type and pixel depth are
    /// checked by [`Self::image_type`] and [`Self::layout`].
    pub fn parse(data: &[u8]) -> Result<Self, RasterError> {
        let b: &[u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|s| s.try_into().ok())
            .ok_or(RasterError::UnexpectedEof)?;
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);

        let header = Self {
            id_length: b[0],
            color_map_type: b[1],
            data_type_code: b[2],
            color_map_origin: u16_at(3),
            color_map_length: u16_at(5),
            color_map_depth: b[7],
            x_origin: u16_at(8),
            y_origin: u16_at(10),
            width: u16_at(12),
            height: u16_at(14),
            bits_per_pixel: b[16],
            image_descriptor: b[17],
        };
        header.validate()?;
        Ok(header)
    }

    fn validate(&self) -> Result<(), RasterError> {
        if (self.width as i16) < 0 {
            return Err(RasterError::InvalidHeader(alloc::format!(
                "negative width {}",
                self.width as i16
            )));
        }
        if (self.height as i16) < 0 {
            return Err(RasterError::InvalidHeader(alloc::format!(
                "negative height {}",
                self.height as i16
            )));
        }
        if self.bits_per_pixel < 1 {
            return Err(RasterError::InvalidHeader(
                "bits per pixel must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Serialize to the on-disk layout. Inverse of [`Self::parse`].
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = self.id_length;
        out[1] = self.color_map_type;
        out[2] = self.data_type_code;
        out[3..5].copy_from_slice(&self.color_map_origin.to_le_bytes());
        out[5..7].copy_from_slice(&self.color_map_length.to_le_bytes());
        out[7] = self.color_map_depth;
        out[8..10].copy_from_slice(&self.x_origin.to_le_bytes());
        out[10..12].copy_from_slice(&self.y_origin.to_le_bytes());
        out[12..14].copy_from_slice(&self.width.to_le_bytes());
        out[14..16].copy_from_slice(&self.height.to_le_bytes());
        out[16] = self.bits_per_pixel;
        out[17] = self.image_descriptor;
        out
    }

    /// Header for a top-origin, left-to-right image with no ID or color map.
    pub(crate) fn for_image(width: u16, height: u16, layout: PixelLayout, rle: bool) -> Self {
        Self {
            data_type_code: ImageType::for_layout(layout, rle).code(),
            width,
            height,
            bits_per_pixel: (layout.bytes_per_pixel() << 3) as u8,
            image_descriptor: DESCRIPTOR_TOP_ORIGIN,
            ..Self::default()
        }
    }

    pub fn image_type(&self) -> Result<ImageType, RasterError> {
        ImageType::from_code(self.data_type_code).ok_or_else(|| {
            RasterError::UnsupportedVariant(alloc::format!(
                "image type {} (supported: 2, 3, 10, 11)",
                self.data_type_code
            ))
        })
    }

    /// Pixel layout implied by `bits_per_pixel`.
    pub fn layout(&self) -> Result<PixelLayout, RasterError> {
        PixelLayout::from_bytes_per_pixel(usize::from(self.bits_per_pixel >> 3)).ok_or_else(
            || {
                RasterError::UnsupportedVariant(alloc::format!(
                    "{} bits per pixel (supported: 8, 24, 32)",
                    self.bits_per_pixel
                ))
            },
        )
    }

    pub fn is_top_origin(&self) -> bool {
        self.image_descriptor & DESCRIPTOR_TOP_ORIGIN != 0
    }

    pub fn is_right_to_left(&self) -> bool {
        self.image_descriptor & DESCRIPTOR_RIGHT_TO_LEFT != 0
    }

    /// Offset of the pixel payload: header, image ID, then any color map.
    pub(crate) fn payload_offset(&self) -> usize {
        let color_map = if self.color_map_type == 1 {
            usize::from(self.color_map_length) * usize::from(self.color_map_depth).div_ceil(8)
        } else {
            0
        };
        HEADER_LEN + usize::from(self.id_length) + color_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TgaHeader {
        TgaHeader {
            id_length: 3,
            color_map_type: 1,
            data_type_code: 10,
            color_map_origin: 0x0102,
            color_map_length: 0x0304,
            color_map_depth: 24,
            x_origin: 0x1122,
            y_origin: 0x3344,
            width: 640,
            height: 480,
            bits_per_pixel: 32,
            image_descriptor: 0x28,
        }
    }

    #[test]
    fn serialize_is_little_endian_in_field_order() {
        let bytes = sample().to_bytes();
        assert_eq!(
            bytes,
            [
                3, 1, 10, 0x02, 0x01, 0x04, 0x03, 24, 0x22, 0x11, 0x44, 0x33, 0x80, 0x02, 0xE0,
                0x01, 32, 0x28
            ]
        );
    }

    #[test]
    fn parse_inverts_serialize() {
        let h = sample();
        assert_eq!(TgaHeader::parse(&h.to_bytes()).unwrap(), h);

        let extremes = TgaHeader {
            width: i16::MAX as u16,
            height: 0,
            bits_per_pixel: 1,
            color_map_origin: u16::MAX,
            x_origin: u16::MAX,
            ..TgaHeader::default()
        };
        assert_eq!(TgaHeader::parse(&extremes.to_bytes()).unwrap(), extremes);
    }

    #[test]
    fn parse_rejects_bad_geometry() {
        for h in [
            TgaHeader {
                width: 0x8000,
                ..sample()
            },
            TgaHeader {
                height: 0xFFFF,
                ..sample()
            },
            TgaHeader {
                bits_per_pixel: 0,
                ..sample()
            },
        ] {
            assert!(matches!(
                TgaHeader::parse(&h.to_bytes()),
                Err(RasterError::InvalidHeader(_))
            ));
        }
    }

    #[test]
    fn parse_short_input_is_eof() {
        assert!(matches!(
            TgaHeader::parse(&[0u8; 17]),
            Err(RasterError::UnexpectedEof)
        ));
    }

    #[test]
    fn image_type_and_layout_checks() {
        let h = TgaHeader {
            data_type_code: 1,
            ..sample()
        };
        assert!(matches!(
            h.image_type(),
            Err(RasterError::UnsupportedVariant(_))
        ));
        let h = TgaHeader {
            bits_per_pixel: 16,
            ..sample()
        };
        assert!(matches!(h.layout(), Err(RasterError::UnsupportedVariant(_))));
        assert_eq!(sample().layout().unwrap(), PixelLayout::Bgra8);
        assert!(sample().image_type().unwrap().is_rle());
    }

    #[test]
    fn descriptor_bits() {
        let h = sample();
        assert!(h.is_top_origin());
        assert!(!h.is_right_to_left());
        let h = TgaHeader {
            image_descriptor: DESCRIPTOR_RIGHT_TO_LEFT,
            ..h
        };
        assert!(!h.is_top_origin());
        assert!(h.is_right_to_left());
    }

    #[test]
    fn payload_skips_id_and_color_map() {
        assert_eq!(sample().payload_offset(), 18 + 3 + 0x0304 * 3);
        let h = TgaHeader {
            color_map_type: 0,
            ..sample()
        };
        assert_eq!(h.payload_offset(), 21);
    }

    #[test]
    fn written_headers_describe_layout() {
        let h = TgaHeader::for_image(3, 2, PixelLayout::Gray8, true);
        assert_eq!(h.data_type_code, 11);
        assert_eq!(h.bits_per_pixel, 8);
        assert_eq!(h.image_descriptor, 0x20);
        let h = TgaHeader::for_image(3, 2, PixelLayout::Bgra8, false);
        assert_eq!(h.data_type_code, 2);
        assert_eq!(h.bits_per_pixel, 32);
    }
}
