use crate::error::RasterError;

/// Resource limits applied when decoding a TGA file, before any pixel
/// memory is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate a decode target and return its pixel buffer size in bytes.
    pub(crate) fn check_image(
        &self,
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
    ) -> Result<usize, RasterError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        let bytes = buffer_len(width, height, bytes_per_pixel)?;
        exceeds("allocation", bytes as u64, self.max_memory_bytes)?;
        Ok(bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), RasterError> {
    match limit {
        Some(max) if value > max => Err(RasterError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

/// `width * height * bytes_per_pixel`, or `DimensionsTooLarge` on overflow.
pub(crate) fn buffer_len(
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
) -> Result<usize, RasterError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(bytes_per_pixel))
        .ok_or(RasterError::DimensionsTooLarge { width, height })
}
