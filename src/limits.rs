//! Caps on how large an image a decode will accept, judged from the headers
//! before any pixel buffer exists.

use alloc::format;

use crate::bmp::BmpHeaders;
use crate::error::BmpError;

/// Upper bounds applied to a BMP's declared geometry.
///
/// Every field is optional; `Limits::default()` accepts anything the format
/// itself can describe.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel array, row padding included.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject `headers` whose geometry exceeds any configured cap.
    pub(crate) fn admit(&self, headers: &BmpHeaders) -> Result<(), BmpError> {
        let width = u64::from(headers.width());
        let height = u64::from(headers.height());
        within("width", width, self.max_width)?;
        within("height", height, self.max_height)?;
        within("pixel count", width * height, self.max_pixels)?;
        if self.max_memory_bytes.is_some() {
            within(
                "pixel array bytes",
                pixel_array_bytes(headers)?,
                self.max_memory_bytes,
            )?;
        }
        Ok(())
    }
}

/// Stored size of the pixel array, padding included.
fn pixel_array_bytes(headers: &BmpHeaders) -> Result<u64, BmpError> {
    let row_bytes = headers.row_bytes()? as u64;
    Ok(row_bytes.saturating_mul(u64::from(headers.height())))
}

fn within(what: &str, value: u64, cap: Option<u64>) -> Result<(), BmpError> {
    match cap {
        Some(max) if value > max => Err(BmpError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::{FileHeader, InfoHeader};

    fn headers(width: i32, height: i32) -> BmpHeaders {
        BmpHeaders {
            file: FileHeader {
                magic: *b"BM",
                file_size: 0,
                reserved1: 0,
                reserved2: 0,
                pixel_data_offset: 54,
            },
            info: InfoHeader {
                header_size: 40,
                width,
                height,
                color_planes: 1,
                bits_per_pixel: 24,
                compression: 0,
                image_size_bytes: 0,
                x_resolution_ppm: 0,
                y_resolution_ppm: 0,
                palette_color_count: 0,
                important_color_count: 0,
            },
        }
    }

    fn rejected(limits: &Limits, width: i32, height: i32) -> bool {
        matches!(
            limits.admit(&headers(width, height)),
            Err(BmpError::LimitExceeded(_))
        )
    }

    #[test]
    fn default_admits_largest_geometry() {
        assert!(Limits::default().admit(&headers(i32::MAX, i32::MAX)).is_ok());
    }

    #[test]
    fn width_cap() {
        let limits = Limits {
            max_width: Some(8),
            ..Default::default()
        };
        assert!(!rejected(&limits, 8, 1000));
        assert!(rejected(&limits, 9, 1));
    }

    #[test]
    fn height_cap() {
        let limits = Limits {
            max_height: Some(8),
            ..Default::default()
        };
        assert!(!rejected(&limits, 1000, 8));
        assert!(rejected(&limits, 1, 9));
    }

    #[test]
    fn pixel_count_cap() {
        let limits = Limits {
            max_pixels: Some(100),
            ..Default::default()
        };
        assert!(!rejected(&limits, 10, 10));
        assert!(rejected(&limits, 10, 11));
    }

    #[test]
    fn memory_cap_counts_row_padding() {
        // width 5: 15 pixel bytes padded to 16 per row
        let limits = Limits {
            max_memory_bytes: Some(32),
            ..Default::default()
        };
        assert!(!rejected(&limits, 5, 2));
        assert!(rejected(&limits, 5, 3));
        // 2 rows of 15 unpadded bytes would fit under 31, padded ones do not
        let limits = Limits {
            max_memory_bytes: Some(31),
            ..Default::default()
        };
        assert!(rejected(&limits, 5, 2));
    }
}
