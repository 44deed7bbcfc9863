//! BMP file header and BITMAPINFOHEADER codec.
//!
//! Both headers are read and written at explicit byte offsets. The on-disk
//! layout is packed (a 2-byte field is followed directly by a 4-byte field),
//! so nothing here relies on struct layout.

use alloc::vec::Vec;
use core::fmt;

use super::{FILE_HEADER_SIZE, HEADERS_SIZE, INFO_HEADER_SIZE, SUPPORTED_BITS_PER_PIXEL};
use crate::error::{BmpError, FormatViolation};

const MAGIC: [u8; 2] = *b"BM";

fn u16_at(b: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([b[off], b[off + 1]])
}

fn u32_at(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

fn i32_at(b: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

// ── File header (14 bytes) ──────────────────────────────────────────

/// The 14-byte BMP file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Parse the file header from the start of `bytes`.
    ///
    /// Fails with [`BmpError::NotBmp`] if the magic is not `"BM"`.
    pub fn parse(bytes: &[u8]) -> Result<Self, BmpError> {
        if bytes.len() < MAGIC.len() {
            return Err(BmpError::TruncatedInput {
                needed: FILE_HEADER_SIZE,
                available: bytes.len(),
            });
        }
        if bytes[0..2] != MAGIC {
            return Err(BmpError::NotBmp);
        }
        if bytes.len() < FILE_HEADER_SIZE {
            return Err(BmpError::TruncatedInput {
                needed: FILE_HEADER_SIZE,
                available: bytes.len(),
            });
        }
        Ok(Self {
            magic: MAGIC,
            file_size: u32_at(bytes, 2),
            reserved1: u16_at(bytes, 6),
            reserved2: u16_at(bytes, 8),
            pixel_data_offset: u32_at(bytes, 10),
        })
    }

    /// Append the 14 on-disk bytes to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }

    /// The magic tag as two characters (normally `"BM"`).
    pub fn magic_chars(&self) -> [char; 2] {
        [char::from(self.magic[0]), char::from(self.magic[1])]
    }
}

// ── Info header (40 bytes) ──────────────────────────────────────────

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive heights are bottom-up, the only order accepted.
    pub height: i32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size_bytes: u32,
    pub x_resolution_ppm: u32,
    pub y_resolution_ppm: u32,
    pub palette_color_count: u32,
    pub important_color_count: u32,
}

impl InfoHeader {
    /// Parse the info header from `bytes`, which must start at file offset 14.
    ///
    /// Performs no validation; see [`InfoHeader::check_format`].
    pub fn parse(bytes: &[u8]) -> Result<Self, BmpError> {
        if bytes.len() < INFO_HEADER_SIZE {
            return Err(BmpError::TruncatedInput {
                needed: HEADERS_SIZE,
                available: FILE_HEADER_SIZE + bytes.len(),
            });
        }
        Ok(Self {
            header_size: u32_at(bytes, 0),
            width: i32_at(bytes, 4),
            height: i32_at(bytes, 8),
            color_planes: u16_at(bytes, 12),
            bits_per_pixel: u16_at(bytes, 14),
            compression: u32_at(bytes, 16),
            image_size_bytes: u32_at(bytes, 20),
            x_resolution_ppm: u32_at(bytes, 24),
            y_resolution_ppm: u32_at(bytes, 28),
            palette_color_count: u32_at(bytes, 32),
            important_color_count: u32_at(bytes, 36),
        })
    }

    /// Check the three independent format requirements: 40-byte header,
    /// no compression, 24 bits per pixel. Every failure is reported.
    pub fn check_format(&self) -> Result<(), BmpError> {
        let mut violation = FormatViolation::default();
        if self.header_size as usize != INFO_HEADER_SIZE {
            violation.header_size = Some(self.header_size);
        }
        if self.compression != 0 {
            violation.compression = Some(self.compression);
        }
        if self.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
            violation.bits_per_pixel = Some(self.bits_per_pixel);
        }
        if violation.is_empty() {
            Ok(())
        } else {
            Err(BmpError::UnsupportedFormat(violation))
        }
    }

    /// Append the 40 on-disk bytes to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.color_planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size_bytes.to_le_bytes());
        out.extend_from_slice(&self.x_resolution_ppm.to_le_bytes());
        out.extend_from_slice(&self.y_resolution_ppm.to_le_bytes());
        out.extend_from_slice(&self.palette_color_count.to_le_bytes());
        out.extend_from_slice(&self.important_color_count.to_le_bytes());
    }
}

/// Parse the file header at the start of `bytes`.
pub fn decode_file_header(bytes: &[u8]) -> Result<FileHeader, BmpError> {
    FileHeader::parse(bytes)
}

/// Parse and validate the info header; `bytes` starts at file offset 14.
pub fn decode_info_header(bytes: &[u8]) -> Result<InfoHeader, BmpError> {
    let info = InfoHeader::parse(bytes)?;
    info.check_format()?;
    Ok(info)
}

// ── Both headers ────────────────────────────────────────────────────

/// File header and info header of one bitmap, kept together so the encoder
/// can write them back verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeaders {
    /// Parse and validate both headers from the start of a BMP file.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        let file = decode_file_header(data)?;
        let info = decode_info_header(&data[FILE_HEADER_SIZE..])?;

        if info.width <= 0 {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "BMP width must be positive, got {}",
                info.width
            )));
        }
        if info.height <= 0 {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "BMP height must be positive (bottom-up), got {}",
                info.height
            )));
        }
        let offset = file.pixel_data_offset;
        if (offset as usize) < HEADERS_SIZE {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "pixel data offset {offset} overlaps the {HEADERS_SIZE}-byte headers"
            )));
        }
        if offset > file.file_size {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "pixel data offset {offset} is past the declared file size {}",
                file.file_size
            )));
        }

        log::debug!(
            "BMP headers: {}x{} {}bpp, pixel data at {offset}",
            info.width,
            info.height,
            info.bits_per_pixel
        );
        Ok(Self { file, info })
    }

    /// Image width in pixels (validated positive).
    pub fn width(&self) -> u32 {
        self.info.width.unsigned_abs()
    }

    /// Image height in pixels (validated positive).
    pub fn height(&self) -> u32 {
        self.info.height.unsigned_abs()
    }

    /// Bytes per stored row, including padding.
    pub fn row_bytes(&self) -> Result<usize, BmpError> {
        super::row_bytes(self.info.bits_per_pixel, self.width()).ok_or(
            BmpError::DimensionsTooLarge {
                width: self.width(),
                height: self.height(),
            },
        )
    }

    /// Append both headers (54 bytes) to `out`, exactly as parsed.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        self.file.write_to(out);
        self.info.write_to(out);
    }

    /// Human-readable dump of every header field.
    pub fn summary(&self) -> HeaderSummary<'_> {
        HeaderSummary(self)
    }
}

/// [`fmt::Display`] view of all header fields, one `Name: value` per line
/// between two rules.
pub struct HeaderSummary<'a>(&'a BmpHeaders);

impl fmt::Display for HeaderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "----------------------------------------";
        let BmpHeaders { file, info } = self.0;
        let [m0, m1] = file.magic_chars();
        writeln!(f, "{RULE}")?;
        writeln!(f, "Type: {m0}{m1}")?;
        writeln!(f, "Size: {}", file.file_size)?;
        writeln!(f, "Reserved: {} {}", file.reserved1, file.reserved2)?;
        writeln!(f, "Offset: {}", file.pixel_data_offset)?;
        writeln!(f, "Header size: {}", info.header_size)?;
        writeln!(f, "Width: {}", info.width)?;
        writeln!(f, "Height: {}", info.height)?;
        writeln!(f, "Color planes: {}", info.color_planes)?;
        writeln!(f, "Bits per pixel: {}", info.bits_per_pixel)?;
        writeln!(f, "Compression method: {}", info.compression)?;
        writeln!(f, "Image size (bytes): {}", info.image_size_bytes)?;
        writeln!(f, "Horizontal resolution (ppm): {}", info.x_resolution_ppm)?;
        writeln!(f, "Vertical resolution (ppm): {}", info.y_resolution_ppm)?;
        writeln!(f, "Colors in palette: {}", info.palette_color_count)?;
        writeln!(f, "Important colors: {}", info.important_color_count)?;
        write!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn header_bytes(width: i32, height: i32, bpp: u16, compression: u32) -> Vec<u8> {
        let mut b = vec![0u8; 54];
        b[0] = b'B';
        b[1] = b'M';
        b[2..6].copy_from_slice(&70u32.to_le_bytes());
        b[10..14].copy_from_slice(&54u32.to_le_bytes());
        b[14..18].copy_from_slice(&40u32.to_le_bytes());
        b[18..22].copy_from_slice(&width.to_le_bytes());
        b[22..26].copy_from_slice(&height.to_le_bytes());
        b[26..28].copy_from_slice(&1u16.to_le_bytes());
        b[28..30].copy_from_slice(&bpp.to_le_bytes());
        b[30..34].copy_from_slice(&compression.to_le_bytes());
        b[34..38].copy_from_slice(&16u32.to_le_bytes());
        b[38..42].copy_from_slice(&2835u32.to_le_bytes());
        b[42..46].copy_from_slice(&2835u32.to_le_bytes());
        b
    }

    #[test]
    fn fields_at_packed_offsets() {
        let mut b = header_bytes(2, 2, 24, 0);
        b[6..8].copy_from_slice(&0xABCDu16.to_le_bytes());
        b[8..10].copy_from_slice(&0x1234u16.to_le_bytes());
        b[46..50].copy_from_slice(&7u32.to_le_bytes());
        b[50..54].copy_from_slice(&3u32.to_le_bytes());
        let h = BmpHeaders::parse(&b).unwrap();
        assert_eq!(h.file.file_size, 70);
        assert_eq!(h.file.reserved1, 0xABCD);
        assert_eq!(h.file.reserved2, 0x1234);
        assert_eq!(h.file.pixel_data_offset, 54);
        assert_eq!(h.info.header_size, 40);
        assert_eq!((h.info.width, h.info.height), (2, 2));
        assert_eq!(h.info.color_planes, 1);
        assert_eq!(h.info.bits_per_pixel, 24);
        assert_eq!(h.info.image_size_bytes, 16);
        assert_eq!(h.info.x_resolution_ppm, 2835);
        assert_eq!(h.info.y_resolution_ppm, 2835);
        assert_eq!(h.info.palette_color_count, 7);
        assert_eq!(h.info.important_color_count, 3);
    }

    #[test]
    fn write_is_inverse_of_parse() {
        let mut b = header_bytes(5, 3, 24, 0);
        b[6] = 0x11;
        b[50] = 0x22;
        let h = BmpHeaders::parse(&b).unwrap();
        let mut out = Vec::new();
        h.write_to(&mut out);
        assert_eq!(out, b);
    }

    #[test]
    fn bad_magic_is_not_bmp() {
        let mut b = header_bytes(1, 1, 24, 0);
        b[0] = b'P';
        assert!(matches!(decode_file_header(&b), Err(BmpError::NotBmp)));
        assert!(matches!(BmpHeaders::parse(&b), Err(BmpError::NotBmp)));
    }

    #[test]
    fn short_file_header_is_truncated() {
        assert!(matches!(
            decode_file_header(b"BM\x00\x00"),
            Err(BmpError::TruncatedInput {
                needed: 14,
                available: 4
            })
        ));
        assert!(matches!(
            decode_file_header(b""),
            Err(BmpError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn short_info_header_is_truncated() {
        let b = header_bytes(1, 1, 24, 0);
        assert!(matches!(
            BmpHeaders::parse(&b[..30]),
            Err(BmpError::TruncatedInput {
                needed: 54,
                available: 30
            })
        ));
    }

    #[test]
    fn compression_rejected() {
        let b = header_bytes(1, 1, 24, 1);
        match BmpHeaders::parse(&b) {
            Err(BmpError::UnsupportedFormat(v)) => {
                assert_eq!(v.compression, Some(1));
                assert_eq!(v.header_size, None);
                assert_eq!(v.bits_per_pixel, None);
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn all_three_checks_reported() {
        let mut b = header_bytes(1, 1, 8, 2);
        b[14..18].copy_from_slice(&124u32.to_le_bytes());
        match decode_info_header(&b[14..]) {
            Err(BmpError::UnsupportedFormat(v)) => {
                assert_eq!(v.header_size, Some(124));
                assert_eq!(v.compression, Some(2));
                assert_eq!(v.bits_per_pixel, Some(8));
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        for (w, h) in [(0, 1), (1, 0), (-1, 1), (1, -1)] {
            let b = header_bytes(w, h, 24, 0);
            assert!(
                matches!(BmpHeaders::parse(&b), Err(BmpError::InvalidHeader(_))),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn pixel_offset_bounds() {
        let mut b = header_bytes(1, 1, 24, 0);
        b[10..14].copy_from_slice(&20u32.to_le_bytes());
        assert!(matches!(
            BmpHeaders::parse(&b),
            Err(BmpError::InvalidHeader(_))
        ));

        b[10..14].copy_from_slice(&71u32.to_le_bytes());
        assert!(matches!(
            BmpHeaders::parse(&b),
            Err(BmpError::InvalidHeader(_))
        ));

        b[10..14].copy_from_slice(&70u32.to_le_bytes());
        assert!(BmpHeaders::parse(&b).is_ok());
    }

    #[test]
    fn summary_lists_every_field() {
        let h = BmpHeaders::parse(&header_bytes(2, 3, 24, 0)).unwrap();
        let text = h.summary().to_string();
        assert!(text.starts_with("----"));
        assert!(text.contains("Type: BM\n"));
        assert!(text.contains("Width: 2\n"));
        assert!(text.contains("Height: 3\n"));
        assert!(text.contains("Bits per pixel: 24\n"));
        assert!(text.contains("Horizontal resolution (ppm): 2835\n"));
        assert!(text.contains("Important colors: 0\n"));
        assert_eq!(text.lines().count(), 17);
    }
}
