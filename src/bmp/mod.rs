//! 24-bit uncompressed BMP codec (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], or
//! [`crate::DecodeRequest`].

mod decode;
mod encode;
mod header;

pub use header::{
    BmpHeaders, FileHeader, HeaderSummary, InfoHeader, decode_file_header, decode_info_header,
};

pub(crate) use decode::decode_grid;
pub(crate) use encode::encode_grid;

/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the only accepted info header (BITMAPINFOHEADER).
pub const INFO_HEADER_SIZE: usize = 40;

/// Both headers together; the earliest offset pixel data may start at.
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// The only accepted bit depth.
pub const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

/// Bytes per stored row: `floor((bits_per_pixel * width + 31) / 32) * 4`.
///
/// Rows are padded to a 4-byte boundary. Returns `None` if the result does
/// not fit in `usize`.
pub fn row_bytes(bits_per_pixel: u16, width: u32) -> Option<usize> {
    let bits = u64::from(bits_per_pixel) * u64::from(width);
    let bytes = (bits + 31) / 32 * 4;
    usize::try_from(bytes).ok()
}
