//! # zengray
//!
//! Decoder and encoder for uncompressed 24-bit BMP files, with an in-place
//! grayscale transform and an ASCII-art renderer.
//!
//! ## Pipeline
//!
//! raw bytes → [`BmpHeaders`] → [`PixelGrid`] → [`apply_grayscale`] → BMP bytes
//! (or [`render_ascii`] text).
//!
//! The encoder writes the input headers back verbatim, so a converted file
//! differs from its source only in pixel content.
//!
//! ## Supported Input
//!
//! - 40-byte BITMAPINFOHEADER only
//! - 24 bits per pixel, no compression, no palette
//! - Positive (bottom-up) height and width
//!
//! Everything else is rejected with [`BmpError::UnsupportedFormat`] or
//! [`BmpError::InvalidHeader`]. Short files fail with
//! [`BmpError::TruncatedInput`] instead of being zero-padded.
//!
//! ## Usage
//!
//! ```no_run
//! use zengray::{DecodeRequest, apply_grayscale, encode_bmp, render_ascii};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let mut bitmap = DecodeRequest::new(data).decode(Unstoppable)?;
//! println!("{}", bitmap.headers.summary());
//!
//! for line in render_ascii(&bitmap.grid) {
//!     println!("{line}");
//! }
//!
//! apply_grayscale(&mut bitmap.grid);
//! let gray = encode_bmp(&bitmap, Unstoppable)?;
//! # Ok::<(), zengray::BmpError>(())
//! ```
//!
//! With the `std` feature (default), [`convert_to_grayscale_bmp`] runs the
//! whole pipeline on a file and writes `new.bmp` to the current directory.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod ascii;
mod decode;
mod encode;
mod error;
mod grayscale;
mod grid;
mod limits;
mod pixel;

pub mod bmp;

#[cfg(feature = "std")]
mod convert;

// Re-exports
pub use ascii::{DENSITY, density_char, render_ascii};
pub use bmp::{BmpHeaders, FileHeader, HeaderSummary, InfoHeader, row_bytes};
pub use decode::{DecodeRequest, DecodedBitmap};
pub use encode::{convert_bytes, encode_bmp};
pub use enough::{Stop, Unstoppable};
pub use error::{BmpError, FormatViolation};
pub use grayscale::{apply_grayscale, luminance};
pub use grid::PixelGrid;
pub use limits::Limits;
pub use pixel::ColorSample;

#[cfg(feature = "std")]
pub use convert::{
    Conversion, GrayscaleRequest, OUTPUT_FILE_NAME, convert_to_grayscale_bmp,
    render_file_as_ascii,
};

/// Decode a BMP held in memory.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<DecodedBitmap, BmpError> {
    DecodeRequest::new(data).decode(stop)
}
