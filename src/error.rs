use alloc::string::String;
use core::fmt;
use enough::StopReason;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Errors from BMP decoding, encoding and grayscale conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[cfg(feature = "std")]
    #[error("cannot open input {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a BMP image (magic bytes are not \"BM\")")]
    NotBmp,

    #[error("unsupported BMP variant: {0}")]
    UnsupportedFormat(FormatViolation),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("truncated input: need {needed} bytes, got {available}")]
    TruncatedInput { needed: usize, available: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("cannot write output {}: {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

/// The info-header checks that failed for an [`BmpError::UnsupportedFormat`].
///
/// Only one profile is accepted (40-byte BITMAPINFOHEADER, no compression,
/// 24 bits per pixel). Each field holds the offending value when that check
/// failed, so all failures are reported at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatViolation {
    pub header_size: Option<u32>,
    pub compression: Option<u32>,
    pub bits_per_pixel: Option<u16>,
}

impl FormatViolation {
    /// True when no check failed.
    pub fn is_empty(&self) -> bool {
        self.header_size.is_none() && self.compression.is_none() && self.bits_per_pixel.is_none()
    }
}

impl fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(size) = self.header_size {
            write!(f, "info header size {size} (expected 40)")?;
            sep = ", ";
        }
        if let Some(method) = self.compression {
            write!(f, "{sep}compression method {method} (expected 0)")?;
            sep = ", ";
        }
        if let Some(bpp) = self.bits_per_pixel {
            write!(f, "{sep}{bpp} bits per pixel (expected 24)")?;
        }
        Ok(())
    }
}
