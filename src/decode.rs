use enough::Stop;

use crate::bmp::{self, BmpHeaders};
use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::limits::Limits;

/// A decoded bitmap: the original headers plus the pixel grid.
///
/// The headers are kept verbatim so [`crate::encode_bmp`] can write them back
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBitmap {
    pub headers: BmpHeaders,
    pub grid: PixelGrid,
}

impl DecodedBitmap {
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }
}

/// Builder for decoding a BMP held in memory.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before the grid is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse and validate the headers only.
    pub fn headers(&self) -> Result<BmpHeaders, BmpError> {
        BmpHeaders::parse(self.data)
    }

    /// Decode headers and pixels.
    pub fn decode(self, stop: impl Stop) -> Result<DecodedBitmap, BmpError> {
        self.decode_dyn(&stop)
    }

    pub(crate) fn decode_dyn(self, stop: &dyn Stop) -> Result<DecodedBitmap, BmpError> {
        let headers = BmpHeaders::parse(self.data)?;
        stop.check()?;
        let grid = bmp::decode_grid(self.data, &headers, self.limits, stop)?;
        Ok(DecodedBitmap { headers, grid })
    }
}
