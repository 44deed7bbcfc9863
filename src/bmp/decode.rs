//! Pixel array decoder: bottom-up, row-padded 24-bit rows into a top-down
//! [`PixelGrid`].

use enough::Stop;

use super::BmpHeaders;
use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::limits::Limits;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::TruncatedInput {
                needed: pos,
                available: self.data.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        let n = buf.len();
        let end = self.pos.checked_add(n).ok_or(BmpError::TruncatedInput {
            needed: usize::MAX,
            available: self.data.len(),
        })?;
        if end > self.data.len() {
            return Err(BmpError::TruncatedInput {
                needed: end,
                available: self.data.len(),
            });
        }
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}

// ── Grid decode ─────────────────────────────────────────────────────

/// Decode the pixel array of `data` (a whole BMP file) described by `headers`.
///
/// Seeks to the declared pixel data offset, skipping anything between the
/// headers and the pixels, then reads `height` rows of `row_bytes` each. The
/// first row on disk is the bottom visual row.
pub(crate) fn decode_grid(
    data: &[u8],
    headers: &BmpHeaders,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    if let Some(limits) = limits {
        limits.admit(headers)?;
    }
    let width = headers.width();
    let height = headers.height();
    let (row_bytes, size) = PixelGrid::checked_layout(width, height)?;
    debug_assert_eq!(Some(row_bytes), headers.row_bytes().ok());

    let mut bytes = Cursor::new(data);
    bytes.set_position(headers.file.pixel_data_offset as usize)?;

    // Fail before allocating when the pixel array is short.
    let needed = bytes.pos.saturating_add(size);
    if needed > data.len() {
        return Err(BmpError::TruncatedInput {
            needed,
            available: data.len(),
        });
    }

    let mut grid = PixelGrid::new(width, height)?;
    for (disk_row, row) in grid.rows_mut().rev().enumerate() {
        if disk_row % 16 == 0 {
            stop.check()?;
        }
        bytes.read_exact_bytes(row)?;
    }
    Ok(grid)
}
