//! BMP encoder: original headers followed by the grid's row-padded pixels.

use alloc::vec::Vec;
use enough::Stop;

use super::{BmpHeaders, HEADERS_SIZE};
use crate::error::BmpError;
use crate::grid::PixelGrid;

/// Append a complete BMP file for `grid` to `out`.
///
/// Both headers are written exactly as given, size fields included. If the
/// headers declare a pixel data offset past byte 54, the gap is zero-filled
/// so the offset stays truthful. Rows are written bottom-up, each exactly
/// `row_bytes` long.
pub(crate) fn encode_grid(
    out: &mut Vec<u8>,
    headers: &BmpHeaders,
    grid: &PixelGrid,
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    if headers.width() != grid.width() || headers.height() != grid.height() {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "headers describe {}x{} but grid is {}x{}",
            headers.width(),
            headers.height(),
            grid.width(),
            grid.height()
        )));
    }
    let row_bytes = headers.row_bytes()?;
    if row_bytes != grid.row_bytes() {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "headers describe {row_bytes}-byte rows but grid rows are {} bytes",
            grid.row_bytes()
        )));
    }

    let offset = headers.file.pixel_data_offset as usize;
    let start = out.len();
    out.reserve(offset.max(HEADERS_SIZE) + grid.as_bytes().len());

    headers.write_to(out);
    out.resize(start + offset.max(HEADERS_SIZE), 0);

    for (disk_row, row) in grid.rows().rev().enumerate() {
        if disk_row % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Ok(())
}
