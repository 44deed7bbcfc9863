//! ASCII-art rendering of a pixel grid.

use alloc::string::String;
use alloc::vec::Vec;

use crate::grayscale::luminance;
use crate::grid::PixelGrid;

/// Density ramp indexed by `7 - luminance / 32`.
pub const DENSITY: [char; 8] = ['@', '#', '%', 'O', 'a', '-', '.', ' '];

/// Character for one luminance value. 255 maps to `'@'`, 0 to `' '`.
pub fn density_char(luma: u8) -> char {
    DENSITY[7 - usize::from(luma / 32)]
}

/// One line per row (top first), one character per sample.
pub fn render_ascii(grid: &PixelGrid) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            grid.samples(y)
                .map(|s| density_char(luminance(s)))
                .collect()
        })
        .collect()
}
