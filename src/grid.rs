use alloc::vec;
use alloc::vec::Vec;

use crate::bmp;
use crate::error::BmpError;
use crate::pixel::ColorSample;

/// A decoded 24-bit image held in memory.
///
/// Rows are stored top-down (index 0 is the top visual row), each as exactly
/// [`row_bytes`](Self::row_bytes) raw bytes. Only the first `3 * width`
/// bytes of a row are samples; the trailing padding is carried through to the
/// encoder untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    row_bytes: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// A zero-filled grid of `width` x `height` samples.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let (row_bytes, size) = Self::checked_layout(width, height)?;
        Ok(Self {
            width,
            height,
            row_bytes,
            data: vec![0u8; size],
        })
    }

    /// Row stride and total buffer size for the given dimensions.
    pub(crate) fn checked_layout(width: u32, height: u32) -> Result<(usize, usize), BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "image dimensions {width}x{height} must be non-zero"
            )));
        }
        let too_large = BmpError::DimensionsTooLarge { width, height };
        let Some(row_bytes) = bmp::row_bytes(bmp::SUPPORTED_BITS_PER_PIXEL, width) else {
            return Err(too_large);
        };
        let Some(size) = row_bytes.checked_mul(height as usize) else {
            return Err(too_large);
        };
        Ok((row_bytes, size))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stored bytes per row, padding included.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// The whole buffer, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Row `y` (0 = top), padding included.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_bytes;
        &self.data[start..start + self.row_bytes]
    }

    /// Mutable row `y` (0 = top), padding included.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.row_bytes;
        &mut self.data[start..start + self.row_bytes]
    }

    /// All rows top to bottom, padding included.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.row_bytes)
    }

    pub fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.row_bytes)
    }

    /// The `width` samples of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn samples(&self, y: u32) -> impl Iterator<Item = ColorSample> + '_ {
        let used = self.width as usize * ColorSample::SIZE;
        self.row(y)[..used]
            .chunks_exact(ColorSample::SIZE)
            .map(|c| ColorSample::from_bgr_bytes([c[0], c[1], c[2]]))
    }

    /// Sample at column `x`, row `y` (0 = top), or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<ColorSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y as usize * self.row_bytes + x as usize * ColorSample::SIZE;
        let b = &self.data[off..off + ColorSample::SIZE];
        Some(ColorSample::from_bgr_bytes([b[0], b[1], b[2]]))
    }

    /// Overwrite the sample at column `x`, row `y` (0 = top).
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u32, y: u32, sample: ColorSample) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        let off = y as usize * self.row_bytes + x as usize * ColorSample::SIZE;
        self.data[off..off + ColorSample::SIZE].copy_from_slice(&sample.to_bgr_bytes());
    }

    /// Apply `f` to every sample, row by row. Padding is not visited.
    pub fn for_each_sample_mut(&mut self, mut f: impl FnMut(&mut ColorSample)) {
        let used = self.width as usize * ColorSample::SIZE;
        for row in self.data.chunks_exact_mut(self.row_bytes) {
            for px in row[..used].chunks_exact_mut(ColorSample::SIZE) {
                let mut sample = ColorSample::from_bgr_bytes([px[0], px[1], px[2]]);
                f(&mut sample);
                px.copy_from_slice(&sample.to_bgr_bytes());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded() {
        let grid = PixelGrid::new(5, 2).unwrap();
        assert_eq!(grid.row_bytes(), 16);
        assert_eq!(grid.as_bytes().len(), 32);
        assert_eq!(grid.rows().count(), 2);
        assert_eq!(grid.samples(1).count(), 5);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            PixelGrid::new(0, 3),
            Err(BmpError::InvalidHeader(_))
        ));
        assert!(matches!(
            PixelGrid::new(3, 0),
            Err(BmpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn set_get_uses_bgr_layout() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        grid.set(1, 0, ColorSample::new(10, 20, 30));
        assert_eq!(grid.get(1, 0), Some(ColorSample::new(10, 20, 30)));
        assert_eq!(&grid.row(0)[3..6], &[30, 20, 10]);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn for_each_skips_padding() {
        let mut grid = PixelGrid::new(1, 2).unwrap();
        grid.row_mut(0)[3] = 0xEE;
        grid.for_each_sample_mut(|s| *s = ColorSample::gray(9));
        assert_eq!(grid.row(0), &[9, 9, 9, 0xEE]);
        assert_eq!(grid.row(1), &[9, 9, 9, 0]);
    }
}
