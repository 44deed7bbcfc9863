//! Luminance weighting and in-place grayscale conversion.

use crate::grid::PixelGrid;
use crate::pixel::ColorSample;

const RED_WEIGHT: f64 = 0.3;
const GREEN_WEIGHT: f64 = 0.6;
const BLUE_WEIGHT: f64 = 0.1;

/// Luminance of one sample: `0.3 * red + 0.6 * green + 0.1 * blue`, summed in
/// `f64` and narrowed to `u8` by truncation.
///
/// The weighted sum can land just under a whole number, so some equal-channel
/// samples come out one lower (gray 1 maps to 0, gray 2 to 1). The weights sum
/// to 1 and the cast saturates, so the result never exceeds 255.
pub fn luminance(sample: ColorSample) -> u8 {
    let weighted = RED_WEIGHT * f64::from(sample.red)
        + GREEN_WEIGHT * f64::from(sample.green)
        + BLUE_WEIGHT * f64::from(sample.blue);
    weighted as u8
}

/// Replace every sample's channels with its luminance, in place.
///
/// Luminance is taken from the original channel values before any channel is
/// overwritten. Row padding is left untouched.
pub fn apply_grayscale(grid: &mut PixelGrid) {
    grid.for_each_sample_mut(|sample| *sample = ColorSample::gray(luminance(*sample)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(luminance(ColorSample::new(255, 0, 0)), 76);
        assert_eq!(luminance(ColorSample::new(0, 255, 0)), 153);
        assert_eq!(luminance(ColorSample::new(0, 0, 255)), 25);
        assert_eq!(luminance(ColorSample::new(255, 255, 255)), 255);
        assert_eq!(luminance(ColorSample::new(0, 0, 0)), 0);
    }

    #[test]
    fn truncates_weighted_float_sum() {
        // Every red/green pair, blue sampled with a stride coprime to 256
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in (0..=255u8).step_by(7) {
                    let expected =
                        (0.3 * f64::from(r) + 0.6 * f64::from(g) + 0.1 * f64::from(b)) as u8;
                    let s = ColorSample::new(r, g, b);
                    assert_eq!(luminance(s), expected, "rgb({r},{g},{b})");
                }
            }
        }
    }

    #[test]
    fn near_integer_sums_round_down() {
        assert_eq!(luminance(ColorSample::gray(1)), 0);
        assert_eq!(luminance(ColorSample::gray(2)), 1);
        assert_eq!(luminance(ColorSample::new(0, 3, 2)), 1);
    }

    #[test]
    fn gray_drifts_by_at_most_one() {
        for v in 0..=255u8 {
            let l = luminance(ColorSample::gray(v));
            assert!(l == v || l + 1 == v, "gray({v}) -> {l}");
        }
    }

    #[test]
    fn representative_grays_are_fixed_points() {
        let mut grid = PixelGrid::new(3, 1).unwrap();
        for (x, v) in [0u8, 127, 255].into_iter().enumerate() {
            grid.set(x as u32, 0, ColorSample::gray(v));
        }
        let before = grid.clone();
        apply_grayscale(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn uses_original_channels() {
        let mut grid = PixelGrid::new(1, 1).unwrap();
        grid.set(0, 0, ColorSample::new(200, 100, 50));
        apply_grayscale(&mut grid);
        // 0.3*200 + 0.6*100 + 0.1*50 = 125
        assert_eq!(grid.get(0, 0), Some(ColorSample::gray(125)));
    }
}
