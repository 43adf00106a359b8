//! Water-type classification
//!
//! Pixels are labelled by comparing reflectance magnitudes at three
//! diagnostic bands. The three conditions are evaluated independently: a
//! pixel may satisfy none of them or several at once, and overlaps are
//! resolved downstream by branch write order, not here.

use crate::bands::BandAccessor;

pub const BLUE_WAVELENGTH: f64 = 485.0;
pub const GREEN_WAVELENGTH: f64 = 560.0;
pub const RED_WAVELENGTH: f64 = 660.0;

/// Per-pixel water-type flags. Neither mutually exclusive nor exhaustive.
#[derive(Debug, Clone)]
pub struct WaterTypeMasks {
    /// R(485) > R(560): clear, blue-dominant water
    pub blue_green: Vec<bool>,
    /// R(560) > R(660): intermediate water
    pub green_red: Vec<bool>,
    /// R(660) > R(485): turbid, red-dominant water
    pub red_blue: Vec<bool>,
}

/// Computes the three masks over the batch. A mask whose diagnostic bands
/// cannot both be matched within tolerance is all-false.
pub fn classify(bands: &BandAccessor) -> WaterTypeMasks {
    let n_pixels = bands.n_pixels();

    let blue = bands.reflectance(BLUE_WAVELENGTH);
    let green = bands.reflectance(GREEN_WAVELENGTH);
    let red = bands.reflectance(RED_WAVELENGTH);

    WaterTypeMasks {
        blue_green: greater(blue, green, n_pixels),
        green_red: greater(green, red, n_pixels),
        red_blue: greater(red, blue, n_pixels),
    }
}

// Strict per-pixel comparison; NaN on either side compares false.
fn greater(lhs: Option<&[f64]>, rhs: Option<&[f64]>, n_pixels: usize) -> Vec<bool> {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs.iter().zip(rhs).map(|(l, r)| l > r).collect(),
        _ => vec![false; n_pixels],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::ReflectanceBatch;

    fn msi_like(rows: &[Vec<f64>]) -> ReflectanceBatch {
        ReflectanceBatch::from_pixels(vec![443.0, 490.0, 560.0, 665.0], rows).unwrap()
    }

    #[test]
    fn test_masks_are_independent() {
        let batch = msi_like(&[
            vec![0.009, 0.008, 0.003, 0.004], // blue-dominant
            vec![0.004, 0.005, 0.009, 0.004], // green peak
            vec![0.004, 0.005, 0.005, 0.012], // red-dominant
            vec![0.004, 0.008, 0.006, 0.002], // blue_green and green_red at once
        ]);
        let bands = BandAccessor::new(&batch, 10.0);

        let masks = classify(&bands);
        assert_eq!(masks.blue_green, vec![true, false, false, true]);
        assert_eq!(masks.green_red, vec![false, true, false, true]);
        assert_eq!(masks.red_blue, vec![false, false, true, false]);
    }

    #[test]
    fn test_equal_reflectances_set_no_mask() {
        let batch = msi_like(&[vec![0.005, 0.005, 0.005, 0.005]]);
        let bands = BandAccessor::new(&batch, 10.0);

        let masks = classify(&bands);
        assert_eq!(masks.blue_green, vec![false]);
        assert_eq!(masks.green_red, vec![false]);
        assert_eq!(masks.red_blue, vec![false]);
    }

    #[test]
    fn test_nan_compares_false() {
        let batch = msi_like(&[vec![0.004, f64::NAN, 0.005, 0.012]]);
        let bands = BandAccessor::new(&batch, 10.0);

        let masks = classify(&bands);
        assert_eq!(masks.blue_green, vec![false]);
        assert_eq!(masks.red_blue, vec![false]);
        // 560 vs 660 is unaffected by the NaN at 490
        assert_eq!(masks.green_red, vec![false]);
    }

    #[test]
    fn test_unmatched_diagnostic_band_clears_dependent_masks() {
        // no band near 560; only red vs blue can be evaluated
        let batch = ReflectanceBatch::from_pixels(
            vec![443.0, 490.0, 665.0],
            &[vec![0.004, 0.005, 0.012]],
        )
        .unwrap();
        let bands = BandAccessor::new(&batch, 10.0);

        let masks = classify(&bands);
        assert_eq!(masks.blue_green, vec![false]);
        assert_eq!(masks.green_red, vec![false]);
        assert_eq!(masks.red_blue, vec![true]);
    }
}
