//! Near-infrared turbid-water correction
//!
//! In red-dominant water the visible bands saturate and the NIR band, where
//! pure-water absorption dominates, carries the particulate signal. The
//! correction inverts a single-band reflectance model around the f/Q factor.

use crate::config::Coefficients;
use crate::optics::constants;

/// Particulate backscattering from the NIR band, one value per pixel.
///
/// `bbp = (R*(aw + e + bbw) - bbw*f) / (f - R)` with pure-water terms
/// nearest-matched at the sensor's NIR wavelength. Reflectances approaching
/// the f/Q factor drive the denominator to zero; the result degrades to
/// non-finite values rather than erroring.
pub fn bbp_nir(r_nir: &[f64], nir_wavelength: f64, coefficients: &Coefficients) -> Vec<f64> {
    let aw = constants::aw(nir_wavelength);
    let bbw = constants::bbw(nir_wavelength);
    let f = coefficients.f;

    r_nir
        .iter()
        .map(|&r| (r * (aw + coefficients.e + bbw) - bbw * f) / (f - r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::Sensor;

    #[test]
    fn test_bbp_nir_fixture() {
        let coefficients = Coefficients::for_sensor(Sensor::Msi);

        // hand-computed at 740 nm (aw = 2.72, bbw = 0.0002625, e = 1.65)
        let bbp = bbp_nir(&[0.003], 740.0, &coefficients);
        assert!((bbp[0] - 0.1282669117647059).abs() < 1e-12);
    }

    #[test]
    fn test_bbp_nir_oli_family() {
        let coefficients = Coefficients::for_sensor(Sensor::Oli);

        // 865 nm (aw = 4.6, bbw = 0.00014, e = 0.5)
        let bbp = bbp_nir(&[0.004], 865.0, &coefficients);
        assert!((bbp[0] - 0.201840198019802).abs() < 1e-12);
    }

    #[test]
    fn test_reflectance_at_fq_factor_is_non_finite() {
        let coefficients = Coefficients::for_sensor(Sensor::Msi);

        let bbp = bbp_nir(&[coefficients.f], 740.0, &coefficients);
        assert!(!bbp[0].is_finite());
    }
}
