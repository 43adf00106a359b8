//! Closed-form QAA-style backscattering inversion
//!
//! Single-band variant of the Quasi-Analytical Algorithm (Lee et al., 2002)
//! used for clear, blue-dominant water: the below-surface reflectance at the
//! red reference band is inverted through the quadratic reflectance model to
//! the single-scattering ratio u, total absorption is estimated from a band
//! ratio, and particulate backscattering falls out of the forward relation.

use crate::bands::BandAccessor;
use crate::optics::constants;

/// Nominal red reference wavelength (nm); the inversion runs on the
/// measured band closest to it.
pub const REFERENCE_WAVELENGTH: f64 = 660.0;

const BLUE_WAVELENGTH: f64 = 443.0;
const GREEN_WAVELENGTH: f64 = 485.0;

/// Converts above-surface remote sensing reflectance to its below-surface
/// counterpart.
pub fn to_rrs(rrs_above: f64) -> f64 {
    rrs_above / (0.52 + 1.7 * rrs_above)
}

/// Positive root of `g1*u^2 + g0*u - rrs = 0`.
pub fn u_ratio(rrs: f64) -> f64 {
    ((constants::G0.powi(2) + 4.0 * constants::G1 * rrs).sqrt() - constants::G0)
        / (2.0 * constants::G1)
}

/// Particulate backscattering at the red reference band, one value per
/// pixel.
///
/// Returns `None` when the 443 or 485 nm analog band cannot be matched
/// within tolerance; numeric domain issues (negative ratios, u -> 1) are
/// left to IEEE float semantics and surface as NaN in the output.
pub fn invert_bbp(bands: &BandAccessor) -> Option<Vec<f64>> {
    let reference = bands.closest_band(REFERENCE_WAVELENGTH);
    let r_ref = bands.reflectance_at_closest(REFERENCE_WAVELENGTH);
    let r_443 = bands.reflectance(BLUE_WAVELENGTH)?;
    let r_485 = bands.reflectance(GREEN_WAVELENGTH)?;

    let aw_ref = constants::aw(reference);
    let bbw_ref = constants::bbw(reference);

    let bbp = r_ref
        .iter()
        .zip(r_443.iter().zip(r_485))
        .map(|(&r, (&rb, &rg))| {
            let u = u_ratio(to_rrs(r));
            let a = 0.39 * (r / (rb + rg)).powf(1.14) + aw_ref;
            u * a / (1.0 - u) - bbw_ref
        })
        .collect();

    Some(bbp)
}
