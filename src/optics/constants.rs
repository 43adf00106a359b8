//! Pure-water optical constants
//!
//! Absorption and backscattering coefficients of pure (sea)water at the red
//! and near-infrared reference wavelengths the estimation scheme touches.
//! Red values follow Pope and Fry (1997), NIR absorption Kou et al. (1993),
//! backscattering Zhang et al. (2009).

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Pure-water absorption [m^-1] at the reference wavelengths (nm)
pub static AW: LazyLock<BTreeMap<u32, f64>> = LazyLock::new(|| {
    BTreeMap::from([(655, 0.3785), (665, 0.4264), (740, 2.72), (865, 4.6)])
});

/// Pure-water backscattering [m^-1] at the reference wavelengths (nm)
pub static BBW: LazyLock<BTreeMap<u32, f64>> = LazyLock::new(|| {
    BTreeMap::from([
        (655, 0.00046),
        (665, 0.00043),
        (740, 0.0002625),
        (865, 0.00014),
    ])
});

// Coefficients of the quadratic relating below-surface reflectance to the
// single-scattering ratio u. Superseded pairs, kept for provenance only:
//   Gordon et al. (1988): g0 = 0.0949, g1 = 0.0794
//   Lee et al. (1999):    g0 = 0.084,  g1 = 0.17
pub const G0: f64 = 0.08945;
pub const G1: f64 = 0.1247;

/// Pure-water absorption at the reference wavelength nearest to `wavelength`.
pub fn aw(wavelength: f64) -> f64 {
    nearest(&AW, wavelength)
}

/// Pure-water backscattering at the reference wavelength nearest to `wavelength`.
pub fn bbw(wavelength: f64) -> f64 {
    nearest(&BBW, wavelength)
}

// Nearest-key lookup; ties resolve to the lower wavelength (first minimum
// in ascending key order). The tables are non-empty by construction.
fn nearest(table: &BTreeMap<u32, f64>, wavelength: f64) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for (&wl, &value) in table {
        let distance = (wl as f64 - wavelength).abs();
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, value));
        }
    }
    best.map(|(_, value)| value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        assert_eq!(aw(665.0), 0.4264);
        assert_eq!(bbw(740.0), 0.0002625);
    }

    #[test]
    fn test_nearest_lookup() {
        // 748 sits closest to 740
        assert_eq!(aw(748.0), 2.72);
        assert_eq!(bbw(865.0), 0.00014);
        // OLCI NIR band at 754 still resolves to 740
        assert_eq!(aw(754.0), 2.72);
    }

    #[test]
    fn test_tie_resolves_to_lower_wavelength() {
        // 660 is equidistant from 655 and 665
        assert_eq!(aw(660.0), 0.3785);
        assert_eq!(bbw(660.0), 0.00046);
    }
}
