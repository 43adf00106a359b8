//! Total suspended solids estimation
//!
//! Three-branch scheme over a reflectance batch: each pixel is labelled by
//! the water-type masks, each branch produces a particulate backscattering
//! estimate for its water type, and the branches are composited into one
//! value per pixel. Branches are written in a fixed order (NIR correction,
//! external model, closed-form inversion) so that on overlapping masks the
//! inversion, written last, wins. Pixels no branch can serve stay NaN.

pub mod bbp_model;
pub mod nir;
pub mod stats;
pub mod water_type;

pub use bbp_model::BbpEstimator;
pub use stats::EstimateSummary;
pub use water_type::{WaterTypeMasks, classify};

use crate::bands::{BandAccessor, ReflectanceBatch};
use crate::config::{Coefficients, ModelConfig};
use crate::optics::qaa;
use crate::sensors::{Sensor, UnknownSensorError};

/// Per-pixel TSS proxy estimates for a sensor identified by its string key.
///
/// Aliases are normalized before lookup; an unknown identifier is a fatal
/// error. Missing bands and numeric domain issues degrade to NaN per pixel.
///
/// ```
/// use std::collections::BTreeMap;
/// use tethys::bands::ReflectanceBatch;
/// use tethys::sensors::Sensor;
/// use tethys::tss::{self, BbpEstimator};
///
/// struct Flat(f64);
///
/// impl BbpEstimator for Flat {
///     fn estimate(&self, rrs: &[Vec<f64>], _sensor: Sensor) -> Vec<Vec<f64>> {
///         rrs.iter().map(|band| vec![self.0; band.len()]).collect()
///     }
/// }
///
/// let spectrum = BTreeMap::from([
///     (443, 0.004),
///     (490, 0.005),
///     (560, 0.009),
///     (665, 0.004),
///     (705, 0.003),
///     (740, 0.002),
/// ]);
/// let batch = ReflectanceBatch::from_spectrum(&spectrum).unwrap();
///
/// let tss = tss::estimate(&batch, "MSI", None, &Flat(0.02)).unwrap();
/// assert!(tss[0] > 0.0);
/// ```
pub fn estimate(
    batch: &ReflectanceBatch,
    sensor_id: &str,
    config: Option<&ModelConfig>,
    bbp_model: &dyn BbpEstimator,
) -> Result<Vec<f64>, UnknownSensorError> {
    let sensor = Sensor::from_id(sensor_id)?;
    let coefficients = Coefficients::resolve(sensor, config);

    Ok(estimate_for_sensor(batch, sensor, &coefficients, bbp_model))
}

/// Inner pipeline for an already-resolved sensor and coefficient set.
pub fn estimate_for_sensor(
    batch: &ReflectanceBatch,
    sensor: Sensor,
    coefficients: &Coefficients,
    bbp_model: &dyn BbpEstimator,
) -> Vec<f64> {
    let bands = BandAccessor::new(batch, coefficients.tolerance);
    let masks = water_type::classify(&bands);

    let mut estimate = vec![f64::NAN; batch.n_pixels()];

    // Turbid-water branch first; later branches overwrite on mask overlap.
    // Skipped entirely when the sensor's NIR band is out of tolerance.
    if let Some(r_nir) = bands.reflectance(sensor.nir_wavelength() as f64) {
        let bbp = nir::bbp_nir(r_nir, sensor.nir_wavelength() as f64, coefficients);
        write_masked(&mut estimate, &masks.red_blue, |i| {
            coefficients.c * bbp[i] - coefficients.d
        });
    }

    // Intermediate waters: externally trained model, read at the sensor's
    // red analytical band.
    if let Some(rrs) = required_reflectances(&bands, sensor) {
        let bbp = bbp_model.estimate(&rrs, sensor);
        let red = &bbp[red_band_index(sensor)];
        write_masked(&mut estimate, &masks.green_red, |i| {
            coefficients.a * red[i].powf(coefficients.b)
        });
    }

    // Clear waters: closed-form inversion, written last so it wins.
    if let Some(bbp) = qaa::invert_bbp(&bands) {
        write_masked(&mut estimate, &masks.blue_green, |i| {
            coefficients.a * bbp[i].powf(coefficients.b)
        });
    }

    estimate
}

fn write_masked(estimate: &mut [f64], mask: &[bool], value: impl Fn(usize) -> f64) {
    for (i, selected) in mask.iter().enumerate() {
        if *selected {
            estimate[i] = value(i);
        }
    }
}

// Reflectance columns at every required wavelength, or None as soon as one
// cannot be matched within tolerance.
fn required_reflectances(bands: &BandAccessor, sensor: Sensor) -> Option<Vec<Vec<f64>>> {
    sensor
        .required_wavelengths()
        .iter()
        .map(|&wl| bands.reflectance(wl as f64).map(|column| column.to_vec()))
        .collect()
}

// Index of the required wavelength closest to the red diagnostic band.
fn red_band_index(sensor: Sensor) -> usize {
    let required = sensor.required_wavelengths();

    let mut best = 0;
    for (i, &wl) in required.iter().enumerate() {
        if (wl as f64 - water_type::RED_WAVELENGTH).abs()
            < (required[best] as f64 - water_type::RED_WAVELENGTH).abs()
        {
            best = i;
        }
    }
    best
}
