use crate::sensors::Sensor;

/// Externally trained backscattering model serving the intermediate-water
/// branch.
///
/// Implementations receive one reflectance column per required wavelength
/// of `sensor` (profile order, one value per pixel) and must return one
/// backscattering column per input column with the same pixel count. The
/// algorithm behind the model is opaque to this crate; tests inject stubs.
pub trait BbpEstimator {
    fn estimate(&self, rrs: &[Vec<f64>], sensor: Sensor) -> Vec<Vec<f64>>;
}
