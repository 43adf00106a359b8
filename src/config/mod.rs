//! Model configuration
//!
//! The six tunable coefficients of the estimation scheme plus the
//! band-matching tolerance. Unset values fall back to the published
//! per-sensor defaults; overrides come either from code or from a JSON
//! configuration file.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::sensors::Sensor;

pub mod error;
pub use error::ConfigError;

/// Optional overrides for the tunable coefficients and the band-matching
/// tolerance (nm). Anything left `None` resolves to the sensor default.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub e: Option<f64>,
    pub f: Option<f64>,
    pub tolerance: Option<f64>,
}

// Deserializes a ModelConfig, rejecting tolerances that could never match a
// band (zero, negative, NaN).
impl<'de> Deserialize<'de> for ModelConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ModelConfigHelper {
            a: Option<f64>,
            b: Option<f64>,
            c: Option<f64>,
            d: Option<f64>,
            e: Option<f64>,
            f: Option<f64>,
            tolerance: Option<f64>,
        }

        let helper = ModelConfigHelper::deserialize(deserializer)?;

        if let Some(tolerance) = helper.tolerance {
            if !(tolerance > 0.0) {
                return Err(D::Error::custom(ConfigError::Tolerance));
            }
        }

        Ok(ModelConfig {
            a: helper.a,
            b: helper.b,
            c: helper.c,
            d: helper.d,
            e: helper.e,
            f: helper.f,
            tolerance: helper.tolerance,
        })
    }
}

impl ModelConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ModelConfig, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: ModelConfig = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }
}

/// Fully resolved coefficient set consumed by the estimation pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Power-law scale on backscattering (Eq. 6)
    pub a: f64,
    /// Power-law exponent on backscattering (Eq. 6)
    pub b: f64,
    /// Turbid-water linear scale (Eqs. 7 and 8)
    pub c: f64,
    /// Turbid-water linear offset (Eqs. 7 and 8)
    pub d: f64,
    /// Non-algal particle absorption term in the NIR correction
    pub e: f64,
    /// f/Q bidirectional factor
    pub f: f64,
    /// Band-matching tolerance (nm)
    pub tolerance: f64,
}

impl Coefficients {
    /// Published defaults; the OLI family was fitted separately from the
    /// other sensors for the turbid-water branch.
    pub fn for_sensor(sensor: Sensor) -> Self {
        let oli = sensor == Sensor::Oli;

        Self {
            a: 53.736,
            b: 0.8559,
            c: if oli { 224.43 } else { 207.57 },
            d: if oli { 12.575 } else { 46.78 },
            e: if oli { 0.5 } else { 1.65 },
            f: 0.105,
            tolerance: 10.0,
        }
    }

    /// Sensor defaults merged with whatever the configuration overrides.
    pub fn resolve(sensor: Sensor, config: Option<&ModelConfig>) -> Self {
        let mut coefficients = Self::for_sensor(sensor);

        if let Some(config) = config {
            if let Some(a) = config.a {
                coefficients.a = a;
            }
            if let Some(b) = config.b {
                coefficients.b = b;
            }
            if let Some(c) = config.c {
                coefficients.c = c;
            }
            if let Some(d) = config.d {
                coefficients.d = d;
            }
            if let Some(e) = config.e {
                coefficients.e = e;
            }
            if let Some(f) = config.f {
                coefficients.f = f;
            }
            if let Some(tolerance) = config.tolerance {
                coefficients.tolerance = tolerance;
            }
        }

        coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_sensor_defaults() {
        let oli = Coefficients::for_sensor(Sensor::Oli);
        assert_eq!(oli.c, 224.43);
        assert_eq!(oli.d, 12.575);
        assert_eq!(oli.e, 0.5);

        let msi = Coefficients::for_sensor(Sensor::Msi);
        assert_eq!(msi.c, 207.57);
        assert_eq!(msi.d, 46.78);
        assert_eq!(msi.e, 1.65);

        // shared across sensors
        assert_eq!(oli.a, msi.a);
        assert_eq!(oli.b, msi.b);
        assert_eq!(oli.f, 0.105);
        assert_eq!(msi.tolerance, 10.0);
    }

    #[test]
    fn test_resolve_overrides() {
        let config = ModelConfig {
            a: Some(10.0),
            tolerance: Some(5.0),
            ..ModelConfig::default()
        };

        let coefficients = Coefficients::resolve(Sensor::Msi, Some(&config));
        assert_eq!(coefficients.a, 10.0);
        assert_eq!(coefficients.tolerance, 5.0);
        // untouched values keep their defaults
        assert_eq!(coefficients.b, 0.8559);
        assert_eq!(coefficients.c, 207.57);
    }

    #[test]
    fn test_resolve_without_config() {
        assert_eq!(
            Coefficients::resolve(Sensor::Oli, None),
            Coefficients::for_sensor(Sensor::Oli)
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();

        let config_data = r#"
    {
        "a": 50.0,
        "f": 0.1,
        "tolerance": 12.5
    }
    "#;

        file.write_all(config_data.as_bytes()).unwrap();

        let config = ModelConfig::from_file(file_path).unwrap();

        assert_eq!(config.a, Some(50.0));
        assert_eq!(config.f, Some(0.1));
        assert_eq!(config.tolerance, Some(12.5));
        assert_eq!(config.b, None);
    }

    #[test]
    fn test_non_positive_tolerance_rejected() {
        let result: Result<ModelConfig, _> = serde_json::from_str(r#"{"tolerance": 0.0}"#);
        assert!(result.is_err());

        let result: Result<ModelConfig, _> = serde_json::from_str(r#"{"tolerance": -3.0}"#);
        assert!(result.is_err());
    }
}
