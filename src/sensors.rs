use std::fmt;

/// Supported ocean-color sensor families.
///
/// Each family carries the analytical wavelengths the estimation scheme
/// needs plus the near-infrared band used for the turbid-water correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Sentinel-2 MultiSpectral Instrument
    Msi,
    /// Landsat-8 Operational Land Imager
    Oli,
    /// Suomi-NPP VIIRS
    Viirs,
    /// MODIS (Aqua/Terra)
    Modis,
    /// Sentinel-3 OLCI
    Olci,
}

impl Sensor {
    /// Parses a sensor identifier, normalizing recognized aliases to their
    /// family key first ("S2B" is MSI, "MODA" is the MODIS family "MOD").
    pub fn from_id(id: &str) -> Result<Self, UnknownSensorError> {
        let canonical = match id {
            "S2B" => "MSI",
            "MODA" => "MOD",
            other => other,
        };

        match canonical {
            "MSI" => Ok(Sensor::Msi),
            "OLI" => Ok(Sensor::Oli),
            "VI" => Ok(Sensor::Viirs),
            "MOD" => Ok(Sensor::Modis),
            "OLCI" => Ok(Sensor::Olci),
            other => Err(UnknownSensorError(other.to_string())),
        }
    }

    /// Analytical wavelengths (nm) the model requires from this sensor.
    pub fn required_wavelengths(&self) -> &'static [u32] {
        match self {
            Sensor::Msi => &[443, 490, 560, 665, 705],
            Sensor::Oli => &[443, 482, 561, 655],
            Sensor::Viirs => &[410, 443, 486, 551, 671],
            Sensor::Modis => &[412, 443, 488, 555, 667, 678],
            Sensor::Olci => &[411, 442, 490, 510, 560, 619, 664, 673, 681],
        }
    }

    /// Near-infrared wavelength (nm) used by the turbid-water branch.
    pub fn nir_wavelength(&self) -> u32 {
        match self {
            Sensor::Msi => 740,
            Sensor::Oli => 865,
            Sensor::Viirs => 745,
            Sensor::Modis => 748,
            Sensor::Olci => 754,
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensor::Msi => write!(f, "MSI"),
            Sensor::Oli => write!(f, "OLI"),
            Sensor::Viirs => write!(f, "VI"),
            Sensor::Modis => write!(f, "MOD"),
            Sensor::Olci => write!(f, "OLCI"),
        }
    }
}

#[derive(Debug)]
pub struct UnknownSensorError(pub String);

impl fmt::Display for UnknownSensorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown sensor identifier: {}", self.0)
    }
}

impl std::error::Error for UnknownSensorError {}
