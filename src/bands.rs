//! Reflectance batch storage and band matching.
//!
//! Measured band centers rarely sit exactly on the analytical wavelengths
//! the estimation scheme asks for (485, 560, 660 nm, ...). The accessor in
//! this module resolves a nominal wavelength to the closest measured band
//! and only serves it when the distance is within the configured tolerance.

use std::collections::BTreeMap;
use std::fmt;

/// Immutable per-pixel reflectance spectra over a common set of bands.
///
/// Stored band-major: one reflectance column per measured wavelength, each
/// of length `n_pixels`, so branch computations can stream a whole band.
#[derive(Debug, Clone)]
pub struct ReflectanceBatch {
    wavelengths: Vec<f64>,
    bands: Vec<Vec<f64>>,
    n_pixels: usize,
}

impl ReflectanceBatch {
    /// Builds a batch from pixel-major rows (one spectrum per pixel, one
    /// value per band, same order as `wavelengths`).
    pub fn from_pixels(wavelengths: Vec<f64>, rows: &[Vec<f64>]) -> Result<Self, BatchShapeError> {
        if wavelengths.is_empty() {
            return Err(BatchShapeError::NoBands);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != wavelengths.len() {
                return Err(BatchShapeError::RaggedRow {
                    row: i,
                    expected: wavelengths.len(),
                    found: row.len(),
                });
            }
        }

        let n_pixels = rows.len();
        let bands = (0..wavelengths.len())
            .map(|b| rows.iter().map(|row| row[b]).collect())
            .collect();

        Ok(Self {
            wavelengths,
            bands,
            n_pixels,
        })
    }

    /// Builds a single-pixel batch from a wavelength -> reflectance map.
    pub fn from_spectrum(spectrum: &BTreeMap<u32, f64>) -> Result<Self, BatchShapeError> {
        let wavelengths: Vec<f64> = spectrum.keys().map(|&wl| wl as f64).collect();
        let row: Vec<f64> = spectrum.values().copied().collect();
        Self::from_pixels(wavelengths, &[row])
    }

    pub fn n_pixels(&self) -> usize {
        self.n_pixels
    }

    pub fn n_bands(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Reflectance column for the band at `index`.
    pub fn band(&self, index: usize) -> &[f64] {
        &self.bands[index]
    }
}

/// Resolves nominal analytical wavelengths against the measured bands of a
/// batch, within a maximum wavelength distance.
#[derive(Debug)]
pub struct BandAccessor<'a> {
    batch: &'a ReflectanceBatch,
    tolerance: f64,
}

impl<'a> BandAccessor<'a> {
    pub fn new(batch: &'a ReflectanceBatch, tolerance: f64) -> Self {
        Self { batch, tolerance }
    }

    pub fn n_pixels(&self) -> usize {
        self.batch.n_pixels()
    }

    // First minimum wins, so a nominal wavelength sitting exactly between
    // two measured bands resolves to the earlier one.
    fn closest_index(&self, target: f64) -> usize {
        let mut best = 0;
        for (i, wl) in self.batch.wavelengths.iter().enumerate() {
            if (wl - target).abs() < (self.batch.wavelengths[best] - target).abs() {
                best = i;
            }
        }
        best
    }

    /// Measured wavelength closest to `target`, regardless of tolerance.
    pub fn closest_band(&self, target: f64) -> f64 {
        self.batch.wavelengths[self.closest_index(target)]
    }

    /// Whether a measured band lies within tolerance of `target`.
    pub fn has_band(&self, target: f64) -> bool {
        (self.closest_band(target) - target).abs() <= self.tolerance
    }

    /// Reflectance column for the band matched to `target`, or `None` when
    /// no measured band lies within tolerance.
    pub fn reflectance(&self, target: f64) -> Option<&'a [f64]> {
        let index = self.closest_index(target);
        if (self.batch.wavelengths[index] - target).abs() <= self.tolerance {
            Some(self.batch.band(index))
        } else {
            None
        }
    }

    /// Reflectance column for the closest band, with no tolerance gate.
    pub fn reflectance_at_closest(&self, target: f64) -> &'a [f64] {
        self.batch.band(self.closest_index(target))
    }
}

#[derive(Debug)]
pub enum BatchShapeError {
    NoBands,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for BatchShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchShapeError::NoBands => write!(f, "batch has no spectral bands"),
            BatchShapeError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "pixel {} has {} bands, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for BatchShapeError {}
