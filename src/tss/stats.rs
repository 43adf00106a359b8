use std::fmt;

/// Summary of an estimate vector for reporting at the caller's edge.
#[derive(Debug, Clone, Copy)]
pub struct EstimateSummary {
    pub pixels: usize,
    pub valid: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl EstimateSummary {
    /// Counts and aggregates over the finite values; an all-missing vector
    /// yields NaN aggregates.
    pub fn from_estimates(estimates: &[f64]) -> Self {
        let valid: Vec<f64> = estimates
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();

        let (min, max, mean) = if valid.is_empty() {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            (
                valid.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
                valid.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
                valid.iter().sum::<f64>() / valid.len() as f64,
            )
        };

        Self {
            pixels: estimates.len(),
            valid: valid.len(),
            min,
            max,
            mean,
        }
    }
}

impl fmt::Display for EstimateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = if self.pixels == 0 {
            0.0
        } else {
            100.0 * self.valid as f64 / self.pixels as f64
        };

        write!(
            f,
            "Valid pixels: {} / {} ({:.1}%), Min: {:.3}, Max: {:.3}, Mean: {:.3}",
            self.valid, self.pixels, percent, self.min, self.max, self.mean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_skips_missing_values() {
        let estimates = [1.0, f64::NAN, 3.0, f64::INFINITY, 2.0];
        let summary = EstimateSummary::from_estimates(&estimates);

        assert_eq!(summary.pixels, 5);
        assert_eq!(summary.valid, 3);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn test_all_missing_summary() {
        let summary = EstimateSummary::from_estimates(&[f64::NAN, f64::NAN]);

        assert_eq!(summary.pixels, 2);
        assert_eq!(summary.valid, 0);
        assert!(summary.min.is_nan());
        assert!(summary.mean.is_nan());
    }

    #[test]
    fn test_display() {
        let summary = EstimateSummary::from_estimates(&[2.0, f64::NAN]);
        let text = summary.to_string();
        assert!(text.contains("1 / 2"));
        assert!(text.contains("50.0%"));
    }
}
