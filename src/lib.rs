//! Total suspended solids (TSS) proxy estimation from satellite ocean-color
//! remote sensing reflectance.
//!
//! The crate implements the three-branch estimation scheme of Balasubramanian
//! et al. (2020): pixels are labelled by comparing reflectance magnitudes at
//! three diagnostic bands, then each water type is served by its own
//! backscattering estimator (a closed-form QAA-style inversion for clear
//! water, an externally trained model for intermediate water, and a
//! near-infrared correction for turbid water). Branch outputs are composited
//! into one estimate per pixel; pixels no branch can serve stay NaN.

pub mod bands;
pub mod config;
pub mod optics;
pub mod sensors;
pub mod tss;
