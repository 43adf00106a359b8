//! Water optical properties and the closed-form reflectance inversion.

pub mod constants;
pub mod qaa;

pub use constants::*;
pub use qaa::*;
