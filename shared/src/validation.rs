//! Validation utilities for segmentation output
//!
//! The segmentation service reports per-class pixel shares, so a
//! well-formed vector sums to 100 up to floating-point drift. The
//! service itself never validates its output; these checks live at the
//! boundary, and the derivation services stay permissive.

use validator::Validate;

use crate::models::PercentageVector;

/// Allowed drift of the four-class sum away from 100
pub const PERCENTAGE_SUM_TOLERANCE: f64 = 0.5;

/// Validate a percentage vector at the boundary
///
/// Rejects non-finite or out-of-range components and sums drifting more
/// than [`PERCENTAGE_SUM_TOLERANCE`] from 100.
pub fn validate_percentage_vector(pv: &PercentageVector) -> Result<(), &'static str> {
    let components = [pv.clear, pv.shadow, pv.thin_cloud, pv.thick_cloud];
    if components.iter().any(|v| !v.is_finite()) {
        return Err("Class percentages must be finite numbers");
    }
    if pv.validate().is_err() {
        return Err("Class percentages must be between 0 and 100");
    }
    let total: f64 = components.iter().sum();
    if (total - 100.0).abs() > PERCENTAGE_SUM_TOLERANCE {
        return Err("Class percentages must sum to 100");
    }
    Ok(())
}

/// Clamp a possibly drifting vector into range
///
/// Negative components go to zero and components above 100 are capped.
/// The sum is left untouched; consumers tolerate drift.
pub fn clamp_percentage_vector(pv: &PercentageVector) -> PercentageVector {
    let clamp = |v: f64| if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 };
    PercentageVector::new(
        clamp(pv.clear),
        clamp(pv.shadow),
        clamp(pv.thin_cloud),
        clamp(pv.thick_cloud),
    )
}
