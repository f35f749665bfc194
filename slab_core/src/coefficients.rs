//! # Moment Coefficient Tables
//!
//! Bending moment coefficients for restrained two-way slab panels
//! (BS 8110-1 Table 3.14 layout). The short-span midspan coefficient is
//! tabulated against the aspect ratio Ly/Lx at eight breakpoints and is
//! linearly interpolated between them; the long-span midspan coefficient is
//! ratio-independent.
//!
//! Support (hogging) coefficients are derived from the midspan values by the
//! continuity rule in [`crate::calculations::slab`], not tabulated here.

use crate::errors::{DesignError, DesignResult};
use crate::panel::PanelClass;

/// Aspect-ratio breakpoints of the coefficient table
pub const RATIO_BREAKPOINTS: [f64; 8] = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.75, 2.0];

/// Aspect ratio above which the panel is treated as one-way; lookups clamp
/// to this value
pub const MAX_TABLE_RATIO: f64 = 2.0;

/// Short-span midspan coefficients, one row per ratio breakpoint, one
/// column per panel class in [`PanelClass::ALL`] order
const SHORT_SPAN_COEFFICIENTS: [[f64; 9]; 8] = [
    [0.024, 0.028, 0.028, 0.033, 0.032, 0.033, 0.040, 0.038, 0.048],
    [0.028, 0.032, 0.032, 0.037, 0.035, 0.040, 0.046, 0.043, 0.056],
    [0.033, 0.036, 0.037, 0.042, 0.039, 0.047, 0.052, 0.048, 0.064],
    [0.036, 0.039, 0.041, 0.046, 0.043, 0.053, 0.057, 0.052, 0.071],
    [0.039, 0.042, 0.044, 0.050, 0.045, 0.059, 0.062, 0.056, 0.077],
    [0.041, 0.045, 0.048, 0.053, 0.048, 0.064, 0.066, 0.059, 0.083],
    [0.045, 0.049, 0.055, 0.059, 0.052, 0.073, 0.075, 0.065, 0.093],
    [0.048, 0.052, 0.063, 0.065, 0.055, 0.082, 0.083, 0.070, 0.103],
];

/// Long-span midspan coefficients, ratio-independent, one per panel class
const LONG_SPAN_COEFFICIENTS: [f64; 9] = [
    0.024, 0.024, 0.028, 0.028, 0.024, 0.033, 0.033, 0.028, 0.048,
];

/// Breakpoint comparison tolerance; ratios arrive pre-rounded to 2 decimals
const BREAKPOINT_EPS: f64 = 1e-9;

/// Short-span midspan moment coefficient for an aspect ratio and panel class.
///
/// Ratios above 2.0 are clamped to the last table row. A ratio below the
/// table minimum of 1.0 (long span shorter than short span) is outside the
/// method's domain and returns `OutOfRangeInput`.
///
/// Interpolated values are rounded to 4 decimal places; exact breakpoint
/// hits return the table value verbatim.
pub fn short_span_coefficient(ratio: f64, panel: PanelClass) -> DesignResult<f64> {
    let ratio = ratio.min(MAX_TABLE_RATIO);
    if ratio < RATIO_BREAKPOINTS[0] - BREAKPOINT_EPS {
        return Err(DesignError::out_of_range(
            "aspect_ratio",
            format!("{:.2}", ratio),
            "Aspect ratio Ly/Lx below table minimum 1.0",
        ));
    }

    let column = panel.index();

    // Exact breakpoint hit: no interpolation drift
    for (row, breakpoint) in RATIO_BREAKPOINTS.iter().enumerate() {
        if (ratio - breakpoint).abs() < BREAKPOINT_EPS {
            return Ok(SHORT_SPAN_COEFFICIENTS[row][column]);
        }
    }

    // Locate the bracketing rows and interpolate linearly
    for window in 0..RATIO_BREAKPOINTS.len() - 1 {
        let lower = RATIO_BREAKPOINTS[window];
        let upper = RATIO_BREAKPOINTS[window + 1];
        if ratio > lower && ratio < upper {
            let lower_val = SHORT_SPAN_COEFFICIENTS[window][column];
            let upper_val = SHORT_SPAN_COEFFICIENTS[window + 1][column];
            let value = lower_val + (ratio - lower) * (upper_val - lower_val) / (upper - lower);
            return Ok(round_to(value, 4));
        }
    }

    // Unreachable once the range guards above hold
    Err(DesignError::out_of_range(
        "aspect_ratio",
        format!("{:.2}", ratio),
        "No coefficient bracket for aspect ratio",
    ))
}

/// Long-span midspan moment coefficient for a panel class
/// (ratio-independent per the table-method convention).
pub fn long_span_coefficient(panel: PanelClass) -> f64 {
    LONG_SPAN_COEFFICIENTS[panel.index()]
}

/// Round to a number of decimal places (reporting convention of the method)
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
