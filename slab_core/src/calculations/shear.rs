//! # Shear Check
//!
//! Concrete shear resistance check per EC2 6.2.2 (expression 6.2) against
//! the simplified tributary shear at the short-span support.

use serde::{Deserialize, Serialize};

use super::CheckStatus;
use crate::coefficients::round_to;

/// Depth factor cap in EC2 expression 6.2
const K_MAX: f64 = 2.0;
/// Longitudinal reinforcement ratio cap
const RHO_L_MAX: f64 = 0.02;

/// Result of the shear check, per metre width of slab.
///
/// `v_ed_kn` and `v_rdc_kn` are rounded to 2 decimal places,
/// `utilization_pct` to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearCheck {
    /// Applied design shear V_Ed, kN/m
    pub v_ed_kn: f64,
    /// Concrete shear resistance V_Rd,c, kN/m
    pub v_rdc_kn: f64,
    pub status: CheckStatus,
    /// V_Ed / V_Rd,c as a percentage
    pub utilization_pct: f64,
}

/// Run the shear check.
///
/// * `design_load_knm2` - factored design load n, kN/m²
/// * `short_span_mm` - short span Lx
/// * `d_mm` - short-span effective depth
/// * `fck` - concrete cylinder strength, N/mm²
/// * `as_provided_mm2` - longitudinal steel area at the support, mm²/m
pub fn check(
    design_load_knm2: f64,
    short_span_mm: f64,
    d_mm: f64,
    fck: f64,
    as_provided_mm2: f64,
) -> ShearCheck {
    // Tributary shear at the support of a one-metre strip
    let v_ed = 0.5 * design_load_knm2 * (short_span_mm / 1000.0);

    let k = (1.0 + (200.0 / d_mm).sqrt()).min(K_MAX);
    let rho_l = (as_provided_mm2 / (1000.0 * d_mm)).min(RHO_L_MAX);

    let v_min = 0.035 * k.powf(1.5) * fck.sqrt();
    let v_rdc_stress = 0.12 * k * (100.0 * rho_l * fck).powf(1.0 / 3.0);

    // Stress (N/mm²) over a 1000 mm strip, N -> kN
    let v_rdc = v_rdc_stress.max(v_min) * 1000.0 * d_mm / 1000.0;

    let status = if v_ed <= v_rdc {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    ShearCheck {
        v_ed_kn: round_to(v_ed, 2),
        v_rdc_kn: round_to(v_rdc, 2),
        status,
        utilization_pct: round_to(v_ed / v_rdc * 100.0, 1),
    }
}
