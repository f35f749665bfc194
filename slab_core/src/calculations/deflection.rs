//! # Deflection Check
//!
//! Span/effective-depth serviceability check per EC2 7.4.2 (expression
//! 7.16), with the panel restraint factor from [`PanelClass`] and the
//! service-stress modification factor capped at 1.5.

use serde::{Deserialize, Serialize};

use super::CheckStatus;
use crate::coefficients::round_to;
use crate::panel::PanelClass;

/// Result of the span/effective-depth deflection check.
///
/// `actual_ratio` and `allowable_ratio` are rounded to 2 decimal places for
/// reporting; `utilization_pct` to 1. Utilization is `None` when the check
/// does not apply or when a zero allowable ratio (no provided steel) makes
/// the demand/capacity ratio unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// Actual span/effective-depth ratio Lx/d
    pub actual_ratio: f64,
    /// Allowable ratio after restraint and modification factors
    pub allowable_ratio: f64,
    pub status: CheckStatus,
    /// actual/allowable as a percentage, where defined
    pub utilization_pct: Option<f64>,
}

impl DeflectionCheck {
    fn not_applicable() -> Self {
        DeflectionCheck {
            actual_ratio: 0.0,
            allowable_ratio: 0.0,
            status: CheckStatus::NotApplicable,
            utilization_pct: None,
        }
    }
}

/// Run the deflection check for the short span.
///
/// * `short_span_mm` - short span Lx
/// * `d_mm` - short-span effective depth
/// * `fck` - concrete cylinder strength, N/mm²
/// * `as_required_mm2` - governing required steel area (midspan, short span)
/// * `as_provided_mm2` - steel area actually provided
/// * `panel` - boundary condition class (restraint factor)
pub fn check(
    short_span_mm: f64,
    d_mm: f64,
    fck: f64,
    as_required_mm2: f64,
    as_provided_mm2: f64,
    panel: PanelClass,
) -> DeflectionCheck {
    if as_required_mm2 <= 0.0 {
        return DeflectionCheck::not_applicable();
    }

    let k = panel.restraint_factor();
    let rho = as_required_mm2 / (1000.0 * d_mm);
    let rho_0 = fck.sqrt() * 0.001;

    // EC2 expressions 7.16a/7.16b
    let basic = if rho <= rho_0 {
        k * (11.0 + 1.5 * fck.sqrt() * (rho_0 / rho))
    } else {
        k * (11.0
            + 1.5 * fck.sqrt() * (rho_0 / rho)
            + 3.2 * fck.sqrt() * ((rho_0 / rho) - 1.0).powf(1.5))
    };

    // Service stress correction (310/sigma_s ~ 500/fyk * As_prov/As_req),
    // capped at 1.5
    let factor = (500.0 / 460.0 * (as_provided_mm2 / as_required_mm2)).min(1.5);

    let mut allowable = basic * factor;
    // Long-span correction for spans over 7 m
    if short_span_mm > 7000.0 {
        allowable *= 7000.0 / short_span_mm;
    }

    let actual = short_span_mm / d_mm;
    let status = if actual <= allowable {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    let utilization = if allowable > 0.0 {
        Some(round_to(actual / allowable * 100.0, 1))
    } else {
        None
    };

    DeflectionCheck {
        actual_ratio: round_to(actual, 2),
        allowable_ratio: round_to(allowable, 2),
        status,
        utilization_pct: utilization,
    }
}
