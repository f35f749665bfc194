//! # Reinforcement Bars and Spacing Selection
//!
//! Standard bar sizes with single-bar cross-sectional areas, and the
//! spacing selector that maps a required steel area (mm²/m) to the widest
//! standard spacing that still provides it.
//!
//! The widest-spacing-first policy is a cost minimization: fewer bars per
//! metre for the same demand.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::rebar::{select_spacing, BarSize};
//!
//! let provision = select_spacing(400.0, BarSize::Y12).unwrap();
//! assert_eq!(provision.spacing_mm, 250);
//! assert_eq!(provision.label(), "Y12 @ 250");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{DesignError, DesignResult};

/// Standard spacings scanned by the selector, millimetres.
///
/// Selection iterates this list in reverse (widest first).
pub const STANDARD_SPACINGS: [u32; 8] = [75, 100, 125, 150, 175, 200, 250, 300];

/// Standard reinforcement bar size (high-yield, "Y" designation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// 8 mm (50.3 mm²)
    Y8,
    /// 10 mm (78.5 mm²)
    Y10,
    /// 12 mm (113.1 mm²)
    #[default]
    Y12,
    /// 16 mm (201.1 mm²)
    Y16,
    /// 20 mm (314.2 mm²)
    Y20,
}

impl BarSize {
    /// All standard bar sizes for UI selection
    pub const ALL: [BarSize; 5] = [
        BarSize::Y8,
        BarSize::Y10,
        BarSize::Y12,
        BarSize::Y16,
        BarSize::Y20,
    ];

    /// Nominal bar diameter in millimetres
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BarSize::Y8 => 8.0,
            BarSize::Y10 => 10.0,
            BarSize::Y12 => 12.0,
            BarSize::Y16 => 16.0,
            BarSize::Y20 => 20.0,
        }
    }

    /// Cross-sectional area of a single bar, mm²
    pub fn area_mm2(&self) -> f64 {
        match self {
            BarSize::Y8 => 50.3,
            BarSize::Y10 => 78.5,
            BarSize::Y12 => 113.1,
            BarSize::Y16 => 201.1,
            BarSize::Y20 => 314.2,
        }
    }

    /// Bar size from a nominal diameter in millimetres
    pub fn from_diameter(diameter_mm: u32) -> DesignResult<Self> {
        match diameter_mm {
            8 => Ok(BarSize::Y8),
            10 => Ok(BarSize::Y10),
            12 => Ok(BarSize::Y12),
            16 => Ok(BarSize::Y16),
            20 => Ok(BarSize::Y20),
            other => Err(DesignError::invalid_input(
                "bar_dia_mm",
                other.to_string(),
                "Bar diameter must be one of 8, 10, 12, 16, 20",
            )),
        }
    }

    /// Area provided per metre width at a given spacing, mm²/m
    pub fn area_at_spacing(&self, spacing_mm: u32) -> f64 {
        (1000.0 / spacing_mm as f64) * self.area_mm2()
    }

    /// Area at the narrowest standard spacing - the ceiling this bar size
    /// can provide
    pub fn max_area_mm2(&self) -> f64 {
        self.area_at_spacing(STANDARD_SPACINGS[0])
    }
}

impl fmt::Display for BarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}", self.diameter_mm() as u32)
    }
}

/// A selected bar/spacing pairing and the steel area it provides.
///
/// A spacing of zero marks a failed selection (no standard spacing meets
/// the demand); the area is then also zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Provision {
    pub bar: BarSize,
    /// Centre-to-centre spacing, mm (0 on failure)
    pub spacing_mm: u32,
    /// Steel area provided per metre width, mm²/m (0 on failure)
    pub area_mm2: f64,
}

impl Provision {
    /// Failure marker provision: zero area, zero spacing
    pub fn inadequate(bar: BarSize) -> Self {
        Provision {
            bar,
            spacing_mm: 0,
            area_mm2: 0.0,
        }
    }

    /// Whether this provision actually supplies steel
    pub fn is_adequate(&self) -> bool {
        self.spacing_mm > 0
    }

    /// Schedule label, e.g. "Y12 @ 150", or the failure text
    pub fn label(&self) -> String {
        if self.is_adequate() {
            format!("{} @ {}", self.bar, self.spacing_mm)
        } else {
            "FAIL: Increase Bar".to_string()
        }
    }
}

/// Select the widest standard spacing whose provided area meets or exceeds
/// the requirement.
///
/// Returns `InsufficientCapacity` when even the narrowest spacing (75 mm)
/// falls short; the caller should offer a larger bar diameter.
pub fn select_spacing(as_required_mm2: f64, bar: BarSize) -> DesignResult<Provision> {
    for spacing in STANDARD_SPACINGS.iter().rev() {
        let area_provided = bar.area_at_spacing(*spacing);
        if area_provided >= as_required_mm2 {
            return Ok(Provision {
                bar,
                spacing_mm: *spacing,
                area_mm2: area_provided,
            });
        }
    }
    Err(DesignError::insufficient_capacity(
        as_required_mm2,
        bar.diameter_mm() as u32,
        bar.max_area_mm2(),
    ))
}
