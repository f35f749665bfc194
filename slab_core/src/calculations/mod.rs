//! # Slab Design Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / `*Check` - Results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, DesignError>` - Pure function
//!
//! ## Available Calculations
//!
//! - [`slab`] - Full two-way panel design (moments, steel areas, schedule)
//! - [`deflection`] - Span/effective-depth serviceability check
//! - [`shear`] - Concrete shear resistance check

pub mod deflection;
pub mod shear;
pub mod slab;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export commonly used types
pub use deflection::DeflectionCheck;
pub use shear::ShearCheck;
pub use slab::{calculate, AreaResult, MomentSet, ScheduleRow, SlabInput, SlabResult};

/// Outcome of a serviceability or strength check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Pass,
    Fail,
    /// The check does not apply (e.g. no steel demand)
    NotApplicable,
}

impl CheckStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::NotApplicable => write!(f, "N/A"),
        }
    }
}
