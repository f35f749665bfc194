//! # Error Types
//!
//! Structured error types for slab_core. Each variant carries enough context
//! for a caller (human or programmatic) to understand and correct the input,
//! and every variant serializes cleanly to tagged JSON.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{DesignError, DesignResult};
//!
//! fn validate_span(span_mm: f64) -> DesignResult<()> {
//!     if span_mm <= 0.0 {
//!         return Err(DesignError::invalid_input(
//!             "short_span_mm",
//!             span_mm.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for slab_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for slab design operations.
///
/// `OverReinforced` and `InsufficientCapacity` are design failures rather
/// than programming errors: [`crate::calculations::slab::calculate`] folds
/// them into status fields on the result record so the remaining checks
/// still run, while the low-level functions surface them as errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (non-positive, not in the bar table, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An input falls outside the domain of the coefficient tables
    #[error("Out of range input for '{field}': {value} - {reason}")]
    OutOfRangeInput {
        field: String,
        value: String,
        reason: String,
    },

    /// K-factor exceeds the singly-reinforced limit; the section is too
    /// thin for the applied moment and no steel area can be computed
    #[error("Over-reinforced section: K = {k_factor:.4} exceeds limit {limit}")]
    OverReinforced { k_factor: f64, limit: f64 },

    /// No standard bar spacing provides the required steel area for the
    /// chosen bar diameter
    #[error(
        "Insufficient capacity: {required_mm2:.1} mm2/m exceeds {max_area_mm2:.1} mm2/m \
         available from Y{bar_dia_mm} at the narrowest spacing"
    )]
    InsufficientCapacity {
        required_mm2: f64,
        bar_dia_mm: u32,
        max_area_mm2: f64,
    },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRangeInput error
    pub fn out_of_range(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::OutOfRangeInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OverReinforced error
    pub fn over_reinforced(k_factor: f64, limit: f64) -> Self {
        DesignError::OverReinforced { k_factor, limit }
    }

    /// Create an InsufficientCapacity error
    pub fn insufficient_capacity(required_mm2: f64, bar_dia_mm: u32, max_area_mm2: f64) -> Self {
        DesignError::InsufficientCapacity {
            required_mm2,
            bar_dia_mm,
            max_area_mm2,
        }
    }

    /// Design failures resolve to a status on the result record; input
    /// errors abort the calculation request.
    pub fn is_design_failure(&self) -> bool {
        matches!(
            self,
            DesignError::OverReinforced { .. } | DesignError::InsufficientCapacity { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::OutOfRangeInput { .. } => "OUT_OF_RANGE_INPUT",
            DesignError::OverReinforced { .. } => "OVER_REINFORCED",
            DesignError::InsufficientCapacity { .. } => "INSUFFICIENT_CAPACITY",
        }
    }
}
