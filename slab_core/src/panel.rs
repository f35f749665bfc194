//! # Panel Boundary Conditions
//!
//! The nine standard two-way slab panel classes of the coefficient-table
//! method (BS 8110-1 Table 3.14 ordering). Each class carries its edge
//! continuity rule and the structural restraint factor used by the
//! deflection check.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::panel::{PanelClass, SpanDirection};
//!
//! let panel = PanelClass::TwoLongEdgesDiscontinuous;
//! assert!(!panel.is_support_continuous(SpanDirection::Short));
//! assert!(panel.is_support_continuous(SpanDirection::Long));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{DesignError, DesignResult};

/// Span direction of a two-way panel.
///
/// `Short` is the Lx direction; short-span bars sit in the outer layer and
/// resist the larger moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanDirection {
    /// Along the short span Lx
    Short,
    /// Along the long span Ly
    Long,
}

impl fmt::Display for SpanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanDirection::Short => write!(f, "Short (Lx)"),
            SpanDirection::Long => write!(f, "Long (Ly)"),
        }
    }
}

/// Panel boundary-condition class.
///
/// Variant order matches the coefficient table column order; `index()` is
/// the column index into [`crate::coefficients`] tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PanelClass {
    /// All four edges continuous
    #[default]
    Interior,
    OneShortEdgeDiscontinuous,
    OneLongEdgeDiscontinuous,
    TwoAdjacentEdgesDiscontinuous,
    TwoShortEdgesDiscontinuous,
    TwoLongEdgesDiscontinuous,
    /// Three edges discontinuous, one long edge continuous
    ThreeEdgesOneLongContinuous,
    /// Three edges discontinuous, one short edge continuous
    ThreeEdgesOneShortContinuous,
    FourEdgesDiscontinuous,
}

impl PanelClass {
    /// All panel classes in table order, for UI selection
    pub const ALL: [PanelClass; 9] = [
        PanelClass::Interior,
        PanelClass::OneShortEdgeDiscontinuous,
        PanelClass::OneLongEdgeDiscontinuous,
        PanelClass::TwoAdjacentEdgesDiscontinuous,
        PanelClass::TwoShortEdgesDiscontinuous,
        PanelClass::TwoLongEdgesDiscontinuous,
        PanelClass::ThreeEdgesOneLongContinuous,
        PanelClass::ThreeEdgesOneShortContinuous,
        PanelClass::FourEdgesDiscontinuous,
    ];

    /// Column index into the coefficient tables (0-8); variant order
    /// matches the table columns
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Panel class from a table index (0-8)
    pub fn from_index(index: usize) -> DesignResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            DesignError::out_of_range(
                "panel_index",
                index.to_string(),
                "Panel class index must be 0-8",
            )
        })
    }

    /// Whether the support edge in the given span direction is continuous.
    ///
    /// A discontinuous support edge carries no hogging moment; the support
    /// coefficient is forced to zero for that direction.
    pub fn is_support_continuous(&self, direction: SpanDirection) -> bool {
        match direction {
            SpanDirection::Short => !matches!(
                self,
                PanelClass::TwoLongEdgesDiscontinuous
                    | PanelClass::FourEdgesDiscontinuous
                    | PanelClass::ThreeEdgesOneShortContinuous
            ),
            SpanDirection::Long => !matches!(
                self,
                PanelClass::TwoShortEdgesDiscontinuous
                    | PanelClass::FourEdgesDiscontinuous
                    | PanelClass::ThreeEdgesOneLongContinuous
            ),
        }
    }

    /// Structural restraint factor K for the span/depth deflection check
    /// (EC2 Table 7.4N: 1.5 interior, 1.0 simply supported, 1.3 otherwise).
    pub fn restraint_factor(&self) -> f64 {
        match self {
            PanelClass::Interior => 1.5,
            PanelClass::FourEdgesDiscontinuous => 1.0,
            _ => 1.3,
        }
    }
}

impl fmt::Display for PanelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelClass::Interior => "Interior Panel",
            PanelClass::OneShortEdgeDiscontinuous => "One Short Edge Discontinuous",
            PanelClass::OneLongEdgeDiscontinuous => "One Long Edge Discontinuous",
            PanelClass::TwoAdjacentEdgesDiscontinuous => "Two Adjacent Edges Discontinuous",
            PanelClass::TwoShortEdgesDiscontinuous => "Two Short Edges Discontinuous",
            PanelClass::TwoLongEdgesDiscontinuous => "Two Long Edges Discontinuous",
            PanelClass::ThreeEdgesOneLongContinuous => "Three Edges Discontinuous (1 Long Cont)",
            PanelClass::ThreeEdgesOneShortContinuous => "Three Edges Discontinuous (1 Short Cont)",
            PanelClass::FourEdgesDiscontinuous => "Four Edges Discontinuous",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, panel) in PanelClass::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
            assert_eq!(PanelClass::from_index(i).unwrap(), *panel);
        }
        assert!(PanelClass::from_index(9).is_err());
    }

    #[test]
    fn test_exactly_three_discontinuous_per_direction() {
        let short_disc = PanelClass::ALL
            .iter()
            .filter(|p| !p.is_support_continuous(SpanDirection::Short))
            .count();
        let long_disc = PanelClass::ALL
            .iter()
            .filter(|p| !p.is_support_continuous(SpanDirection::Long))
            .count();
        assert_eq!(short_disc, 3);
        assert_eq!(long_disc, 3);
    }

    #[test]
    fn test_continuity_rule() {
        assert!(PanelClass::Interior.is_support_continuous(SpanDirection::Short));
        assert!(PanelClass::Interior.is_support_continuous(SpanDirection::Long));

        // Short-span support discontinuous classes
        assert!(!PanelClass::TwoLongEdgesDiscontinuous.is_support_continuous(SpanDirection::Short));
        assert!(!PanelClass::FourEdgesDiscontinuous.is_support_continuous(SpanDirection::Short));
        assert!(!PanelClass::ThreeEdgesOneShortContinuous
            .is_support_continuous(SpanDirection::Short));

        // Long-span support discontinuous classes
        assert!(!PanelClass::TwoShortEdgesDiscontinuous.is_support_continuous(SpanDirection::Long));
        assert!(!PanelClass::FourEdgesDiscontinuous.is_support_continuous(SpanDirection::Long));
        assert!(!PanelClass::ThreeEdgesOneLongContinuous.is_support_continuous(SpanDirection::Long));

        // Mixed classes stay continuous on the other side
        assert!(PanelClass::TwoLongEdgesDiscontinuous.is_support_continuous(SpanDirection::Long));
        assert!(PanelClass::TwoShortEdgesDiscontinuous.is_support_continuous(SpanDirection::Short));
    }

    #[test]
    fn test_restraint_factors() {
        assert_eq!(PanelClass::Interior.restraint_factor(), 1.5);
        assert_eq!(PanelClass::FourEdgesDiscontinuous.restraint_factor(), 1.0);
        assert_eq!(PanelClass::OneLongEdgeDiscontinuous.restraint_factor(), 1.3);
        assert_eq!(
            PanelClass::TwoAdjacentEdgesDiscontinuous.restraint_factor(),
            1.3
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&PanelClass::TwoAdjacentEdgesDiscontinuous).unwrap();
        let roundtrip: PanelClass = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, PanelClass::TwoAdjacentEdgesDiscontinuous);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PanelClass::Interior.to_string(), "Interior Panel");
        assert_eq!(
            PanelClass::ThreeEdgesOneLongContinuous.to_string(),
            "Three Edges Discontinuous (1 Long Cont)"
        );
    }
}
