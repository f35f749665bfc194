//! # slab_core - Two-Way Slab Panel Design Engine
//!
//! `slab_core` computes reinforced-concrete two-way slab panel designs by
//! the coefficient-table method (BS 8110 / EC2 style): moment coefficients
//! with interpolation, bending moments, required and provided steel areas,
//! bar-spacing selection, and the deflection and shear checks.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Recoverable failures**: an over-reinforced section or an undersized
//!   bar is a status on the result record, never an aborted request
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::calculations::slab::{calculate, SlabInput};
//! use slab_core::panel::PanelClass;
//! use slab_core::rebar::BarSize;
//!
//! let input = SlabInput {
//!     label: "S-1".to_string(),
//!     fck: 25.0,
//!     fyk: 460.0,
//!     cover_mm: 25.0,
//!     bar: BarSize::Y12,
//!     short_span_mm: 3000.0,
//!     long_span_mm: 5000.0,
//!     thickness_mm: 150.0,
//!     dead_load_knm2: 6.45,
//!     live_load_knm2: 1.5,
//!     panel: PanelClass::Interior,
//! };
//!
//! let result = calculate(&input).unwrap();
//! for row in &result.schedule {
//!     println!("{} {} {}: {}", row.location, row.role, row.direction, row.provision_label);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Panel design, deflection and shear checks
//! - [`coefficients`] - Moment coefficient tables and interpolation
//! - [`panel`] - Boundary-condition classes and the continuity rule
//! - [`rebar`] - Bar sizes and spacing selection
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod coefficients;
pub mod errors;
pub mod panel;
pub mod rebar;

// Re-export commonly used types at crate root for convenience
pub use calculations::slab::{calculate, SlabInput, SlabResult};
pub use errors::{DesignError, DesignResult};
pub use panel::{PanelClass, SpanDirection};
pub use rebar::{BarSize, Provision};
