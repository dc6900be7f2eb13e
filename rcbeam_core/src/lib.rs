//! # rcbeam_core - Reinforced Concrete Beam Design Engine
//!
//! `rcbeam_core` designs the bending reinforcement of rectangular reinforced
//! concrete beams to EN 1992-1-1 at the ultimate limit state. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use rcbeam_core::calculations::rc_beam::{calculate, RcBeamInput};
//!
//! let input: RcBeamInput = serde_json::from_str(r#"{
//!     "label": "B-1",
//!     "concrete_class": "C30/37",
//!     "geometry": { "width_mm": 300.0, "depth_mm": 500.0, "min_cover_mm": 30.0,
//!                   "cover_deviation_mm": 10.0, "link_diameter_mm": 8.0 },
//!     "moment": { "moment_knm": 250.0 },
//!     "tension_layers": [ { "diameter_mm": 20.0, "count": 6 } ]
//! }"#).unwrap();
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bending design, utilization and the full beam pipeline
//! - [`equations`] - Closed-form EN 1992-1-1 expressions
//! - [`materials`] - Concrete classes, reinforcing steel and partial factors
//! - [`reinforcement`] - Bar layers, areas and centroids
//! - [`section`] - Section geometry and effective depths
//! - [`report`] - Labelled report rows for display
//! - [`project`] - Project container, metadata, and settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod project;
pub mod reinforcement;
pub mod report;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput, RcBeamInput, RcBeamResult};
pub use errors::{CalcError, CalcResult};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use report::{design_report, ReportLine};
