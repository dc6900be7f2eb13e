//! # Design Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`rc_beam`] - Rectangular RC beam bending design (EN 1992-1-1)
//!
//! The stages of the beam design are exposed separately:
//!
//! - [`bending`] - Singly/doubly reinforced classification and required areas
//! - [`utilization`] - Required versus provided reinforcement

pub mod bending;
pub mod rc_beam;
pub mod utilization;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bending::{design_bending, BendingDesign, DesignMoment, SectionType};
pub use rc_beam::{RcBeamInput, RcBeamResult};
pub use utilization::{Utilization, UtilizationReport, UtilizationStatus};

use crate::errors::CalcResult;

/// Enum wrapper for all calculation types.
///
/// Allows a project to hold heterogeneous calculations in one collection
/// while keeping a tagged JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Rectangular RC beam section in bending
    RcBeam(RcBeamInput),
}

/// Result for any [`CalculationItem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    RcBeam(RcBeamResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::RcBeam(b) => &b.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::RcBeam(_) => "RC Beam",
        }
    }

    /// Validate the item's input without running it
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            CalculationItem::RcBeam(input) => input.validate(),
        }
    }

    /// Run the calculation for this item
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::RcBeam(input) => rc_beam::calculate(input).map(CalculationOutput::RcBeam),
        }
    }
}

impl CalculationOutput {
    /// All checks pass
    pub fn passes(&self) -> bool {
        match self {
            CalculationOutput::RcBeam(r) => r.passes(),
        }
    }
}
