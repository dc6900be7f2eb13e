//! # Reinforced Concrete Beam Bending Design
//!
//! Designs the flexural reinforcement of a rectangular RC beam section to
//! EN 1992-1-1 at the ultimate limit state, and checks the as-built bars.
//!
//! ## Pipeline
//!
//! 1. Resolve materials from the concrete class and overrides
//! 2. Tension and compression bar layouts → areas and centroids
//! 3. Effective depths from cover, link and centroids
//! 4. Bending design (singly or doubly reinforced)
//! 5. Utilization of the provided bars
//!
//! ## Assumptions
//!
//! - Rectangular section, rectangular stress block, f_ck ≤ 50 MPa coefficients
//! - Bending about the major axis only (no axial load, shear or torsion)
//! - Class B or C reinforcement (redistribution up to 30 %)
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::calculations::rc_beam::{calculate, RcBeamInput};
//! use rcbeam_core::calculations::bending::{DesignMoment, SectionType};
//! use rcbeam_core::materials::{ConcreteClass, MaterialOverrides};
//! use rcbeam_core::reinforcement::BarLayer;
//! use rcbeam_core::section::SectionGeometry;
//!
//! let input = RcBeamInput {
//!     label: "B-1".to_string(),
//!     concrete_class: ConcreteClass::C30_37,
//!     materials: MaterialOverrides::default(),
//!     geometry: SectionGeometry {
//!         width_mm: 300.0,
//!         depth_mm: 500.0,
//!         min_cover_mm: 30.0,
//!         cover_deviation_mm: 10.0,
//!         link_diameter_mm: 8.0,
//!     },
//!     moment: DesignMoment::new(250.0),
//!     tension_layers: vec![BarLayer::new(20.0, 6)],
//!     compression_layers: vec![],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.design.section_type, SectionType::Singly);
//! println!("A_s,req = {:.0} mm²", result.design.as_req_mm2);
//! println!("Pass: {}", result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::bending::{design_bending, BendingDesign, DesignMoment, SectionType};
use crate::calculations::utilization::UtilizationReport;
use crate::errors::CalcResult;
use crate::materials::{resolve_materials, ConcreteClass, MaterialOverrides, MaterialProperties};
use crate::reinforcement::{BarLayer, CentroidResult, Face, ReinforcementLayout};
use crate::section::{effective_depths, EffectiveDepths, SectionGeometry};

/// Input parameters for an RC beam section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "concrete_class": "C30/37",
///   "materials": { "fyk_main_mpa": 500.0 },
///   "geometry": {
///     "width_mm": 300.0,
///     "depth_mm": 500.0,
///     "min_cover_mm": 30.0,
///     "cover_deviation_mm": 10.0,
///     "link_diameter_mm": 8.0
///   },
///   "moment": { "moment_knm": 250.0, "redistribution_percent": 15.0 },
///   "tension_layers": [ { "diameter_mm": 20.0, "count": 6 } ],
///   "compression_layers": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcBeamInput {
    /// User label for this beam (e.g., "B-1", "Transfer beam grid C")
    pub label: String,

    /// Concrete strength class
    pub concrete_class: ConcreteClass,

    /// Steel strengths and partial factors; unset fields take the defaults
    #[serde(default)]
    pub materials: MaterialOverrides,

    /// Section dimensions, cover and link diameter
    pub geometry: SectionGeometry,

    /// Design moment and redistribution
    pub moment: DesignMoment,

    /// Tension bar layers, outermost first
    pub tension_layers: Vec<BarLayer>,

    /// Compression bar layers, outermost first; may be empty
    #[serde(default)]
    pub compression_layers: Vec<BarLayer>,
}

impl RcBeamInput {
    /// Validate every input without running the design.
    ///
    /// A form or prompt loop can call this after each edit and show the
    /// error message until it returns `Ok`.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.moment.validate()?;
        resolve_materials(self.concrete_class, &self.materials)?;
        ReinforcementLayout::from_layers(Face::Tension, &self.tension_layers)?.centroid()?;
        ReinforcementLayout::from_layers(Face::Compression, &self.compression_layers)?;
        Ok(())
    }
}

/// Results from the RC beam design.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "fyd_main_mpa": 434.78,
///   "d_eff_mm": 442.0,
///   "dc_eff_mm": 48.0,
///   "design": { "section_type": "Singly", "k": 0.1422, "k_bal": 0.1672, "as_req_mm2": 1524.8 },
///   "utilization": { "tension": { "ratio": 0.809, "status": "Pass" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcBeamResult {
    // === Materials ===
    /// Resolved material values used for the design
    pub materials: MaterialProperties,

    /// Design concrete strength f_cd (MPa)
    pub fcd_mpa: f64,

    /// Design yield strength of main bars f_yd (MPa)
    pub fyd_main_mpa: f64,

    /// Design yield strength of links f_ywd (MPa)
    pub fyd_shear_mpa: f64,

    // === Reinforcement Layout ===
    pub tension: CentroidResult,

    pub compression: CentroidResult,

    // === Effective Depths ===
    /// Nominal cover c_nom (mm)
    pub nominal_cover_mm: f64,

    /// Effective depth to tension steel d (mm)
    pub d_eff_mm: f64,

    /// Depth to compression steel d2 (mm)
    pub dc_eff_mm: f64,

    // === Design ===
    pub design: BendingDesign,

    pub utilization: UtilizationReport,
}

impl RcBeamResult {
    /// Tension steel centroid y_t (mm)
    pub fn y_t_mm(&self) -> f64 {
        self.tension.centroid_mm
    }

    /// Compression steel centroid y_c (mm)
    pub fn y_c_mm(&self) -> f64 {
        self.compression.centroid_mm
    }

    pub fn section_type(&self) -> SectionType {
        self.design.section_type
    }

    /// Provided bars cover the required areas on both faces
    pub fn passes(&self) -> bool {
        self.utilization.passes()
    }

    pub fn effective_depths(&self) -> EffectiveDepths {
        EffectiveDepths {
            d_eff_mm: self.d_eff_mm,
            dc_eff_mm: self.dc_eff_mm,
        }
    }
}

/// Design the flexural reinforcement of an RC beam section.
///
/// This is a pure function: the same input always gives the same result.
///
/// # Returns
///
/// * `Ok(RcBeamResult)` - Design results with intermediate values
/// * `Err(CalcError)` - The first violated precondition; no partial result
pub fn calculate(input: &RcBeamInput) -> CalcResult<RcBeamResult> {
    input.geometry.validate()?;
    input.moment.validate()?;

    let materials = resolve_materials(input.concrete_class, &input.materials)?;

    let tension = ReinforcementLayout::from_layers(Face::Tension, &input.tension_layers)?.centroid()?;
    let compression =
        ReinforcementLayout::from_layers(Face::Compression, &input.compression_layers)?.centroid()?;

    let depths = effective_depths(&input.geometry, tension.centroid_mm, compression.centroid_mm);
    debug!(
        label = %input.label,
        y_t_mm = tension.centroid_mm,
        y_c_mm = compression.centroid_mm,
        d_eff_mm = depths.d_eff_mm,
        dc_eff_mm = depths.dc_eff_mm,
        "effective depths"
    );

    let design = design_bending(&materials, &input.geometry, &depths, &input.moment)?;

    let utilization = UtilizationReport::new(
        design.as_req_mm2,
        tension.total_area_mm2,
        design.asc_req_mm2,
        compression.total_area_mm2,
    );

    debug!(
        label = %input.label,
        section_type = ?design.section_type,
        as_req_mm2 = design.as_req_mm2,
        asc_req_mm2 = design.asc_req_mm2,
        "bending design complete"
    );

    Ok(RcBeamResult {
        fcd_mpa: materials.fcd_mpa(),
        fyd_main_mpa: materials.fyd_main_mpa(),
        fyd_shear_mpa: materials.fyd_shear_mpa(),
        materials,
        tension,
        compression,
        nominal_cover_mm: input.geometry.nominal_cover_mm(),
        d_eff_mm: depths.d_eff_mm,
        dc_eff_mm: depths.dc_eff_mm,
        design,
        utilization,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::utilization::UtilizationStatus;
    use crate::errors::CalcError;

    /// b = 300, h = 500, c_nom = 40, φ_w = 8, 6H20, C30/37
    fn test_beam(moment_knm: f64) -> RcBeamInput {
        RcBeamInput {
            label: "Test Beam".to_string(),
            concrete_class: ConcreteClass::C30_37,
            materials: MaterialOverrides::default(),
            geometry: SectionGeometry {
                width_mm: 300.0,
                depth_mm: 500.0,
                min_cover_mm: 30.0,
                cover_deviation_mm: 10.0,
                link_diameter_mm: 8.0,
            },
            moment: DesignMoment::new(moment_knm),
            tension_layers: vec![BarLayer::new(20.0, 6)],
            compression_layers: vec![],
        }
    }

    #[test]
    fn test_intermediate_values() {
        let result = calculate(&test_beam(250.0)).unwrap();
        assert_eq!(result.y_t_mm(), 10.0);
        assert_eq!(result.y_c_mm(), 0.0);
        assert_eq!(result.nominal_cover_mm, 40.0);
        assert_eq!(result.d_eff_mm, 442.0);
        assert_eq!(result.dc_eff_mm, 48.0);
        assert!((result.fyd_main_mpa - 434.78).abs() < 0.01);
        assert!((result.fyd_shear_mpa - 434.78).abs() < 0.01);
        assert!((result.tension.total_area_mm2 - 1884.96).abs() < 0.01);
    }

    #[test]
    fn test_singly_regression_250_knm() {
        let result = calculate(&test_beam(250.0)).unwrap();
        assert_eq!(result.section_type(), SectionType::Singly);
        // Hand calculation: K = 0.14218, z = 377.105 mm, A_s = 1524.77 mm²
        assert!((result.design.as_req_mm2 - 1524.77).abs() / 1524.77 < 0.01);
        assert_eq!(result.design.asc_req_mm2, 0.0);
        assert_eq!(result.utilization.tension.status, UtilizationStatus::Pass);
        assert_eq!(result.utilization.compression.status, UtilizationStatus::NotApplicable);
        assert!(result.passes());
    }

    #[test]
    fn test_reference_case_300_knm() {
        // K = 0.17062 exceeds K_bal = 0.16716 at 15 % redistribution
        let result = calculate(&test_beam(300.0)).unwrap();
        assert_eq!(result.section_type(), SectionType::Doubly);
        assert!((result.design.k - 0.170622).abs() < 1e-6);
        assert!((result.design.as_req_mm2 - 1900.67).abs() / 1900.67 < 0.01);
        assert!((result.design.asc_req_mm2 - 35.56).abs() < 0.01);
        // 6H20 (1885 mm²) is just short and there are no top bars
        assert_eq!(result.utilization.tension.status, UtilizationStatus::Fail);
        assert_eq!(result.utilization.compression.status, UtilizationStatus::Fail);
        assert!(!result.passes());
    }

    #[test]
    fn test_reference_case_with_top_bars() {
        let mut input = test_beam(300.0);
        input.tension_layers = vec![BarLayer::new(25.0, 4)];
        input.compression_layers = vec![BarLayer::new(12.0, 2)];
        let result = calculate(&input).unwrap();
        // d = 500 − 48 − 12.5, d2 = 48 + 6
        assert_eq!(result.d_eff_mm, 439.5);
        assert_eq!(result.dc_eff_mm, 54.0);
        assert!(result.passes());
    }

    #[test]
    fn test_empty_tension_face() {
        let mut input = test_beam(100.0);
        input.tension_layers = vec![];
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::EmptyReinforcement { .. }));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_unbuildable_section() {
        let mut input = test_beam(100.0);
        input.geometry.depth_mm = 55.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRIC_INFEASIBILITY");
    }

    #[test]
    fn test_validate_matches_calculate() {
        let input = test_beam(250.0);
        assert!(input.validate().is_ok());

        let mut bad = test_beam(250.0);
        bad.materials.gamma_s = Some(-1.15);
        assert_eq!(bad.validate().unwrap_err(), calculate(&bad).unwrap_err());
    }

    #[test]
    fn test_repeatable() {
        let input = test_beam(275.0);
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let beam = test_beam(250.0);
        let json = serde_json::to_string_pretty(&beam).unwrap();
        assert!(json.contains("\"C30/37\""));
        let roundtrip: RcBeamInput = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_beam(250.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("as_req_mm2"));
        assert!(json.contains("\"Singly\""));
        let roundtrip: RcBeamResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.design.as_req_mm2 - result.design.as_req_mm2).abs() < 1e-9);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{
            "label": "B-2",
            "concrete_class": "C25/30",
            "geometry": { "width_mm": 250.0, "depth_mm": 450.0, "min_cover_mm": 35.0 },
            "moment": { "moment_knm": 90.0 },
            "tension_layers": [ { "diameter_mm": 16.0, "count": 3 } ]
        }"#;
        let input: RcBeamInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.moment.redistribution_percent, 15.0);
        assert!(input.compression_layers.is_empty());
        let result = calculate(&input).unwrap();
        assert_eq!(result.materials.gamma_c, 1.5);
        assert_eq!(result.d_eff_mm, 450.0 - 35.0 - 8.0);
    }
}
