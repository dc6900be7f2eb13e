//! # Bending Design Engine
//!
//! Classifies a rectangular section as singly or doubly reinforced and
//! returns the required steel areas for the design moment.
//!
//! ## Procedure
//!
//! 1. δ = 1 − p/100, K_bal = 0.453(δ − 0.4)(1 − 0.4(δ − 0.4))
//! 2. K = M_Ed/(b·d²·f_ck)
//! 3. K ≤ K_bal: singly reinforced, A_s = M_Ed/(z·f_yd) ≥ A_s,min, A_s2 = 0
//! 4. K > K_bal: doubly reinforced, compression steel carries the excess
//!    moment at a stress of f_yd (d2/d ≤ 0.171) or from strain compatibility
//! 5. A_s is bounded to [A_s,min, A_s,max]
//!
//! Geometry that would make a later formula divide by zero or by a negative
//! quantity is rejected before that formula is evaluated.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::flexure::{
    balanced_moment, balanced_tension_area, compression_area, compression_steel_stress, k_balanced,
    lever_arm, max_tension_area, min_tension_area, moment_coefficient, redistribution_ratio,
    BALANCED_LEVER_ARM, DUCTILITY_LIMIT,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;
use crate::section::{EffectiveDepths, SectionGeometry};
use crate::units::{KiloNewtonMeters, NewtonMillimeters};

/// Default moment redistribution (%)
pub const DEFAULT_REDISTRIBUTION_PERCENT: f64 = 15.0;

/// Largest redistribution allowed for class B and C reinforcement, EC2 5.5(4)
pub const MAX_REDISTRIBUTION_PERCENT: f64 = 30.0;

fn default_redistribution_percent() -> f64 {
    DEFAULT_REDISTRIBUTION_PERCENT
}

/// Design moment and the redistribution applied to it.
///
/// ## JSON Example
///
/// ```json
/// { "moment_knm": 250.0, "redistribution_percent": 15.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignMoment {
    /// Design moment M_Ed (kNm)
    pub moment_knm: f64,
    /// Moment redistribution (%), defaults to 15
    #[serde(default = "default_redistribution_percent")]
    pub redistribution_percent: f64,
}

impl DesignMoment {
    /// Moment with the default 15 % redistribution
    pub fn new(moment_knm: f64) -> Self {
        DesignMoment {
            moment_knm,
            redistribution_percent: DEFAULT_REDISTRIBUTION_PERCENT,
        }
    }

    pub fn with_redistribution(mut self, percent: f64) -> Self {
        self.redistribution_percent = percent;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.moment_knm.is_finite() || self.moment_knm <= 0.0 {
            return Err(CalcError::non_positive(
                "moment_knm",
                self.moment_knm,
                "Design moment must be positive",
            ));
        }
        if !(0.0..=MAX_REDISTRIBUTION_PERCENT).contains(&self.redistribution_percent) {
            return Err(CalcError::invalid_input(
                "redistribution_percent",
                self.redistribution_percent.to_string(),
                format!("Redistribution must be between 0 and {} %", MAX_REDISTRIBUTION_PERCENT),
            ));
        }
        Ok(())
    }

    /// M_Ed in N·mm
    pub fn moment_nmm(&self) -> f64 {
        NewtonMillimeters::from(KiloNewtonMeters(self.moment_knm)).0
    }

    /// δ = 1 − p/100
    pub fn redistribution_ratio(&self) -> f64 {
        redistribution_ratio(self.redistribution_percent)
    }
}

/// Whether the section needs compression reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    Singly,
    Doubly,
}

impl SectionType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionType::Singly => "Singly reinforced",
            SectionType::Doubly => "Doubly reinforced",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Output of the bending design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingDesign {
    pub section_type: SectionType,

    /// Redistribution ratio δ
    pub redistribution_ratio: f64,

    /// Applied moment coefficient K
    pub k: f64,

    /// Balanced moment coefficient K_bal
    pub k_bal: f64,

    /// Balanced moment capacity K_bal·f_ck·b·d² (kNm)
    pub m_bal_knm: f64,

    /// Lever arm used for the tension steel (mm); 0.82d when doubly reinforced
    pub lever_arm_mm: f64,

    /// The singly reinforced lever-arm discriminant was negative and z = 0.95d
    pub lever_arm_fallback: bool,

    /// d2/d, reported for doubly reinforced sections
    pub ductility_ratio: Option<f64>,

    /// Stress assumed in the compression steel (MPa), doubly reinforced only
    pub compression_steel_stress_mpa: Option<f64>,

    /// A_s,min = 0.001572·b·d (mm²)
    pub as_min_mm2: f64,

    /// A_s,max = 0.04·b·h (mm²)
    pub as_max_mm2: f64,

    /// Tension area before the min/max bounds (mm²)
    pub as_calc_mm2: f64,

    /// Required tension area (mm²)
    pub as_req_mm2: f64,

    /// Required compression area (mm²)
    pub asc_req_mm2: f64,

    /// A_s,max capped the calculated tension area
    pub max_reinforcement_governs: bool,
}

/// Outcome of the singly or doubly reinforced branch
struct Branch {
    section_type: SectionType,
    lever_arm_mm: f64,
    lever_arm_fallback: bool,
    ductility_ratio: Option<f64>,
    fsc: Option<f64>,
    as_calc: f64,
    asc_req: f64,
}

/// Run the bending design for one section.
///
/// # Errors
///
/// * `GeometricInfeasibility` if d ≤ 0, if d ≤ d2 when compression steel is
///   needed, or if strain compatibility puts the compression steel in tension
pub fn design_bending(
    materials: &MaterialProperties,
    geometry: &SectionGeometry,
    depths: &EffectiveDepths,
    moment: &DesignMoment,
) -> CalcResult<BendingDesign> {
    let b = geometry.width_mm;
    let h = geometry.depth_mm;
    let d = depths.d_eff_mm;
    let d2 = depths.dc_eff_mm;
    let fck = materials.fck_mpa;
    let fyd = materials.fyd_main_mpa();
    let m_ed = moment.moment_nmm();

    if !d.is_finite() || d <= 0.0 {
        return Err(CalcError::geometric_infeasibility(
            "effective depth to tension steel must be positive",
            d,
            d2,
        ));
    }

    let mr = moment.redistribution_ratio();
    let k_bal = k_balanced(mr);
    let k = moment_coefficient(m_ed, b, d, fck);
    let m_bal_knm = KiloNewtonMeters::from(NewtonMillimeters(balanced_moment(k_bal, fck, b, d))).0;

    let as_min = min_tension_area(b, d);
    let as_max = max_tension_area(b, h);

    debug!(k, k_bal, d_eff_mm = d, dc_eff_mm = d2, "bending coefficients");

    let branch = if k <= k_bal {
        let z = lever_arm(k, d);
        if z.fallback {
            warn!(k, "lever arm discriminant negative, using 0.95d");
        }
        Branch {
            section_type: SectionType::Singly,
            lever_arm_mm: z.z_mm,
            lever_arm_fallback: z.fallback,
            ductility_ratio: None,
            fsc: None,
            as_calc: m_ed / (z.z_mm * fyd),
            asc_req: 0.0,
        }
    } else {
        if depths.d_minus_d2_mm() <= 0.0 {
            return Err(CalcError::geometric_infeasibility(
                "compression steel must lie above the tension steel (d > d2)",
                d,
                d2,
            ));
        }

        let duc = depths.ductility_ratio();
        let fsc = if duc <= DUCTILITY_LIMIT {
            fyd
        } else {
            compression_steel_stress(d, d2)
        };
        if fsc <= 0.0 {
            return Err(CalcError::geometric_infeasibility(
                "compression steel lies below the balanced neutral axis (d2 >= 0.45d)",
                d,
                d2,
            ));
        }

        let asc_req = compression_area(k, k_bal, fck, b, d, d2, fsc);
        debug!(duc, fsc, asc_req, "compression steel required");
        Branch {
            section_type: SectionType::Doubly,
            lever_arm_mm: BALANCED_LEVER_ARM * d,
            lever_arm_fallback: false,
            ductility_ratio: Some(duc),
            fsc: Some(fsc),
            as_calc: balanced_tension_area(k_bal, fck, b, d, fyd) + asc_req,
            asc_req,
        }
    };
    let as_calc = branch.as_calc;

    let max_reinforcement_governs = as_calc > as_max;
    if max_reinforcement_governs {
        warn!(as_calc, as_max, "required tension steel exceeds 0.04·b·h");
    }
    let as_req = as_calc.max(as_min).min(as_max);

    Ok(BendingDesign {
        section_type: branch.section_type,
        redistribution_ratio: mr,
        k,
        k_bal,
        m_bal_knm,
        lever_arm_mm: branch.lever_arm_mm,
        lever_arm_fallback: branch.lever_arm_fallback,
        ductility_ratio: branch.ductility_ratio,
        compression_steel_stress_mpa: branch.fsc,
        as_min_mm2: as_min,
        as_max_mm2: as_max,
        as_calc_mm2: as_calc,
        as_req_mm2: as_req,
        asc_req_mm2: branch.asc_req,
        max_reinforcement_governs,
    })
}
