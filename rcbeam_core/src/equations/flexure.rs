//! # Rectangular Section Bending Formulas (EC2 Simplified Stress Block)
//!
//! Closed-form ULS bending equations for a rectangular reinforced-concrete
//! section with a rectangular stress block, as used in the concrete-centre
//! design aids for EN 1992-1-1.
//!
//! ## Notation
//!
//! - `b` = Section width
//! - `h` = Overall depth
//! - `d` = Effective depth to the tension steel centroid
//! - `d2` = Depth to the compression steel centroid
//! - `M` = Design moment M_Ed (N·mm)
//! - `K` = M / (b·d²·f_ck)
//! - `K_bal` = Balanced-section limit of K
//! - `z` = Lever arm
//! - `δ` / `mr` = Moment redistribution ratio
//!
//! All lengths in mm, stresses in MPa, moments in N·mm, areas in mm².
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Sections 3.1.7, 5.5, 6.1, 9.2.1.1
//! - How to Design Concrete Structures using Eurocode 2, Ch. 4 (Beams)

use super::section::rectangular_area;
use crate::materials::reinforcing_steel::{EPSILON_CU3, ES_MPA};

/// Leading coefficient of the balanced K expression
pub const K_BAL_COEFFICIENT: f64 = 0.453;

/// Lower bound of the redistribution ratio that keeps x/d positive (δ − 0.4)
pub const REDISTRIBUTION_OFFSET: f64 = 0.4;

/// Constant term of the lever-arm discriminant
pub const LEVER_ARM_DISCRIMINANT_CONSTANT: f64 = 0.25;

/// Coefficient of K in the lever-arm discriminant (= 1/(2·0.567))
pub const LEVER_ARM_K_FACTOR: f64 = 0.881;

/// Upper limit on the lever arm as a fraction of d
pub const LEVER_ARM_LIMIT: f64 = 0.95;

/// Lever arm of a balanced section as a fraction of d
pub const BALANCED_LEVER_ARM: f64 = 0.82;

/// d2/d at or below which compression steel is taken as yielded
pub const DUCTILITY_LIMIT: f64 = 0.171;

/// Neutral axis depth of a balanced section as a fraction of d
pub const BALANCED_NEUTRAL_AXIS: f64 = 0.45;

/// Minimum tension steel ratio A_s,min/(b·d) for f_yk = 500 MPa
pub const MIN_REINFORCEMENT_RATIO: f64 = 0.001572;

/// Maximum tension steel ratio A_s,max/(b·h), EC2 9.2.1.1(3)
pub const MAX_REINFORCEMENT_RATIO: f64 = 0.04;

/// Redistribution ratio δ = 1 − p/100
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::redistribution_ratio;
/// assert!((redistribution_ratio(15.0) - 0.85).abs() < 1e-12);
/// ```
#[inline]
pub fn redistribution_ratio(redistribution_percent: f64) -> f64 {
    1.0 - redistribution_percent / 100.0
}

/// Balanced moment coefficient
///
/// # Formula
/// K_bal = 0.453·(δ − 0.4)·(1 − 0.4·(δ − 0.4))
///
/// Depends on the redistribution ratio only.
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::k_balanced;
/// // δ = 0.85 → 0.453 × 0.45 × 0.82
/// assert!((k_balanced(0.85) - 0.167157).abs() < 1e-9);
/// ```
#[inline]
pub fn k_balanced(mr: f64) -> f64 {
    let x = mr - REDISTRIBUTION_OFFSET;
    K_BAL_COEFFICIENT * x * (1.0 - REDISTRIBUTION_OFFSET * x)
}

/// Non-dimensional applied moment K = M/(b·d²·f_ck)
#[inline]
pub fn moment_coefficient(m_nmm: f64, b: f64, d: f64, fck: f64) -> f64 {
    m_nmm / (b * d.powi(2) * fck)
}

/// Lever arm of a singly reinforced section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeverArm {
    /// Lever arm z (mm)
    pub z_mm: f64,
    /// True when 0.25 − 0.881K < 0 and z fell back to 0.95d
    pub fallback: bool,
}

/// Lever arm for a singly reinforced section
///
/// # Formula
/// z = min(d·(0.5 + √(0.25 − 0.881K)), 0.95d)
///
/// A negative discriminant gives z = 0.95d instead of a domain error.
/// A discriminant of exactly zero takes the regular branch (z = 0.5d).
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::lever_arm;
/// let z = lever_arm(0.1, 400.0);
/// assert!(!z.fallback);
/// assert!(z.z_mm <= 0.95 * 400.0);
/// ```
pub fn lever_arm(k: f64, d: f64) -> LeverArm {
    let discriminant = LEVER_ARM_DISCRIMINANT_CONSTANT - LEVER_ARM_K_FACTOR * k;
    let limit = LEVER_ARM_LIMIT * d;
    if discriminant >= 0.0 {
        LeverArm {
            z_mm: ((0.5 + discriminant.sqrt()) * d).min(limit),
            fallback: false,
        }
    } else {
        LeverArm {
            z_mm: limit,
            fallback: true,
        }
    }
}

/// Minimum tension reinforcement A_s,min = 0.001572·b·d (mm²)
#[inline]
pub fn min_tension_area(b: f64, d: f64) -> f64 {
    MIN_REINFORCEMENT_RATIO * b * d
}

/// Maximum tension reinforcement A_s,max = 0.04·b·h (mm²)
#[inline]
pub fn max_tension_area(b: f64, h: f64) -> f64 {
    MAX_REINFORCEMENT_RATIO * rectangular_area(b, h)
}

/// Compression steel stress from strain compatibility at the balanced neutral axis
///
/// # Formula
/// f_sc = E_s·ε_cu3·(0.45d − d2)/(0.45d)
///
/// Non-positive when the compression steel lies at or below the neutral axis.
#[inline]
pub fn compression_steel_stress(d: f64, d2: f64) -> f64 {
    let x = BALANCED_NEUTRAL_AXIS * d;
    (x - d2) * EPSILON_CU3 * ES_MPA / x
}

/// Compression steel area for the moment in excess of the balanced capacity
///
/// # Formula
/// A_s2 = (K − K_bal)·f_ck·b·d²/(f_sc·(d − d2))
///
/// The caller guarantees `f_sc > 0` and `d > d2`.
#[inline]
pub fn compression_area(k: f64, k_bal: f64, fck: f64, b: f64, d: f64, d2: f64, fsc: f64) -> f64 {
    (k - k_bal) * fck * b * d.powi(2) / (fsc * (d - d2))
}

/// Tension steel balancing the concrete at K_bal
///
/// # Formula
/// A_s1 = K_bal·f_ck·b·d²/(0.82d·f_yd)
#[inline]
pub fn balanced_tension_area(k_bal: f64, fck: f64, b: f64, d: f64, fyd: f64) -> f64 {
    k_bal * fck * b * d.powi(2) / (BALANCED_LEVER_ARM * d * fyd)
}

/// Balanced moment capacity M_bal = K_bal·f_ck·b·d² (N·mm)
#[inline]
pub fn balanced_moment(k_bal: f64, fck: f64, b: f64, d: f64) -> f64 {
    k_bal * fck * b * d.powi(2)
}
