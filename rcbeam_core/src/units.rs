//! # Unit Types
//!
//! Type-safe wrappers for the moment units crossing the input and report
//! boundary.
//! These are plain f64 newtypes that serialize as bare numbers.
//!
//! ## Internal Unit System
//!
//! The engine works in one consistent system and converts only at the boundary:
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Force: newtons (N)
//! - Stress: megapascals (MPa = N/mm²)
//! - Moment: newton-millimetres (N·mm)
//!
//! Design moments are entered and reported in kilonewton-metres (kNm).
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::units::{KiloNewtonMeters, NewtonMillimeters};
//!
//! let m_ed = KiloNewtonMeters(300.0);
//! let internal: NewtonMillimeters = m_ed.into();
//! assert_eq!(internal.0, 300.0e6);
//! ```

use serde::{Deserialize, Serialize};

/// N·mm in one kNm (1000 N × 1000 mm)
pub const NMM_PER_KNM: f64 = 1.0e6;

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * NMM_PER_KNM)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / NMM_PER_KNM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let m = KiloNewtonMeters(1.5);
        let nmm: NewtonMillimeters = m.into();
        assert_eq!(nmm.0, 1.5e6);

        let back: KiloNewtonMeters = nmm.into();
        assert!((back.0 - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&KiloNewtonMeters(250.0)).unwrap();
        assert_eq!(json, "250.0");
        let m: KiloNewtonMeters = serde_json::from_str("300").unwrap();
        assert_eq!(NewtonMillimeters::from(m).0, 3.0e8);
    }
}
