//! Section Geometry and Effective Depths
//!
//! Rectangular section dimensions, nominal cover and link size, and the
//! effective depths derived from them and the bar centroids.
//!
//! ```text
//!   ┌───────────────────┐ ─┬─ compression face
//!   │  ○   ○   ○        │  │  dc_eff = c_nom + φ_w + y_c
//!   │                   │  │
//!   │                   │  h
//!   │  ●   ●   ●   ●    │  │  d_eff = h − c_nom − φ_w − y_t
//!   └───────────────────┘ ─┴─ tension face
//!            b
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::require_positive;

/// Section dimensions and cover.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_mm": 300.0,
///   "depth_mm": 500.0,
///   "min_cover_mm": 30.0,
///   "cover_deviation_mm": 10.0,
///   "link_diameter_mm": 8.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Width b (mm)
    pub width_mm: f64,
    /// Overall depth h (mm)
    pub depth_mm: f64,
    /// Minimum cover c_min (mm)
    pub min_cover_mm: f64,
    /// Allowance for deviation Δc_dev (mm)
    #[serde(default)]
    pub cover_deviation_mm: f64,
    /// Shear link diameter φ_w (mm); zero when there are no links
    #[serde(default)]
    pub link_diameter_mm: f64,
}

impl SectionGeometry {
    /// Validate dimensions.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm, "Width must be positive")?;
        require_positive("depth_mm", self.depth_mm, "Overall depth must be positive")?;
        require_positive("min_cover_mm", self.min_cover_mm, "Minimum cover must be positive")?;
        if !self.cover_deviation_mm.is_finite() || self.cover_deviation_mm < 0.0 {
            return Err(CalcError::non_positive(
                "cover_deviation_mm",
                self.cover_deviation_mm,
                "Cover deviation cannot be negative",
            ));
        }
        if !self.link_diameter_mm.is_finite() || self.link_diameter_mm < 0.0 {
            return Err(CalcError::non_positive(
                "link_diameter_mm",
                self.link_diameter_mm,
                "Link diameter cannot be negative",
            ));
        }
        Ok(())
    }

    /// Nominal cover c_nom = c_min + Δc_dev (mm)
    pub fn nominal_cover_mm(&self) -> f64 {
        self.min_cover_mm + self.cover_deviation_mm
    }

    /// Distance from a face to the inside of the links (mm)
    pub fn cover_to_main_bars_mm(&self) -> f64 {
        self.nominal_cover_mm() + self.link_diameter_mm
    }
}

/// Effective depths measured from the compression face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDepths {
    /// Depth to the tension steel centroid d (mm)
    pub d_eff_mm: f64,
    /// Depth to the compression steel centroid d2 (mm)
    pub dc_eff_mm: f64,
}

impl EffectiveDepths {
    /// Ratio d2/d used for the compression steel ductility check
    pub fn ductility_ratio(&self) -> f64 {
        self.dc_eff_mm / self.d_eff_mm
    }

    /// Distance between the two steel centroids d − d2 (mm)
    pub fn d_minus_d2_mm(&self) -> f64 {
        self.d_eff_mm - self.dc_eff_mm
    }
}

/// Effective depths from geometry and the face centroids.
///
/// Does not reject non-physical results (d ≤ 0, d ≤ d2); the design engine does.
///
/// # Example
/// ```rust
/// use rcbeam_core::section::{effective_depths, SectionGeometry};
///
/// let geometry = SectionGeometry {
///     width_mm: 300.0,
///     depth_mm: 500.0,
///     min_cover_mm: 30.0,
///     cover_deviation_mm: 10.0,
///     link_diameter_mm: 8.0,
/// };
/// let depths = effective_depths(&geometry, 10.0, 0.0);
/// assert_eq!(depths.d_eff_mm, 442.0);
/// assert_eq!(depths.dc_eff_mm, 48.0);
/// ```
pub fn effective_depths(geometry: &SectionGeometry, y_t_mm: f64, y_c_mm: f64) -> EffectiveDepths {
    let to_bars = geometry.cover_to_main_bars_mm();
    EffectiveDepths {
        d_eff_mm: geometry.depth_mm - to_bars - y_t_mm,
        dc_eff_mm: to_bars + y_c_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geometry() -> SectionGeometry {
        SectionGeometry {
            width_mm: 300.0,
            depth_mm: 500.0,
            min_cover_mm: 25.0,
            cover_deviation_mm: 10.0,
            link_diameter_mm: 10.0,
        }
    }

    #[test]
    fn test_nominal_cover() {
        assert_eq!(test_geometry().nominal_cover_mm(), 35.0);
    }

    #[test]
    fn test_effective_depths() {
        let depths = effective_depths(&test_geometry(), 16.0, 10.0);
        // 500 − 35 − 10 − 16
        assert_eq!(depths.d_eff_mm, 439.0);
        // 35 + 10 + 10
        assert_eq!(depths.dc_eff_mm, 55.0);
        assert_eq!(depths.d_minus_d2_mm(), 384.0);
    }

    #[test]
    fn test_non_physical_depth_passes_through() {
        let mut g = test_geometry();
        g.depth_mm = 50.0;
        let depths = effective_depths(&g, 16.0, 0.0);
        assert!(depths.d_eff_mm < 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(test_geometry().validate().is_ok());

        let mut g = test_geometry();
        g.width_mm = 0.0;
        assert_eq!(g.validate().unwrap_err().error_code(), "NON_POSITIVE_VALUE");

        let mut g = test_geometry();
        g.min_cover_mm = 0.0;
        assert!(g.validate().is_err());

        let mut g = test_geometry();
        g.cover_deviation_mm = 0.0;
        g.link_diameter_mm = 0.0;
        assert!(g.validate().is_ok());

        g.cover_deviation_mm = -1.0;
        assert!(g.validate().is_err());
    }
}
