//! # Cross-Section and Bar Arrangement Formulas
//!
//! Geometry of a rectangular concrete section and of bars placed in layers
//! against one of its faces.
//!
//! ## Notation
//!
//! - `b` = Width of section
//! - `h` = Overall depth of section
//! - `φ` = Bar diameter
//! - `s_v` = Vertical clear spacing between layers
//!
//! ## Layer Arrangement
//!
//! ```text
//!   face ─────────────────────────  (outside of the links)
//!        ●  ●  ●  ●   layer 1, centre at φ1/2
//!        ↕ s_v = max(25, φ1)
//!        ●  ●  ●      layer 2, centre at φ1 + s_v + φ2/2
//! ```
//!
//! Depths here are measured from the inside face of the links; cover and
//! link diameter are added by the effective depth calculation.
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Section 8.2 (spacing of bars)

/// Minimum vertical clear spacing between bar layers (mm)
pub const MIN_LAYER_CLEAR_SPACING_MM: f64 = 25.0;

/// Gross area of a rectangular section A_c = b·h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Clear spacing below a layer of bars of diameter `diameter_mm`
///
/// # Formula
/// s_v = max(25 mm, φ)
#[inline]
pub fn layer_clear_spacing(diameter_mm: f64) -> f64 {
    diameter_mm.max(MIN_LAYER_CLEAR_SPACING_MM)
}

/// Depth to the centre of each layer, measured from the face
///
/// Layer 1 sits at φ1/2. Every later layer is pushed in by each preceding
/// layer's own diameter plus its clear spacing.
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::section::layer_centroid_depths;
///
/// // 20 mm then 16 mm: 10, then 20 + 25 + 8 = 53
/// let depths = layer_centroid_depths(&[20.0, 16.0]);
/// assert_eq!(depths, vec![10.0, 53.0]);
/// ```
pub fn layer_centroid_depths(diameters_mm: &[f64]) -> Vec<f64> {
    let mut offset = 0.0;
    diameters_mm
        .iter()
        .map(|&diameter| {
            let depth = offset + diameter / 2.0;
            offset += diameter + layer_clear_spacing(diameter);
            depth
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_spacing() {
        assert_eq!(layer_clear_spacing(16.0), 25.0);
        assert_eq!(layer_clear_spacing(32.0), 32.0);
    }

    #[test]
    fn test_three_layer_depths() {
        // 32: 16 ; 32+32+25/2 → 76.5 ; 32+32+25+25+10 = 124
        let depths = layer_centroid_depths(&[32.0, 25.0, 20.0]);
        assert_eq!(depths, vec![16.0, 76.5, 124.0]);
    }

    #[test]
    fn test_no_layers() {
        assert!(layer_centroid_depths(&[]).is_empty());
    }
}
