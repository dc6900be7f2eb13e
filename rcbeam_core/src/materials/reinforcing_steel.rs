//! Reinforcing Steel (EN 1992-1-1 Section 3.2)
//!
//! Constants for B500 class reinforcement and the design-strength helpers.

/// Default characteristic yield strength f_yk for main and link bars (MPa)
pub const DEFAULT_FYK_MPA: f64 = 500.0;

/// Design modulus of elasticity of reinforcing steel E_s (MPa), EC2 3.2.7(4)
pub const ES_MPA: f64 = 200_000.0;

/// Ultimate compressive strain in concrete ε_cu3 for f_ck ≤ 50 MPa
pub const EPSILON_CU3: f64 = 0.0035;

/// Design yield strength f_yd = f_yk / γ_s
#[inline]
pub fn design_yield_strength(fyk_mpa: f64, gamma_s: f64) -> f64 {
    fyk_mpa / gamma_s
}

/// Area of a single round bar of diameter `diameter_mm` (mm²)
#[inline]
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    std::f64::consts::PI * diameter_mm.powi(2) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_yield_strength() {
        // 500 / 1.15 = 434.78
        assert!((design_yield_strength(500.0, 1.15) - 434.78).abs() < 0.01);
    }

    #[test]
    fn test_bar_area() {
        // H20: π·20²/4 = 314.16 mm²
        assert!((bar_area_mm2(20.0) - 314.159).abs() < 0.001);
    }
}
