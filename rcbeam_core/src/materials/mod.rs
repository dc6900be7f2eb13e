//! # Materials
//!
//! Concrete and reinforcing-steel properties for Eurocode 2 bending design.
//!
//! A design run starts from a [`ConcreteClass`] and an optional set of
//! [`MaterialOverrides`]. [`resolve_materials`] fills every unset field from
//! the named defaults and validates the result, producing an immutable
//! [`MaterialProperties`] that is passed by value into the engine.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::{resolve_materials, ConcreteClass, MaterialOverrides};
//!
//! let props = resolve_materials(ConcreteClass::C30_37, &MaterialOverrides::default()).unwrap();
//! assert_eq!(props.fck_mpa, 30.0);
//! assert_eq!(props.gamma_s, 1.15);
//! println!("f_yd = {:.1} MPa", props.fyd_main_mpa());
//! ```

pub mod concrete;
pub mod reinforcing_steel;

pub use concrete::ConcreteClass;
pub use reinforcing_steel::{bar_area_mm2, design_yield_strength, DEFAULT_FYK_MPA, ES_MPA};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default partial safety factor for concrete γ_c (EC2 Table 2.1N, persistent)
pub const DEFAULT_GAMMA_C: f64 = 1.5;

/// Default partial safety factor for reinforcing steel γ_s (EC2 Table 2.1N)
pub const DEFAULT_GAMMA_S: f64 = 1.15;

/// Default long-term compressive strength coefficient α_cc (UK National Annex)
pub const DEFAULT_ALPHA_CC: f64 = 0.85;

/// Optional user overrides for material values.
///
/// Every field left as `None` takes the named default. Missing keys in JSON
/// deserialize as `None`.
///
/// ## JSON Example
///
/// ```json
/// { "fyk_main_mpa": 500.0, "gamma_s": 1.15 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOverrides {
    /// Main (flexural) bar yield strength f_yk (MPa)
    pub fyk_main_mpa: Option<f64>,
    /// Shear link yield strength f_ywk (MPa)
    pub fyk_shear_mpa: Option<f64>,
    /// Partial factor for concrete γ_c
    pub gamma_c: Option<f64>,
    /// Partial factor for steel γ_s
    pub gamma_s: Option<f64>,
    /// Long-term strength coefficient α_cc, in (0, 1]
    pub alpha_cc: Option<f64>,
}

/// Fully resolved material properties for one design run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Concrete class the strengths were taken from
    pub concrete_class: ConcreteClass,
    /// Characteristic cylinder strength f_ck (MPa)
    pub fck_mpa: f64,
    /// Main bar yield strength f_yk (MPa)
    pub fyk_main_mpa: f64,
    /// Shear link yield strength f_ywk (MPa)
    pub fyk_shear_mpa: f64,
    /// Partial factor for concrete γ_c
    pub gamma_c: f64,
    /// Partial factor for steel γ_s
    pub gamma_s: f64,
    /// Long-term strength coefficient α_cc
    pub alpha_cc: f64,
}

impl MaterialProperties {
    /// Design compressive strength f_cd = α_cc·f_ck/γ_c (MPa)
    pub fn fcd_mpa(&self) -> f64 {
        self.alpha_cc * self.fck_mpa / self.gamma_c
    }

    /// Design yield strength of main bars f_yd (MPa)
    pub fn fyd_main_mpa(&self) -> f64 {
        design_yield_strength(self.fyk_main_mpa, self.gamma_s)
    }

    /// Design yield strength of shear links f_ywd (MPa)
    pub fn fyd_shear_mpa(&self) -> f64 {
        design_yield_strength(self.fyk_shear_mpa, self.gamma_s)
    }
}

/// Resolve a concrete class and overrides into validated material properties.
///
/// # Errors
///
/// * `NonPositiveValue` if any override is ≤ 0 (or not finite), or if α_cc
///   falls outside (0, 1]
pub fn resolve_materials(
    concrete_class: ConcreteClass,
    overrides: &MaterialOverrides,
) -> CalcResult<MaterialProperties> {
    let props = MaterialProperties {
        concrete_class,
        fck_mpa: concrete_class.fck_mpa(),
        fyk_main_mpa: overrides.fyk_main_mpa.unwrap_or(DEFAULT_FYK_MPA),
        fyk_shear_mpa: overrides.fyk_shear_mpa.unwrap_or(DEFAULT_FYK_MPA),
        gamma_c: overrides.gamma_c.unwrap_or(DEFAULT_GAMMA_C),
        gamma_s: overrides.gamma_s.unwrap_or(DEFAULT_GAMMA_S),
        alpha_cc: overrides.alpha_cc.unwrap_or(DEFAULT_ALPHA_CC),
    };

    require_positive("fyk_main_mpa", props.fyk_main_mpa, "Yield strength must be positive")?;
    require_positive("fyk_shear_mpa", props.fyk_shear_mpa, "Yield strength must be positive")?;
    require_positive("gamma_c", props.gamma_c, "Partial factor must be positive")?;
    require_positive("gamma_s", props.gamma_s, "Partial factor must be positive")?;
    require_positive("alpha_cc", props.alpha_cc, "alpha_cc must be in (0, 1]")?;
    if props.alpha_cc > 1.0 {
        return Err(CalcError::non_positive(
            "alpha_cc",
            props.alpha_cc,
            "alpha_cc must be in (0, 1]",
        ));
    }

    Ok(props)
}

/// Shared check for strictly positive, finite quantities.
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::non_positive(field, value, reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = resolve_materials(ConcreteClass::C30_37, &MaterialOverrides::default()).unwrap();
        assert_eq!(props.fck_mpa, 30.0);
        assert_eq!(props.fyk_main_mpa, 500.0);
        assert_eq!(props.fyk_shear_mpa, 500.0);
        assert_eq!(props.gamma_c, 1.5);
        assert_eq!(props.gamma_s, 1.15);
        assert_eq!(props.alpha_cc, 0.85);
    }

    #[test]
    fn test_design_strengths() {
        let props = resolve_materials(ConcreteClass::C30_37, &MaterialOverrides::default()).unwrap();
        // f_cd = 0.85 * 30 / 1.5 = 17.0
        assert!((props.fcd_mpa() - 17.0).abs() < 1e-9);
        assert!((props.fyd_main_mpa() - 434.78).abs() < 0.01);
    }

    #[test]
    fn test_overrides_applied() {
        let overrides = MaterialOverrides {
            fyk_shear_mpa: Some(250.0),
            gamma_s: Some(1.0),
            ..Default::default()
        };
        let props = resolve_materials(ConcreteClass::C40_50, &overrides).unwrap();
        assert_eq!(props.fck_mpa, 40.0);
        assert_eq!(props.fyd_shear_mpa(), 250.0);
        assert_eq!(props.fyd_main_mpa(), 500.0);
    }

    #[test]
    fn test_non_positive_override_rejected() {
        let overrides = MaterialOverrides {
            gamma_c: Some(0.0),
            ..Default::default()
        };
        let err = resolve_materials(ConcreteClass::C30_37, &overrides).unwrap_err();
        assert!(matches!(err, CalcError::NonPositiveValue { ref field, .. } if field == "gamma_c"));
    }

    #[test]
    fn test_alpha_cc_range() {
        let upper = MaterialOverrides {
            alpha_cc: Some(1.0),
            ..Default::default()
        };
        assert!(resolve_materials(ConcreteClass::C30_37, &upper).is_ok());

        for bad in [1.01, 0.0, -0.5] {
            let overrides = MaterialOverrides {
                alpha_cc: Some(bad),
                ..Default::default()
            };
            let err = resolve_materials(ConcreteClass::C30_37, &overrides).unwrap_err();
            assert_eq!(err.error_code(), "NON_POSITIVE_VALUE");
        }
    }

    #[test]
    fn test_overrides_from_partial_json() {
        let overrides: MaterialOverrides = serde_json::from_str(r#"{ "gamma_s": 1.0 }"#).unwrap();
        assert_eq!(overrides.gamma_s, Some(1.0));
        assert_eq!(overrides.fyk_main_mpa, None);
    }
}
