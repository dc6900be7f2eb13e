//! Concrete Strength Classes (EN 1992-1-1 Table 3.1)
//!
//! Characteristic cylinder strength f_ck for the twelve strength classes
//! offered by the design forms, from C12/15 to C70/85.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete strength class, named as C{f_ck}/{f_ck,cube}
///
/// Deserializes through [`ConcreteClass::from_str_flexible`], so "C30/37",
/// "c30-37" and "C30" are all accepted in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConcreteClass {
    #[serde(rename = "C12/15")]
    C12_15,
    #[serde(rename = "C16/20")]
    C16_20,
    #[serde(rename = "C20/25")]
    C20_25,
    #[serde(rename = "C25/30")]
    C25_30,
    #[serde(rename = "C30/37")]
    C30_37,
    #[serde(rename = "C35/45")]
    C35_45,
    #[serde(rename = "C40/50")]
    C40_50,
    #[serde(rename = "C45/55")]
    C45_55,
    #[serde(rename = "C50/60")]
    C50_60,
    #[serde(rename = "C55/67")]
    C55_67,
    #[serde(rename = "C60/75")]
    C60_75,
    #[serde(rename = "C70/85")]
    C70_85,
}

impl ConcreteClass {
    /// All concrete classes in ascending strength, for UI selection
    pub const ALL: [ConcreteClass; 12] = [
        ConcreteClass::C12_15,
        ConcreteClass::C16_20,
        ConcreteClass::C20_25,
        ConcreteClass::C25_30,
        ConcreteClass::C30_37,
        ConcreteClass::C35_45,
        ConcreteClass::C40_50,
        ConcreteClass::C45_55,
        ConcreteClass::C50_60,
        ConcreteClass::C55_67,
        ConcreteClass::C60_75,
        ConcreteClass::C70_85,
    ];

    /// Characteristic cylinder strength f_ck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteClass::C12_15 => 12.0,
            ConcreteClass::C16_20 => 16.0,
            ConcreteClass::C20_25 => 20.0,
            ConcreteClass::C25_30 => 25.0,
            ConcreteClass::C30_37 => 30.0,
            ConcreteClass::C35_45 => 35.0,
            ConcreteClass::C40_50 => 40.0,
            ConcreteClass::C45_55 => 45.0,
            ConcreteClass::C50_60 => 50.0,
            ConcreteClass::C55_67 => 55.0,
            ConcreteClass::C60_75 => 60.0,
            ConcreteClass::C70_85 => 70.0,
        }
    }

    /// Class designation, e.g. "C30/37"
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteClass::C12_15 => "C12/15",
            ConcreteClass::C16_20 => "C16/20",
            ConcreteClass::C20_25 => "C20/25",
            ConcreteClass::C25_30 => "C25/30",
            ConcreteClass::C30_37 => "C30/37",
            ConcreteClass::C35_45 => "C35/45",
            ConcreteClass::C40_50 => "C40/50",
            ConcreteClass::C45_55 => "C45/55",
            ConcreteClass::C50_60 => "C50/60",
            ConcreteClass::C55_67 => "C55/67",
            ConcreteClass::C60_75 => "C60/75",
            ConcreteClass::C70_85 => "C70/85",
        }
    }

    /// Parse from common string representations ("C30/37", "c30-37", "C30")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '_'], "").replace('-', "/");
        ConcreteClass::ALL
            .into_iter()
            .find(|class| {
                let code = class.code();
                normalized == code || code.split('/').next() == Some(normalized.as_str())
            })
            .ok_or_else(|| CalcError::invalid_selection("concrete_class", s))
    }

    /// Look up by position in [`ConcreteClass::ALL`], as a dropdown reports it
    pub fn from_index(index: usize) -> CalcResult<Self> {
        ConcreteClass::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CalcError::invalid_selection("concrete_class", index.to_string()))
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for ConcreteClass {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ConcreteClass::from_str_flexible(&s)
    }
}

impl std::str::FromStr for ConcreteClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConcreteClass::from_str_flexible(s)
    }
}
