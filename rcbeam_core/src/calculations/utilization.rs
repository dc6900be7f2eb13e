//! Utilization of provided reinforcement against the required areas.
//!
//! ratio = A_req / A_prov. Pass below 1.0, Fail at or above it. A face with
//! nothing required and nothing provided is not applicable; a face with
//! steel required but none provided fails without a ratio.

use serde::{Deserialize, Serialize};

use crate::reinforcement::Face;

/// Outcome of one face check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilizationStatus {
    Pass,
    Fail,
    NotApplicable,
}

impl UtilizationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            UtilizationStatus::Pass => "PASS",
            UtilizationStatus::Fail => "FAIL",
            UtilizationStatus::NotApplicable => "N/A",
        }
    }
}

/// Required versus provided area on one face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    pub face: Face,
    /// Required area (mm²)
    pub required_mm2: f64,
    /// Provided area (mm²)
    pub provided_mm2: f64,
    /// required / provided; `None` when nothing is provided
    pub ratio: Option<f64>,
    pub status: UtilizationStatus,
}

impl Utilization {
    /// Compare required and provided areas on one face
    pub fn check(face: Face, required_mm2: f64, provided_mm2: f64) -> Self {
        let (ratio, status) = if provided_mm2 > 0.0 {
            let ratio = required_mm2 / provided_mm2;
            let status = if ratio < 1.0 {
                UtilizationStatus::Pass
            } else {
                UtilizationStatus::Fail
            };
            (Some(ratio), status)
        } else if required_mm2 > 0.0 {
            (None, UtilizationStatus::Fail)
        } else {
            (None, UtilizationStatus::NotApplicable)
        };

        Utilization {
            face,
            required_mm2,
            provided_mm2,
            ratio,
            status,
        }
    }

    pub fn passes(&self) -> bool {
        self.status != UtilizationStatus::Fail
    }
}

/// Utilization of both faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationReport {
    pub tension: Utilization,
    pub compression: Utilization,
}

impl UtilizationReport {
    pub fn new(
        as_req_mm2: f64,
        as_prov_mm2: f64,
        asc_req_mm2: f64,
        asc_prov_mm2: f64,
    ) -> Self {
        UtilizationReport {
            tension: Utilization::check(Face::Tension, as_req_mm2, as_prov_mm2),
            compression: Utilization::check(Face::Compression, asc_req_mm2, asc_prov_mm2),
        }
    }

    /// Neither face fails
    pub fn passes(&self) -> bool {
        self.tension.passes() && self.compression.passes()
    }

    /// Highest defined ratio of the two faces
    pub fn governing_ratio(&self) -> Option<f64> {
        match (self.tension.ratio, self.compression.ratio) {
            (Some(t), Some(c)) => Some(t.max(c)),
            (t, c) => t.or(c),
        }
    }
}
