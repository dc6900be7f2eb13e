//! # Design Report
//!
//! Flattens an [`RcBeamResult`] into labelled rows for display. Rows come
//! out in a fixed order: materials, geometry, centroids, effective depths,
//! design coefficients, areas, then utilization.
//!
//! Moments are reported in kNm.

use serde::{Deserialize, Serialize};

use crate::calculations::rc_beam::{RcBeamInput, RcBeamResult};
use crate::calculations::utilization::Utilization;
use crate::reinforcement::BarLayer;

/// Displayed value of a report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for ReportValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportValue::Number(v) => write!(f, "{:.2}", v),
            ReportValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One labelled row of the design report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub symbol: String,
    pub value: ReportValue,
    pub unit: String,
}

impl ReportLine {
    fn number(label: &str, symbol: &str, value: f64, unit: &str) -> Self {
        ReportLine {
            label: label.to_string(),
            symbol: symbol.to_string(),
            value: ReportValue::Number(value),
            unit: unit.to_string(),
        }
    }

    fn text(label: &str, symbol: &str, value: impl Into<String>) -> Self {
        ReportLine {
            label: label.to_string(),
            symbol: symbol.to_string(),
            value: ReportValue::Text(value.into()),
            unit: String::new(),
        }
    }

    /// Numeric value, if the row holds one
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            ReportValue::Number(v) => Some(v),
            ReportValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = if self.symbol.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.symbol)
        };
        if self.unit.is_empty() {
            write!(f, "{:<40} {}", name, self.value)
        } else {
            write!(f, "{:<40} {} {}", name, self.value, self.unit)
        }
    }
}

/// Build the ordered report rows for a completed design
pub fn design_report(input: &RcBeamInput, result: &RcBeamResult) -> Vec<ReportLine> {
    let m = &result.materials;
    let g = &input.geometry;
    let design = &result.design;

    let mut lines = vec![
        // Materials
        ReportLine::text("Concrete class", "", m.concrete_class.code()),
        ReportLine::number("Characteristic concrete strength", "f_ck", m.fck_mpa, "MPa"),
        ReportLine::number("Design concrete strength", "f_cd", result.fcd_mpa, "MPa"),
        ReportLine::number("Main bar yield strength", "f_yk", m.fyk_main_mpa, "MPa"),
        ReportLine::number("Main bar design strength", "f_yd", result.fyd_main_mpa, "MPa"),
        ReportLine::number("Link yield strength", "f_ywk", m.fyk_shear_mpa, "MPa"),
        ReportLine::number("Link design strength", "f_ywd", result.fyd_shear_mpa, "MPa"),
        // Geometry
        ReportLine::number("Width", "b", g.width_mm, "mm"),
        ReportLine::number("Overall depth", "h", g.depth_mm, "mm"),
        ReportLine::number("Nominal cover", "c_nom", result.nominal_cover_mm, "mm"),
        ReportLine::number("Link diameter", "φ_w", g.link_diameter_mm, "mm"),
        // Reinforcement layout
        ReportLine::text("Tension bars", "", bar_schedule(&input.tension_layers)),
        ReportLine::text("Compression bars", "", bar_schedule(&input.compression_layers)),
        ReportLine::number("Tension steel centroid", "y_t", result.y_t_mm(), "mm"),
        ReportLine::number("Compression steel centroid", "y_c", result.y_c_mm(), "mm"),
        ReportLine::number("Effective depth", "d", result.d_eff_mm, "mm"),
        ReportLine::number("Compression steel depth", "d2", result.dc_eff_mm, "mm"),
        // Design
        ReportLine::number("Design moment", "M_Ed", input.moment.moment_knm, "kNm"),
        ReportLine::number("Redistribution", "p", input.moment.redistribution_percent, "%"),
        ReportLine::number("Redistribution ratio", "δ", design.redistribution_ratio, ""),
        ReportLine::number("Moment coefficient", "K", design.k, ""),
        ReportLine::number("Balanced coefficient", "K_bal", design.k_bal, ""),
        ReportLine::number("Balanced moment", "M_bal", design.m_bal_knm, "kNm"),
        ReportLine::text("Section type", "", design.section_type.display_name()),
        ReportLine::number("Lever arm", "z", design.lever_arm_mm, "mm"),
    ];

    if let Some(ratio) = design.ductility_ratio {
        lines.push(ReportLine::number("Ductility ratio", "d2/d", ratio, ""));
    }
    if let Some(fsc) = design.compression_steel_stress_mpa {
        lines.push(ReportLine::number("Compression steel stress", "f_sc", fsc, "MPa"));
    }

    lines.extend([
        ReportLine::number("Minimum tension steel", "A_s,min", design.as_min_mm2, "mm²"),
        ReportLine::number("Maximum tension steel", "A_s,max", design.as_max_mm2, "mm²"),
        ReportLine::number("Required tension steel", "A_s,req", design.as_req_mm2, "mm²"),
        ReportLine::number("Required compression steel", "A_sc,req", design.asc_req_mm2, "mm²"),
        ReportLine::number("Provided tension steel", "A_s,prov", result.tension.total_area_mm2, "mm²"),
        ReportLine::number(
            "Provided compression steel",
            "A_sc,prov",
            result.compression.total_area_mm2,
            "mm²",
        ),
    ]);

    lines.extend(utilization_lines("Tension", &result.utilization.tension));
    lines.extend(utilization_lines("Compression", &result.utilization.compression));
    lines
}

/// "4H25 + 2H20", or "none" for an empty face
fn bar_schedule(layers: &[BarLayer]) -> String {
    let used: Vec<String> = layers
        .iter()
        .take_while(|layer| !layer.is_blank())
        .map(BarLayer::designation)
        .collect();
    if used.is_empty() {
        "none".to_string()
    } else {
        used.join(" + ")
    }
}

fn utilization_lines(face: &str, u: &Utilization) -> Vec<ReportLine> {
    let mut lines = Vec::with_capacity(2);
    if let Some(ratio) = u.ratio {
        lines.push(ReportLine::number(&format!("{} utilization", face), "A_req/A_prov", ratio, ""));
    }
    lines.push(ReportLine::text(&format!("{} check", face), "", u.status.display_name()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bending::DesignMoment;
    use crate::calculations::rc_beam::calculate;
    use crate::materials::{ConcreteClass, MaterialOverrides};
    use crate::section::SectionGeometry;

    fn test_input(moment_knm: f64, compression_layers: Vec<BarLayer>) -> RcBeamInput {
        RcBeamInput {
            label: "R-1".to_string(),
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
            compression_layers,
        }
    }

    fn find<'a>(lines: &'a [ReportLine], symbol: &str) -> Option<&'a ReportLine> {
        lines.iter().find(|l| l.symbol == symbol)
    }

    #[test]
    fn test_singly_report_rows() {
        let input = test_input(250.0, vec![]);
        let result = calculate(&input).unwrap();
        let lines = design_report(&input, &result);

        assert_eq!(lines[0].value, ReportValue::Text("C30/37".to_string()));
        assert!((find(&lines, "d").unwrap().as_number().unwrap() - 442.0).abs() < 1e-9);
        assert!((find(&lines, "K").unwrap().as_number().unwrap() - 0.14218).abs() < 1e-4);

        // No compression steel rows for a singly reinforced section
        assert!(find(&lines, "f_sc").is_none());
        assert!(find(&lines, "d2/d").is_none());
        assert!(lines.iter().any(|l| l.label == "Compression check"
            && l.value == ReportValue::Text("N/A".to_string())));
    }

    #[test]
    fn test_doubly_report_rows() {
        let input = test_input(300.0, vec![]);
        let result = calculate(&input).unwrap();
        let lines = design_report(&input, &result);

        assert!(find(&lines, "f_sc").is_some());
        assert!((find(&lines, "d2/d").unwrap().as_number().unwrap() - 0.10860).abs() < 1e-4);
        assert!(lines
            .iter()
            .any(|l| l.label == "Section type" && l.value == ReportValue::Text("Doubly reinforced".to_string())));
    }

    #[test]
    fn test_balanced_moment_in_knm() {
        let input = test_input(250.0, vec![]);
        let result = calculate(&input).unwrap();
        let lines = design_report(&input, &result);

        let m_bal = find(&lines, "M_bal").unwrap();
        assert_eq!(m_bal.unit, "kNm");
        // K_bal · f_ck · b · d² = 0.167157 · 30 · 300 · 442² N·mm
        let expected = 0.167157 * 30.0 * 300.0 * 442.0 * 442.0 / crate::units::NMM_PER_KNM;
        assert!((m_bal.as_number().unwrap() - expected).abs() < 0.1);
    }

    #[test]
    fn test_redistribution_rows() {
        let mut input = test_input(250.0, vec![]);
        input.moment.redistribution_percent = 20.0;
        let result = calculate(&input).unwrap();
        let lines = design_report(&input, &result);

        let percent = find(&lines, "p").unwrap();
        assert_eq!(percent.unit, "%");
        assert_eq!(percent.as_number(), Some(20.0));
        let delta = find(&lines, "δ").unwrap();
        assert!((delta.as_number().unwrap() - 0.8).abs() < 1e-12);
        assert!(delta.unit.is_empty());
    }

    #[test]
    fn test_bar_schedule() {
        let layers = [BarLayer::new(25.0, 4), BarLayer::new(20.0, 2), BarLayer::new(0.0, 0)];
        assert_eq!(bar_schedule(&layers), "4H25 + 2H20");
        assert_eq!(bar_schedule(&[]), "none");
    }

    #[test]
    fn test_line_display() {
        let line = ReportLine::number("Effective depth", "d", 442.0, "mm");
        let text = line.to_string();
        assert!(text.starts_with("Effective depth (d)"));
        assert!(text.ends_with("442.00 mm"));
    }

    #[test]
    fn test_report_serializes() {
        let input = test_input(250.0, vec![]);
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&design_report(&input, &result)).unwrap();
        assert!(json.contains("\"symbol\":\"K_bal\""));
    }
}
