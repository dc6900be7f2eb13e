use anyhow::Result;
use rcbeam_core::calculations::rc_beam::{calculate, RcBeamInput};
use rcbeam_core::calculations::{CalculationItem, SectionType, UtilizationStatus};
use rcbeam_core::project::Project;
use rcbeam_core::{design_report, CalcError};

const TWO_LAYER_BEAM: &str = r#"{
    "label": "B-7 transfer beam",
    "concrete_class": "C35/45",
    "materials": { "fyk_main_mpa": 500.0 },
    "geometry": {
        "width_mm": 350.0,
        "depth_mm": 600.0,
        "min_cover_mm": 25.0,
        "cover_deviation_mm": 10.0,
        "link_diameter_mm": 10.0
    },
    "moment": { "moment_knm": 420.0, "redistribution_percent": 30.0 },
    "tension_layers": [
        { "diameter_mm": 25.0, "count": 4 },
        { "diameter_mm": 20.0, "count": 2 },
        { "diameter_mm": 0.0, "count": 0 }
    ],
    "compression_layers": [ { "diameter_mm": 16.0, "count": 2 } ]
}"#;

#[test]
fn two_layer_doubly_reinforced_beam() -> Result<()> {
    let input: RcBeamInput = serde_json::from_str(TWO_LAYER_BEAM)?;
    let result = calculate(&input)?;

    // Layers at 12.5 and 25 + 25 + 10 = 60 mm, weighted by area
    assert!((result.y_t_mm() - 24.0152).abs() < 1e-3);
    assert_eq!(result.tension.layers.len(), 2);
    assert!((result.d_eff_mm - 530.985).abs() < 1e-3);
    assert_eq!(result.dc_eff_mm, 53.0);

    // 30 % redistribution lowers K_bal below K
    assert!((result.design.k_bal - 0.119592).abs() < 1e-6);
    assert!((result.design.k - 0.121604).abs() < 1e-5);
    assert_eq!(result.section_type(), SectionType::Doubly);
    assert!((result.design.m_bal_knm - 413.05).abs() < 0.01);

    assert!((result.design.asc_req_mm2 - 33.443).abs() < 0.01);
    assert!((result.design.as_req_mm2 - 2215.34).abs() < 0.01);

    assert_eq!(result.utilization.tension.status, UtilizationStatus::Pass);
    assert!((result.utilization.tension.ratio.unwrap_or(f64::NAN) - 0.85475).abs() < 1e-4);
    assert_eq!(result.utilization.compression.status, UtilizationStatus::Pass);
    assert!(result.passes());
    Ok(())
}

#[test]
fn report_follows_result() -> Result<()> {
    let input: RcBeamInput = serde_json::from_str(TWO_LAYER_BEAM)?;
    let result = calculate(&input)?;
    let lines = design_report(&input, &result);

    let as_req = lines
        .iter()
        .find(|l| l.symbol == "A_s,req")
        .and_then(|l| l.as_number());
    assert_eq!(as_req, Some(result.design.as_req_mm2));
    assert!(lines.iter().any(|l| l.symbol == "f_sc"));
    Ok(())
}

#[test]
fn errors_serialize_with_type_tag() -> Result<()> {
    let mut input: RcBeamInput = serde_json::from_str(TWO_LAYER_BEAM)?;
    input.moment.redistribution_percent = 45.0;

    let err = calculate(&input).expect_err("redistribution above 30 % must be rejected");
    assert!(matches!(err, CalcError::InvalidInput { .. }));

    let json = serde_json::to_string(&err)?;
    assert!(json.contains("\"type\":\"InvalidInput\""));
    assert!(json.contains("redistribution_percent"));
    Ok(())
}

#[test]
fn project_file_runs_every_beam() -> Result<()> {
    let mut project = Project::new("Engineer", "25-017", "Client");
    let beam: RcBeamInput = serde_json::from_str(TWO_LAYER_BEAM)?;
    let mut overloaded = beam.clone();
    overloaded.label = "B-8 overloaded".to_string();
    overloaded.moment.moment_knm = 700.0;

    project.add_item(CalculationItem::RcBeam(beam));
    project.add_item(CalculationItem::RcBeam(overloaded));

    let json = serde_json::to_string_pretty(&project)?;
    let loaded: Project = serde_json::from_str(&json)?;

    let results = loaded.calculate_all();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].1.label(), "B-7 transfer beam");
    assert!(results[0].2.as_ref().is_ok_and(|r| r.passes()));
    assert!(results[1].2.as_ref().is_ok_and(|r| !r.passes()));
    Ok(())
}
