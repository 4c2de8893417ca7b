// File: crates/energy-series/tests/compose.rs
// Purpose: Validate pure chart composition: scaling, ordering, legend and annotation.

use energy_series::compose::{compose, Composition, Rgb, Scenario};
use energy_series::{ComposeError, ErrorPolicy, Point, Series, EPOCH_UNIX_SECONDS};

fn scenarios() -> Vec<Scenario> {
    let s = Series::new(vec![Point::new(0.0, 10.0, 1.0, 0.5), Point::new(100.0, 20.0, 2.0, 1.0)]);
    vec![
        Scenario::new("Proposal", Rgb::PASTEL_RED, s.clone()),
        Scenario::new("Imagination", Rgb::PASTEL_GREEN, s.clone()),
        Scenario::new("Planar", Rgb::PASTEL_BLUE, s),
    ]
}

#[test]
fn scales_all_series_with_independent_errors() {
    let spec = compose(scenarios(), &Composition::default()).unwrap();
    assert_eq!(spec.series.len(), 3);
    for s in &spec.series {
        let p = &s.points.points;
        assert_eq!(p[0].x, 0.0);
        assert_eq!(p[1].x, 100.0);
        assert!((p[0].y - 2.0).abs() < 1e-12);
        assert!((p[1].y - 4.0).abs() < 1e-12);
        assert!((p[0].err_high - 0.2).abs() < 1e-12);
        assert!((p[0].err_low - 0.1).abs() < 1e-12);
        assert!((p[1].err_low - 0.2).abs() < 1e-12);
    }
}

#[test]
fn mirror_upper_policy_flows_through() {
    let composition = Composition { error_policy: ErrorPolicy::MirrorUpper, ..Composition::default() };
    let spec = compose(scenarios(), &composition).unwrap();
    let p = &spec.series[0].points.points;
    assert!((p[0].err_low - 0.2).abs() < 1e-12);
    assert!((p[1].err_low - 0.4).abs() < 1e-12);
}

#[test]
fn legend_follows_scenario_order() {
    let spec = compose(scenarios(), &Composition::default()).unwrap();
    let labels: Vec<_> = spec.legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Proposal", "Imagination", "Planar"]);
    assert_eq!(spec.legend.entries[2].color, Rgb::PASTEL_BLUE);
}

#[test]
fn annotation_and_axes() {
    let spec = compose(scenarios(), &Composition::default()).unwrap();
    assert_eq!(
        spec.annotation.lines,
        ["Simulation", "Latitude = 52.4 ; Longitude = -1.56", "Efficiency (PV module) = 0.2"]
    );
    let time = spec.x_axis.time.as_ref().expect("time axis");
    assert_eq!(time.offset, EPOCH_UNIX_SECONDS);
    assert_eq!(time.format, "%d/%m/%Y");
    assert!(spec.y_axis.time.is_none());
    assert_eq!((spec.width, spec.height), (1247, 666));
}

#[test]
fn rejects_bad_efficiency() {
    for bad in [0.0, -0.2, f64::NAN, f64::INFINITY] {
        let composition = Composition { efficiency: bad, ..Composition::default() };
        let err = compose(scenarios(), &composition).unwrap_err();
        assert!(matches!(err, ComposeError::InvalidEfficiency(_)));
    }
}

#[test]
fn rejects_empty_input() {
    assert_eq!(compose(Vec::new(), &Composition::default()).unwrap_err(), ComposeError::NoScenarios);
}

#[test]
fn spec_round_trips_through_json() {
    let spec = compose(scenarios(), &Composition::default()).unwrap();
    let text = serde_json::to_string(&spec).unwrap();
    let back: energy_series::ChartSpec = serde_json::from_str(&text).unwrap();
    assert_eq!(back.legend.entries, spec.legend.entries);
    assert_eq!(back.annotation.lines, spec.annotation.lines);
    assert_eq!(back.x_axis, spec.x_axis);
    assert_eq!(back.series.len(), 3);
    assert_eq!(back.series[1].points.len(), 2);
}
