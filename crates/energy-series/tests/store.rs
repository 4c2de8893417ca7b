// File: crates/energy-series/tests/store.rs
// Purpose: Validate named-series lookup and validation in JSON results files.

use std::path::PathBuf;

use energy_series::{load_series, Point, ResultsFile, StoreError};

const NAME: &str = "averageTreeEnergyDensityGraph";

fn write_fixture(file: &str, body: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out/store").join(file);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_top_level_graph_in_order() {
    let path = write_fixture(
        "top.json",
        r#"{
            "averageTreeEnergyDensityGraph": {
                "x": [0, 86400, 172800], "y": [4.0, 3.5, 5.0],
                "eyl": [0.1, 0.2, 0.3], "eyh": [0.4, 0.5, 0.6]
            },
            "runSeconds": 812.5
        }"#,
    );
    let s = load_series(&path, NAME).expect("series loads");
    assert_eq!(
        s.points,
        vec![
            Point::new(0.0, 4.0, 0.4, 0.1),
            Point::new(86400.0, 3.5, 0.5, 0.2),
            Point::new(172800.0, 5.0, 0.6, 0.3),
        ]
    );
}

#[test]
fn missing_errors_default_to_zero() {
    let path = write_fixture("noerr.json", r#"{ "averageTreeEnergyDensityGraph": { "x": [1], "y": [2] } }"#);
    let s = load_series(&path, NAME).unwrap();
    assert_eq!(s.points, vec![Point::exact(1.0, 2.0)]);
}

#[test]
fn finds_graph_in_nested_directory() {
    let path = write_fixture(
        "nested.json",
        r#"{
            "meta": { "site": "coventry" },
            "results": { "averages": { "averageTreeEnergyDensityGraph": { "x": [5], "y": [6] } } }
        }"#,
    );
    let file = ResultsFile::open(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    let s = file.find_object_any(NAME).unwrap();
    assert_eq!(s.points, vec![Point::exact(5.0, 6.0)]);
}

#[test]
fn current_level_wins_over_nested() {
    let path = write_fixture(
        "shadow.json",
        r#"{
            "a": { "averageTreeEnergyDensityGraph": { "x": [1], "y": [1] } },
            "averageTreeEnergyDensityGraph": { "x": [2], "y": [2] }
        }"#,
    );
    let s = load_series(&path, NAME).unwrap();
    assert_eq!(s.points[0].x, 2.0);
}

#[test]
fn missing_series_names_file() {
    let path = write_fixture("other.json", r#"{ "someOtherGraph": { "x": [1], "y": [1] } }"#);
    let err = load_series(&path, NAME).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    let msg = err.to_string();
    assert!(msg.contains("series 'averageTreeEnergyDensityGraph' not found in file"), "{msg}");
    assert!(msg.contains("other.json"), "{msg}");
}

#[test]
fn missing_file_is_io_error() {
    let err = load_series("target/test_out/store/does_not_exist.json", NAME).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn invalid_json_is_parse_error() {
    let path = write_fixture("broken.json", "{ not json");
    assert!(matches!(load_series(&path, NAME).unwrap_err(), StoreError::Parse { .. }));
}

#[test]
fn length_mismatch_is_malformed() {
    let path = write_fixture("short.json", r#"{ "averageTreeEnergyDensityGraph": { "x": [1, 2], "y": [1] } }"#);
    let err = load_series(&path, NAME).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }), "{err}");

    let path = write_fixture(
        "short_err.json",
        r#"{ "averageTreeEnergyDensityGraph": { "x": [1, 2], "y": [1, 2], "eyh": [0.1] } }"#,
    );
    assert!(matches!(load_series(&path, NAME).unwrap_err(), StoreError::Malformed { .. }));
}

#[test]
fn negative_error_is_malformed() {
    let path = write_fixture(
        "negative.json",
        r#"{ "averageTreeEnergyDensityGraph": { "x": [1], "y": [1], "eyl": [-0.5] } }"#,
    );
    let err = load_series(&path, NAME).unwrap_err();
    assert!(err.to_string().contains("negative"), "{err}");
}

#[test]
fn non_graph_object_is_malformed() {
    let path = write_fixture("scalar.json", r#"{ "averageTreeEnergyDensityGraph": 3.5 }"#);
    assert!(matches!(load_series(&path, NAME).unwrap_err(), StoreError::Malformed { .. }));
}
