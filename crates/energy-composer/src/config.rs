// File: crates/energy-composer/src/config.rs
// Summary: Fixed run configuration: which files to read, how to label them, where to write.

use std::path::PathBuf;

use energy_series::compose::{Composition, Rgb};

/// One input results file and how its series is presented.
#[derive(Clone, Debug)]
pub struct ScenarioSource {
    pub label: String,
    pub file: PathBuf,
    pub color: Rgb,
}

impl ScenarioSource {
    pub fn new(label: impl Into<String>, file: impl Into<PathBuf>, color: Rgb) -> Self {
        Self { label: label.into(), file: file.into(), color }
    }
}

#[derive(Clone, Debug)]
pub struct ComposerConfig {
    /// Directory the scenario files are resolved against.
    pub input_dir: PathBuf,
    pub scenarios: Vec<ScenarioSource>,
    /// Name of the series object inside every results file.
    pub object_name: String,
    /// Rendered chart; the serialized chart spec is written next to it with a `.json` extension.
    pub output: PathBuf,
    pub composition: Composition,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            scenarios: vec![
                ScenarioSource::new("Proposal", "5yearly.proposalExampleA.clearSky.json", Rgb::PASTEL_RED),
                ScenarioSource::new("Imagination", "5yearly.printed.clearSky.json", Rgb::PASTEL_GREEN),
                ScenarioSource::new("Planar", "5yearly.optimalPlanar.clearSky.json", Rgb::PASTEL_BLUE),
            ],
            object_name: "averageTreeEnergyDensityGraph".to_string(),
            output: PathBuf::from("composed.png"),
            composition: Composition::default(),
        }
    }
}

impl ComposerConfig {
    pub fn spec_output(&self) -> PathBuf {
        self.output.with_extension("json")
    }
}
