// File: crates/energy-composer/src/lib.rs
// Summary: Load -> compose -> render pipeline behind the composer binary.

pub mod config;
pub mod render;

use anyhow::{Context, Result};
use energy_series::compose::{compose, ChartSpec, Scenario};
use energy_series::load_series;
use log::{debug, info};

pub use config::{ComposerConfig, ScenarioSource};
pub use render::{render, render_options, to_chart, write_spec};

/// Load every configured scenario, in order. The first failure aborts.
pub fn load_scenarios(config: &ComposerConfig) -> Result<Vec<Scenario>> {
    config
        .scenarios
        .iter()
        .map(|src| {
            let path = config.input_dir.join(&src.file);
            let series = load_series(&path, &config.object_name)
                .with_context(|| format!("loading scenario '{}'", src.label))?;
            debug!("scenario '{}': {} points from {}", src.label, series.len(), path.display());
            Ok(Scenario::new(src.label.clone(), src.color, series))
        })
        .collect()
}

/// Run the whole pipeline and return the composed spec.
pub fn run(config: &ComposerConfig) -> Result<ChartSpec> {
    let scenarios = load_scenarios(config)?;
    info!("loaded {} scenarios", scenarios.len());

    let spec = compose(scenarios, &config.composition).context("composing chart")?;
    render(&spec, &config.output)?;
    write_spec(&spec, &config.spec_output())?;
    Ok(spec)
}
