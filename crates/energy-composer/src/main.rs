// File: crates/energy-composer/src/main.rs
// Summary: Composes the Proposal / Imagination / Planar yearly energy density results into one chart.

use anyhow::Result;
use energy_composer::ComposerConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ComposerConfig::default();
    let spec = energy_composer::run(&config)?;
    println!(
        "Wrote {} ({} series) and {}",
        config.output.display(),
        spec.series.len(),
        config.spec_output().display()
    );
    Ok(())
}
