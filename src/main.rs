use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use line_profile::prelude::*;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let model = LineModel::study().context("building the study line model")?;
    info!(
        vch = model.load.voltage.re,
        ich = model.load.current.norm(),
        zc = %model.params.zc,
        "load phasors"
    );

    let study = StudyConfig::default();
    let outputs = generate_report(&model, &study, &PlotConfig::default())
        .with_context(|| format!("writing figures to {}", study.output_dir.display()))?;
    info!(?outputs, "report complete");
    Ok(())
}
