//! Report figures for the line study.
//!
//! | Figure | Grid | Function |
//! |--------|------|----------|
//! | Distributed vs series, \|V\| and \|I\| | 0–20 km, 100 points | [`plot_model_comparison`] |
//! | Distributed \|V\| and \|I\| | 0–1000 km, 500 points | [`plot_long_line`] |
//! | Efficiency vs length | 1–200 km, 100 points | [`plot_efficiency`] |
//!
//! [`generate_report`] evaluates the line model on each grid and writes the
//! three PNG files, overwriting earlier runs.

pub mod config;
pub mod figures;

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::errors::Result;
use crate::profile::LineModel;
use crate::simulation::StudyConfig;

pub use config::PlotConfig;
pub use figures::{plot_efficiency, plot_long_line, plot_model_comparison};

/// Paths of the figures written by [`generate_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutputs {
    /// Distributed vs series comparison.
    pub comparison: PathBuf,
    /// Long-line profile.
    pub long_line: PathBuf,
    /// Efficiency curve.
    pub efficiency: PathBuf,
}

/// Evaluates `model` on the grids of `study` and renders the three figures.
pub fn generate_report(model: &LineModel, study: &StudyConfig, plot: &PlotConfig) -> Result<ReportOutputs> {
    fs::create_dir_all(&study.output_dir)?;

    let x = study.comparison.distances();
    let distributed = model.profile(&x);
    let series = model.profile_series(&x);
    let comparison = study.comparison_figure.path_in(&study.output_dir);
    plot_model_comparison(&distributed, &series, &comparison, study.comparison_figure.size, plot)?;
    info!(path = %comparison.display(), points = x.len(), "wrote model comparison");

    let x = study.long_line.distances();
    let profile = model.profile(&x);
    let long_line = study.long_line_figure.path_in(&study.output_dir);
    plot_long_line(&profile, &long_line, study.long_line_figure.size, plot)?;
    info!(path = %long_line.display(), points = x.len(), "wrote long-line profile");

    let lengths = study.efficiency.distances();
    let curve = model.efficiency_curve(&lengths);
    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
        debug!(first, last, "efficiency range (%)");
    }
    let efficiency = study.efficiency_figure.path_in(&study.output_dir);
    plot_efficiency(&lengths, &curve, &efficiency, study.efficiency_figure.size, plot)?;
    info!(path = %efficiency.display(), points = lengths.len(), "wrote efficiency curve");

    Ok(ReportOutputs {
        comparison,
        long_line,
        efficiency,
    })
}
