//! Study configuration: distance grids, figure files and sizes.

use std::path::{Path, PathBuf};

use crate::math::Scalar;
use crate::sweep::linspace;

/// Uniform distance grid, both ends included.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSpec {
    /// First distance (km).
    pub start_km: Scalar,
    /// Last distance (km).
    pub stop_km: Scalar,
    /// Number of samples.
    pub samples: usize,
}

impl SweepSpec {
    /// Grid of `samples` points over [`start_km`, `stop_km`].
    #[must_use]
    pub const fn new(start_km: Scalar, stop_km: Scalar, samples: usize) -> Self {
        Self {
            start_km,
            stop_km,
            samples,
        }
    }

    /// Materialises the grid.
    #[must_use]
    pub fn distances(&self) -> Vec<Scalar> {
        linspace(self.start_km, self.stop_km, self.samples)
    }
}

/// One output figure: file name and pixel size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    /// File name inside the output directory.
    pub file_name: String,
    /// Width and height in pixels.
    pub size: (u32, u32),
}

impl FigureSpec {
    /// Creates a figure description.
    #[must_use]
    pub fn new(file_name: impl Into<String>, size: (u32, u32)) -> Self {
        Self {
            file_name: file_name.into(),
            size,
        }
    }

    /// Full path of the figure below `dir`.
    #[must_use]
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// Everything the report needs besides the physical constants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    /// Directory receiving the figures.
    pub output_dir: PathBuf,
    /// Short-line grid for the distributed/series comparison.
    pub comparison: SweepSpec,
    /// Long-line grid for the distributed profile.
    pub long_line: SweepSpec,
    /// Line lengths for the efficiency curve.
    pub efficiency: SweepSpec,
    /// Distributed vs series comparison figure.
    pub comparison_figure: FigureSpec,
    /// Long-line profile figure.
    pub long_line_figure: FigureSpec,
    /// Efficiency figure.
    pub efficiency_figure: FigureSpec,
}

impl StudyConfig {
    /// The three report figures written below `output_dir`.
    #[must_use]
    pub fn report(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            comparison: SweepSpec::new(0.0, 20.0, 100),
            long_line: SweepSpec::new(0.0, 1000.0, 500),
            efficiency: SweepSpec::new(1.0, 200.0, 100),
            comparison_figure: FigureSpec::new("model_comparison_20km.png", (1000, 500)),
            long_line_figure: FigureSpec::new("voltage_current_1000km.png", (1000, 500)),
            efficiency_figure: FigureSpec::new("efficiency_vs_length.png", (800, 500)),
        }
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self::report("images")
    }
}
