//! Convenience re-exports for line studies.

pub use crate::circuits::{
    transmission::{derive_parameters, LineParameters, RLGC},
    twoport::TwoPort,
};
pub use crate::constants::*;
pub use crate::errors::{LineProfileError, Result};
pub use crate::load::{load_phasors, LoadPhasors, LoadRating};
pub use crate::math::{phasor, three_phase_power, CScalar, Scalar};
pub use crate::profile::{write_profile_csv, Approximation, LineModel, ProfilePoint};
pub use crate::report::{generate_report, PlotConfig, ReportOutputs};
pub use crate::simulation::{FigureSpec, StudyConfig, SweepSpec};
pub use crate::sweep::{linspace, mag, mag_in};
