#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Line constants, load ratings and unit helpers.
pub mod constants;
/// Shared scalar/phasor aliases and helpers.
pub mod math;
/// Line sections as ABCD two-ports.
pub mod circuits;
/// Load-end phasors.
pub mod load;
/// Voltage, current and efficiency profiles along the line.
pub mod profile;
/// Distance grids and post-processing helpers.
pub mod sweep;
/// Study configuration (grids, figure files).
pub mod simulation;
/// PNG report figures.
pub mod report;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
