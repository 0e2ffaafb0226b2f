//! Line sections as ABCD two-ports, distributed and lumped.

/// Two-port network representations and conversions.
pub mod twoport;
/// Transmission line primitives and ABCD parameterization.
pub mod transmission;

pub use transmission::{derive_parameters, LineParameters, RLGC};
pub use twoport::TwoPort;
