//! Line constants, load ratings and small unit helpers.
//!
//! ## Line data
//!
//! The per-kilometre constants describe a single circuit of a 130 kV overhead
//! line at 50 Hz. They are literal study inputs: every figure of the report is
//! computed from them, and nothing at runtime overrides them.
//!
//! | Quantity | Symbol | Value |
//! |----------|--------|-------|
//! | Series resistance | R | 0.0849 Ω/km |
//! | Series inductance | L | 0.4576 mH/km |
//! | Shunt capacitance | C | 22.0 nF/km |
//! | Shunt conductance | G | 6.9 nS/km |
//! | System frequency | f | 50 Hz |

use std::f64::consts::PI;

use crate::math::Scalar;

/// Series resistance per kilometre (Ω/km).
pub const LINE_RESISTANCE: Scalar = 0.0849;
/// Series inductance per kilometre (H/km).
pub const LINE_INDUCTANCE: Scalar = 0.4576e-3;
/// Shunt capacitance per kilometre (F/km).
pub const LINE_CAPACITANCE: Scalar = 0.0220e-6;
/// Shunt conductance per kilometre (S/km).
pub const LINE_CONDUCTANCE: Scalar = 0.0069e-6;
/// System frequency in hertz.
pub const SYSTEM_FREQUENCY: Scalar = 50.0;

/// Rated line-to-line voltage at the load (V).
pub const LOAD_LINE_VOLTAGE: Scalar = 130.0e3;
/// Total three-phase active power drawn by the load (W).
pub const LOAD_ACTIVE_POWER: Scalar = 80.0e6;
/// Load power factor (lagging).
pub const LOAD_POWER_FACTOR: Scalar = 0.8;

/// Number of phases of the system.
pub const PHASES: Scalar = 3.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Line-to-neutral magnitude of a balanced three-phase line-to-line voltage.
#[inline]
#[must_use]
pub fn phase_voltage(line_to_line: Scalar) -> Scalar {
    line_to_line / Scalar::sqrt(3.0)
}
