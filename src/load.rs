//! Receiving-end (load) phasors of a balanced three-phase load.

use num_complex::Complex;

use crate::constants::{phase_voltage, LOAD_ACTIVE_POWER, LOAD_LINE_VOLTAGE, LOAD_POWER_FACTOR, PHASES};
use crate::errors::{LineProfileError, Result};
use crate::math::{phasor, Scalar};

/// Nameplate description of a balanced three-phase load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadRating {
    /// Line-to-line RMS voltage (V).
    pub line_voltage: Scalar,
    /// Total three-phase active power (W).
    pub active_power: Scalar,
    /// Power factor cos φ, lagging.
    pub power_factor: Scalar,
}

impl LoadRating {
    /// 80 MW at 130 kV, cos φ = 0.8.
    #[must_use]
    pub const fn study_load() -> Self {
        Self {
            line_voltage: LOAD_LINE_VOLTAGE,
            active_power: LOAD_ACTIVE_POWER,
            power_factor: LOAD_POWER_FACTOR,
        }
    }

    /// Per-phase phasors at the load.
    pub fn phasors(&self) -> Result<LoadPhasors> {
        load_phasors(self.line_voltage, self.active_power, self.power_factor)
    }
}

/// Per-phase voltage and current at the load, voltage taken as angle reference.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPhasors {
    /// Line-to-neutral voltage phasor Vch (V), real.
    pub voltage: Complex<Scalar>,
    /// Line current phasor Ich (A), lagging by φ.
    pub current: Complex<Scalar>,
    /// Active power per phase Pch (W).
    pub power_per_phase: Scalar,
}

impl LoadPhasors {
    /// Total three-phase active power delivered to the load (W).
    #[must_use]
    pub fn total_power(&self) -> Scalar {
        PHASES * self.power_per_phase
    }
}

/// Computes `(Vch, Ich)` for a load of `active_power` W at `line_voltage` V line-to-line.
///
/// `Ich = Pch / (Vch·cos φ) · e^(−jφ)`. Fails when `power_factor` is outside (0, 1].
pub fn load_phasors(line_voltage: Scalar, active_power: Scalar, power_factor: Scalar) -> Result<LoadPhasors> {
    if !(power_factor > 0.0 && power_factor <= 1.0) {
        return Err(LineProfileError::InvalidPowerFactor(power_factor));
    }
    let v = phase_voltage(line_voltage);
    let p = active_power / PHASES;
    let phi = power_factor.acos();
    let current = phasor(-phi) * (p / (v * power_factor));
    Ok(LoadPhasors {
        voltage: Complex::new(v, 0.0),
        current,
        power_per_phase: p,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::three_phase_power;

    #[test]
    fn study_load_phasors() {
        let load = LoadRating::study_load().phasors().unwrap();
        assert_relative_eq!(load.voltage.re, 75_055.535, max_relative = 1e-8);
        assert_eq!(load.voltage.im, 0.0);
        assert_relative_eq!(load.current.norm(), 444.115_59, max_relative = 1e-7);
        assert_relative_eq!(load.current.arg(), -0.643_501_108_8, epsilon = 1e-9);
        assert_relative_eq!(load.power_per_phase, 80.0e6 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn phasors_carry_rated_power() {
        let load = LoadRating::study_load().phasors().unwrap();
        let p = three_phase_power(load.voltage, load.current);
        assert_relative_eq!(p, 80.0e6, max_relative = 1e-12);
        assert_relative_eq!(load.total_power(), 80.0e6, max_relative = 1e-12);
    }

    #[test]
    fn unity_power_factor_is_in_phase() {
        let load = load_phasors(20.0e3, 3.0e6, 1.0).unwrap();
        assert_relative_eq!(load.current.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_out_of_range_power_factor() {
        for pf in [0.0, -0.5, 1.2, Scalar::NAN] {
            assert!(matches!(
                load_phasors(130.0e3, 80.0e6, pf),
                Err(LineProfileError::InvalidPowerFactor(_))
            ));
        }
    }
}
