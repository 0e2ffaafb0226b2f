//! Voltage, current and efficiency profiles along a loaded line.
//!
//! Distances `x` are measured in kilometres upstream from the load. At `x = 0`
//! both models return the load phasors; further upstream the distributed model
//! follows the hyperbolic line equations
//!
//! ```text
//! V(x) = Vch·cosh(γx) + Zc·Ich·sinh(γx)
//! I(x) = (Vch/Zc)·sinh(γx) + Ich·cosh(γx)
//! ```
//!
//! while the series model keeps the current constant and only adds the drop
//! across `Z·x`.

use std::io::{self, Write};

use num_complex::Complex;
use tracing::debug;

use crate::circuits::transmission::{LineParameters, RLGC};
use crate::constants::{angular_frequency, SYSTEM_FREQUENCY};
use crate::errors::Result;
use crate::load::{LoadPhasors, LoadRating};
use crate::math::{three_phase_power, Scalar};

/// Line model used to propagate the load phasors upstream.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approximation {
    /// Telegrapher's equations (γ, Zc).
    Distributed,
    /// Lumped series impedance `Z·x`, constant current.
    Series,
}

/// Phasors at a single distance from the load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the load in kilometres.
    pub distance_km: Scalar,
    /// Line-to-neutral voltage phasor (V).
    pub voltage: Complex<Scalar>,
    /// Line current phasor (A).
    pub current: Complex<Scalar>,
}

/// A loaded line: derived per-kilometre parameters plus the load phasors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    /// Z, Y, γ and Zc of the line.
    pub params: LineParameters,
    /// Receiving-end phasors.
    pub load: LoadPhasors,
}

impl LineModel {
    /// Builds the model for `rlgc` at angular frequency `omega` feeding `load`.
    #[must_use]
    pub fn new(rlgc: RLGC, omega: Scalar, load: LoadPhasors) -> Self {
        let params = rlgc.derive(omega);
        debug!(gamma = %params.gamma, zc = %params.zc, "derived line parameters");
        Self { params, load }
    }

    /// The 130 kV / 80 MW study case at 50 Hz.
    pub fn study() -> Result<Self> {
        let load = LoadRating::study_load().phasors()?;
        Ok(Self::new(RLGC::study_line(), angular_frequency(SYSTEM_FREQUENCY), load))
    }

    /// `(V, I)` at `x_km` from the load, distributed model.
    #[must_use]
    pub fn propagate(&self, x_km: Scalar) -> (Complex<Scalar>, Complex<Scalar>) {
        self.params.section(x_km).transfer(self.load.voltage, self.load.current)
    }

    /// `(V, I)` at `x_km` from the load, series-impedance model.
    #[must_use]
    pub fn propagate_series(&self, x_km: Scalar) -> (Complex<Scalar>, Complex<Scalar>) {
        self.params.series_section(x_km).transfer(self.load.voltage, self.load.current)
    }

    /// Evaluates one point with the chosen approximation.
    #[must_use]
    pub fn point(&self, x_km: Scalar, approximation: Approximation) -> ProfilePoint {
        let (voltage, current) = match approximation {
            Approximation::Distributed => self.propagate(x_km),
            Approximation::Series => self.propagate_series(x_km),
        };
        ProfilePoint {
            distance_km: x_km,
            voltage,
            current,
        }
    }

    /// Three-phase active power `3·Re(V·I*)` flowing at `x_km`, distributed model.
    #[must_use]
    pub fn sending_power(&self, x_km: Scalar) -> Scalar {
        let (v, i) = self.propagate(x_km);
        three_phase_power(v, i)
    }

    /// Efficiency in percent: `3·Pch / P(x) · 100`.
    #[must_use]
    pub fn efficiency(&self, x_km: Scalar) -> Scalar {
        self.load.total_power() / self.sending_power(x_km) * 100.0
    }

    /// Distributed-model profile over `distances_km`, order preserved.
    #[must_use]
    pub fn profile(&self, distances_km: &[Scalar]) -> Vec<ProfilePoint> {
        self.sweep(distances_km, Approximation::Distributed)
    }

    /// Series-model profile over `distances_km`, order preserved.
    #[must_use]
    pub fn profile_series(&self, distances_km: &[Scalar]) -> Vec<ProfilePoint> {
        self.sweep(distances_km, Approximation::Series)
    }

    /// Profile over `distances_km` with the chosen approximation.
    #[must_use]
    pub fn sweep(&self, distances_km: &[Scalar], approximation: Approximation) -> Vec<ProfilePoint> {
        distances_km
            .iter()
            .map(|&x| self.point(x, approximation))
            .collect()
    }

    /// Efficiency (%) for each line length in `lengths_km`.
    #[must_use]
    pub fn efficiency_curve(&self, lengths_km: &[Scalar]) -> Vec<Scalar> {
        lengths_km.iter().map(|&x| self.efficiency(x)).collect()
    }
}

/// Voltage phasors of a profile.
pub fn voltages(points: &[ProfilePoint]) -> impl Iterator<Item = Complex<Scalar>> + '_ {
    points.iter().map(|p| p.voltage)
}

/// Current phasors of a profile.
pub fn currents(points: &[ProfilePoint]) -> impl Iterator<Item = Complex<Scalar>> + '_ {
    points.iter().map(|p| p.current)
}

/// Writes a profile as CSV: distance, |V|, ∠V (deg), |I|, ∠I (deg).
pub fn write_profile_csv<W: Write>(mut w: W, points: &[ProfilePoint]) -> io::Result<()> {
    writeln!(w, "distance_km,abs_v,arg_v_deg,abs_i,arg_i_deg")?;
    for p in points {
        writeln!(
            w,
            "{:.6},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.distance_km,
            p.voltage.norm(),
            p.voltage.arg().to_degrees(),
            p.current.norm(),
            p.current.arg().to_degrees()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::sweep::{linspace, mag};

    fn model() -> LineModel {
        LineModel::study().unwrap()
    }

    #[test]
    fn both_models_start_at_load_phasors() {
        let m = model();
        assert_eq!(m.propagate(0.0), (m.load.voltage, m.load.current));
        assert_eq!(m.propagate_series(0.0), (m.load.voltage, m.load.current));
    }

    #[test]
    fn distributed_phasors_at_50_km() {
        let (v, i) = model().propagate(50.0);
        assert_relative_eq!(v.re, 78_384.208_112, max_relative = 1e-8);
        assert_relative_eq!(v.im, 1_478.038_997, max_relative = 1e-7);
        assert_relative_eq!(i.re, 355.066_755_73, max_relative = 1e-8);
        assert_relative_eq!(i.im, -239.951_101_92, max_relative = 1e-8);
    }

    #[test]
    fn series_model_keeps_current_constant() {
        let m = model();
        let xs = linspace(0.0, 20.0, 100);
        for p in m.profile_series(&xs) {
            assert_eq!(p.current, m.load.current);
        }
        let (v, _) = m.propagate_series(20.0);
        assert_relative_eq!(v.norm(), 76_427.089_097, max_relative = 1e-9);
    }

    #[test]
    fn models_agree_on_short_lines() {
        let m = model();
        let (vd, _) = m.propagate(20.0);
        let (vs, _) = m.propagate_series(20.0);
        assert_relative_eq!(vd.norm(), 76_412.137_080, max_relative = 1e-9);
        assert!((vd.norm() - vs.norm()).abs() / vd.norm() < 1e-3);
    }

    #[test]
    fn voltage_rises_over_first_20_km() {
        let m = model();
        let v = mag(voltages(&m.profile(&linspace(0.0, 20.0, 100))));
        assert!(v.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn profile_preserves_order() {
        let m = model();
        let xs = [300.0, 10.0, 75.0];
        let points = m.profile(&xs);
        for (p, &x) in points.iter().zip(xs.iter()) {
            assert_eq!(p.distance_km, x);
            assert_eq!((p.voltage, p.current), m.propagate(x));
        }
    }

    #[test]
    fn voltage_departs_from_load_value_at_1000_km() {
        let m = model();
        let (v, _) = m.propagate(1000.0);
        let ratio = v.norm() / m.load.voltage.norm();
        assert_relative_eq!(ratio, 1.418_709_427, max_relative = 1e-8);
        assert!(ratio > 1.4);
    }

    #[test]
    fn efficiency_matches_power_ratio_at_50_km() {
        let m = model();
        let (v, i) = m.propagate(50.0);
        let expected = 100.0 * 3.0 * m.load.power_per_phase / (3.0 * (v * i.conj()).re);
        assert_relative_eq!(m.efficiency(50.0), expected, max_relative = 1e-9);
        assert_relative_eq!(m.efficiency(50.0), 97.050_974_906, max_relative = 1e-9);
    }

    #[test]
    fn efficiency_tends_to_100_at_zero_length() {
        let m = model();
        assert_relative_eq!(m.efficiency(0.0), 100.0, max_relative = 1e-12);
        assert!(m.efficiency(1e-3) < 100.0);
        assert!(m.efficiency(1e-3) > 99.999);
    }

    #[test]
    fn efficiency_decreases_over_200_km() {
        let eff = model().efficiency_curve(&linspace(1.0, 200.0, 100));
        assert!(eff.windows(2).all(|w| w[1] < w[0]));
        assert_relative_eq!(eff[0], 99.937_141_726, max_relative = 1e-9);
        assert_relative_eq!(eff[99], 90.147_121_793, max_relative = 1e-9);
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let m = model();
        let points = m.profile(&[0.0, 10.0]);
        let mut buf = Vec::new();
        write_profile_csv(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "distance_km,abs_v,arg_v_deg,abs_i,arg_i_deg");
        assert!(lines[1].starts_with("0.000000,7.50555349946"));
    }
}
