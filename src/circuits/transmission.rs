//! Transmission line primitives and ABCD parameterization.

use crate::constants::{
    LINE_CAPACITANCE, LINE_CONDUCTANCE, LINE_INDUCTANCE, LINE_RESISTANCE,
};
use crate::math::Scalar;

use super::twoport::{C, TwoPort};

/// Distributed RLGC parameters per kilometre.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RLGC {
    /// Series resistance per kilometre (Ω/km).
    pub r_per_km: Scalar,
    /// Series inductance per kilometre (H/km).
    pub l_per_km: Scalar,
    /// Shunt conductance per kilometre (S/km).
    pub g_per_km: Scalar,
    /// Shunt capacitance per kilometre (F/km).
    pub c_per_km: Scalar,
}

impl RLGC {
    /// Explicit per-kilometre parameters.
    #[must_use]
    pub fn new(r_per_km: Scalar, l_per_km: Scalar, c_per_km: Scalar, g_per_km: Scalar) -> Self {
        Self {
            r_per_km,
            l_per_km,
            g_per_km,
            c_per_km,
        }
    }

    /// The 130 kV study line.
    #[must_use]
    pub fn study_line() -> Self {
        Self::new(LINE_RESISTANCE, LINE_INDUCTANCE, LINE_CAPACITANCE, LINE_CONDUCTANCE)
    }

    /// Derives the per-kilometre series/shunt quantities at angular frequency `omega`.
    #[must_use]
    pub fn derive(&self, omega: Scalar) -> LineParameters {
        derive_parameters(self.r_per_km, self.l_per_km, self.c_per_km, self.g_per_km, omega)
    }
}

/// Per-kilometre quantities derived once from [`RLGC`] at a fixed frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    /// Series impedance Z = R + jωL (Ω/km).
    pub series: C,
    /// Shunt admittance Y = G + jωC (S/km).
    pub shunt: C,
    /// Propagation constant γ = √(ZY) (1/km).
    pub gamma: C,
    /// Characteristic impedance Zc = √(Z/Y) (Ω).
    pub zc: C,
}

/// Computes `(Z, Y, γ, Zc)` from per-kilometre constants at angular frequency `omega`.
///
/// Square roots take the principal branch. With a zero shunt admittance `γ`
/// is zero and `Zc` is left infinite; [`LineParameters::section`] handles that
/// case as a pure series element.
#[must_use]
pub fn derive_parameters(r: Scalar, l: Scalar, c: Scalar, g: Scalar, omega: Scalar) -> LineParameters {
    let series = C::new(r, omega * l);
    let shunt = C::new(g, omega * c);
    let gamma = (series * shunt).sqrt();
    let zc = if shunt.norm() == 0.0 {
        C::new(Scalar::INFINITY, 0.0)
    } else {
        (series / shunt).sqrt()
    };
    LineParameters {
        series,
        shunt,
        gamma,
        zc,
    }
}

impl LineParameters {
    /// ABCD two-port of a uniform section `length_km` long.
    #[must_use]
    pub fn section(&self, length_km: Scalar) -> TwoPort {
        // Degenerate shunt: nothing but series impedance
        if self.shunt.norm() == 0.0 {
            return self.series_section(length_km);
        }

        // ABCD = [[cosh(γl), Zc*sinh(γl)],[sinh(γl)/Zc, cosh(γl)]]
        let gl = self.gamma * length_km;
        let a = gl.cosh();
        let s = gl.sinh();
        TwoPort::from_abcd(a, self.zc * s, s / self.zc, a)
    }

    /// Lumped series-impedance approximation `Z·l` of a section `length_km` long.
    #[must_use]
    pub fn series_section(&self, length_km: Scalar) -> TwoPort {
        TwoPort::series_impedance(self.series * length_km)
    }

    /// Attenuation constant α = Re(γ) in nepers per kilometre.
    #[must_use]
    pub fn attenuation(&self) -> Scalar {
        self.gamma.re
    }

    /// Phase constant β = Im(γ) in radians per kilometre.
    #[must_use]
    pub fn phase_constant(&self) -> Scalar {
        self.gamma.im
    }

    /// Wavelength 2π/β in kilometres.
    #[must_use]
    pub fn wavelength_km(&self) -> Scalar {
        std::f64::consts::TAU / self.phase_constant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{angular_frequency, SYSTEM_FREQUENCY};
    use approx::assert_relative_eq;

    fn study() -> LineParameters {
        RLGC::study_line().derive(angular_frequency(SYSTEM_FREQUENCY))
    }

    #[test]
    fn derived_constants_match_reference() {
        let p = study();
        assert_relative_eq!(p.series.re, 0.0849, epsilon = 1e-15);
        assert_relative_eq!(p.series.im, 0.143_759_280, max_relative = 1e-8);
        assert_relative_eq!(p.gamma.re, 2.836_543_68e-4, max_relative = 1e-6);
        assert_relative_eq!(p.gamma.im, 1.036_082_43e-3, max_relative = 1e-6);
        assert_relative_eq!(p.zc.re, 149.947_768_98, max_relative = 1e-6);
        assert_relative_eq!(p.zc.im, -40.891_206_19, max_relative = 1e-6);
    }

    #[test]
    fn gamma_and_zc_recover_series_and_shunt() {
        let p = study();
        let z = p.gamma * p.zc;
        let y = p.gamma / p.zc;
        assert_relative_eq!(z.re, p.series.re, max_relative = 1e-9);
        assert_relative_eq!(z.im, p.series.im, max_relative = 1e-9);
        assert_relative_eq!(y.re, p.shunt.re, max_relative = 1e-9);
        assert_relative_eq!(y.im, p.shunt.im, max_relative = 1e-9);
    }

    #[test]
    fn identity_when_length_zero() {
        let t = study().section(0.0);
        assert_relative_eq!(t.a.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(t.b.norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(t.c.norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(t.d.re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn section_transfer_matches_line_equations() {
        let p = study();
        let (v_r, i_r) = (C::new(75_000.0, 0.0), C::new(355.0, -266.0));
        let gx = p.gamma * 250.0;
        let v = v_r * gx.cosh() + p.zc * i_r * gx.sinh();
        let i = v_r / p.zc * gx.sinh() + i_r * gx.cosh();
        let (v_s, i_s) = p.section(250.0).transfer(v_r, i_r);
        assert_relative_eq!(v_s.re, v.re, max_relative = 1e-10);
        assert_relative_eq!(v_s.im, v.im, max_relative = 1e-10);
        assert_relative_eq!(i_s.re, i.re, max_relative = 1e-10);
        assert_relative_eq!(i_s.im, i.im, max_relative = 1e-10);
    }

    #[test]
    fn zero_shunt_falls_back_to_series() {
        let p = derive_parameters(0.1, 1e-3, 0.0, 0.0, 314.0);
        let t = p.section(10.0);
        assert_eq!(t, p.series_section(10.0));
        assert_relative_eq!(t.b.re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn wavelength_near_free_space_at_50_hz() {
        let w = study().wavelength_km();
        assert!((5_000.0..7_000.0).contains(&w), "wavelength {w}");
    }
}
