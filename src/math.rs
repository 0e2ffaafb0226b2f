//! Shared numerical primitives anchored on `num-complex`.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Three-phase active power `3·Re(V·I*)` carried by per-phase phasors `v` and `i`.
#[must_use]
pub fn three_phase_power(v: CScalar, i: CScalar) -> Scalar {
    crate::constants::PHASES * (v * i.conj()).re
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn phasor_has_unit_magnitude() {
        let p = phasor(-0.643_501_108_793_284_3);
        assert_relative_eq!(p.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.re, 0.8, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, -0.6, epsilon = 1.0e-12);
    }

    #[test]
    fn in_phase_power_is_product_of_magnitudes() {
        let p = three_phase_power(CScalar::new(100.0, 0.0), CScalar::new(2.0, 0.0));
        assert_relative_eq!(p, 600.0, epsilon = 1.0e-12);
    }
}
