//! ABCD two-port representation of line sections.
//!
//! Phasors are propagated from the receiving (load) end towards the sending
//! end:
//!
//! ```text
//! [V_s]   [A  B] [V_r]
//! [I_s] = [C  D] [I_r]
//! ```

use num_complex::Complex;

use crate::math::Scalar;

/// Convenience alias for complex scalars.
pub type C = Complex<Scalar>;

/// ABCD-based two-port network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    /// A element of the ABCD matrix.
    pub a: C,
    /// B element of the ABCD matrix.
    pub b: C,
    /// C element of the ABCD matrix.
    pub c: C,
    /// D element of the ABCD matrix.
    pub d: C,
}

impl TwoPort {
    /// Constructs a two-port from explicit ABCD elements.
    #[must_use]
    pub fn from_abcd(a: C, b: C, c: C, d: C) -> Self {
        Self { a, b, c, d }
    }

    /// Series impedance `Z` represented as a two-port.
    #[must_use]
    pub fn series_impedance(z: C) -> Self {
        Self::from_abcd(C::new(1.0, 0.0), z, C::new(0.0, 0.0), C::new(1.0, 0.0))
    }

    /// Sending-end `(V, I)` for receiving-end phasors `(v_r, i_r)`.
    #[must_use]
    pub fn transfer(&self, v_r: C, i_r: C) -> (C, C) {
        (self.a * v_r + self.b * i_r, self.c * v_r + self.d * i_r)
    }
}
