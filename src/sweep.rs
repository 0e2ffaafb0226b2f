//! Distance grids and post-processing helpers.

use num_complex::Complex;

use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Magnitude of complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Magnitude of complex sequence divided by `unit` (e.g. `1e3` for kV).
#[must_use]
pub fn mag_in(values: impl IntoIterator<Item = Complex<Scalar>>, unit: Scalar) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm() / unit).collect()
}
