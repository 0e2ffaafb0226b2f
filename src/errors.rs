//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum LineProfileError {
    /// Raised when a load power factor lies outside (0, 1].
    #[error("power factor must lie in (0, 1], got {0}")]
    InvalidPowerFactor(Scalar),
    /// Raised when two series drawn against the same axis differ in length.
    #[error("series length mismatch: {left} vs {right} points")]
    LengthMismatch {
        /// Points in the first series.
        left: usize,
        /// Points in the second series.
        right: usize,
    },
    /// Raised when a figure cannot be drawn or encoded.
    #[error("plot rendering failed: {0}")]
    Plot(String),
    /// Wraps filesystem errors (output directory, CSV export).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying [`LineProfileError`].
pub type Result<T> = std::result::Result<T, LineProfileError>;

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for LineProfileError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Plot(err.to_string())
    }
}
