//! Error types for coefficient access.

use thiserror::Error;

/// Errors that can occur when reading a polynomial's coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The requested coefficient lies above the polynomial's degree.
    #[error("coefficient index {index} is out of range for a polynomial of degree {degree}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The degree of the polynomial at the time of the request.
        degree: usize,
    },
}
