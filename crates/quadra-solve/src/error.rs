//! Errors raised by the equation solver.

use thiserror::Error;

/// Errors that can occur while solving an equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The polynomial's degree has no closed-form solver.
    #[error("cannot solve an equation of degree {degree}: only degrees 0 to 2 are supported")]
    UnsupportedDegree {
        /// Degree of the rejected polynomial.
        degree: usize,
    },
}
