//! Closed-form equation solving for Quadra.
//!
//! This crate finds the real roots of polynomial equations of degree at
//! most two, together with their multiplicities:
//!
//! - **Degree 0**: no roots, or every real number (encoded as a single `+∞` root)
//! - **Degree 1**: the unique root `-b/a`
//! - **Degree 2**: discriminant classification with an absolute tolerance of [`EPS`]
//!
//! Higher degrees are rejected with [`SolveError::UnsupportedDegree`].
//!
//! # Example
//!
//! ```
//! use quadra_poly::Polynomial;
//! use quadra_solve::EquationSolver;
//!
//! // x^2 - 3x + 2 = 0
//! let p = Polynomial::new(vec![2.0, -3.0, 1.0]);
//! let solution = EquationSolver::new().solve(&p).unwrap();
//!
//! let values: Vec<f64> = solution.roots().iter().map(|r| *r.value()).collect();
//! assert_eq!(values, vec![2.0, 1.0]);
//! ```
//!
//! # Diagnostics
//!
//! The solver reports the branch it takes through `tracing` at `debug`
//! level. Nothing is emitted unless a subscriber enables that level, and
//! the returned roots never depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod solution;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use error::SolveError;
pub use solution::EquationSolution;
pub use solver::{solve, EquationSolver, EPS};
