//! Degree-dispatching equation solver.
//!
//! Each supported degree has a closed form:
//! - c = 0: every real number (c ≈ 0) or nothing
//! - a·x + b = 0: x = -b/a
//! - a·x² + b·x + c = 0: classified by D = b² - 4ac
//!
//! Near-zero tests use the absolute tolerance [`EPS`], which is coarse for
//! coefficients of very large or very small magnitude.

use std::num::NonZeroUsize;

use quadra_poly::{Polynomial, Root};
use tracing::debug;

use crate::error::SolveError;
use crate::solution::EquationSolution;

/// Absolute tolerance below which a constant term or discriminant is zero.
pub const EPS: f64 = 1e-6;

const DOUBLE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

/// Solver for real polynomial equations of degree at most two.
///
/// The solver holds no state, so a single value can be copied freely and
/// shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct EquationSolver;

impl EquationSolver {
    /// Creates a solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Finds the real roots of `polynomial = 0`.
    ///
    /// The input is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnsupportedDegree`] if the degree is 3 or more.
    pub fn solve(&self, polynomial: &Polynomial<f64>) -> Result<EquationSolution<f64>, SolveError> {
        let c = polynomial.coefficients();
        match *c {
            [c0] => {
                debug!(constant = c0, "solving degree 0 equation");
                Ok(Self::solve_constant(c0))
            }
            [b, a] => {
                debug!(a = a, b = b, "solving linear equation");
                Ok(Self::solve_linear(a, b))
            }
            [c0, b, a] => {
                debug!(a = a, b = b, c = c0, "solving quadratic equation");
                Ok(Self::solve_quadratic(a, b, c0))
            }
            _ => {
                let degree = polynomial.degree();
                debug!(degree = degree, "no closed form for this degree");
                Err(SolveError::UnsupportedDegree { degree })
            }
        }
    }

    /// A zero constant is satisfied by every x, reported as a single `+∞` root.
    fn solve_constant(c: f64) -> EquationSolution<f64> {
        let mut solution = EquationSolution::new();
        if c.abs() < EPS {
            debug!("constant is zero, every real number is a root");
            solution.add_root(Root::new(f64::INFINITY));
        }
        solution
    }

    /// `a` is nonzero for any trimmed polynomial of degree 1.
    fn solve_linear(a: f64, b: f64) -> EquationSolution<f64> {
        let mut solution = EquationSolution::new();
        solution.add_root(Root::new(-b / a));
        solution
    }

    fn solve_quadratic(a: f64, b: f64, c: f64) -> EquationSolution<f64> {
        let d = b * b - 4.0 * a * c;
        let mut solution = EquationSolution::new();

        if d.abs() <= EPS {
            debug!(discriminant = d, "discriminant is zero");
            solution.add_root(Root::with_multiplicity(-b / (2.0 * a), DOUBLE));
        } else if d > EPS {
            debug!(discriminant = d, "discriminant is positive");
            let sqrt_d = d.sqrt();
            solution.add_root(Root::new((-b + sqrt_d) / (2.0 * a)));
            solution.add_root(Root::new((-b - sqrt_d) / (2.0 * a)));
        } else {
            debug!(discriminant = d, "discriminant is negative");
        }

        solution
    }
}

/// Finds the real roots of `polynomial = 0` with a default solver.
///
/// # Errors
///
/// Returns [`SolveError::UnsupportedDegree`] if the degree is 3 or more.
pub fn solve(polynomial: &Polynomial<f64>) -> Result<EquationSolution<f64>, SolveError> {
    EquationSolver::new().solve(polynomial)
}
