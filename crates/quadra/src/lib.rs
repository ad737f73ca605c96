//! # Quadra
//!
//! Real roots of constant, linear and quadratic equations, with their
//! algebraic multiplicities.
//!
//! ## Features
//!
//! - **Normalized Polynomials**: dense coefficients that never keep redundant leading zeros
//! - **Closed-Form Solving**: degree dispatch with a tolerance-based discriminant test
//! - **Typed Errors**: unsupported degrees and bad coefficient indices are values, not panics
//!
//! ## Quick Start
//!
//! ```rust
//! use quadra::prelude::*;
//!
//! // x^2 + 2x + 1 = 0
//! let p = Polynomial::new(vec![1.0, 2.0, 1.0]);
//! let solution = EquationSolver::new().solve(&p)?;
//!
//! assert_eq!(solution.len(), 1);
//! assert_eq!(solution.roots()[0].multiplicity(), 2);
//! assert_eq!(solution.to_string(), "-1 2\n");
//! # Ok::<(), SolveError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadra_poly as poly;
pub use quadra_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadra_poly::{PolyError, Polynomial, Root};
    pub use quadra_solve::{EquationSolution, EquationSolver, SolveError, EPS};
}
