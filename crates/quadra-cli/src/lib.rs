//! Quadra CLI
//!
//! Solves `a*x^2 + b*x + c = 0` from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Two roots, printed as "value multiplicity"
//! quadra 1 -3 2
//!
//! # Show which branch the solver takes
//! quadra --verbose 1 2 1
//! ```
//!
//! An equation without real roots prints `NO`. An equation satisfied by
//! every real number prints a single `inf 1` line.

use clap::Parser;
use quadra::prelude::*;
use tracing::info;

/// Quadra command line interface
#[derive(Parser, Debug)]
#[command(name = "quadra")]
#[command(author, version, about = "Solve a*x^2 + b*x + c = 0 over the reals")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Coefficient of x^2
    pub a: f64,

    /// Coefficient of x
    pub b: f64,

    /// Constant term
    pub c: f64,

    /// Log each solver step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the polynomial, low degree first.
    #[must_use]
    pub fn polynomial(&self) -> Polynomial<f64> {
        Polynomial::new(vec![self.c, self.b, self.a])
    }

    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Solves the equation described by `cli`.
///
/// # Errors
///
/// Returns [`SolveError`] if the trimmed polynomial has no closed-form solver.
pub fn execute(cli: &Cli) -> Result<EquationSolution<f64>, SolveError> {
    let polynomial = cli.polynomial();
    info!(%polynomial, degree = polynomial.degree(), "solving");
    EquationSolver::new().solve(&polynomial)
}
