//! # quadra-poly
//!
//! Dense univariate polynomials for the Quadra equation solver.
//!
//! This crate provides:
//! - `Polynomial<T>`: coefficients in ascending degree order, never carrying
//!   redundant leading zeros
//! - `Root<T>`: a root value together with its algebraic multiplicity
//! - `PolyError`: errors raised by coefficient access
//!
//! ## Normal Form
//!
//! Every polynomial holds at least one coefficient. Trailing (high-degree)
//! zeros are trimmed after construction and after every mutation, so the
//! degree is always `len - 1` and the zero polynomial is `[0]` of degree 0.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;
pub mod root;


pub use error::PolyError;
pub use polynomial::Polynomial;
pub use root::Root;
