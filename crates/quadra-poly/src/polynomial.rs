//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order and kept in normal
//! form: at least one coefficient, and no zero leading coefficient unless
//! the polynomial is a constant.

use std::fmt;
use std::ops::{Index, Mul};

use num_traits::Zero;

use crate::error::PolyError;
use crate::root::Root;

/// A dense univariate polynomial.
///
/// Coefficient `i` multiplies `x^i`, so index 0 is the constant term.
/// Two polynomials are equal iff their trimmed coefficient sequences are.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<T> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<T>,
}

impl<T: Zero + Clone + PartialEq> Polynomial<T> {
    /// Creates a new polynomial from coefficients in ascending degree order.
    ///
    /// An empty input yields the zero polynomial.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut poly = Self { coeffs };
        if poly.coeffs.is_empty() {
            poly.coeffs.push(T::zero());
        }
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Drops trailing zeros, stopping at the first nonzero or at index 0.
    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().map_or(false, T::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coefficient(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index` exceeds the degree.
    pub fn coefficient(&self, index: usize) -> Result<&T, PolyError> {
        self.coeffs.get(index).ok_or(PolyError::IndexOutOfRange {
            index,
            degree: self.degree(),
        })
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Overwrites the coefficient of `x^index`.
    ///
    /// Storage grows with zeros when `index` is above the current degree.
    /// The polynomial is re-trimmed afterwards, so writing zero to the
    /// leading coefficient lowers the degree.
    pub fn set_coefficient(&mut self, index: usize, value: T) {
        if index >= self.coeffs.len() {
            self.coeffs.resize(index + 1, T::zero());
        }
        self.coeffs[index] = value;
        self.normalize();
    }

    /// Returns true if `root` is an exact root of the polynomial.
    ///
    /// The polynomial is evaluated by accumulating `c_i * x^i` from the
    /// constant term upward and the sum is compared to zero without any
    /// tolerance. For floating-point coefficients this only holds reliably
    /// when every intermediate value is exactly representable; callers that
    /// need approximate verification should evaluate and compare themselves.
    #[must_use]
    pub fn has_root(&self, root: &Root<T>) -> bool
    where
        T: Mul<Output = T>,
    {
        let x = root.value();
        let mut sum = self.coeffs[0].clone();
        let mut power = x.clone();
        for c in &self.coeffs[1..] {
            sum = sum + power.clone() * c.clone();
            power = power * x.clone();
        }
        sum.is_zero()
    }
}

impl<T: Zero + Clone + PartialEq> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Zero + Clone + PartialEq> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Zero + Clone + PartialEq> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` exceeds the degree.
    fn index(&self, index: usize) -> &T {
        &self.coeffs[index]
    }
}

impl<T: Zero + Clone + PartialEq + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
