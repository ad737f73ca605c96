//! Roots of polynomial equations.

use std::num::NonZeroUsize;

/// A root of an equation together with its algebraic multiplicity.
///
/// Roots are plain values: they are read and collected, never compared,
/// so no equality is provided.
#[derive(Clone, Copy, Debug)]
pub struct Root<T> {
    value: T,
    multiplicity: NonZeroUsize,
}

impl<T> Root<T> {
    /// Creates a simple root (multiplicity 1).
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            multiplicity: NonZeroUsize::MIN,
        }
    }

    /// Creates a root repeated `multiplicity` times.
    #[must_use]
    pub fn with_multiplicity(value: T, multiplicity: NonZeroUsize) -> Self {
        Self {
            value,
            multiplicity,
        }
    }

    /// Returns the root value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the algebraic multiplicity.
    #[must_use]
    pub fn multiplicity(&self) -> usize {
        self.multiplicity.get()
    }

    /// Consumes the root, returning its value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}
