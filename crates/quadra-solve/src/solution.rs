//! Solution sets returned by the solver.

use std::fmt;

use quadra_poly::Root;

/// The roots of an equation, in the order the solver produced them.
///
/// Roots are appended as-is: no sorting and no deduplication.
#[derive(Clone, Debug)]
pub struct EquationSolution<T> {
    roots: Vec<Root<T>>,
}

impl<T> EquationSolution<T> {
    /// Creates an empty solution set.
    #[must_use]
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Appends a root.
    pub fn add_root(&mut self, root: Root<T>) {
        self.roots.push(root);
    }

    /// Returns the roots in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[Root<T>] {
        &self.roots
    }

    /// Returns true if the equation has no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the number of distinct roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns every root value repeated according to its multiplicity.
    #[must_use]
    pub fn expanded_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.roots
            .iter()
            .flat_map(|r| std::iter::repeat(r.value().clone()).take(r.multiplicity()))
            .collect()
    }
}

impl EquationSolution<f64> {
    /// Returns true if this is the "every real number is a root" answer.
    ///
    /// That answer is encoded as a single root of `+∞` with multiplicity 1.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(
            self.roots.as_slice(),
            [root] if *root.value() == f64::INFINITY && root.multiplicity() == 1
        )
    }
}

impl<T> Default for EquationSolution<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Root<T>> for EquationSolution<T> {
    fn from_iter<I: IntoIterator<Item = Root<T>>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for EquationSolution<T> {
    type Item = Root<T>;
    type IntoIter = std::vec::IntoIter<Root<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EquationSolution<T> {
    type Item = &'a Root<T>;
    type IntoIter = std::slice::Iter<'a, Root<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

/// Renders `NO` for an empty solution, otherwise one
/// `<value> <multiplicity>` line per root.
impl<T: fmt::Display> fmt::Display for EquationSolution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.roots.is_empty() {
            return writeln!(f, "NO");
        }

        for root in &self.roots {
            writeln!(f, "{} {}", root.value(), root.multiplicity())?;
        }
        Ok(())
    }
}
