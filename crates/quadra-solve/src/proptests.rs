//! Property-based tests for the equation solver.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quadra_poly::{Polynomial, Root};

    use crate::{solve, EquationSolution, SolveError, EPS};

    fn small_coeff() -> impl Strategy<Value = f64> {
        (-50i32..50i32).prop_map(f64::from)
    }

    fn nonzero_coeff() -> impl Strategy<Value = f64> {
        prop_oneof![(-50i32..=-1i32), (1i32..=50i32)].prop_map(f64::from)
    }

    fn summary(s: &EquationSolution<f64>) -> Vec<(u64, usize)> {
        s.roots()
            .iter()
            .map(|r| (r.value().to_bits(), r.multiplicity()))
            .collect()
    }

    proptest! {
        #[test]
        fn solve_is_idempotent(coeffs in proptest::collection::vec(small_coeff(), 0..=3)) {
            let p = Polynomial::new(coeffs);
            let first = solve(&p).unwrap();
            let second = solve(&p.clone()).unwrap();
            prop_assert_eq!(summary(&first), summary(&second));
        }

        #[test]
        fn high_degree_is_unsupported(
            lower in proptest::collection::vec(small_coeff(), 3..=7),
            leading in nonzero_coeff(),
        ) {
            let mut coeffs = lower;
            coeffs.push(leading);
            let degree = coeffs.len() - 1;
            let p = Polynomial::new(coeffs);
            prop_assert_eq!(solve(&p).unwrap_err(), SolveError::UnsupportedDegree { degree });
        }

        #[test]
        fn linear_root_is_exact(r in -20i32..20i32, k in nonzero_coeff()) {
            // k * (x - r), exactly representable
            let r = f64::from(r);
            let p = Polynomial::new(vec![-k * r, k]);
            let s = solve(&p).unwrap();
            prop_assert_eq!(s.len(), 1);
            prop_assert_eq!(*s.roots()[0].value(), r);
            prop_assert!(p.has_root(&s.roots()[0]));
        }

        #[test]
        fn factored_quadratic_roots(r1 in -10i32..10i32, r2 in -10i32..10i32) {
            // (x - r1)(x - r2) = x^2 - (r1 + r2)x + r1*r2
            let (r1, r2) = (f64::from(r1), f64::from(r2));
            let p = Polynomial::new(vec![r1 * r2, -(r1 + r2), 1.0]);
            let s = solve(&p).unwrap();

            if r1 == r2 {
                prop_assert_eq!(s.len(), 1);
                prop_assert_eq!(s.roots()[0].multiplicity(), 2);
            } else {
                prop_assert_eq!(s.len(), 2);
                let (hi, lo) = (r1.max(r2), r1.min(r2));
                prop_assert_eq!(*s.roots()[0].value(), hi);
                prop_assert_eq!(*s.roots()[1].value(), lo);
            }
            for root in s.roots() {
                prop_assert!(p.has_root(root));
            }
        }

        #[test]
        fn negative_discriminant_has_no_roots(
            a in 1i32..20i32,
            b in -20i32..20i32,
            extra in 1i32..50i32,
        ) {
            // c chosen so that b^2 - 4ac < 0
            let (a, b) = (f64::from(a), f64::from(b));
            let c = (b * b / (4.0 * a)).floor() + f64::from(extra);
            prop_assume!(b * b - 4.0 * a * c < -EPS);
            let s = solve(&Polynomial::new(vec![c, b, a])).unwrap();
            prop_assert!(s.is_empty());
        }

        #[test]
        fn constant_classification(c in -1.0f64..1.0f64) {
            let s = solve(&Polynomial::new(vec![c])).unwrap();
            prop_assert_eq!(s.is_infinite(), c.abs() < EPS);
            prop_assert_eq!(s.is_empty(), c.abs() >= EPS);
        }

        #[test]
        fn expanded_count_matches_degree_when_real(r1 in -10i32..10i32, r2 in -10i32..10i32) {
            let (r1, r2) = (f64::from(r1), f64::from(r2));
            let p = Polynomial::new(vec![r1 * r2, -(r1 + r2), 1.0]);
            let s = solve(&p).unwrap();
            prop_assert_eq!(s.expanded_values().len(), 2);
            prop_assert!(s.roots().iter().all(|r: &Root<f64>| r.multiplicity() >= 1));
        }
    }
}
