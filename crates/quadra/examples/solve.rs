//! Equation Solving Examples
//!
//! Walks through each degree the solver handles and shows how roots are
//! read, verified and rendered.
//!
//! Run with: cargo run -p quadra --example solve

use quadra::prelude::*;

fn poly(coeffs: &[f64]) -> Polynomial<f64> {
    Polynomial::new(coeffs.to_vec())
}

fn show(solver: &EquationSolver, p: &Polynomial<f64>) {
    println!("{p} = 0");
    match solver.solve(p) {
        Ok(solution) if solution.is_infinite() => println!("  every real number is a root"),
        Ok(solution) => {
            for line in solution.to_string().lines() {
                println!("  {line}");
            }
            for root in &solution {
                println!("  has_root({}) = {}", root.value(), p.has_root(root));
            }
        }
        Err(e) => println!("  {e}"),
    }
    println!();
}

fn main() {
    let solver = EquationSolver::new();

    println!("=== Degree 0 ===");
    show(&solver, &poly(&[0.0]));
    show(&solver, &poly(&[5.0]));

    println!("=== Degree 1 ===");
    show(&solver, &poly(&[-6.0, 2.0]));

    println!("=== Degree 2 ===");
    show(&solver, &poly(&[2.0, -3.0, 1.0]));
    show(&solver, &poly(&[1.0, 2.0, 1.0]));
    show(&solver, &poly(&[1.0, 0.0, 1.0]));
    // Roots are rounded, so exact verification fails here
    show(&solver, &poly(&[-2.0, 0.0, 1.0]));

    println!("=== Trimming ===");
    let mut p = poly(&[1.0, 0.0, 0.0, 4.0]);
    show(&solver, &p);
    p.set_coefficient(3, 0.0);
    println!("after clearing x^3 the degree is {}", p.degree());
    show(&solver, &p);
}
