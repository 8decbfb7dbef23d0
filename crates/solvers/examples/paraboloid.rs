//! Drives the raw request/response protocol by hand.
//!
//! The engine never calls the objective: this loop evaluates whatever point
//! the engine publishes and feeds the value back, printing the simplex as it
//! creeps toward the paraboloid's minimum at (2.5, 2.5).

use amoeba_solvers::optimization::nelder_mead::{Config, NelderMead};

fn paraboloid(x: &[f64; 2]) -> f64 {
    let dx = x[0] - 2.5;
    let dy = x[1] - 2.5;
    (dx * dx + dy * dy).sqrt()
}

fn main() {
    let vertices = vec![[1.0, 1.0], [2.5, 1.0], [1.5, 2.0]];
    let mut engine =
        NelderMead::with_simplex(vertices, Config::default()).expect("valid simplex");

    let mut x = engine.trial();
    for step in 0..30 {
        x = engine.advance(paraboloid(&x));

        let best = engine.simplex().vertices()[0];
        println!(
            "step {step:>2}: next trial [{:>7.4}, {:>7.4}], best vertex [{:>7.4}, {:>7.4}]",
            x[0], x[1], best[0], best[1]
        );
    }
}
