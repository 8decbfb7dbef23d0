//! Chases a moving target with the request/response engine.
//!
//! Because the engine suspends after every single evaluation, the objective
//! is free to change between calls. Here the paraboloid's minimum sweeps
//! along a curve while the simplex follows it — something a solver that owns
//! its own evaluation loop cannot express.

use std::f64::consts::TAU;

use amoeba_solvers::optimization::nelder_mead::{Config, NelderMead};

fn paraboloid(x: &[f64; 2], theta: f64) -> f64 {
    let alpha = 10.0 * theta / TAU;
    let beta = 5.0 * theta.sin() + 5.0;
    let dx = x[0] - alpha;
    let dy = x[1] - beta;
    (dx * dx + dy * dy).sqrt()
}

fn main() {
    let vertices = vec![[1.0, 1.0], [2.5, 1.0], [1.5, 2.0]];
    let mut engine =
        NelderMead::with_simplex(vertices, Config::default()).expect("valid simplex");

    let steps = 40;
    let mut x = engine.trial();
    for step in 0..steps {
        let theta = TAU * f64::from(step) / f64::from(steps);
        x = engine.advance(paraboloid(&x, theta));

        let best = engine.simplex().vertices()[0];
        println!(
            "theta {theta:>5.2}: target ({:>5.2}, {:>5.2})  best vertex ({:>6.3}, {:>6.3})",
            10.0 * theta / TAU,
            5.0 * theta.sin() + 5.0,
            best[0],
            best[1]
        );
    }
}
