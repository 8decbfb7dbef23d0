//! Minimizes Himmelblau's function through the driving loop.
//!
//! Starts from a caller-supplied simplex with shrinking enabled, and uses an
//! observer to log each evaluation the way the original animation redraws the
//! simplex after every call.

use std::convert::Infallible;

use amoeba_core::{Model, OptimizationProblem};
use amoeba_solvers::optimization::nelder_mead::{Config, Event, minimize_with_simplex};

/// Himmelblau's function: four local minima, all with value zero.
struct Himmelblau;

impl Model for Himmelblau {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let [x, y] = *input;
        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;
        Ok(a * a + b * b)
    }
}

struct ObjectiveIsOutput;

impl OptimizationProblem<2> for ObjectiveIsOutput {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

fn main() {
    let vertices = vec![[-3.0, -4.0], [-2.0, -2.0], [0.0, -2.0]];
    let config = Config::new(30, 1.0, 2.0, 0.5, 0.5)
        .expect("valid config")
        .with_shrink(true);

    let observer = |event: &Event<'_, _, _, 2>| {
        if let Event::Evaluated { point, simplex, .. } = event {
            println!(
                "f({:>7.4}, {:>7.4}) = {:>9.4}   simplex best [{:>7.4}, {:>7.4}]",
                point.x[0],
                point.x[1],
                point.objective,
                simplex.vertices()[0][0],
                simplex.vertices()[0][1],
            );
        }
        None
    };

    let solution = minimize_with_simplex(&Himmelblau, &ObjectiveIsOutput, vertices, &config, observer)
        .expect("search should finish");

    println!(
        "\nbest after {} evaluations: f({:.6}, {:.6}) = {:.6}",
        solution.evals, solution.x[0], solution.x[1], solution.objective
    );
}
