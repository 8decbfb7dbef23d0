//! Solvers for optimization problems — minimizing or maximizing an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective.
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search for multivariate
//!   functions, usable either as a self-contained driving loop or as a
//!   resumable request/response engine
//!
//! [`OptimizationProblem`]: amoeba_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod nelder_mead;
