//! Derivative-free optimization solvers for the Amoeba framework.
//!
//! Solvers in this crate search for the `x: [f64; N]` that minimizes or
//! maximizes the objective of an [`OptimizationProblem`], either by driving
//! the model themselves or by publishing trial points for an external caller
//! to evaluate.
//!
//! [`OptimizationProblem`]: amoeba_core::OptimizationProblem

pub mod optimization;
