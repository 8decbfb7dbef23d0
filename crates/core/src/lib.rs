//! Core traits and types for the Amoeba framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] — adapts solver variables to model inputs and
//!   extracts a scalar objective from outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::OptimizationProblem;
pub use {model::Model, model::Snapshot};
