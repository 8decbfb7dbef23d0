//! Nelder–Mead simplex search for multivariate optimization.
//!
//! # Algorithm
//!
//! Nelder–Mead minimizes a function of `N` variables without derivatives. It
//! maintains a simplex of `N + 1` vertices, repeatedly replacing the worst
//! vertex with a reflected, expanded, or contracted candidate computed from
//! the centroid of the remaining vertices, and optionally shrinking the whole
//! simplex toward the best vertex when no candidate is acceptable.
//!
//! # Two ways to drive it
//!
//! - [`minimize`] / [`maximize`] own the evaluation loop: they call the model
//!   through an [`OptimizationProblem`] for a fixed evaluation budget and
//!   return the best [`Solution`] found.
//! - [`NelderMead`] is the underlying request/response engine. It never calls
//!   the objective itself: the caller evaluates the point published by
//!   [`NelderMead::trial`], feeds the value to [`NelderMead::advance`], and
//!   receives the next point to evaluate. The engine suspends after every
//!   single evaluation, which makes it usable when the objective is measured
//!   externally (an experiment, a long-running simulation, a human) or drifts
//!   over time between evaluations.
//!
//! # When to Use
//!
//! Nelder–Mead is appropriate when:
//! - Derivative information is unavailable or unreliable
//! - The dimension is modest (a handful of variables)
//! - Each evaluation is expensive enough that a simple geometric strategy
//!   is acceptable
//!
//! # Limitations
//!
//! - **No convergence test**: the driving loop runs a fixed evaluation
//!   budget; termination policy belongs to the caller
//! - **Local search**: may stall at a non-optimal point on non-smooth or
//!   multimodal functions
//! - **No degeneracy detection**: a collapsed simplex is not repaired; poor
//!   objective values simply propagate
//!
//! # Observer Events
//!
//! The driving loop emits one [`Event`] per objective evaluation:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//!
//! [`Event::Evaluated`] carries a reference to the current simplex so
//! observers can record or redraw the search geometry after each call.
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as arbitrarily bad (useful for
//! recovering from model errors or steering away from a region).
//!
//! [`OptimizationProblem`]: amoeba_core::OptimizationProblem

mod action;
mod config;
mod engine;
mod error;
mod event;
mod phase;
mod point;
mod search;
mod simplex;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use engine::NelderMead;
pub use error::Error;
pub use event::Event;
pub use phase::Phase;
pub use point::Point;
pub use simplex::Simplex;
pub use solution::{Solution, Status};

use amoeba_core::{Model, Observer, OptimizationProblem};

use search::search;

/// Finds the minimum of the objective using Nelder–Mead simplex search.
///
/// The observer receives an [`Event`] for each objective evaluation.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the starting point is invalid, if the model or
/// problem fails during evaluation and the observer does not recover with
/// [`Action::AssumeWorse`], or if no evaluation succeeds within the budget.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let engine = NelderMead::new(start, *config)?;
    search(model, problem, engine, config, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the starting point is invalid, if the model or
/// problem fails during evaluation, or if no evaluation succeeds.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    start: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start, config, ())
}

/// Finds the minimum of the objective starting from a caller-supplied simplex.
///
/// This is the driving-loop counterpart of [`NelderMead::with_simplex`]: the
/// search begins from `vertices` instead of an axis-aligned perturbation of a
/// single starting point.
///
/// # Errors
///
/// Returns an error if the simplex is invalid, if the model or problem fails
/// during evaluation and the observer does not recover with
/// [`Action::AssumeWorse`], or if no evaluation succeeds within the budget.
pub fn minimize_with_simplex<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    vertices: Vec<[f64; N]>,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let engine = NelderMead::with_simplex(vertices, *config)?;
    search(model, problem, engine, config, observer, |v| v)
}

/// Finds the maximum of the objective using Nelder–Mead simplex search.
///
/// The observer receives an [`Event`] for each objective evaluation.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the starting point is invalid, if the model or
/// problem fails during evaluation and the observer does not recover with
/// [`Action::AssumeWorse`], or if no evaluation succeeds within the budget.
pub fn maximize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let engine = NelderMead::new(start, *config)?;
    search(model, problem, engine, config, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the starting point is invalid, if the model or
/// problem fails during evaluation, or if no evaluation succeeds.
pub fn maximize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    start: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, start, config, ())
}
