use amoeba_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::EvalError;

use super::{Action, Point, Simplex};

/// Events emitted by the Nelder–Mead driving loop.
///
/// Each event provides the current evaluation (or failure) and `best`, the
/// best point observed so far. Until the first successful evaluation, `best`
/// has a NaN objective. [`Event::Evaluated`] also exposes the simplex as it
/// stood when the trial point was requested, so observers can record or
/// redraw the search geometry after every call.
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a trial point.
    Evaluated {
        /// The evaluated point (coordinates and objective).
        point: Point<N>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The best point observed so far.
        best: Point<N>,

        /// The simplex that produced this trial point.
        simplex: &'a Simplex<N>,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The coordinates where evaluation failed.
        x: [f64; N],

        /// The best point observed so far.
        best: Point<N>,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// The coordinates where evaluation failed.
        x: [f64; N],

        /// The best point observed so far.
        best: Point<N>,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the coordinates that were evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the best point observed so far.
    #[must_use]
    pub fn best(&self) -> Point<N> {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. } => *best,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        x: [f64; N],
        best: Point<N>,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { x, best, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { x, best, error: e };
                observer.observe(&event)
            }
        }
    }
}
