use amoeba_core::{Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::evaluate::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, NelderMead, Point, Simplex, Solution, solution::Status,
};

/// Core Nelder–Mead driving loop.
///
/// Runs the request/response protocol against a model for a fixed evaluation
/// budget: evaluate the engine's trial point, feed the (transformed) value
/// back, repeat. The `transform` function is applied to objective values
/// before they reach the engine, allowing the same loop to handle both
/// minimization (identity) and maximization (negation); reported solutions
/// keep the caller's sign convention.
pub(super) fn search<M, P, Obs, F, const N: usize>(
    model: &M,
    problem: &P,
    mut engine: NelderMead<N>,
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    F: Fn(f64) -> f64,
{
    let mut best: Option<Best<M::Input, M::Output, N>> = None;

    for evals in 1..=config.max_evals() {
        let trial = engine.trial();
        let best_point = best
            .as_ref()
            .map_or(Point::new(trial, f64::NAN), |b| b.point);

        let outcome = eval_and_observe(
            model,
            problem,
            trial,
            best_point,
            engine.simplex(),
            &mut observer,
        )?;

        match outcome {
            EvalOutcome::Continue { eval } => {
                let point = Point::from(&eval);
                let improved = best
                    .as_ref()
                    .is_none_or(|b| transform(point.objective) < transform(b.point.objective));
                if improved {
                    best = Some(Best {
                        point,
                        snapshot: eval.snapshot,
                    });
                }
                engine.advance(transform(point.objective));
            }
            EvalOutcome::AssumeWorse => {
                // Worst possible value in the engine's (minimizing) frame.
                engine.advance(f64::INFINITY);
            }
            EvalOutcome::StopEarly => {
                return finish(best, Status::StoppedByObserver, evals);
            }
        }
    }

    finish(best, Status::BudgetExhausted, config.max_evals())
}

struct Best<I, O, const N: usize> {
    point: Point<N>,
    snapshot: Snapshot<I, O>,
}

fn finish<I, O, const N: usize>(
    best: Option<Best<I, O, N>>,
    status: Status,
    evals: usize,
) -> Result<Solution<I, O, N>, Error> {
    match best {
        Some(b) => Ok(Solution {
            status,
            x: b.point.x,
            objective: b.point.objective,
            snapshot: b.snapshot,
            evals,
        }),
        None => Err(Error::NoEvaluations),
    }
}

enum EvalOutcome<I, O, const N: usize> {
    Continue { eval: Evaluation<I, O, N> },
    AssumeWorse,
    StopEarly,
}

/// Evaluate at `x`, emit an event, and handle the observer action.
fn eval_and_observe<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    best: Point<N>,
    simplex: &Simplex<N>,
    observer: &mut Obs,
) -> Result<EvalOutcome<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    match evaluate(model, problem, x) {
        Ok(eval) => {
            let point = Point::from(&eval);
            let event = Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                best,
                simplex,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue { eval }),
            }
        }
        Err(e) => {
            let action = Event::emit_failure(x, best, &e, observer);
            match action {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Err(e.into()),
            }
        }
    }
}
