use amoeba_core::Snapshot;

/// Indicates why the driving loop finished.
///
/// There is no converged status: the Nelder–Mead loop runs a fixed
/// evaluation budget and leaves convergence judgments to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Used the full evaluation budget.
    BudgetExhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Nelder–Mead search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best evaluated coordinates.
    pub x: [f64; N],

    /// Objective value at the reported coordinates.
    pub objective: f64,

    /// Snapshot at the reported coordinates.
    pub snapshot: Snapshot<I, O>,

    /// Number of objective evaluations performed.
    pub evals: usize,
}
