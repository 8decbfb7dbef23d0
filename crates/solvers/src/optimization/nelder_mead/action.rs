/// Actions an observer can take during Nelder–Mead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,

    /// Treat this point as arbitrarily bad.
    ///
    /// The engine is fed positive infinity instead of the observed value, so
    /// the search moves away from this point, and the evaluation (if it
    /// succeeded) is not considered for the best solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when domain knowledge
    ///   suggests the failed region is suboptimal but the search should
    ///   continue.
    /// - Steering the search away from a region even when evaluation
    ///   succeeded.
    AssumeWorse,
}
