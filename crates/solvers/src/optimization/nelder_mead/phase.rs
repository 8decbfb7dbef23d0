/// The engine's current position in the request/response protocol.
///
/// Each variant names the evaluation the engine is waiting on, and carries
/// the candidate data that only exists while that wait is in progress. The
/// classical step-by-step algorithm suspends after every objective
/// evaluation; this enum is its suspended-stack state made explicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<const N: usize> {
    /// Collecting objective values for the initial (or post-shrink) simplex.
    ///
    /// `calls` counts the values supplied so far in this gather pass. The
    /// first supplied value always belongs to the *last* vertex, whose
    /// coordinates the caller already knows; each later value belongs to the
    /// vertex published on the previous call.
    Gather { calls: usize },

    /// Waiting for the objective value at the reflected point.
    Reflection { reflected: [f64; N] },

    /// Waiting for the objective value at the expanded point.
    ///
    /// The reflected point and its value are retained so the engine can fall
    /// back to them if expansion does not improve on reflection.
    Expansion {
        reflected: [f64; N],
        reflected_value: f64,
        expanded: [f64; N],
    },

    /// Waiting for the objective value at the contracted point.
    Contraction { contracted: [f64; N] },
}
