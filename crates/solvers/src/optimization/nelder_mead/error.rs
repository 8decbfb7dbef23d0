use std::error::Error as StdError;

use crate::optimization::evaluate::EvalError;

/// Errors that can occur during Nelder–Mead search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search space must have at least one dimension.
    #[error("starting point must have at least one dimension")]
    NoDimensions,

    /// A starting-point or simplex coordinate was NaN or infinite.
    #[error("non-finite coordinate: {value}")]
    NonFiniteCoordinate { value: f64 },

    /// A caller-supplied simplex had the wrong number of vertices.
    #[error("an initial simplex needs {expected} vertices, found {found}")]
    VertexCount { expected: usize, found: usize },

    /// The evaluation budget ended before any evaluation succeeded.
    #[error("no successful objective evaluation within the budget")]
    NoEvaluations,

    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
