use good_lp::ResolutionError;
use libgt::SequenceFormError;

/// Reasons a sequence-form program did not yield a game value. A well formed program
/// over a finite tree is always feasible and bounded, so `Infeasible` and `Unbounded`
/// point at a construction bug.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("building sequence-form program: {0}")]
    Build(#[from] SequenceFormError),

    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("solver failure: {0}")]
    Numerical(String),

    #[error("returned solution violates {constraint} by {violation}")]
    ConstraintViolation { constraint: String, violation: f64 },
}

impl From<ResolutionError> for SolveError {
    fn from(err: ResolutionError) -> SolveError {
        match err {
            ResolutionError::Infeasible => SolveError::Infeasible,
            ResolutionError::Unbounded => SolveError::Unbounded,
            other => SolveError::Numerical(other.to_string()),
        }
    }
}
