/// Errors raised by the simulation.
///
/// Neither variant is retried: both indicate bad input or a logic defect, not
/// a transient condition. A tail is an outcome, never an error.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Rejected before any flip happens.
    #[error("Invalid {parameter}: {reason}")]
    ParameterValidation {
        parameter: &'static str,
        reason: String,
    },

    /// Flip accounting went wrong. Unreachable with floor arithmetic on a
    /// positive budget, but checked on every run.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl SimulationError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::ParameterValidation {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
