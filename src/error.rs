//! Engine boundary errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Error returned by [`crate::solve`] and [`crate::scheduler::SolveRequest::solve`].
///
/// Raised before any simulation work; there are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The request failed validation. Carries every detected problem.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SolveError {
    /// The validation errors behind this failure.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SolveError::InvalidInput(errors) => errors,
        }
    }
}

/// Error returned when an algorithm tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected one of FCFS, SJF, SRTF, RR, PNP, PP)")]
pub struct ParseAlgorithmError(pub String);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SolveError>;
