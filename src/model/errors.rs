//! Model error types

use thiserror::Error;

/// Result type for model normalization
pub type ModelResult<T> = Result<T, PredicateError>;

/// Errors raised while normalizing a raw predicate into the model.
///
/// These all describe malformed requests; they are surfaced before any
/// partition is fetched and reject the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// Neither explicit names nor a range was supplied
    #[error("predicate for request {index} selects nothing: set either column_names or range")]
    Empty { index: usize },

    /// Both explicit names and a range were supplied
    #[error("predicate for request {index} is ambiguous: column_names and range are exclusive")]
    Ambiguous { index: usize },

    /// Range count was negative on the wire
    #[error("predicate for request {index} has negative count {count}")]
    NegativeCount { index: usize, count: i64 },
}

impl PredicateError {
    /// Submission index of the offending request
    pub fn index(&self) -> usize {
        match self {
            PredicateError::Empty { index }
            | PredicateError::Ambiguous { index }
            | PredicateError::NegativeCount { index, .. } => *index,
        }
    }
}
