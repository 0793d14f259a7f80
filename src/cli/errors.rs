//! CLI-specific error types

use thiserror::Error;

use crate::query::QueryError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands.
///
/// Every variant carries a stable code used in the error envelope on
/// stdout; the human-readable form goes to stderr.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading a fixture or request file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture or request file was not valid JSON of the right shape
    #[error("malformed input: {0}")]
    BadInput(#[from] serde_json::Error),

    /// The batch itself failed
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl CliError {
    /// Stable error code for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io(_) => "COLONNADE_IO_ERROR",
            CliError::BadInput(_) => "COLONNADE_BAD_INPUT",
            CliError::Query(QueryError::InvalidPredicate(_)) => "COLONNADE_INVALID_PREDICATE",
            CliError::Query(QueryError::PartitionFetch(_)) => "COLONNADE_FETCH_FAILED",
        }
    }
}
