//! Query error types
//!
//! The whole taxonomy: a malformed predicate rejects the batch before
//! any fetch, and a source failure aborts it. Missing columns, empty
//! ranges and zero-count ranges are normal outcomes, never errors, and
//! there is no partial-success mode.

use thiserror::Error;

use crate::model::PredicateError;
use crate::store::StoreError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that abort a batch slice query.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// A raw predicate failed normalization; surfaced before any fetch
    #[error("invalid predicate: {0}")]
    InvalidPredicate(#[from] PredicateError),

    /// The partition source failed; propagated unchanged, no retry here
    #[error("partition fetch failed: {0}")]
    PartitionFetch(#[from] StoreError),
}
