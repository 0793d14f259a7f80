//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by a partition source.
///
/// A missing partition is never an error (it reads as an empty
/// sequence); these cover genuine source failures, which the query
/// layer propagates unchanged.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The source could not serve the partition
    #[error("partition fetch failed for key {key:?}: {reason}")]
    FetchFailed { key: String, reason: String },

    /// The source returned a sequence that violates the sort contract
    #[error("partition {key:?} is not sorted by column name")]
    Unsorted { key: String },
}

impl StoreError {
    /// Creates a fetch failure for the given key
    pub fn fetch_failed(key: &[u8], reason: impl Into<String>) -> Self {
        StoreError::FetchFailed {
            key: String::from_utf8_lossy(key).into_owned(),
            reason: reason.into(),
        }
    }

    /// Creates a sort-contract violation for the given key
    pub fn unsorted(key: &[u8]) -> Self {
        StoreError::Unsorted {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }
}
