//! Result types for batch slice queries

use crate::model::{Column, KeyPredicate};

/// One request's result: the request it answers, its submission
/// index, and the columns its predicate selected.
///
/// The index is the entry's identity. Two structurally equal requests
/// submitted separately get distinct indices and distinct entries;
/// nothing is ever merged by key or predicate content.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// Submission index within the batch
    pub index: usize,
    /// The request this entry answers
    pub request: KeyPredicate,
    /// Selected columns, in predicate order
    pub columns: Vec<Column>,
}

/// Result of one batch execution.
///
/// Entries are in submission order and there is exactly one per
/// submitted request, always.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    entries: Vec<BatchEntry>,
    /// Fetches issued to the partition source for this batch
    pub partitions_fetched: usize,
    /// Requests served from the per-batch fetch cache
    pub cache_hits: usize,
}

impl BatchResult {
    /// Builds a result from per-request entries and fetch bookkeeping
    pub fn new(entries: Vec<BatchEntry>, partitions_fetched: usize, cache_hits: usize) -> Self {
        Self {
            entries,
            partitions_fetched,
            cache_hits,
        }
    }

    /// Number of entries; equals the submitted request count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the batch had no requests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for the request submitted at `index`
    pub fn get(&self, index: usize) -> Option<&BatchEntry> {
        self.entries.get(index)
    }

    /// Columns for the request submitted at `index`; empty slice if
    /// the index is out of range
    pub fn columns(&self, index: usize) -> &[Column] {
        self.entries
            .get(index)
            .map(|entry| entry.columns.as_slice())
            .unwrap_or(&[])
    }

    /// Entries in submission order
    pub fn iter(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter()
    }

    /// Consumes the result, yielding entries in submission order
    pub fn into_entries(self) -> Vec<BatchEntry> {
        self.entries
    }

    /// Total columns across all entries
    pub fn total_columns(&self) -> usize {
        self.entries.iter().map(|entry| entry.columns.len()).sum()
    }
}
