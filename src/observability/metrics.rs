//! Metrics registry
//!
//! Counters only: monotonic, exact, reset only when the process
//! restarts. Increments use relaxed atomics; metrics never influence
//! query results.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for the query layer.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Batches that ran to completion
    batches_executed: AtomicU64,
    /// Batches that failed before completing
    batches_failed: AtomicU64,
    /// Individual requests evaluated across all batches
    requests_evaluated: AtomicU64,
    /// Partition fetches issued to the source
    partitions_fetched: AtomicU64,
    /// Requests served from the per-batch fetch cache
    fetch_cache_hits: AtomicU64,
    /// Columns returned across all result entries
    columns_returned: AtomicU64,
    /// Exact-name lookups performed
    name_lookups: AtomicU64,
    /// Range scans performed
    range_scans: AtomicU64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed batch
    pub fn record_batch_executed(&self) {
        self.batches_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a batch that was rejected or aborted
    pub fn record_batch_failed(&self) {
        self.batches_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one evaluated request
    pub fn record_request_evaluated(&self) {
        self.requests_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one fetch issued to the partition source
    pub fn record_partition_fetched(&self) {
        self.partitions_fetched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one request served from the fetch cache
    pub fn record_fetch_cache_hit(&self) {
        self.fetch_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record columns added to a result entry
    pub fn add_columns_returned(&self, count: u64) {
        self.columns_returned.fetch_add(count, Ordering::Relaxed);
    }

    /// Record one exact-name lookup
    pub fn record_name_lookup(&self) {
        self.name_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one range scan
    pub fn record_range_scan(&self) {
        self.range_scans.fetch_add(1, Ordering::Relaxed);
    }

    // Reads

    /// Batches that ran to completion
    pub fn batches_executed(&self) -> u64 {
        self.batches_executed.load(Ordering::Relaxed)
    }

    /// Batches that failed before completing
    pub fn batches_failed(&self) -> u64 {
        self.batches_failed.load(Ordering::Relaxed)
    }

    /// Requests evaluated across all batches
    pub fn requests_evaluated(&self) -> u64 {
        self.requests_evaluated.load(Ordering::Relaxed)
    }

    /// Fetches issued to the source
    pub fn partitions_fetched(&self) -> u64 {
        self.partitions_fetched.load(Ordering::Relaxed)
    }

    /// Requests served from the per-batch fetch cache
    pub fn fetch_cache_hits(&self) -> u64 {
        self.fetch_cache_hits.load(Ordering::Relaxed)
    }

    /// Columns returned across all result entries
    pub fn columns_returned(&self) -> u64 {
        self.columns_returned.load(Ordering::Relaxed)
    }

    /// Exact-name lookups performed
    pub fn name_lookups(&self) -> u64 {
        self.name_lookups.load(Ordering::Relaxed)
    }

    /// Range scans performed
    pub fn range_scans(&self) -> u64 {
        self.range_scans.load(Ordering::Relaxed)
    }
}
