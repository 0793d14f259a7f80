//! Batch slice-query execution
//!
//! Takes an ordered batch of key predicates, fetches each partition
//! through the `PartitionSource` boundary, evaluates every request
//! independently, and assembles one result entry per request in
//! submission order.
//!
//! Execution flow (strict order):
//! 1. Normalize raw predicates, fail-fast, before any fetch
//! 2. Fetch the request's partition (through the per-batch cache when
//!    dedup is enabled; a distinct key is fetched at most once)
//! 3. Evaluate the request's predicate against the fetched columns
//! 4. Append the entry at the request's submission index
//!
//! Step 2's cache is scoped to one `execute` call and is purely an I/O
//! optimization: every request is still evaluated on its own against
//! the identical column sequence, so results never depend on whether
//! dedup is on. Evaluation itself is pure and per-request, so a caller
//! may fan distinct keys out to parallel workers; this executor stays
//! single-pass and synchronous.

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::{normalize_batch, Column, KeyPredicate, RequestSpec, SlicePredicate};
use crate::observability::{Logger, MetricsRegistry};
use crate::store::{PartitionSource, StoreError};

use super::errors::{QueryError, QueryResult};
use super::evaluator::SliceEvaluator;
use super::result::{BatchEntry, BatchResult};

/// Executor tuning knobs.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Fetch each distinct partition key at most once per batch
    pub dedupe_fetches: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            dedupe_fetches: true,
        }
    }
}

/// Executes batches of slice queries against one partition source.
pub struct BatchSliceExecutor<'a, S: PartitionSource> {
    source: &'a S,
    config: ExecutorConfig,
    metrics: Option<&'a MetricsRegistry>,
}

impl<'a, S: PartitionSource> BatchSliceExecutor<'a, S> {
    /// Creates an executor with the default configuration
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            config: ExecutorConfig::default(),
            metrics: None,
        }
    }

    /// Replaces the configuration
    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Attaches a metrics registry
    pub fn with_metrics(mut self, metrics: &'a MetricsRegistry) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Normalizes raw requests and executes them as one batch.
    ///
    /// The first malformed predicate rejects the whole batch before
    /// any partition is fetched.
    pub fn execute_raw(&self, specs: &[RequestSpec]) -> QueryResult<BatchResult> {
        match normalize_batch(specs) {
            Ok(requests) => self.execute(&requests),
            Err(err) => {
                Logger::error(
                    "BATCH_REJECTED",
                    &[
                        ("error", err.to_string().as_str()),
                        ("request_index", err.index().to_string().as_str()),
                    ],
                );
                if let Some(metrics) = self.metrics {
                    metrics.record_batch_failed();
                }
                Err(QueryError::InvalidPredicate(err))
            }
        }
    }

    /// Executes one batch of already-normalized requests.
    ///
    /// Returns exactly one entry per request, in submission order;
    /// duplicate or overlapping requests stay independent entries. A
    /// source failure aborts the whole batch.
    pub fn execute(&self, requests: &[KeyPredicate]) -> QueryResult<BatchResult> {
        let batch_id = Uuid::new_v4().to_string();
        Logger::trace(
            "BATCH_START",
            &[
                ("batch_id", batch_id.as_str()),
                ("requests", requests.len().to_string().as_str()),
            ],
        );

        let mut cache: HashMap<&[u8], Vec<Column>> = HashMap::new();
        let mut entries = Vec::with_capacity(requests.len());
        let mut partitions_fetched = 0usize;
        let mut cache_hits = 0usize;

        for (index, request) in requests.iter().enumerate() {
            let key = request.key.as_slice();

            let uncached;
            let columns: &[Column] = if self.config.dedupe_fetches {
                if cache.contains_key(key) {
                    cache_hits += 1;
                    if let Some(metrics) = self.metrics {
                        metrics.record_fetch_cache_hit();
                    }
                } else {
                    let fetched = self.fetch(&batch_id, key, &mut partitions_fetched)?;
                    cache.insert(key, fetched);
                }
                cache.get(key).map(Vec::as_slice).unwrap_or(&[])
            } else {
                uncached = self.fetch(&batch_id, key, &mut partitions_fetched)?;
                &uncached
            };

            if let Some(metrics) = self.metrics {
                metrics.record_request_evaluated();
                match &request.predicate {
                    SlicePredicate::Names(_) => metrics.record_name_lookup(),
                    SlicePredicate::Range(_) => metrics.record_range_scan(),
                }
            }

            let selected = SliceEvaluator::evaluate(columns, &request.predicate);
            if let Some(metrics) = self.metrics {
                metrics.add_columns_returned(selected.len() as u64);
            }

            entries.push(BatchEntry {
                index,
                request: request.clone(),
                columns: selected,
            });
        }

        let result = BatchResult::new(entries, partitions_fetched, cache_hits);
        if let Some(metrics) = self.metrics {
            metrics.record_batch_executed();
        }
        Logger::info(
            "BATCH_COMPLETE",
            &[
                ("batch_id", batch_id.as_str()),
                ("cache_hits", result.cache_hits.to_string().as_str()),
                ("columns", result.total_columns().to_string().as_str()),
                ("partitions_fetched", result.partitions_fetched.to_string().as_str()),
                ("requests", result.len().to_string().as_str()),
            ],
        );
        Ok(result)
    }

    /// One call through the storage boundary; failures abort the batch.
    ///
    /// The fetched sequence is checked against the source's sort
    /// contract here; a violation is surfaced as a store error rather
    /// than silently miscomputing slices downstream.
    fn fetch(&self, batch_id: &str, key: &[u8], fetched: &mut usize) -> QueryResult<Vec<Column>> {
        let verified = self.source.fetch_partition(key).and_then(|columns| {
            if columns.windows(2).any(|pair| pair[0].name >= pair[1].name) {
                Err(StoreError::unsorted(key))
            } else {
                Ok(columns)
            }
        });
        match verified {
            Ok(columns) => {
                *fetched += 1;
                if let Some(metrics) = self.metrics {
                    metrics.record_partition_fetched();
                }
                Ok(columns)
            }
            Err(err) => {
                Logger::error(
                    "BATCH_ABORTED",
                    &[
                        ("batch_id", batch_id),
                        ("error", err.to_string().as_str()),
                    ],
                );
                if let Some(metrics) = self.metrics {
                    metrics.record_batch_failed();
                }
                Err(QueryError::PartitionFetch(err))
            }
        }
    }
}
