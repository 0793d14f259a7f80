//! Observability subsystem for colonnade
//!
//! Structured JSON logging plus a counter-only metrics registry.
//!
//! # Principles
//!
//! 1. Observability is read-only: it never affects query results
//! 2. Synchronous, no background threads
//! 3. Deterministic output (alphabetical field order, exact counters)

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::MetricsRegistry;
