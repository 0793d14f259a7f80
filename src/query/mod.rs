//! Query subsystem for colonnade
//!
//! The read path: one evaluator for single predicates, one executor
//! for ordered batches.
//!
//! # Invariants
//!
//! - Deterministic: same snapshot + same batch = same result
//! - One result entry per submitted request, in submission order,
//!   never merged
//! - Fetch dedup is invisible in results
//! - All-or-nothing: an error aborts the batch, no partial success

mod errors;
mod evaluator;
mod executor;
mod result;

pub use errors::{QueryError, QueryResult};
pub use evaluator::SliceEvaluator;
pub use executor::{BatchSliceExecutor, ExecutorConfig};
pub use result::{BatchEntry, BatchResult};
