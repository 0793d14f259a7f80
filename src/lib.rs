//! colonnade - a batched slice-query engine for sorted wide-column
//! partitions
//!
//! Given a batch of (partition key, slice predicate) requests, the
//! query layer fetches each partition through a narrow storage
//! boundary, evaluates every predicate independently, and returns one
//! result entry per request in submission order.

pub mod cli;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
