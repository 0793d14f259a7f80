//! Partition storage boundary for colonnade
//!
//! The query layer reads partitions through exactly one call,
//! `PartitionSource::fetch_partition`. Consistency levels, replica
//! selection and retry all live behind that call, in whatever adapter
//! implements it; none of them are visible here.
//!
//! `MemoryColumnStore` is the first-party implementation: an in-memory,
//! name-sorted store used by the CLI fixture loader and by tests. It is
//! not a storage engine and has no durability.

mod errors;
mod memory;
mod source;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryColumnStore;
pub use source::PartitionSource;
