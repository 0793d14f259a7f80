//! Partition source boundary trait

use crate::model::Column;

use super::errors::StoreResult;

/// Read access to partitions, as of query time.
///
/// The returned sequence must be sorted ascending by column name with
/// no duplicate names, and must stay stable for the duration of one
/// batch; enforcing that snapshot guarantee is the implementor's job.
/// The query layer verifies the ordering on every fetch and aborts
/// the batch with a sort-contract store error on a violation. An
/// unknown key yields an empty sequence, not an error.
pub trait PartitionSource {
    /// Fetches the name-sorted columns of one partition
    fn fetch_partition(&self, key: &[u8]) -> StoreResult<Vec<Column>>;
}
