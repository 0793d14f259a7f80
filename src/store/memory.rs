//! In-memory reference store
//!
//! Keeps each partition as a name-sorted vec. Writes resolve duplicate
//! names by timestamp (last write wins), so a fetched partition always
//! satisfies the sorted, duplicate-free contract of `PartitionSource`.

use std::collections::HashMap;

use crate::model::Column;

use super::errors::StoreResult;
use super::source::PartitionSource;

/// An in-memory, name-sorted column store.
///
/// Used by the CLI fixture loader and tests; not a storage engine.
#[derive(Debug, Default)]
pub struct MemoryColumnStore {
    partitions: HashMap<Vec<u8>, Vec<Column>>,
}

impl MemoryColumnStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one column, keeping the partition sorted by name.
    ///
    /// If the name already exists, the column with the higher timestamp
    /// wins; ties keep the incoming write.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, column: Column) {
        let partition = self.partitions.entry(key.into()).or_default();
        match partition.binary_search_by(|c| c.cmp_name(&column.name)) {
            Ok(pos) => {
                if column.timestamp >= partition[pos].timestamp {
                    partition[pos] = column;
                }
            }
            Err(pos) => partition.insert(pos, column),
        }
    }

    /// Number of partitions held
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Iterates over (key, column count) pairs in unspecified order
    pub fn partition_sizes(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.partitions
            .iter()
            .map(|(key, cols)| (key.as_slice(), cols.len()))
    }
}

impl PartitionSource for MemoryColumnStore {
    fn fetch_partition(&self, key: &[u8]) -> StoreResult<Vec<Column>> {
        Ok(self.partitions.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, timestamp: i64) -> Column {
        Column::new(name.as_bytes().to_vec(), vec![], timestamp)
    }

    #[test]
    fn test_inserts_keep_name_order() {
        let mut store = MemoryColumnStore::new();
        for name in ["m", "a", "z", "c"] {
            store.insert(b"P1".to_vec(), col(name, 1));
        }

        let cols = store.fetch_partition(b"P1").unwrap();
        let names: Vec<&[u8]> = cols.iter().map(Column::name).collect();
        assert_eq!(names, vec![b"a" as &[u8], b"c", b"m", b"z"]);
    }

    #[test]
    fn test_last_write_wins_by_timestamp() {
        let mut store = MemoryColumnStore::new();
        store.insert(b"P1".to_vec(), Column::new(b"a".to_vec(), b"old".to_vec(), 1));
        store.insert(b"P1".to_vec(), Column::new(b"a".to_vec(), b"new".to_vec(), 2));
        store.insert(b"P1".to_vec(), Column::new(b"a".to_vec(), b"stale".to_vec(), 1));

        let cols = store.fetch_partition(b"P1").unwrap();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].value, b"new".to_vec());
    }

    #[test]
    fn test_missing_partition_reads_empty() {
        let store = MemoryColumnStore::new();
        assert!(store.fetch_partition(b"nope").unwrap().is_empty());
    }
}
