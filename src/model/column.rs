//! Column value type
//!
//! A column is a named, timestamped byte value within a partition.
//! Columns order bytewise by name; no two columns in one partition
//! share a name (the storage layer resolves duplicates before a
//! partition reaches the query layer).

use std::cmp::Ordering;
use std::fmt;

/// A single named, timestamped value within a partition.
///
/// Immutable once read. Ordering between columns is the lexicographic
/// (bytewise) order of `name`; `value` and `timestamp` never
/// participate in ordering or equality of position within a partition.
#[derive(Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name; sort key within the partition
    pub name: Vec<u8>,
    /// Opaque value bytes
    pub value: Vec<u8>,
    /// Write timestamp, assigned upstream; never interpreted here
    pub timestamp: i64,
}

impl Column {
    /// Creates a new column
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>, timestamp: i64) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            timestamp,
        }
    }

    /// Returns the column name
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Compares this column's name against an arbitrary name
    pub fn cmp_name(&self, other: &[u8]) -> Ordering {
        self.name.as_slice().cmp(other)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &String::from_utf8_lossy(&self.name))
            .field("value_len", &self.value.len())
            .field("timestamp", &self.timestamp)
            .finish()
    }
}
