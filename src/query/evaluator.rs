//! Slice evaluation against one partition
//!
//! Evaluates a single predicate against a single partition's
//! name-sorted column sequence. Pure: same columns + same predicate =
//! same result, no side effects.

use crate::model::{Column, SlicePredicate, SliceRange};

/// Evaluates slice predicates against sorted column sequences.
pub struct SliceEvaluator;

impl SliceEvaluator {
    /// Evaluates one predicate against one partition.
    ///
    /// `columns` must be sorted ascending by name with no duplicates;
    /// that is the `PartitionSource` contract.
    pub fn evaluate(columns: &[Column], predicate: &SlicePredicate) -> Vec<Column> {
        match predicate {
            SlicePredicate::Names(names) => Self::select_names(columns, names),
            SlicePredicate::Range(range) => Self::scan_range(columns, range),
        }
    }

    /// Exact-name selection.
    ///
    /// Result order follows the requested order, not storage order;
    /// absent names are omitted without placeholder or error.
    fn select_names(columns: &[Column], names: &[Vec<u8>]) -> Vec<Column> {
        let mut result = Vec::with_capacity(names.len());
        for name in names {
            if let Ok(pos) = columns.binary_search_by(|col| col.cmp_name(name)) {
                result.push(columns[pos].clone());
            }
        }
        result
    }

    /// Bounded range scan, forward or reversed.
    fn scan_range(columns: &[Column], range: &SliceRange) -> Vec<Column> {
        if range.count == 0 {
            return Vec::new();
        }
        if range.reversed {
            Self::scan_descending(columns, range)
        } else {
            Self::scan_ascending(columns, range)
        }
    }

    /// Ascending scan: enter at the first name >= start, exit after
    /// the last name <= finish. An empty bound is the partition edge.
    fn scan_ascending(columns: &[Column], range: &SliceRange) -> Vec<Column> {
        let begin = if range.start.is_empty() {
            0
        } else {
            columns.partition_point(|col| col.name.as_slice() < range.start.as_slice())
        };

        let mut result = Vec::new();
        for col in &columns[begin..] {
            if !range.finish.is_empty() && col.name.as_slice() > range.finish.as_slice() {
                break;
            }
            result.push(col.clone());
            if result.len() == range.count {
                break;
            }
        }
        result
    }

    /// Descending scan: enter at the last name <= start, exit after
    /// the last name >= finish. Bounds swap roles relative to the
    /// ascending scan; start is the upper entry point here.
    fn scan_descending(columns: &[Column], range: &SliceRange) -> Vec<Column> {
        let end = if range.start.is_empty() {
            columns.len()
        } else {
            columns.partition_point(|col| col.name.as_slice() <= range.start.as_slice())
        };

        let mut result = Vec::new();
        for col in columns[..end].iter().rev() {
            if !range.finish.is_empty() && col.name.as_slice() < range.finish.as_slice() {
                break;
            }
            result.push(col.clone());
            if result.len() == range.count {
                break;
            }
        }
        result
    }
}
