//! Slice predicates and their wire-shaped raw form
//!
//! The strict model (`SlicePredicate`, `KeyPredicate`) is what the
//! query layer consumes: an enum with exactly one selection mode, built
//! fully populated in one step. The raw form (`RequestSpec`,
//! `PredicateSpec`, `RangeSpec`) mirrors the shape adapters and fixture
//! files speak, where both selection modes are optional fields;
//! `normalize` is the single checkpoint between the two.

use serde::Deserialize;

use super::errors::{ModelResult, PredicateError};

/// Default range count when a raw request omits it
const DEFAULT_RANGE_COUNT: i64 = 100;

/// A bounded, optionally reversed scan over a partition's name order.
///
/// In forward mode `start` is the lower bound and `finish` the upper;
/// in reversed mode the two swap roles, naming the scan's entry and
/// exit points rather than a fixed low/high pair. An empty bound is
/// unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRange {
    /// Name the scan enters at (inclusive); empty = partition edge
    pub start: Vec<u8>,
    /// Name the scan exits at (inclusive); empty = partition edge
    pub finish: Vec<u8>,
    /// Maximum number of columns to emit
    pub count: usize,
    /// Scan in descending name order
    pub reversed: bool,
}

impl SliceRange {
    /// Creates a forward range
    pub fn forward(start: impl Into<Vec<u8>>, finish: impl Into<Vec<u8>>, count: usize) -> Self {
        Self {
            start: start.into(),
            finish: finish.into(),
            count,
            reversed: false,
        }
    }

    /// Creates a reversed range; `start` is the upper entry point
    pub fn reversed(start: impl Into<Vec<u8>>, finish: impl Into<Vec<u8>>, count: usize) -> Self {
        Self {
            start: start.into(),
            finish: finish.into(),
            count,
            reversed: true,
        }
    }
}

/// Normalized description of which columns of a partition to return.
///
/// Exactly one selection mode exists per predicate; the "neither or
/// both" state of raw requests cannot be represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlicePredicate {
    /// Explicit column names, returned in the order given here
    Names(Vec<Vec<u8>>),
    /// Bounded scan over the partition's name order
    Range(SliceRange),
}

impl SlicePredicate {
    /// Builds a names predicate from anything byte-like
    pub fn names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Vec<u8>>,
    {
        SlicePredicate::Names(names.into_iter().map(Into::into).collect())
    }
}

/// A partition key paired with one slice predicate.
///
/// This is both the request element and the identity a result entry is
/// attributed to: two structurally equal key predicates submitted as
/// separate requests still yield separate result entries, keyed by
/// their submission index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPredicate {
    /// Partition key
    pub key: Vec<u8>,
    /// What to select from that partition
    pub predicate: SlicePredicate,
}

impl KeyPredicate {
    /// Creates a new key predicate
    pub fn new(key: impl Into<Vec<u8>>, predicate: SlicePredicate) -> Self {
        Self {
            key: key.into(),
            predicate,
        }
    }
}

/// Raw range as it appears in request files.
///
/// Bounds are UTF-8 strings (column names in fixtures are textual);
/// omitted bounds mean unbounded, an omitted count defaults to 100.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeSpec {
    /// Scan entry point (inclusive)
    #[serde(default)]
    pub start: String,
    /// Scan exit point (inclusive)
    #[serde(default)]
    pub finish: String,
    /// Maximum columns to return; negative is rejected
    #[serde(default = "default_range_count")]
    pub count: i64,
    /// Scan in descending name order
    #[serde(default)]
    pub reversed: bool,
}

fn default_range_count() -> i64 {
    DEFAULT_RANGE_COUNT
}

/// Raw predicate as it appears in request files: both modes optional.
#[derive(Debug, Clone, Deserialize)]
pub struct PredicateSpec {
    /// Explicit column names
    #[serde(default)]
    pub column_names: Option<Vec<String>>,
    /// Name-range selection
    #[serde(default)]
    pub range: Option<RangeSpec>,
}

impl PredicateSpec {
    /// Normalizes the raw predicate into the strict model.
    ///
    /// `index` is the request's submission index, carried into any
    /// error so a caller can report which batch entry was malformed.
    pub fn normalize(&self, index: usize) -> ModelResult<SlicePredicate> {
        match (&self.column_names, &self.range) {
            (Some(_), Some(_)) => Err(PredicateError::Ambiguous { index }),
            (None, None) => Err(PredicateError::Empty { index }),
            (Some(names), None) => Ok(SlicePredicate::names(names.iter().map(String::as_bytes))),
            (None, Some(range)) => {
                if range.count < 0 {
                    return Err(PredicateError::NegativeCount {
                        index,
                        count: range.count,
                    });
                }
                Ok(SlicePredicate::Range(SliceRange {
                    start: range.start.clone().into_bytes(),
                    finish: range.finish.clone().into_bytes(),
                    count: range.count as usize,
                    reversed: range.reversed,
                }))
            }
        }
    }
}

/// One raw request line: a partition key plus a raw predicate.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestSpec {
    /// Partition key
    pub key: String,
    /// Raw predicate; exactly one mode must be set
    #[serde(flatten)]
    pub predicate: PredicateSpec,
}

impl RequestSpec {
    /// Normalizes this raw request into a key predicate
    pub fn normalize(&self, index: usize) -> ModelResult<KeyPredicate> {
        let predicate = self.predicate.normalize(index)?;
        Ok(KeyPredicate::new(self.key.as_bytes(), predicate))
    }
}

/// Normalizes a whole batch of raw requests, fail-fast.
///
/// The first malformed predicate rejects the batch; no partial
/// normalization is ever handed to the executor.
pub fn normalize_batch(specs: &[RequestSpec]) -> ModelResult<Vec<KeyPredicate>> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| spec.normalize(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_spec(names: &[&str]) -> PredicateSpec {
        PredicateSpec {
            column_names: Some(names.iter().map(|n| n.to_string()).collect()),
            range: None,
        }
    }

    fn range_spec(start: &str, finish: &str, count: i64) -> PredicateSpec {
        PredicateSpec {
            column_names: None,
            range: Some(RangeSpec {
                start: start.to_string(),
                finish: finish.to_string(),
                count,
                reversed: false,
            }),
        }
    }

    #[test]
    fn test_names_normalize_preserves_order() {
        let pred = names_spec(&["c", "a", "b"]).normalize(0).unwrap();
        assert_eq!(
            pred,
            SlicePredicate::names([b"c".to_vec(), b"a".to_vec(), b"b".to_vec()])
        );
    }

    #[test]
    fn test_neither_mode_rejected() {
        let spec = PredicateSpec {
            column_names: None,
            range: None,
        };
        assert_eq!(spec.normalize(3), Err(PredicateError::Empty { index: 3 }));
    }

    #[test]
    fn test_both_modes_rejected() {
        let mut spec = names_spec(&["a"]);
        spec.range = Some(RangeSpec {
            start: String::new(),
            finish: String::new(),
            count: 1,
            reversed: false,
        });
        assert_eq!(
            spec.normalize(1),
            Err(PredicateError::Ambiguous { index: 1 })
        );
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = range_spec("a", "z", -5).normalize(2).unwrap_err();
        assert_eq!(err, PredicateError::NegativeCount { index: 2, count: -5 });
    }

    #[test]
    fn test_zero_count_is_valid() {
        let pred = range_spec("a", "z", 0).normalize(0).unwrap();
        assert_eq!(pred, SlicePredicate::Range(SliceRange::forward("a", "z", 0)));
    }

    #[test]
    fn test_batch_normalization_is_fail_fast() {
        let specs = vec![
            RequestSpec {
                key: "P1".to_string(),
                predicate: names_spec(&["a"]),
            },
            RequestSpec {
                key: "P1".to_string(),
                predicate: PredicateSpec {
                    column_names: None,
                    range: None,
                },
            },
        ];
        let err = normalize_batch(&specs).unwrap_err();
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn test_request_spec_deserializes_flattened() {
        let spec: RequestSpec =
            serde_json::from_str(r#"{"key":"P1","column_names":["a","b"]}"#).unwrap();
        let kp = spec.normalize(0).unwrap();
        assert_eq!(kp.key, b"P1".to_vec());
        assert_eq!(
            kp.predicate,
            SlicePredicate::names([b"a".to_vec(), b"b".to_vec()])
        );
    }

    #[test]
    fn test_range_defaults_on_the_wire() {
        let spec: RequestSpec = serde_json::from_str(r#"{"key":"P1","range":{}}"#).unwrap();
        match spec.normalize(0).unwrap().predicate {
            SlicePredicate::Range(range) => {
                assert!(range.start.is_empty());
                assert!(range.finish.is_empty());
                assert_eq!(range.count, 100);
                assert!(!range.reversed);
            }
            other => panic!("expected range predicate, got {:?}", other),
        }
    }
}
