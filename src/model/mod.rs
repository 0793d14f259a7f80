//! Data model for colonnade
//!
//! A partition is a name-sorted sequence of columns; a slice predicate
//! selects a subset of those columns either by explicit names or by a
//! bounded name range. All model values are immutable once constructed:
//! predicates are built fully populated in one step and never mutated
//! afterwards, so reusing one as a result key is always safe.
//!
//! Raw, wire-shaped request structures (`RequestSpec`, `PredicateSpec`)
//! live here too, together with their normalization into the strict
//! model. Normalization is the only place an invalid predicate can be
//! observed; the core types cannot represent one.

mod column;
mod errors;
mod predicate;

pub use column::Column;
pub use errors::{ModelResult, PredicateError};
pub use predicate::{
    normalize_batch, KeyPredicate, PredicateSpec, RangeSpec, RequestSpec, SlicePredicate,
    SliceRange,
};
