//! CLI Roundtrip Tests
//!
//! Fixture and request files on disk through the CLI loaders, the
//! raw-request execution path, and the command layer itself: success
//! and failure exit paths with their stable error codes, plus
//! fail-fast rejection of malformed predicates.

use std::io::Write;
use std::path::PathBuf;

use colonnade::cli::{load_requests, load_store, run_command, CliError, Command};
use colonnade::query::{BatchSliceExecutor, QueryError};
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const STORE_FIXTURE: &str = r#"{
    "partitions": {
        "P1": [
            {"name": "a", "value": "1", "timestamp": 1},
            {"name": "b", "value": "2", "timestamp": 2},
            {"name": "c", "value": "3", "timestamp": 3},
            {"name": "d", "value": "4", "timestamp": 4}
        ],
        "P2": [
            {"name": "x", "value": "24", "timestamp": 1},
            {"name": "y", "value": "25", "timestamp": 2},
            {"name": "z", "value": "26", "timestamp": 3}
        ]
    }
}"#;

// =============================================================================
// File-To-Result Roundtrip
// =============================================================================

/// A request file runs against a fixture and attributes results by
/// submission index.
#[test]
fn test_fixture_batch_roundtrip() {
    let store_file = write_file(STORE_FIXTURE);
    let request_file = write_file(
        r#"{"requests": [
            {"key": "P1", "column_names": ["b", "a"]},
            {"key": "P2", "range": {"start": "z", "finish": "x", "count": 2, "reversed": true}},
            {"key": "P1", "range": {"start": "b", "count": 2}}
        ]}"#,
    );

    let store = load_store(store_file.path()).unwrap();
    let specs = load_requests(request_file.path()).unwrap();
    let result = BatchSliceExecutor::new(&store).execute_raw(&specs).unwrap();

    assert_eq!(result.len(), 3);

    let first: Vec<&[u8]> = result.columns(0).iter().map(|c| c.name.as_slice()).collect();
    assert_eq!(first, vec![b"b" as &[u8], b"a"]);

    let second: Vec<&[u8]> = result.columns(1).iter().map(|c| c.name.as_slice()).collect();
    assert_eq!(second, vec![b"z" as &[u8], b"y"]);

    let third: Vec<&[u8]> = result.columns(2).iter().map(|c| c.name.as_slice()).collect();
    assert_eq!(third, vec![b"b" as &[u8], b"c"]);
}

/// A malformed predicate anywhere in the file rejects the whole batch.
#[test]
fn test_malformed_request_rejects_whole_batch() {
    let store_file = write_file(STORE_FIXTURE);
    let request_file = write_file(
        r#"{"requests": [
            {"key": "P1", "column_names": ["a"]},
            {"key": "P1"}
        ]}"#,
    );

    let store = load_store(store_file.path()).unwrap();
    let specs = load_requests(request_file.path()).unwrap();
    let err = BatchSliceExecutor::new(&store)
        .execute_raw(&specs)
        .unwrap_err();

    assert!(matches!(err, QueryError::InvalidPredicate(_)));
}

// =============================================================================
// Command Layer
// =============================================================================

/// The query command runs end to end on well-formed files.
#[test]
fn test_query_command_succeeds() {
    let store_file = write_file(STORE_FIXTURE);
    let request_file = write_file(r#"{"requests": [{"key": "P1", "column_names": ["a", "c"]}]}"#);

    let outcome = run_command(Command::Query {
        store: store_file.path().to_path_buf(),
        requests: request_file.path().to_path_buf(),
        no_dedupe: false,
    });
    assert!(outcome.is_ok());
}

/// The query command surfaces a malformed predicate with its stable
/// code.
#[test]
fn test_query_command_reports_invalid_predicate_code() {
    let store_file = write_file(STORE_FIXTURE);
    let request_file = write_file(r#"{"requests": [{"key": "P1"}]}"#);

    let err = run_command(Command::Query {
        store: store_file.path().to_path_buf(),
        requests: request_file.path().to_path_buf(),
        no_dedupe: false,
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CliError::Query(QueryError::InvalidPredicate(_))
    ));
    assert_eq!(err.code(), "COLONNADE_INVALID_PREDICATE");
}

/// A missing fixture file is an I/O failure, not a bad batch.
#[test]
fn test_query_command_missing_store_is_io_error() {
    let request_file = write_file(r#"{"requests": [{"key": "P1", "column_names": ["a"]}]}"#);

    let err = run_command(Command::Query {
        store: PathBuf::from("/nonexistent/store.json"),
        requests: request_file.path().to_path_buf(),
        no_dedupe: false,
    })
    .unwrap_err();

    assert!(matches!(err, CliError::Io(_)));
    assert_eq!(err.code(), "COLONNADE_IO_ERROR");
}

/// Validate accepts a well-formed batch without any store present.
#[test]
fn test_validate_command_accepts_good_batch() {
    let request_file = write_file(
        r#"{"requests": [
            {"key": "P1", "column_names": ["a"]},
            {"key": "P2", "range": {"start": "a", "finish": "z", "count": 5}}
        ]}"#,
    );

    let outcome = run_command(Command::Validate {
        requests: request_file.path().to_path_buf(),
    });
    assert!(outcome.is_ok());
}

/// Validate rejects an ambiguous predicate with the same code the
/// query command uses.
#[test]
fn test_validate_command_rejects_ambiguous_predicate() {
    let request_file = write_file(
        r#"{"requests": [
            {"key": "P1", "column_names": ["a"], "range": {"start": "a", "finish": "z", "count": 1}}
        ]}"#,
    );

    let err = run_command(Command::Validate {
        requests: request_file.path().to_path_buf(),
    })
    .unwrap_err();

    assert_eq!(err.code(), "COLONNADE_INVALID_PREDICATE");
}

/// Inspect summarizes a fixture without error.
#[test]
fn test_inspect_command_succeeds() {
    let store_file = write_file(STORE_FIXTURE);

    let outcome = run_command(Command::Inspect {
        store: store_file.path().to_path_buf(),
    });
    assert!(outcome.is_ok());
}

/// A predicate carrying both modes is rejected the same way.
#[test]
fn test_ambiguous_predicate_rejected() {
    let store_file = write_file(STORE_FIXTURE);
    let request_file = write_file(
        r#"{"requests": [
            {"key": "P1", "column_names": ["a"], "range": {"start": "a", "finish": "z", "count": 1}}
        ]}"#,
    );

    let store = load_store(store_file.path()).unwrap();
    let specs = load_requests(request_file.path()).unwrap();
    let err = BatchSliceExecutor::new(&store)
        .execute_raw(&specs)
        .unwrap_err();

    assert!(matches!(err, QueryError::InvalidPredicate(_)));
}
