//! CLI command implementations
//!
//! Each command is one-shot: load files, act, print a single JSON
//! envelope on stdout, exit. Batch errors still produce an `error`
//! envelope before the non-zero exit.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::json;

use crate::model::{normalize_batch, SlicePredicate};
use crate::query::{BatchSliceExecutor, ExecutorConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{load_requests, load_store, render_result, write_error, write_response};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch an already-parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Query {
            store,
            requests,
            no_dedupe,
        } => query(&store, &requests, no_dedupe),
        Command::Validate { requests } => validate(&requests),
        Command::Inspect { store } => inspect(&store),
    }
}

/// Run a request batch against a store fixture
pub fn query(store_path: &Path, requests_path: &Path, no_dedupe: bool) -> CliResult<()> {
    let store = load_store(store_path)?;
    let specs = load_requests(requests_path)?;

    let executor = BatchSliceExecutor::new(&store).with_config(ExecutorConfig {
        dedupe_fetches: !no_dedupe,
    });

    match executor.execute_raw(&specs) {
        Ok(result) => write_response(render_result(&result)),
        Err(err) => {
            let err = CliError::from(err);
            write_error(err.code(), &err.to_string())?;
            Err(err)
        }
    }
}

/// Normalize a request batch and report its shape, touching no store
pub fn validate(requests_path: &Path) -> CliResult<()> {
    let specs = load_requests(requests_path)?;

    match normalize_batch(&specs) {
        Ok(requests) => {
            let shapes: Vec<String> = requests
                .iter()
                .map(|request| match &request.predicate {
                    SlicePredicate::Names(names) => format!("names({})", names.len()),
                    SlicePredicate::Range(range) => format!(
                        "range(count={}, reversed={})",
                        range.count, range.reversed
                    ),
                })
                .collect();
            write_response(json!({
                "requests": requests.len(),
                "predicates": shapes,
            }))
        }
        Err(err) => {
            let err = CliError::from(crate::query::QueryError::InvalidPredicate(err));
            write_error(err.code(), &err.to_string())?;
            Err(err)
        }
    }
}

/// Summarize a store fixture's partitions
pub fn inspect(store_path: &Path) -> CliResult<()> {
    let store = load_store(store_path)?;

    let sizes: BTreeMap<String, usize> = store
        .partition_sizes()
        .map(|(key, count)| (String::from_utf8_lossy(key).into_owned(), count))
        .collect();

    write_response(json!({
        "partitions": store.partition_count(),
        "columns": sizes,
    }))
}
