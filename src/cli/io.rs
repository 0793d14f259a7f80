//! JSON file loading and response envelopes
//!
//! Fixture and request files are plain JSON; column names, values and
//! partition keys are UTF-8 strings there (the model itself is raw
//! bytes). Responses are single JSON objects on stdout with a
//! `status` discriminator, `ok` or `error`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::model::{Column, RequestSpec};
use crate::query::BatchResult;
use crate::store::MemoryColumnStore;

use super::errors::CliResult;

/// One column in a store fixture
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,
    /// Column value
    #[serde(default)]
    pub value: String,
    /// Write timestamp
    #[serde(default)]
    pub timestamp: i64,
}

/// A store fixture: partition key -> columns (any order; the store
/// sorts and applies last-write-wins on load)
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSpec {
    /// Partitions by key
    pub partitions: BTreeMap<String, Vec<ColumnSpec>>,
}

/// A request batch file
#[derive(Debug, Clone, Deserialize)]
pub struct RequestFile {
    /// Requests in submission order
    pub requests: Vec<RequestSpec>,
}

/// Loads a store fixture into an in-memory store
pub fn load_store(path: &Path) -> CliResult<MemoryColumnStore> {
    let content = fs::read_to_string(path)?;
    let spec: StoreSpec = serde_json::from_str(&content)?;

    let mut store = MemoryColumnStore::new();
    for (key, columns) in &spec.partitions {
        for col in columns {
            store.insert(
                key.as_bytes(),
                Column::new(col.name.as_bytes(), col.value.as_bytes(), col.timestamp),
            );
        }
    }
    Ok(store)
}

/// Loads a request batch file
pub fn load_requests(path: &Path) -> CliResult<Vec<RequestSpec>> {
    let content = fs::read_to_string(path)?;
    let file: RequestFile = serde_json::from_str(&content)?;
    Ok(file.requests)
}

/// Renders a batch result as the response payload
pub fn render_result(result: &BatchResult) -> Value {
    let entries: Vec<Value> = result
        .iter()
        .map(|entry| {
            let columns: Vec<Value> = entry
                .columns
                .iter()
                .map(|col| {
                    json!({
                        "name": String::from_utf8_lossy(&col.name),
                        "value": String::from_utf8_lossy(&col.value),
                        "timestamp": col.timestamp,
                    })
                })
                .collect();
            json!({
                "index": entry.index,
                "key": String::from_utf8_lossy(&entry.request.key),
                "columns": columns,
            })
        })
        .collect();

    json!({
        "entries": entries,
        "partitions_fetched": result.partitions_fetched,
        "cache_hits": result.cache_hits,
    })
}

/// Builds the success envelope
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// Builds the error envelope
pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = ok_envelope(data);

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = error_envelope(code, message);

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
