//! CLI module for colonnade
//!
//! Provides the command-line surface:
//! - query: run a request batch against a store fixture
//! - validate: normalize a request batch without a store
//! - inspect: summarize a store fixture

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{inspect, query, run, run_command, validate};
pub use errors::{CliError, CliResult};
pub use io::{
    error_envelope, load_requests, load_store, ok_envelope, render_result, write_error,
    write_response,
};
