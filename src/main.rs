//! colonnade CLI entry point
//!
//! A minimal dispatcher: parse arguments, run the command, emit one
//! FATAL log line and exit non-zero on failure. All logic lives in
//! the cli module.

use colonnade::cli;
use colonnade::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal(
            "CLI_FATAL",
            &[("code", e.code()), ("error", e.to_string().as_str())],
        );
        std::process::exit(1);
    }
}
