//! CLI argument definitions using clap
//!
//! Commands:
//! - colonnade query --store <path> --requests <path> [--no-dedupe]
//! - colonnade validate --requests <path>
//! - colonnade inspect --store <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// colonnade - batched slice queries over sorted wide-column partitions
#[derive(Parser, Debug)]
#[command(name = "colonnade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a batch of slice queries against a store fixture
    Query {
        /// Path to the store fixture (JSON)
        #[arg(long)]
        store: PathBuf,

        /// Path to the request batch (JSON)
        #[arg(long)]
        requests: PathBuf,

        /// Fetch once per request instead of once per distinct key
        #[arg(long)]
        no_dedupe: bool,
    },

    /// Normalize a request batch without touching any store
    Validate {
        /// Path to the request batch (JSON)
        #[arg(long)]
        requests: PathBuf,
    },

    /// Summarize a store fixture's partitions
    Inspect {
        /// Path to the store fixture (JSON)
        #[arg(long)]
        store: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
