use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `scout` binary.
#[derive(Debug, Parser)]
#[command(
    name = "scout",
    version,
    about = "Tenderscout - public-sector notice discovery and enrichment"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search all sources and print the ranked notice list
    Find {
        /// Search query (e.g. "관광 빅데이터 플랫폼")
        query: String,

        /// Max notices to return
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Score the local notice corpus against the company document index
    Match {
        /// Search query used to select candidate documents
        query: String,

        /// Document corpus directory (defaults to the configured docs dir)
        #[arg(long)]
        docs: Option<PathBuf>,

        /// Company profile JSON; when set, zero-fit notices are dropped
        /// before the similarity scoring
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Max enriched notices to return
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Build an information-disclosure request from the last find result
    Disclose {
        /// Free-form request text (quoted phrase selects the target item)
        text: String,
    },
}
