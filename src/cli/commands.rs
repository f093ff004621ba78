//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the most popular TV shows on Episodate
#[derive(Parser, Debug)]
#[command(name = "tvtime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API host, overrides the config file
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Run in UI-testing mode
    #[arg(long, global = true)]
    pub enable_testing: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scroll through the most popular shows
    Popular {
        /// Number of pages to load
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// Fetch a single page with its pagination counters
    Page {
        /// Page number (1-based)
        #[arg(default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
