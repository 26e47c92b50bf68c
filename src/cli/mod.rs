//! CLI argument parsing for listrec
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CleanArgs, ConfigArgs, RecommendArgs, StopwordsArgs};
pub use output::OutputFormat;

/// Listrec - recommend similar listings from their free-text remarks
#[derive(Parser, Debug)]
#[command(name = "listrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./listrec.toml when present)
    #[arg(long, global = true, value_name = "PATH", env = "LISTREC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the three most similar listings for every listing
    Recommend(RecommendArgs),

    /// Print remarks after abbreviation expansion and filtering
    Clean(CleanArgs),

    /// Print the effective stopword set
    Stopwords(StopwordsArgs),

    /// Print the effective configuration
    Config(ConfigArgs),
}
