//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use std::path::PathBuf;

use clap::Parser;

/// Parse web access logs and generate aggregate reports.
///
/// Reads one or more log files, extracts records according to the pattern in
/// the YAML configuration file, and prints three reports to stdout: total
/// requests by date, most frequent user-agents by date, and GET/POST ratio
/// by OS by date.
#[derive(Debug, Parser)]
#[command(name = "logtally")]
#[command(about = "Parse web access logs and generate aggregate reports", long_about = None)]
pub struct Cli {
    /// Log files to parse
    #[arg(value_name = "filename", required = true)]
    pub logs: Vec<PathBuf>,

    /// YAML configuration file (extraction pattern and classifier tokens)
    #[arg(short = 'c', long = "conf", value_name = "conf_file")]
    pub conf: PathBuf,

    /// Write diagnostics to this file instead of stderr
    #[arg(short = 'l', long = "log", value_name = "logfile")]
    pub log: Option<PathBuf>,

    /// How many most-common agents to report per date
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = 3)]
    pub top: usize,
}
