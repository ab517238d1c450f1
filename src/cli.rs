// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `layergraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "layergraph",
    version,
    about = "Sort a dependency graph into parallel execution layers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph description (TOML).
    ///
    /// Default: `Layergraph.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Layergraph.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LAYERGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Output format for the layering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show the transitive dependencies and dependents of one node instead
    /// of the full layering.
    ///
    /// The report is plain text; combining it with `--format dot` is an error.
    #[arg(long, value_name = "NAME")]
    pub node: Option<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered layers, one per line.
    #[default]
    Text,
    /// Graphviz DOT, edges pointing from dependency to dependent.
    Dot,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
