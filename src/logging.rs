// src/logging.rs

//! `tracing` subscriber for the `layergraph` binary.
//!
//! `--log-level` wins over `LAYERGRAPH_LOG`. The env var takes full
//! `EnvFilter` directives, so `LAYERGRAPH_LOG=layergraph::graph=trace`
//! shows every registered edge without the rest of the crate's noise.
//! Anything unparsable falls back to `info`.
//!
//! Output goes to stderr; stdout carries only the rendered graph, so
//! `layergraph --format dot | dot -Tsvg` keeps working with logging on.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

const LOG_ENV: &str = "LAYERGRAPH_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref());

    fmt()
        .with_env_filter(filter)
        // Targets tell graph events (`layergraph::graph`) apart from config
        // loading (`layergraph::config`).
        .with_target(true)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level_directive(level));
    }

    env.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
