// src/lib.rs

//! Dependency graph with cycle rejection and topological layering.
//!
//! The engine lives in [`graph`]; everything else is the `layergraph`
//! command-line front end that reads a TOML graph description and prints
//! its layers.

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod render;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::GraphFile;
use crate::config::loader::load_and_validate;
use crate::graph::sort_layers;
use crate::types::LayerOrder;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the graph description, builds the graph and
/// prints the requested view to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let file = load_and_validate(&config_path)?;

    let output = render_file(&file, args.format, args.node.as_deref())?;
    print!("{output}");

    Ok(())
}

/// Render a validated graph description.
///
/// With `node` set, prints that node's closure report, which is text only;
/// asking for any other `format` alongside it is a `ConfigError`. Otherwise
/// the full layering in `format`.
pub fn render_file(
    file: &GraphFile,
    format: OutputFormat,
    node: Option<&str>,
) -> errors::Result<String> {
    let graph = file.build_graph()?;
    let mut layers = graph.topo_sorted_layers();
    if file.config.layer_order == LayerOrder::Sorted {
        sort_layers(&mut layers);
    }
    debug!(layers = layers.len(), ?format, "rendering graph");

    if let Some(name) = node {
        if format != OutputFormat::Text {
            return Err(errors::LayergraphError::ConfigError(format!(
                "--node prints a text report and cannot be combined with --format {format:?}"
            )));
        }
        return render::render_node_report(file, &graph, &layers, name);
    }

    Ok(match format {
        OutputFormat::Text => render::render_layers(&layers),
        OutputFormat::Dot => render::render_dot(&graph),
    })
}
