// src/render.rs

//! Turning a built graph into text for stdout.

use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;

use crate::config::GraphFile;
use crate::errors::{LayergraphError, Result};
use crate::graph::{DependencyGraph, layer_index};

/// Numbered layers, one per line:
///
/// ```text
/// 0: soil water
/// 1: grain
/// ```
pub fn render_layers(layers: &[Vec<String>]) -> String {
    layers
        .iter()
        .enumerate()
        .map(|(index, layer)| format!("{index}: {}\n", layer.join(" ")))
        .collect()
}

/// Graphviz DOT for the whole graph. Edges run from a dependency to the node
/// that depends on it, i.e. in execution order.
pub fn render_dot(graph: &DependencyGraph<String>) -> String {
    let edges = graph.edges();

    // Edge weights are never printed (`EdgeNoLabel`), but Dot needs Display.
    let mut dag: DiGraphMap<&str, &str> = DiGraphMap::new();
    for node in graph.nodes() {
        dag.add_node(node.as_str());
    }
    for (child, parent) in &edges {
        dag.add_edge(parent.as_str(), child.as_str(), "after");
    }

    format!("{}", Dot::with_config(&dag, &[Config::EdgeNoLabel]))
}

/// Closure report for a single node.
pub fn render_node_report(
    file: &GraphFile,
    graph: &DependencyGraph<String>,
    layers: &[Vec<String>],
    name: &str,
) -> Result<String> {
    let node = name.to_string();
    if !graph.contains(&node) {
        return Err(LayergraphError::NodeNotFound(node));
    }

    let mut dependencies: Vec<String> = graph.dependencies(&node).into_iter().collect();
    let mut dependents: Vec<String> = graph.dependents(&node).into_iter().collect();
    dependencies.sort();
    dependents.sort();

    let mut lines = vec![name.to_string()];
    if let Some(description) = file.description_of(name) {
        lines.push(format!("  description: {description}"));
    }
    if let Some(index) = layer_index(layers, &node) {
        lines.push(format!("  layer: {index}"));
    }
    lines.push(format!("  depends on ({}): {}", dependencies.len(), list(&dependencies)));
    lines.push(format!("  depended on by ({}): {}", dependents.len(), list(&dependents)));

    Ok(lines.iter().map(|line| format!("{line}\n")).collect())
}

fn list(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(" ")
    }
}
