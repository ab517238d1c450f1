// src/config/validate.rs

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::config::model::{GraphFile, NodeConfig, RawGraphFile};
use crate::errors::{LayergraphError, Result};
use crate::graph::DependencyGraph;

/// Node names usable unquoted in TOML keys and in DOT output.
const NODE_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$";

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = LayergraphError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(GraphFile::new_unchecked(raw.config, raw.node))
    }
}

impl GraphFile {
    /// Build the dependency graph described by this file.
    ///
    /// Nodes are inserted in declaration order, which is the order members
    /// of a layer come out in under `layer_order = "insertion"`.
    pub fn build_graph(&self) -> Result<DependencyGraph<String>> {
        graph_from_nodes(&self.node)
    }
}

fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_node_names(raw)?;
    validate_node_dependencies(raw)?;
    // Self and circular dependencies are rejected by the engine itself.
    let graph = graph_from_nodes(&raw.node)?;
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "graph description validated"
    );
    Ok(())
}

fn ensure_has_nodes(raw: &RawGraphFile) -> Result<()> {
    if raw.node.is_empty() {
        return Err(LayergraphError::ConfigError(
            "graph must contain at least one [node.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_node_names(raw: &RawGraphFile) -> Result<()> {
    let re = Regex::new(NODE_NAME_PATTERN)
        .map_err(|e| LayergraphError::ConfigError(format!("bad node name pattern: {e}")))?;

    for name in raw.node.keys() {
        if !re.is_match(name) {
            return Err(LayergraphError::ConfigError(format!(
                "invalid node name '{}' (must match {})",
                name, NODE_NAME_PATTERN
            )));
        }
    }
    Ok(())
}

fn validate_node_dependencies(raw: &RawGraphFile) -> Result<()> {
    for (name, node) in raw.node.iter() {
        for dep in node.after.iter() {
            if !raw.node.contains_key(dep) {
                return Err(LayergraphError::ConfigError(format!(
                    "node '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
        }
    }
    Ok(())
}

fn graph_from_nodes(nodes: &IndexMap<String, NodeConfig>) -> Result<DependencyGraph<String>> {
    let mut graph = DependencyGraph::new();

    for name in nodes.keys() {
        graph.insert(name.clone());
    }

    for (name, node) in nodes.iter() {
        for dep in node.after.iter() {
            graph.depend_on(name.clone(), dep.clone())?;
        }
    }

    Ok(graph)
}
