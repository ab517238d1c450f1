// src/errors.rs

//! Crate-wide error types and aliases.

use thiserror::Error;

/// Rejections raised by [`DependencyGraph::depend_on`](crate::graph::DependencyGraph::depend_on).
///
/// Both variants are detected from the current graph state before anything
/// is mutated, so a rejected call leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError<N> {
    /// The node was asked to depend on itself.
    #[error("node {node:?} cannot depend on itself")]
    SelfDependency { node: N },

    /// `parent` already depends (directly or transitively) on `child`.
    #[error("{child:?} -> {parent:?} would create a circular dependency")]
    CircularDependency { child: N, parent: N },
}

pub type GraphResult<T, N> = std::result::Result<T, GraphError<N>>;

#[derive(Error, Debug)]
pub enum LayergraphError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError<String>),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LayergraphError>;
