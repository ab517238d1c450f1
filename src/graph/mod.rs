// src/graph/mod.rs

//! Dependency graph and topological layering.
//!
//! - [`dependency_graph`] holds the graph itself: node set plus the
//!   dependency / dependent adjacency maps, cycle-checked on insertion.
//! - [`layers`] has small helpers for inspecting the layering it produces.

pub mod dependency_graph;
pub mod layers;

pub use dependency_graph::DependencyGraph;
pub use layers::{layer_index, layers_equivalent, sort_layers};
