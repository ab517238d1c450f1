// src/config/mod.rs

//! Graph description files.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a file from disk.
//! - `validate.rs`: turning the raw model into a checked [`GraphFile`] and
//!   building the [`DependencyGraph`](crate::graph::DependencyGraph) from it.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
