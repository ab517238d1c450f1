// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::Result;

/// Read a graph description and deserialize it into a [`RawGraphFile`].
///
/// Only TOML parsing happens here; see [`load_and_validate`] for the
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawGraphFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a graph description and validate it.
///
/// On success every `after` reference names a declared node, no node
/// depends on itself, and the relation is acyclic.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let raw = load_from_path(&path)?;
    let file = GraphFile::try_from(raw)?;
    info!(
        path = %path.as_ref().display(),
        nodes = file.node.len(),
        "loaded graph description"
    );
    Ok(file)
}
