// src/config/model.rs

use indexmap::IndexMap;
use serde::Deserialize;

use crate::types::LayerOrder;

/// Graph description as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// layer_order = "sorted"
///
/// [node.cake]
/// after = ["eggs", "flour"]
///
/// [node.eggs]
/// after = ["chickens"]
/// ```
///
/// All sections are optional at the TOML level; [`GraphFile`] enforces the
/// semantic rules.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGraphFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// All nodes from `[node.<name>]`, keyed by node name, in declaration
    /// order.
    #[serde(default)]
    pub node: IndexMap<String, NodeConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// Ordering of nodes inside each printed layer.
    #[serde(default)]
    pub layer_order: LayerOrder,
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConfig {
    /// Nodes this one depends on directly.
    #[serde(default)]
    pub after: Vec<String>,

    /// Free-form text shown by `--node`.
    #[serde(default)]
    pub description: Option<String>,
}

/// A validated graph description.
///
/// Only obtainable through `GraphFile::try_from(RawGraphFile)` (see
/// `config::validate`), so holders can assume every `after` entry names a
/// declared node and the relation is acyclic.
#[derive(Debug, Clone)]
pub struct GraphFile {
    pub config: ConfigSection,
    pub node: IndexMap<String, NodeConfig>,
}

impl GraphFile {
    pub(crate) fn new_unchecked(config: ConfigSection, node: IndexMap<String, NodeConfig>) -> Self {
        Self { config, node }
    }

    pub fn description_of(&self, name: &str) -> Option<&str> {
        self.node.get(name)?.description.as_deref()
    }
}
