// src/types.rs

use std::str::FromStr;

use serde::Deserialize;

/// How members of a single layer are ordered in the output.
///
/// - `Insertion`: the order nodes were first declared (default). This is
///   whatever the engine's leaf peeling produces.
/// - `Sorted`: lexicographic, for reproducible output independent of
///   declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerOrder {
    #[default]
    Insertion,
    Sorted,
}

impl FromStr for LayerOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Ok(LayerOrder::Insertion),
            "sorted" => Ok(LayerOrder::Sorted),
            other => Err(format!(
                "invalid layer_order: {other} (expected \"insertion\" or \"sorted\")"
            )),
        }
    }
}
