// src/graph/layers.rs

//! Helpers for working with layering snapshots produced by
//! [`DependencyGraph::topo_sorted_layers`](super::DependencyGraph::topo_sorted_layers).

use std::collections::HashSet;
use std::hash::Hash;

/// Index of the layer containing `node`, if any.
pub fn layer_index<N: PartialEq>(layers: &[Vec<N>], node: &N) -> Option<usize> {
    layers.iter().position(|layer| layer.contains(node))
}

/// Layer-by-layer set equivalence: same number of layers, and each pair of
/// corresponding layers holds the same nodes in any order.
pub fn layers_equivalent<N: Eq + Hash>(xs: &[Vec<N>], ys: &[Vec<N>]) -> bool {
    xs.len() == ys.len()
        && xs.iter().zip(ys).all(|(x, y)| {
            let x: HashSet<&N> = x.iter().collect();
            let y: HashSet<&N> = y.iter().collect();
            x == y
        })
}

/// Sort members within each layer. Layer order itself is untouched.
pub fn sort_layers<N: Ord>(layers: &mut [Vec<N>]) {
    for layer in layers.iter_mut() {
        layer.sort();
    }
}
