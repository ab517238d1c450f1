// src/graph/dependency_graph.rs

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::errors::{GraphError, GraphResult};

/// Node -> set of adjacent nodes. Entries are never empty.
type DepMap<N> = IndexMap<N, IndexSet<N>>;

/// Acyclic "depends-on" relation between caller-supplied node identifiers.
///
/// The graph keeps three views of the same relation:
/// - the node set, in insertion order
/// - `dependencies`: child -> the nodes it directly depends on
/// - `dependents`: parent -> the nodes that directly depend on it
///
/// The two maps are exact inverses of each other and are only ever changed
/// together through [`depend_on`](Self::depend_on) and
/// [`remove`](Self::remove). Every query returns owned data, never a view
/// into the maps.
///
/// ```
/// use layergraph::graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.depend_on("link", "compile").unwrap();
/// graph.depend_on("compile", "fetch").unwrap();
///
/// assert!(graph.depends_on(&"link", &"fetch"));
/// assert!(graph.depend_on("fetch", "link").is_err());
/// assert_eq!(
///     graph.topo_sorted_layers(),
///     vec![vec!["fetch"], vec!["compile"], vec!["link"]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph<N> {
    nodes: IndexSet<N>,
    dependencies: DepMap<N>,
    dependents: DepMap<N>,
}

impl<N> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self {
            nodes: IndexSet::new(),
            dependencies: IndexMap::new(),
            dependents: IndexMap::new(),
        }
    }
}

impl<N> DependencyGraph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// All known nodes, in the order they were first seen.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Add an isolated node. Returns `false` if the node was already known.
    pub fn insert(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Register that `child` depends on `parent`.
    ///
    /// Both endpoints are created if they are unknown. Registering an edge
    /// that already exists is a no-op.
    ///
    /// Fails with [`GraphError::SelfDependency`] when `child == parent` and
    /// with [`GraphError::CircularDependency`] when `parent` already depends
    /// on `child`. In both cases the graph is left untouched.
    pub fn depend_on(&mut self, child: N, parent: N) -> GraphResult<(), N> {
        if child == parent {
            debug!(node = ?child, "rejected self dependency");
            return Err(GraphError::SelfDependency { node: child });
        }
        if self.depends_on(&parent, &child) {
            debug!(?child, ?parent, "rejected circular dependency");
            return Err(GraphError::CircularDependency { child, parent });
        }

        trace!(?child, ?parent, "registering dependency");

        self.nodes.insert(child.clone());
        self.nodes.insert(parent.clone());

        add_to_depmap(&mut self.dependents, parent.clone(), child.clone());
        add_to_depmap(&mut self.dependencies, child, parent);

        Ok(())
    }

    /// Whether `parent` is reachable from `child` through one or more
    /// dependency edges.
    pub fn depends_on(&self, child: &N, parent: &N) -> bool {
        closure(&self.dependencies, child).contains(parent)
    }

    /// Transitive dependencies of `node`. Unknown nodes have none.
    pub fn dependencies(&self, node: &N) -> IndexSet<N> {
        closure(&self.dependencies, node)
    }

    /// Transitive dependents of `node`. Unknown nodes have none.
    pub fn dependents(&self, node: &N) -> IndexSet<N> {
        closure(&self.dependents, node)
    }

    /// Nodes `node` depends on directly.
    pub fn direct_dependencies(&self, node: &N) -> Vec<N> {
        self.dependencies
            .get(node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Nodes that depend directly on `node`.
    pub fn direct_dependents(&self, node: &N) -> Vec<N> {
        self.dependents
            .get(node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every edge as a `(child, parent)` pair, grouped by child in node order.
    pub fn edges(&self) -> Vec<(N, N)> {
        self.nodes
            .iter()
            .flat_map(|child| {
                self.dependencies
                    .get(child)
                    .into_iter()
                    .flatten()
                    .map(move |parent| (child.clone(), parent.clone()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(IndexSet::len).sum()
    }

    /// Nodes with no recorded dependencies.
    ///
    /// Returned in node-set order; callers should not rely on it.
    pub fn leaves(&self) -> Vec<N> {
        self.nodes
            .iter()
            .filter(|node| !self.dependencies.contains_key(*node))
            .cloned()
            .collect()
    }

    /// Delete `node` and every edge touching it. Unknown nodes are ignored.
    pub fn remove(&mut self, node: &N) {
        if let Some(children) = self.dependents.swap_remove(node) {
            for child in &children {
                remove_from_depmap(&mut self.dependencies, child, node);
            }
        }

        if let Some(parents) = self.dependencies.swap_remove(node) {
            for parent in &parents {
                remove_from_depmap(&mut self.dependents, parent, node);
            }
        }

        self.nodes.shift_remove(node);
    }

    /// Group the nodes into layers such that every node sits in a later
    /// layer than everything it depends on.
    ///
    /// Works by repeatedly peeling the leaves off a private clone, so `self`
    /// is left as it was. Order inside a layer is not meaningful.
    pub fn topo_sorted_layers(&self) -> Vec<Vec<N>> {
        let mut shrinking = self.clone();
        let mut layers = Vec::new();

        loop {
            let leaves = shrinking.leaves();
            if leaves.is_empty() {
                break;
            }

            for leaf in &leaves {
                shrinking.remove(leaf);
            }
            layers.push(leaves);
        }

        // Acyclic by construction: every round finds at least one leaf.
        debug_assert!(shrinking.is_empty());
        debug!(
            nodes = self.len(),
            layers = layers.len(),
            "computed topological layers"
        );

        layers
    }
}

/// Breadth-first closure of `start` over `map`, one frontier per round.
///
/// `start` itself is only part of the result if it is reachable from itself,
/// which the acyclic invariant rules out.
fn closure<'a, N>(map: &'a DepMap<N>, start: &'a N) -> IndexSet<N>
where
    N: Clone + Eq + Hash,
{
    let mut out = IndexSet::new();
    let mut frontier: Vec<&'a N> = vec![start];

    while !frontier.is_empty() {
        let mut discovered = Vec::new();
        for node in frontier {
            let Some(next) = map.get(node) else {
                continue;
            };
            for candidate in next {
                if out.insert(candidate.clone()) {
                    discovered.push(candidate);
                }
            }
        }
        frontier = discovered;
    }

    out
}

fn add_to_depmap<N: Eq + Hash>(map: &mut DepMap<N>, key: N, node: N) {
    map.entry(key).or_default().insert(node);
}

/// Remove `node` from `map[key]`, dropping the entry once it is empty.
fn remove_from_depmap<N: Eq + Hash>(map: &mut DepMap<N>, key: &N, node: &N) {
    let Some(set) = map.get_mut(key) else {
        return;
    };
    set.shift_remove(node);
    if set.is_empty() {
        map.swap_remove(key);
    }
}
