pub mod builders;

use std::sync::Once;

use layergraph::graph::DependencyGraph;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Edges of the recipe example as `(child, parent)` pairs.
pub const RECIPE_EDGES: [(&str, &str); 8] = [
    ("cake", "eggs"),
    ("cake", "flour"),
    ("eggs", "chickens"),
    ("flour", "grain"),
    ("chickens", "grain"),
    ("grain", "soil"),
    ("grain", "water"),
    ("chickens", "water"),
];

/// The recipe example graph with `String` nodes.
pub fn recipe_graph() -> DependencyGraph<String> {
    let mut graph = DependencyGraph::new();
    for (child, parent) in RECIPE_EDGES {
        graph
            .depend_on(child.to_string(), parent.to_string())
            .expect("recipe edges are acyclic");
    }
    graph
}

/// Expected layering of [`recipe_graph`], order within a layer arbitrary.
pub fn recipe_layers() -> Vec<Vec<String>> {
    [
        &["soil", "water"][..],
        &["grain"],
        &["chickens", "flour"],
        &["eggs"],
        &["cake"],
    ]
    .iter()
    .map(|layer| layer.iter().map(|s| s.to_string()).collect())
    .collect()
}
