mod common;

use layergraph::config::{load_and_validate, load_from_path};
use layergraph::errors::{GraphError, LayergraphError};
use layergraph::graph::layers_equivalent;
use layergraph::types::LayerOrder;
use layergraph_test_utils::{init_tracing, recipe_layers};

use common::{RECIPE_TOML, graph_file};

#[test]
fn test_recipe_file_loads_and_layers() {
    init_tracing();
    let file = graph_file(RECIPE_TOML);

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.config.layer_order, LayerOrder::Sorted);
    assert_eq!(cfg.description_of("cake"), Some("what we are baking"));
    assert_eq!(cfg.description_of("soil"), None);

    let graph = cfg.build_graph().unwrap();
    assert_eq!(graph.len(), 7);
    assert_eq!(graph.edge_count(), 8);
    assert!(layers_equivalent(&graph.topo_sorted_layers(), &recipe_layers()));
}

#[test]
fn test_layer_order_defaults_to_insertion() {
    let file = graph_file(
        r#"
[node.a]
after = ["b"]

[node.b]
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.config.layer_order, LayerOrder::Insertion);
}

#[test]
fn test_dag_cycle_returns_structured_error() {
    let file = graph_file(
        r#"
[node.A]
after = ["B"]

[node.B]
after = ["C"]

[node.C]
after = ["A"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(LayergraphError::Graph(GraphError::CircularDependency { child, parent })) => {
            assert_ne!(child, parent);
            assert!(["A", "B", "C"].contains(&child.as_str()));
        }
        Err(e) => panic!("Expected CircularDependency error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_self_dependency_returns_structured_error() {
    let file = graph_file(
        r#"
[node.A]
after = ["A"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(LayergraphError::Graph(GraphError::SelfDependency { node })) => {
            assert_eq!(node, "A");
        }
        Err(e) => panic!("Expected SelfDependency error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_dependency_returns_config_error() {
    let file = graph_file(
        r#"
[node.A]
after = ["NonExistent"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(LayergraphError::ConfigError(msg)) => {
            assert!(msg.contains("unknown dependency"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_invalid_layer_order_is_a_toml_error() {
    let file = graph_file(
        r#"
[config]
layer_order = "random"

[node.A]
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(LayergraphError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("Layergraph.toml");

    assert!(matches!(
        load_from_path(&missing),
        Err(LayergraphError::IoError(_))
    ));
}

#[test]
fn test_raw_load_skips_semantic_checks() {
    let file = graph_file(
        r#"
[node.A]
after = ["A"]
"#,
    );

    let raw = load_from_path(file.path()).unwrap();
    assert_eq!(raw.node["A"].after, vec!["A".to_string()]);
}
