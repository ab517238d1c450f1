#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a fresh temporary `.toml` file.
///
/// The file is deleted when the returned handle is dropped.
pub fn graph_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp graph file");
    write!(file, "{contents}").expect("write temp graph file");
    file
}

pub const RECIPE_TOML: &str = r#"
[config]
layer_order = "sorted"

[node.cake]
after = ["eggs", "flour"]
description = "what we are baking"

[node.eggs]
after = ["chickens"]

[node.flour]
after = ["grain"]

[node.chickens]
after = ["grain", "water"]

[node.grain]
after = ["soil", "water"]

[node.soil]

[node.water]
"#;
