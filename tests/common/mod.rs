//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use outliner::config::OutlineConfig;
use outliner::model::{AppModel, Document};
use outliner::outline::{OutlineData, OutlineKind, OutlineNode};

/// TypeScript sample with classes, members, enums and nested functions
pub const SAMPLE_TS: &str = include_str!("../../samples/outline_sample.ts");

/// Create a test model with the given text as the active document
pub fn test_model(text: &str) -> AppModel {
    test_model_with_config(text, OutlineConfig::default())
}

pub fn test_model_with_config(text: &str, config: OutlineConfig) -> AppModel {
    AppModel::with_document(config, Document::with_text(text))
}

/// Config with synchronous refresh so edits rebuild immediately
pub fn sync_config() -> OutlineConfig {
    OutlineConfig {
        debounce_ms: 0,
        ..OutlineConfig::default()
    }
}

/// Config with every node starting expanded
pub fn expanded_config() -> OutlineConfig {
    OutlineConfig {
        collapse_by_default: false,
        ..OutlineConfig::default()
    }
}

/// Names of a node list, in order
pub fn names(nodes: &[OutlineNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.name.as_str()).collect()
}

/// Depth-first `(depth, kind, name)` listing of a whole outline
pub fn flatten(data: &OutlineData) -> Vec<(usize, OutlineKind, String)> {
    fn walk(nodes: &[OutlineNode], depth: usize, out: &mut Vec<(usize, OutlineKind, String)>) {
        for node in nodes {
            out.push((depth, node.kind, node.name.clone()));
            walk(&node.children, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(&data.roots, 0, &mut out);
    out
}

/// Visit every node of a tree
pub fn for_each_node(nodes: &[OutlineNode], f: &mut impl FnMut(&OutlineNode)) {
    for node in nodes {
        f(node);
        for_each_node(&node.children, f);
    }
}
