//! Outline panel state and row adapter for the host tree view
//!
//! The panel never owns outline nodes; it maps the current `OutlineData` to
//! flattened rows and remembers collapse/selection/scroll state between
//! rebuilds. Collapse state is keyed by `(line, name)` so it survives a
//! refresh as long as the declaration does not move.

use std::collections::HashSet;

use serde::Serialize;

use crate::outline::{OutlineKind, OutlineNode};

/// Stable identity of a node across rebuilds
pub type NodeKey = (usize, String);

/// One visible row of the outline tree view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineRow {
    pub depth: usize,
    pub name: String,
    pub kind: OutlineKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub line: usize,
    pub collapsible: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlinePanelState {
    /// Nodes whose state differs from `collapse_by_default`
    toggled: HashSet<NodeKey>,
    pub collapse_by_default: bool,
    pub selected_index: Option<usize>,
    pub scroll_offset: usize,
    /// Rows the host can show at once
    pub visible_capacity: usize,
}

impl Default for OutlinePanelState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutlinePanelState {
    pub fn new(collapse_by_default: bool) -> Self {
        Self {
            toggled: HashSet::new(),
            collapse_by_default,
            selected_index: None,
            scroll_offset: 0,
            visible_capacity: 0,
        }
    }

    /// Forget collapse, selection and scroll state, as for a newly activated document
    pub fn reset(&mut self) {
        self.toggled.clear();
        self.selected_index = None;
        self.scroll_offset = 0;
    }

    /// Drop collapse state for nodes that no longer exist in `nodes`
    pub fn retain_present(&mut self, nodes: &[OutlineNode]) {
        if self.toggled.is_empty() {
            return;
        }
        let mut present = HashSet::new();
        collect_keys(nodes, &mut present);
        self.toggled.retain(|key| present.contains(key));
    }

    pub fn node_key(node: &OutlineNode) -> NodeKey {
        (node.line, node.name.clone())
    }

    pub fn is_collapsed(&self, node: &OutlineNode) -> bool {
        node.is_collapsible()
            && (self.collapse_by_default != self.toggled.contains(&Self::node_key(node)))
    }

    pub fn toggle_collapsed(&mut self, node: &OutlineNode) {
        let key = Self::node_key(node);
        if !self.toggled.remove(&key) {
            self.toggled.insert(key);
        }
    }

    pub fn set_collapsed(&mut self, node: &OutlineNode, collapsed: bool) {
        let key = Self::node_key(node);
        if collapsed == self.collapse_by_default {
            self.toggled.remove(&key);
        } else {
            self.toggled.insert(key);
        }
    }

    /// Children the host should show under `node` (empty when collapsed)
    pub fn children_of<'a>(&self, node: &'a OutlineNode) -> &'a [OutlineNode] {
        if self.is_collapsed(node) {
            &[]
        } else {
            &node.children
        }
    }

    /// Count total visible items in the outline tree (for navigation bounds)
    pub fn visible_count(&self, nodes: &[OutlineNode]) -> usize {
        nodes
            .iter()
            .map(|node| 1 + self.visible_count(self.children_of(node)))
            .sum()
    }

    /// Get the node at a given flattened visible index
    pub fn node_at<'a>(&self, nodes: &'a [OutlineNode], target: usize) -> Option<&'a OutlineNode> {
        let mut current = 0;
        self.node_at_inner(nodes, target, &mut current)
    }

    fn node_at_inner<'a>(
        &self,
        nodes: &'a [OutlineNode],
        target: usize,
        current: &mut usize,
    ) -> Option<&'a OutlineNode> {
        for node in nodes {
            if *current == target {
                return Some(node);
            }
            *current += 1;
            if let Some(found) = self.node_at_inner(self.children_of(node), target, current) {
                return Some(found);
            }
        }
        None
    }

    /// Flatten the visible part of the tree in display order
    pub fn rows(&self, nodes: &[OutlineNode]) -> Vec<OutlineRow> {
        let mut rows = Vec::new();
        self.collect_rows(nodes, 0, &mut rows);
        rows
    }

    fn collect_rows(&self, nodes: &[OutlineNode], depth: usize, rows: &mut Vec<OutlineRow>) {
        for node in nodes {
            let collapsed = self.is_collapsed(node);
            rows.push(OutlineRow {
                depth,
                name: node.name.clone(),
                kind: node.kind,
                label: node.kind.label(),
                icon: node.kind.icon(),
                line: node.line,
                collapsible: node.is_collapsible(),
                expanded: node.is_collapsible() && !collapsed,
            });
            self.collect_rows(self.children_of(node), depth + 1, rows);
        }
    }

    /// Keep selection and scroll inside `total` visible rows
    pub fn clamp_to(&mut self, total: usize) {
        if total == 0 {
            self.selected_index = None;
            self.scroll_offset = 0;
            return;
        }
        if let Some(idx) = self.selected_index {
            self.selected_index = Some(idx.min(total - 1));
        }
        self.scroll_offset = self
            .scroll_offset
            .min(total.saturating_sub(self.visible_capacity.max(1)));
    }
}

fn collect_keys(nodes: &[OutlineNode], keys: &mut HashSet<NodeKey>) {
    for node in nodes {
        if node.is_collapsible() {
            keys.insert(OutlinePanelState::node_key(node));
            collect_keys(&node.children, keys);
        }
    }
}
