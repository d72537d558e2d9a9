//! Code outline extraction
//!
//! Provides structural symbol extraction from plain source lines: each line is
//! classified by an ordered list of pattern rules, and nesting is inferred from
//! brace depth or indentation. Used by the outline panel to show a collapsible
//! tree of document symbols and to jump the caret to a declaration.
//!
//! ## Pipeline
//!
//! ```text
//! lines → LineClassifier::classify (per line)
//!       → OutlineBuilder (nesting stack, one pass)
//!       → OutlineData { revision, roots, stats }
//!       → navigate::resolve(node, source) → OutlinePosition
//! ```
//!
//! Extraction is best-effort: it never fails, it only produces a smaller or
//! slightly wrong outline on noisy input.

mod classify;
mod extract;
pub mod navigate;
mod source;

use serde::Serialize;

pub use classify::{classify, Classified, LineClassifier, RuleMatch, RuleMatcher};
pub use extract::{extract_outline, OutlineBuilder};
pub use navigate::resolve;
pub use source::LineSource;

/// Symbol kind for display and categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineKind {
    /// `class`, `module` or `namespace`
    Class,
    Function,
    Variable,
    /// Class member or object key (`name: T`, `name = value`)
    Attribute,
    Enum,
    /// `type` aliases and `interface` declarations
    TypeAlias,
    Event,
}

impl OutlineKind {
    /// Short label for rendering in the outline tree
    pub fn label(&self) -> &'static str {
        match self {
            OutlineKind::Class => "class",
            OutlineKind::Function => "fn",
            OutlineKind::Variable => "var",
            OutlineKind::Attribute => "prop",
            OutlineKind::Enum => "enum",
            OutlineKind::TypeAlias => "type",
            OutlineKind::Event => "event",
        }
    }

    /// Icon id understood by the host tree view
    pub fn icon(&self) -> &'static str {
        match self {
            OutlineKind::Class => "symbol-module",
            OutlineKind::Function => "symbol-method",
            OutlineKind::Variable => "symbol-variable",
            OutlineKind::Attribute => "symbol-key",
            OutlineKind::Enum => "symbol-enum",
            OutlineKind::TypeAlias => "symbol-value",
            OutlineKind::Event => "symbol-event",
        }
    }

    /// Whether declarations of this kind open a scope that can hold children.
    ///
    /// Only scope kinds are pushed onto the nesting stack, so every other kind
    /// is always a leaf.
    pub fn is_scope(&self) -> bool {
        matches!(self, OutlineKind::Class | OutlineKind::Function)
    }
}

/// A caret position in the document (line/column are 0-based, column in chars)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OutlinePosition {
    pub line: usize,
    pub column: usize,
}

impl OutlinePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A single node in the outline tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub kind: OutlineKind,
    pub name: String,
    /// Line of the declaration
    pub line: usize,
    /// Navigation column within `line`; `None` lands at the start of the line
    pub column: Option<usize>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(kind: OutlineKind, name: impl Into<String>, line: usize, column: Option<usize>) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
            column,
            children: Vec::new(),
        }
    }

    /// Whether this node has children (can be expanded/collapsed)
    pub fn is_collapsible(&self) -> bool {
        self.kind.is_scope() && !self.children.is_empty()
    }

    /// Stored navigation target, unclamped
    pub fn position(&self) -> OutlinePosition {
        OutlinePosition::new(self.line, self.column.unwrap_or(0))
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::subtree_len).sum::<usize>()
    }
}

/// Counters collected during one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutlineStats {
    /// Lines fed to the classifier
    pub lines_scanned: usize,
    /// Nodes placed in the tree at any depth
    pub nodes: usize,
    /// Nodes rejected by the duplicate-name policy
    pub duplicates_dropped: usize,
    /// Scopes still open at end of document
    pub unclosed_scopes: usize,
}

/// Complete outline for a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineData {
    pub revision: u64,
    pub roots: Vec<OutlineNode>,
    pub stats: OutlineStats,
}

impl OutlineData {
    /// Create an empty outline
    pub fn empty(revision: u64) -> Self {
        Self {
            revision,
            roots: Vec::new(),
            stats: OutlineStats::default(),
        }
    }

    /// Check if the outline has any symbols
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(OutlineNode::subtree_len).sum()
    }

    /// Find a node by its declaring line and name (depth-first)
    pub fn find(&self, line: usize, name: &str) -> Option<&OutlineNode> {
        fn find_in<'a>(nodes: &'a [OutlineNode], line: usize, name: &str) -> Option<&'a OutlineNode> {
            for node in nodes {
                if node.line == line && node.name == name {
                    return Some(node);
                }
                if let Some(found) = find_in(&node.children, line, name) {
                    return Some(found);
                }
            }
            None
        }
        find_in(&self.roots, line, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_kinds() {
        assert!(OutlineKind::Class.is_scope());
        assert!(OutlineKind::Function.is_scope());
        assert!(!OutlineKind::Variable.is_scope());
        assert!(!OutlineKind::Attribute.is_scope());
        assert!(!OutlineKind::Enum.is_scope());
        assert!(!OutlineKind::TypeAlias.is_scope());
        assert!(!OutlineKind::Event.is_scope());
    }

    #[test]
    fn test_position_falls_back_to_line_start() {
        let node = OutlineNode::new(OutlineKind::Variable, "x", 4, None);
        assert_eq!(node.position(), OutlinePosition::new(4, 0));
    }

    #[test]
    fn test_leaf_with_no_children_is_not_collapsible() {
        let mut class = OutlineNode::new(OutlineKind::Class, "Foo", 0, Some(0));
        assert!(!class.is_collapsible());
        class
            .children
            .push(OutlineNode::new(OutlineKind::Function, "bar", 1, Some(2)));
        assert!(class.is_collapsible());
        assert_eq!(class.subtree_len(), 2);
    }

    #[test]
    fn test_find_nested_node() {
        let mut class = OutlineNode::new(OutlineKind::Class, "Foo", 0, Some(0));
        class
            .children
            .push(OutlineNode::new(OutlineKind::Function, "bar", 1, Some(2)));
        let data = OutlineData {
            revision: 3,
            roots: vec![class],
            stats: OutlineStats::default(),
        };

        assert_eq!(data.node_count(), 2);
        assert_eq!(data.find(1, "bar").map(|n| n.kind), Some(OutlineKind::Function));
        assert!(data.find(1, "Foo").is_none());
    }
}
