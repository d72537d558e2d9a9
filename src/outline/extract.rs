//! Outline extraction from plain source lines
//!
//! One pass over the lines: classify each line, attach the node to the
//! innermost open scope (or the root list), then let the line's braces or
//! indentation close scopes. Runs synchronously on the caller's thread.

use super::classify::{first_non_whitespace, LineClassifier};
use super::{LineSource, OutlineData, OutlineNode, OutlineStats};
use crate::config::{DuplicatePolicy, NestingStrategy, OutlineConfig};

/// Extract outline from a document snapshot using the given configuration
pub fn extract_outline<S>(source: &S, config: &OutlineConfig, revision: u64) -> OutlineData
where
    S: LineSource + ?Sized,
{
    OutlineBuilder::from_config(config).build_source(source, revision)
}

/// Classifier plus nesting and duplicate policies for one kind of document
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    classifier: LineClassifier,
    nesting: NestingStrategy,
    duplicates: DuplicatePolicy,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &OutlineConfig) -> Self {
        Self {
            classifier: LineClassifier::new(config.column),
            nesting: config.nesting,
            duplicates: config.duplicates,
        }
    }

    pub fn with_classifier(mut self, classifier: LineClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_nesting(mut self, nesting: NestingStrategy) -> Self {
        self.nesting = nesting;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Build an outline from a line sequence (revision 0)
    pub fn build<I, S>(&self, lines: I) -> OutlineData
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_lines(lines, 0)
    }

    /// Build an outline for a document snapshot
    pub fn build_source<S>(&self, source: &S, revision: u64) -> OutlineData
    where
        S: LineSource + ?Sized,
    {
        self.build_lines(source.iter_lines(), revision)
    }

    fn build_lines<I, S>(&self, lines: I, revision: u64) -> OutlineData
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roots: Vec<OutlineNode> = Vec::new();
        let mut stack = NestingStack::default();
        let mut stats = OutlineStats::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            stats.lines_scanned += 1;

            let depth_before = stack.depth;
            if let Some(found) = self.classifier.classify(line) {
                let node = OutlineNode::new(found.kind, found.name, idx, found.column);
                let siblings = stack.siblings_mut(&mut roots);

                if self.duplicates == DuplicatePolicy::DropRepeated
                    && siblings.iter().any(|n| n.name == node.name)
                {
                    tracing::trace!(line = idx, name = %node.name, "dropping repeated sibling");
                    stats.duplicates_dropped += 1;
                } else {
                    stats.nodes += 1;
                    if node.kind.is_scope() {
                        let anchor = match self.nesting {
                            NestingStrategy::BraceDepth => depth_before,
                            NestingStrategy::Indentation => first_non_whitespace(line) as isize,
                        };
                        stack.push(node, anchor);
                    } else {
                        siblings.push(node);
                    }
                }
            }

            match self.nesting {
                NestingStrategy::BraceDepth => {
                    stack.depth += brace_delta(line);
                    stack.close_to_depth(&mut roots);
                }
                NestingStrategy::Indentation => {
                    if line.contains('}') {
                        stack.close_at_indent(first_non_whitespace(line) as isize, &mut roots);
                    }
                }
            }
        }

        stats.unclosed_scopes = stack.len();
        stack.flush(&mut roots);

        tracing::debug!(
            revision,
            lines = stats.lines_scanned,
            nodes = stats.nodes,
            dropped = stats.duplicates_dropped,
            unclosed = stats.unclosed_scopes,
            "outline extracted"
        );

        OutlineData {
            revision,
            roots,
            stats,
        }
    }
}

/// Net `{` minus `}` on a line
fn brace_delta(line: &str) -> isize {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// A scope-introducing node that is still collecting children.
///
/// `anchor` is the brace depth before its declaring line (brace strategy) or
/// the declaring line's indentation (indentation strategy).
#[derive(Debug)]
struct OpenScope {
    node: OutlineNode,
    anchor: isize,
}

/// Open scopes for one build, innermost last
#[derive(Debug, Default)]
struct NestingStack {
    open: Vec<OpenScope>,
    depth: isize,
}

impl NestingStack {
    fn len(&self) -> usize {
        self.open.len()
    }

    fn push(&mut self, node: OutlineNode, anchor: isize) {
        self.open.push(OpenScope { node, anchor });
    }

    /// Children of the innermost open scope, or the root list
    fn siblings_mut<'a>(&'a mut self, roots: &'a mut Vec<OutlineNode>) -> &'a mut Vec<OutlineNode> {
        match self.open.last_mut() {
            Some(top) => &mut top.node.children,
            None => roots,
        }
    }

    fn pop_into(&mut self, roots: &mut Vec<OutlineNode>) {
        if let Some(finished) = self.open.pop() {
            self.siblings_mut(roots).push(finished.node);
        }
    }

    /// Close every scope whose opening depth has been reached again
    fn close_to_depth(&mut self, roots: &mut Vec<OutlineNode>) {
        while self.open.last().is_some_and(|top| top.anchor >= self.depth) {
            self.pop_into(roots);
        }
    }

    /// Close the innermost scope when a `}` line lines up with its declaration
    fn close_at_indent(&mut self, indent: isize, roots: &mut Vec<OutlineNode>) {
        if self.open.last().is_some_and(|top| top.anchor == indent) {
            self.pop_into(roots);
        }
    }

    /// Attach any scopes left open at end of document
    fn flush(&mut self, roots: &mut Vec<OutlineNode>) {
        while !self.open.is_empty() {
            self.pop_into(roots);
        }
    }
}
