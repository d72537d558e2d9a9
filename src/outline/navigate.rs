//! Jump-to-symbol position resolution

use super::{LineSource, OutlineNode, OutlinePosition};

/// Resolve a node to a caret position inside `source`.
///
/// The stored position is clamped to the current document bounds, so a node
/// from a stale outline still lands somewhere valid. No check is made that the
/// declaration is still there.
pub fn resolve<S>(node: &OutlineNode, source: &S) -> OutlinePosition
where
    S: LineSource + ?Sized,
{
    clamp(node.position(), source)
}

/// Clamp an arbitrary position to `source` (empty source → `0:0`)
pub fn clamp<S>(position: OutlinePosition, source: &S) -> OutlinePosition
where
    S: LineSource + ?Sized,
{
    let line_count = source.line_count();
    if line_count == 0 {
        return OutlinePosition::default();
    }

    let line = position.line.min(line_count - 1);
    let column = position.column.min(source.line_len(line));
    OutlinePosition::new(line, column)
}
