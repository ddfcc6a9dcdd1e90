//! Line/column projection for CST nodes
//!
//! Spans are derived, not primary: a node's span is the minimal start
//! offset and maximal end offset over its descendant tokens, projected
//! to 1-indexed line/column through a line-start table built once per
//! input text. The pass is strictly additive; nodes with no reachable
//! tokens receive no location.

use std::collections::HashMap;

use serde::Serialize;

use super::ScalaSyntaxNode;

/// 1-indexed line/column position. Columns count characters, not
/// bytes, so Unicode identifiers land where an editor shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Byte offsets plus their line/column projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start_offset: usize,
    pub end_offset: usize,
    pub start: Position,
    pub end: Position,
}

/// Precomputed table of line-start offsets for one input text
pub struct LineIndex {
    line_starts: Vec<usize>,
    text: Box<str>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx + 1);
            }
        }
        Self {
            line_starts,
            text: text.into(),
        }
    }

    /// Project a byte offset to a 1-indexed position
    pub fn position(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset.min(self.text.len())]
            .chars()
            .count();
        Position {
            line: line as u32 + 1,
            column: column as u32 + 1,
        }
    }

    pub fn span(&self, start_offset: usize, end_offset: usize) -> Span {
        Span {
            start_offset,
            end_offset,
            start: self.position(start_offset),
            end: self.position(end_offset),
        }
    }
}

/// Span of one node, or `None` when the node covers no tokens
pub fn node_span(node: &ScalaSyntaxNode, index: &LineIndex) -> Option<Span> {
    let mut bounds: Option<(usize, usize)> = None;
    for token in node
        .descendants_with_tokens()
        .filter_map(|element| element.into_token())
    {
        let range = token.text_range();
        let (start, end) = (usize::from(range.start()), usize::from(range.end()));
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(start), max.max(end)),
            None => (start, end),
        });
    }
    bounds.map(|(start, end)| index.span(start, end))
}

/// Spans for every located node in one tree
pub struct LocationMap {
    spans: HashMap<ScalaSyntaxNode, Span>,
}

impl LocationMap {
    pub fn get(&self, node: &ScalaSyntaxNode) -> Option<&Span> {
        self.spans.get(node)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Annotate every composite node bottom-up. Children are never
/// mutated; the result is a side table keyed by node identity.
pub fn annotate(root: &ScalaSyntaxNode, index: &LineIndex) -> LocationMap {
    let mut spans = HashMap::new();
    for node in root.descendants() {
        if let Some(span) = node_span(&node, index) {
            spans.insert(node, span);
        }
    }
    LocationMap { spans }
}
