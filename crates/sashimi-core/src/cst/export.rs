//! Serializable CST export
//!
//! Mirrors the node shape of the external interface: a production
//! name, an ordered list of children (tokens and nodes interleaved in
//! source order), and an optional location. Children are an ordered
//! list rather than a role-keyed map, so consumers never reconstruct
//! argument grouping from sibling counts.

use serde::Serialize;

use super::location::{LineIndex, Span, node_span};
use super::{ScalaSyntaxNode, ScalaSyntaxToken};

#[derive(Debug, Clone, Serialize)]
pub struct ExportNode {
    pub name: String,
    pub children: Vec<ExportChild>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ExportChild {
    Node(ExportNode),
    Token(ExportToken),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportToken {
    pub kind: String,
    pub image: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Export a parsed tree. The caller builds the `LineIndex` from the
/// same source text the tree was parsed from.
pub fn export_tree(root: &ScalaSyntaxNode, index: &LineIndex) -> ExportNode {
    export_node(root, index)
}

fn export_node(node: &ScalaSyntaxNode, index: &LineIndex) -> ExportNode {
    let children = node
        .children_with_tokens()
        .map(|child| match child {
            rowan::NodeOrToken::Node(node) => ExportChild::Node(export_node(&node, index)),
            rowan::NodeOrToken::Token(token) => ExportChild::Token(export_token(&token)),
        })
        .collect();

    ExportNode {
        name: format!("{:?}", node.kind()),
        children,
        location: node_span(node, index),
    }
}

fn export_token(token: &ScalaSyntaxToken) -> ExportToken {
    let range = token.text_range();
    ExportToken {
        kind: format!("{:?}", token.kind()),
        image: token.text().to_string(),
        start_offset: range.start().into(),
        end_offset: range.end().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::parser::parse_source;

    fn export(source: &str) -> ExportNode {
        let parse = parse_source(source);
        assert!(parse.is_ok(), "{:?}", parse.errors);
        let index = LineIndex::new(source);
        export_tree(&parse.root, &index)
    }

    fn images(node: &ExportNode, out: &mut String) {
        for child in &node.children {
            match child {
                ExportChild::Node(n) => images(n, out),
                ExportChild::Token(t) => out.push_str(&t.image),
            }
        }
    }

    #[test]
    fn test_export_concatenates_back_to_source() {
        let source = "class Person(name: String) {\n  def greet(): Unit = ()\n}";
        let tree = export(source);
        let mut rebuilt = String::new();
        images(&tree, &mut rebuilt);
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_export_shape() {
        let tree = export("val x = 42");
        assert_eq!(tree.name, "SourceFile");
        assert!(tree.location.is_some());
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["name"], "SourceFile");
        assert!(json["children"].is_array());
        assert!(json["location"]["start"]["line"].is_number());
    }

    #[test]
    fn test_token_offsets_in_export() {
        let tree = export("val x = 42");
        let ExportChild::Node(val) = &tree.children[0] else {
            panic!("expected node child");
        };
        assert_eq!(val.name, "ValDef");
        let ExportChild::Token(first) = &val.children[0] else {
            panic!("expected token child");
        };
        assert_eq!(first.image, "val");
        assert_eq!(first.start_offset, 0);
        assert_eq!(first.end_offset, 3);
    }
}
