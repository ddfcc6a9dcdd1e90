//! Green-tree builder wrapper
//!
//! Thin wrapper over `rowan::GreenNodeBuilder` that speaks
//! `ScalaSyntaxKind` directly and exposes checkpoints, which the
//! expression grammar needs to wrap an already-built operand into an
//! infix/select/call node after the fact.

use rowan::{Checkpoint, GreenNodeBuilder};

use super::lexer::CstToken;
use super::{ScalaLanguage, ScalaSyntaxKind, ScalaSyntaxNode};

/// Builder for the lossless syntax tree
pub struct CstBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl CstBuilder {
    pub fn new() -> Self {
        Self {
            inner: GreenNodeBuilder::new(),
        }
    }

    pub fn start_node(&mut self, kind: ScalaSyntaxKind) {
        self.inner
            .start_node(<ScalaLanguage as rowan::Language>::kind_to_raw(kind));
    }

    pub fn finish_node(&mut self) {
        self.inner.finish_node();
    }

    /// Record a position so a node can later be wrapped around
    /// everything produced since.
    pub fn checkpoint(&self) -> Checkpoint {
        self.inner.checkpoint()
    }

    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: ScalaSyntaxKind) {
        self.inner
            .start_node_at(checkpoint, <ScalaLanguage as rowan::Language>::kind_to_raw(kind));
    }

    pub fn token(&mut self, kind: ScalaSyntaxKind, text: &str) {
        self.inner
            .token(<ScalaLanguage as rowan::Language>::kind_to_raw(kind), text);
    }

    pub fn add_token(&mut self, token: &CstToken) {
        self.token(token.kind, &token.text);
    }

    pub fn finish(self) -> ScalaSyntaxNode {
        ScalaSyntaxNode::new_root(self.inner.finish())
    }
}

impl Default for CstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_lossless_node() {
        let mut builder = CstBuilder::new();
        builder.start_node(ScalaSyntaxKind::SourceFile);
        builder.token(ScalaSyntaxKind::ValKw, "val");
        builder.token(ScalaSyntaxKind::Whitespace, " ");
        builder.token(ScalaSyntaxKind::Ident, "x");
        builder.finish_node();

        let root = builder.finish();
        assert_eq!(root.kind(), ScalaSyntaxKind::SourceFile);
        assert_eq!(root.text().to_string(), "val x");
    }

    #[test]
    fn test_checkpoint_wraps_retroactively() {
        let mut builder = CstBuilder::new();
        builder.start_node(ScalaSyntaxKind::SourceFile);
        let cp = builder.checkpoint();
        builder.token(ScalaSyntaxKind::Ident, "a");
        builder.start_node_at(cp, ScalaSyntaxKind::InfixExpr);
        builder.token(ScalaSyntaxKind::OpIdent, "+");
        builder.token(ScalaSyntaxKind::Ident, "b");
        builder.finish_node();
        builder.finish_node();

        let root = builder.finish();
        let infix = root.first_child().unwrap();
        assert_eq!(infix.kind(), ScalaSyntaxKind::InfixExpr);
        assert_eq!(infix.text().to_string(), "a+b");
    }
}
