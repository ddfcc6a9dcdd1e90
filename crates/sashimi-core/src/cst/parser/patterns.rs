//! Pattern productions
//!
//! The headline ambiguity: a bare identifier is a binding pattern when
//! its first character is lowercase by Unicode case mapping, a
//! constructor/extractor pattern when a dotted chain is immediately
//! followed by `(`, and a stable-identifier pattern otherwise. Typed
//! and alternative patterns are confirmed up front by
//! [`scan_pattern_shape`] before the simple pattern is committed.

use super::lookahead::{self, PatternShape};
use super::Parser;
use crate::cst::ScalaSyntaxKind;

impl Parser<'_> {
    /// Entry point for any pattern position
    pub(crate) fn parse_pattern(&mut self) {
        self.consume_trivia();
        if self.failed() {
            return;
        }

        match lookahead::scan_pattern_shape(self.tokens, self.pos) {
            PatternShape::Alternative => {
                self.builder.start_node(ScalaSyntaxKind::AlternativePattern);
                self.parse_simple_pattern();
                loop {
                    self.consume_trivia();
                    if self.at(ScalaSyntaxKind::Pipe) && !self.failed() {
                        self.bump();
                        self.consume_trivia_and_newlines();
                        self.parse_simple_pattern();
                    } else {
                        break;
                    }
                }
                self.builder.finish_node();
            }
            PatternShape::Typed => {
                self.builder.start_node(ScalaSyntaxKind::TypedPattern);
                self.parse_simple_pattern();
                self.consume_trivia();
                self.expect(ScalaSyntaxKind::Colon, "':'");
                // The arrow after the type belongs to the case clause,
                // so function types are out here
                self.parse_infix_type();
                self.builder.finish_node();
            }
            PatternShape::Neither => self.parse_simple_pattern(),
        }
    }

    fn parse_simple_pattern(&mut self) {
        self.consume_trivia();
        match self.current_kind() {
            ScalaSyntaxKind::Underscore => {
                self.builder.start_node(ScalaSyntaxKind::WildcardPattern);
                self.bump();
                self.builder.finish_node();
            }
            ScalaSyntaxKind::LParen => {
                self.builder.start_node(ScalaSyntaxKind::TuplePattern);
                self.bump();
                self.consume_trivia_and_newlines();
                if !self.at(ScalaSyntaxKind::RParen) {
                    self.parse_pattern();
                    self.consume_trivia_and_newlines();
                    while self.at(ScalaSyntaxKind::Comma) && !self.failed() {
                        self.bump();
                        self.consume_trivia_and_newlines();
                        self.parse_pattern();
                        self.consume_trivia_and_newlines();
                    }
                }
                self.expect(ScalaSyntaxKind::RParen, "')'");
                self.builder.finish_node();
            }
            // Negative numeric literal pattern
            ScalaSyntaxKind::OpIdent
                if self.current_text() == "-"
                    && matches!(
                        self.nth_kind(1),
                        ScalaSyntaxKind::IntLit | ScalaSyntaxKind::FloatLit
                    ) =>
            {
                self.builder.start_node(ScalaSyntaxKind::LiteralPattern);
                self.bump();
                self.consume_trivia();
                self.bump();
                self.builder.finish_node();
            }
            kind if kind.is_literal() => {
                self.builder.start_node(ScalaSyntaxKind::LiteralPattern);
                self.bump();
                self.builder.finish_node();
            }
            kind if kind.is_identifier() => self.parse_identifier_pattern(),
            _ => self.error("pattern"),
        }
    }

    /// Binding vs. constructor vs. stable identifier, plus `x @ pat`
    fn parse_identifier_pattern(&mut self) {
        // `name @ pattern` binds the whole sub-pattern
        if self.nth_kind(1) == ScalaSyntaxKind::At {
            self.builder.start_node(ScalaSyntaxKind::BindPattern);
            self.bump();
            self.consume_trivia();
            self.bump(); // @
            self.consume_trivia();
            self.parse_simple_pattern();
            self.builder.finish_node();
            return;
        }

        if lookahead::is_constructor_pattern(self.tokens, self.pos) {
            self.builder.start_node(ScalaSyntaxKind::ConstructorPattern);
            self.parse_stable_id();
            self.parse_pattern_arg_list();
            self.builder.finish_node();
            return;
        }

        let lowercase = lookahead::starts_lowercase(self.current_text());
        let dotted = self.nth_kind(1) == ScalaSyntaxKind::Dot;
        if lowercase && !dotted {
            self.builder.start_node(ScalaSyntaxKind::VariablePattern);
            self.bump();
            self.builder.finish_node();
        } else {
            self.builder.start_node(ScalaSyntaxKind::StableIdPattern);
            self.parse_stable_id();
            self.builder.finish_node();
        }
    }

    fn parse_stable_id(&mut self) {
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("identifier");
            return;
        }
        while self.nth_kind(0) == ScalaSyntaxKind::Dot && self.nth_kind(1).is_identifier() {
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            self.bump();
        }
    }

    fn parse_pattern_arg_list(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::PatternArgList);
        self.expect(ScalaSyntaxKind::LParen, "'('");
        self.consume_trivia_and_newlines();
        if !self.at(ScalaSyntaxKind::RParen) {
            self.parse_pattern();
            self.consume_trivia_and_newlines();
            while self.at(ScalaSyntaxKind::Comma) && !self.failed() {
                self.bump();
                self.consume_trivia_and_newlines();
                self.parse_pattern();
                self.consume_trivia_and_newlines();
            }
        }
        self.expect(ScalaSyntaxKind::RParen, "')'");
        self.builder.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::cst::ScalaSyntaxKind;
    use crate::cst::ScalaSyntaxNode;
    use crate::cst::parser::parse_source;

    fn parse_ok(source: &str) -> ScalaSyntaxNode {
        let parse = parse_source(source);
        assert!(parse.is_ok(), "{source}: {:?}", parse.errors);
        assert_eq!(parse.root.text().to_string(), source);
        parse.root
    }

    fn find(root: &ScalaSyntaxNode, kind: ScalaSyntaxKind) -> Option<ScalaSyntaxNode> {
        root.descendants().find(|n| n.kind() == kind)
    }

    #[test]
    fn test_tuple_pattern_in_case() {
        let root = parse_ok("x match { case (x, y) => 1 }");
        assert!(find(&root, ScalaSyntaxKind::TuplePattern).is_some());
    }

    #[test]
    fn test_constructor_pattern_in_case() {
        let root = parse_ok("x match { case Some(x) => 1 }");
        assert!(find(&root, ScalaSyntaxKind::ConstructorPattern).is_some());
    }

    #[test]
    fn test_typed_pattern_in_case() {
        let root = parse_ok("x match { case x: String => 1 }");
        assert!(find(&root, ScalaSyntaxKind::TypedPattern).is_some());
    }

    #[test]
    fn test_variable_vs_stable_identifier() {
        let root = parse_ok("x match { case n => n }");
        assert!(find(&root, ScalaSyntaxKind::VariablePattern).is_some());

        let root = parse_ok("x match { case North => 1 }");
        assert!(find(&root, ScalaSyntaxKind::StableIdPattern).is_some());
        assert!(find(&root, ScalaSyntaxKind::VariablePattern).is_none());
    }

    #[test]
    fn test_dotted_stable_identifier_pattern() {
        let root = parse_ok("x match { case math.Pi => 1 }");
        let node = find(&root, ScalaSyntaxKind::StableIdPattern).unwrap();
        assert_eq!(node.text().to_string(), "math.Pi");
    }

    #[test]
    fn test_alternative_pattern() {
        let root = parse_ok("x match { case 1 | 2 | 3 => y }");
        let alt = find(&root, ScalaSyntaxKind::AlternativePattern).unwrap();
        let literals = alt
            .descendants()
            .filter(|n| n.kind() == ScalaSyntaxKind::LiteralPattern)
            .count();
        assert_eq!(literals, 3);
    }

    #[test]
    fn test_bind_pattern() {
        let root = parse_ok("x match { case all @ Some(v) => all }");
        assert!(find(&root, ScalaSyntaxKind::BindPattern).is_some());
    }

    #[test]
    fn test_nested_typed_pattern_in_constructor() {
        let root = parse_ok("x match { case Pair(a: Int, b) => a }");
        let ctor = find(&root, ScalaSyntaxKind::ConstructorPattern).unwrap();
        assert!(
            ctor.descendants()
                .any(|n| n.kind() == ScalaSyntaxKind::TypedPattern)
        );
    }

    #[test]
    fn test_wildcard_and_literal_patterns() {
        let root = parse_ok("x match { case _ => 0 }");
        assert!(find(&root, ScalaSyntaxKind::WildcardPattern).is_some());

        let root = parse_ok("x match { case -1 => 0 }");
        assert!(find(&root, ScalaSyntaxKind::LiteralPattern).is_some());
    }
}
