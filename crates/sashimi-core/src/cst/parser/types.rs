//! Type productions
//!
//! The type grammar overlaps on its first token: `(Int, Int)` opens
//! both a tuple type and a function-type parameter list, and a bracket
//! clause opens both a polymorphic function type and a type lambda.
//! [`scan_type_shape`] and [`bracket_clause_arrow`] decide the
//! production before anything is committed to the tree.

use super::lookahead::{self, TypeShape};
use super::Parser;
use crate::cst::ScalaSyntaxKind;

impl Parser<'_> {
    /// Entry point for any type position
    pub(crate) fn parse_type(&mut self) {
        self.consume_trivia();
        if self.failed() {
            return;
        }

        // By-name types only occur where the arrow is the first token
        if self.at(ScalaSyntaxKind::Arrow) {
            self.builder.start_node(ScalaSyntaxKind::ByNameType);
            self.bump();
            self.parse_type();
            self.builder.finish_node();
            return;
        }

        // `[X] =>> F[X]` vs `[A] => List[A] => A`
        if let Some(arrow) = lookahead::bracket_clause_arrow(self.tokens, self.pos) {
            let kind = if arrow == ScalaSyntaxKind::TypeLambdaArrow {
                ScalaSyntaxKind::TypeLambda
            } else {
                ScalaSyntaxKind::PolyFunctionType
            };
            self.builder.start_node(kind);
            self.parse_type_param_clause();
            self.consume_trivia();
            self.expect(arrow, "type arrow");
            self.parse_type();
            self.builder.finish_node();
            return;
        }

        match lookahead::scan_type_shape(self.tokens, self.pos) {
            TypeShape::Function => self.parse_function_type(ScalaSyntaxKind::FunctionType),
            TypeShape::ContextFunction => {
                self.parse_function_type(ScalaSyntaxKind::ContextFunctionType)
            }
            TypeShape::Simple => self.parse_infix_type(),
        }
    }

    /// `T => R`, `(A, B) => R`, `Ctx ?=> R`; right-associative
    fn parse_function_type(&mut self, kind: ScalaSyntaxKind) {
        self.builder.start_node(kind);
        self.parse_infix_type();
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::Arrow) || self.at(ScalaSyntaxKind::CtxArrow) {
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_type();
        } else {
            self.error("'=>' or '?=>'");
        }
        self.builder.finish_node();
    }

    /// `A | B`, `A & B`, `Key Map Value` — operators left-associative.
    /// Also the entry used from pattern positions, where an arrow after
    /// the type belongs to the enclosing case clause and a function
    /// type must be parenthesized.
    pub(crate) fn parse_infix_type(&mut self) {
        let cp = self.builder.checkpoint();
        self.parse_simple_type();

        while !self.failed() {
            if self.newline_before_next() {
                break;
            }
            if !self.nth_kind(0).is_infix_operator() {
                break;
            }
            self.consume_trivia();
            self.builder.start_node_at(cp, ScalaSyntaxKind::InfixType);
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_simple_type();
            self.builder.finish_node();
        }
    }

    /// Atomic types: named (possibly dotted and applied), tuple,
    /// wildcard.
    fn parse_simple_type(&mut self) {
        self.consume_trivia();
        match self.current_kind() {
            ScalaSyntaxKind::LParen => {
                self.builder.start_node(ScalaSyntaxKind::TupleType);
                self.bump();
                self.consume_trivia_and_newlines();
                if !self.at(ScalaSyntaxKind::RParen) {
                    self.parse_type();
                    self.consume_trivia_and_newlines();
                    while self.at(ScalaSyntaxKind::Comma) && !self.failed() {
                        self.bump();
                        self.consume_trivia_and_newlines();
                        self.parse_type();
                        self.consume_trivia_and_newlines();
                    }
                }
                self.expect(ScalaSyntaxKind::RParen, "')'");
                self.builder.finish_node();
            }
            ScalaSyntaxKind::Underscore => {
                self.builder.start_node(ScalaSyntaxKind::WildcardType);
                self.bump();
                self.parse_optional_bounds();
                self.builder.finish_node();
            }
            ScalaSyntaxKind::OpIdent if self.current_text() == "?" => {
                self.builder.start_node(ScalaSyntaxKind::WildcardType);
                self.bump();
                self.parse_optional_bounds();
                self.builder.finish_node();
            }
            kind if kind.is_identifier() || kind == ScalaSyntaxKind::ThisKw => {
                let cp = self.builder.checkpoint();
                self.builder.start_node(ScalaSyntaxKind::SimpleType);
                self.bump();
                while self.nth_kind(0) == ScalaSyntaxKind::Dot
                    && self.nth_kind(1).is_identifier()
                {
                    self.consume_trivia();
                    self.bump();
                    self.consume_trivia();
                    self.bump();
                }
                self.builder.finish_node();

                // `List[Int]`, `Map[K, V]`
                if self.at(ScalaSyntaxKind::LBracket) {
                    self.builder.start_node_at(cp, ScalaSyntaxKind::AppliedType);
                    self.parse_type_arg_list();
                    self.builder.finish_node();
                }
            }
            _ => self.error("type"),
        }
    }

    /// `<: Upper`, `>: Lower`, in either order
    fn parse_optional_bounds(&mut self) {
        loop {
            self.consume_trivia();
            if self.at(ScalaSyntaxKind::Subtype) || self.at(ScalaSyntaxKind::Supertype) {
                self.bump();
                self.parse_type();
            } else {
                break;
            }
        }
    }

    /// `[T, U]` in an application position
    pub(crate) fn parse_type_arg_list(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::TypeArgList);
        self.expect(ScalaSyntaxKind::LBracket, "'['");
        self.consume_trivia_and_newlines();
        if !self.at(ScalaSyntaxKind::RBracket) {
            self.parse_type();
            self.consume_trivia_and_newlines();
            while self.at(ScalaSyntaxKind::Comma) && !self.failed() {
                self.bump();
                self.consume_trivia_and_newlines();
                self.parse_type();
                self.consume_trivia_and_newlines();
            }
        }
        self.expect(ScalaSyntaxKind::RBracket, "']'");
        self.builder.finish_node();
    }

    /// `[A]`, `[+T <: Bound]`, `[F[_], A: Ordering]` in a declaration
    /// position
    pub(crate) fn parse_type_param_clause(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::TypeParamClause);
        self.expect(ScalaSyntaxKind::LBracket, "'['");
        self.consume_trivia_and_newlines();
        while !self.at(ScalaSyntaxKind::RBracket) && !self.at_end() && !self.failed() {
            self.parse_type_param();
            self.consume_trivia_and_newlines();
            if self.at(ScalaSyntaxKind::Comma) {
                self.bump();
                self.consume_trivia_and_newlines();
            } else {
                break;
            }
        }
        self.expect(ScalaSyntaxKind::RBracket, "']'");
        self.builder.finish_node();
    }

    fn parse_type_param(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::TypeParam);
        self.consume_trivia();
        // Variance annotation
        if self.at(ScalaSyntaxKind::OpIdent)
            && matches!(self.current_text(), "+" | "-")
        {
            self.bump();
            self.consume_trivia();
        }
        if self.current_kind().is_identifier() || self.at(ScalaSyntaxKind::Underscore) {
            self.bump();
        } else {
            self.error("type parameter name");
            self.builder.finish_node();
            return;
        }
        self.consume_trivia();
        // Higher-kinded parameter, e.g. `F[_]`
        if self.at(ScalaSyntaxKind::LBracket) {
            self.parse_type_param_clause();
            self.consume_trivia();
        }
        self.parse_optional_bounds();
        self.consume_trivia();
        // Context bound
        if self.at(ScalaSyntaxKind::Colon) {
            self.bump();
            self.parse_type();
        }
        self.builder.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::cst::ScalaSyntaxKind;
    use crate::cst::parser::parse_source;
    use crate::cst::ScalaSyntaxNode;

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
    fn test_simple_and_applied_types() {
        let root = parse_ok("val x: List[Int] = y");
        assert!(find(&root, ScalaSyntaxKind::AppliedType).is_some());
        assert!(find(&root, ScalaSyntaxKind::TypeArgList).is_some());
    }

    #[test]
    fn test_function_type() {
        let root = parse_ok("val f: Int => String = g");
        let node = find(&root, ScalaSyntaxKind::FunctionType).unwrap();
        assert_eq!(node.text().to_string(), "Int => String");
    }

    #[test]
    fn test_context_function_type() {
        let root = parse_ok("val f: Ctx ?=> String = g");
        assert!(find(&root, ScalaSyntaxKind::ContextFunctionType).is_some());
    }

    #[test]
    fn test_tuple_param_function_type() {
        let root = parse_ok("val f: (Int, Int) => Int = g");
        assert!(find(&root, ScalaSyntaxKind::FunctionType).is_some());
        assert!(find(&root, ScalaSyntaxKind::TupleType).is_some());
    }

    #[test]
    fn test_union_and_intersection_types() {
        let root = parse_ok("val x: Int | String = y");
        assert!(find(&root, ScalaSyntaxKind::InfixType).is_some());
        let root = parse_ok("val x: A & B = y");
        assert!(find(&root, ScalaSyntaxKind::InfixType).is_some());
    }

    #[test]
    fn test_type_lambda() {
        let root = parse_ok("type M = [X] =>> Map[X, X]");
        assert!(find(&root, ScalaSyntaxKind::TypeLambda).is_some());
    }

    #[test]
    fn test_poly_function_type() {
        let root = parse_ok("val f: [A] => List[A] => A = g");
        assert!(find(&root, ScalaSyntaxKind::PolyFunctionType).is_some());
    }

    #[test]
    fn test_dotted_type_path() {
        let root = parse_ok("val x: scala.collection.Seq[Int] = y");
        let simple = find(&root, ScalaSyntaxKind::SimpleType).unwrap();
        assert!(simple.text().to_string().contains("scala.collection.Seq"));
    }
}
