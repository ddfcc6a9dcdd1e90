//! Expression productions
//!
//! This is the ambiguity-heavy core. Lambdas are gated by
//! [`is_lambda_start`] before anything else is tried, postfix chains
//! (selection, type application, calls) are wrapped retroactively via
//! builder checkpoints, and infix expressions are left-associated by
//! re-wrapping the same checkpoint. A newline before the next
//! significant token ends the expression unless the next line continues
//! a selection chain with `.`.

use super::lookahead;
use super::Parser;
use crate::cst::ScalaSyntaxKind;

impl Parser<'_> {
    /// Entry point for any expression position
    pub(crate) fn parse_expression(&mut self) {
        self.consume_trivia();
        if self.failed() {
            return;
        }

        if lookahead::is_lambda_start(self.tokens, self.pos) {
            self.parse_lambda();
            return;
        }

        let cp = self.builder.checkpoint();
        self.parse_infix_expression();
        if self.failed() {
            return;
        }

        if !self.newline_before_next() && self.nth_kind(0) == ScalaSyntaxKind::Colon {
            // Type ascription, including the vararg splice `xs: _*`
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            if self.at(ScalaSyntaxKind::Underscore)
                && self.nth_kind(1) == ScalaSyntaxKind::OpIdent
            {
                self.bump();
                self.consume_trivia();
                self.bump();
            } else {
                self.parse_type();
            }
            return;
        }

        // `x = 1`, `obj.field = v`
        if !self.newline_before_next() && self.nth_kind(0) == ScalaSyntaxKind::Equals {
            self.consume_trivia();
            self.builder.start_node_at(cp, ScalaSyntaxKind::AssignExpr);
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
            self.builder.finish_node();
        }
    }

    /// Operator applications, left-associative, plus the `match`
    /// postfix which binds looser than any operator.
    fn parse_infix_expression(&mut self) {
        let cp = self.builder.checkpoint();
        self.parse_prefix_expression();

        while !self.failed() {
            if self.newline_before_next() {
                break;
            }
            let kind = self.nth_kind(0);
            if kind.is_infix_operator() || self.at_word_operator() {
                self.consume_trivia();
                self.builder.start_node_at(cp, ScalaSyntaxKind::InfixExpr);
                self.bump();
                self.consume_trivia_and_newlines();
                self.parse_prefix_expression();
                self.builder.finish_node();
            } else if kind == ScalaSyntaxKind::MatchKw {
                self.consume_trivia();
                self.builder.start_node_at(cp, ScalaSyntaxKind::MatchExpr);
                self.bump();
                self.consume_trivia();
                self.parse_case_block();
                self.builder.finish_node();
            } else {
                break;
            }
        }
    }

    /// Alphanumeric infix operator, e.g. `1 to 10`, `a max b`. Only
    /// taken when an operand clearly follows on the same line.
    fn at_word_operator(&self) -> bool {
        if !self.nth_kind(0).is_identifier() {
            return false;
        }
        matches!(
            self.nth_kind(1),
            ScalaSyntaxKind::Ident
                | ScalaSyntaxKind::BackquotedIdent
                | ScalaSyntaxKind::IntLit
                | ScalaSyntaxKind::FloatLit
                | ScalaSyntaxKind::StringLit
                | ScalaSyntaxKind::CharLit
                | ScalaSyntaxKind::TrueKw
                | ScalaSyntaxKind::FalseKw
                | ScalaSyntaxKind::LParen
                | ScalaSyntaxKind::LBrace
                | ScalaSyntaxKind::Underscore
        )
    }

    fn parse_prefix_expression(&mut self) {
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::OpIdent)
            && matches!(self.current_text(), "-" | "+" | "!" | "~")
        {
            self.builder.start_node(ScalaSyntaxKind::PrefixExpr);
            self.bump();
            self.consume_trivia();
            self.parse_postfix_expression();
            self.builder.finish_node();
        } else {
            self.parse_postfix_expression();
        }
    }

    /// Selection, type application and call suffixes. A `.` on the
    /// following line continues the chain; anything else after a
    /// newline belongs to the next statement.
    fn parse_postfix_expression(&mut self) {
        let cp = self.builder.checkpoint();
        self.parse_primary_expression();

        while !self.failed() {
            if self.newline_before_next() && self.nth_kind(0) != ScalaSyntaxKind::Dot {
                break;
            }
            match self.nth_kind(0) {
                ScalaSyntaxKind::Dot => {
                    self.consume_trivia_and_newlines();
                    self.builder.start_node_at(cp, ScalaSyntaxKind::SelectExpr);
                    self.bump();
                    self.consume_trivia_and_newlines();
                    if self.current_kind().is_identifier()
                        || self.at(ScalaSyntaxKind::ThisKw)
                        || self.at(ScalaSyntaxKind::SuperKw)
                    {
                        self.bump();
                    } else {
                        self.error("member name");
                    }
                    self.builder.finish_node();
                }
                ScalaSyntaxKind::LBracket => {
                    self.consume_trivia();
                    self.builder
                        .start_node_at(cp, ScalaSyntaxKind::TypeApplyExpr);
                    self.parse_type_arg_list();
                    self.builder.finish_node();
                }
                ScalaSyntaxKind::LParen => {
                    self.consume_trivia();
                    self.builder.start_node_at(cp, ScalaSyntaxKind::CallExpr);
                    self.parse_argument_list();
                    self.builder.finish_node();
                }
                ScalaSyntaxKind::LBrace => {
                    // Block argument: `xs.map { x => x * 2 }`
                    self.consume_trivia();
                    self.builder.start_node_at(cp, ScalaSyntaxKind::CallExpr);
                    self.parse_block_expression();
                    self.builder.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_primary_expression(&mut self) {
        self.consume_trivia();
        match self.current_kind() {
            kind if kind.is_literal() => self.bump(),
            ScalaSyntaxKind::Ident
            | ScalaSyntaxKind::BackquotedIdent
            | ScalaSyntaxKind::ThisKw
            | ScalaSyntaxKind::SuperKw
            | ScalaSyntaxKind::Underscore => self.bump(),
            ScalaSyntaxKind::LParen => self.parse_paren_or_tuple(),
            ScalaSyntaxKind::LBrace => self.parse_block_expression(),
            ScalaSyntaxKind::IfKw => self.parse_if_expression(),
            ScalaSyntaxKind::WhileKw => self.parse_while_expression(),
            ScalaSyntaxKind::ForKw => self.parse_for_expression(),
            ScalaSyntaxKind::TryKw => self.parse_try_expression(),
            ScalaSyntaxKind::ThrowKw => {
                self.builder.start_node(ScalaSyntaxKind::ThrowExpr);
                self.bump();
                self.consume_trivia();
                self.parse_expression();
                self.builder.finish_node();
            }
            ScalaSyntaxKind::ReturnKw => {
                self.builder.start_node(ScalaSyntaxKind::ReturnExpr);
                self.bump();
                if !self.newline_before_next()
                    && !matches!(
                        self.nth_kind(0),
                        ScalaSyntaxKind::RBrace
                            | ScalaSyntaxKind::RParen
                            | ScalaSyntaxKind::Semicolon
                            | ScalaSyntaxKind::Eof
                    )
                {
                    self.consume_trivia();
                    self.parse_expression();
                }
                self.builder.finish_node();
            }
            ScalaSyntaxKind::NewKw => self.parse_new_expression(),
            _ => self.error("expression"),
        }
    }

    fn parse_new_expression(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::NewExpr);
        self.bump();
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::LBrace) {
            // Anonymous class body
            self.parse_block_expression();
        } else {
            self.parse_type();
            if self.nth_kind(0) == ScalaSyntaxKind::LParen && !self.newline_before_next() {
                self.consume_trivia();
                self.parse_argument_list();
            }
            if self.nth_kind(0) == ScalaSyntaxKind::LBrace && !self.newline_before_next() {
                self.consume_trivia();
                self.parse_block_expression();
            }
        }
        self.builder.finish_node();
    }

    /// `(expr)` grouping vs. tuple literal, decided by element count
    fn parse_paren_or_tuple(&mut self) {
        let cp = self.builder.checkpoint();
        self.bump(); // (
        self.consume_trivia_and_newlines();
        let mut elements = 0usize;
        if !self.at(ScalaSyntaxKind::RParen) {
            self.parse_expression();
            elements = 1;
            self.consume_trivia_and_newlines();
            while self.at(ScalaSyntaxKind::Comma) && !self.failed() {
                self.bump();
                elements += 1;
                self.consume_trivia_and_newlines();
                if self.at(ScalaSyntaxKind::RParen) {
                    break;
                }
                self.parse_expression();
                self.consume_trivia_and_newlines();
            }
        }
        self.expect(ScalaSyntaxKind::RParen, "')'");
        let kind = if elements == 1 {
            ScalaSyntaxKind::ParenExpr
        } else {
            ScalaSyntaxKind::TupleExpr
        };
        self.builder.start_node_at(cp, kind);
        self.builder.finish_node();
    }

    /// `{ ... }` — either a statement block or a partial-function
    /// block of case clauses.
    pub(crate) fn parse_block_expression(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::BlockExpr);
        self.expect(ScalaSyntaxKind::LBrace, "'{'");
        self.consume_trivia_and_newlines();

        if self.at(ScalaSyntaxKind::CaseKw) {
            while self.at(ScalaSyntaxKind::CaseKw) && !self.failed() {
                self.parse_case_clause();
                self.consume_trivia_and_newlines();
            }
        } else {
            while !self.at(ScalaSyntaxKind::RBrace) && !self.at_end() && !self.failed() {
                let before = self.pos;
                self.parse_block_statement();
                self.consume_separators();
                if self.pos == before {
                    self.error("statement");
                    break;
                }
            }
        }

        self.expect(ScalaSyntaxKind::RBrace, "'}'");
        self.builder.finish_node();
    }

    fn parse_block_statement(&mut self) {
        if self.at_definition_start() {
            self.parse_definition();
        } else if self.at(ScalaSyntaxKind::ImportKw) {
            self.parse_import_clause();
        } else {
            self.parse_expression();
        }
    }

    fn consume_separators(&mut self) {
        while self.at_trivia()
            || self.at(ScalaSyntaxKind::Newline)
            || self.at(ScalaSyntaxKind::Semicolon)
        {
            self.bump();
        }
    }

    fn parse_if_expression(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::IfExpr);
        self.bump(); // if
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::LParen) {
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
            self.consume_trivia_and_newlines();
            self.expect(ScalaSyntaxKind::RParen, "')'");
        } else {
            self.parse_expression();
            self.consume_trivia();
            self.expect(ScalaSyntaxKind::ThenKw, "'then'");
        }
        self.consume_trivia_and_newlines();
        self.parse_expression();

        if self.nth_kind(0) == ScalaSyntaxKind::ElseKw && !self.failed() {
            self.consume_trivia_and_newlines();
            self.bump(); // else
            self.consume_trivia_and_newlines();
            self.parse_expression();
        }
        self.builder.finish_node();
    }

    fn parse_while_expression(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::WhileExpr);
        self.bump(); // while
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::LParen) {
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
            self.consume_trivia_and_newlines();
            self.expect(ScalaSyntaxKind::RParen, "')'");
        } else {
            self.parse_expression();
            self.consume_trivia();
            self.expect(ScalaSyntaxKind::DoKw, "'do'");
        }
        self.consume_trivia_and_newlines();
        self.parse_expression();
        self.builder.finish_node();
    }

    fn parse_for_expression(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ForExpr);
        self.bump(); // for
        self.consume_trivia();

        let close = match self.current_kind() {
            ScalaSyntaxKind::LParen => {
                self.bump();
                Some(ScalaSyntaxKind::RParen)
            }
            ScalaSyntaxKind::LBrace => {
                self.bump();
                Some(ScalaSyntaxKind::RBrace)
            }
            _ => None,
        };

        self.parse_enumerators(close);

        if let Some(close) = close {
            self.consume_trivia_and_newlines();
            self.expect(close, "closing delimiter");
        }

        self.consume_trivia_and_newlines();
        if self.at(ScalaSyntaxKind::YieldKw) || self.at(ScalaSyntaxKind::DoKw) {
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
        } else {
            self.parse_expression();
        }
        self.builder.finish_node();
    }

    fn parse_enumerators(&mut self, close: Option<ScalaSyntaxKind>) {
        self.builder.start_node(ScalaSyntaxKind::Enumerators);
        loop {
            self.consume_separators();
            let kind = self.current_kind();
            if self.failed()
                || self.at_end()
                || Some(kind) == close
                || matches!(kind, ScalaSyntaxKind::YieldKw | ScalaSyntaxKind::DoKw)
            {
                break;
            }
            let before = self.pos;
            if kind == ScalaSyntaxKind::IfKw {
                self.builder.start_node(ScalaSyntaxKind::Guard);
                self.bump();
                self.consume_trivia();
                self.parse_expression();
                self.builder.finish_node();
            } else {
                self.builder.start_node(ScalaSyntaxKind::Generator);
                self.parse_pattern();
                self.consume_trivia();
                if self.at(ScalaSyntaxKind::LeftArrow) || self.at(ScalaSyntaxKind::Equals) {
                    self.bump();
                    self.consume_trivia_and_newlines();
                    self.parse_expression();
                } else {
                    self.error("'<-'");
                }
                self.builder.finish_node();
            }
            if self.pos == before {
                break;
            }
        }
        self.builder.finish_node();
    }

    fn parse_try_expression(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::TryExpr);
        self.bump(); // try
        self.consume_trivia_and_newlines();
        self.parse_expression();

        if self.nth_kind(0) == ScalaSyntaxKind::CatchKw && !self.failed() {
            self.builder.start_node(ScalaSyntaxKind::CatchClause);
            self.consume_trivia_and_newlines();
            self.bump(); // catch
            self.consume_trivia();
            if self.at(ScalaSyntaxKind::LBrace) {
                self.parse_block_expression();
            } else {
                self.parse_expression();
            }
            self.builder.finish_node();
        }

        if self.nth_kind(0) == ScalaSyntaxKind::FinallyKw && !self.failed() {
            self.builder.start_node(ScalaSyntaxKind::FinallyClause);
            self.consume_trivia_and_newlines();
            self.bump(); // finally
            self.consume_trivia_and_newlines();
            self.parse_expression();
            self.builder.finish_node();
        }
        self.builder.finish_node();
    }

    /// `{ case pat => body ... }` after `match` or `catch`
    fn parse_case_block(&mut self) {
        self.expect(ScalaSyntaxKind::LBrace, "'{'");
        self.consume_trivia_and_newlines();
        while self.at(ScalaSyntaxKind::CaseKw) && !self.failed() {
            self.parse_case_clause();
            self.consume_trivia_and_newlines();
        }
        self.expect(ScalaSyntaxKind::RBrace, "'}'");
    }

    fn parse_case_clause(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::CaseClause);
        self.expect(ScalaSyntaxKind::CaseKw, "'case'");
        self.consume_trivia();
        self.parse_pattern();
        self.consume_trivia();

        if self.at(ScalaSyntaxKind::IfKw) {
            self.builder.start_node(ScalaSyntaxKind::Guard);
            self.bump();
            self.consume_trivia();
            self.parse_expression();
            self.builder.finish_node();
            self.consume_trivia();
        }

        self.expect(ScalaSyntaxKind::Arrow, "'=>'");

        // Body: statements until the next case or the closing brace
        while !self.failed() {
            self.consume_trivia();
            if matches!(
                self.nth_kind(0),
                ScalaSyntaxKind::CaseKw | ScalaSyntaxKind::RBrace | ScalaSyntaxKind::Eof
            ) {
                break;
            }
            if self.at(ScalaSyntaxKind::Newline) || self.at(ScalaSyntaxKind::Semicolon) {
                self.bump();
                continue;
            }
            let before = self.pos;
            self.parse_block_statement();
            if self.pos == before {
                break;
            }
        }
        self.builder.finish_node();
    }

    fn parse_lambda(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::Lambda);
        self.builder.start_node(ScalaSyntaxKind::LambdaParams);
        self.consume_trivia();

        if self.at(ScalaSyntaxKind::LParen) {
            self.bump();
            self.consume_trivia_and_newlines();
            while !self.at(ScalaSyntaxKind::RParen) && !self.at_end() && !self.failed() {
                self.parse_lambda_param();
                self.consume_trivia_and_newlines();
                if self.at(ScalaSyntaxKind::Comma) {
                    self.bump();
                    self.consume_trivia_and_newlines();
                } else {
                    break;
                }
            }
            self.expect(ScalaSyntaxKind::RParen, "')'");
        } else {
            self.parse_lambda_param();
        }
        self.builder.finish_node(); // LambdaParams

        self.consume_trivia();
        if self.at(ScalaSyntaxKind::Arrow) || self.at(ScalaSyntaxKind::CtxArrow) {
            self.bump();
        } else {
            self.error("'=>'");
        }
        self.consume_trivia_and_newlines();
        self.parse_expression();
        self.builder.finish_node(); // Lambda
    }

    fn parse_lambda_param(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::Param);
        self.consume_trivia();
        if self.current_kind().is_identifier() || self.at(ScalaSyntaxKind::Underscore) {
            self.bump();
        } else {
            self.error("parameter name");
            self.builder.finish_node();
            return;
        }
        if self.nth_kind(0) == ScalaSyntaxKind::Colon {
            self.consume_trivia();
            self.bump();
            self.parse_type();
        }
        self.builder.finish_node();
    }

    /// `f(a, b)` — each call site owns its own ordered argument list
    pub(crate) fn parse_argument_list(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ArgumentList);
        self.expect(ScalaSyntaxKind::LParen, "'('");
        self.consume_trivia_and_newlines();
        if !self.at(ScalaSyntaxKind::RParen) {
            self.parse_expression();
            self.consume_trivia_and_newlines();
            while self.at(ScalaSyntaxKind::Comma) && !self.failed() {
                self.bump();
                self.consume_trivia_and_newlines();
                if self.at(ScalaSyntaxKind::RParen) {
                    break;
                }
                self.parse_expression();
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
    fn test_infix_left_associates() {
        let root = parse_ok("a + b + c");
        let outer = find(&root, ScalaSyntaxKind::InfixExpr).unwrap();
        assert_eq!(outer.text().to_string(), "a + b + c");
        let inner = outer
            .children()
            .find(|n| n.kind() == ScalaSyntaxKind::InfixExpr)
            .unwrap();
        assert_eq!(inner.text().to_string(), "a + b");
    }

    #[test]
    fn test_call_owns_argument_list() {
        let root = parse_ok("f(1, 2)");
        let call = find(&root, ScalaSyntaxKind::CallExpr).unwrap();
        let args = call
            .children()
            .find(|n| n.kind() == ScalaSyntaxKind::ArgumentList)
            .unwrap();
        assert_eq!(args.text().to_string(), "(1, 2)");
    }

    #[test]
    fn test_select_chain_across_newline() {
        let root = parse_ok("xs\n  .map(f)\n  .filter(g)");
        let calls = root
            .descendants()
            .filter(|n| n.kind() == ScalaSyntaxKind::CallExpr)
            .count();
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_tuple_vs_paren_grouping() {
        let root = parse_ok("(1, 2)");
        assert!(find(&root, ScalaSyntaxKind::TupleExpr).is_some());
        let root = parse_ok("(1 + 2) * 3");
        assert!(find(&root, ScalaSyntaxKind::ParenExpr).is_some());
        assert!(find(&root, ScalaSyntaxKind::TupleExpr).is_none());
    }

    #[test]
    fn test_if_else_expression() {
        let root = parse_ok("if (x > 0) a else b");
        let node = find(&root, ScalaSyntaxKind::IfExpr).unwrap();
        assert_eq!(node.text().to_string(), "if (x > 0) a else b");
    }

    #[test]
    fn test_scala3_if_then_else() {
        let root = parse_ok("if x > 0 then a else b");
        assert!(find(&root, ScalaSyntaxKind::IfExpr).is_some());
    }

    #[test]
    fn test_while_expression() {
        let root = parse_ok("while (x > 0) { x = x - 1 }");
        assert!(find(&root, ScalaSyntaxKind::WhileExpr).is_some());
        assert!(find(&root, ScalaSyntaxKind::AssignExpr).is_some());
    }

    #[test]
    fn test_for_yield() {
        let root = parse_ok("for (i <- xs if i > 0) yield i * 2");
        let node = find(&root, ScalaSyntaxKind::ForExpr).unwrap();
        assert!(
            node.descendants()
                .any(|n| n.kind() == ScalaSyntaxKind::Generator)
        );
        assert!(node.descendants().any(|n| n.kind() == ScalaSyntaxKind::Guard));
    }

    #[test]
    fn test_match_with_guard() {
        let root = parse_ok("x match { case n if n > 0 => n case _ => 0 }");
        let cases = root
            .descendants()
            .filter(|n| n.kind() == ScalaSyntaxKind::CaseClause)
            .count();
        assert_eq!(cases, 2);
        assert!(find(&root, ScalaSyntaxKind::Guard).is_some());
    }

    #[test]
    fn test_try_catch_finally() {
        let root = parse_ok("try f() catch { case e: Error => 0 } finally cleanup()");
        assert!(find(&root, ScalaSyntaxKind::TryExpr).is_some());
        assert!(find(&root, ScalaSyntaxKind::CatchClause).is_some());
        assert!(find(&root, ScalaSyntaxKind::FinallyClause).is_some());
    }

    #[test]
    fn test_new_with_arguments() {
        let root = parse_ok("new Person(\"x\", 3)");
        let node = find(&root, ScalaSyntaxKind::NewExpr).unwrap();
        assert!(
            node.children()
                .any(|n| n.kind() == ScalaSyntaxKind::ArgumentList)
        );
    }

    #[test]
    fn test_block_argument_lambda() {
        let root = parse_ok("xs.map { x => x * 2 }");
        let call = find(&root, ScalaSyntaxKind::CallExpr).unwrap();
        assert!(
            call.descendants()
                .any(|n| n.kind() == ScalaSyntaxKind::Lambda)
        );
    }

    #[test]
    fn test_partial_function_block() {
        let root = parse_ok("xs.collect { case Some(v) => v }");
        let block = find(&root, ScalaSyntaxKind::BlockExpr).unwrap();
        assert!(
            block
                .children()
                .any(|n| n.kind() == ScalaSyntaxKind::CaseClause)
        );
    }

    #[test]
    fn test_word_operator() {
        let root = parse_ok("1 to 10");
        assert!(find(&root, ScalaSyntaxKind::InfixExpr).is_some());
    }

    #[test]
    fn test_prefix_operator() {
        let root = parse_ok("-x + 1");
        assert!(find(&root, ScalaSyntaxKind::PrefixExpr).is_some());
    }

    #[test]
    fn test_named_argument() {
        let root = parse_ok("f(limit = 10)");
        let args = find(&root, ScalaSyntaxKind::ArgumentList).unwrap();
        assert!(
            args.children()
                .any(|n| n.kind() == ScalaSyntaxKind::AssignExpr)
        );
    }

    #[test]
    fn test_throw_and_return() {
        let root = parse_ok("throw new Error(msg)");
        assert!(find(&root, ScalaSyntaxKind::ThrowExpr).is_some());
        let root = parse_ok("return x");
        assert!(find(&root, ScalaSyntaxKind::ReturnExpr).is_some());
    }

    #[test]
    fn test_vararg_splice_argument() {
        parse_ok("f(xs: _*)");
    }

    #[test]
    fn test_interpolated_string_expression() {
        let root = parse_ok("println(s\"hello $name\")");
        assert!(
            root.descendants_with_tokens()
                .filter_map(|e| e.into_token())
                .any(|t| t.kind() == ScalaSyntaxKind::InterpolatedStringLit)
        );
    }
}
