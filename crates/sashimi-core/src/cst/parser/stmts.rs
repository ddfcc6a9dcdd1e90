//! Statement productions: package, import, export, sbt-style
//! assignment
//!
//! The assignment production is only entered through the lookahead
//! gate: an identifier with one of the fixed assignment operators at
//! lookahead positions 1-2. Everything else at the top level falls
//! through to definitions or bare expressions.

use super::Parser;
use crate::cst::ScalaSyntaxKind;

impl Parser<'_> {
    /// `package a.b.c`
    pub(crate) fn parse_package_clause(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::PackageClause);
        self.bump(); // package
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::ObjectKw) {
            // `package object util { ... }`
            self.bump();
            self.consume_trivia();
            if self.current_kind().is_identifier() {
                self.bump();
            } else {
                self.error("package object name");
            }
            self.parse_template_opt();
        } else {
            self.parse_qualified_ident();
        }
        self.builder.finish_node();
    }

    pub(crate) fn parse_import_clause(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ImportClause);
        self.bump(); // import
        self.consume_trivia();
        self.parse_import_expr();
        while self.nth_kind(0) == ScalaSyntaxKind::Comma
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            self.parse_import_expr();
        }
        self.builder.finish_node();
    }

    pub(crate) fn parse_export_clause(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ExportClause);
        self.bump(); // export
        self.consume_trivia();
        self.parse_import_expr();
        while self.nth_kind(0) == ScalaSyntaxKind::Comma
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            self.parse_import_expr();
        }
        self.builder.finish_node();
    }

    /// `a.b.C`, `a.b.*`, `a.b._`, `a.{X, Y => Z}`
    fn parse_import_expr(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ImportExpr);
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("import path");
            self.builder.finish_node();
            return;
        }

        while self.nth_kind(0) == ScalaSyntaxKind::Dot && !self.failed() {
            self.consume_trivia();
            self.bump(); // .
            self.consume_trivia();
            match self.current_kind() {
                kind if kind.is_identifier() => self.bump(),
                ScalaSyntaxKind::Underscore => {
                    self.bump();
                    break;
                }
                ScalaSyntaxKind::OpIdent if self.current_text() == "*" => {
                    self.bump();
                    break;
                }
                ScalaSyntaxKind::LBrace => {
                    self.parse_import_selectors();
                    break;
                }
                _ => {
                    self.error("import selector");
                    break;
                }
            }
        }
        self.builder.finish_node();
    }

    fn parse_import_selectors(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ImportSelectors);
        self.expect(ScalaSyntaxKind::LBrace, "'{'");
        self.consume_trivia_and_newlines();
        while !self.at(ScalaSyntaxKind::RBrace) && !self.at_end() && !self.failed() {
            self.parse_import_selector();
            self.consume_trivia_and_newlines();
            if self.at(ScalaSyntaxKind::Comma) {
                self.bump();
                self.consume_trivia_and_newlines();
            } else {
                break;
            }
        }
        self.expect(ScalaSyntaxKind::RBrace, "'}'");
        self.builder.finish_node();
    }

    /// `X`, `_`, `*`, `X => Y`, `X as Y`
    fn parse_import_selector(&mut self) {
        match self.current_kind() {
            ScalaSyntaxKind::Underscore => {
                self.bump();
                return;
            }
            ScalaSyntaxKind::OpIdent if self.current_text() == "*" => {
                self.bump();
                return;
            }
            kind if kind.is_identifier() => self.bump(),
            _ => {
                self.error("import selector");
                return;
            }
        }
        // Rename: old-style `=>` or new-style `as`
        if self.nth_kind(0) == ScalaSyntaxKind::Arrow {
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            if self.current_kind().is_identifier() || self.at(ScalaSyntaxKind::Underscore) {
                self.bump();
            } else {
                self.error("rename target");
            }
        } else if self.nth_kind(0) == ScalaSyntaxKind::Ident
            && self.nth_kind(1).is_identifier()
        {
            let as_pos = super::lookahead::next_significant(self.tokens, self.pos);
            if as_pos.is_some_and(|i| self.tokens[i].text == "as") {
                self.consume_trivia();
                self.bump(); // as
                self.consume_trivia();
                self.bump(); // target
            }
        }
    }

    /// The sbt-style statement admitted by the lookahead gate, e.g.
    /// `name := "my-project"` or `libraryDependencies += dep`
    pub(crate) fn parse_assignment_statement(&mut self) {
        self.builder
            .start_node(ScalaSyntaxKind::AssignmentStatement);
        self.bump(); // key identifier
        self.consume_trivia();
        if !self.current_kind().is_sbt_assign_op() {
            // The gate admits one scoping token before the operator
            self.bump();
            self.consume_trivia();
        }
        if self.current_kind().is_sbt_assign_op() {
            self.bump();
        } else {
            self.error("assignment operator");
        }
        self.consume_trivia_and_newlines();
        self.parse_expression();
        self.builder.finish_node();
    }

    fn parse_qualified_ident(&mut self) {
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("package name");
            return;
        }
        while self.nth_kind(0) == ScalaSyntaxKind::Dot && self.nth_kind(1).is_identifier() {
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            self.bump();
        }
    }
}
