//! Scala 3 definition forms: enum, extension, given
//!
//! These share the modifier-prefix dispatch in the definitions module
//! and only differ in their bodies: enum bodies interleave `case`
//! entries with ordinary members, extension blocks hold methods, and
//! given definitions come in alias (`= expr`) and instance (`with`
//! body) shapes.

use rowan::Checkpoint;

use super::Parser;
use crate::cst::ScalaSyntaxKind;

impl Parser<'_> {
    pub(crate) fn parse_enum_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ScalaSyntaxKind::EnumDef);
        self.bump(); // enum
        self.consume_trivia();
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("enum name");
        }
        if self.at(ScalaSyntaxKind::LBracket) && !self.failed() {
            self.parse_type_param_clause();
        }
        while self.nth_kind(0) == ScalaSyntaxKind::LParen
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.parse_param_clause();
        }
        if self.nth_kind(0) == ScalaSyntaxKind::ExtendsKw && !self.failed() {
            self.builder.start_node(ScalaSyntaxKind::Template);
            self.consume_trivia_and_newlines();
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_infix_type();
            self.builder.finish_node();
        }
        if self.nth_kind(0) == ScalaSyntaxKind::LBrace && !self.failed() {
            self.consume_trivia_and_newlines();
            self.parse_enum_body();
        }
        self.builder.finish_node();
    }

    fn parse_enum_body(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::TemplateBody);
        self.expect(ScalaSyntaxKind::LBrace, "'{'");
        loop {
            while self.at_trivia()
                || self.at(ScalaSyntaxKind::Newline)
                || self.at(ScalaSyntaxKind::Semicolon)
            {
                self.bump();
            }
            if self.at(ScalaSyntaxKind::RBrace) || self.at_end() || self.failed() {
                break;
            }
            let before = self.pos;
            // `case Red` is an enum entry; `case class X` inside the
            // body is still an ordinary definition
            if self.at(ScalaSyntaxKind::CaseKw)
                && !matches!(
                    self.nth_kind(1),
                    ScalaSyntaxKind::ClassKw | ScalaSyntaxKind::ObjectKw
                )
            {
                self.parse_enum_case();
            } else if self.at_definition_start() {
                self.parse_definition();
            } else if self.at(ScalaSyntaxKind::ImportKw) {
                self.parse_import_clause();
            } else {
                self.parse_expression();
            }
            if self.pos == before {
                self.error("enum member");
                break;
            }
        }
        self.expect(ScalaSyntaxKind::RBrace, "'}'");
        self.builder.finish_node();
    }

    /// `case Red, Green` or `case Circle(r: Double) extends Shape`
    fn parse_enum_case(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::EnumCase);
        self.bump(); // case
        self.consume_trivia();
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("enum case name");
            self.builder.finish_node();
            return;
        }
        if self.at(ScalaSyntaxKind::LBracket) {
            self.parse_type_param_clause();
        }
        while self.nth_kind(0) == ScalaSyntaxKind::LParen
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.parse_param_clause();
        }
        // Simple-case list: `case Red, Green, Blue`
        while self.nth_kind(0) == ScalaSyntaxKind::Comma
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            if self.current_kind().is_identifier() {
                self.bump();
            } else {
                self.error("enum case name");
                break;
            }
        }
        if self.nth_kind(0) == ScalaSyntaxKind::ExtendsKw
            && !self.newline_before_next()
            && !self.failed()
        {
            self.builder.start_node(ScalaSyntaxKind::Template);
            self.consume_trivia();
            self.bump();
            self.consume_trivia();
            self.parse_infix_type();
            if self.at(ScalaSyntaxKind::LParen) {
                self.parse_argument_list();
            }
            self.builder.finish_node();
        }
        self.builder.finish_node();
    }

    pub(crate) fn parse_extension_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ScalaSyntaxKind::ExtensionDef);
        self.bump(); // extension
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::LBracket) {
            self.parse_type_param_clause();
        }
        while self.nth_kind(0) == ScalaSyntaxKind::LParen
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.parse_param_clause();
        }
        self.consume_trivia_and_newlines();
        if self.at(ScalaSyntaxKind::LBrace) {
            self.parse_template_body();
        } else if self.at_definition_start() {
            self.parse_definition();
        } else {
            self.error("extension method");
        }
        self.builder.finish_node();
    }

    pub(crate) fn parse_given_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ScalaSyntaxKind::GivenDef);
        self.bump(); // given
        self.consume_trivia();

        if self.given_has_name() {
            self.bump(); // name
            if self.at(ScalaSyntaxKind::LBracket) {
                self.parse_type_param_clause();
            }
            while self.nth_kind(0) == ScalaSyntaxKind::LParen
                && !self.newline_before_next()
                && !self.failed()
            {
                self.consume_trivia();
                self.parse_param_clause();
            }
            self.consume_trivia();
            self.expect(ScalaSyntaxKind::Colon, "':'");
        }

        self.parse_infix_type();
        if self.at(ScalaSyntaxKind::LBracket) && !self.failed() {
            self.parse_type_arg_list();
        }

        if self.nth_kind(0) == ScalaSyntaxKind::Equals && !self.failed() {
            self.consume_trivia();
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
        } else if self.nth_kind(0) == ScalaSyntaxKind::WithKw && !self.failed() {
            self.consume_trivia();
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_template_body();
        }
        self.builder.finish_node();
    }

    /// Anonymous vs. named given: named instances carry `name ... :`
    /// before the instance type, confirmed by finding a `:` at depth 0
    /// before any `=` or `with`.
    fn given_has_name(&self) -> bool {
        if !self.current_kind().is_identifier() {
            return false;
        }
        let mut depth = 0i32;
        let mut inspected = 0usize;
        let mut idx = self.pos + 1;
        while idx < self.tokens.len() && inspected < super::lookahead::LOOKAHEAD_HORIZON {
            let kind = self.tokens[idx].kind;
            if !kind.is_trivia() {
                inspected += 1;
                match kind {
                    ScalaSyntaxKind::LParen | ScalaSyntaxKind::LBracket => depth += 1,
                    ScalaSyntaxKind::RParen | ScalaSyntaxKind::RBracket => depth -= 1,
                    ScalaSyntaxKind::Colon if depth == 0 => return true,
                    ScalaSyntaxKind::Equals | ScalaSyntaxKind::WithKw | ScalaSyntaxKind::Eof
                        if depth == 0 =>
                    {
                        return false;
                    }
                    _ => {}
                }
            }
            idx += 1;
        }
        false
    }
}
