//! Recursive-descent parser producing the lossless CST
//!
//! The grammar is split into the modules below, one per language area;
//! each contributes `impl Parser` blocks. Decision points between
//! overlapping productions consult the pure predicates in
//! [`lookahead`] before committing.
//!
//! Error semantics: there is no resynchronization. The first
//! recognition error poisons the parse; every production loop checks
//! [`Parser::failed`] and unwinds, and the remaining input is preserved
//! under a single `Error` node so the tree stays lossless. Callers must
//! treat a CST with a non-empty error list as unusable.

pub mod lookahead;

mod defs;
mod exprs;
mod extensions;
mod literals;
mod patterns;
mod stmts;
mod types;

use tracing::debug;

use super::builder::CstBuilder;
use super::lexer::{CstSpan, CstToken, LexerError, lex_with_trivia};
use super::{ScalaSyntaxKind, ScalaSyntaxNode};

/// A recognition error: what the grammar expected and what it found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: String,
    pub found: String,
    pub span: CstSpan,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected {} but found {} at {}..{}",
            self.expected, self.found, self.span.start, self.span.end
        )
    }
}

/// Result of parsing one source text
#[derive(Debug, Clone)]
pub struct Parse {
    pub root: ScalaSyntaxNode,
    pub lex_errors: Vec<LexerError>,
    pub errors: Vec<ParseError>,
    pub comments: Vec<CstToken>,
}

impl Parse {
    /// True when both tokenizing and parsing produced no errors
    pub fn is_ok(&self) -> bool {
        self.lex_errors.is_empty() && self.errors.is_empty()
    }

    /// The root node, only for an error-free parse. A failed parse
    /// still holds a lossless tree but it must not be consumed as a
    /// well-formed CST.
    pub fn cst(&self) -> Option<ScalaSyntaxNode> {
        self.is_ok().then(|| self.root.clone())
    }
}

/// Parse source text into a lossless CST
pub fn parse_source(source: &str) -> Parse {
    let (tokens, lex_errors) = lex_with_trivia(source);
    let comments = tokens
        .iter()
        .filter(|t| t.kind.is_comment())
        .cloned()
        .collect();

    let mut parser = Parser::new(&tokens);
    parser.parse_compilation_unit();
    let (root, errors) = parser.finish();

    debug!(
        len = source.len(),
        lex_errors = lex_errors.len(),
        parse_errors = errors.len(),
        "parsed compilation unit"
    );

    Parse {
        root,
        lex_errors,
        errors,
        comments,
    }
}

/// Token stream parser
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [CstToken],
    pub(crate) pos: usize,
    pub(crate) builder: CstBuilder,
    pub(crate) errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [CstToken]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: CstBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(mut self) -> (ScalaSyntaxNode, Vec<ParseError>) {
        // Preserve whatever was not consumed so the tree stays
        // lossless even after a failed parse.
        if self.pos < self.tokens.len() {
            let has_remaining = self.tokens[self.pos..]
                .iter()
                .any(|t| t.kind != ScalaSyntaxKind::Eof);
            if has_remaining {
                self.builder.start_node(ScalaSyntaxKind::Error);
                while self.pos < self.tokens.len() {
                    if self.tokens[self.pos].kind != ScalaSyntaxKind::Eof {
                        self.add_current_token();
                    }
                    self.pos += 1;
                }
                self.builder.finish_node();
            }
        }
        self.builder.finish_node(); // SOURCE_FILE
        (self.builder.finish(), self.errors)
    }

    /// Top-level production: a repetition of package clause, import,
    /// export, definition, recognized assignment statement, or bare
    /// expression, tried in that priority order.
    fn parse_compilation_unit(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::SourceFile);

        while !self.at_end() && !self.failed() {
            if self.at_trivia()
                || self.at(ScalaSyntaxKind::Newline)
                || self.at(ScalaSyntaxKind::Semicolon)
            {
                self.add_current_token();
                self.advance();
                continue;
            }

            let before = self.pos;
            match self.current_kind() {
                ScalaSyntaxKind::PackageKw => self.parse_package_clause(),
                ScalaSyntaxKind::ImportKw => self.parse_import_clause(),
                ScalaSyntaxKind::ExportKw => self.parse_export_clause(),
                ScalaSyntaxKind::Eof => break,
                _ if self.at_definition_start() => self.parse_definition(),
                _ if lookahead::is_assignment_statement(self.tokens, self.pos) => {
                    self.parse_assignment_statement()
                }
                _ => self.parse_expression(),
            }

            // A production that consumed nothing would loop forever;
            // treat it as a recognition failure instead.
            if self.pos == before && !self.failed() {
                self.error("statement");
            }
        }
    }

    // Helper methods

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.at(ScalaSyntaxKind::Eof)
    }

    pub(crate) fn failed(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn current(&self) -> Option<&CstToken> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> ScalaSyntaxKind {
        self.current()
            .map(|t| t.kind)
            .unwrap_or(ScalaSyntaxKind::Eof)
    }

    pub(crate) fn current_text(&self) -> &str {
        self.current().map(|t| t.text.as_str()).unwrap_or("")
    }

    pub(crate) fn at(&self, kind: ScalaSyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn at_trivia(&self) -> bool {
        matches!(
            self.current_kind(),
            ScalaSyntaxKind::Whitespace
                | ScalaSyntaxKind::CommentLine
                | ScalaSyntaxKind::CommentBlock
        )
    }

    /// Kind of the n-th significant token from the current position
    /// (0 = the current significant token).
    pub(crate) fn nth_kind(&self, n: usize) -> ScalaSyntaxKind {
        let mut seen = 0usize;
        let mut idx = self.pos;
        while idx < self.tokens.len() {
            let kind = self.tokens[idx].kind;
            if !kind.is_trivia() {
                if seen == n {
                    return kind;
                }
                seen += 1;
            }
            idx += 1;
        }
        ScalaSyntaxKind::Eof
    }

    /// True when a newline separates the current position from the
    /// next significant token — the statement-boundary test used by
    /// the expression continuation loops.
    pub(crate) fn newline_before_next(&self) -> bool {
        let mut idx = self.pos;
        while idx < self.tokens.len() {
            let kind = self.tokens[idx].kind;
            if kind == ScalaSyntaxKind::Newline {
                return true;
            }
            if !kind.is_trivia() {
                return false;
            }
            idx += 1;
        }
        false
    }

    pub(crate) fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn add_current_token(&mut self) {
        if self.pos < self.tokens.len() {
            let token = &self.tokens[self.pos];
            self.builder.add_token(token);
        }
    }

    /// Add the current token to the tree and move past it
    pub(crate) fn bump(&mut self) {
        self.add_current_token();
        self.advance();
    }

    /// Record a recognition error at the current token. The parse is
    /// poisoned from here on; production loops unwind via `failed`.
    pub(crate) fn error(&mut self, expected: &str) {
        let (found, span) = match self.current() {
            Some(token) if token.kind != ScalaSyntaxKind::Eof => {
                (format!("'{}'", token.text), token.span.clone())
            }
            _ => {
                let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
                ("end of input".to_string(), end..end)
            }
        };
        self.errors.push(ParseError {
            expected: expected.to_string(),
            found,
            span,
        });
    }

    /// Consume the expected token kind or record an error
    pub(crate) fn expect(&mut self, kind: ScalaSyntaxKind, expected: &str) {
        if self.at(kind) {
            self.bump();
        } else {
            self.error(expected);
        }
    }

    /// Consume whitespace and comments, but stop at newlines
    pub(crate) fn consume_trivia(&mut self) {
        while self.at_trivia() {
            self.bump();
        }
    }

    /// Consume whitespace, comments and newlines
    pub(crate) fn consume_trivia_and_newlines(&mut self) {
        while self.at_trivia() || self.at(ScalaSyntaxKind::Newline) {
            self.bump();
        }
    }

    /// Does a definition (with optional annotations/modifiers) start
    /// at the current significant position?
    pub(crate) fn at_definition_start(&self) -> bool {
        let mut n = 0usize;
        loop {
            let kind = self.nth_kind(n);
            if kind == ScalaSyntaxKind::At {
                // Annotation: @Name possibly with arguments; scan past
                // the name and keep looking for the definition keyword.
                n += 2;
                continue;
            }
            if kind == ScalaSyntaxKind::CaseKw {
                return matches!(
                    self.nth_kind(n + 1),
                    ScalaSyntaxKind::ClassKw | ScalaSyntaxKind::ObjectKw
                );
            }
            if kind.is_definition_keyword() {
                return true;
            }
            if kind.is_modifier() {
                n += 1;
                continue;
            }
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> ScalaSyntaxNode {
        let parse = parse_source(source);
        assert!(
            parse.is_ok(),
            "parse failed: lex {:?}, parse {:?}",
            parse.lex_errors,
            parse.errors
        );
        assert_eq!(parse.root.text().to_string(), source, "lossless failed");
        parse.root
    }

    #[test]
    fn test_parse_val_definition() {
        let root = parse_ok("val x = 42");
        let def = root.first_child().unwrap();
        assert_eq!(def.kind(), ScalaSyntaxKind::ValDef);
    }

    #[test]
    fn test_parse_lambda_not_two_statements() {
        let root = parse_ok("x => x * 2");
        let children: Vec<_> = root.children().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), ScalaSyntaxKind::Lambda);
    }

    #[test]
    fn test_parse_two_param_lambda_not_tuple() {
        let root = parse_ok("(a, b) => a + b");
        let lambda = root.first_child().unwrap();
        assert_eq!(lambda.kind(), ScalaSyntaxKind::Lambda);
        assert!(
            lambda
                .children()
                .any(|n| n.kind() == ScalaSyntaxKind::LambdaParams)
        );
    }

    #[test]
    fn test_parse_sbt_assignment_statement() {
        let root = parse_ok("name := \"my-project\"");
        let stmt = root.first_child().unwrap();
        assert_eq!(stmt.kind(), ScalaSyntaxKind::AssignmentStatement);
    }

    #[test]
    fn test_val_definition_is_not_assignment_statement() {
        let root = parse_ok("val name = \"x\"");
        let def = root.first_child().unwrap();
        assert_eq!(def.kind(), ScalaSyntaxKind::ValDef);
    }

    #[test]
    fn test_error_poisons_and_preserves_input() {
        let source = "val = 42";
        let parse = parse_source(source);
        assert!(!parse.errors.is_empty());
        assert!(parse.cst().is_none());
        // Even the failed parse keeps every byte
        assert_eq!(parse.root.text().to_string(), source);
    }

    #[test]
    fn test_comments_surface_in_parse_result() {
        let parse = parse_source("// header\nval x = 1");
        assert!(parse.is_ok());
        assert_eq!(parse.comments.len(), 1);
        assert_eq!(parse.comments[0].text, "// header");
    }
}
