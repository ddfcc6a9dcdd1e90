//! Concrete Syntax Tree (CST) for the Scala subset
//!
//! This module implements a lossless syntax tree using the Rowan
//! library. Every input token, whitespace and comments included, is
//! preserved in the tree, enabling:
//! - Accurate source-to-source transformations (the formatter)
//! - Precise spans for every node
//! - `parse(source).text() == source`, always
//!
//! ## Architecture
//!
//! The CST uses Rowan's green/red tree pattern:
//!
//! - **Green Tree**: immutable, position-independent storage. Stores
//!   the actual source text with trivia and deduplicates identical
//!   subtrees; cheap to clone.
//! - **Red Tree**: dynamically constructed view with parent pointers,
//!   created on demand for traversal.
//!
//! ## Pipeline
//!
//! `lexer` turns text into a token stream under ordered precedence
//! rules, the `parser` modules recognize it by recursive descent with
//! bounded-lookahead predicates, `location` projects byte offsets to
//! line/column, and `export` produces the serializable tree shape.
//! The `grammar` registry validates the production table once per
//! process before the first parse.

mod builder;
mod language;
mod lexer;
mod syntax_kind;

pub mod ast;
pub mod export;
pub mod grammar;
pub mod location;
pub mod parser;

#[cfg(test)]
mod golden_tests;

pub use builder::CstBuilder;
pub use language::ScalaLanguage;
pub use lexer::{
    CstLexResult, CstSpan, CstToken, LexerError, TokenizeResult, is_identifier_part,
    is_identifier_start, is_valid_identifier, lex_with_trivia, tokenize,
};
pub use parser::{Parse, ParseError, parse_source};
pub use syntax_kind::ScalaSyntaxKind;

/// Syntax node of the Scala CST
pub type ScalaSyntaxNode = rowan::SyntaxNode<ScalaLanguage>;
/// Syntax token of the Scala CST
pub type ScalaSyntaxToken = rowan::SyntaxToken<ScalaLanguage>;
/// Either a node or a token
pub type ScalaSyntaxElement = rowan::SyntaxElement<ScalaLanguage>;
