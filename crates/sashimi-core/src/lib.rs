//! Sashimi Core
//!
//! Lossless parsing and formatting for a Scala-like language. The
//! tokenizer and recursive-descent grammar build a Rowan CST that
//! preserves every input byte, and the formatter reprints that tree
//! under configurable style options.
//!
//! The two entry points most callers want:
//!
//! - [`parse`] / [`parse_strict`] for the lossless tree
//! - [`format_source`] for parse-and-reprint in one call

pub mod cst;
pub mod error;
pub mod formatter;

pub use cst::{
    CstToken, LexerError, Parse, ParseError, ScalaSyntaxElement, ScalaSyntaxKind, ScalaSyntaxNode,
    ScalaSyntaxToken, is_valid_identifier, tokenize,
};
pub use cst::ast::{self, AstNode};
pub use cst::export::{ExportChild, ExportNode, ExportToken, export_tree};
pub use cst::location::{LineIndex, Position, Span};
pub use error::SashimiError;
pub use formatter::{FormatOptions, IndentStyle, TrailingComma, format_source};

/// Parse source text into a lossless CST. Errors are collected on the
/// returned [`Parse`] rather than reported through `Result`.
pub fn parse(source: &str) -> Parse {
    cst::grammar::Grammar::get().parse(source)
}

/// Parse source text, failing on the first lexical or syntax error
pub fn parse_strict(source: &str) -> Result<Parse, SashimiError> {
    let parse = parse(source);
    if parse.is_ok() {
        Ok(parse)
    } else {
        Err(SashimiError::from_failed_parse(&parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_lossless() {
        let source = "class A {\n  // comment\n  val x = 1\n}\n";
        let parse = parse(source);
        assert!(parse.is_ok());
        assert_eq!(parse.root.text().to_string(), source);
    }

    #[test]
    fn test_parse_strict_rejects_errors() {
        assert!(parse_strict("val x = 42").is_ok());
        assert!(parse_strict("class (").is_err());
    }

    #[test]
    fn test_format_source_reexport() {
        let out = format_source("val  x=1", &FormatOptions::default()).unwrap();
        assert_eq!(out, "val x = 1\n");
    }
}
