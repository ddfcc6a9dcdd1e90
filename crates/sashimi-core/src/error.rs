//! Crate-level error type

use thiserror::Error;

use crate::cst::{LexerError, Parse, ParseError};
use crate::formatter::printer::PrintError;

/// Errors surfaced by the parsing and formatting entry points
#[derive(Debug, Error)]
pub enum SashimiError {
    /// The tokenizer rejected the input
    #[error("lexical error at {}..{}: {message}", .span.start, .span.end)]
    Lex {
        message: String,
        span: std::ops::Range<usize>,
    },

    /// The grammar rejected the token stream
    #[error("{} syntax error(s), first: {first}", .errors.len())]
    Parse {
        errors: Vec<ParseError>,
        first: String,
    },

    /// The printer failed to render a layout
    #[error(transparent)]
    Print(#[from] PrintError),
}

impl SashimiError {
    /// Summarize a failed parse, preferring lexical errors since they
    /// usually cause the downstream syntax errors.
    pub fn from_failed_parse(parse: &Parse) -> Self {
        if let Some(lex) = parse.lex_errors.first() {
            return Self::from(lex.clone());
        }
        let first = parse
            .errors
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unknown parse failure".to_string());
        SashimiError::Parse {
            errors: parse.errors.clone(),
            first,
        }
    }
}

impl From<LexerError> for SashimiError {
    fn from(error: LexerError) -> Self {
        SashimiError::Lex {
            message: error.message,
            span: error.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::parse_source;

    #[test]
    fn test_parse_failure_summary() {
        let parse = parse_source("class (");
        assert!(!parse.is_ok());
        let err = SashimiError::from_failed_parse(&parse);
        let message = err.to_string();
        assert!(message.contains("syntax error"), "{message}");
        assert!(message.contains("expected"), "{message}");
    }

    #[test]
    fn test_lex_failure_wins_over_parse_failure() {
        let parse = parse_source("val s = \"unterminated");
        assert!(!parse.lex_errors.is_empty());
        let err = SashimiError::from_failed_parse(&parse);
        assert!(matches!(err, SashimiError::Lex { .. }), "{err}");
    }
}
