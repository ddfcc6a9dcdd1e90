//! Literal productions
//!
//! Literals are single tokens and stay leaf tokens in the tree; the
//! lexer has already classified every variant (triple-quoted and
//! interpolated strings included), so recognition here is a kind check.

use super::Parser;

impl Parser<'_> {
    pub(crate) fn at_literal(&self) -> bool {
        self.current_kind().is_literal()
    }

    pub(crate) fn parse_literal(&mut self) {
        if self.at_literal() {
            self.bump();
        } else {
            self.error("literal");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cst::ScalaSyntaxKind;
    use crate::cst::parser::parse_source;

    fn first_token_kinds(source: &str) -> Vec<ScalaSyntaxKind> {
        let parse = parse_source(source);
        assert!(parse.is_ok(), "{:?}", parse.errors);
        parse
            .root
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.kind())
            .collect()
    }

    #[test]
    fn test_literal_variants_stay_leaf_tokens() {
        assert!(first_token_kinds("42").contains(&ScalaSyntaxKind::IntLit));
        assert!(first_token_kinds("3.14").contains(&ScalaSyntaxKind::FloatLit));
        assert!(first_token_kinds("\"hi\"").contains(&ScalaSyntaxKind::StringLit));
        assert!(first_token_kinds("'c'").contains(&ScalaSyntaxKind::CharLit));
        assert!(first_token_kinds("true").contains(&ScalaSyntaxKind::TrueKw));
        assert!(first_token_kinds("null").contains(&ScalaSyntaxKind::NullKw));
    }

    #[test]
    fn test_interpolated_string_is_one_token() {
        let kinds = first_token_kinds("s\"hello $name\"");
        assert_eq!(kinds, vec![ScalaSyntaxKind::InterpolatedStringLit]);
    }
}
