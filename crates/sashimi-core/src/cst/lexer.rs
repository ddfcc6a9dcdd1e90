//! Trivia-preserving tokenizer for the Scala-like language
//!
//! Matching is attempted against an ordered set of rules; the ordering
//! encodes precedence, not speed:
//!
//! - comments are recognized before the operator rule sees `/`
//! - multi-character reserved operators (`?=>`, `=>>`, `:=`, `++=`, ...)
//!   win over their shorter prefixes via maximal-munch plus a reserved
//!   table lookup on the full operator run
//! - keywords are mapped before the generic identifier rule
//! - numeric literals with a decimal point, exponent or float suffix are
//!   classified before the plain-integer fallback
//! - triple-quoted and interpolated string forms are recognized before
//!   the plain string rule
//!
//! All whitespace, newlines and comments are preserved as trivia tokens
//! so the CST can reproduce the input byte for byte. A position that
//! matches no rule produces a `LexerError` carrying the offending
//! offset; lexing continues past it so every error is reported in one
//! pass.

use crate::cst::ScalaSyntaxKind;
use std::ops::Range;

/// Simple span representing a byte range in the source
pub type CstSpan = Range<usize>;

/// A lexer error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub message: String,
    pub span: CstSpan,
}

impl LexerError {
    pub fn new(message: impl Into<String>, span: CstSpan) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A token with its syntax kind, image and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstToken {
    pub kind: ScalaSyntaxKind,
    pub text: String,
    pub span: CstSpan,
}

impl CstToken {
    pub fn new(kind: ScalaSyntaxKind, text: impl Into<String>, span: CstSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Result returned by the trivia-preserving lexer
pub type CstLexResult = (Vec<CstToken>, Vec<LexerError>);

/// Tokenizer output for the public `tokenize` entry point: significant
/// tokens, lexical errors, and comments routed to a side channel.
#[derive(Debug, Clone)]
pub struct TokenizeResult {
    pub tokens: Vec<CstToken>,
    pub errors: Vec<LexerError>,
    pub comments: Vec<CstToken>,
}

/// Tokenize input, discarding whitespace and grouping comments apart
/// from the significant token stream.
pub fn tokenize(input: &str) -> TokenizeResult {
    let (all, errors) = lex_with_trivia(input);
    let mut tokens = Vec::new();
    let mut comments = Vec::new();
    for token in all {
        if token.kind.is_comment() {
            comments.push(token);
        } else if !token.kind.is_trivia() {
            tokens.push(token);
        }
    }
    TokenizeResult {
        tokens,
        errors,
        comments,
    }
}

/// Characters that may form a symbolic operator run
fn is_op_char(c: char) -> bool {
    matches!(
        c,
        '!' | '#' | '%' | '&' | '*' | '+' | '-' | '/' | ':' | '<' | '=' | '>' | '?' | '@' | '\\'
            | '^' | '|' | '~'
    )
}

/// Identifier start: underscore, dollar, any Unicode letter, the
/// arrow/mathematical-operator blocks, or supplementary symbol/emoji
/// planes.
pub fn is_identifier_start(c: char) -> bool {
    c == '_'
        || c == '$'
        || c.is_alphabetic()
        || matches!(c, '\u{2190}'..='\u{2BFF}')
        || matches!(c, '\u{1F000}'..='\u{1FAFF}')
}

/// Identifier continuation: any start character plus digits and Unicode
/// format characters (zero-width joiners and friends).
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c)
        || c.is_numeric()
        || matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}' | '\u{00AD}')
}

/// Validate a complete identifier image
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

/// Lex input preserving ALL trivia for CST construction.
///
/// Whitespace, newlines and comments become tokens of their own so that
/// `parse(source).text() == source` holds for every input.
pub fn lex_with_trivia(input: &str) -> CstLexResult {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    let len = input.len();
    let mut i = 0usize;

    while i < len {
        let (current, size) = match next_char(input, i) {
            Some(pair) => pair,
            None => break,
        };
        let start = i;

        match current {
            // Newlines (kept separate from other whitespace so the
            // formatter can reason about blank lines)
            '\n' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Newline,
                    "\n",
                    span(start, i + size),
                ));
                i += size;
            }
            '\r' => {
                let mut end = i + size;
                if let Some(('\n', nl_size)) = next_char(input, end) {
                    end += nl_size;
                }
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Newline,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Horizontal whitespace run
            c if c.is_whitespace() => {
                let mut end = i + size;
                while let Some((next, next_size)) = next_char(input, end) {
                    if next.is_whitespace() && next != '\n' && next != '\r' {
                        end += next_size;
                    } else {
                        break;
                    }
                }
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Whitespace,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Comments must win before the operator rule sees '/'
            '/' if input[i..].starts_with("//") => {
                let end = input[i..]
                    .find('\n')
                    .map(|rel| i + rel)
                    .unwrap_or(len);
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::CommentLine,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }
            '/' if input[i..].starts_with("/*") => {
                let (end, error) = lex_block_comment(input, start);
                if let Some(err) = error {
                    errors.push(err);
                }
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::CommentBlock,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Structural single-character tokens
            '(' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::LParen,
                    "(",
                    span(start, i + size),
                ));
                i += size;
            }
            ')' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::RParen,
                    ")",
                    span(start, i + size),
                ));
                i += size;
            }
            '[' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::LBracket,
                    "[",
                    span(start, i + size),
                ));
                i += size;
            }
            ']' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::RBracket,
                    "]",
                    span(start, i + size),
                ));
                i += size;
            }
            '{' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::LBrace,
                    "{",
                    span(start, i + size),
                ));
                i += size;
            }
            '}' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::RBrace,
                    "}",
                    span(start, i + size),
                ));
                i += size;
            }
            ',' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Comma,
                    ",",
                    span(start, i + size),
                ));
                i += size;
            }
            ';' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Semicolon,
                    ";",
                    span(start, i + size),
                ));
                i += size;
            }
            '.' => {
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Dot,
                    ".",
                    span(start, i + size),
                ));
                i += size;
            }

            // String literals: triple-quoted before plain
            '"' => {
                let (kind, end, error) = lex_string(input, start);
                if let Some(err) = error {
                    errors.push(err);
                }
                tokens.push(CstToken::new(kind, &input[start..end], span(start, end)));
                i = end;
            }

            // Character literal
            '\'' => {
                let (end, error) = lex_char_literal(input, start);
                if let Some(err) = error {
                    errors.push(err);
                }
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::CharLit,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Backquoted identifier
            '`' => {
                let (end, error) = lex_backquoted(input, start);
                if let Some(err) = error {
                    errors.push(err);
                }
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::BackquotedIdent,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Numbers: float-shaped variants win over plain integers
            c if c.is_ascii_digit() => {
                let (kind, end) = lex_number(input, start);
                tokens.push(CstToken::new(kind, &input[start..end], span(start, end)));
                i = end;
            }

            // Underscore is a token of its own unless it starts a word
            '_' => {
                if let Some((next, _)) = next_char(input, i + size)
                    && is_identifier_part(next)
                {
                    let (kind, end) = lex_word(input, start);
                    tokens.push(CstToken::new(kind, &input[start..end], span(start, end)));
                    i = end;
                } else {
                    tokens.push(CstToken::new(
                        ScalaSyntaxKind::Underscore,
                        "_",
                        span(start, i + size),
                    ));
                    i += size;
                }
            }

            // Words: keywords, identifiers, and interpolated strings
            // (identifier tag immediately followed by a quote)
            c if is_identifier_start(c) => {
                let (kind, end) = lex_word(input, start);
                if kind == ScalaSyntaxKind::Ident
                    && let Some(('"', _)) = next_char(input, end)
                {
                    let (_, string_end, error) = lex_string(input, end);
                    if let Some(err) = error {
                        errors.push(err);
                    }
                    tokens.push(CstToken::new(
                        ScalaSyntaxKind::InterpolatedStringLit,
                        &input[start..string_end],
                        span(start, string_end),
                    ));
                    i = string_end;
                } else {
                    tokens.push(CstToken::new(kind, &input[start..end], span(start, end)));
                    i = end;
                }
            }

            // Symbolic operators: maximal munch, then the reserved
            // table decides between reserved operators and OpIdent
            c if is_op_char(c) => {
                let mut end = i + size;
                while let Some((next, next_size)) = next_char(input, end) {
                    if is_op_char(next) {
                        end += next_size;
                    } else {
                        break;
                    }
                }
                let image = &input[start..end];
                let kind = reserved_operator(image).unwrap_or(ScalaSyntaxKind::OpIdent);
                tokens.push(CstToken::new(kind, image, span(start, end)));
                i = end;
            }

            // No rule matches: lexical error, record and skip forward
            _ => {
                errors.push(LexerError::new(
                    format!("Unexpected character: '{current}'"),
                    span(start, i + size),
                ));
                tokens.push(CstToken::new(
                    ScalaSyntaxKind::Error,
                    &input[start..i + size],
                    span(start, i + size),
                ));
                i += size;
            }
        }
    }

    tokens.push(CstToken::new(ScalaSyntaxKind::Eof, "", span(len, len)));

    (tokens, errors)
}

/// Reserved operator table: the complete operator run is matched here
/// first, so `?=>` never splits into `?` `=>` and `++=` never into
/// `++` `=`.
fn reserved_operator(image: &str) -> Option<ScalaSyntaxKind> {
    let kind = match image {
        "=>" => ScalaSyntaxKind::Arrow,
        "?=>" => ScalaSyntaxKind::CtxArrow,
        "=>>" => ScalaSyntaxKind::TypeLambdaArrow,
        "<-" => ScalaSyntaxKind::LeftArrow,
        "<:" => ScalaSyntaxKind::Subtype,
        ">:" => ScalaSyntaxKind::Supertype,
        ":=" => ScalaSyntaxKind::ColonEquals,
        "+=" => ScalaSyntaxKind::PlusEquals,
        "-=" => ScalaSyntaxKind::MinusEquals,
        "*=" => ScalaSyntaxKind::StarEquals,
        "/=" => ScalaSyntaxKind::SlashEquals,
        "%=" => ScalaSyntaxKind::PercentEquals,
        "++=" => ScalaSyntaxKind::PlusPlusEquals,
        "=" => ScalaSyntaxKind::Equals,
        ":" => ScalaSyntaxKind::Colon,
        "|" => ScalaSyntaxKind::Pipe,
        "&" => ScalaSyntaxKind::Ampersand,
        "@" => ScalaSyntaxKind::At,
        "#" => ScalaSyntaxKind::Hash,
        _ => return None,
    };
    Some(kind)
}

/// Lex a word and classify it against the keyword table
fn lex_word(input: &str, start: usize) -> (ScalaSyntaxKind, usize) {
    let mut end = start;
    for (offset, ch) in input[start..].char_indices() {
        if offset == 0 || is_identifier_part(ch) {
            end = start + offset + ch.len_utf8();
        } else {
            break;
        }
    }

    let word = &input[start..end];
    let kind = ScalaSyntaxKind::from_keyword(word).unwrap_or(ScalaSyntaxKind::Ident);
    (kind, end)
}

/// Lex a numeric literal. Hex integers, decimal points, exponents and
/// the `fFdDlL` suffixes are all recognized here; anything with a
/// fractional part, exponent or float suffix becomes a FloatLit.
fn lex_number(input: &str, start: usize) -> (ScalaSyntaxKind, usize) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = start;

    // Hex integer
    if input[i..].starts_with("0x") || input[i..].starts_with("0X") {
        i += 2;
        while i < len && bytes[i].is_ascii_hexdigit() {
            i += 1;
        }
        if i < len && matches!(bytes[i], b'l' | b'L') {
            i += 1;
        }
        return (ScalaSyntaxKind::IntLit, i);
    }

    let mut is_float = false;

    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }

    // Fractional part; `1.max` must not swallow the dot
    if i + 1 < len && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
        is_float = true;
        i += 1;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    // Exponent
    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < len && bytes[j].is_ascii_digit() {
            is_float = true;
            i = j;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    // Suffix
    if i < len {
        match bytes[i] {
            b'f' | b'F' | b'd' | b'D' => {
                is_float = true;
                i += 1;
            }
            b'l' | b'L' if !is_float => {
                i += 1;
            }
            _ => {}
        }
    }

    let kind = if is_float {
        ScalaSyntaxKind::FloatLit
    } else {
        ScalaSyntaxKind::IntLit
    };
    (kind, i)
}

/// Lex a string literal starting at a double quote. Triple-quoted
/// strings are recognized first.
fn lex_string(input: &str, quote_start: usize) -> (ScalaSyntaxKind, usize, Option<LexerError>) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = quote_start + 1;

    // Triple-quoted string
    if i + 1 < len && bytes[i] == b'"' && bytes[i + 1] == b'"' {
        i += 2;
        while i < len {
            if input[i..].starts_with("\"\"\"") {
                // Consume any extra closing quotes ("""x"""" is legal)
                let mut end = i + 3;
                while end < len && bytes[end] == b'"' {
                    end += 1;
                }
                return (ScalaSyntaxKind::TripleStringLit, end, None);
            }
            i += 1;
        }
        return (
            ScalaSyntaxKind::TripleStringLit,
            len,
            Some(LexerError::new(
                "Unterminated triple-quoted string",
                span(quote_start, len),
            )),
        );
    }

    // Plain string
    while i < len {
        match bytes[i] {
            b'"' => return (ScalaSyntaxKind::StringLit, i + 1, None),
            b'\\' => {
                i += 1;
                if i < len {
                    i += 1;
                }
            }
            b'\n' => {
                return (
                    ScalaSyntaxKind::StringLit,
                    i,
                    Some(LexerError::new(
                        "Unterminated string",
                        span(quote_start, i),
                    )),
                );
            }
            _ => i += 1,
        }
    }

    (
        ScalaSyntaxKind::StringLit,
        len,
        Some(LexerError::new(
            "Unterminated string",
            span(quote_start, len),
        )),
    )
}

/// Lex a character literal, including escape sequences
fn lex_char_literal(input: &str, start: usize) -> (usize, Option<LexerError>) {
    let len = input.len();
    let mut i = start + 1;

    match next_char(input, i) {
        Some(('\\', esc_size)) => {
            i += esc_size;
            // Escape body: a single char or uXXXX
            if let Some((c, c_size)) = next_char(input, i) {
                i += c_size;
                if c == 'u' {
                    while i < len && input.as_bytes()[i].is_ascii_hexdigit() {
                        i += 1;
                    }
                }
            }
        }
        Some((c, c_size)) if c != '\'' && c != '\n' => {
            i += c_size;
        }
        _ => {
            return (
                i,
                Some(LexerError::new(
                    "Empty character literal",
                    span(start, i),
                )),
            );
        }
    }

    if let Some(('\'', q_size)) = next_char(input, i) {
        (i + q_size, None)
    } else {
        (
            i,
            Some(LexerError::new(
                "Unterminated character literal",
                span(start, i),
            )),
        )
    }
}

/// Lex a backquoted identifier
fn lex_backquoted(input: &str, start: usize) -> (usize, Option<LexerError>) {
    let len = input.len();
    let mut i = start + 1;

    while i < len {
        let (c, size) = match next_char(input, i) {
            Some(pair) => pair,
            None => break,
        };
        match c {
            '`' => return (i + size, None),
            '\n' => {
                return (
                    i,
                    Some(LexerError::new(
                        "Unterminated backquoted identifier",
                        span(start, i),
                    )),
                );
            }
            _ => i += size,
        }
    }

    (
        len,
        Some(LexerError::new(
            "Unterminated backquoted identifier",
            span(start, len),
        )),
    )
}

/// Lex a block comment, honoring nesting
fn lex_block_comment(input: &str, start: usize) -> (usize, Option<LexerError>) {
    let len = input.len();
    let mut i = start + 2;
    let mut depth = 1usize;

    while i < len {
        if input[i..].starts_with("/*") {
            depth += 1;
            i += 2;
        } else if input[i..].starts_with("*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return (i, None);
            }
        } else {
            i += next_char(input, i).map(|(_, s)| s).unwrap_or(1);
        }
    }

    (
        len,
        Some(LexerError::new(
            "Unterminated block comment",
            span(start, len),
        )),
    )
}

/// Get next character and its UTF-8 size
fn next_char(input: &str, pos: usize) -> Option<(char, usize)> {
    input[pos..].chars().next().map(|c| (c, c.len_utf8()))
}

fn span(start: usize, end: usize) -> CstSpan {
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<ScalaSyntaxKind> {
        let (tokens, errors) = lex_with_trivia(input);
        assert!(errors.is_empty(), "Lexer errors: {errors:?}");
        tokens
            .iter()
            .filter(|t| !t.kind.is_trivia() && t.kind != ScalaSyntaxKind::Eof)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lossless_reconstruction() {
        let input = "val x =  42 // answer\ndef f(a: Int): Int = a * 2";
        let (tokens, errors) = lex_with_trivia(input);
        assert!(errors.is_empty());

        let reconstructed: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(reconstructed, input);
    }

    #[test]
    fn test_multi_char_operators_beat_prefixes() {
        assert_eq!(
            kinds("a := b"),
            vec![
                ScalaSyntaxKind::Ident,
                ScalaSyntaxKind::ColonEquals,
                ScalaSyntaxKind::Ident
            ]
        );
        assert_eq!(
            kinds("a ++= b"),
            vec![
                ScalaSyntaxKind::Ident,
                ScalaSyntaxKind::PlusPlusEquals,
                ScalaSyntaxKind::Ident
            ]
        );
        assert_eq!(
            kinds("A ?=> B"),
            vec![
                ScalaSyntaxKind::Ident,
                ScalaSyntaxKind::CtxArrow,
                ScalaSyntaxKind::Ident
            ]
        );
        assert_eq!(
            kinds("F =>> G"),
            vec![
                ScalaSyntaxKind::Ident,
                ScalaSyntaxKind::TypeLambdaArrow,
                ScalaSyntaxKind::Ident
            ]
        );
        // >>> is an ordinary operator identifier, not > > >
        assert_eq!(
            kinds("a >>> b"),
            vec![
                ScalaSyntaxKind::Ident,
                ScalaSyntaxKind::OpIdent,
                ScalaSyntaxKind::Ident
            ]
        );
    }

    #[test]
    fn test_keywords_beat_identifiers() {
        assert_eq!(kinds("class"), vec![ScalaSyntaxKind::ClassKw]);
        assert_eq!(kinds("classy"), vec![ScalaSyntaxKind::Ident]);
        assert_eq!(kinds("given"), vec![ScalaSyntaxKind::GivenKw]);
    }

    #[test]
    fn test_number_variants() {
        assert_eq!(kinds("42"), vec![ScalaSyntaxKind::IntLit]);
        assert_eq!(kinds("42L"), vec![ScalaSyntaxKind::IntLit]);
        assert_eq!(kinds("0xFF"), vec![ScalaSyntaxKind::IntLit]);
        assert_eq!(kinds("3.14"), vec![ScalaSyntaxKind::FloatLit]);
        assert_eq!(kinds("1e10"), vec![ScalaSyntaxKind::FloatLit]);
        assert_eq!(kinds("2.5e-3"), vec![ScalaSyntaxKind::FloatLit]);
        assert_eq!(kinds("1f"), vec![ScalaSyntaxKind::FloatLit]);
        // 1.max stays an integer followed by a selection
        assert_eq!(
            kinds("1.max"),
            vec![
                ScalaSyntaxKind::IntLit,
                ScalaSyntaxKind::Dot,
                ScalaSyntaxKind::Ident
            ]
        );
    }

    #[test]
    fn test_string_variants() {
        assert_eq!(kinds(r#""hi""#), vec![ScalaSyntaxKind::StringLit]);
        assert_eq!(
            kinds(r#""""multi "line" body""""#),
            vec![ScalaSyntaxKind::TripleStringLit]
        );
        assert_eq!(
            kinds(r#"s"hello $name""#),
            vec![ScalaSyntaxKind::InterpolatedStringLit]
        );
        assert_eq!(
            kinds(r#"raw"a\nb""#),
            vec![ScalaSyntaxKind::InterpolatedStringLit]
        );
        assert_eq!(kinds("'a'"), vec![ScalaSyntaxKind::CharLit]);
        assert_eq!(kinds("'\\n'"), vec![ScalaSyntaxKind::CharLit]);
    }

    #[test]
    fn test_interpolation_keeps_tag_in_image() {
        let (tokens, errors) = lex_with_trivia(r#"f"x = $x%d""#);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, ScalaSyntaxKind::InterpolatedStringLit);
        assert_eq!(tokens[0].text, r#"f"x = $x%d""#);
    }

    #[test]
    fn test_comments_routed_to_side_channel() {
        let result = tokenize("val x = 1 // trailing\n/* block */ val y = 2");
        assert!(result.errors.is_empty());
        assert_eq!(result.comments.len(), 2);
        assert_eq!(result.comments[0].kind, ScalaSyntaxKind::CommentLine);
        assert_eq!(result.comments[1].kind, ScalaSyntaxKind::CommentBlock);
        assert!(result.tokens.iter().all(|t| !t.kind.is_trivia()));
    }

    #[test]
    fn test_nested_block_comment() {
        let input = "/* outer /* inner */ still outer */ val x = 1";
        let (tokens, errors) = lex_with_trivia(input);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, ScalaSyntaxKind::CommentBlock);
        assert_eq!(tokens[0].text, "/* outer /* inner */ still outer */");
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(kinds("λ"), vec![ScalaSyntaxKind::Ident]);
        assert_eq!(kinds("変数"), vec![ScalaSyntaxKind::Ident]);
        assert_eq!(kinds("переменная"), vec![ScalaSyntaxKind::Ident]);
        assert_eq!(kinds("מזהה"), vec![ScalaSyntaxKind::Ident]);
        assert_eq!(kinds("∀x"), vec![ScalaSyntaxKind::Ident]);
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("λ"));
        assert!(is_valid_identifier("変数"));
        assert!(is_valid_identifier("_x"));
        assert!(is_valid_identifier("$x"));
        assert!(!is_valid_identifier("123x"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("@x"));
    }

    #[test]
    fn test_unexpected_character_is_reported_and_skipped() {
        let (tokens, errors) = lex_with_trivia("val x \u{0007} = 1");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span.start, 6);
        // Error token still preserves the byte so reconstruction holds
        let reconstructed: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(reconstructed, "val x \u{0007} = 1");
    }

    #[test]
    fn test_backquoted_identifier() {
        assert_eq!(kinds("`type`"), vec![ScalaSyntaxKind::BackquotedIdent]);
    }

    #[test]
    fn test_underscore_alone_and_in_words() {
        assert_eq!(kinds("_"), vec![ScalaSyntaxKind::Underscore]);
        assert_eq!(kinds("_x"), vec![ScalaSyntaxKind::Ident]);
        assert_eq!(kinds("x_1"), vec![ScalaSyntaxKind::Ident]);
    }
}
