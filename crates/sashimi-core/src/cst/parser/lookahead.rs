//! Lookahead predicates for grammar disambiguation
//!
//! The grammar is not LL(1): several constructs share a prefix and can
//! only be told apart by scanning ahead. Each decision lives here as a
//! standalone pure function over the token slice so it can be tested in
//! isolation from the recursive-descent machinery. The pattern, type
//! and constructor scans are bounded by `LOOKAHEAD_HORIZON` significant
//! tokens; delimiter matching runs to the matching close delimiter,
//! however wide the group, since a parameter list has no fixed width.

use crate::cst::ScalaSyntaxKind;
use crate::cst::lexer::CstToken;

/// Maximum number of significant tokens a disambiguation scan may
/// inspect before giving up.
pub const LOOKAHEAD_HORIZON: usize = 20;

/// Outcome of the typed/alternative pattern scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternShape {
    Typed,
    Alternative,
    Neither,
}

/// Outcome of the function-type scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    Simple,
    Function,
    ContextFunction,
}

/// Index of the next non-trivia token at or after `pos`
pub fn next_significant(tokens: &[CstToken], mut pos: usize) -> Option<usize> {
    while pos < tokens.len() {
        if !tokens[pos].kind.is_trivia() {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Kind of the next non-trivia token at or after `pos`
fn significant_kind(tokens: &[CstToken], pos: usize) -> ScalaSyntaxKind {
    next_significant(tokens, pos)
        .map(|i| tokens[i].kind)
        .unwrap_or(ScalaSyntaxKind::Eof)
}

/// Iterate the indices of significant tokens starting at `pos`,
/// capped at the lookahead horizon.
fn significant_indices(tokens: &[CstToken], pos: usize) -> impl Iterator<Item = usize> + '_ {
    (pos..tokens.len())
        .filter(|&i| !tokens[i].kind.is_trivia())
        .take(LOOKAHEAD_HORIZON)
}

/// Lambda vs. parenthesized expression.
///
/// A bare identifier (or `_`) immediately followed by an arrow is a
/// single-parameter lambda. An open paren is scanned to its matching
/// close paren; the whole group is a lambda parameter list exactly when
/// the token after it is an arrow.
pub fn is_lambda_start(tokens: &[CstToken], pos: usize) -> bool {
    let Some(first) = next_significant(tokens, pos) else {
        return false;
    };

    match tokens[first].kind {
        ScalaSyntaxKind::Ident
        | ScalaSyntaxKind::BackquotedIdent
        | ScalaSyntaxKind::Underscore => {
            matches!(
                significant_kind(tokens, first + 1),
                ScalaSyntaxKind::Arrow | ScalaSyntaxKind::CtxArrow
            )
        }
        ScalaSyntaxKind::LParen => {
            let Some(after) = matching_close(tokens, first) else {
                return false;
            };
            matches!(
                significant_kind(tokens, after + 1),
                ScalaSyntaxKind::Arrow | ScalaSyntaxKind::CtxArrow
            )
        }
        _ => false,
    }
}

/// sbt-style top-level assignment vs. general expression.
///
/// An identifier followed by one of the fixed assignment operators at
/// lookahead positions 1-2 is an assignment statement.
pub fn is_assignment_statement(tokens: &[CstToken], pos: usize) -> bool {
    let Some(first) = next_significant(tokens, pos) else {
        return false;
    };
    if !tokens[first].kind.is_identifier() {
        return false;
    }

    let mut idx = first + 1;
    for _ in 0..2 {
        let Some(next) = next_significant(tokens, idx) else {
            return false;
        };
        if tokens[next].kind.is_sbt_assign_op() {
            return true;
        }
        idx = next + 1;
    }
    false
}

/// True when the identifier image starts with a lowercase letter (by
/// Unicode case mapping) — the binding-pattern rule.
pub fn starts_lowercase(image: &str) -> bool {
    image
        .chars()
        .next()
        .map(|c| c.is_lowercase())
        .unwrap_or(false)
}

/// Constructor/extractor pattern: a dotted identifier chain immediately
/// followed by an open paren.
pub fn is_constructor_pattern(tokens: &[CstToken], pos: usize) -> bool {
    let Some(mut idx) = next_significant(tokens, pos) else {
        return false;
    };
    if !tokens[idx].kind.is_identifier() {
        return false;
    }
    idx += 1;

    let mut inspected = 0usize;
    loop {
        inspected += 1;
        if inspected > LOOKAHEAD_HORIZON {
            return false;
        }
        match significant_kind(tokens, idx) {
            ScalaSyntaxKind::LParen => return true,
            ScalaSyntaxKind::Dot => {
                let Some(dot) = next_significant(tokens, idx) else {
                    return false;
                };
                let Some(seg) = next_significant(tokens, dot + 1) else {
                    return false;
                };
                if !tokens[seg].kind.is_identifier() {
                    return false;
                }
                idx = seg + 1;
            }
            _ => return false,
        }
    }
}

/// Typed pattern vs. alternative pattern.
///
/// Scans at most `LOOKAHEAD_HORIZON` significant tokens tracking paren
/// depth. A `:` at depth 0 before a terminator confirms a typed
/// pattern, a `|` an alternative pattern; hitting `=>`, `=` or `if`
/// first means neither applies.
pub fn scan_pattern_shape(tokens: &[CstToken], pos: usize) -> PatternShape {
    let mut depth = 0i32;

    for idx in significant_indices(tokens, pos) {
        match tokens[idx].kind {
            ScalaSyntaxKind::LParen | ScalaSyntaxKind::LBracket => depth += 1,
            ScalaSyntaxKind::RParen | ScalaSyntaxKind::RBracket => {
                depth -= 1;
                if depth < 0 {
                    return PatternShape::Neither;
                }
            }
            ScalaSyntaxKind::Colon if depth == 0 => return PatternShape::Typed,
            ScalaSyntaxKind::Pipe if depth == 0 => return PatternShape::Alternative,
            ScalaSyntaxKind::Arrow | ScalaSyntaxKind::Equals | ScalaSyntaxKind::IfKw
                if depth == 0 =>
            {
                return PatternShape::Neither;
            }
            ScalaSyntaxKind::Eof => return PatternShape::Neither,
            _ => {}
        }
    }

    PatternShape::Neither
}

/// Simple type vs. function type vs. context-function type.
///
/// From a type position, scans for a `=>` or `?=>` at nesting depth 0
/// before a token that ends the type context. Plain simple types are
/// the default when no marker is found within the horizon.
pub fn scan_type_shape(tokens: &[CstToken], pos: usize) -> TypeShape {
    let mut depth = 0i32;

    for idx in significant_indices(tokens, pos) {
        match tokens[idx].kind {
            ScalaSyntaxKind::LParen | ScalaSyntaxKind::LBracket => depth += 1,
            ScalaSyntaxKind::RParen | ScalaSyntaxKind::RBracket => {
                depth -= 1;
                if depth < 0 {
                    return TypeShape::Simple;
                }
            }
            ScalaSyntaxKind::Arrow if depth == 0 => return TypeShape::Function,
            ScalaSyntaxKind::CtxArrow if depth == 0 => return TypeShape::ContextFunction,
            ScalaSyntaxKind::Equals
            | ScalaSyntaxKind::LBrace
            | ScalaSyntaxKind::RBrace
            | ScalaSyntaxKind::Comma
            | ScalaSyntaxKind::Semicolon
            | ScalaSyntaxKind::Eof
                if depth == 0 =>
            {
                return TypeShape::Simple;
            }
            kind if kind.is_definition_keyword() && depth == 0 => return TypeShape::Simple,
            _ => {}
        }
    }

    TypeShape::Simple
}

/// Dependent/polymorphic function types and type lambdas both open
/// with a bracket clause; the arrow after the matching `]` decides
/// which production applies.
pub fn bracket_clause_arrow(tokens: &[CstToken], pos: usize) -> Option<ScalaSyntaxKind> {
    let first = next_significant(tokens, pos)?;
    if tokens[first].kind != ScalaSyntaxKind::LBracket {
        return None;
    }
    let close = matching_close(tokens, first)?;
    match significant_kind(tokens, close + 1) {
        kind @ (ScalaSyntaxKind::Arrow | ScalaSyntaxKind::TypeLambdaArrow) => Some(kind),
        _ => None,
    }
}

/// Index of the close delimiter matching the open delimiter at `open`.
/// Unbounded: the whole group is the lookahead, so the scan stops only
/// at the matching close or the end of input.
fn matching_close(tokens: &[CstToken], open: usize) -> Option<usize> {
    let (open_kind, close_kind) = match tokens[open].kind {
        ScalaSyntaxKind::LParen => (ScalaSyntaxKind::LParen, ScalaSyntaxKind::RParen),
        ScalaSyntaxKind::LBracket => (ScalaSyntaxKind::LBracket, ScalaSyntaxKind::RBracket),
        _ => return None,
    };

    let mut depth = 0i32;
    for idx in open..tokens.len() {
        let kind = tokens[idx].kind;
        if kind == open_kind {
            depth += 1;
        } else if kind == close_kind {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}
