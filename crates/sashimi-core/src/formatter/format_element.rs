//! Format elements for building formatted output
//!
//! The IR for formatting Scala code. It keeps the Token optimization
//! pattern from the Ruff and Biome formatters: static ASCII text
//! (keywords, operators, punctuation) takes a bulk fast path, dynamic
//! text from source (identifiers, strings, comments) takes the
//! Unicode-aware slow path.
//!
//! Layout is expressed with groups: a group prints flat when it fits
//! in the remaining line width, otherwise its soft line breaks become
//! real ones. `IfGroupBreaks` carries content that only appears in the
//! broken layout, which is how trailing commas are emitted.

use rowan::TextSize;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Format element - building block for formatted output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatElement {
    /// Static compile-time text: keywords, operators, punctuation.
    /// Must be ASCII and free of line breaks.
    Token(&'static str),

    /// Dynamic text from source: identifiers, strings, comments.
    /// May contain Unicode; tracks its source position.
    Text {
        text: Box<str>,
        source_position: TextSize,
    },

    /// Single ASCII space
    Space,

    /// Always breaks the line
    HardLineBreak,

    /// Nothing when the enclosing group is flat, a line break when it
    /// breaks
    SoftLineBreak,

    /// A space when the enclosing group is flat, a line break when it
    /// breaks
    SoftLineOrSpace,

    /// Increase indentation level
    Indent,

    /// Decrease indentation level
    Dedent,

    /// Elements kept on one line when they fit the remaining width
    Group(Vec<FormatElement>),

    /// Plain sequence of elements
    Sequence(Vec<FormatElement>),

    /// Emitted only when the enclosing group breaks; the trailing
    /// separator of multiline lists
    IfGroupBreaks(Vec<FormatElement>),
}

impl FormatElement {
    /// Check if this element produces no output in any layout
    pub fn is_empty(&self) -> bool {
        match self {
            FormatElement::Token(s) => s.is_empty(),
            FormatElement::Text { text, .. } => text.is_empty(),
            FormatElement::Space
            | FormatElement::HardLineBreak
            | FormatElement::SoftLineOrSpace => false,
            FormatElement::SoftLineBreak | FormatElement::Indent | FormatElement::Dedent => true,
            FormatElement::Group(elements)
            | FormatElement::Sequence(elements)
            | FormatElement::IfGroupBreaks(elements) => elements.iter().all(|e| e.is_empty()),
        }
    }

    /// Width of this element in the flat (one-line) layout, or `None`
    /// when the element forces a break.
    pub fn flat_width(&self) -> Option<usize> {
        match self {
            FormatElement::Token(s) => Some(s.len()),
            FormatElement::Text { text, .. } => {
                if text.contains('\n') {
                    None
                } else {
                    Some(text.width())
                }
            }
            FormatElement::Space | FormatElement::SoftLineOrSpace => Some(1),
            FormatElement::SoftLineBreak => Some(0),
            FormatElement::HardLineBreak => None,
            FormatElement::Indent | FormatElement::Dedent => Some(0),
            FormatElement::IfGroupBreaks(_) => Some(0),
            FormatElement::Group(elements) | FormatElement::Sequence(elements) => {
                flat_width(elements)
            }
        }
    }
}

/// Flat width of a sequence, `None` when any element forces a break
pub fn flat_width(elements: &[FormatElement]) -> Option<usize> {
    let mut total = 0usize;
    for element in elements {
        total += element.flat_width()?;
    }
    Some(total)
}

impl fmt::Display for FormatElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatElement::Token(s) => write!(f, "{s}"),
            FormatElement::Text { text, .. } => write!(f, "{text}"),
            FormatElement::HardLineBreak => writeln!(f),
            FormatElement::SoftLineBreak => Ok(()),
            FormatElement::SoftLineOrSpace | FormatElement::Space => write!(f, " "),
            FormatElement::Indent | FormatElement::Dedent => Ok(()),
            FormatElement::IfGroupBreaks(_) => Ok(()),
            FormatElement::Group(elements) | FormatElement::Sequence(elements) => {
                for element in elements {
                    write!(f, "{element}")?;
                }
                Ok(())
            }
        }
    }
}

/// Builder API: static, ASCII-only text
///
/// # Panics
///
/// In debug builds, panics if `text` is not ASCII or contains line
/// breaks or tabs.
pub fn token(text: &'static str) -> FormatElement {
    debug_assert!(text.is_ascii(), "Token must be ASCII only, got: {text:?}");
    debug_assert!(
        !text.contains(['\n', '\r', '\t']),
        "Token cannot contain newlines/tabs, use HardLineBreak/Space instead: {text:?}"
    );
    FormatElement::Token(text)
}

/// Builder API: dynamic text from source content
pub fn text(text: &str, position: TextSize) -> FormatElement {
    FormatElement::Text {
        text: text.into(),
        source_position: position,
    }
}

pub fn space() -> FormatElement {
    FormatElement::Space
}

/// Always inserts a newline
pub fn hard_line_break() -> FormatElement {
    FormatElement::HardLineBreak
}

/// Nothing when flat, a newline when the group breaks
pub fn soft_line_break() -> FormatElement {
    FormatElement::SoftLineBreak
}

/// A space when flat, a newline when the group breaks
pub fn soft_line_or_space() -> FormatElement {
    FormatElement::SoftLineOrSpace
}

pub fn indent() -> FormatElement {
    FormatElement::Indent
}

pub fn dedent() -> FormatElement {
    FormatElement::Dedent
}

/// Elements kept on one line if they fit within the line width
pub fn group(elements: Vec<FormatElement>) -> FormatElement {
    FormatElement::Group(elements)
}

pub fn sequence(elements: Vec<FormatElement>) -> FormatElement {
    FormatElement::Sequence(elements)
}

/// Content that only appears when the enclosing group breaks
pub fn if_group_breaks(elements: Vec<FormatElement>) -> FormatElement {
    FormatElement::IfGroupBreaks(elements)
}

/// Join elements with a separator, skipping empty items
pub fn join(items: Vec<FormatElement>, separator: FormatElement) -> FormatElement {
    let mut out = Vec::with_capacity(items.len() * 2);
    for item in items {
        if item.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(separator.clone());
        }
        out.push(item);
    }
    FormatElement::Sequence(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let elem = token("class");
        assert_eq!(elem, FormatElement::Token("class"));
    }

    #[test]
    fn test_text_tracks_source_position() {
        let elem = text("λdeparture", TextSize::from(10));
        match elem {
            FormatElement::Text {
                text,
                source_position,
            } => {
                assert_eq!(&*text, "λdeparture");
                assert_eq!(source_position, TextSize::from(10));
            }
            _ => panic!("Expected Text variant"),
        }
    }

    #[test]
    fn test_flat_width_measures_unicode() {
        // "λ" is one column wide even though it is two bytes
        let elements = vec![token("val"), space(), text("λ", TextSize::from(4))];
        assert_eq!(flat_width(&elements), Some(5));
    }

    #[test]
    fn test_hard_break_has_no_flat_width() {
        let elements = vec![token("a"), hard_line_break(), token("b")];
        assert_eq!(flat_width(&elements), None);
    }

    #[test]
    fn test_if_group_breaks_is_invisible_flat() {
        let elements = vec![token("a"), if_group_breaks(vec![token(",")])];
        assert_eq!(flat_width(&elements), Some(1));
    }

    #[test]
    fn test_join_skips_empty_items() {
        let joined = join(
            vec![token("a"), FormatElement::Sequence(vec![]), token("b")],
            token(", "),
        );
        assert_eq!(format!("{joined}"), "a, b");
    }
}
