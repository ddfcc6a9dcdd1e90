//! Printer that renders format elements to text
//!
//! Two-mode layout in the Prettier tradition: every group is measured
//! flat first and printed on one line when it fits the remaining
//! width, otherwise its soft line breaks become real line breaks and
//! its `IfGroupBreaks` content materializes. ASCII tokens take a bulk
//! `push_str` fast path; dynamic text goes through `unicode-width` so
//! wide characters count their display columns.

use thiserror::Error;
use unicode_width::UnicodeWidthChar;

use super::format_element::{FormatElement, flat_width};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintError {
    #[error("dedent below indentation level zero")]
    IndentUnderflow,
}

/// Options controlling the printed layout
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Maximum line width before groups break
    pub line_width: usize,
    /// Spaces per indentation level when not using tabs
    pub indent_size: usize,
    /// Indent with tabs instead of spaces
    pub use_tabs: bool,
    /// Display width of a tab character
    pub tab_width: usize,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            line_width: 80,
            indent_size: 2,
            use_tabs: false,
            tab_width: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrintMode {
    Flat,
    Expanded,
}

/// Stateful printer. One per print call.
pub struct Printer {
    options: PrinterOptions,
    buffer: String,
    /// Display column of the cursor on the current line
    column: usize,
    indent_level: usize,
    at_line_start: bool,
}

impl Printer {
    pub fn new(options: PrinterOptions) -> Self {
        Self {
            options,
            buffer: String::new(),
            column: 0,
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Render elements to a string. The top level prints in expanded
    /// mode; groups re-enter flat mode when they fit.
    pub fn print(mut self, elements: &[FormatElement]) -> Result<String, PrintError> {
        for element in elements {
            self.print_element(element, PrintMode::Expanded)?;
        }
        Ok(self.buffer)
    }

    fn print_element(&mut self, element: &FormatElement, mode: PrintMode) -> Result<(), PrintError> {
        match element {
            FormatElement::Token(s) => self.write_str(s),
            FormatElement::Text { text, .. } => {
                // Block comments may span lines; each inner line starts
                // a fresh width count
                let mut first = true;
                for line in text.split('\n') {
                    if !first {
                        self.newline();
                    }
                    self.write_str(line);
                    first = false;
                }
            }
            FormatElement::Space => self.write_str(" "),
            FormatElement::HardLineBreak => self.newline(),
            FormatElement::SoftLineBreak => {
                if mode == PrintMode::Expanded {
                    self.newline();
                }
            }
            FormatElement::SoftLineOrSpace => match mode {
                PrintMode::Flat => self.write_str(" "),
                PrintMode::Expanded => self.newline(),
            },
            FormatElement::Indent => self.indent_level += 1,
            FormatElement::Dedent => {
                self.indent_level = self
                    .indent_level
                    .checked_sub(1)
                    .ok_or(PrintError::IndentUnderflow)?;
            }
            FormatElement::Group(elements) => {
                let inner = if mode == PrintMode::Flat || self.fits(elements) {
                    PrintMode::Flat
                } else {
                    PrintMode::Expanded
                };
                for element in elements {
                    self.print_element(element, inner)?;
                }
            }
            FormatElement::Sequence(elements) => {
                for element in elements {
                    self.print_element(element, mode)?;
                }
            }
            FormatElement::IfGroupBreaks(elements) => {
                if mode == PrintMode::Expanded {
                    for element in elements {
                        self.print_element(element, mode)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Would these elements fit flat on the rest of the current line?
    fn fits(&self, elements: &[FormatElement]) -> bool {
        match flat_width(elements) {
            Some(width) => width <= self.options.line_width.saturating_sub(self.effective_column()),
            None => false,
        }
    }

    /// Column the next character lands on, counting pending indentation
    fn effective_column(&self) -> usize {
        if self.at_line_start {
            self.indent_level * self.indent_unit_width()
        } else {
            self.column
        }
    }

    fn indent_unit_width(&self) -> usize {
        if self.options.use_tabs {
            self.options.tab_width
        } else {
            self.options.indent_size
        }
    }

    fn write_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.at_line_start {
            self.write_indent();
        }
        self.buffer.push_str(s);
        if s.is_ascii() {
            self.column += s.len();
        } else {
            self.column += s.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>();
        }
    }

    fn write_indent(&mut self) {
        self.at_line_start = false;
        if self.options.use_tabs {
            for _ in 0..self.indent_level {
                self.buffer.push('\t');
            }
        } else {
            for _ in 0..self.indent_level * self.options.indent_size {
                self.buffer.push(' ');
            }
        }
        self.column = self.indent_level * self.indent_unit_width();
    }

    fn newline(&mut self) {
        // Never leave trailing whitespace behind
        while self.buffer.ends_with(' ') || self.buffer.ends_with('\t') {
            self.buffer.pop();
        }
        self.buffer.push('\n');
        self.column = 0;
        self.at_line_start = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::format_element::*;
    use rowan::TextSize;

    fn print(elements: Vec<FormatElement>, options: PrinterOptions) -> String {
        Printer::new(options).print(&elements).unwrap()
    }

    #[test]
    fn test_flat_group_stays_on_one_line() {
        let elements = vec![group(vec![
            token("("),
            soft_line_break(),
            token("a"),
            token(","),
            soft_line_or_space(),
            token("b"),
            soft_line_break(),
            token(")"),
        ])];
        assert_eq!(print(elements, PrinterOptions::default()), "(a, b)");
    }

    #[test]
    fn test_group_breaks_when_over_width() {
        let elements = vec![group(vec![
            token("("),
            indent(),
            soft_line_break(),
            token("alpha"),
            token(","),
            soft_line_or_space(),
            token("beta"),
            dedent(),
            soft_line_break(),
            token(")"),
        ])];
        let options = PrinterOptions {
            line_width: 8,
            ..PrinterOptions::default()
        };
        assert_eq!(print(elements, options), "(\n  alpha,\n  beta\n)");
    }

    #[test]
    fn test_if_group_breaks_only_in_broken_layout() {
        let make = || {
            vec![group(vec![
                token("("),
                indent(),
                soft_line_break(),
                token("x"),
                if_group_breaks(vec![token(",")]),
                dedent(),
                soft_line_break(),
                token(")"),
            ])]
        };
        assert_eq!(print(make(), PrinterOptions::default()), "(x)");
        let narrow = PrinterOptions {
            line_width: 2,
            ..PrinterOptions::default()
        };
        assert_eq!(print(make(), narrow), "(\n  x,\n)");
    }

    #[test]
    fn test_tab_indentation() {
        let elements = vec![
            token("{"),
            indent(),
            hard_line_break(),
            token("a"),
            dedent(),
            hard_line_break(),
            token("}"),
        ];
        let options = PrinterOptions {
            use_tabs: true,
            ..PrinterOptions::default()
        };
        assert_eq!(print(elements, options), "{\n\ta\n}");
    }

    #[test]
    fn test_hard_break_resets_width_budget() {
        // After the hard break the second group starts at column zero
        // and fits again
        let elements = vec![
            token("first"),
            hard_line_break(),
            group(vec![token("a"), soft_line_or_space(), token("b")]),
        ];
        let options = PrinterOptions {
            line_width: 5,
            ..PrinterOptions::default()
        };
        assert_eq!(print(elements, options), "first\na b");
    }

    #[test]
    fn test_unicode_width_counts_columns() {
        // Wide CJK characters take two columns each, so the group no
        // longer fits in eight
        let elements = vec![group(vec![
            text("日本語", TextSize::from(0)),
            soft_line_or_space(),
            token("ok"),
        ])];
        let options = PrinterOptions {
            line_width: 8,
            ..PrinterOptions::default()
        };
        assert_eq!(print(elements, options), "日本語\nok");
    }

    #[test]
    fn test_no_trailing_whitespace_before_newline() {
        let elements = vec![token("a"), space(), hard_line_break(), token("b")];
        assert_eq!(print(elements, PrinterOptions::default()), "a\nb");
    }

    #[test]
    fn test_dedent_underflow_is_an_error() {
        let result = Printer::new(PrinterOptions::default()).print(&[dedent()]);
        assert_eq!(result, Err(PrintError::IndentUnderflow));
    }
}
