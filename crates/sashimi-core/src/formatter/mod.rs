//! Formatter for the Scala CST
//!
//! Three layers: [`format_element`] is the layout IR, [`rules`] lowers
//! a parsed tree into that IR, and [`printer`] renders the IR to text
//! honoring width and indentation. The printer is only defined over
//! well-formed trees, so [`format_source`] refuses to print anything
//! that did not parse cleanly.

pub mod format_element;
pub mod printer;
mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cst::grammar::Grammar;
use crate::error::SashimiError;
use printer::PrinterOptions;
pub use rules::FormatRules;

/// Indent style, the deprecated spelling of [`FormatOptions::use_tabs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Use spaces for indentation
    Space,
    /// Use tabs for indentation
    Tab,
}

/// Trailing separator policy for multiline lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// Never add trailing separators
    #[default]
    None,
    /// Trailing separator on the last element of a broken list
    Multiline,
    /// Like `multiline`, extended to every comma-separated list
    All,
}

/// Style options, named after their configuration-file keys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Maximum line width before lists break
    #[serde(alias = "scalaLineWidth")]
    pub print_width: usize,

    /// Spaces per indentation level
    pub tab_width: usize,

    /// Indent with tabs. When unset, falls back to `indent_style`.
    pub use_tabs: Option<bool>,

    /// Deprecated alias for `use_tabs`
    pub indent_style: Option<IndentStyle>,

    /// Terminate every statement with a semicolon
    pub semi: bool,

    /// Requote plain string literals with single quotes
    pub single_quote: bool,

    /// Trailing separator policy
    pub trailing_comma: TrailingComma,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: None,
            indent_style: None,
            semi: false,
            single_quote: false,
            trailing_comma: TrailingComma::None,
        }
    }
}

impl FormatOptions {
    /// Resolve the tab setting: the explicit flag wins over the
    /// deprecated indent-style spelling.
    pub fn effective_use_tabs(&self) -> bool {
        match (self.use_tabs, self.indent_style) {
            (Some(explicit), _) => explicit,
            (None, Some(style)) => style == IndentStyle::Tab,
            (None, None) => false,
        }
    }

    pub fn printer_options(&self) -> PrinterOptions {
        PrinterOptions {
            line_width: self.print_width,
            indent_size: self.tab_width,
            use_tabs: self.effective_use_tabs(),
            tab_width: self.tab_width,
        }
    }
}

/// Parse and reprint a source file under the given style options.
///
/// Fails on the first lexical or syntax error; an errored tree never
/// reaches the printer.
pub fn format_source(source: &str, options: &FormatOptions) -> Result<String, SashimiError> {
    let parse = Grammar::get().parse(source);
    let Some(root) = parse.cst() else {
        return Err(SashimiError::from_failed_parse(&parse));
    };
    debug!(
        bytes = source.len(),
        print_width = options.print_width,
        "formatting source"
    );
    let elements = FormatRules::new(options).format_root(&root);
    let output = printer::Printer::new(options.printer_options()).print(&elements)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FormatOptions::default();
        assert_eq!(options.print_width, 80);
        assert_eq!(options.tab_width, 2);
        assert!(!options.effective_use_tabs());
        assert!(!options.semi);
        assert!(!options.single_quote);
        assert_eq!(options.trailing_comma, TrailingComma::None);
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: FormatOptions = serde_json::from_str(
            r#"{"printWidth": 100, "tabWidth": 4, "useTabs": true,
                "semi": true, "singleQuote": true, "trailingComma": "multiline"}"#,
        )
        .unwrap();
        assert_eq!(options.print_width, 100);
        assert_eq!(options.tab_width, 4);
        assert!(options.effective_use_tabs());
        assert!(options.semi);
        assert!(options.single_quote);
        assert_eq!(options.trailing_comma, TrailingComma::Multiline);
    }

    #[test]
    fn test_deprecated_line_width_alias() {
        let options: FormatOptions = serde_json::from_str(r#"{"scalaLineWidth": 120}"#).unwrap();
        assert_eq!(options.print_width, 120);
    }

    #[test]
    fn test_indent_style_alias_and_precedence() {
        let options: FormatOptions = serde_json::from_str(r#"{"indentStyle": "tab"}"#).unwrap();
        assert!(options.effective_use_tabs());

        // The explicit flag wins over the deprecated spelling
        let options: FormatOptions =
            serde_json::from_str(r#"{"useTabs": false, "indentStyle": "tab"}"#).unwrap();
        assert!(!options.effective_use_tabs());
    }

    #[test]
    fn test_format_source_basic() {
        let out = format_source("val x=42", &FormatOptions::default()).unwrap();
        assert_eq!(out, "val x = 42\n");
    }

    #[test]
    fn test_format_source_rejects_syntax_errors() {
        let err = format_source("class (", &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, SashimiError::Parse { .. }), "{err}");
    }

    #[test]
    fn test_format_source_rejects_lex_errors() {
        let err = format_source("val s = \"unterminated", &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, SashimiError::Lex { .. }), "{err}");
    }

    #[test]
    fn test_format_is_idempotent() {
        let sources = [
            "val x=42",
            "class Person(name:String,age:Int)",
            "object A { val x = 1; val y = 2 }",
            "x match { case 1 => a case _ => b }",
            "def add(a:Int,b:Int):Int = a+b",
            "for (i <- xs if i > 0) yield i * 2",
            "import scala.collection.{Map,Seq}",
            "val x = 1 // answer\n\nval y = 2",
        ];
        let options = FormatOptions::default();
        for source in sources {
            let once = format_source(source, &options).unwrap();
            let twice = format_source(&once, &options).unwrap();
            assert_eq!(once, twice, "not a fixed point for {source:?}");
        }
    }
}
