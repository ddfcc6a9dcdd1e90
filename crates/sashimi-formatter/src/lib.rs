//! Sashimi Formatter
//!
//! Formatting facade over `sashimi-core`: parse-and-reprint in one
//! call, with the style options exposed under one roof.

pub use sashimi_core::{
    FormatOptions, IndentStyle, Parse, SashimiError, TrailingComma, format_source, parse,
    parse_strict,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use super::{FormatOptions, IndentStyle, TrailingComma, format_source};
}
