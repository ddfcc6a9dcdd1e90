//! Golden corpus: whole-file fixtures under `testdata/`
//!
//! Every fixture must parse without errors, reproduce its own text
//! byte for byte, and reach a formatting fixed point after one pass.

use super::parse_source;
use crate::formatter::{FormatOptions, format_source};

const FIXTURES: &[(&str, &str)] = &[
    ("simple.scala", include_str!("../../testdata/simple.scala")),
    ("matching.scala", include_str!("../../testdata/matching.scala")),
    ("control.scala", include_str!("../../testdata/control.scala")),
    ("scala3.scala", include_str!("../../testdata/scala3.scala")),
    ("build.scala", include_str!("../../testdata/build.scala")),
];

#[test]
fn test_fixtures_parse_without_errors() {
    for (name, source) in FIXTURES {
        let parse = parse_source(source);
        assert!(
            parse.is_ok(),
            "{name}: lex {:?}, parse {:?}",
            parse.lex_errors,
            parse.errors
        );
    }
}

#[test]
fn test_fixtures_round_trip_losslessly() {
    for (name, source) in FIXTURES {
        let parse = parse_source(source);
        assert_eq!(&parse.root.text().to_string(), source, "{name}");
    }
}

#[test]
fn test_fixture_formatting_reaches_a_fixed_point() {
    let options = FormatOptions::default();
    for (name, source) in FIXTURES {
        let once = format_source(source, &options).unwrap_or_else(|e| panic!("{name}: {e}"));
        let twice = format_source(&once, &options).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(once, twice, "{name} is not stable under reformatting");
    }
}

#[test]
fn test_formatted_fixtures_still_parse() {
    let options = FormatOptions::default();
    for (name, source) in FIXTURES {
        let formatted = format_source(source, &options).unwrap();
        let parse = parse_source(&formatted);
        assert!(parse.is_ok(), "{name} reformatted: {:?}", parse.errors);
    }
}
