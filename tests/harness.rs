//! Shared test harness for the spec-conformance suite under `tests/`.
//!
//! Mirrors the teacher's `tests/harness.rs` + `icu_string_test!`/`ast_test!`
//! macro pattern: a thin wrapper around the crate's single entry point plus a
//! `macro_rules!` that turns `(name, input, expected)` triples into `#[test]`
//! functions, so each spec-construct file below reads as a flat table.

#![allow(dead_code)]

pub fn convert(input: &str) -> String {
    commonmark_html::convert(input)
}

/// Define one `#[test]` per case: `md_test!(name, "input", "expected html");`
#[macro_export]
macro_rules! md_test {
    ($name:ident, $input:expr, $expected:expr) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!($expected, $crate::harness::convert($input));
        }
    };
}
