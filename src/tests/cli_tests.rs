//! Tests for CLI argument normalization.

use crate::cli::parse_count;

#[test]
fn absent_count_defaults_to_one() {
    assert_eq!(parse_count(None), 1);
}

#[test]
fn valid_counts_parse() {
    assert_eq!(parse_count(Some("3")), 3);
    assert_eq!(parse_count(Some(" 25 ")), 25);
}

#[test]
fn non_numeric_counts_default_to_one() {
    assert_eq!(parse_count(Some("abc")), 1);
    assert_eq!(parse_count(Some("")), 1);
    assert_eq!(parse_count(Some("2.7")), 1);
}

#[test]
fn non_positive_counts_default_to_one() {
    assert_eq!(parse_count(Some("0")), 1);
    assert_eq!(parse_count(Some("-4")), 1);
}
