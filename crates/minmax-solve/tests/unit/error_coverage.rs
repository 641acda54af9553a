//! Error reporting across the acquire-compute-write path.

use minmax_solve::{Counted, Error, Extremum, Layout, Materialized, Outcome, Result, solve};

fn run(input: &str, layout: Layout, extremum: Extremum) -> Result<Outcome> {
    solve(Counted::new(input.as_bytes(), layout), extremum, Vec::new())
}

#[test]
fn test_zero_count_is_empty_input() {
    for layout in [Layout::Tokens, Layout::Lines] {
        let err = run("0\n", layout, Extremum::Max).unwrap_err();
        assert_eq!(err.to_string(), "cannot compute maximum of 0 numbers");
        assert!(err.is_input_error());
    }
}

#[test]
fn test_empty_materialized_sequence() {
    let err = solve(Materialized(Vec::new()), Extremum::Min, Vec::new()).unwrap_err();
    let Error::EmptyInput { extremum } = err else {
        unreachable!("Expected EmptyInput error");
    };
    assert_eq!(extremum, Extremum::Min);
}

#[test]
fn test_short_input_reports_counts() {
    let err = run("4\n1 2\n", Layout::Tokens, Extremum::Max).unwrap_err();
    assert_eq!(err.to_string(), "expected 4 numbers, got 2");
}

#[test]
fn test_non_numeric_value() {
    let err = run("2\n1 two\n", Layout::Tokens, Extremum::Max).unwrap_err();
    assert_eq!(err.to_string(), "invalid number \"two\"");
    let std_err: &dyn std::error::Error = &err;
    assert!(std_err.source().is_some());
}

#[test]
fn test_non_numeric_value_in_values_line() {
    let err = run("2\n1 two\n", Layout::Lines, Extremum::Max).unwrap_err();
    assert_eq!(err.to_string(), "malformed values line");
    assert!(err.is_input_error());
    let std_err: &dyn std::error::Error = &err;
    assert!(std_err.source().is_some());
}

#[test]
fn test_out_of_range_value() {
    let err = run("1\n9223372036854775808\n", Layout::Tokens, Extremum::Max).unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { .. }));
}

#[test]
fn test_invalid_utf8_value_is_input_error() {
    let source = Counted::new(&b"1\n\xff\n"[..], Layout::Tokens);
    let err = solve(source, Extremum::Max, Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_invalid_utf8_after_values_is_ignored() {
    let mut sink = Vec::new();
    let source = Counted::new(&b"2\n4 9\n\xfe\xff"[..], Layout::Tokens);
    let outcome = solve(source, Extremum::Max, &mut sink).unwrap();
    assert_eq!(outcome, Outcome::Written(9));
    assert_eq!(sink, b"9\n");
}

#[test]
fn test_malformed_count_before_invalid_utf8_is_silent() {
    for layout in [Layout::Tokens, Layout::Lines] {
        let mut sink = Vec::new();
        let source = Counted::new(&b"abc\n\xff\n"[..], layout);
        let outcome = solve(source, Extremum::Max, &mut sink).unwrap();
        assert_eq!(outcome, Outcome::NoInput);
        assert!(sink.is_empty());
    }
}

#[test]
fn test_unreadable_source_is_io_error() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    let source = Counted::new(std::io::BufReader::new(Broken), Layout::Tokens);
    let err = solve(source, Extremum::Max, Vec::new()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_input_error());
}
