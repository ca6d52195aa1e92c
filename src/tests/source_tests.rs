//! Tests for line streaming.

use crate::error::PipelineError;
use crate::io::{FileInput, InMemorySource};
use crate::source::LineSource;

fn lines_of(data: &str) -> Vec<String> {
    let src = InMemorySource::from_string("mem", data);
    LineSource::open(&src)
        .expect("open in-memory source")
        .map(|l| l.expect("read line"))
        .collect()
}

#[test]
fn splits_on_lf_and_crlf() {
    assert_eq!(lines_of("a\r\nb\nc\n"), ["a", "b", "c"]);
}

#[test]
fn final_line_need_not_be_terminated() {
    assert_eq!(lines_of("a\nb"), ["a", "b"]);
}

#[test]
fn empty_input_yields_no_lines() {
    assert!(lines_of("").is_empty());
}

#[test]
fn blank_lines_are_preserved_for_the_parser() {
    // Skipping empties is the parser's job, not the source's.
    assert_eq!(lines_of("a\n\nb\n"), ["a", "", "b"]);
}

#[test]
fn missing_file_fails_with_resource_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does_not_exist.data");
    let input = FileInput::new(path.clone());

    let err = match LineSource::open(&input) {
        Err(e) => e,
        Ok(_) => panic!("open should fail for a missing file"),
    };

    match &err {
        PipelineError::Resource { path: p, .. } => {
            assert_eq!(p, &path.to_string_lossy().into_owned());
        }
        other => panic!("expected resource error, got {other:?}"),
    }
    assert_eq!(err.exit_code(), crate::error::EXIT_RESOURCE);
}
