//! Tests for the I/O providers and targets.

use std::fs;
use std::io::{Read, Write};

use crate::{FileInput, FileOutput, InMemorySink, InMemorySource, InputProvider, OutputTarget};

#[test]
fn in_memory_source_reads_data() {
    let src = InMemorySource::from_string("id", "hello");
    assert_eq!(src.id(), "id");

    let mut reader = src.open().expect("open in-memory source");
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello");
}

#[test]
fn in_memory_sink_replaces_previous_content_on_create() {
    let sink = InMemorySink::new("out");

    {
        let mut w = sink.create().unwrap();
        w.write_all(b"abc").unwrap();
    }
    assert_eq!(sink.contents(), b"abc".to_vec());

    {
        let mut w = sink.create().unwrap();
        w.write_all(b"def").unwrap();
    }
    assert_eq!(sink.contents_string(), "def");
}

#[test]
fn file_input_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.data");
    fs::write(&path, b"5: {\"id\":\"a\"}").unwrap();

    let inp = FileInput::new(path.clone());
    assert_eq!(inp.id(), path.to_string_lossy());

    let mut reader = inp.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "5: {\"id\":\"a\"}");
}

#[test]
fn file_output_truncates_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, b"stale").unwrap();

    let out = FileOutput::new(path.clone());
    {
        let mut w = out.create().unwrap();
        w.write_all(b"fresh").unwrap();
    }

    assert_eq!(fs::read(&path).unwrap(), b"fresh".to_vec());
}
