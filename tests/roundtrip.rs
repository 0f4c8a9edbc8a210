//! File-level tests: reading, writing, and parse → write → parse cycles through the public API.

use std::fs;

use ini::{Document, Error, GLOBAL_SECTION, ParseError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE: &str = "\
x = 1
[net]
host = localhost
port = 8080
; comment
[net]
timeout = 30
";

fn scratch() -> TempDir {
    tempfile::tempdir().expect("failed to create temporary directory")
}

#[test]
fn test_read_then_write_sample_file() {
    // Arrange
    let dir = scratch();
    let input = dir.path().join("test.ini");
    let output = dir.path().join("test2.ini");
    fs::write(&input, SAMPLE).unwrap();

    // Act
    let doc = Document::read_file(&input).expect("sample must parse");
    doc.write_file(&output).expect("output must be writable");

    // Assert
    assert_eq!(doc.get(GLOBAL_SECTION, "x"), Some("1"));
    assert_eq!(doc.get("net", "timeout"), Some("30"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "x = 1\n[net]\nhost = localhost\nport = 8080\ntimeout = 30\n"
    );
}

#[test]
fn test_parse_write_parse_preserves_document() {
    let dir = scratch();
    let input = dir.path().join("in.ini");
    let output = dir.path().join("out.ini");
    fs::write(
        &input,
        "\r\n  top=level  \r\n# c\r\n[ a ]\r\nk=v=w\r\nempty =\r\n[b]\r\n=anonymous\r\n[a]\r\nk = again\r\n",
    )
    .unwrap();

    let first = Document::read_file(&input).unwrap();
    first.write_file(&output).unwrap();
    let second = Document::read_file(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.get("a", "k"), Some("again"));
    assert_eq!(second.get("a", "empty"), Some(""));
    assert_eq!(second.get("b", ""), Some("anonymous"));
    assert_eq!(second.global().get("top"), Some("level"));
}

#[test]
fn test_missing_input_is_file_open_error() {
    let dir = scratch();
    let path = dir.path().join("does-not-exist.ini");

    let err = Document::read_file(&path).unwrap_err();

    match err {
        Error::FileOpen { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected FileOpen, got {other:?}"),
    }
}

#[test]
fn test_malformed_input_is_parse_error() {
    let dir = scratch();
    let path = dir.path().join("bad.ini");
    fs::write(&path, "[s]\nk = v\nthis line is wrong\n").unwrap();

    let err = Document::read_file(&path).unwrap_err();

    assert!(matches!(
        err,
        Error::Parse {
            source: ParseError::UnrecognizedLine { line: 3, .. },
            ..
        }
    ));
}

#[test]
fn test_unwritable_output_is_write_error_and_document_is_untouched() {
    let dir = scratch();
    let doc: Document = SAMPLE.parse().unwrap();
    let before = doc.clone();
    let path = dir.path().join("missing-dir").join("out.ini");

    let err = doc.write_file(&path).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
    assert!(err.to_string().contains("out.ini"));
    assert_eq!(doc, before);
}

#[test]
fn test_write_file_truncates_existing_output() {
    let dir = scratch();
    let path = dir.path().join("out.ini");
    fs::write(&path, "stale = content\n[old]\nmore = lines\n").unwrap();

    let mut doc = Document::new();
    doc.global_mut().set("fresh", "yes");
    doc.write_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh = yes\n");
}
