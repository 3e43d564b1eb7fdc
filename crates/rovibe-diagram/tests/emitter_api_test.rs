//! Integration tests for the emit pipeline
//!
//! These tests drive the public API against real files in a temporary
//! directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use rovibe_diagram::{DiagramEmitter, DiagramError, Template, emit, encode, render};

const REGULAR: &[u8] = b"\x00\x01\x00\x00regular-font-bytes";
const BOLD: &[u8] = b"\x00\x01\x00\x00bold-font-bytes!";

fn write_fonts(dir: &Path) -> (PathBuf, PathBuf) {
    let regular = dir.join("Regular.ttf");
    let bold = dir.join("Bold.ttf");
    fs::write(&regular, REGULAR).expect("Failed to write regular font");
    fs::write(&bold, BOLD).expect("Failed to write bold font");
    (regular, bold)
}

#[test]
fn test_emit_writes_rendered_document() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (regular, bold) = write_fonts(temp_dir.path());
    let output = temp_dir.path().join("diagram.svg");

    let report = emit(&regular, &bold, &output).expect("Failed to emit diagram");

    let written = fs::read_to_string(&output).expect("Failed to read output");
    let expected = render(
        encode(&regular).unwrap().as_str(),
        encode(&bold).unwrap().as_str(),
    );
    assert_eq!(written, expected);
    assert_eq!(report.output(), output.as_path());
    assert_eq!(report.bytes(), written.len());
    assert!(report.to_string().starts_with("Written: "));
}

#[test]
fn test_emit_twice_is_idempotent() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (regular, bold) = write_fonts(temp_dir.path());
    let output = temp_dir.path().join("diagram.svg");

    emit(&regular, &bold, &output).expect("Failed to emit first diagram");
    let first = fs::read(&output).expect("Failed to read first output");

    emit(&regular, &bold, &output).expect("Failed to emit second diagram");
    let second = fs::read(&output).expect("Failed to read second output");

    assert_eq!(first, second);
}

#[test]
fn test_emit_overwrites_existing_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (regular, bold) = write_fonts(temp_dir.path());
    let output = temp_dir.path().join("diagram.svg");
    fs::write(&output, "stale content that is longer than nothing").unwrap();

    let report = emit(&regular, &bold, &output).expect("Failed to emit diagram");

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("<svg"));
    assert_eq!(written.len(), report.bytes());
}

#[test]
fn test_missing_input_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (regular, _) = write_fonts(temp_dir.path());
    let missing = temp_dir.path().join("Missing-Bold.ttf");
    let output = temp_dir.path().join("diagram.svg");

    let result = emit(&regular, &missing, &output);

    match result {
        Err(DiagramError::ReadFont { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected ReadFont error, got {other:?}"),
    }
    assert!(!output.exists(), "No output should be written");
}

#[test]
fn test_unwritable_output_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (regular, bold) = write_fonts(temp_dir.path());
    let output = temp_dir.path().join("no-such-dir").join("diagram.svg");

    let result = emit(&regular, &bold, &output);

    match result {
        Err(DiagramError::WriteDiagram { path, .. }) => assert_eq!(path, output),
        other => panic!("Expected WriteDiagram error, got {other:?}"),
    }
}

#[test]
fn test_emitter_with_explicit_template() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (regular, bold) = write_fonts(temp_dir.path());

    let emitter = DiagramEmitter::new(Template::OVERVIEW);
    let document = emitter
        .render_files(&regular, &bold)
        .expect("Failed to render diagram");

    assert_eq!(emitter.template().name(), "overview");
    assert_eq!(
        document.len(),
        Template::OVERVIEW.static_len()
            + REGULAR.len().div_ceil(3) * 4
            + BOLD.len().div_ceil(3) * 4
    );
}
