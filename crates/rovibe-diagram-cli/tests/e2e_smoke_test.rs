use std::{fs, path::Path};

use tempfile::tempdir;

use rovibe_diagram::{DiagramError, Template};
use rovibe_diagram_cli::{Args, run};

fn args_for(dir: &Path) -> Args {
    Args {
        regular: Some(dir.join("Regular.ttf").to_string_lossy().to_string()),
        bold: Some(dir.join("Bold.ttf").to_string_lossy().to_string()),
        output: Some(dir.join("rovibe-diagram.svg").to_string_lossy().to_string()),
        template: None,
        config: None,
        log_level: "off".to_string(),
    }
}

fn write_fonts(dir: &Path) {
    fs::write(dir.join("Regular.ttf"), [0u8, 1, 0, 0, 0x10, 0x20, 0x30]).unwrap();
    fs::write(dir.join("Bold.ttf"), [0u8, 1, 0, 0, 0x40, 0x50]).unwrap();
}

#[test]
fn e2e_generates_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fonts(temp_dir.path());
    let args = args_for(temp_dir.path());

    let report = run(&args).expect("Run should succeed");

    let output = temp_dir.path().join("rovibe-diagram.svg");
    let document = fs::read_to_string(&output).expect("Output should exist");
    assert!(document.starts_with("<svg"));
    assert!(document.ends_with("</svg>"));
    assert!(document.contains("base64,AAEAABAgMA=='"));
    assert!(document.contains("base64,AAEAAEBQ'"));
    assert_eq!(report.bytes(), document.len());
    assert_eq!(
        report.bytes(),
        Template::OVERVIEW.static_len() + 12 + 8
    );
}

#[test]
fn e2e_missing_font_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(temp_dir.path());

    let result = run(&args);

    assert!(matches!(result, Err(DiagramError::ReadFont { .. })));
    assert!(!temp_dir.path().join("rovibe-diagram.svg").exists());
}

#[test]
fn e2e_unwritable_output_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fonts(temp_dir.path());
    let args = Args {
        output: Some(
            temp_dir
                .path()
                .join("missing")
                .join("out.svg")
                .to_string_lossy()
                .to_string(),
        ),
        ..args_for(temp_dir.path())
    };

    let result = run(&args);

    assert!(matches!(result, Err(DiagramError::WriteDiagram { .. })));
}

#[test]
fn e2e_fonts_from_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fonts(temp_dir.path());
    let output = temp_dir.path().join("from-config.svg");
    let config_path = temp_dir.path().join("config.toml");
    let config = format!(
        "[fonts]\nregular = {:?}\nbold = {:?}\n\n[output]\npath = {:?}\ntemplate = \"overview\"\n",
        temp_dir.path().join("Regular.ttf").to_string_lossy(),
        temp_dir.path().join("Bold.ttf").to_string_lossy(),
        output.to_string_lossy(),
    );
    fs::write(&config_path, config).unwrap();

    let args = Args {
        regular: None,
        bold: None,
        output: None,
        template: None,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let report = run(&args).expect("Run should succeed");

    assert_eq!(report.output(), output.as_path());
    assert!(output.exists());
}

#[test]
fn e2e_repeated_runs_are_identical() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fonts(temp_dir.path());
    let args = args_for(temp_dir.path());
    let output = temp_dir.path().join("rovibe-diagram.svg");

    run(&args).expect("First run should succeed");
    let first = fs::read(&output).unwrap();
    run(&args).expect("Second run should succeed");
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}
